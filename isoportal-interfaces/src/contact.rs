//! Contact settings and outbound mail ports

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::observations::RepositoryError;

/// Stored contact and SMTP settings
///
/// Every field is optional: a missing field falls back to the configured
/// default for that field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSettings {
    pub destination_email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub team_name: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_enable_ssl: Option<bool>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
}

#[async_trait]
pub trait ContactSettingsRepository: Send + Sync {
    async fn load(&self) -> Result<Option<ContactSettings>, RepositoryError>;

    async fn save(&self, settings: ContactSettings) -> Result<(), RepositoryError>;
}

/// Credentials for the SMTP session the sink opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub host: String,
    pub port: u16,
    pub enable_ssl: bool,
    pub user: Option<String>,
    pub password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
}

/// A fully composed contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
    pub credentials: SmtpCredentials,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport error: {message}")]
    Transport { message: String },

    #[error("Mail rejected: {message}")]
    Rejected { message: String },
}

#[async_trait]
pub trait EmailSink: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
