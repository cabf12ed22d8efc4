//! Contact defaults

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, Validatable};
use serde::{Deserialize, Serialize};

/// Contact and SMTP values used when no stored setting overrides them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactDefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    #[serde(default = "crate::domains::utils::default_true")]
    pub smtp_enable_ssl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
}

impl Default for ContactDefaultsConfig {
    fn default() -> Self {
        Self {
            destination_email: None,
            whatsapp_number: None,
            team_name: "Depotce".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_enable_ssl: true,
            smtp_user: None,
            smtp_password: None,
            from_email: None,
            from_name: None,
        }
    }
}

impl Validatable for ContactDefaultsConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_port_range(self.smtp_port, "smtp_port", self.domain_name())?;

        for (field, value) in [
            ("destination_email", &self.destination_email),
            ("from_email", &self.from_email),
        ] {
            if let Some(email) = value.as_deref().filter(|e| !e.trim().is_empty()) {
                if !email.contains('@') {
                    return Err(self.validation_error(format!("{} is not an email address: {}", field, email)));
                }
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "contact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_defaults() {
        let config = ContactDefaultsConfig::default();
        assert_eq!(config.team_name, "Depotce");
        assert_eq!(config.smtp_port, 587);
        assert!(config.smtp_enable_ssl);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let config = ContactDefaultsConfig {
            destination_email: Some("atendimento".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
