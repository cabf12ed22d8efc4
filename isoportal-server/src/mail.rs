//! Mail sink used when no SMTP relay is wired in
//!
//! The portal composes the full message and hands it here. The sink records
//! it in the log and reports success, so the contact form works end to end
//! on a workstation.

use async_trait::async_trait;
use isoportal_interfaces::{EmailSink, MailError, OutgoingMail};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailSink;

#[async_trait]
impl EmailSink for TracingMailSink {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if mail.to.trim().is_empty() {
            return Err(MailError::Rejected {
                message: "no recipient".to_string(),
            });
        }

        info!(
            to = %mail.to,
            reply_to = mail.reply_to.as_deref().unwrap_or("-"),
            subject = %mail.subject,
            smtp_host = %mail.credentials.host,
            smtp_port = mail.credentials.port,
            body_len = mail.body.len(),
            "Contact mail accepted"
        );
        Ok(())
    }
}
