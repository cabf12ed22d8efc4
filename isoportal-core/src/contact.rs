//! Contact settings resolution and message composition
//!
//! Stored settings override configured defaults field by field. Composition
//! is pure; sending goes through the [`EmailSink`](isoportal_interfaces::EmailSink) port.

use isoportal_interfaces::{ContactSettings, OutgoingMail, SmtpCredentials};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TEAM_NAME: &str = "Depotce";
pub const DEFAULT_FROM_NAME: &str = "Portal do Cliente Depotce";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SUBJECT: &str = "Solicitação";
const LINE_BREAK: &str = "\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// A setting required to send mail is missing
    #[error("Contact delivery not configured: missing {missing}")]
    NotConfigured { missing: &'static str },
}

fn pick(stored: &Option<String>, fallback: &Option<String>) -> Option<String> {
    let clean = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    clean(stored).or_else(|| clean(fallback))
}

/// Contact settings after stored values and defaults are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveContact {
    pub destination_email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub team_name: String,
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_enable_ssl: bool,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: Option<String>,
}

impl EffectiveContact {
    pub fn resolve(stored: Option<&ContactSettings>, defaults: &ContactSettings) -> Self {
        let empty = ContactSettings::default();
        let stored = stored.unwrap_or(&empty);

        // The stored password only applies together with a stored SMTP user
        let smtp_password = if pick(&stored.smtp_user, &None).is_some() {
            stored.smtp_password.clone()
        } else {
            defaults.smtp_password.clone()
        };

        Self {
            destination_email: pick(&stored.destination_email, &defaults.destination_email),
            whatsapp_number: pick(&stored.whatsapp_number, &defaults.whatsapp_number),
            team_name: pick(&stored.team_name, &defaults.team_name)
                .unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string()),
            smtp_host: pick(&stored.smtp_host, &defaults.smtp_host),
            smtp_port: stored.smtp_port.or(defaults.smtp_port).unwrap_or(DEFAULT_SMTP_PORT),
            smtp_enable_ssl: stored.smtp_enable_ssl.or(defaults.smtp_enable_ssl).unwrap_or(true),
            smtp_user: pick(&stored.smtp_user, &defaults.smtp_user),
            smtp_password,
            from_email: pick(&stored.from_email, &defaults.from_email),
            from_name: pick(&stored.from_name, &defaults.from_name),
        }
    }

    /// Whether the portal can send mail itself rather than only show addresses
    pub fn can_send_from_site(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_user.is_some()
    }
}

/// Public contact details shown to any visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub team_name: String,
    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email_enabled: bool,
}

impl From<&EffectiveContact> for ContactInfo {
    fn from(contact: &EffectiveContact) -> Self {
        Self {
            team_name: contact.team_name.clone(),
            email: contact.destination_email.clone(),
            whatsapp_number: contact.whatsapp_number.clone(),
            email_enabled: contact.can_send_from_site(),
        }
    }
}

/// A contact form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub code: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Who is writing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Normalise an isotank code typed by a user
pub fn normalize_code(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_uppercase()
}

/// Compose the outgoing mail for a contact request.
///
/// Fails when there is no destination address or no SMTP host.
pub fn compose(
    contact: &EffectiveContact,
    request: &ContactRequest,
    sender: &Sender,
) -> Result<OutgoingMail, ContactError> {
    let to = contact
        .destination_email
        .clone()
        .ok_or(ContactError::NotConfigured { missing: "destination email" })?;
    let host = contact
        .smtp_host
        .clone()
        .ok_or(ContactError::NotConfigured { missing: "SMTP host" })?;

    let code = normalize_code(request.code.as_deref());
    let subject = request
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SUBJECT);
    let message = request.message.as_deref().filter(|m| !m.trim().is_empty());

    let mut body = format!("Olá, {}!", contact.team_name);
    if !code.is_empty() {
        body.push_str(&format!("{LINE_BREAK}{LINE_BREAK}Isotank: {code}"));
    }
    body.push_str(&format!("{LINE_BREAK}Assunto: {subject}"));
    match message {
        Some(message) => body.push_str(&format!("{LINE_BREAK}{LINE_BREAK}{message}")),
        None if code.is_empty() => {
            body.push_str(&format!("{LINE_BREAK}{LINE_BREAK}Gostaria de obter informações."))
        }
        None => {}
    }
    body.push_str(&format!(
        "{LINE_BREAK}{LINE_BREAK}---{LINE_BREAK}Enviado pelo Portal do Cliente por {} ({})",
        sender.name.as_deref().unwrap_or("Cliente"),
        sender.email.as_deref().unwrap_or("—"),
    ));

    let mail_subject = if code.is_empty() {
        format!("[Portal Depotce] {subject}")
    } else {
        format!("[Portal Depotce] {subject} – {code}")
    };

    let from_email = contact.from_email.clone().unwrap_or_else(|| to.clone());

    Ok(OutgoingMail {
        to,
        reply_to: sender.email.clone().filter(|e| !e.trim().is_empty()),
        subject: mail_subject,
        body,
        credentials: SmtpCredentials {
            host,
            port: contact.smtp_port,
            enable_ssl: contact.smtp_enable_ssl,
            user: contact.smtp_user.clone(),
            password: contact.smtp_password.clone(),
            from_email: Some(from_email),
            from_name: Some(
                contact
                    .from_name
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            ),
        },
    })
}

/// Merge an admin's update into the stored settings. An empty password keeps
/// the stored one.
pub fn merge_for_save(existing: Option<ContactSettings>, mut incoming: ContactSettings) -> ContactSettings {
    let keep_password = incoming
        .smtp_password
        .as_deref()
        .is_none_or(str::is_empty);
    if keep_password {
        incoming.smtp_password = existing.and_then(|settings| settings.smtp_password);
    }
    incoming
}

/// Settings as returned to admins; the password never leaves the server
pub fn masked(mut settings: ContactSettings) -> ContactSettings {
    settings.smtp_password = None;
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ContactSettings {
        ContactSettings {
            destination_email: Some("atendimento@depotce.com.br".into()),
            smtp_host: Some("smtp.depotce.com.br".into()),
            smtp_user: Some("portal".into()),
            smtp_password: Some("from-config".into()),
            ..Default::default()
        }
    }

    fn sender() -> Sender {
        Sender {
            name: Some("Ana Souza".into()),
            email: Some("ana@alpha.com".into()),
        }
    }

    #[test]
    fn test_stored_values_override_defaults_field_by_field() {
        let stored = ContactSettings {
            team_name: Some("Equipe Santos".into()),
            smtp_host: Some("  ".into()),
            ..Default::default()
        };
        let effective = EffectiveContact::resolve(Some(&stored), &defaults());
        assert_eq!(effective.team_name, "Equipe Santos");
        assert_eq!(effective.smtp_host.as_deref(), Some("smtp.depotce.com.br"));
        assert_eq!(effective.smtp_port, 587);
        assert_eq!(effective.smtp_password.as_deref(), Some("from-config"));
        assert!(effective.can_send_from_site());
    }

    #[test]
    fn test_team_name_defaults() {
        let effective = EffectiveContact::resolve(None, &ContactSettings::default());
        assert_eq!(effective.team_name, DEFAULT_TEAM_NAME);
        assert!(!effective.can_send_from_site());
    }

    #[test]
    fn test_compose_with_code_and_message() {
        let effective = EffectiveContact::resolve(None, &defaults());
        let request = ContactRequest {
            code: Some(" dhdu1274480 ".into()),
            subject: Some("Prazo".into()),
            message: Some("Qual a previsão?".into()),
        };
        let mail = compose(&effective, &request, &sender()).unwrap();
        assert_eq!(mail.subject, "[Portal Depotce] Prazo – DHDU1274480");
        assert_eq!(
            mail.body,
            "Olá, Depotce!\r\n\r\nIsotank: DHDU1274480\r\nAssunto: Prazo\r\n\r\nQual a previsão?\r\n\r\n---\r\nEnviado pelo Portal do Cliente por Ana Souza (ana@alpha.com)"
        );
        assert_eq!(mail.reply_to.as_deref(), Some("ana@alpha.com"));
        assert_eq!(mail.credentials.from_email.as_deref(), Some("atendimento@depotce.com.br"));
        assert_eq!(mail.credentials.from_name.as_deref(), Some(DEFAULT_FROM_NAME));
    }

    #[test]
    fn test_compose_empty_request_uses_default_line() {
        let effective = EffectiveContact::resolve(None, &defaults());
        let mail = compose(&effective, &ContactRequest::default(), &Sender::default()).unwrap();
        assert_eq!(mail.subject, "[Portal Depotce] Solicitação");
        assert!(mail.body.contains("Assunto: Solicitação\r\n\r\nGostaria de obter informações."));
        assert!(mail.body.ends_with("por Cliente (—)"));
        assert!(mail.reply_to.is_none());
    }

    #[test]
    fn test_compose_requires_destination_and_host() {
        let mut settings = defaults();
        settings.destination_email = None;
        let effective = EffectiveContact::resolve(None, &settings);
        assert_eq!(
            compose(&effective, &ContactRequest::default(), &sender()).unwrap_err(),
            ContactError::NotConfigured { missing: "destination email" }
        );

        let mut settings = defaults();
        settings.smtp_host = None;
        let effective = EffectiveContact::resolve(None, &settings);
        assert_eq!(
            compose(&effective, &ContactRequest::default(), &sender()).unwrap_err(),
            ContactError::NotConfigured { missing: "SMTP host" }
        );
    }

    #[test]
    fn test_empty_password_keeps_stored_one() {
        let existing = ContactSettings {
            smtp_password: Some("secret".into()),
            ..Default::default()
        };
        let incoming = ContactSettings {
            smtp_host: Some("smtp.new".into()),
            smtp_password: Some(String::new()),
            ..Default::default()
        };
        let merged = merge_for_save(Some(existing), incoming);
        assert_eq!(merged.smtp_password.as_deref(), Some("secret"));
        assert_eq!(masked(merged).smtp_password, None);
    }
}
