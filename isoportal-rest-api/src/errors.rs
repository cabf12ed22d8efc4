//! REST API error type and its HTTP mapping

use axum::response::{IntoResponse, Response};
use isoportal_core::contact::ContactError;
use isoportal_core::PortalError;
use isoportal_interfaces::{RepositoryError, SourceError};
use isoportal_web::WebError;
use thiserror::Error;
use tracing::{error, warn};

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error(transparent)]
    Portal(#[from] PortalError),

    #[error(transparent)]
    Web(#[from] WebError),

    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    pub fn not_found(code: &str) -> Self {
        RestError::Web(WebError::not_found(format!("Isotank '{}' not found", code)))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        RestError::Web(WebError::forbidden(message))
    }

    /// The HTTP-facing error for this failure
    pub fn into_web_error(self) -> WebError {
        match self {
            RestError::Web(err) => err,
            RestError::Export(err) => WebError::internal(format!("CSV export failed: {}", err)),
            RestError::Portal(err) => portal_to_web(err),
        }
    }
}

fn portal_to_web(err: PortalError) -> WebError {
    match err {
        PortalError::Source(SourceError::Unavailable { message }) => {
            warn!(%message, "Inventory source unavailable");
            WebError::service_unavailable("Inventory source is temporarily unavailable")
        }
        PortalError::Source(SourceError::InvalidResponse { message }) => {
            error!(%message, "Inventory source returned an invalid response");
            WebError::bad_gateway("Inventory source returned an invalid response")
        }
        PortalError::Source(SourceError::Internal { message }) => WebError::internal(message),
        PortalError::Repository(RepositoryError::NotFound { entity, id }) => {
            WebError::not_found(format!("{} '{}' not found", entity, id))
        }
        PortalError::Repository(RepositoryError::Validation { message }) => WebError::bad_request(message),
        PortalError::Repository(RepositoryError::Connection { message }) => {
            warn!(%message, "Repository connection failed");
            WebError::service_unavailable("Storage is temporarily unavailable")
        }
        PortalError::Repository(RepositoryError::Internal { message }) => WebError::internal(message),
        PortalError::Contact(ContactError::NotConfigured { missing }) => {
            WebError::service_unavailable(format!("Contact by e-mail is not configured: missing {}", missing))
        }
        PortalError::Mail(err) => {
            error!(error = %err, "Contact mail delivery failed");
            WebError::bad_gateway(format!("Could not deliver the message: {}", err))
        }
        PortalError::Validation(message) => WebError::bad_request(message),
        PortalError::NotFound(code) => WebError::not_found(format!("Isotank '{}' not found", code)),
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.into_web_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use isoportal_interfaces::MailError;

    fn status_of(err: impl Into<RestError>) -> StatusCode {
        err.into().into_web_error().status_code()
    }

    #[test]
    fn test_portal_error_mapping() {
        assert_eq!(
            status_of(PortalError::Source(SourceError::unavailable("timeout"))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(PortalError::Source(SourceError::InvalidResponse { message: "html".into() })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(PortalError::Contact(ContactError::NotConfigured { missing: "SMTP host" })),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(PortalError::Mail(MailError::Transport { message: "refused".into() })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status_of(PortalError::Validation("bad".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(PortalError::NotFound("X".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(PortalError::Repository(RepositoryError::Validation { message: "empty".into() })),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_configured_names_missing_setting() {
        let web = RestError::from(PortalError::Contact(ContactError::NotConfigured {
            missing: "destination email",
        }))
        .into_web_error();
        assert!(web.to_string().contains("destination email"));
    }
}
