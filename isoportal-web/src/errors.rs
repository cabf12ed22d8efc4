//! Web-specific error types and conversions
//!
//! Every error leaving the HTTP surface is rendered through [`ApiError`], so
//! clients always see the same `{"error":{"code","message"}}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use isoportal_api_types::ApiError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Message returned in place of internal error details
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Bad gateway: {message}")]
    BadGateway { message: String },

    #[error("Validation error: {errors:?}")]
    Validation { errors: Vec<ValidationError> },
}

/// Validation error details
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
    pub code: String,
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest { .. } | WebError::Validation { .. } => StatusCode::BAD_REQUEST,
            WebError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            WebError::Forbidden { .. } => StatusCode::FORBIDDEN,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            WebError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            WebError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            WebError::BadRequest { .. } => "BAD_REQUEST",
            WebError::Unauthorized { .. } => "UNAUTHORIZED",
            WebError::Forbidden { .. } => "FORBIDDEN",
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            WebError::BadGateway { .. } => "BAD_GATEWAY",
            WebError::Internal { .. } => "INTERNAL_ERROR",
            WebError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let WebError::Internal { message } = &self {
            error!(%message, "Internal error while handling request");
        }
        let body = json!({ "error": ApiError::from(self) });
        (status, Json(body)).into_response()
    }
}

// Internal details never reach the client
impl From<WebError> for ApiError {
    fn from(error: WebError) -> Self {
        let status = error.status_code().as_u16();
        let code = error.error_code();
        match error {
            WebError::BadRequest { message }
            | WebError::Unauthorized { message }
            | WebError::Forbidden { message }
            | WebError::NotFound { message }
            | WebError::ServiceUnavailable { message }
            | WebError::BadGateway { message } => ApiError::new(code, message).with_status(status),
            WebError::Internal { .. } => ApiError::new(code, INTERNAL_MESSAGE).with_status(status),
            WebError::Validation { errors } => {
                let message = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field.as_deref().unwrap_or("field"), e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                ApiError::new(code, message)
                    .with_status(status)
                    .with_details(json!(errors))
            }
        }
    }
}

impl From<ApiError> for WebError {
    fn from(api_error: ApiError) -> Self {
        let message = api_error.message;
        match api_error.status_code {
            400 => WebError::BadRequest { message },
            401 => WebError::Unauthorized { message },
            403 => WebError::Forbidden { message },
            404 => WebError::NotFound { message },
            502 => WebError::BadGateway { message },
            503 => WebError::ServiceUnavailable { message },
            _ => WebError::Internal { message },
        }
    }
}

// Common error constructors
impl WebError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        WebError::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        WebError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        WebError::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        WebError::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        WebError::Internal {
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        WebError::ServiceUnavailable {
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        WebError::BadGateway {
            message: message.into(),
        }
    }

    pub fn validation_single(field: Option<String>, message: impl Into<String>) -> Self {
        WebError::Validation {
            errors: vec![ValidationError {
                field,
                message: message.into(),
                code: "VALIDATION_FAILED".to_string(),
            }],
        }
    }
}
