//! Unified error shape for the HTTP API

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional detailed error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// HTTP status code for REST API
    #[serde(skip)]
    pub status_code: u16,
}

impl ApiError {
    /// Create a new API error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            status_code: 500,
        }
    }

    /// Set the HTTP status code
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// Add detailed information
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} '{}' not found", resource, id)).with_status(404)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message).with_status(400)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message).with_status(401)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("FORBIDDEN", message).with_status(403)
    }

    pub fn service_unavailable(message: Option<&str>) -> Self {
        Self::new(
            "SERVICE_UNAVAILABLE",
            message.unwrap_or("Service temporarily unavailable"),
        )
        .with_status(503)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message).with_status(500)
    }

    pub fn validation_error(field: &str, message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
            .with_status(400)
            .with_details(serde_json::json!({ "field": field }))
    }

    /// HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        self.status_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(ApiError::not_found("Isotank", "X").http_status_code(), 404);
        assert_eq!(ApiError::forbidden("no").http_status_code(), 403);
        assert_eq!(ApiError::service_unavailable(None).http_status_code(), 503);
        assert_eq!(ApiError::validation_error("pageSize", "bad").code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_status_code_is_not_serialized() {
        let value = serde_json::to_value(ApiError::bad_request("oops")).unwrap();
        assert_eq!(value["code"], "BAD_REQUEST");
        assert!(value.get("statusCode").is_none());
        assert!(value.get("status_code").is_none());
    }
}
