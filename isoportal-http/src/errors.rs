//! HTTP error types

use isoportal_interfaces::SourceError;

/// Error type for MBM client operations
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<HttpError> for SourceError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::NetworkError(ref inner) if inner.is_decode() => SourceError::InvalidResponse {
                message: err.to_string(),
            },
            HttpError::NetworkError(_) | HttpError::UpstreamStatus { .. } => SourceError::Unavailable {
                message: err.to_string(),
            },
            HttpError::InvalidJson(_) => SourceError::InvalidResponse {
                message: err.to_string(),
            },
            HttpError::InvalidUrl(_) | HttpError::ConfigError(_) => SourceError::Internal {
                message: err.to_string(),
            },
        }
    }
}
