//! Storage error types

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Fixture file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file is not a JSON array of records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture content is structurally valid but unusable
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}
