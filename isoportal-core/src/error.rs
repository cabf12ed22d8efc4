//! Core error types for the portal engine

use isoportal_interfaces::{MailError, RepositoryError, SourceError};
use thiserror::Error;

use crate::contact::ContactError;

/// Core error type for engine operations
#[derive(Debug, Error)]
pub enum PortalError {
    /// Inventory source failures, including "upstream unavailable"
    #[error("Inventory source error: {0}")]
    Source(#[from] SourceError),

    /// Settings or observation persistence errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Contact composition errors
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Outbound mail errors
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// Invalid caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A container code that the source does not know
    #[error("Isotank not found: {0}")]
    NotFound(String),
}

impl PortalError {
    /// Whether the error means the upstream inventory could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PortalError::Source(err) if err.is_unavailable())
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PortalError>;
