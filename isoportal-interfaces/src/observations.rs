//! Observation repository port

use async_trait::async_trait;
use isoportal_api_types::Observation;

/// Common repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Internal repository error: {message}")]
    Internal { message: String },
}

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Notes for one container, newest first
    async fn list_for(&self, container_code: &str) -> Result<Vec<Observation>, RepositoryError>;

    async fn append(&self, observation: Observation) -> Result<Observation, RepositoryError>;
}
