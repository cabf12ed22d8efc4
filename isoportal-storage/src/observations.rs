//! In-memory observation log

use std::collections::HashMap;

use async_trait::async_trait;
use isoportal_api_types::Observation;
use isoportal_interfaces::{ObservationRepository, RepositoryError};
use tokio::sync::RwLock;

/// Notes keyed by upper-cased container code
#[derive(Default)]
pub struct InMemoryObservations {
    entries: RwLock<HashMap<String, Vec<Observation>>>,
}

impl InMemoryObservations {
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(code: &str) -> String {
    code.trim().to_uppercase()
}

#[async_trait]
impl ObservationRepository for InMemoryObservations {
    async fn list_for(&self, container_code: &str) -> Result<Vec<Observation>, RepositoryError> {
        let entries = self.entries.read().await;
        let mut notes = entries.get(&key(container_code)).cloned().unwrap_or_default();
        notes.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(notes)
    }

    async fn append(&self, observation: Observation) -> Result<Observation, RepositoryError> {
        if observation.text.trim().is_empty() {
            return Err(RepositoryError::Validation {
                message: "observation text must not be empty".to_string(),
            });
        }
        self.entries
            .write()
            .await
            .entry(key(&observation.container_code))
            .or_default()
            .push(observation.clone());
        Ok(observation)
    }
}
