//! In-memory contact settings store

use async_trait::async_trait;
use isoportal_interfaces::{ContactSettings, ContactSettingsRepository, RepositoryError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryContactSettings {
    settings: RwLock<Option<ContactSettings>>,
}

impl InMemoryContactSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ContactSettings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

#[async_trait]
impl ContactSettingsRepository for InMemoryContactSettings {
    async fn load(&self) -> Result<Option<ContactSettings>, RepositoryError> {
        Ok(self.settings.read().await.clone())
    }

    async fn save(&self, settings: ContactSettings) -> Result<(), RepositoryError> {
        *self.settings.write().await = Some(settings);
        Ok(())
    }
}
