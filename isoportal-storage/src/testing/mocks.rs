//! Mock implementations for testing
//!
//! Use these when a test needs to assert what the engine pushes down to a
//! port, or to inject failures the in-memory stores never produce.

use async_trait::async_trait;
use isoportal_api_types::{ContainerRecord, Observation};
use isoportal_interfaces::{
    CandidateQuery, ContactSettings, ContactSettingsRepository, EmailSink, InventorySource, MailError,
    ObservationRepository, OutgoingMail, RepositoryError, SourceError,
};
use mockall::mock;

mock! {
    pub Inventory {}

    #[async_trait]
    impl InventorySource for Inventory {
        fn name(&self) -> &'static str;
        async fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<ContainerRecord>, SourceError>;
        async fn fetch_by_code(&self, code: &str) -> Result<Option<ContainerRecord>, SourceError>;
        async fn fetch_distinct_clients(&self) -> Result<Vec<String>, SourceError>;
        async fn fetch_status_catalog(&self) -> Result<Vec<String>, SourceError>;
        async fn health_check(&self) -> Result<(), SourceError>;
    }
}

mock! {
    pub Mailer {}

    #[async_trait]
    impl EmailSink for Mailer {
        async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
    }
}

mock! {
    pub ContactStore {}

    #[async_trait]
    impl ContactSettingsRepository for ContactStore {
        async fn load(&self) -> Result<Option<ContactSettings>, RepositoryError>;
        async fn save(&self, settings: ContactSettings) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ObservationStore {}

    #[async_trait]
    impl ObservationRepository for ObservationStore {
        async fn list_for(&self, container_code: &str) -> Result<Vec<Observation>, RepositoryError>;
        async fn append(&self, observation: Observation) -> Result<Observation, RepositoryError>;
    }
}

impl MockInventory {
    /// A source named "mock" that returns `records` for any candidate query
    pub fn returning(records: Vec<ContainerRecord>) -> Self {
        let mut mock = Self::new();
        mock.expect_name().return_const("mock");
        mock.expect_fetch_candidates()
            .returning(move |_| Ok(records.clone()));
        mock
    }
}
