//! Inventory source port
//!
//! An inventory source answers coarse, pushdown-style queries. Everything
//! finer (multi-status filters, date windows, sorting, paging, aggregation)
//! happens in memory in the engine after the fetch.

use async_trait::async_trait;
use isoportal_api_types::ContainerRecord;
use serde::{Deserialize, Serialize};

/// Inventory source error type
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The upstream could not be reached. Callers must surface this as
    /// "service unavailable", never as an empty result.
    #[error("Inventory source unavailable: {message}")]
    Unavailable { message: String },

    #[error("Invalid response from inventory source: {message}")]
    InvalidResponse { message: String },

    #[error("Internal inventory source error: {message}")]
    Internal { message: String },
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Coarse filters pushed down to the source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuery {
    /// Exact owning client
    pub client: Option<String>,
    /// Exact single status
    pub status: Option<String>,
    /// Substring on code or product
    pub search: Option<String>,
}

impl CandidateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Short name used in logs and health reports
    fn name(&self) -> &'static str;

    /// Fetch the candidate set for a request, ordered by code
    async fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<ContainerRecord>, SourceError>;

    /// Look up one record. A missing code is `Ok(None)`, not an error.
    async fn fetch_by_code(&self, code: &str) -> Result<Option<ContainerRecord>, SourceError>;

    /// Distinct client names, sorted
    async fn fetch_distinct_clients(&self) -> Result<Vec<String>, SourceError>;

    /// Status catalog in display order
    async fn fetch_status_catalog(&self) -> Result<Vec<String>, SourceError>;

    /// Check if the source is healthy and can serve requests
    async fn health_check(&self) -> Result<(), SourceError>;
}
