//! In-process inventory source
//!
//! Serves a fixed record set, either the built-in demonstration seed or a
//! JSON fixture file. Pushdown semantics match the remote MBM adapter so the
//! engine behaves the same against either source.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use isoportal_api_types::status::{self, status_eq};
use isoportal_api_types::ContainerRecord;
use isoportal_interfaces::{CandidateQuery, InventorySource, SourceError};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::seed;

pub struct LocalInventorySource {
    records: RwLock<Vec<ContainerRecord>>,
    online: AtomicBool,
}

impl LocalInventorySource {
    pub fn new(mut records: Vec<ContainerRecord>) -> Self {
        records.sort_by(|a, b| a.code.cmp(&b.code));
        Self {
            records: RwLock::new(records),
            online: AtomicBool::new(true),
        }
    }

    /// Demonstration inventory dated relative to `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let records = seed::inventory(today);
        info!(count = records.len(), "Seeded local inventory");
        Self::new(records)
    }

    /// Load records from a JSON array file
    pub async fn from_fixture(path: impl AsRef<Path>) -> StorageResult<Self> {
        let records = read_fixture(path.as_ref()).await?;
        Ok(Self::new(records))
    }

    /// Replace the record set with the contents of a fixture file
    pub async fn reload(&self, path: impl AsRef<Path>) -> StorageResult<usize> {
        let mut records = read_fixture(path.as_ref()).await?;
        records.sort_by(|a, b| a.code.cmp(&b.code));
        let count = records.len();
        *self.records.write().await = records;
        info!(count, path = %path.as_ref().display(), "Reloaded local inventory");
        Ok(count)
    }

    /// Simulate the upstream going away. While offline every call fails
    /// with [`SourceError::Unavailable`].
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), SourceError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SourceError::unavailable("local inventory is offline"))
        }
    }
}

async fn read_fixture(path: &Path) -> StorageResult<Vec<ContainerRecord>> {
    let content = tokio::fs::read_to_string(path).await?;
    let records: Vec<ContainerRecord> = serde_json::from_str(&content)?;
    if records.is_empty() {
        return Err(StorageError::InvalidFixture(format!(
            "{} contains no records",
            path.display()
        )));
    }
    debug!(count = records.len(), path = %path.display(), "Read inventory fixture");
    Ok(records)
}

fn matches_query(record: &ContainerRecord, query: &CandidateQuery) -> bool {
    if let Some(client) = query.client.as_deref() {
        if record.client != client {
            return false;
        }
    }
    if let Some(wanted) = query.status.as_deref() {
        if !status_eq(&record.status, wanted) {
            return false;
        }
    }
    match query.search.as_deref() {
        Some(search) => record.matches_search(search),
        None => true,
    }
}

#[async_trait]
impl InventorySource for LocalInventorySource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<ContainerRecord>, SourceError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|record| matches_query(record, query))
            .cloned()
            .collect())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Option<ContainerRecord>, SourceError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|record| record.code.eq_ignore_ascii_case(code.trim()))
            .cloned())
    }

    async fn fetch_distinct_clients(&self) -> Result<Vec<String>, SourceError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        let clients: BTreeSet<&str> = records
            .iter()
            .map(|record| record.client.trim())
            .filter(|client| !client.is_empty())
            .collect();
        Ok(clients.into_iter().map(str::to_string).collect())
    }

    async fn fetch_status_catalog(&self) -> Result<Vec<String>, SourceError> {
        self.ensure_online()?;
        Ok(status::CATALOG.iter().map(|s| s.to_string()).collect())
    }

    async fn health_check(&self) -> Result<(), SourceError> {
        self.ensure_online()
    }
}
