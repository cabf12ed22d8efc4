//! MBM inventory client

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use isoportal_api_types::ContainerRecord;
use isoportal_core::{Clock, SystemClock};
use isoportal_interfaces::{CandidateQuery, InventorySource, SourceError};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

use crate::config::MbmConfig;
use crate::dto::IsotanqueDto;
use crate::errors::HttpError;

/// [`InventorySource`] backed by the MBM HTTP API
#[derive(Clone)]
pub struct MbmClient {
    client: Client,
    config: MbmConfig,
    /// Anchors start dates rebuilt from `diasNoStatus`
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for MbmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MbmClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MbmClient {
    pub fn new(config: MbmConfig) -> Result<Self, HttpError> {
        debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Creating MBM client"
        );
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            config,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// `{base}{path}` followed by any extra path segments, each percent-encoded
    fn endpoint(&self, path: &str, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = Url::parse(&format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        ))?;
        if !segments.is_empty() {
            let url_str = url.to_string();
            url.path_segments_mut()
                .map_err(|_| HttpError::ConfigError(format!("{} cannot take path segments", url_str)))?
                .extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, HttpError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn map_records(&self, list: Vec<IsotanqueDto>) -> Vec<ContainerRecord> {
        let today = self.clock.today();
        list.into_iter().map(|dto| dto.into_record(today)).collect()
    }
}

fn log_failure(operation: &str, err: HttpError) -> SourceError {
    error!(operation, error = %err, "MBM request failed");
    err.into()
}

#[async_trait]
impl InventorySource for MbmClient {
    fn name(&self) -> &'static str {
        "mbm"
    }

    async fn fetch_candidates(&self, query: &CandidateQuery) -> Result<Vec<ContainerRecord>, SourceError> {
        let mut url = self
            .endpoint("/api/isotanques", &[])
            .map_err(|e| log_failure("list", e))?;
        {
            let mut pairs = url.query_pairs_mut();
            let params = [
                ("cliente", &query.client),
                ("status", &query.status),
                ("busca", &query.search),
            ];
            for (name, value) in params {
                if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                    pairs.append_pair(name, value);
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let list: Vec<IsotanqueDto> = self.get_json(url).await.map_err(|e| log_failure("list", e))?;
        info!(count = list.len(), "Fetched isotanks from MBM");
        Ok(self.map_records(list))
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Option<ContainerRecord>, SourceError> {
        let url = self
            .endpoint("/api/isotanques", &[code.trim()])
            .map_err(|e| log_failure("lookup", e))?;

        match self.get_json::<IsotanqueDto>(url).await {
            Ok(dto) => Ok(self.map_records(vec![dto]).pop()),
            Err(HttpError::UpstreamStatus { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                debug!(code, "Isotank not found in MBM");
                Ok(None)
            }
            Err(err) => Err(log_failure("lookup", err)),
        }
    }

    async fn fetch_distinct_clients(&self) -> Result<Vec<String>, SourceError> {
        let url = self
            .endpoint("/api/clientes", &[])
            .map_err(|e| log_failure("clients", e))?;
        let mut clients: Vec<String> = self.get_json(url).await.map_err(|e| log_failure("clients", e))?;
        clients.retain(|c| !c.trim().is_empty());
        clients.sort();
        clients.dedup();
        Ok(clients)
    }

    async fn fetch_status_catalog(&self) -> Result<Vec<String>, SourceError> {
        let url = self
            .endpoint("/api/status", &[])
            .map_err(|e| log_failure("statuses", e))?;
        self.get_json(url).await.map_err(|e| log_failure("statuses", e))
    }

    async fn health_check(&self) -> Result<(), SourceError> {
        self.fetch_status_catalog().await.map(|_| ())
    }
}
