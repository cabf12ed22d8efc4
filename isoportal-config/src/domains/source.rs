//! Inventory source selection

use crate::error::ConfigResult;
use crate::validation::{validate_positive, validate_url, Validatable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Which inventory source backs the portal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Seeded in-process inventory, or a JSON fixture
    #[default]
    Local,
    /// Remote MBM inventory API
    Mbm,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(SourceKind::Local),
            "mbm" => Ok(SourceKind::Mbm),
            _ => Err(format!("Invalid source kind: {}", s)),
        }
    }
}

/// Inventory source configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,

    /// Base URL of the MBM API, required for `mbm`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbm_base_url: Option<String>,

    /// Request timeout for the remote source
    #[serde(with = "crate::domains::utils::serde_duration")]
    pub timeout: Duration,

    /// JSON fixture replacing the seeded local inventory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Local,
            mbm_base_url: None,
            timeout: Duration::from_secs(30),
            fixture_path: None,
        }
    }
}

impl Validatable for SourceConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.timeout.as_secs(), "timeout", self.domain_name())?;

        if self.kind == SourceKind::Mbm {
            let Some(url) = self.mbm_base_url.as_deref() else {
                return Err(self.validation_error("mbm_base_url is required when kind is mbm"));
            };
            validate_url(url, "mbm_base_url", self.domain_name())?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "source"
    }
}
