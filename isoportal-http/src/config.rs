//! MBM client configuration

use std::time::Duration;

use isoportal_config::SourceConfig;
use url::Url;

use crate::errors::HttpError;

/// Connection settings for the MBM API
#[derive(Debug, Clone)]
pub struct MbmConfig {
    /// Base URL, without a trailing slash
    pub base_url: Url,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl MbmConfig {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Ok(Self {
            base_url: Url::parse(base_url.trim_end_matches('/'))?,
            timeout: Duration::from_secs(30),
            user_agent: format!("isoportal/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TryFrom<&SourceConfig> for MbmConfig {
    type Error = HttpError;

    fn try_from(config: &SourceConfig) -> Result<Self, Self::Error> {
        let base_url = config
            .mbm_base_url
            .as_deref()
            .ok_or_else(|| HttpError::ConfigError("mbm_base_url is not set".to_string()))?;
        Ok(Self::new(base_url)?.with_timeout(config.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_config() {
        let source = SourceConfig {
            mbm_base_url: Some("http://localhost:5050/".to_string()),
            timeout: Duration::from_secs(4),
            ..Default::default()
        };
        let config = MbmConfig::try_from(&source).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5050/");
        assert_eq!(config.timeout, Duration::from_secs(4));

        assert!(MbmConfig::try_from(&SourceConfig::default()).is_err());
    }
}
