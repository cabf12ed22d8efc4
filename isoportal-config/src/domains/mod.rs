//! Domain-specific configuration modules

pub mod contact;
pub mod logging;
pub mod reporting;
pub mod server;
pub mod source;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main portal configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    /// HTTP server configuration
    pub server: server::ServerConfig,

    /// Logging configuration
    pub logging: logging::LoggingConfig,

    /// Inventory source selection
    pub source: source::SourceConfig,

    /// Report thresholds and windows
    pub reporting: reporting::ReportingConfig,

    /// Contact defaults used when nothing is stored
    pub contact: contact::ContactDefaultsConfig,
}

impl PortalConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.source.validate()?;
        self.reporting.validate()?;
        self.contact.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = PortalConfig::default();
        serde_yaml::to_string(&config).unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PortalConfig::default().validate_all().is_ok());
    }

    #[test]
    fn test_sample_parses_back() {
        let sample = PortalConfig::generate_sample();
        let parsed: PortalConfig = serde_yaml::from_str(&sample).unwrap();
        assert_eq!(parsed, PortalConfig::default());
    }
}
