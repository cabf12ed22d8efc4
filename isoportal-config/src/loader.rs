//! Configuration loading and environment variable handling

use crate::domains::logging::{LogFormat, LogLevel};
use crate::domains::source::SourceKind;
use crate::domains::PortalConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "ISOPORTAL".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<PortalConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: PortalConfig = if content.trim().is_empty() {
            PortalConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<PortalConfig> {
        let mut config = PortalConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load from the file when it exists, otherwise from the environment
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<PortalConfig> {
        match config_path {
            Some(path) if path.as_ref().exists() => self.from_file(path),
            Some(path) => {
                tracing::debug!(path = %path.as_ref().display(), "Config file not found, using environment");
                self.from_env()
            }
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut PortalConfig) -> ConfigResult<()> {
        if let Some(bind) = self.get_env_var("SERVER_BIND_ADDRESS") {
            config.server.bind_address = bind;
        }
        if let Some(port) = self.get_env_var("SERVER_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SERVER_PORT: {}", e)))?;
        }

        if let Some(level) = self.get_env_var("LOG_LEVEL") {
            config.logging.level = LogLevel::from_str(&level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", level)))?;
        }
        if let Some(format) = self.get_env_var("LOG_FORMAT") {
            config.logging.format = LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        if let Some(kind) = self.get_env_var("SOURCE_KIND") {
            config.source.kind = SourceKind::from_str(&kind).map_err(ConfigError::EnvError)?;
        }
        if let Some(url) = self.get_env_var("MBM_BASE_URL") {
            config.source.mbm_base_url = Some(url);
        }
        if let Some(timeout) = self.get_env_var("SOURCE_TIMEOUT") {
            let seconds: u64 = timeout
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid SOURCE_TIMEOUT: {}", e)))?;
            config.source.timeout = std::time::Duration::from_secs(seconds);
        }

        if let Some(password) = self.get_env_var("SMTP_PASSWORD") {
            config.contact.smtp_password = Some(password);
        }

        Ok(())
    }

    /// Get a non-empty environment variable with prefix
    fn get_env_var(&self, name: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, name))
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
