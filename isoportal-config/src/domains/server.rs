//! HTTP server configuration

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: String,

    /// Server port
    pub port: u16,

    /// Prefix every API route is mounted under
    pub api_prefix: String,

    /// CORS configuration
    pub cors: CorsConfig,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            api_prefix: "/api/v1".to_string(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// `address:port` for binding the listener
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Validatable for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.bind_address, "bind_address", self.domain_name())?;
        validate_port_range(self.port, "port", self.domain_name())?;

        if !self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/') {
            return Err(self.validation_error(format!(
                "api_prefix must start with '/' and not end with one, got '{}'",
                self.api_prefix
            )));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(self.validation_error("cors.allowed_origins cannot be empty"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_address(), "127.0.0.1:8080");
        assert_eq!(config.api_prefix, "/api/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.api_prefix = "api/".to_string();
        assert!(config.validate().is_err());
    }
}
