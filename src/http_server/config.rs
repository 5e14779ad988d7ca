//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address and CORS origins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP server configuration errors
#[derive(Debug, Error)]
pub enum HttpConfigError {
    /// A configuration value could not be parsed
    #[error("invalid value for {0}: {1}")]
    InvalidEnv(&'static str, String),
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, which allows any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Build the configuration from `HTTP_HOST` and `HTTP_PORT`, falling
    /// back to defaults for anything unset. An unparseable `HTTP_PORT` is
    /// rejected, matching the database config's treatment of `SQL_PORT`.
    pub fn from_env() -> Result<Self, HttpConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HttpConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup("HTTP_HOST") {
            config.host = host;
        }
        if let Some(raw) = lookup("HTTP_PORT") {
            config.port = raw
                .parse::<u16>()
                .map_err(|_| HttpConfigError::InvalidEnv("HTTP_PORT", raw))?;
        }
        Ok(config)
    }

    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_lookup_overrides_applied() {
        let config = HttpServerConfig::from_lookup(|name| match name {
            "HTTP_HOST" => Some("127.0.0.1".to_string()),
            "HTTP_PORT" => Some("9000".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_lookup_defaults_when_unset() {
        let config = HttpServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_bad_port_rejected() {
        let err = HttpServerConfig::from_lookup(|name| match name {
            "HTTP_PORT" => Some("not-a-port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, HttpConfigError::InvalidEnv("HTTP_PORT", _)));
    }
}
