//! Configuration management for Deskboard
//!
//! This module handles loading, parsing, and validating configuration from
//! a YAML file, environment variables, and CLI overrides, in that
//! precedence order.

use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::error::{DeskboardError, Result};

/// Main configuration structure for Deskboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote gateway client configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Local proxy server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Remote gateway client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the conversation API, typically the local proxy
    #[serde(default = "default_gateway_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_gateway_timeout")]
    pub timeout_seconds: u64,
}

fn default_gateway_base_url() -> String {
    "http://localhost:3000/api/v1".to_string()
}

fn default_gateway_timeout() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_gateway_base_url(),
            timeout_seconds: default_gateway_timeout(),
        }
    }
}

/// Local proxy server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the proxy listens on
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Full base URL of the real gateway host the proxy forwards to
    /// (e.g. `https://desk.example.com`). Required for `serve`.
    #[serde(default)]
    pub upstream_url: String,
}

fn default_server_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            upstream_url: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file, then apply environment overrides
    ///
    /// A missing file is not an error; defaults are used and a warning is
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns [`DeskboardError::Config`] when the file exists but cannot
    /// be read or parsed.
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DeskboardError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| DeskboardError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("DESKBOARD_GATEWAY_URL") {
            self.gateway.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("DESKBOARD_GATEWAY_TIMEOUT") {
            if let Ok(seconds) = timeout.parse() {
                self.gateway.timeout_seconds = seconds;
            } else {
                tracing::warn!("Ignoring non-numeric DESKBOARD_GATEWAY_TIMEOUT: {}", timeout);
            }
        }
        if let Ok(port) = std::env::var("DESKBOARD_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            } else {
                tracing::warn!("Ignoring non-numeric DESKBOARD_PORT: {}", port);
            }
        }
        if let Ok(upstream) = std::env::var("DESKBOARD_UPSTREAM_URL") {
            self.server.upstream_url = upstream;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`DeskboardError::Config`] for an unparseable gateway or
    /// upstream URL, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.gateway.base_url).map_err(|e| {
            DeskboardError::Config(format!(
                "gateway.base_url '{}' is not a valid URL: {}",
                self.gateway.base_url, e
            ))
        })?;

        if self.gateway.timeout_seconds == 0 {
            return Err(
                DeskboardError::Config("gateway.timeout_seconds must be positive".to_string())
                    .into(),
            );
        }

        if !self.server.upstream_url.is_empty() {
            Url::parse(&self.server.upstream_url).map_err(|e| {
                DeskboardError::Config(format!(
                    "server.upstream_url '{}' is not a valid URL: {}",
                    self.server.upstream_url, e
                ))
            })?;
        }

        Ok(())
    }
}

/// Default config file location
///
/// Resolves to the platform config directory (`~/.config/deskboard` on
/// Linux), falling back to a relative path when no home directory exists.
pub fn default_config_path() -> String {
    directories::ProjectDirs::from("", "", "deskboard")
        .map(|dirs| {
            dirs.config_dir()
                .join("config.yaml")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "config/config.yaml".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("DESKBOARD_GATEWAY_URL");
        std::env::remove_var("DESKBOARD_GATEWAY_TIMEOUT");
        std::env::remove_var("DESKBOARD_PORT");
        std::env::remove_var("DESKBOARD_UPSTREAM_URL");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::default();
        assert_eq!(config.gateway.base_url, "http://localhost:3000/api/v1");
        assert_eq!(config.gateway.timeout_seconds, 30);
        assert_eq!(config.server.port, 3000);
        assert!(config.server.upstream_url.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        clear_env();
        let config = Config::load("/nonexistent/deskboard.yaml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    #[serial]
    fn test_load_from_yaml_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "gateway:\n  base_url: http://localhost:9000/api/v1\n  timeout_seconds: 5\nserver:\n  port: 8080\n  upstream_url: https://desk.example.com"
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.gateway.timeout_seconds, 5);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.upstream_url, "https://desk.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_invalid_yaml_is_an_error() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gateway: [not, a, mapping]").unwrap();
        assert!(Config::load(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    #[serial]
    fn test_env_vars_override_file() {
        clear_env();
        std::env::set_var("DESKBOARD_GATEWAY_URL", "http://localhost:4000/api/v1");
        std::env::set_var("DESKBOARD_PORT", "4001");

        let config = Config::load("/nonexistent/deskboard.yaml").unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:4000/api/v1");
        assert_eq!(config.server.port, 4001);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_non_numeric_env_port_is_ignored() {
        clear_env();
        std::env::set_var("DESKBOARD_PORT", "not-a-port");
        let config = Config::load("/nonexistent/deskboard.yaml").unwrap();
        assert_eq!(config.server.port, 3000);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_gateway_url() {
        clear_env();
        let mut config = Config::default();
        config.gateway.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_validate_rejects_zero_timeout() {
        clear_env();
        let mut config = Config::default();
        config.gateway.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_upstream_url() {
        clear_env();
        let mut config = Config::default();
        config.server.upstream_url = "::nope::".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_path_is_not_empty() {
        assert!(!default_config_path().is_empty());
    }
}
