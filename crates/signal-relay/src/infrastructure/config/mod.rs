//! Configuration loading for the signal relay
//!
//! Settings come from an optional JSON file and are then overridden by
//! environment variables:
//! - `HOST` / `PORT` for the listen address
//! - `LOG_FORMAT` (`text` or `json`) for log output
//! - `RUST_LOG` is read directly by the tracing subscriber

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Service name used in startup logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_name() -> String {
    "TradingView Signal Relay".to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `HOST`, `PORT` and `LOG_FORMAT` from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT".to_string(),
                    value: port.clone(),
                })?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = match format.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "pretty" => LogFormat::Text,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT".to_string(),
                        value: format,
                    });
                }
            };
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Fallback filter when `RUST_LOG` is unset
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = RelayConfig::from_json("{}").unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "name": "relay-eu",
            "server": { "host": "127.0.0.1", "port": 8080 },
            "logging": { "format": "json", "filter": "signal_relay=debug" }
        }"#;

        let config = RelayConfig::from_json(json).unwrap();
        assert_eq!(config.name, "relay-eu");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.logging.filter.as_deref(),
            Some("signal_relay=debug")
        );
    }

    #[test]
    fn test_parse_error() {
        let err = RelayConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RelayConfig::from_file("/nonexistent/relay.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RelayConfig::default();
        config
            .apply_overrides(env(&[("HOST", "127.0.0.1"), ("PORT", "9000"), ("LOG_FORMAT", "JSON")]))
            .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = RelayConfig::default();
        let err = config.apply_overrides(env(&[("PORT", "http")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: "http".to_string()
            }
        );
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut config = RelayConfig::default();
        config
            .apply_overrides(env(&[("HOST", " "), ("PORT", "")]))
            .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_no_overrides_keeps_file_values() {
        let mut config = RelayConfig::from_json(r#"{"server": {"port": 7000}}"#).unwrap();
        config.apply_overrides(env(&[])).unwrap();
        assert_eq!(config.server.port, 7000);
    }
}
