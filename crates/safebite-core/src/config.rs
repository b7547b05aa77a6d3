//! Configuration management for the `SafeBite` dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web shell server configuration
    pub webserver: WebServerConfig,

    /// Backend API configuration
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web shell server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Bearer token attached to proxied requests, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8090
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("safebite").required(false))
            .add_source(config::Environment::with_prefix("SAFEBITE").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("SAFEBITE_BACKEND_URL")
            .unwrap_or_else(|_| default_backend_url());

        Self {
            webserver: WebServerConfig {
                host: default_host(),
                port: default_port(),
            },
            backend: BackendConfig {
                base_url,
                api_token: None,
                request_timeout: default_request_timeout(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.webserver.host, "0.0.0.0");
        assert_eq!(config.webserver.port, 8090);

        assert!(config.backend.base_url.starts_with("http"));
        assert!(config.backend.api_token.is_none());
        assert_eq!(config.backend.request_timeout, 30);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.webserver.host, config.webserver.host);
        assert_eq!(deserialized.webserver.port, config.webserver.port);
        assert_eq!(deserialized.backend.base_url, config.backend.base_url);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "webserver": {"host": "localhost"},
            "backend": {"base_url": "http://api.internal:9000"}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.webserver.host, "localhost");
        assert_eq!(config.webserver.port, 8090); // Uses default
        assert_eq!(config.backend.base_url, "http://api.internal:9000");
        assert_eq!(config.backend.request_timeout, 30); // Uses default
    }

    #[test]
    fn test_api_token_skipped_when_absent() {
        let config = Config::default();
        let serialized = serde_json::to_string(&config).unwrap();

        assert!(!serialized.contains("api_token"));
    }

    #[test]
    fn test_config_bounds() {
        let config = Config::default();

        assert!(config.webserver.port > 0);
        assert!(config.backend.request_timeout > 0);
        assert!(!config.logging.level.is_empty());
        assert!(!config.logging.format.is_empty());
    }
}
