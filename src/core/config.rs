//! Configuration management for the MCP server.
//!
//! A single structure populated from environment variables (with dotenv
//! support) at startup. Credential presence is decided here, once; the
//! tools domain reads it to decide what to register.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::transport::TransportConfig;

/// Default upstream endpoint.
pub const DEFAULT_API_URL: &str = "https://api.shipyard.dev/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Shipyard API credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    // Resources are registered in domains/resources/registry.rs
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    // Prompts are registered in domains/prompts/registry.rs
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    pub level: String,
}

/// Shipyard API credentials.
///
/// `api_key` has no default: without it the server starts, but every
/// credential-gated tool stays unregistered.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer token for the Shipyard API.
    pub api_key: Option<String>,

    /// Base URL of the Shipyard API.
    pub api_url: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "shipyard-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_SHIPYARD_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        match std::env::var("MCP_SHIPYARD_API_KEY") {
            Ok(key) if !key.is_empty() => {
                config.credentials.api_key = Some(key);
                info!("Shipyard API key loaded from environment");
            }
            _ => {
                warn!(
                    "MCP_SHIPYARD_API_KEY is not set - Shipyard tools will not be \
                     registered. Create a token in the Shipyard dashboard and export \
                     it to enable them."
                );
            }
        }

        if let Ok(url) = std::env::var("MCP_SHIPYARD_API_URL") {
            config.credentials.api_url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SHIPYARD_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var("MCP_SHIPYARD_API_KEY");
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_SHIPYARD_API_KEY");
            std::env::remove_var("MCP_SHIPYARD_API_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_key, None);
        assert_eq!(config.credentials.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SHIPYARD_API_URL", "http://localhost:8111/v1");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_url, "http://localhost:8111/v1");
        unsafe {
            std::env::remove_var("MCP_SHIPYARD_API_URL");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_key: Some("super_secret_token".to_string()),
            api_url: DEFAULT_API_URL.to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
