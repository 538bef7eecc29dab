//! Shared context handed to every tool invocation.

use std::sync::Arc;

use tracing::warn;

use crate::api::ApiClient;
use crate::core::config::Config;

/// Everything a tool handler needs: today, just the Shipyard client.
///
/// Built exactly once at startup, and only when the API credential is
/// configured - the credential check is an initialization decision, not a
/// per-call conditional. Holds no mutable state, so one instance is
/// shared across all concurrent invocations.
pub struct ToolContext {
    pub api: ApiClient,
}

impl ToolContext {
    /// Build the context from configuration, or `None` when the Shipyard
    /// credential is absent (in which case no API tools are registered at
    /// all, rather than registered-and-failing).
    pub fn from_config(config: &Config) -> Option<Arc<Self>> {
        match ApiClient::new(&config.credentials) {
            Ok(api) => Some(Arc::new(Self { api })),
            Err(e) => {
                warn!("Shipyard tools disabled: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    #[test]
    fn test_context_requires_api_key() {
        let mut config = Config::default();
        config.credentials = CredentialsConfig {
            api_key: None,
            api_url: "https://api.shipyard.dev/v1".to_string(),
        };
        assert!(ToolContext::from_config(&config).is_none());
    }

    #[test]
    fn test_context_built_with_api_key() {
        let mut config = Config::default();
        config.credentials = CredentialsConfig {
            api_key: Some("token".to_string()),
            api_url: "https://api.shipyard.dev/v1".to_string(),
        };
        assert!(ToolContext::from_config(&config).is_some());
    }
}
