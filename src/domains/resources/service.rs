//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Resources
//! are defined in `definitions/` and registered via `registry.rs`;
//! adding one does not touch this file.

use std::collections::HashMap;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ResourcesConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Configuration for the resources domain.
    #[allow(dead_code)]
    config: ResourcesConfig,

    /// Registry of available resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Resource content variants.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content (markdown documentation).
    Text(String),

    /// Content computed at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server build and capability information.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service.templates = get_all_resource_templates();

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": "shipyard-mcp",
                    "version": env!("CARGO_PKG_VERSION"),
                    "upstream": "Shipyard REST API",
                    "capabilities": ["tools", "resources", "prompts"],
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new(ResourcesConfig::default());

        let resources = service.list_resources().await;
        assert!(!resources.is_empty());
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = ResourceService::new(ResourcesConfig::default());

        let result = service.read_resource("shipyard://docs/getting-started").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = ResourceService::new(ResourcesConfig::default());

        let result = service.read_resource("shipyard://server/info").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new(ResourcesConfig::default());

        let result = service.read_resource("shipyard://nonexistent").await;
        assert!(result.is_err());
    }
}
