//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    DeploymentGuideResource, GettingStartedResource, ResourceDefinition, ServerInfoResource,
    ToolReferenceResource,
};
use super::service::ResourceEntry;

/// Build an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<GettingStartedResource>(),
        build_resource::<ToolReferenceResource>(),
        build_resource::<DeploymentGuideResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "shipyard://docs/{document}".to_string(),
            name: "Documentation".to_string(),
            title: Some("Server Documentation".to_string()),
            description: Some("Access documentation by document name".to_string()),
            mime_type: Some("text/markdown".to_string()),
        }
        .no_annotation(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        GettingStartedResource::URI,
        ToolReferenceResource::URI,
        DeploymentGuideResource::URI,
        ServerInfoResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 4);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"shipyard://docs/getting-started"));
        assert!(uris.contains(&"shipyard://docs/tool-reference"));
        assert!(uris.contains(&"shipyard://docs/deployment-guide"));
        assert!(uris.contains(&"shipyard://server/info"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "shipyard://docs/{document}");
    }

    #[test]
    fn test_resource_uris_match_registry() {
        let uris = resource_uris();
        assert_eq!(uris.len(), get_all_resources().len());
    }
}
