//! Resource definitions module.
//!
//! Each resource lives in its own file: URI, metadata, and a content
//! provider. Register new resources in `registry.rs`.

mod deployment_guide;
mod getting_started;
mod server_info;
mod tool_reference;

pub use deployment_guide::DeploymentGuideResource;
pub use getting_started::GettingStartedResource;
pub use server_info::ServerInfoResource;
pub use tool_reference::ToolReferenceResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
