//! Resources domain module.
//!
//! Static documentation and server information readable by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - individual resource definitions (one file each)
//! - `registry.rs` - central resource registration
//! - `service.rs` - resource listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` implementing `ResourceDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
