//! Tools domain module.
//!
//! Every exposed operation on the Shipyard API lives here as a tool.
//!
//! ## Architecture
//!
//! - `definition.rs` - the `ToolDefinition` contract and the one generic
//!   route builder every tool shares
//! - `definitions/` - tool implementations, one file per domain area
//! - `envelope.rs` - the uniform success/failure JSON envelope
//! - `context.rs` - credential-gated shared context (Shipyard client)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - central tool list and name-based dispatch (HTTP)
//! - `error.rs` - dispatch-level error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `ToolDefinition` in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` and a dispatch arm in `registry.rs`
//!
//! The registry/router agreement is pinned by tests.

pub mod context;
pub mod definition;
pub mod definitions;
pub mod envelope;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use definition::{NoParams, ToolDefinition};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
