//! Shipyard MCP Server
//!
//! An MCP (Model Context Protocol) server exposing the Shipyard
//! server-management API as tools, resources, and prompts.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and
//!   the transport layer
//! - **api**: the typed client for the Shipyard REST API (transport
//!   client, data objects, per-domain façades)
//! - **domains**: the MCP surface
//!   - **tools**: one tool per exposed Shipyard operation, plus a few
//!     composite tools (health check, bulk deploy, certificate scan,
//!     site clone)
//!   - **resources**: static documentation readable by clients
//!   - **prompts**: workflow prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use shipyard_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
