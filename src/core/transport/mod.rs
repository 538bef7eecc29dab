//! Transport layer for the MCP server.
//!
//! Three transports, selected at build time by feature flag and at run
//! time by `MCP_TRANSPORT`:
//! - **STDIO** (`stdio`, default): standard MCP mode
//! - **TCP** (`tcp`): line-delimited JSON-RPC over a socket
//! - **HTTP** (`http`): JSON-RPC over POST, for curl and browsers
//!
//! Each transport owns the connection lifecycle and hands message
//! processing to the server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
