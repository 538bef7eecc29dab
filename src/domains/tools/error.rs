//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur when dispatching a tool call by name.
///
/// Note the absence of an upstream-failure variant: upstream errors are
/// rendered into the failure envelope by the handler itself and never
/// surface as a `ToolError`.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Shipyard credential is not configured, so no tools are
    /// registered.
    #[error("Shipyard API key is not configured; tools are unavailable")]
    Unconfigured,
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
