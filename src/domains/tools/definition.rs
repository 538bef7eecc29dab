//! Generic tool definition contract and route builder.
//!
//! Every tool is declared as data: a name, a description, a typed
//! parameter struct, and safety annotations. One generic interpreter
//! ([`route_for`]) turns any definition into an rmcp `ToolRoute`, so
//! adding a tool never means re-writing the parse/validate/dispatch
//! plumbing.
//!
//! Dispatch per invocation:
//! 1. arguments are deserialized into `Params` - a missing or mistyped
//!    field short-circuits with `invalid_params` before any handler code
//!    runs;
//! 2. `validate` checks declared constraints (ids >= 1, password length,
//!    non-empty domain lists) - violations also short-circuit with
//!    `invalid_params`;
//! 3. `run` executes, returning a JSON envelope as a completed
//!    `CallToolResult`. Handlers catch upstream failures themselves and
//!    render them as `{"success": false, "error": ...}` - nothing below
//!    the dispatch layer raises past this boundary.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::context::ToolContext;

/// Declarative description of one exposed tool.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed input schema; doubles as caller-facing introspection via
    /// schemars.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Safety metadata for the calling agent (advisory only).
    fn annotations() -> ToolAnnotations;

    /// Constraint checks beyond what the type system enforces. Runs
    /// before `run`; an `Err` is reported through the protocol's
    /// validation channel and the handler is never invoked.
    fn validate(_params: &Self::Params) -> Result<(), String> {
        Ok(())
    }

    /// Execute the tool. Must always resolve to an envelope; upstream
    /// failures are data, not errors.
    fn run(
        params: Self::Params,
        ctx: Arc<ToolContext>,
    ) -> impl Future<Output = CallToolResult> + Send;
}

/// Parameter type for tools that take no input.
#[derive(Debug, Clone, serde::Deserialize, JsonSchema)]
pub struct NoParams {}

// ── Annotation presets ───────────────────────────────────────────────
//
// All tools talk to an external API, so `open_world_hint` is always set.

/// List/get-style operations: safe to retry freely.
pub fn read_only() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(true),
    }
}

/// Create-style operations: mutate upstream state, not idempotent, but
/// nothing is lost on success.
pub fn write() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(false),
        destructive_hint: Some(false),
        idempotent_hint: Some(false),
        open_world_hint: Some(true),
    }
}

/// Delete/restart/reboot-style operations a calling agent should gate
/// behind confirmation.
pub fn destructive() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(false),
        destructive_hint: Some(true),
        idempotent_hint: Some(false),
        open_world_hint: Some(true),
    }
}

/// Build the Tool model (metadata) for a definition.
pub fn tool_model<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: Some(T::annotations()),
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build a ToolRoute for a definition.
pub fn route_for<T, S>(ctx: Arc<ToolContext>) -> ToolRoute<S>
where
    T: ToolDefinition + 'static,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool_model::<T>(), move |call: ToolCallContext<'_, S>| {
        let args = call.arguments.clone().unwrap_or_default();
        let ctx = ctx.clone();
        async move {
            let params: T::Params = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            T::validate(&params).map_err(|msg| McpError::invalid_params(msg, None))?;
            Ok(T::run(params, ctx).await)
        }
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_presets() {
        assert_eq!(read_only().read_only_hint, Some(true));
        assert_eq!(read_only().destructive_hint, Some(false));
        assert_eq!(write().read_only_hint, Some(false));
        assert_eq!(write().destructive_hint, Some(false));
        assert_eq!(destructive().destructive_hint, Some(true));
    }

    #[test]
    fn test_no_params_accepts_empty_object() {
        let parsed: Result<NoParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_ok());
    }
}
