//! Server health-check composite tool.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, read_only};
use crate::domains::tools::definitions::common::positive_id;
use crate::domains::tools::envelope;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HealthCheckParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

/// One-shot dashboard for a server: detail, sites, daemons, and monitor
/// states in a single payload.
///
/// Sections are gathered best-effort. A failing section contributes an
/// entry to `errors` keyed by section name while the others still return
/// data; the whole check never collapses into one opaque failure.
pub struct ServerHealthCheckTool;

impl ToolDefinition for ServerHealthCheckTool {
    const NAME: &'static str = "server_health_check";
    const DESCRIPTION: &'static str =
        "Combined health overview of a server: details, sites, daemons, monitor states, and alert count. Sections that cannot be fetched are reported individually under 'errors'.";
    type Params = HealthCheckParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        let server_id = params.server_id;
        info!("Health check for server {server_id}");

        let mut body = Map::new();
        let mut errors = Map::new();

        match ctx.api.servers().get(server_id).await {
            Ok(server) => {
                body.insert("server".to_string(), json!(server));
            }
            Err(e) => {
                errors.insert("server".to_string(), json!(e.to_string()));
            }
        }

        match ctx.api.sites().list(server_id).await {
            Ok(list) => {
                body.insert("site_count".to_string(), json!(list.count()));
                body.insert("sites".to_string(), json!(list.sites));
            }
            Err(e) => {
                errors.insert("sites".to_string(), json!(e.to_string()));
            }
        }

        match ctx.api.daemons().list(server_id).await {
            Ok(list) => {
                body.insert("daemon_count".to_string(), json!(list.count()));
                body.insert("daemons".to_string(), json!(list.daemons));
            }
            Err(e) => {
                errors.insert("daemons".to_string(), json!(e.to_string()));
            }
        }

        match ctx.api.monitors().list(server_id).await {
            Ok(list) => {
                let alerts: Vec<_> = list
                    .monitors
                    .iter()
                    .filter(|m| !m.state.eq_ignore_ascii_case("ok"))
                    .collect();
                body.insert("alert_count".to_string(), json!(alerts.len()));
                body.insert("monitors".to_string(), json!(list.monitors));
            }
            Err(e) => {
                errors.insert("monitors".to_string(), json!(e.to_string()));
            }
        }

        body.insert("healthy".to_string(), {
            let no_alerts = body
                .get("alert_count")
                .and_then(Value::as_u64)
                .is_some_and(|n| n == 0);
            json!(errors.is_empty() && no_alerts)
        });

        if !errors.is_empty() {
            body.insert("errors".to_string(), Value::Object(errors));
        }

        envelope::json(Value::Object(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_validation() {
        assert!(ServerHealthCheckTool::validate(&HealthCheckParams { server_id: 0 }).is_err());
        assert!(ServerHealthCheckTool::validate(&HealthCheckParams { server_id: 3 }).is_ok());
    }
}
