//! Monitor and webhook tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateMonitor, CreateWebhook};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

// ── list_monitors ────────────────────────────────────────────────────

pub struct ListMonitorsTool;

impl ToolDefinition for ListMonitorsTool {
    const NAME: &'static str = "list_monitors";
    const DESCRIPTION: &'static str =
        "List all metric monitors on a server with their current state.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing monitors on server {}", params.server_id);
        match ctx.api.monitors().list(params.server_id).await {
            Ok(list) => envelope::list("monitors", &list.monitors),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_monitor ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateMonitorParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Metric to monitor: cpu_load, used_memory, or disk_usage")]
    pub monitor_type: String,
    #[schemars(description = "Comparison operator: gte or lte")]
    pub operator: String,
    #[schemars(description = "Threshold value to compare against")]
    pub threshold: f64,
    #[schemars(description = "Minutes the condition must hold before alerting")]
    pub minutes: u32,
}

pub struct CreateMonitorTool;

impl ToolDefinition for CreateMonitorTool {
    const NAME: &'static str = "create_monitor";
    const DESCRIPTION: &'static str = "Create a metric monitor on a server.";
    type Params = CreateMonitorParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("monitor_type", &params.monitor_type)?;
        non_empty("operator", &params.operator)?;
        if params.minutes < 1 {
            return Err("minutes must be >= 1".to_string());
        }
        Ok(())
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Creating {} monitor on server {}",
            params.monitor_type, params.server_id
        );
        let payload = CreateMonitor {
            monitor_type: params.monitor_type,
            operator: params.operator,
            threshold: params.threshold,
            minutes: params.minutes,
        };
        match ctx.api.monitors().create(params.server_id, &payload).await {
            Ok(monitor) => envelope::entity(&monitor),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_monitor ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MonitorIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the monitor")]
    pub monitor_id: u64,
}

pub struct DeleteMonitorTool;

impl ToolDefinition for DeleteMonitorTool {
    const NAME: &'static str = "delete_monitor";
    const DESCRIPTION: &'static str = "Delete a metric monitor from a server.";
    type Params = MonitorIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("monitor_id", params.monitor_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting monitor {}", params.monitor_id);
        match ctx
            .api
            .monitors()
            .delete(params.server_id, params.monitor_id)
            .await
        {
            Ok(()) => envelope::message(format!("Monitor {} deleted", params.monitor_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── list_webhooks ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SiteScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
}

pub struct ListWebhooksTool;

impl ToolDefinition for ListWebhooksTool {
    const NAME: &'static str = "list_webhooks";
    const DESCRIPTION: &'static str = "List the deployment webhooks configured on a site.";
    type Params = SiteScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Listing webhooks on site {} (server {})",
            params.site_id, params.server_id
        );
        match ctx
            .api
            .webhooks()
            .list(params.server_id, params.site_id)
            .await
        {
            Ok(list) => envelope::list("webhooks", &list.webhooks),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_webhook ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWebhookParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "URL to notify after each deployment")]
    pub url: String,
}

pub struct CreateWebhookTool;

impl ToolDefinition for CreateWebhookTool {
    const NAME: &'static str = "create_webhook";
    const DESCRIPTION: &'static str = "Add a deployment webhook to a site.";
    type Params = CreateWebhookParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)?;
        non_empty("url", &params.url)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating webhook on site {}", params.site_id);
        let payload = CreateWebhook { url: params.url };
        match ctx
            .api
            .webhooks()
            .create(params.server_id, params.site_id, &payload)
            .await
        {
            Ok(webhook) => envelope::entity(&webhook),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_webhook ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebhookIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "Numeric id of the webhook")]
    pub webhook_id: u64,
}

pub struct DeleteWebhookTool;

impl ToolDefinition for DeleteWebhookTool {
    const NAME: &'static str = "delete_webhook";
    const DESCRIPTION: &'static str = "Remove a deployment webhook from a site.";
    type Params = WebhookIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)?;
        positive_id("webhook_id", params.webhook_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting webhook {}", params.webhook_id);
        match ctx
            .api
            .webhooks()
            .delete(params.server_id, params.site_id, params.webhook_id)
            .await
        {
            Ok(()) => envelope::message(format!("Webhook {} deleted", params.webhook_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_monitor_minutes_floor() {
        let params: CreateMonitorParams = serde_json::from_str(
            r#"{"server_id": 1, "monitor_type": "cpu_load", "operator": "gte", "threshold": 1.5, "minutes": 0}"#,
        )
        .unwrap();
        assert!(CreateMonitorTool::validate(&params).is_err());
    }

    #[test]
    fn test_create_webhook_requires_url() {
        let params: CreateWebhookParams = serde_json::from_str(
            r#"{"server_id": 1, "site_id": 2, "url": ""}"#,
        )
        .unwrap();
        assert!(CreateWebhookTool::validate(&params).is_err());
    }
}
