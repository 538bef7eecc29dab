//! Queue worker tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::CreateWorker;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WorkerSiteParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WorkerIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "Numeric id of the worker")]
    pub worker_id: u64,
}

impl WorkerIdParams {
    fn check(&self) -> Result<(), String> {
        positive_id("server_id", self.server_id)?;
        positive_id("site_id", self.site_id)?;
        positive_id("worker_id", self.worker_id)
    }
}

// ── list_workers ─────────────────────────────────────────────────────

pub struct ListWorkersTool;

impl ToolDefinition for ListWorkersTool {
    const NAME: &'static str = "list_workers";
    const DESCRIPTION: &'static str = "List all queue workers on a site.";
    type Params = WorkerSiteParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Listing workers on site {} (server {})",
            params.site_id, params.server_id
        );
        match ctx.api.workers().list(params.server_id, params.site_id).await {
            Ok(list) => envelope::list("workers", &list.workers),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_worker ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateWorkerParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "Queue connection (e.g. 'redis', 'database')")]
    pub connection: String,
    #[schemars(description = "Queue name; omit for the connection default")]
    pub queue: Option<String>,
    #[schemars(description = "Seconds a job may run before timing out")]
    pub timeout: Option<u32>,
    #[schemars(description = "Number of worker processes")]
    pub processes: Option<u32>,
    #[schemars(description = "Run as a daemon worker")]
    pub daemon: Option<bool>,
}

pub struct CreateWorkerTool;

impl ToolDefinition for CreateWorkerTool {
    const NAME: &'static str = "create_worker";
    const DESCRIPTION: &'static str = "Create a queue worker on a site.";
    type Params = CreateWorkerParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)?;
        non_empty("connection", &params.connection)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Creating {} worker on site {}",
            params.connection, params.site_id
        );
        let payload = CreateWorker {
            connection: params.connection,
            queue: params.queue,
            timeout: params.timeout,
            sleep: None,
            processes: params.processes,
            daemon: params.daemon,
        };
        match ctx
            .api
            .workers()
            .create(params.server_id, params.site_id, &payload)
            .await
        {
            Ok(worker) => envelope::entity(&worker),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── restart_worker ───────────────────────────────────────────────────

pub struct RestartWorkerTool;

impl ToolDefinition for RestartWorkerTool {
    const NAME: &'static str = "restart_worker";
    const DESCRIPTION: &'static str = "Restart a queue worker. In-flight jobs are interrupted.";
    type Params = WorkerIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Restarting worker {}", params.worker_id);
        match ctx
            .api
            .workers()
            .restart(params.server_id, params.site_id, params.worker_id)
            .await
        {
            Ok(()) => envelope::message(format!("Worker {} restarting", params.worker_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_worker ────────────────────────────────────────────────────

pub struct DeleteWorkerTool;

impl ToolDefinition for DeleteWorkerTool {
    const NAME: &'static str = "delete_worker";
    const DESCRIPTION: &'static str = "Remove a queue worker from a site.";
    type Params = WorkerIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting worker {}", params.worker_id);
        match ctx
            .api
            .workers()
            .delete(params.server_id, params.site_id, params.worker_id)
            .await
        {
            Ok(()) => envelope::message(format!("Worker {} deleted", params.worker_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_id_check() {
        let params = WorkerIdParams {
            server_id: 1,
            site_id: 1,
            worker_id: 0,
        };
        assert!(RestartWorkerTool::validate(&params).is_err());
    }

    #[test]
    fn test_create_worker_requires_connection() {
        let params: CreateWorkerParams = serde_json::from_str(
            r#"{"server_id": 1, "site_id": 2, "connection": ""}"#,
        )
        .unwrap();
        assert!(CreateWorkerTool::validate(&params).is_err());
    }
}
