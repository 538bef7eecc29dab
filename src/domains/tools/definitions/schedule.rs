//! Scheduled-job and daemon tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateDaemon, CreateScheduledJob};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

// ── list_scheduled_jobs ──────────────────────────────────────────────

pub struct ListScheduledJobsTool;

impl ToolDefinition for ListScheduledJobsTool {
    const NAME: &'static str = "list_scheduled_jobs";
    const DESCRIPTION: &'static str = "List all cron-scheduled jobs on a server.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing scheduled jobs on server {}", params.server_id);
        match ctx.api.scheduled_jobs().list(params.server_id).await {
            Ok(list) => envelope::list("jobs", &list.jobs),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_scheduled_job ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateScheduledJobParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Command to run")]
    pub command: String,
    #[schemars(description = "Frequency: minutely, hourly, nightly, weekly, monthly, or custom")]
    pub frequency: String,
    #[schemars(description = "Unix user to run as; omit for the default")]
    pub user: Option<String>,
    #[schemars(description = "Cron expression, required when frequency is 'custom'")]
    pub cron: Option<String>,
}

pub struct CreateScheduledJobTool;

impl ToolDefinition for CreateScheduledJobTool {
    const NAME: &'static str = "create_scheduled_job";
    const DESCRIPTION: &'static str = "Create a cron-scheduled job on a server.";
    type Params = CreateScheduledJobParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("command", &params.command)?;
        non_empty("frequency", &params.frequency)?;
        if params.frequency == "custom" && params.cron.is_none() {
            return Err("cron is required when frequency is 'custom'".to_string());
        }
        Ok(())
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating scheduled job on server {}", params.server_id);
        let payload = CreateScheduledJob {
            command: params.command,
            frequency: params.frequency,
            user: params.user,
            cron: params.cron,
        };
        match ctx
            .api
            .scheduled_jobs()
            .create(params.server_id, &payload)
            .await
        {
            Ok(job) => envelope::entity(&job),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_scheduled_job ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ScheduledJobIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the scheduled job")]
    pub job_id: u64,
}

pub struct DeleteScheduledJobTool;

impl ToolDefinition for DeleteScheduledJobTool {
    const NAME: &'static str = "delete_scheduled_job";
    const DESCRIPTION: &'static str = "Remove a cron-scheduled job from a server.";
    type Params = ScheduledJobIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("job_id", params.job_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting scheduled job {}", params.job_id);
        match ctx
            .api
            .scheduled_jobs()
            .delete(params.server_id, params.job_id)
            .await
        {
            Ok(()) => envelope::message(format!("Scheduled job {} deleted", params.job_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── list_daemons ─────────────────────────────────────────────────────

pub struct ListDaemonsTool;

impl ToolDefinition for ListDaemonsTool {
    const NAME: &'static str = "list_daemons";
    const DESCRIPTION: &'static str = "List all supervised daemons on a server.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing daemons on server {}", params.server_id);
        match ctx.api.daemons().list(params.server_id).await {
            Ok(list) => envelope::list("daemons", &list.daemons),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_daemon ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDaemonParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Command the daemon runs")]
    pub command: String,
    #[schemars(description = "Unix user to run as; omit for the default")]
    pub user: Option<String>,
    #[schemars(description = "Working directory")]
    pub directory: Option<String>,
    #[schemars(description = "Number of processes to supervise")]
    pub processes: Option<u32>,
}

pub struct CreateDaemonTool;

impl ToolDefinition for CreateDaemonTool {
    const NAME: &'static str = "create_daemon";
    const DESCRIPTION: &'static str = "Create a supervised daemon on a server.";
    type Params = CreateDaemonParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("command", &params.command)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating daemon on server {}", params.server_id);
        let payload = CreateDaemon {
            command: params.command,
            user: params.user,
            directory: params.directory,
            processes: params.processes,
        };
        match ctx.api.daemons().create(params.server_id, &payload).await {
            Ok(daemon) => envelope::entity(&daemon),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── restart_daemon / delete_daemon ───────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DaemonIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the daemon")]
    pub daemon_id: u64,
}

impl DaemonIdParams {
    fn check(&self) -> Result<(), String> {
        positive_id("server_id", self.server_id)?;
        positive_id("daemon_id", self.daemon_id)
    }
}

pub struct RestartDaemonTool;

impl ToolDefinition for RestartDaemonTool {
    const NAME: &'static str = "restart_daemon";
    const DESCRIPTION: &'static str = "Restart a supervised daemon.";
    type Params = DaemonIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Restarting daemon {}", params.daemon_id);
        match ctx
            .api
            .daemons()
            .restart(params.server_id, params.daemon_id)
            .await
        {
            Ok(()) => envelope::message(format!("Daemon {} restarting", params.daemon_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

pub struct DeleteDaemonTool;

impl ToolDefinition for DeleteDaemonTool {
    const NAME: &'static str = "delete_daemon";
    const DESCRIPTION: &'static str = "Remove a supervised daemon from a server.";
    type Params = DaemonIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting daemon {}", params.daemon_id);
        match ctx
            .api
            .daemons()
            .delete(params.server_id, params.daemon_id)
            .await
        {
            Ok(()) => envelope::message(format!("Daemon {} deleted", params.daemon_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_frequency_requires_cron() {
        let params: CreateScheduledJobParams = serde_json::from_str(
            r#"{"server_id": 1, "command": "php artisan schedule:run", "frequency": "custom"}"#,
        )
        .unwrap();
        assert!(CreateScheduledJobTool::validate(&params).is_err());

        let params: CreateScheduledJobParams = serde_json::from_str(
            r#"{"server_id": 1, "command": "php artisan schedule:run", "frequency": "custom", "cron": "*/5 * * * *"}"#,
        )
        .unwrap();
        assert!(CreateScheduledJobTool::validate(&params).is_ok());
    }

    #[test]
    fn test_daemon_id_check() {
        let params = DaemonIdParams {
            server_id: 0,
            daemon_id: 1,
        };
        assert!(RestartDaemonTool::validate(&params).is_err());
    }
}
