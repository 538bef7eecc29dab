//! Server management tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateServer, UpdateServer};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{NoParams, ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

/// Id of the server to operate on.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

impl ServerIdParams {
    fn check(&self) -> Result<(), String> {
        positive_id("server_id", self.server_id)
    }
}

// ── list_servers ─────────────────────────────────────────────────────

pub struct ListServersTool;

impl ToolDefinition for ListServersTool {
    const NAME: &'static str = "list_servers";
    const DESCRIPTION: &'static str =
        "List all servers on the Shipyard account with their provider, region, IP address, and status.";
    type Params = NoParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    async fn run(_params: NoParams, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing servers");
        match ctx.api.servers().list().await {
            Ok(list) => envelope::list("servers", &list.servers),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── get_server ───────────────────────────────────────────────────────

pub struct GetServerTool;

impl ToolDefinition for GetServerTool {
    const NAME: &'static str = "get_server";
    const DESCRIPTION: &'static str = "Get detailed information about a single server.";
    type Params = ServerIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Fetching server {}", params.server_id);
        match ctx.api.servers().get(params.server_id).await {
            Ok(server) => envelope::entity(&server),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateServerParams {
    #[schemars(description = "Display name for the new server")]
    pub name: String,
    #[schemars(description = "Infrastructure provider slug (e.g. 'ocean2', 'aws', 'custom')")]
    pub provider: Option<String>,
    #[schemars(description = "Provider region identifier")]
    pub region: Option<String>,
    #[schemars(description = "Provider size/plan identifier")]
    pub size: Option<String>,
    #[schemars(description = "PHP version to install (e.g. 'php83')")]
    pub php_version: Option<String>,
}

pub struct CreateServerTool;

impl ToolDefinition for CreateServerTool {
    const NAME: &'static str = "create_server";
    const DESCRIPTION: &'static str =
        "Provision a new server. Provisioning continues asynchronously after this call returns.";
    type Params = CreateServerParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        non_empty("name", &params.name)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating server {}", params.name);
        let payload = CreateServer {
            name: params.name,
            provider: params.provider,
            region: params.region,
            size: params.size,
            php_version: params.php_version,
            ubuntu_version: None,
        };
        match ctx.api.servers().create(&payload).await {
            Ok(server) => envelope::entity(&server),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── update_server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateServerParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "New display name; omit to leave unchanged")]
    pub name: Option<String>,
    #[schemars(description = "New public IP address; omit to leave unchanged")]
    pub ip_address: Option<String>,
    #[schemars(description = "New private IP address; omit to leave unchanged")]
    pub private_ip_address: Option<String>,
}

pub struct UpdateServerTool;

impl ToolDefinition for UpdateServerTool {
    const NAME: &'static str = "update_server";
    const DESCRIPTION: &'static str =
        "Update a server's name or addresses. Omitted fields are left unchanged.";
    type Params = UpdateServerParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        if let Some(name) = &params.name {
            non_empty("name", name)?;
        }
        Ok(())
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Updating server {}", params.server_id);
        let payload = UpdateServer {
            name: params.name,
            ip_address: params.ip_address,
            private_ip_address: params.private_ip_address,
        };
        match ctx.api.servers().update(params.server_id, &payload).await {
            Ok(server) => envelope::entity(&server),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── reboot_server ────────────────────────────────────────────────────

pub struct RebootServerTool;

impl ToolDefinition for RebootServerTool {
    const NAME: &'static str = "reboot_server";
    const DESCRIPTION: &'static str = "Reboot a server. Connections drop until it comes back up.";
    type Params = ServerIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Rebooting server {}", params.server_id);
        match ctx.api.servers().reboot(params.server_id).await {
            Ok(()) => envelope::message(format!("Server {} is rebooting", params.server_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_server ────────────────────────────────────────────────────

pub struct DeleteServerTool;

impl ToolDefinition for DeleteServerTool {
    const NAME: &'static str = "delete_server";
    const DESCRIPTION: &'static str =
        "Permanently delete a server from Shipyard. This does not destroy the underlying VM at the provider.";
    type Params = ServerIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting server {}", params.server_id);
        match ctx.api.servers().delete(params.server_id).await {
            Ok(()) => envelope::message(format!("Server {} deleted", params.server_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_id_validation() {
        let params = ServerIdParams { server_id: 0 };
        assert!(GetServerTool::validate(&params).is_err());
        let params = ServerIdParams { server_id: 1 };
        assert!(GetServerTool::validate(&params).is_ok());
    }

    #[test]
    fn test_create_server_rejects_blank_name() {
        let params: CreateServerParams =
            serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(CreateServerTool::validate(&params).is_err());
    }

    #[test]
    fn test_params_require_server_id() {
        let parsed: Result<ServerIdParams, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }
}
