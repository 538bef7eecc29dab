//! Firewall and SSH key tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::{CreateFirewallRule, CreateSshKey};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

// ── list_firewall_rules ──────────────────────────────────────────────

pub struct ListFirewallRulesTool;

impl ToolDefinition for ListFirewallRulesTool {
    const NAME: &'static str = "list_firewall_rules";
    const DESCRIPTION: &'static str = "List all firewall rules on a server.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing firewall rules on server {}", params.server_id);
        match ctx.api.firewall().list(params.server_id).await {
            Ok(list) => envelope::list("rules", &list.rules),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_firewall_rule ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateFirewallRuleParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Label for the rule")]
    pub name: String,
    #[schemars(description = "Source IP or CIDR; omit to match any source")]
    pub ip_address: Option<String>,
    #[schemars(description = "Port to match")]
    pub port: Option<u16>,
    #[schemars(description = "Rule action: 'allow' or 'deny'")]
    pub rule_type: Option<String>,
}

pub struct CreateFirewallRuleTool;

impl ToolDefinition for CreateFirewallRuleTool {
    const NAME: &'static str = "create_firewall_rule";
    const DESCRIPTION: &'static str = "Create a firewall rule on a server.";
    type Params = CreateFirewallRuleParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("name", &params.name)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Creating firewall rule {} on server {}",
            params.name, params.server_id
        );
        let payload = CreateFirewallRule {
            name: params.name,
            ip_address: params.ip_address,
            port: params.port,
            rule_type: params.rule_type,
        };
        match ctx.api.firewall().create(params.server_id, &payload).await {
            Ok(rule) => envelope::entity(&rule),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_firewall_rule ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FirewallRuleIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the firewall rule")]
    pub rule_id: u64,
}

pub struct DeleteFirewallRuleTool;

impl ToolDefinition for DeleteFirewallRuleTool {
    const NAME: &'static str = "delete_firewall_rule";
    const DESCRIPTION: &'static str = "Delete a firewall rule from a server.";
    type Params = FirewallRuleIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("rule_id", params.rule_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting firewall rule {}", params.rule_id);
        match ctx
            .api
            .firewall()
            .delete(params.server_id, params.rule_id)
            .await
        {
            Ok(()) => envelope::message(format!("Firewall rule {} deleted", params.rule_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── list_ssh_keys ────────────────────────────────────────────────────

pub struct ListSshKeysTool;

impl ToolDefinition for ListSshKeysTool {
    const NAME: &'static str = "list_ssh_keys";
    const DESCRIPTION: &'static str = "List all SSH keys installed on a server.";
    type Params = ServerScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing SSH keys on server {}", params.server_id);
        match ctx.api.ssh_keys().list(params.server_id).await {
            Ok(list) => envelope::list("keys", &list.keys),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── add_ssh_key ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddSshKeyParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Label for the key")]
    pub name: String,
    #[schemars(description = "Public key material (authorized_keys line)")]
    pub key: String,
    #[schemars(description = "Unix user to install the key for; omit for the default")]
    pub username: Option<String>,
}

pub struct AddSshKeyTool;

impl ToolDefinition for AddSshKeyTool {
    const NAME: &'static str = "add_ssh_key";
    const DESCRIPTION: &'static str = "Install an SSH public key on a server.";
    type Params = AddSshKeyParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("name", &params.name)?;
        non_empty("key", &params.key)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Adding SSH key {} to server {}", params.name, params.server_id);
        let payload = CreateSshKey {
            name: params.name,
            key: params.key,
            username: params.username,
        };
        match ctx.api.ssh_keys().create(params.server_id, &payload).await {
            Ok(key) => envelope::entity(&key),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_ssh_key ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SshKeyIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the SSH key")]
    pub key_id: u64,
}

pub struct DeleteSshKeyTool;

impl ToolDefinition for DeleteSshKeyTool {
    const NAME: &'static str = "delete_ssh_key";
    const DESCRIPTION: &'static str = "Remove an SSH key from a server.";
    type Params = SshKeyIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("key_id", params.key_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting SSH key {}", params.key_id);
        match ctx.api.ssh_keys().delete(params.server_id, params.key_id).await {
            Ok(()) => envelope::message(format!("SSH key {} deleted", params.key_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_firewall_rule_requires_name() {
        let params: CreateFirewallRuleParams =
            serde_json::from_str(r#"{"server_id": 1, "name": ""}"#).unwrap();
        assert!(CreateFirewallRuleTool::validate(&params).is_err());
    }

    #[test]
    fn test_add_ssh_key_requires_key_material() {
        let params: AddSshKeyParams = serde_json::from_str(
            r#"{"server_id": 1, "name": "deploy", "key": "  "}"#,
        )
        .unwrap();
        assert!(AddSshKeyTool::validate(&params).is_err());
    }
}
