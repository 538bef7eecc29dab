//! Tool Registry - central registration and dispatch for all tools.
//!
//! Single source of truth for the tool set. The router (STDIO/TCP) and
//! the HTTP transport both derive their view of "which tools exist" from
//! here, and a test pins the two against each other.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::{Value, json};
use tracing::warn;

use crate::core::config::Config;

use super::context::ToolContext;
use super::definition::{ToolDefinition, tool_model};
use super::error::ToolError;

use super::definitions::{
    ActivateCertificateTool, AddSshKeyTool, BulkDeploySitesTool, CertificateExpiryScanTool,
    CloneSiteTool, CreateDaemonTool, CreateDatabaseTool, CreateDatabaseUserTool,
    CreateFirewallRuleTool, CreateMonitorTool, CreateRecipeTool, CreateScheduledJobTool,
    CreateServerTool, CreateSiteTool, CreateWebhookTool, CreateWorkerTool, DeleteCertificateTool,
    DeleteDaemonTool, DeleteDatabaseTool, DeleteDatabaseUserTool, DeleteFirewallRuleTool,
    DeleteMonitorTool, DeleteRecipeTool, DeleteScheduledJobTool, DeleteServerTool, DeleteSiteTool,
    DeleteSshKeyTool, DeleteWebhookTool, DeleteWorkerTool, DeploySiteTool, GetCertificateTool,
    GetDatabaseTool, GetDeploymentScriptTool, GetServerTool, GetSiteTool, ListCertificatesTool,
    ListDaemonsTool, ListDatabaseUsersTool, ListDatabasesTool, ListDeploymentsTool,
    ListFirewallRulesTool, ListMonitorsTool, ListRecipesTool, ListScheduledJobsTool,
    ListServersTool, ListSitesTool, ListSshKeysTool, ListWebhooksTool, ListWorkersTool,
    ObtainCertificateTool, RebootServerTool, RestartDaemonTool, RestartWorkerTool, RunRecipeTool,
    ServerHealthCheckTool, UpdateDeploymentScriptTool, UpdateServerTool,
};

/// Tool registry - lists the tool set and dispatches calls by name.
pub struct ToolRegistry {
    context: Option<Arc<ToolContext>>,
}

impl ToolRegistry {
    /// Create a registry, building its own context from configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self::from_context(ToolContext::from_config(&config))
    }

    /// Create a registry around an already-built context. `None` means
    /// the Shipyard credential is absent and every dispatch fails with
    /// [`ToolError::Unconfigured`].
    pub fn from_context(context: Option<Arc<ToolContext>>) -> Self {
        Self { context }
    }

    /// Create a registry around an existing context.
    pub fn with_context(context: Arc<ToolContext>) -> Self {
        Self::from_context(Some(context))
    }

    /// Names of every registered tool.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListServersTool::NAME,
            GetServerTool::NAME,
            CreateServerTool::NAME,
            UpdateServerTool::NAME,
            RebootServerTool::NAME,
            DeleteServerTool::NAME,
            ListSitesTool::NAME,
            GetSiteTool::NAME,
            CreateSiteTool::NAME,
            DeleteSiteTool::NAME,
            DeploySiteTool::NAME,
            GetDeploymentScriptTool::NAME,
            UpdateDeploymentScriptTool::NAME,
            ListDeploymentsTool::NAME,
            ListDatabasesTool::NAME,
            GetDatabaseTool::NAME,
            CreateDatabaseTool::NAME,
            DeleteDatabaseTool::NAME,
            ListDatabaseUsersTool::NAME,
            CreateDatabaseUserTool::NAME,
            DeleteDatabaseUserTool::NAME,
            ListCertificatesTool::NAME,
            GetCertificateTool::NAME,
            ObtainCertificateTool::NAME,
            ActivateCertificateTool::NAME,
            DeleteCertificateTool::NAME,
            ListWorkersTool::NAME,
            CreateWorkerTool::NAME,
            RestartWorkerTool::NAME,
            DeleteWorkerTool::NAME,
            ListScheduledJobsTool::NAME,
            CreateScheduledJobTool::NAME,
            DeleteScheduledJobTool::NAME,
            ListDaemonsTool::NAME,
            CreateDaemonTool::NAME,
            RestartDaemonTool::NAME,
            DeleteDaemonTool::NAME,
            ListFirewallRulesTool::NAME,
            CreateFirewallRuleTool::NAME,
            DeleteFirewallRuleTool::NAME,
            ListSshKeysTool::NAME,
            AddSshKeyTool::NAME,
            DeleteSshKeyTool::NAME,
            ListMonitorsTool::NAME,
            CreateMonitorTool::NAME,
            DeleteMonitorTool::NAME,
            ListWebhooksTool::NAME,
            CreateWebhookTool::NAME,
            DeleteWebhookTool::NAME,
            ListRecipesTool::NAME,
            CreateRecipeTool::NAME,
            RunRecipeTool::NAME,
            DeleteRecipeTool::NAME,
            ServerHealthCheckTool::NAME,
            BulkDeploySitesTool::NAME,
            CertificateExpiryScanTool::NAME,
            CloneSiteTool::NAME,
        ]
    }

    /// All tools as metadata models.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            tool_model::<ListServersTool>(),
            tool_model::<GetServerTool>(),
            tool_model::<CreateServerTool>(),
            tool_model::<UpdateServerTool>(),
            tool_model::<RebootServerTool>(),
            tool_model::<DeleteServerTool>(),
            tool_model::<ListSitesTool>(),
            tool_model::<GetSiteTool>(),
            tool_model::<CreateSiteTool>(),
            tool_model::<DeleteSiteTool>(),
            tool_model::<DeploySiteTool>(),
            tool_model::<GetDeploymentScriptTool>(),
            tool_model::<UpdateDeploymentScriptTool>(),
            tool_model::<ListDeploymentsTool>(),
            tool_model::<ListDatabasesTool>(),
            tool_model::<GetDatabaseTool>(),
            tool_model::<CreateDatabaseTool>(),
            tool_model::<DeleteDatabaseTool>(),
            tool_model::<ListDatabaseUsersTool>(),
            tool_model::<CreateDatabaseUserTool>(),
            tool_model::<DeleteDatabaseUserTool>(),
            tool_model::<ListCertificatesTool>(),
            tool_model::<GetCertificateTool>(),
            tool_model::<ObtainCertificateTool>(),
            tool_model::<ActivateCertificateTool>(),
            tool_model::<DeleteCertificateTool>(),
            tool_model::<ListWorkersTool>(),
            tool_model::<CreateWorkerTool>(),
            tool_model::<RestartWorkerTool>(),
            tool_model::<DeleteWorkerTool>(),
            tool_model::<ListScheduledJobsTool>(),
            tool_model::<CreateScheduledJobTool>(),
            tool_model::<DeleteScheduledJobTool>(),
            tool_model::<ListDaemonsTool>(),
            tool_model::<CreateDaemonTool>(),
            tool_model::<RestartDaemonTool>(),
            tool_model::<DeleteDaemonTool>(),
            tool_model::<ListFirewallRulesTool>(),
            tool_model::<CreateFirewallRuleTool>(),
            tool_model::<DeleteFirewallRuleTool>(),
            tool_model::<ListSshKeysTool>(),
            tool_model::<AddSshKeyTool>(),
            tool_model::<DeleteSshKeyTool>(),
            tool_model::<ListMonitorsTool>(),
            tool_model::<CreateMonitorTool>(),
            tool_model::<DeleteMonitorTool>(),
            tool_model::<ListWebhooksTool>(),
            tool_model::<CreateWebhookTool>(),
            tool_model::<DeleteWebhookTool>(),
            tool_model::<ListRecipesTool>(),
            tool_model::<CreateRecipeTool>(),
            tool_model::<RunRecipeTool>(),
            tool_model::<DeleteRecipeTool>(),
            tool_model::<ServerHealthCheckTool>(),
            tool_model::<BulkDeploySitesTool>(),
            tool_model::<CertificateExpiryScanTool>(),
            tool_model::<CloneSiteTool>(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Validation failures surface as [`ToolError::InvalidArguments`]
    /// without touching the upstream API; handler results (including
    /// failure envelopes) come back as data.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let ctx = self.context.clone().ok_or(ToolError::Unconfigured)?;

        match name {
            ListServersTool::NAME => dispatch::<ListServersTool>(arguments, ctx).await,
            GetServerTool::NAME => dispatch::<GetServerTool>(arguments, ctx).await,
            CreateServerTool::NAME => dispatch::<CreateServerTool>(arguments, ctx).await,
            UpdateServerTool::NAME => dispatch::<UpdateServerTool>(arguments, ctx).await,
            RebootServerTool::NAME => dispatch::<RebootServerTool>(arguments, ctx).await,
            DeleteServerTool::NAME => dispatch::<DeleteServerTool>(arguments, ctx).await,
            ListSitesTool::NAME => dispatch::<ListSitesTool>(arguments, ctx).await,
            GetSiteTool::NAME => dispatch::<GetSiteTool>(arguments, ctx).await,
            CreateSiteTool::NAME => dispatch::<CreateSiteTool>(arguments, ctx).await,
            DeleteSiteTool::NAME => dispatch::<DeleteSiteTool>(arguments, ctx).await,
            DeploySiteTool::NAME => dispatch::<DeploySiteTool>(arguments, ctx).await,
            GetDeploymentScriptTool::NAME => {
                dispatch::<GetDeploymentScriptTool>(arguments, ctx).await
            }
            UpdateDeploymentScriptTool::NAME => {
                dispatch::<UpdateDeploymentScriptTool>(arguments, ctx).await
            }
            ListDeploymentsTool::NAME => dispatch::<ListDeploymentsTool>(arguments, ctx).await,
            ListDatabasesTool::NAME => dispatch::<ListDatabasesTool>(arguments, ctx).await,
            GetDatabaseTool::NAME => dispatch::<GetDatabaseTool>(arguments, ctx).await,
            CreateDatabaseTool::NAME => dispatch::<CreateDatabaseTool>(arguments, ctx).await,
            DeleteDatabaseTool::NAME => dispatch::<DeleteDatabaseTool>(arguments, ctx).await,
            ListDatabaseUsersTool::NAME => {
                dispatch::<ListDatabaseUsersTool>(arguments, ctx).await
            }
            CreateDatabaseUserTool::NAME => {
                dispatch::<CreateDatabaseUserTool>(arguments, ctx).await
            }
            DeleteDatabaseUserTool::NAME => {
                dispatch::<DeleteDatabaseUserTool>(arguments, ctx).await
            }
            ListCertificatesTool::NAME => dispatch::<ListCertificatesTool>(arguments, ctx).await,
            GetCertificateTool::NAME => dispatch::<GetCertificateTool>(arguments, ctx).await,
            ObtainCertificateTool::NAME => {
                dispatch::<ObtainCertificateTool>(arguments, ctx).await
            }
            ActivateCertificateTool::NAME => {
                dispatch::<ActivateCertificateTool>(arguments, ctx).await
            }
            DeleteCertificateTool::NAME => {
                dispatch::<DeleteCertificateTool>(arguments, ctx).await
            }
            ListWorkersTool::NAME => dispatch::<ListWorkersTool>(arguments, ctx).await,
            CreateWorkerTool::NAME => dispatch::<CreateWorkerTool>(arguments, ctx).await,
            RestartWorkerTool::NAME => dispatch::<RestartWorkerTool>(arguments, ctx).await,
            DeleteWorkerTool::NAME => dispatch::<DeleteWorkerTool>(arguments, ctx).await,
            ListScheduledJobsTool::NAME => {
                dispatch::<ListScheduledJobsTool>(arguments, ctx).await
            }
            CreateScheduledJobTool::NAME => {
                dispatch::<CreateScheduledJobTool>(arguments, ctx).await
            }
            DeleteScheduledJobTool::NAME => {
                dispatch::<DeleteScheduledJobTool>(arguments, ctx).await
            }
            ListDaemonsTool::NAME => dispatch::<ListDaemonsTool>(arguments, ctx).await,
            CreateDaemonTool::NAME => dispatch::<CreateDaemonTool>(arguments, ctx).await,
            RestartDaemonTool::NAME => dispatch::<RestartDaemonTool>(arguments, ctx).await,
            DeleteDaemonTool::NAME => dispatch::<DeleteDaemonTool>(arguments, ctx).await,
            ListFirewallRulesTool::NAME => {
                dispatch::<ListFirewallRulesTool>(arguments, ctx).await
            }
            CreateFirewallRuleTool::NAME => {
                dispatch::<CreateFirewallRuleTool>(arguments, ctx).await
            }
            DeleteFirewallRuleTool::NAME => {
                dispatch::<DeleteFirewallRuleTool>(arguments, ctx).await
            }
            ListSshKeysTool::NAME => dispatch::<ListSshKeysTool>(arguments, ctx).await,
            AddSshKeyTool::NAME => dispatch::<AddSshKeyTool>(arguments, ctx).await,
            DeleteSshKeyTool::NAME => dispatch::<DeleteSshKeyTool>(arguments, ctx).await,
            ListMonitorsTool::NAME => dispatch::<ListMonitorsTool>(arguments, ctx).await,
            CreateMonitorTool::NAME => dispatch::<CreateMonitorTool>(arguments, ctx).await,
            DeleteMonitorTool::NAME => dispatch::<DeleteMonitorTool>(arguments, ctx).await,
            ListWebhooksTool::NAME => dispatch::<ListWebhooksTool>(arguments, ctx).await,
            CreateWebhookTool::NAME => dispatch::<CreateWebhookTool>(arguments, ctx).await,
            DeleteWebhookTool::NAME => dispatch::<DeleteWebhookTool>(arguments, ctx).await,
            ListRecipesTool::NAME => dispatch::<ListRecipesTool>(arguments, ctx).await,
            CreateRecipeTool::NAME => dispatch::<CreateRecipeTool>(arguments, ctx).await,
            RunRecipeTool::NAME => dispatch::<RunRecipeTool>(arguments, ctx).await,
            DeleteRecipeTool::NAME => dispatch::<DeleteRecipeTool>(arguments, ctx).await,
            ServerHealthCheckTool::NAME => {
                dispatch::<ServerHealthCheckTool>(arguments, ctx).await
            }
            BulkDeploySitesTool::NAME => dispatch::<BulkDeploySitesTool>(arguments, ctx).await,
            CertificateExpiryScanTool::NAME => {
                dispatch::<CertificateExpiryScanTool>(arguments, ctx).await
            }
            CloneSiteTool::NAME => dispatch::<CloneSiteTool>(arguments, ctx).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

/// Parse, validate, run, and wrap one tool call.
async fn dispatch<T: ToolDefinition>(
    arguments: Value,
    ctx: Arc<ToolContext>,
) -> Result<Value, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    T::validate(&params).map_err(ToolError::invalid_arguments)?;

    let result = T::run(params, ctx).await;
    Ok(json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    fn configured() -> Arc<Config> {
        let mut config = Config::default();
        config.credentials = CredentialsConfig {
            api_key: Some("test-token".to_string()),
            api_url: "http://127.0.0.1:9".to_string(),
        };
        Arc::new(config)
    }

    #[test]
    fn test_registry_tool_names_unique() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 57);

        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());

        assert!(names.contains(&"list_servers"));
        assert!(names.contains(&"create_database"));
        assert!(names.contains(&"obtain_certificate"));
        assert!(names.contains(&"bulk_deploy_sites"));
        assert!(names.contains(&"clone_site"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names = ToolRegistry::tool_names();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
            assert!(tool.annotations.is_some());
        }
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let registry = ToolRegistry::new(configured());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_without_credentials() {
        let mut config = Config::default();
        config.credentials.api_key = None;
        let registry = ToolRegistry::new(Arc::new(config));
        let result = registry
            .call_tool("list_servers", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::Unconfigured)));
    }

    #[tokio::test]
    async fn test_validation_rejected_before_any_network_call() {
        // 127.0.0.1:9 is a black hole; reaching it would fail loudly.
        // Invalid arguments must be rejected before the client is used.
        let registry = ToolRegistry::new(configured());
        let result = registry
            .call_tool("get_server", serde_json::json!({ "server_id": 0 }))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = registry
            .call_tool("get_server", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
