//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! The router is assembled once at startup. When the Shipyard credential
//! is missing it comes back empty: credential-gated tools are simply not
//! offered rather than offered-and-failing.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use tracing::warn;

use crate::core::config::Config;

use super::context::ToolContext;
use super::definition::route_for;
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

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let Some(ctx) = ToolContext::from_config(&config) else {
        warn!("MCP_SHIPYARD_API_KEY is not set; starting without Shipyard tools");
        return ToolRouter::new();
    };

    router_with_context(ctx)
}

/// Build the full router around an existing context.
pub fn router_with_context<S>(ctx: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(route_for::<ListServersTool, S>(ctx.clone()))
        .with_route(route_for::<GetServerTool, S>(ctx.clone()))
        .with_route(route_for::<CreateServerTool, S>(ctx.clone()))
        .with_route(route_for::<UpdateServerTool, S>(ctx.clone()))
        .with_route(route_for::<RebootServerTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteServerTool, S>(ctx.clone()))
        .with_route(route_for::<ListSitesTool, S>(ctx.clone()))
        .with_route(route_for::<GetSiteTool, S>(ctx.clone()))
        .with_route(route_for::<CreateSiteTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteSiteTool, S>(ctx.clone()))
        .with_route(route_for::<DeploySiteTool, S>(ctx.clone()))
        .with_route(route_for::<GetDeploymentScriptTool, S>(ctx.clone()))
        .with_route(route_for::<UpdateDeploymentScriptTool, S>(ctx.clone()))
        .with_route(route_for::<ListDeploymentsTool, S>(ctx.clone()))
        .with_route(route_for::<ListDatabasesTool, S>(ctx.clone()))
        .with_route(route_for::<GetDatabaseTool, S>(ctx.clone()))
        .with_route(route_for::<CreateDatabaseTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteDatabaseTool, S>(ctx.clone()))
        .with_route(route_for::<ListDatabaseUsersTool, S>(ctx.clone()))
        .with_route(route_for::<CreateDatabaseUserTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteDatabaseUserTool, S>(ctx.clone()))
        .with_route(route_for::<ListCertificatesTool, S>(ctx.clone()))
        .with_route(route_for::<GetCertificateTool, S>(ctx.clone()))
        .with_route(route_for::<ObtainCertificateTool, S>(ctx.clone()))
        .with_route(route_for::<ActivateCertificateTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteCertificateTool, S>(ctx.clone()))
        .with_route(route_for::<ListWorkersTool, S>(ctx.clone()))
        .with_route(route_for::<CreateWorkerTool, S>(ctx.clone()))
        .with_route(route_for::<RestartWorkerTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteWorkerTool, S>(ctx.clone()))
        .with_route(route_for::<ListScheduledJobsTool, S>(ctx.clone()))
        .with_route(route_for::<CreateScheduledJobTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteScheduledJobTool, S>(ctx.clone()))
        .with_route(route_for::<ListDaemonsTool, S>(ctx.clone()))
        .with_route(route_for::<CreateDaemonTool, S>(ctx.clone()))
        .with_route(route_for::<RestartDaemonTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteDaemonTool, S>(ctx.clone()))
        .with_route(route_for::<ListFirewallRulesTool, S>(ctx.clone()))
        .with_route(route_for::<CreateFirewallRuleTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteFirewallRuleTool, S>(ctx.clone()))
        .with_route(route_for::<ListSshKeysTool, S>(ctx.clone()))
        .with_route(route_for::<AddSshKeyTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteSshKeyTool, S>(ctx.clone()))
        .with_route(route_for::<ListMonitorsTool, S>(ctx.clone()))
        .with_route(route_for::<CreateMonitorTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteMonitorTool, S>(ctx.clone()))
        .with_route(route_for::<ListWebhooksTool, S>(ctx.clone()))
        .with_route(route_for::<CreateWebhookTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteWebhookTool, S>(ctx.clone()))
        .with_route(route_for::<ListRecipesTool, S>(ctx.clone()))
        .with_route(route_for::<CreateRecipeTool, S>(ctx.clone()))
        .with_route(route_for::<RunRecipeTool, S>(ctx.clone()))
        .with_route(route_for::<DeleteRecipeTool, S>(ctx.clone()))
        .with_route(route_for::<ServerHealthCheckTool, S>(ctx.clone()))
        .with_route(route_for::<BulkDeploySitesTool, S>(ctx.clone()))
        .with_route(route_for::<CertificateExpiryScanTool, S>(ctx.clone()))
        .with_route(route_for::<CloneSiteTool, S>(ctx))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::CredentialsConfig;

    struct TestServer {}

    fn configured() -> Arc<Config> {
        let mut config = Config::default();
        config.credentials = CredentialsConfig {
            api_key: Some("test-token".to_string()),
            api_url: "http://127.0.0.1:9".to_string(),
        };
        Arc::new(config)
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(configured());
        let tools = router.list_all();
        assert_eq!(tools.len(), 57);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"list_servers"));
        assert!(names.contains(&"deploy_site"));
        assert!(names.contains(&"certificate_expiry_scan"));
        assert!(names.contains(&"server_health_check"));
    }

    #[test]
    fn test_router_empty_without_credentials() {
        let mut config = Config::default();
        config.credentials.api_key = None;
        let router: ToolRouter<TestServer> = build_tool_router(Arc::new(config));
        assert!(router.list_all().is_empty());
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(configured());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name), "missing route for {name}");
        }
    }
}
