//! Site and deployment tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::CreateSite;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty, positive_id};

/// Ids addressing a site within its server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SiteIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
}

impl SiteIdParams {
    fn check(&self) -> Result<(), String> {
        positive_id("server_id", self.server_id)?;
        positive_id("site_id", self.site_id)
    }
}

// ── list_sites ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSitesParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
}

pub struct ListSitesTool;

impl ToolDefinition for ListSitesTool {
    const NAME: &'static str = "list_sites";
    const DESCRIPTION: &'static str =
        "List all sites on a server with their domain, repository, and deployment status.";
    type Params = ListSitesParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Listing sites on server {}", params.server_id);
        match ctx.api.sites().list(params.server_id).await {
            Ok(list) => envelope::list("sites", &list.sites),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── get_site ─────────────────────────────────────────────────────────

pub struct GetSiteTool;

impl ToolDefinition for GetSiteTool {
    const NAME: &'static str = "get_site";
    const DESCRIPTION: &'static str = "Get detailed information about a single site.";
    type Params = SiteIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Fetching site {} on server {}", params.site_id, params.server_id);
        match ctx.api.sites().get(params.server_id, params.site_id).await {
            Ok(site) => envelope::entity(&site),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── create_site ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateSiteParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Primary domain of the new site")]
    pub domain: String,
    #[schemars(description = "Project type (e.g. 'php', 'html')")]
    pub project_type: Option<String>,
    #[schemars(description = "Web directory relative to the site root")]
    pub directory: Option<String>,
    #[schemars(description = "PHP version for this site")]
    pub php_version: Option<String>,
    #[schemars(description = "Run the site as an isolated system user")]
    pub isolated: Option<bool>,
}

pub struct CreateSiteTool;

impl ToolDefinition for CreateSiteTool {
    const NAME: &'static str = "create_site";
    const DESCRIPTION: &'static str = "Create a new site on a server.";
    type Params = CreateSiteParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        non_empty("domain", &params.domain)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Creating site {} on server {}", params.domain, params.server_id);
        let payload = CreateSite {
            domain: params.domain,
            project_type: params.project_type,
            directory: params.directory,
            php_version: params.php_version,
            isolated: params.isolated,
        };
        match ctx.api.sites().create(params.server_id, &payload).await {
            Ok(site) => envelope::entity(&site),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_site ──────────────────────────────────────────────────────

pub struct DeleteSiteTool;

impl ToolDefinition for DeleteSiteTool {
    const NAME: &'static str = "delete_site";
    const DESCRIPTION: &'static str = "Permanently delete a site and its files from the server.";
    type Params = SiteIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting site {} on server {}", params.site_id, params.server_id);
        match ctx.api.sites().delete(params.server_id, params.site_id).await {
            Ok(()) => envelope::message(format!("Site {} deleted", params.site_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── deploy_site ──────────────────────────────────────────────────────

pub struct DeploySiteTool;

impl ToolDefinition for DeploySiteTool {
    const NAME: &'static str = "deploy_site";
    const DESCRIPTION: &'static str =
        "Trigger a deployment of the site's configured branch. The deployment runs asynchronously upstream.";
    type Params = SiteIdParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deploying site {} on server {}", params.site_id, params.server_id);
        match ctx.api.sites().deploy(params.server_id, params.site_id).await {
            Ok(()) => envelope::message(format!("Deployment of site {} started", params.site_id)),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── get_deployment_script ────────────────────────────────────────────

pub struct GetDeploymentScriptTool;

impl ToolDefinition for GetDeploymentScriptTool {
    const NAME: &'static str = "get_deployment_script";
    const DESCRIPTION: &'static str = "Read the shell script run on each deployment of a site.";
    type Params = SiteIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Reading deployment script for site {} on server {}",
            params.site_id, params.server_id
        );
        match ctx
            .api
            .sites()
            .deployment_script(params.server_id, params.site_id)
            .await
        {
            Ok(script) => envelope::json(serde_json::json!({ "script": script })),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── update_deployment_script ─────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateDeploymentScriptParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "New deployment script content")]
    pub content: String,
}

pub struct UpdateDeploymentScriptTool;

impl ToolDefinition for UpdateDeploymentScriptTool {
    const NAME: &'static str = "update_deployment_script";
    const DESCRIPTION: &'static str = "Replace the shell script run on each deployment of a site.";
    type Params = UpdateDeploymentScriptParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_id("site_id", params.site_id)?;
        non_empty("content", &params.content)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Updating deployment script for site {} on server {}",
            params.site_id, params.server_id
        );
        match ctx
            .api
            .sites()
            .update_deployment_script(params.server_id, params.site_id, params.content)
            .await
        {
            Ok(()) => envelope::message(format!(
                "Deployment script for site {} updated",
                params.site_id
            )),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── list_deployments ─────────────────────────────────────────────────

pub struct ListDeploymentsTool;

impl ToolDefinition for ListDeploymentsTool {
    const NAME: &'static str = "list_deployments";
    const DESCRIPTION: &'static str =
        "List the deployment history of a site, newest first as returned by Shipyard.";
    type Params = SiteIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Listing deployments of site {} on server {}",
            params.site_id, params.server_id
        );
        match ctx
            .api
            .sites()
            .list_deployments(params.server_id, params.site_id)
            .await
        {
            Ok(list) => envelope::list("deployments", &list.deployments),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_id_validation() {
        let params = SiteIdParams {
            server_id: 1,
            site_id: 0,
        };
        assert!(GetSiteTool::validate(&params).is_err());
    }

    #[test]
    fn test_create_site_requires_domain() {
        let parsed: Result<CreateSiteParams, _> =
            serde_json::from_str(r#"{"server_id": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_script_rejects_empty_content() {
        let params = UpdateDeploymentScriptParams {
            server_id: 1,
            site_id: 2,
            content: "".to_string(),
        };
        assert!(UpdateDeploymentScriptTool::validate(&params).is_err());
    }
}
