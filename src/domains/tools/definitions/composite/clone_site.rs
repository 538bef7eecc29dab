//! Site cloning composite tool.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::api::ApiError;
use crate::api::types::{CreateScheduledJob, CreateSite, CreateWorker, ObtainCertificate, Site};
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, write};
use crate::domains::tools::definitions::common::positive_id;
use crate::domains::tools::envelope;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CloneSiteParams {
    #[schemars(description = "Server hosting the site to clone")]
    pub source_server_id: u64,
    #[schemars(description = "Id of the site to clone")]
    pub source_site_id: u64,
    #[schemars(description = "Server to create the clone on")]
    pub target_server_id: u64,
    #[schemars(description = "Domain for the clone; defaults to the source domain")]
    pub domain: Option<String>,
    #[schemars(description = "Request a Let's Encrypt certificate for the clone (default true)")]
    pub with_certificate: Option<bool>,
}

/// Clone a site's configuration onto another server.
///
/// Reads the source site, its deployment script, workers, and the source
/// server's scheduled jobs, then re-issues the create calls against the
/// target. The site itself is created first - every sub-resource
/// references its id - and each subsequent step is individually guarded:
/// a failed step lands in `failed` while the rest proceed.
pub struct CloneSiteTool;

impl ToolDefinition for CloneSiteTool {
    const NAME: &'static str = "clone_site";
    const DESCRIPTION: &'static str =
        "Clone a site onto another server: site settings, git linkage, deployment script, queue workers, related scheduled jobs, and optionally a fresh certificate. Partial failures are reported per step.";
    type Params = CloneSiteParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("source_server_id", params.source_server_id)?;
        positive_id("source_site_id", params.source_site_id)?;
        positive_id("target_server_id", params.target_server_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Cloning site {} from server {} to server {}",
            params.source_site_id, params.source_server_id, params.target_server_id
        );

        // Without the source site nothing else can be derived, so this
        // is the one read that fails the whole operation.
        let source = match ctx
            .api
            .sites()
            .get(params.source_server_id, params.source_site_id)
            .await
        {
            Ok(site) => site,
            Err(e) => return envelope::failure(&e),
        };

        let domain = params.domain.unwrap_or_else(|| source.name.clone());

        // The clone must exist before any sub-resource referencing it.
        let clone = match create_clone(&ctx, params.target_server_id, &source, &domain).await {
            Ok(site) => site,
            Err(e) => return envelope::failure(&e),
        };

        let mut cloned = Vec::new();
        let mut failed = Vec::new();
        let mut record = |step: String, result: Result<(), ApiError>| match result {
            Ok(()) => cloned.push(Value::String(step)),
            Err(e) => {
                warn!("clone step '{step}' failed: {e}");
                failed.push(json!({ "step": step, "error": e.to_string() }));
            }
        };

        // Git linkage, so the deployment script has something to deploy.
        if let (Some(repository), Some(branch)) =
            (source.repository.as_deref(), source.repository_branch.as_deref())
        {
            let provider = source.repository_provider.as_deref().unwrap_or("github");
            record(
                format!("git:{repository}"),
                ctx.api
                    .sites()
                    .install_git(params.target_server_id, clone.id, provider, repository, branch)
                    .await,
            );
        }

        match ctx
            .api
            .sites()
            .deployment_script(params.source_server_id, source.id)
            .await
        {
            Ok(script) => record(
                "deployment_script".to_string(),
                ctx.api
                    .sites()
                    .update_deployment_script(params.target_server_id, clone.id, script)
                    .await,
            ),
            Err(e) => record("deployment_script".to_string(), Err(e)),
        }

        match ctx
            .api
            .workers()
            .list(params.source_server_id, source.id)
            .await
        {
            Ok(list) => {
                for worker in &list.workers {
                    let payload = CreateWorker::from(worker);
                    record(
                        format!("worker:{}", worker.id),
                        ctx.api
                            .workers()
                            .create(params.target_server_id, clone.id, &payload)
                            .await
                            .map(|_| ()),
                    );
                }
            }
            Err(e) => record("workers".to_string(), Err(e)),
        }

        // Scheduled jobs live on the server, not the site; only those
        // whose command mentions the source domain travel with the clone,
        // with the domain rewritten for the target.
        match ctx
            .api
            .scheduled_jobs()
            .list(params.source_server_id)
            .await
        {
            Ok(list) => {
                for job in list.jobs.iter().filter(|j| j.command.contains(&source.name)) {
                    let mut payload = CreateScheduledJob::from(job);
                    payload.command = payload.command.replace(&source.name, &domain);
                    record(
                        format!("scheduled_job:{}", job.id),
                        ctx.api
                            .scheduled_jobs()
                            .create(params.target_server_id, &payload)
                            .await
                            .map(|_| ()),
                    );
                }
            }
            Err(e) => record("scheduled_jobs".to_string(), Err(e)),
        }

        if params.with_certificate.unwrap_or(true) {
            let payload = ObtainCertificate {
                domains: vec![domain.clone()],
            };
            record(
                format!("certificate:{domain}"),
                ctx.api
                    .certificates()
                    .obtain(params.target_server_id, clone.id, &payload)
                    .await
                    .map(|_| ()),
            );
        }

        envelope::json(json!({
            "site": clone,
            "cloned": cloned,
            "failed": failed,
        }))
    }
}

async fn create_clone(
    ctx: &ToolContext,
    target_server_id: u64,
    source: &Site,
    domain: &str,
) -> Result<Site, ApiError> {
    let payload = CreateSite {
        domain: domain.to_string(),
        project_type: None,
        directory: source.directory.clone(),
        php_version: source.php_version.clone(),
        isolated: None,
    };
    ctx.api.sites().create(target_server_id, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_site_validation() {
        let params = CloneSiteParams {
            source_server_id: 1,
            source_site_id: 0,
            target_server_id: 2,
            domain: None,
            with_certificate: None,
        };
        assert!(CloneSiteTool::validate(&params).is_err());
    }
}
