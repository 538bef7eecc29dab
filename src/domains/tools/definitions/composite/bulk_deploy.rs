//! Bulk site deployment composite tool.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, write};
use crate::domains::tools::definitions::common::{positive_id, positive_ids};
use crate::domains::tools::envelope;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BulkDeployParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Ids of the sites to deploy")]
    pub site_ids: Vec<u64>,
}

/// Deploy several sites in one call.
///
/// Targets are attempted in the order given; one target's failure never
/// aborts the remaining targets. The result aggregates `successful` and
/// `failed` per site so the caller sees exactly which deployments did
/// not start and why.
pub struct BulkDeploySitesTool;

impl ToolDefinition for BulkDeploySitesTool {
    const NAME: &'static str = "bulk_deploy_sites";
    const DESCRIPTION: &'static str =
        "Trigger deployments for multiple sites on a server. Each site is attempted independently; the result lists successful and failed targets.";
    type Params = BulkDeployParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        positive_id("server_id", params.server_id)?;
        positive_ids("site_ids", &params.site_ids)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Bulk deploy of {} site(s) on server {}",
            params.site_ids.len(),
            params.server_id
        );

        let mut successful = Vec::new();
        let mut failed = Vec::new();

        for site_id in params.site_ids {
            match ctx.api.sites().deploy(params.server_id, site_id).await {
                Ok(()) => successful.push(json!({ "site_id": site_id })),
                Err(e) => {
                    warn!("deploy of site {site_id} failed: {e}");
                    failed.push(json!({ "site_id": site_id, "error": e.to_string() }));
                }
            }
        }

        envelope::json(json!({
            "deployed": successful.len(),
            "failed_count": failed.len(),
            "successful": successful,
            "failed": failed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_deploy_requires_targets() {
        let params = BulkDeployParams {
            server_id: 1,
            site_ids: vec![],
        };
        assert!(BulkDeploySitesTool::validate(&params).is_err());
    }

    #[test]
    fn test_bulk_deploy_rejects_zero_id() {
        let params = BulkDeployParams {
            server_id: 1,
            site_ids: vec![3, 0],
        };
        assert!(BulkDeploySitesTool::validate(&params).is_err());
    }
}
