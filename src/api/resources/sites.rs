//! Site and deployment façade.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    CreateSite, Deployment, DeploymentList, Site, SiteList, UpdateDeploymentScript,
};

/// Operations on sites and their deployments.
pub struct Sites<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn sites(&self) -> Sites<'_> {
        Sites { client: self }
    }
}

impl Sites<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<SiteList> {
        self.client.get(&format!("servers/{server_id}/sites")).await
    }

    pub async fn get(&self, server_id: u64, site_id: u64) -> ApiResult<Site> {
        self.client
            .get(&format!("servers/{server_id}/sites/{site_id}"))
            .await
    }

    pub async fn create(&self, server_id: u64, payload: &CreateSite) -> ApiResult<Site> {
        self.client
            .post(&format!("servers/{server_id}/sites"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, site_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/sites/{site_id}"))
            .await
    }

    // ── Deployments ──────────────────────────────────────────────────

    /// Trigger a deployment of the site's current branch.
    pub async fn deploy(&self, server_id: u64, site_id: u64) -> ApiResult<()> {
        self.client
            .action(&format!(
                "servers/{server_id}/sites/{site_id}/deployment/deploy"
            ))
            .await
    }

    /// Output of the most recent deployment, as raw JSON.
    pub async fn deployment_log(&self, server_id: u64, site_id: u64) -> ApiResult<Value> {
        self.client
            .get_raw(&format!(
                "servers/{server_id}/sites/{site_id}/deployment/log"
            ))
            .await
    }

    pub async fn deployment_script(&self, server_id: u64, site_id: u64) -> ApiResult<String> {
        self.client
            .get_text(&format!(
                "servers/{server_id}/sites/{site_id}/deployment/script"
            ))
            .await
    }

    pub async fn update_deployment_script(
        &self,
        server_id: u64,
        site_id: u64,
        content: String,
    ) -> ApiResult<()> {
        self.client
            .put_empty(
                &format!("servers/{server_id}/sites/{site_id}/deployment/script"),
                &UpdateDeploymentScript { content },
            )
            .await
    }

    pub async fn enable_quick_deploy(&self, server_id: u64, site_id: u64) -> ApiResult<()> {
        self.client
            .action(&format!("servers/{server_id}/sites/{site_id}/deployment"))
            .await
    }

    pub async fn disable_quick_deploy(&self, server_id: u64, site_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/sites/{site_id}/deployment"))
            .await
    }

    pub async fn list_deployments(
        &self,
        server_id: u64,
        site_id: u64,
    ) -> ApiResult<DeploymentList> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/deployment-history"
            ))
            .await
    }

    pub async fn get_deployment(
        &self,
        server_id: u64,
        site_id: u64,
        deployment_id: u64,
    ) -> ApiResult<Deployment> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/deployment-history/{deployment_id}"
            ))
            .await
    }

    // ── Git linkage ──────────────────────────────────────────────────

    pub async fn install_git(
        &self,
        server_id: u64,
        site_id: u64,
        provider: &str,
        repository: &str,
        branch: &str,
    ) -> ApiResult<()> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            provider: &'a str,
            repository: &'a str,
            branch: &'a str,
        }

        self.client
            .post_empty(
                &format!("servers/{server_id}/sites/{site_id}/git"),
                &Body {
                    provider,
                    repository,
                    branch,
                },
            )
            .await
    }

    pub async fn remove_git(&self, server_id: u64, site_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/sites/{site_id}/git"))
            .await
    }
}
