//! TLS certificate tools.

use std::sync::Arc;

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::api::types::ObtainCertificate;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, destructive, read_only, write};
use crate::domains::tools::envelope;

use super::common::{non_empty_list, positive_id};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SiteScopedParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
}

fn check_site_scope(server_id: u64, site_id: u64) -> Result<(), String> {
    positive_id("server_id", server_id)?;
    positive_id("site_id", site_id)
}

// ── list_certificates ────────────────────────────────────────────────

pub struct ListCertificatesTool;

impl ToolDefinition for ListCertificatesTool {
    const NAME: &'static str = "list_certificates";
    const DESCRIPTION: &'static str =
        "List all TLS certificates on a site with their status and expiry.";
    type Params = SiteScopedParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        check_site_scope(params.server_id, params.site_id)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Listing certificates on site {} (server {})",
            params.site_id, params.server_id
        );
        match ctx
            .api
            .certificates()
            .list(params.server_id, params.site_id)
            .await
        {
            Ok(list) => envelope::list("certificates", &list.certificates),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── get_certificate ──────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CertificateIdParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "Numeric id of the certificate")]
    pub certificate_id: u64,
}

impl CertificateIdParams {
    fn check(&self) -> Result<(), String> {
        check_site_scope(self.server_id, self.site_id)?;
        positive_id("certificate_id", self.certificate_id)
    }
}

pub struct GetCertificateTool;

impl ToolDefinition for GetCertificateTool {
    const NAME: &'static str = "get_certificate";
    const DESCRIPTION: &'static str = "Get a single certificate by id.";
    type Params = CertificateIdParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Fetching certificate {}", params.certificate_id);
        match ctx
            .api
            .certificates()
            .get(params.server_id, params.site_id, params.certificate_id)
            .await
        {
            Ok(cert) => envelope::entity(&cert),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── obtain_certificate ───────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ObtainCertificateParams {
    #[schemars(description = "Numeric id of the server")]
    pub server_id: u64,
    #[schemars(description = "Numeric id of the site")]
    pub site_id: u64,
    #[schemars(description = "Domains to include on the certificate")]
    pub domains: Vec<String>,
}

pub struct ObtainCertificateTool;

impl ToolDefinition for ObtainCertificateTool {
    const NAME: &'static str = "obtain_certificate";
    const DESCRIPTION: &'static str =
        "Request a Let's Encrypt certificate for the given domains. Issuance continues asynchronously; expiry is unset until it completes.";
    type Params = ObtainCertificateParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        check_site_scope(params.server_id, params.site_id)?;
        non_empty_list("domains", &params.domains)
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Requesting certificate for {:?} on site {}",
            params.domains, params.site_id
        );
        let payload = ObtainCertificate {
            domains: params.domains,
        };
        match ctx
            .api
            .certificates()
            .obtain(params.server_id, params.site_id, &payload)
            .await
        {
            Ok(cert) => envelope::entity(&cert),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── activate_certificate ─────────────────────────────────────────────

pub struct ActivateCertificateTool;

impl ToolDefinition for ActivateCertificateTool {
    const NAME: &'static str = "activate_certificate";
    const DESCRIPTION: &'static str =
        "Activate an installed certificate, making it the one served for the site.";
    type Params = CertificateIdParams;

    fn annotations() -> ToolAnnotations {
        write()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Activating certificate {}", params.certificate_id);
        match ctx
            .api
            .certificates()
            .activate(params.server_id, params.site_id, params.certificate_id)
            .await
        {
            Ok(()) => envelope::message(format!(
                "Certificate {} activated",
                params.certificate_id
            )),
            Err(e) => envelope::failure(&e),
        }
    }
}

// ── delete_certificate ───────────────────────────────────────────────

pub struct DeleteCertificateTool;

impl ToolDefinition for DeleteCertificateTool {
    const NAME: &'static str = "delete_certificate";
    const DESCRIPTION: &'static str = "Delete a certificate from a site.";
    type Params = CertificateIdParams;

    fn annotations() -> ToolAnnotations {
        destructive()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        params.check()
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!("Deleting certificate {}", params.certificate_id);
        match ctx
            .api
            .certificates()
            .delete(params.server_id, params.site_id, params.certificate_id)
            .await
        {
            Ok(()) => envelope::message(format!(
                "Certificate {} deleted",
                params.certificate_id
            )),
            Err(e) => envelope::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obtain_requires_domains() {
        let params = ObtainCertificateParams {
            server_id: 1,
            site_id: 2,
            domains: vec![],
        };
        assert!(ObtainCertificateTool::validate(&params).is_err());

        let params = ObtainCertificateParams {
            server_id: 1,
            site_id: 2,
            domains: vec!["example.com".to_string()],
        };
        assert!(ObtainCertificateTool::validate(&params).is_ok());
    }

    #[test]
    fn test_certificate_id_check() {
        let params = CertificateIdParams {
            server_id: 1,
            site_id: 1,
            certificate_id: 0,
        };
        assert!(GetCertificateTool::validate(&params).is_err());
    }
}
