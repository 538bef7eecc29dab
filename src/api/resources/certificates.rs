//! Certificate façade.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{Certificate, CertificateList, ObtainCertificate};

/// Operations on site certificates.
pub struct Certificates<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn certificates(&self) -> Certificates<'_> {
        Certificates { client: self }
    }
}

impl Certificates<'_> {
    pub async fn list(&self, server_id: u64, site_id: u64) -> ApiResult<CertificateList> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/certificates"
            ))
            .await
    }

    pub async fn get(
        &self,
        server_id: u64,
        site_id: u64,
        certificate_id: u64,
    ) -> ApiResult<Certificate> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/certificates/{certificate_id}"
            ))
            .await
    }

    /// Request a Let's Encrypt certificate for the given domains.
    /// Issuance is asynchronous upstream; the returned certificate has no
    /// `expires_at` until it completes.
    pub async fn obtain(
        &self,
        server_id: u64,
        site_id: u64,
        payload: &ObtainCertificate,
    ) -> ApiResult<Certificate> {
        self.client
            .post(
                &format!("servers/{server_id}/sites/{site_id}/certificates/letsencrypt"),
                payload,
            )
            .await
    }

    pub async fn activate(
        &self,
        server_id: u64,
        site_id: u64,
        certificate_id: u64,
    ) -> ApiResult<()> {
        self.client
            .action(&format!(
                "servers/{server_id}/sites/{site_id}/certificates/{certificate_id}/activate"
            ))
            .await
    }

    pub async fn delete(
        &self,
        server_id: u64,
        site_id: u64,
        certificate_id: u64,
    ) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "servers/{server_id}/sites/{site_id}/certificates/{certificate_id}"
            ))
            .await
    }
}
