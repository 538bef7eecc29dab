//! Certificate expiry scan composite tool.

use std::sync::Arc;

use chrono::Utc;
use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::api::types::Certificate;
use crate::domains::tools::context::ToolContext;
use crate::domains::tools::definition::{ToolDefinition, read_only};
use crate::domains::tools::envelope;

fn default_threshold_days() -> i64 {
    30
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CertScanParams {
    /// Certificates expiring within this many days are flagged.
    #[schemars(description = "Days-to-expiry threshold for the expiring_soon bucket (default 30)")]
    #[serde(default = "default_threshold_days")]
    pub threshold_days: i64,
}

/// Sweep every certificate on the account and bucket it by urgency.
///
/// Fans out servers -> sites -> certificates. Buckets:
/// - `action_required`: expired, or never issued (no expiry date);
/// - `expiring_soon`: expires within `threshold_days`;
/// - `healthy`: everything else.
/// Servers or sites that cannot be listed are recorded under `errors`
/// and the sweep continues.
pub struct CertificateExpiryScanTool;

impl ToolDefinition for CertificateExpiryScanTool {
    const NAME: &'static str = "certificate_expiry_scan";
    const DESCRIPTION: &'static str =
        "Scan all certificates across every server and site, bucketing them into healthy, expiring_soon, and action_required by days until expiry.";
    type Params = CertScanParams;

    fn annotations() -> ToolAnnotations {
        read_only()
    }

    fn validate(params: &Self::Params) -> Result<(), String> {
        if params.threshold_days < 1 {
            return Err("threshold_days must be >= 1".to_string());
        }
        Ok(())
    }

    async fn run(params: Self::Params, ctx: Arc<ToolContext>) -> CallToolResult {
        info!(
            "Certificate expiry scan (threshold {} days)",
            params.threshold_days
        );
        let now = Utc::now();

        let mut healthy = Vec::new();
        let mut expiring_soon = Vec::new();
        let mut action_required = Vec::new();
        let mut errors = Vec::new();

        let servers = match ctx.api.servers().list().await {
            Ok(list) => list.servers,
            Err(e) => return envelope::failure(&e),
        };

        for server in &servers {
            let sites = match ctx.api.sites().list(server.id).await {
                Ok(list) => list.sites,
                Err(e) => {
                    warn!("site listing failed for server {}: {e}", server.id);
                    errors.push(json!({ "server_id": server.id, "error": e.to_string() }));
                    continue;
                }
            };

            for site in &sites {
                let certs = match ctx.api.certificates().list(server.id, site.id).await {
                    Ok(list) => list.certificates,
                    Err(e) => {
                        warn!(
                            "certificate listing failed for site {} on server {}: {e}",
                            site.id, server.id
                        );
                        errors.push(json!({
                            "server_id": server.id,
                            "site_id": site.id,
                            "error": e.to_string(),
                        }));
                        continue;
                    }
                };

                for cert in &certs {
                    let entry = describe(cert, now);
                    match cert.days_until_expiry(now) {
                        None => action_required.push(entry),
                        Some(days) if days < 0 => action_required.push(entry),
                        Some(days) if days <= params.threshold_days => expiring_soon.push(entry),
                        Some(_) => healthy.push(entry),
                    }
                }
            }
        }

        let mut body = json!({
            "threshold_days": params.threshold_days,
            "scanned_servers": servers.len(),
            "healthy_count": healthy.len(),
            "expiring_soon_count": expiring_soon.len(),
            "action_required_count": action_required.len(),
            "healthy": healthy,
            "expiring_soon": expiring_soon,
            "action_required": action_required,
        });
        if !errors.is_empty() {
            body["errors"] = Value::Array(errors);
        }

        envelope::json(body)
    }
}

fn describe(cert: &Certificate, now: chrono::DateTime<Utc>) -> Value {
    json!({
        "certificate_id": cert.id,
        "server_id": cert.server_id,
        "site_id": cert.site_id,
        "domain": cert.domain,
        "status": cert.status,
        "expires_at": cert.expires_at,
        "days_remaining": cert.days_until_expiry(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let params: CertScanParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.threshold_days, 30);
    }

    #[test]
    fn test_threshold_must_be_positive() {
        let params = CertScanParams { threshold_days: 0 };
        assert!(CertificateExpiryScanTool::validate(&params).is_err());
    }
}
