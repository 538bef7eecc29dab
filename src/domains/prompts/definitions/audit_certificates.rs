//! Certificate audit workflow prompt.

use super::{PromptDefinition, optional_arg};
use rmcp::model::PromptArgument;

/// Guides an agent through a fleet-wide certificate review.
pub struct AuditCertificatesPrompt;

impl PromptDefinition for AuditCertificatesPrompt {
    const NAME: &'static str = "audit_certificates";
    const DESCRIPTION: &'static str =
        "Workflow for auditing TLS certificates across the whole account";

    fn template() -> &'static str {
        r#"Audit the TLS certificates on every Shipyard server.

1. Call `certificate_expiry_scan`{{#if threshold_days}} with threshold_days {{threshold_days}}{{else}} (the default 30-day threshold is fine){{/if}}.
2. For each certificate in `action_required`:
   - If it is expired, request a replacement with `obtain_certificate`
     for the same domains, then `activate_certificate` once issued.
   - If it was never issued (no expiry date), check its `request_status`
     via `get_certificate`; report stalled issuances to the user.
3. List the `expiring_soon` entries with their days remaining so the
   user can plan renewals.
4. If the scan reported per-server or per-site `errors`, list them -
   those parts of the fleet were not covered by this audit.

Summarize: how many certificates are healthy, expiring soon, and
needing action."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![optional_arg(
            "threshold_days",
            "Days-to-expiry threshold for flagging certificates (default 30)",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_certificates_metadata() {
        assert_eq!(AuditCertificatesPrompt::NAME, "audit_certificates");
        assert_eq!(AuditCertificatesPrompt::arguments().len(), 1);
    }

    #[test]
    fn test_template_references_scan_tool() {
        assert!(
            AuditCertificatesPrompt::template().contains("certificate_expiry_scan")
        );
    }
}
