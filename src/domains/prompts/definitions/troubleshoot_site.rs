//! Site troubleshooting workflow prompt.

use super::{PromptDefinition, optional_arg, required_arg};
use rmcp::model::PromptArgument;

/// Guides an agent through diagnosing a misbehaving site.
pub struct TroubleshootSitePrompt;

impl PromptDefinition for TroubleshootSitePrompt {
    const NAME: &'static str = "troubleshoot_site";
    const DESCRIPTION: &'static str =
        "Diagnostic workflow for a site that is down or misbehaving";

    fn template() -> &'static str {
        r#"Troubleshoot site {{site_id}} on server {{server_id}}{{#if symptom}} (reported symptom: {{symptom}}){{/if}}.

Work through these checks and stop at the first finding:

1. `server_health_check` on server {{server_id}} - is the server itself
   up, and are any monitors alerting?
2. `get_site` - is the site's status "installed"? What is its
   deployment_status?
3. `list_deployments` - did the most recent deployment fail? Compare
   its commit to what the user expects to be live.
4. `list_certificates` - if the symptom is TLS-related, check for an
   expired or inactive certificate.
5. `list_workers` - for queue-backed symptoms, check worker status and
   restart stopped workers with `restart_worker`.

Report findings as: symptom, probable cause, evidence (which tool
showed it), and the suggested fix. Ask before running any destructive
tool (restart, reboot, delete)."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("server_id", "Numeric id of the server"),
            required_arg("site_id", "Numeric id of the site"),
            optional_arg("symptom", "What the user reports is wrong"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_troubleshoot_site_metadata() {
        assert_eq!(TroubleshootSitePrompt::NAME, "troubleshoot_site");
        let args = TroubleshootSitePrompt::arguments();
        assert_eq!(args.len(), 3);
        assert_eq!(args[2].required, Some(false));
    }

    #[test]
    fn test_template_references_tools() {
        let template = TroubleshootSitePrompt::template();
        assert!(template.contains("server_health_check"));
        assert!(template.contains("list_deployments"));
    }
}
