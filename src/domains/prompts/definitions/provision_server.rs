//! Server provisioning workflow prompt.

use super::{PromptDefinition, optional_arg, required_arg};
use rmcp::model::PromptArgument;

/// Guides an agent through provisioning a new server end to end.
pub struct ProvisionServerPrompt;

impl PromptDefinition for ProvisionServerPrompt {
    const NAME: &'static str = "provision_server";
    const DESCRIPTION: &'static str =
        "Step-by-step workflow for provisioning a new Shipyard server and preparing it for sites";

    fn template() -> &'static str {
        r#"Provision a new Shipyard server named "{{name}}"{{#if provider}} on the {{provider}} provider{{/if}}{{#if region}} in region {{region}}{{/if}}.

Follow this sequence, checking each result before continuing:

1. Call `create_server` with name "{{name}}"{{#if provider}}, provider "{{provider}}"{{/if}}{{#if region}}, region "{{region}}"{{/if}}.
2. Poll `get_server` until the server's status reaches "installed".
   Provisioning usually takes several minutes; do not treat an
   intermediate status as failure.
3. Call `list_firewall_rules` and confirm rules for ports 22, 80, and
   443 exist; create any that are missing with `create_firewall_rule`.
4. Create a monitor with `create_monitor` (cpu_load, gte, 2.0, 5) so the
   server alerts under sustained load.
5. Report the server id, IP address, and status back to the user.

If any step returns "success": false, stop and report the error instead
of continuing."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("name", "Display name for the new server"),
            optional_arg("provider", "Infrastructure provider slug"),
            optional_arg("region", "Provider region identifier"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_server_metadata() {
        assert_eq!(ProvisionServerPrompt::NAME, "provision_server");
        let args = ProvisionServerPrompt::arguments();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_template_references_tools() {
        let template = ProvisionServerPrompt::template();
        assert!(template.contains("create_server"));
        assert!(template.contains("get_server"));
        assert!(template.contains("create_firewall_rule"));
    }
}
