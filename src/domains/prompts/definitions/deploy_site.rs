//! Site deployment workflow prompt.

use super::{PromptDefinition, optional_arg, required_arg};
use rmcp::model::PromptArgument;

/// Guides an agent through a careful single-site deployment.
pub struct DeploySitePrompt;

impl PromptDefinition for DeploySitePrompt {
    const NAME: &'static str = "deploy_site";
    const DESCRIPTION: &'static str =
        "Workflow for deploying a site and verifying the deployment landed";

    fn template() -> &'static str {
        r#"Deploy site {{site_id}} on server {{server_id}}.

1. Call `get_site` with server_id {{server_id}} and site_id {{site_id}}.
   Confirm a repository is attached; if not, stop and tell the user.
2. Call `get_deployment_script` and summarize what the script does.
{{#if skip_review}}3. Call `deploy_site` immediately.{{else}}3. Show the script summary to the user and wait for confirmation, then call `deploy_site`.{{/if}}
4. After a short wait, call `list_deployments` and report the newest
   deployment's status, commit hash, and commit message.

If the deployment status is "failed", surface the failure rather than
retrying; deployments are not safe to retry blindly."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg("server_id", "Numeric id of the server"),
            required_arg("site_id", "Numeric id of the site"),
            optional_arg("skip_review", "Set to any value to skip the script review step"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_site_metadata() {
        assert_eq!(DeploySitePrompt::NAME, "deploy_site");
        let args = DeploySitePrompt::arguments();
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_template_references_tools() {
        let template = DeploySitePrompt::template();
        assert!(template.contains("deploy_site"));
        assert!(template.contains("list_deployments"));
    }
}
