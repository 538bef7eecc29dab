//! Deployment workflow guide resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Walkthrough of a typical deploy-a-site workflow.
pub struct DeploymentGuideResource;

impl ResourceDefinition for DeploymentGuideResource {
    const URI: &'static str = "shipyard://docs/deployment-guide";
    const NAME: &'static str = "Deployment Guide";
    const DESCRIPTION: &'static str =
        "Recommended workflow for deploying and verifying a site on Shipyard";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(
            r#"# Deployment Guide

## Deploying one site

1. `get_site` - confirm the site exists and has a repository attached.
2. `get_deployment_script` - review what will run on the server.
3. `deploy_site` - trigger the deployment. This returns immediately;
   the deployment itself runs on the server.
4. `list_deployments` - check the new deployment's status once it has
   had time to finish.

## Deploying a fleet

Use `bulk_deploy_sites` with the full list of site ids. Each target is
attempted independently and the result separates `successful` from
`failed`, so one bad site never blocks the rest.

## After changing the deployment script

`update_deployment_script` replaces the script atomically; the next
deployment (manual or quick-deploy) picks it up. There is no partial
update - send the complete script body.

## Certificates

After the first deployment of a new site, request a certificate with
`obtain_certificate`. Issuance is asynchronous: the certificate appears
with no expiry date until the upstream finishes DNS validation. Run
`certificate_expiry_scan` periodically to catch renewals that did not
happen.
"#
            .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_guide_metadata() {
        assert_eq!(
            DeploymentGuideResource::URI,
            "shipyard://docs/deployment-guide"
        );
        assert_eq!(DeploymentGuideResource::MIME_TYPE, "text/markdown");
    }
}
