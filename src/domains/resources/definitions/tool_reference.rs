//! Tool reference resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Reference list of every tool family exposed by this server.
pub struct ToolReferenceResource;

impl ResourceDefinition for ToolReferenceResource {
    const URI: &'static str = "shipyard://docs/tool-reference";
    const NAME: &'static str = "Tool Reference";
    const DESCRIPTION: &'static str = "Overview of all Shipyard tools grouped by domain area";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(
            r#"# Tool Reference

## Servers
`list_servers`, `get_server`, `create_server`, `update_server`,
`reboot_server`, `delete_server`

## Sites & Deployments
`list_sites`, `get_site`, `create_site`, `delete_site`, `deploy_site`,
`get_deployment_script`, `update_deployment_script`, `list_deployments`

## Databases
`list_databases`, `get_database`, `create_database`, `delete_database`,
`list_database_users`, `create_database_user`, `delete_database_user`

## Certificates
`list_certificates`, `get_certificate`, `obtain_certificate`,
`activate_certificate`, `delete_certificate`

## Queue Workers
`list_workers`, `create_worker`, `restart_worker`, `delete_worker`

## Scheduled Jobs & Daemons
`list_scheduled_jobs`, `create_scheduled_job`, `delete_scheduled_job`,
`list_daemons`, `create_daemon`, `restart_daemon`, `delete_daemon`

## Firewall & SSH
`list_firewall_rules`, `create_firewall_rule`, `delete_firewall_rule`,
`list_ssh_keys`, `add_ssh_key`, `delete_ssh_key`

## Monitoring & Webhooks
`list_monitors`, `create_monitor`, `delete_monitor`, `list_webhooks`,
`create_webhook`, `delete_webhook`

## Recipes
`list_recipes`, `create_recipe`, `run_recipe`, `delete_recipe`

## Composite
- `server_health_check` - server details, sites, daemons, and monitor
  alerts in one call, with per-section error reporting
- `bulk_deploy_sites` - deploy many sites; per-target success/failure
- `certificate_expiry_scan` - sweep all certificates, bucket by expiry
- `clone_site` - re-create a site's configuration on another server
"#
            .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_reference_metadata() {
        assert_eq!(ToolReferenceResource::URI, "shipyard://docs/tool-reference");
    }
}
