//! Getting-started guide resource.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Introductory documentation for agents connecting to this server.
pub struct GettingStartedResource;

impl ResourceDefinition for GettingStartedResource {
    const URI: &'static str = "shipyard://docs/getting-started";
    const NAME: &'static str = "Getting Started";
    const DESCRIPTION: &'static str =
        "How to configure credentials and start managing Shipyard servers through this MCP server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(
            r#"# Getting Started

This MCP server exposes the Shipyard server-management API as tools.

## Credentials

Set `MCP_SHIPYARD_API_KEY` to a Shipyard API token before starting the
server. Without it the server still runs, but no Shipyard tools are
registered. `MCP_SHIPYARD_API_URL` overrides the API endpoint (useful
for self-hosted installations).

## First steps

1. Call `list_servers` to see every server on the account.
2. Call `get_server` with a `server_id` for details on one server.
3. Call `list_sites` with a `server_id` to see what it hosts.
4. Call `server_health_check` for a combined overview: server details,
   sites, daemons, and monitor alerts in one payload.

## Conventions

- Every tool returns a JSON envelope. `"success": true` carries the
  requested data; `"success": false` carries an `error` message from
  the upstream API.
- List results always include a `count` and a named array, even when
  empty.
- Ids are positive integers scoped to their parent: site 3 on server 7
  is addressed as `server_id: 7, site_id: 3`.
- Tools annotated destructive (delete, reboot, restart) should be
  confirmed with the user before calling.
"#
            .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getting_started_metadata() {
        assert_eq!(GettingStartedResource::URI, "shipyard://docs/getting-started");
        assert_eq!(GettingStartedResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_getting_started_mentions_credential_var() {
        let ResourceContent::Text(text) = GettingStartedResource::content() else {
            panic!("expected text content");
        };
        assert!(text.contains("MCP_SHIPYARD_API_KEY"));
    }
}
