//! Server and account types.

use serde::{Deserialize, Serialize};

/// A provisioned server - from `GET /servers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    /// Public address; `None` until provisioning assigns one.
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub private_ip_address: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub php_version: Option<String>,
    /// Upstream lifecycle string (`provisioning`, `installed`, ...).
    pub status: String,
    #[serde(default)]
    pub ssh_port: Option<u16>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Servers on the account - from `GET /servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerList {
    pub servers: Vec<Server>,
}

impl ServerList {
    pub fn count(&self) -> usize {
        self.servers.len()
    }
}

/// Payload for `POST /servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub php_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubuntu_version: Option<String>,
}

/// Payload for `PUT /servers/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateServer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

/// The account owning the API token - from `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_round_trip() {
        let wire = json!({
            "id": 7,
            "name": "web-01",
            "ip_address": "192.168.1.1",
            "private_ip_address": null,
            "provider": "ocean2",
            "region": "ams3",
            "size": "2GB",
            "php_version": "php83",
            "status": "installed",
            "ssh_port": 22,
            "created_at": "2026-01-10 09:00:00"
        });

        let server: Server = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(server.id, 7);
        assert_eq!(server.ip_address.as_deref(), Some("192.168.1.1"));
        assert_eq!(server.private_ip_address, None);

        assert_eq!(serde_json::to_value(&server).unwrap(), wire);
    }

    #[test]
    fn test_server_ignores_unknown_wire_fields() {
        let server: Server = serde_json::from_value(json!({
            "id": 1,
            "name": "web-01",
            "status": "provisioning",
            "some_future_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(server.status, "provisioning");
        assert_eq!(server.ip_address, None);
    }

    #[test]
    fn test_update_server_omits_unset_fields() {
        let update = UpdateServer {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let wire = serde_json::to_value(&update).unwrap();
        assert_eq!(wire, json!({"name": "renamed"}));
    }

    #[test]
    fn test_empty_server_list() {
        let list: ServerList = serde_json::from_value(json!({"servers": []})).unwrap();
        assert_eq!(list.count(), 0);
    }
}
