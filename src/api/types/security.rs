//! Access-control types: firewall rules, SSH keys, security rules,
//! redirect rules.

use serde::{Deserialize, Serialize};

// ── Firewall rules ───────────────────────────────────────────────────

/// A firewall rule on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: u64,
    pub server_id: u64,
    pub name: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// `allow` or `deny` as far as the upstream documents today.
    #[serde(default, rename = "type")]
    pub rule_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRuleList {
    pub rules: Vec<FirewallRule>,
}

impl FirewallRuleList {
    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

/// Payload for `POST /servers/{id}/firewall-rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFirewallRule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
}

// ── SSH keys ─────────────────────────────────────────────────────────

/// An SSH key installed on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    pub id: u64,
    pub server_id: u64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshKeyList {
    pub keys: Vec<SshKey>,
}

impl SshKeyList {
    pub fn count(&self) -> usize {
        self.keys.len()
    }
}

/// Payload for `POST /servers/{id}/keys`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSshKey {
    pub name: String,
    /// Public key material.
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// ── Security rules (basic-auth protection) ───────────────────────────

/// A basic-auth credential belonging to a security rule. Passwords are
/// write-only upstream and never echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: u64,
    pub username: String,
}

/// A credential as submitted on rule creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCredential {
    pub username: String,
    pub password: String,
}

/// A security rule protecting a site path with basic auth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRule {
    pub id: u64,
    pub site_id: u64,
    pub name: String,
    /// `None` protects the whole site.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub credentials: Vec<Credential>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRuleList {
    pub rules: Vec<SecurityRule>,
}

impl SecurityRuleList {
    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

/// Payload for `POST .../security-rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSecurityRule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub credentials: Vec<NewCredential>,
}

// ── Redirect rules ───────────────────────────────────────────────────

/// A redirect rule on a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectRule {
    pub id: u64,
    pub site_id: u64,
    pub from: String,
    pub to: String,
    /// `redirect` (302) or `permanent` (301).
    #[serde(default, rename = "type")]
    pub redirect_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectRuleList {
    pub rules: Vec<RedirectRule>,
}

impl RedirectRuleList {
    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

/// Payload for `POST .../redirect-rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRedirectRule {
    pub from: String,
    pub to: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_firewall_rule_round_trip() {
        let wire = json!({
            "id": 21,
            "server_id": 7,
            "name": "allow-https",
            "ip_address": null,
            "port": 443,
            "type": "allow",
            "status": "installed",
            "created_at": "2026-01-05 10:00:00"
        });
        let rule: FirewallRule = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(rule.rule_type.as_deref(), Some("allow"));
        assert_eq!(serde_json::to_value(&rule).unwrap(), wire);
    }

    #[test]
    fn test_security_rule_credentials_default_empty() {
        let rule: SecurityRule = serde_json::from_value(json!({
            "id": 1,
            "site_id": 3,
            "name": "staging-lock"
        }))
        .unwrap();
        assert!(rule.credentials.is_empty());
        assert_eq!(rule.path, None);
    }
}
