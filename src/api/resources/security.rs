//! Access-control façades: firewall rules, SSH keys, security rules,
//! redirect rules.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    CreateFirewallRule, CreateRedirectRule, CreateSecurityRule, CreateSshKey, FirewallRule,
    FirewallRuleList, RedirectRule, RedirectRuleList, SecurityRule, SecurityRuleList, SshKey,
    SshKeyList,
};

/// Operations on server firewall rules.
pub struct Firewall<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn firewall(&self) -> Firewall<'_> {
        Firewall { client: self }
    }

    pub fn ssh_keys(&self) -> SshKeys<'_> {
        SshKeys { client: self }
    }

    pub fn security_rules(&self) -> SecurityRules<'_> {
        SecurityRules { client: self }
    }

    pub fn redirects(&self) -> Redirects<'_> {
        Redirects { client: self }
    }
}

impl Firewall<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<FirewallRuleList> {
        self.client
            .get(&format!("servers/{server_id}/firewall-rules"))
            .await
    }

    pub async fn get(&self, server_id: u64, rule_id: u64) -> ApiResult<FirewallRule> {
        self.client
            .get(&format!("servers/{server_id}/firewall-rules/{rule_id}"))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        payload: &CreateFirewallRule,
    ) -> ApiResult<FirewallRule> {
        self.client
            .post(&format!("servers/{server_id}/firewall-rules"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, rule_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/firewall-rules/{rule_id}"))
            .await
    }
}

/// Operations on server SSH keys.
pub struct SshKeys<'a> {
    client: &'a ApiClient,
}

impl SshKeys<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<SshKeyList> {
        self.client.get(&format!("servers/{server_id}/keys")).await
    }

    pub async fn get(&self, server_id: u64, key_id: u64) -> ApiResult<SshKey> {
        self.client
            .get(&format!("servers/{server_id}/keys/{key_id}"))
            .await
    }

    pub async fn create(&self, server_id: u64, payload: &CreateSshKey) -> ApiResult<SshKey> {
        self.client
            .post(&format!("servers/{server_id}/keys"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, key_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/keys/{key_id}"))
            .await
    }
}

/// Operations on site security rules (basic-auth protection).
pub struct SecurityRules<'a> {
    client: &'a ApiClient,
}

impl SecurityRules<'_> {
    pub async fn list(&self, server_id: u64, site_id: u64) -> ApiResult<SecurityRuleList> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/security-rules"
            ))
            .await
    }

    pub async fn get(
        &self,
        server_id: u64,
        site_id: u64,
        rule_id: u64,
    ) -> ApiResult<SecurityRule> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/security-rules/{rule_id}"
            ))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        site_id: u64,
        payload: &CreateSecurityRule,
    ) -> ApiResult<SecurityRule> {
        self.client
            .post(
                &format!("servers/{server_id}/sites/{site_id}/security-rules"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, site_id: u64, rule_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "servers/{server_id}/sites/{site_id}/security-rules/{rule_id}"
            ))
            .await
    }
}

/// Operations on site redirect rules.
pub struct Redirects<'a> {
    client: &'a ApiClient,
}

impl Redirects<'_> {
    pub async fn list(&self, server_id: u64, site_id: u64) -> ApiResult<RedirectRuleList> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/redirect-rules"
            ))
            .await
    }

    pub async fn get(
        &self,
        server_id: u64,
        site_id: u64,
        rule_id: u64,
    ) -> ApiResult<RedirectRule> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/redirect-rules/{rule_id}"
            ))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        site_id: u64,
        payload: &CreateRedirectRule,
    ) -> ApiResult<RedirectRule> {
        self.client
            .post(
                &format!("servers/{server_id}/sites/{site_id}/redirect-rules"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, site_id: u64, rule_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "servers/{server_id}/sites/{site_id}/redirect-rules/{rule_id}"
            ))
            .await
    }
}
