//! Observability façades: monitors, backup configurations, webhooks.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    BackupConfig, BackupConfigList, CreateBackupConfig, CreateMonitor, CreateWebhook, Monitor,
    MonitorList, Webhook, WebhookList,
};

/// Operations on server metric monitors.
pub struct Monitors<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn monitors(&self) -> Monitors<'_> {
        Monitors { client: self }
    }

    pub fn backups(&self) -> Backups<'_> {
        Backups { client: self }
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }
}

impl Monitors<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<MonitorList> {
        self.client.get(&format!("servers/{server_id}/monitors")).await
    }

    pub async fn get(&self, server_id: u64, monitor_id: u64) -> ApiResult<Monitor> {
        self.client
            .get(&format!("servers/{server_id}/monitors/{monitor_id}"))
            .await
    }

    pub async fn create(&self, server_id: u64, payload: &CreateMonitor) -> ApiResult<Monitor> {
        self.client
            .post(&format!("servers/{server_id}/monitors"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, monitor_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/monitors/{monitor_id}"))
            .await
    }
}

/// Operations on database backup configurations.
pub struct Backups<'a> {
    client: &'a ApiClient,
}

impl Backups<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<BackupConfigList> {
        self.client
            .get(&format!("servers/{server_id}/backup-configs"))
            .await
    }

    pub async fn get(&self, server_id: u64, backup_id: u64) -> ApiResult<BackupConfig> {
        self.client
            .get(&format!("servers/{server_id}/backup-configs/{backup_id}"))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        payload: &CreateBackupConfig,
    ) -> ApiResult<BackupConfig> {
        self.client
            .post(&format!("servers/{server_id}/backup-configs"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, backup_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/backup-configs/{backup_id}"))
            .await
    }
}

/// Operations on site deployment webhooks.
pub struct Webhooks<'a> {
    client: &'a ApiClient,
}

impl Webhooks<'_> {
    pub async fn list(&self, server_id: u64, site_id: u64) -> ApiResult<WebhookList> {
        self.client
            .get(&format!("servers/{server_id}/sites/{site_id}/webhooks"))
            .await
    }

    pub async fn get(&self, server_id: u64, site_id: u64, webhook_id: u64) -> ApiResult<Webhook> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/webhooks/{webhook_id}"
            ))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        site_id: u64,
        payload: &CreateWebhook,
    ) -> ApiResult<Webhook> {
        self.client
            .post(
                &format!("servers/{server_id}/sites/{site_id}/webhooks"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, site_id: u64, webhook_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "servers/{server_id}/sites/{site_id}/webhooks/{webhook_id}"
            ))
            .await
    }
}
