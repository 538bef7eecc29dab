//! Observability types: monitors, backup configurations, webhooks.

use serde::{Deserialize, Serialize};

// ── Monitors ─────────────────────────────────────────────────────────

/// A metric monitor on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: u64,
    pub server_id: u64,
    /// Monitored metric (`cpu_load`, `used_memory`, `disk_usage`, ...).
    #[serde(rename = "type")]
    pub monitor_type: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Minutes the threshold must hold before the monitor fires.
    #[serde(default)]
    pub minutes: Option<u32>,
    /// Upstream-evaluated state (`OK`, `ALERT`, ...).
    pub state: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorList {
    pub monitors: Vec<Monitor>,
}

impl MonitorList {
    pub fn count(&self) -> usize {
        self.monitors.len()
    }
}

/// Payload for `POST /servers/{id}/monitors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMonitor {
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub operator: String,
    pub threshold: f64,
    pub minutes: u32,
}

// ── Backup configurations ────────────────────────────────────────────

/// A database backup configuration on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupConfig {
    pub id: u64,
    pub server_id: u64,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    /// Ids of databases included in this backup.
    #[serde(default)]
    pub databases: Vec<u64>,
    pub status: String,
    #[serde(default)]
    pub last_backup_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupConfigList {
    pub backups: Vec<BackupConfig>,
}

impl BackupConfigList {
    pub fn count(&self) -> usize {
        self.backups.len()
    }
}

/// Payload for `POST /servers/{id}/backup-configs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBackupConfig {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub databases: Vec<u64>,
}

// ── Webhooks ─────────────────────────────────────────────────────────

/// A deployment webhook on a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookList {
    pub webhooks: Vec<Webhook>,
}

impl WebhookList {
    pub fn count(&self) -> usize {
        self.webhooks.len()
    }
}

/// Payload for `POST .../webhooks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWebhook {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_monitor_round_trip() {
        let wire = json!({
            "id": 2,
            "server_id": 7,
            "type": "cpu_load",
            "operator": "gte",
            "threshold": 1.5,
            "minutes": 5,
            "state": "OK",
            "created_at": null
        });
        let monitor: Monitor = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(monitor.monitor_type, "cpu_load");
        assert_eq!(serde_json::to_value(&monitor).unwrap(), wire);
    }

    #[test]
    fn test_backup_config_default_databases() {
        let backup: BackupConfig = serde_json::from_value(json!({
            "id": 1,
            "server_id": 7,
            "status": "installed"
        }))
        .unwrap();
        assert!(backup.databases.is_empty());
    }
}
