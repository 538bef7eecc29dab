//! Background-process types: queue workers, scheduled jobs, daemons.

use serde::{Deserialize, Serialize};

// ── Queue workers ────────────────────────────────────────────────────

/// A queue worker attached to a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: u64,
    pub site_id: u64,
    pub connection: String,
    #[serde(default)]
    pub queue: Option<String>,
    #[serde(default)]
    pub timeout: Option<u32>,
    #[serde(default)]
    pub sleep: Option<u32>,
    #[serde(default)]
    pub processes: Option<u32>,
    #[serde(default)]
    pub daemon: bool,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerList {
    pub workers: Vec<Worker>,
}

impl WorkerList {
    pub fn count(&self) -> usize {
        self.workers.len()
    }
}

/// Payload for `POST .../workers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorker {
    pub connection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon: Option<bool>,
}

impl From<&Worker> for CreateWorker {
    /// Re-create payload from an existing worker (used when cloning sites).
    fn from(worker: &Worker) -> Self {
        Self {
            connection: worker.connection.clone(),
            queue: worker.queue.clone(),
            timeout: worker.timeout,
            sleep: worker.sleep,
            processes: worker.processes,
            daemon: Some(worker.daemon),
        }
    }
}

// ── Scheduled jobs ───────────────────────────────────────────────────

/// A cron-scheduled job on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJob {
    pub id: u64,
    pub server_id: u64,
    pub command: String,
    #[serde(default)]
    pub user: Option<String>,
    /// Named frequency (`minutely`, `hourly`, `nightly`, `custom`, ...).
    pub frequency: String,
    /// Raw cron expression when `frequency` is `custom`.
    #[serde(default)]
    pub cron: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledJobList {
    pub jobs: Vec<ScheduledJob>,
}

impl ScheduledJobList {
    pub fn count(&self) -> usize {
        self.jobs.len()
    }
}

/// Payload for `POST /servers/{id}/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduledJob {
    pub command: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
}

impl From<&ScheduledJob> for CreateScheduledJob {
    fn from(job: &ScheduledJob) -> Self {
        Self {
            command: job.command.clone(),
            frequency: job.frequency.clone(),
            user: job.user.clone(),
            cron: job.cron.clone(),
        }
    }
}

// ── Daemons ──────────────────────────────────────────────────────────

/// A supervisor-managed daemon on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Daemon {
    pub id: u64,
    pub server_id: u64,
    pub command: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub processes: Option<u32>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonList {
    pub daemons: Vec<Daemon>,
}

impl DaemonList {
    pub fn count(&self) -> usize {
        self.daemons.len()
    }
}

/// Payload for `POST /servers/{id}/daemons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDaemon {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_worker_round_trip() {
        let wire = json!({
            "id": 9,
            "site_id": 3,
            "connection": "redis",
            "queue": "default",
            "timeout": 60,
            "sleep": 3,
            "processes": 2,
            "daemon": true,
            "status": "installed",
            "created_at": null
        });
        let worker: Worker = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(worker.connection, "redis");
        assert_eq!(serde_json::to_value(&worker).unwrap(), wire);
    }

    #[test]
    fn test_create_worker_from_existing() {
        let worker: Worker = serde_json::from_value(json!({
            "id": 9,
            "site_id": 3,
            "connection": "redis",
            "queue": "emails",
            "status": "installed"
        }))
        .unwrap();
        let create = CreateWorker::from(&worker);
        assert_eq!(create.connection, "redis");
        assert_eq!(create.queue.as_deref(), Some("emails"));
        assert_eq!(create.daemon, Some(false));
    }

    #[test]
    fn test_scheduled_job_custom_frequency() {
        let job: ScheduledJob = serde_json::from_value(json!({
            "id": 4,
            "server_id": 7,
            "command": "php artisan horizon:snapshot",
            "frequency": "custom",
            "cron": "*/5 * * * *",
            "status": "installed"
        }))
        .unwrap();
        assert_eq!(job.cron.as_deref(), Some("*/5 * * * *"));
    }
}
