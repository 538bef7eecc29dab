//! Background-process façades: workers, scheduled jobs, daemons.

use crate::api::client::ApiClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    CreateDaemon, CreateScheduledJob, CreateWorker, Daemon, DaemonList, ScheduledJob,
    ScheduledJobList, Worker, WorkerList,
};

/// Operations on queue workers (site-scoped).
pub struct Workers<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn workers(&self) -> Workers<'_> {
        Workers { client: self }
    }

    pub fn scheduled_jobs(&self) -> ScheduledJobs<'_> {
        ScheduledJobs { client: self }
    }

    pub fn daemons(&self) -> Daemons<'_> {
        Daemons { client: self }
    }
}

impl Workers<'_> {
    pub async fn list(&self, server_id: u64, site_id: u64) -> ApiResult<WorkerList> {
        self.client
            .get(&format!("servers/{server_id}/sites/{site_id}/workers"))
            .await
    }

    pub async fn get(&self, server_id: u64, site_id: u64, worker_id: u64) -> ApiResult<Worker> {
        self.client
            .get(&format!(
                "servers/{server_id}/sites/{site_id}/workers/{worker_id}"
            ))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        site_id: u64,
        payload: &CreateWorker,
    ) -> ApiResult<Worker> {
        self.client
            .post(
                &format!("servers/{server_id}/sites/{site_id}/workers"),
                payload,
            )
            .await
    }

    pub async fn delete(&self, server_id: u64, site_id: u64, worker_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!(
                "servers/{server_id}/sites/{site_id}/workers/{worker_id}"
            ))
            .await
    }

    pub async fn restart(&self, server_id: u64, site_id: u64, worker_id: u64) -> ApiResult<()> {
        self.client
            .action(&format!(
                "servers/{server_id}/sites/{site_id}/workers/{worker_id}/restart"
            ))
            .await
    }
}

/// Operations on cron-scheduled jobs (server-scoped).
pub struct ScheduledJobs<'a> {
    client: &'a ApiClient,
}

impl ScheduledJobs<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<ScheduledJobList> {
        self.client.get(&format!("servers/{server_id}/jobs")).await
    }

    pub async fn get(&self, server_id: u64, job_id: u64) -> ApiResult<ScheduledJob> {
        self.client
            .get(&format!("servers/{server_id}/jobs/{job_id}"))
            .await
    }

    pub async fn create(
        &self,
        server_id: u64,
        payload: &CreateScheduledJob,
    ) -> ApiResult<ScheduledJob> {
        self.client
            .post(&format!("servers/{server_id}/jobs"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, job_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/jobs/{job_id}"))
            .await
    }
}

/// Operations on supervised daemons (server-scoped).
pub struct Daemons<'a> {
    client: &'a ApiClient,
}

impl Daemons<'_> {
    pub async fn list(&self, server_id: u64) -> ApiResult<DaemonList> {
        self.client.get(&format!("servers/{server_id}/daemons")).await
    }

    pub async fn get(&self, server_id: u64, daemon_id: u64) -> ApiResult<Daemon> {
        self.client
            .get(&format!("servers/{server_id}/daemons/{daemon_id}"))
            .await
    }

    pub async fn create(&self, server_id: u64, payload: &CreateDaemon) -> ApiResult<Daemon> {
        self.client
            .post(&format!("servers/{server_id}/daemons"), payload)
            .await
    }

    pub async fn delete(&self, server_id: u64, daemon_id: u64) -> ApiResult<()> {
        self.client
            .delete(&format!("servers/{server_id}/daemons/{daemon_id}"))
            .await
    }

    pub async fn restart(&self, server_id: u64, daemon_id: u64) -> ApiResult<()> {
        self.client
            .action(&format!("servers/{server_id}/daemons/{daemon_id}/restart"))
            .await
    }
}
