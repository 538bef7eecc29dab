//! Tool definitions module.
//!
//! One file per domain area, mirroring the upstream API surface. Each
//! tool implements [`ToolDefinition`](super::definition::ToolDefinition);
//! the registry and router pick them up from here.

pub mod certificates;
pub mod common;
pub mod composite;
pub mod databases;
pub mod monitoring;
pub mod recipes;
pub mod schedule;
pub mod security;
pub mod servers;
pub mod sites;
pub mod workers;

pub use certificates::{
    ActivateCertificateTool, DeleteCertificateTool, GetCertificateTool, ListCertificatesTool,
    ObtainCertificateTool,
};
pub use composite::{
    BulkDeploySitesTool, CertificateExpiryScanTool, CloneSiteTool, ServerHealthCheckTool,
};
pub use databases::{
    CreateDatabaseTool, CreateDatabaseUserTool, DeleteDatabaseTool, DeleteDatabaseUserTool,
    GetDatabaseTool, ListDatabaseUsersTool, ListDatabasesTool,
};
pub use monitoring::{
    CreateMonitorTool, CreateWebhookTool, DeleteMonitorTool, DeleteWebhookTool, ListMonitorsTool,
    ListWebhooksTool,
};
pub use recipes::{CreateRecipeTool, DeleteRecipeTool, ListRecipesTool, RunRecipeTool};
pub use schedule::{
    CreateDaemonTool, CreateScheduledJobTool, DeleteDaemonTool, DeleteScheduledJobTool,
    ListDaemonsTool, ListScheduledJobsTool, RestartDaemonTool,
};
pub use security::{
    AddSshKeyTool, CreateFirewallRuleTool, DeleteFirewallRuleTool, DeleteSshKeyTool,
    ListFirewallRulesTool, ListSshKeysTool,
};
pub use servers::{
    CreateServerTool, DeleteServerTool, GetServerTool, ListServersTool, RebootServerTool,
    UpdateServerTool,
};
pub use sites::{
    CreateSiteTool, DeleteSiteTool, DeploySiteTool, GetDeploymentScriptTool, GetSiteTool,
    ListDeploymentsTool, ListSitesTool, UpdateDeploymentScriptTool,
};
pub use workers::{CreateWorkerTool, DeleteWorkerTool, ListWorkersTool, RestartWorkerTool};
