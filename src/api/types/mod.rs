//! Data objects for the Shipyard API.
//!
//! Every type here is an immutable snapshot of one upstream entity at
//! response time. The wire format is snake_case JSON, which matches Rust
//! field naming, so serde derive is the entire field-name mapping: unknown
//! wire keys are ignored, absent optional keys become `None`, and
//! re-serializing reproduces every declared field.
//!
//! Conventions:
//! - `id` (and parent ids) are always present; everything the upstream
//!   fills in asynchronously is `Option<T>`.
//! - Status/state strings are passed through opaquely; the upstream
//!   vocabulary grows without notice and is never validated locally.
//! - List endpoints return a named collection wrapper, never a bare array.
//! - `Create*` types are strict field subsets taken on creation.
//! - `Update*` types serialize only the fields that were provided;
//!   an omitted field means "leave unchanged".

mod certificate;
mod database;
mod misc;
mod monitoring;
mod security;
mod server;
mod site;
mod workers;

pub use certificate::{Certificate, CertificateList, ObtainCertificate};
pub use database::{
    CreateDatabase, CreateDatabaseUser, Database, DatabaseList, DatabaseUser, DatabaseUserList,
    UpdateDatabaseUser,
};
pub use misc::{
    CreateNginxTemplate, CreateRecipe, NginxTemplate, NginxTemplateList, Recipe, RecipeList,
    RunRecipe, UpdateNginxTemplate,
};
pub use monitoring::{
    BackupConfig, BackupConfigList, CreateBackupConfig, CreateMonitor, CreateWebhook, Monitor,
    MonitorList, Webhook, WebhookList,
};
pub use security::{
    CreateFirewallRule, CreateRedirectRule, CreateSecurityRule, CreateSshKey, Credential,
    FirewallRule, FirewallRuleList, NewCredential, RedirectRule, RedirectRuleList, SecurityRule,
    SecurityRuleList, SshKey, SshKeyList,
};
pub use server::{CreateServer, Server, ServerList, UpdateServer, User};
pub use site::{
    CreateSite, Deployment, DeploymentList, Site, SiteList, UpdateDeploymentScript,
};
pub use workers::{
    CreateDaemon, CreateScheduledJob, CreateWorker, Daemon, DaemonList, ScheduledJob,
    ScheduledJobList, Worker, WorkerList,
};
