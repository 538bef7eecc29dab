//! Per-domain façades over the Shipyard API.
//!
//! Each façade pairs one upstream operation with one request build, one
//! send through [`ApiClient`](super::client::ApiClient), and one response
//! mapping. Façades never catch errors: anything the client raises
//! propagates unchanged to the tool dispatch layer, which is the single
//! place failures become envelopes.

mod certificates;
mod databases;
mod misc;
mod monitoring;
mod security;
mod servers;
mod sites;
mod workers;

pub use certificates::Certificates;
pub use databases::{DatabaseUsers, Databases};
pub use misc::{NginxTemplates, Recipes};
pub use monitoring::{Backups, Monitors, Webhooks};
pub use security::{Firewall, Redirects, SecurityRules, SshKeys};
pub use servers::{Account, Servers};
pub use sites::Sites;
pub use workers::{Daemons, ScheduledJobs, Workers};
