//! Prompt definitions module.
//!
//! Each prompt lives in its own file: metadata, arguments, and a
//! template referencing the server's tool names. Register new prompts in
//! `registry.rs`.

mod audit_certificates;
mod deploy_site;
mod provision_server;
mod troubleshoot_site;

pub use audit_certificates::AuditCertificatesPrompt;
pub use deploy_site::DeploySitePrompt;
pub use provision_server::ProvisionServerPrompt;
pub use troubleshoot_site::TroubleshootSitePrompt;

use rmcp::model::PromptArgument;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}

/// Shorthand for a required prompt argument.
pub(crate) fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// Shorthand for an optional prompt argument.
pub(crate) fn optional_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}
