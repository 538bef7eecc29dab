//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    AuditCertificatesPrompt, DeploySitePrompt, PromptDefinition, ProvisionServerPrompt,
    TroubleshootSitePrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<ProvisionServerPrompt>(),
        build_template::<DeploySitePrompt>(),
        build_template::<AuditCertificatesPrompt>(),
        build_template::<TroubleshootSitePrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        ProvisionServerPrompt::NAME,
        DeploySitePrompt::NAME,
        AuditCertificatesPrompt::NAME,
        TroubleshootSitePrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 4);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&"provision_server"));
        assert!(names.contains(&"deploy_site"));
        assert!(names.contains(&"audit_certificates"));
        assert!(names.contains(&"troubleshoot_site"));
    }

    #[test]
    fn test_prompt_names_match_registry() {
        assert_eq!(prompt_names().len(), get_all_prompts().len());
    }
}
