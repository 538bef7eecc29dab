//! Prompt template rendering.
//!
//! Templates use `{{variable}}` placeholders and
//! `{{#if variable}}...{{else}}...{{/if}}` conditionals. Conditionals are
//! expanded first, then variables substituted; leftover placeholders for
//! optional arguments are stripped.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.template, arguments)?;
        Ok(substitute(&expanded, arguments))
    }
}

/// Expand `{{#if var}}...{{else}}...{{/if}}` blocks. A variable counts as
/// set when it is present and non-empty. Blocks do not nest.
fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    const IF_OPEN: &str = "{{#if ";
    const IF_CLOSE: &str = "{{/if}}";
    const ELSE: &str = "{{else}}";

    let mut out = template.to_string();

    while let Some(start) = out.find(IF_OPEN) {
        let tag_end = out[start..]
            .find("}}")
            .map(|i| start + i)
            .ok_or_else(|| PromptError::template("unclosed {{#if}} tag"))?;
        let var = out[start + IF_OPEN.len()..tag_end].trim().to_string();

        let close = out[tag_end..]
            .find(IF_CLOSE)
            .map(|i| tag_end + i)
            .ok_or_else(|| PromptError::template("missing {{/if}} tag"))?;
        let inner = &out[tag_end + 2..close];

        let (when_set, when_unset) = match inner.find(ELSE) {
            Some(p) => (&inner[..p], &inner[p + ELSE.len()..]),
            None => (inner, ""),
        };

        let is_set = arguments.get(&var).is_some_and(|v| !v.is_empty());
        let keep = if is_set { when_set } else { when_unset };

        out = format!("{}{}{}", &out[..start], keep, &out[close + IF_CLOSE.len()..]);
    }

    Ok(out)
}

/// Substitute `{{variable}}` placeholders, then strip whatever simple
/// placeholders remain (unset optional arguments).
fn substitute(template: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = template.to_string();
    for (key, value) in arguments {
        out = out.replace(&format!("{{{{{key}}}}}"), value);
    }
    strip_placeholders(&out)
}

fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        match rest[start..].find("}}") {
            Some(offset) => {
                let inner = &rest[start + 2..start + offset];
                // keep structural tags, drop plain placeholders
                if inner.contains('#') || inner.contains('/') {
                    out.push_str(&rest[start..start + offset + 2]);
                }
                rest = &rest[start + offset + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str) -> PromptTemplate {
        PromptTemplate {
            name: "test".to_string(),
            description: None,
            arguments: vec![],
            template: body.to_string(),
        }
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let rendered = template("Deploy {{domain}} now.")
            .render(&args(&[("domain", "example.com")]))
            .unwrap();
        assert_eq!(rendered, "Deploy example.com now.");
    }

    #[test]
    fn test_conditional_with_value() {
        let rendered = template("Deploy{{#if branch}} branch {{branch}}{{/if}}.")
            .render(&args(&[("branch", "main")]))
            .unwrap();
        assert_eq!(rendered, "Deploy branch main.");
    }

    #[test]
    fn test_conditional_without_value() {
        let rendered = template("Deploy{{#if branch}} branch {{branch}}{{/if}}.")
            .render(&args(&[]))
            .unwrap();
        assert_eq!(rendered, "Deploy.");
    }

    #[test]
    fn test_conditional_with_else() {
        let rendered = template("Target: {{#if server}}{{server}}{{else}}all servers{{/if}}")
            .render(&args(&[]))
            .unwrap();
        assert_eq!(rendered, "Target: all servers");
    }

    #[test]
    fn test_unset_optional_placeholder_stripped() {
        let rendered = template("Hello {{name}}!").render(&args(&[])).unwrap();
        assert_eq!(rendered, "Hello !");
    }

    #[test]
    fn test_unclosed_if_is_error() {
        let result = template("{{#if x}}oops").render(&args(&[]));
        assert!(result.is_err());
    }
}
