//! Uniform JSON envelopes returned by every tool.
//!
//! Success: `{"success": true, ...}` with the entity's fields flattened
//! in, or a `message` for side-effect-only operations. Failure:
//! `{"success": false, "error": "<upstream message>"}`. Either way the
//! invocation completes; failures are data from here outward.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::warn;

/// Success envelope with an entity's fields flattened alongside the
/// `success` marker.
pub fn entity<T: Serialize>(dto: &T) -> CallToolResult {
    match serde_json::to_value(dto) {
        Ok(Value::Object(fields)) => {
            let mut body = Map::new();
            body.insert("success".to_string(), Value::Bool(true));
            body.extend(fields);
            text_result(Value::Object(body))
        }
        Ok(other) => json(json!({ "data": other })),
        Err(e) => failure(&e),
    }
}

/// Success envelope for a list operation: `count` plus the named
/// sequence. An empty upstream collection serializes as `count: 0` and
/// `[]`, never as an omitted field.
pub fn list<T: Serialize>(key: &str, items: &[T]) -> CallToolResult {
    match serde_json::to_value(items) {
        Ok(value) => json(json!({ "count": items.len(), key: value })),
        Err(e) => failure(&e),
    }
}

/// Success envelope for side-effect-only operations.
pub fn message(text: impl Into<String>) -> CallToolResult {
    json(json!({ "message": text.into() }))
}

/// Success envelope from a pre-assembled JSON object (composite tools).
/// The `success` marker is injected alongside the given fields.
pub fn json(value: Value) -> CallToolResult {
    let mut body = Map::new();
    body.insert("success".to_string(), Value::Bool(true));
    if let Value::Object(fields) = value {
        body.extend(fields);
    } else {
        body.insert("data".to_string(), value);
    }
    text_result(Value::Object(body))
}

/// Failure envelope. The message is passed through verbatim; callers see
/// readable text, never a stack trace or a bare code.
pub fn failure(err: &impl std::fmt::Display) -> CallToolResult {
    let message = err.to_string();
    warn!("tool call failed: {message}");
    CallToolResult::error(vec![Content::text(
        json!({ "success": false, "error": message }).to_string(),
    )])
}

fn text_result(body: Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(body.to_string())])
}

/// Extract the serialized envelope text from a result (test helper and
/// HTTP-dispatch convenience).
pub fn payload_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        rmcp::model::RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(result: &CallToolResult) -> Value {
        serde_json::from_str(payload_text(result).unwrap()).unwrap()
    }

    #[test]
    fn test_entity_flattens_fields() {
        #[derive(Serialize)]
        struct Demo {
            id: u64,
            name: String,
        }

        let result = entity(&Demo {
            id: 1,
            name: "test-server".to_string(),
        });
        let body = parse(&result);
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "test-server");
    }

    #[test]
    fn test_empty_list_serializes_count_zero() {
        let result = list::<Value>("servers", &[]);
        let body = parse(&result);
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["count"], 0);
        assert_eq!(body["servers"], serde_json::json!([]));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let result = failure(&"DNS validation failed");
        assert_eq!(result.is_error, Some(true));
        let body = parse(&result);
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "DNS validation failed"})
        );
    }

    #[test]
    fn test_message_envelope() {
        let body = parse(&message("Server 7 is rebooting"));
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["message"], "Server 7 is rebooting");
    }
}
