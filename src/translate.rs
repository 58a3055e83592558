//! Request and response translation
//!
//! Converts between the client-facing Chat Completions shape and the
//! Responses API shape. Bodies are kept as raw JSON maps so provider-specific
//! fields (temperature, tools, anything future) are forwarded untouched.

use serde_json::{Map, Value};

use crate::mapping::ModelMapping;

/// Translate a Chat Completions request into the Responses API shape.
///
/// Every field is copied as-is; only `model` is rewritten through the
/// mapping. The input is never mutated and never validated — malformed
/// bodies pass through and are left for the upstream to reject.
pub fn to_upstream_request(
    mapping: &ModelMapping,
    request: &Map<String, Value>,
) -> Map<String, Value> {
    let mut upstream = request.clone();

    if let Some(Value::String(model)) = upstream.get("model") {
        let resolved = mapping.resolve(model);
        upstream.insert("model".to_string(), Value::String(resolved));
    }

    upstream
}

/// Translate a buffered Responses API reply into the Chat Completions shape.
///
/// A response that already carries a top-level `choices` array is compatible
/// and is returned untouched. The normalization branch for other shapes is a
/// seam for future upstream formats; today it is the identity.
pub fn to_client_response(response: Value) -> Value {
    if response.get("choices").is_some() {
        return response;
    }

    response
}
