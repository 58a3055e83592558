//! Model name mapping
//!
//! Static table translating a client-facing model name to the name the
//! Responses API expects. Built once at startup and read-only afterwards.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Immutable model name table with identity fallback.
///
/// Models present in the table are routed through the Responses API path;
/// everything else passes through to the standard Chat Completions API
/// under its original name.
#[derive(Debug, Clone)]
pub struct ModelMapping {
    table: HashMap<String, String>,
}

impl ModelMapping {
    /// Build the production mapping.
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        table.insert("chatgpt-4o-latest".to_string(), "chatgpt-4o-latest".to_string());
        table.insert("gpt-4.1".to_string(), "gpt-4.1".to_string());
        table.insert("gpt-5.2-chat-latest".to_string(), "gpt-5.2-chat-latest".to_string());
        Self { table }
    }

    /// Build a mapping from explicit entries (used by tests).
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a client-facing model name to the upstream name.
    ///
    /// Unknown names come back unchanged; resolution never fails.
    pub fn resolve(&self, name: &str) -> String {
        self.table
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Whether the model is one of the special-cased Responses API models.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}

/// Custom model entries appended to the upstream `/models` list.
///
/// These may not appear in the standard list yet but are reachable through
/// the proxy, so clients get them in their model dropdowns.
pub fn custom_model_entries() -> Vec<Value> {
    vec![
        json!({
            "id": "chatgpt-4o-latest",
            "object": "model",
            "created": 1_700_000_000,
            "owned_by": "openai"
        }),
        json!({
            "id": "gpt-4.1",
            "object": "model",
            "created": 1_700_000_000,
            "owned_by": "openai"
        }),
    ]
}
