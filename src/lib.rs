//! Conduit - Chat Completions compatible gateway for the OpenAI Responses API
//!
//! This library provides the core functionality for the Conduit proxy server.
//! It translates between the Chat Completions API expected by front-end chat
//! clients and the upstream OpenAI API, relaying streaming responses
//! byte-for-byte.

pub mod config;
pub mod error;
pub mod mapping;
pub mod proxy;
pub mod routes;
pub mod streaming;
pub mod translate;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::mapping::ModelMapping;
pub use crate::proxy::OpenAIClient;

/// Application state shared across all request handlers
///
/// Constructed once at startup and only ever read afterwards; handlers share
/// it behind an `Arc` with no synchronization needed.
pub struct AppState {
    pub config: Config,
    /// Static model name table, read-only after startup
    pub mapping: ModelMapping,
    /// Upstream client for forwarding requests to OpenAI
    pub openai: Arc<OpenAIClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Buffered upstream calls get a bounded timeout
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(120))
            .build()?;

        // Streaming calls get no timeout: the upstream may hold the
        // connection open indefinitely while emitting events
        let stream_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let openai = Arc::new(OpenAIClient::new(http_client, stream_client, &config));
        let mapping = ModelMapping::builtin();

        Ok(Self {
            config,
            mapping,
            openai,
        })
    }
}
