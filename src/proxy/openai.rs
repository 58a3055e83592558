//! OpenAI upstream client
//!
//! Issues the outbound HTTP calls for the proxy: buffered chat completions,
//! streaming chat completions, and the model list. Exactly one upstream call
//! per invocation, no retries — a failed call surfaces immediately.

use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    proxy::headers::build_default_headers,
};

/// Stream type for streaming responses from the upstream
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// OpenAI API client
///
/// Holds two reqwest clients: one with a bounded timeout for buffered calls,
/// and one with no timeout for streaming calls, where the upstream may hold
/// the connection open indefinitely while emitting events.
pub struct OpenAIClient {
    client: reqwest::Client,
    stream_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    pub fn new(client: reqwest::Client, stream_client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            stream_client,
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
        }
    }

    /// Check if the client is configured with an API key
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or(AppError::ApiKeyMissing)
    }

    /// Forward a chat completion request (non-streaming)
    pub async fn chat_completions(&self, request: &Map<String, Value>) -> AppResult<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let api_key = self.api_key()?;

        let response = self
            .client
            .post(&url)
            .headers(build_default_headers(api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to reach OpenAI");
                e
            })?;

        let response = check_status(response).await?;

        debug!(url = %url, status = %response.status(), "Received upstream response");
        let result = response.json().await?;
        Ok(result)
    }

    /// Forward a chat completion request with streaming response
    ///
    /// The upstream status is checked on the response headers before any body
    /// bytes are handed out, so a non-2xx reply is surfaced as an error rather
    /// than streamed to the client as if it were content.
    pub async fn chat_completions_stream(
        &self,
        request: &Map<String, Value>,
    ) -> AppResult<ByteStream> {
        let url = format!("{}/chat/completions", self.base_url);
        let api_key = self.api_key()?;

        let response = self
            .stream_client
            .post(&url)
            .headers(build_default_headers(api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to reach OpenAI");
                e
            })?;

        let response = check_status(response).await?;

        debug!(url = %url, status = %response.status(), "Upstream stream opened");
        Ok(Box::pin(response.bytes_stream()))
    }

    /// List available models
    pub async fn list_models(&self) -> AppResult<Value> {
        let url = format!("{}/models", self.base_url);
        let api_key = self.api_key()?;

        let response = self
            .client
            .get(&url)
            .headers(build_default_headers(api_key))
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to fetch models from OpenAI");
                e
            })?;

        let response = check_status(response).await?;

        let result = response.json().await?;
        Ok(result)
    }
}

/// Turn a non-2xx upstream reply into an error carrying its status and body
async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(status = %status, body = %body, "OpenAI API error");
    Err(AppError::UpstreamStatus { status, body })
}
