//! Chat completions endpoint
//!
//! OpenAI-compatible chat completions API endpoint.
//! Handles both streaming and non-streaming responses.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::{
    error::AppError,
    streaming::relay,
    translate::{to_client_response, to_upstream_request},
    AppState,
};

/// Handle chat completion requests
///
/// This endpoint is compatible with OpenAI's chat completions API. Models in
/// the mapping are translated for the Responses API; everything else passes
/// through unchanged. Both paths currently dispatch to the same upstream
/// endpoint.
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AppError> {
    if !state.openai.is_configured() {
        return Err(AppError::ApiKeyMissing);
    }

    // Parse the body as a raw JSON map so unknown provider fields survive
    let chat_request: Map<String, Value> = serde_json::from_slice(&body)?;

    let model = chat_request
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let is_streaming = chat_request
        .get("stream")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let use_responses_api = state.mapping.contains(&model);

    info!(
        model = %model,
        stream = %is_streaming,
        responses_api = %use_responses_api,
        "Processing chat completion request"
    );

    let upstream_request = if use_responses_api {
        to_upstream_request(&state.mapping, &chat_request)
    } else {
        chat_request
    };

    if is_streaming {
        handle_streaming_chat(state, upstream_request).await
    } else {
        handle_non_streaming_chat(state, upstream_request, use_responses_api, &model).await
    }
}

/// Handle non-streaming chat completion
async fn handle_non_streaming_chat(
    state: Arc<AppState>,
    request: Map<String, Value>,
    use_responses_api: bool,
    model: &str,
) -> Result<Response, AppError> {
    let response = state.openai.chat_completions(&request).await?;

    let response = if use_responses_api {
        to_client_response(response)
    } else {
        response
    };

    info!(model = %model, "Chat completion request completed");

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handle streaming chat completion
///
/// The upstream body is relayed byte-for-byte as it arrives. A client
/// disconnect drops the relay, which drops the upstream response and
/// releases the connection.
async fn handle_streaming_chat(
    state: Arc<AppState>,
    request: Map<String, Value>,
) -> Result<Response, AppError> {
    let stream = state.openai.chat_completions_stream(&request).await?;

    let body = Body::from_stream(relay(stream));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header("X-Accel-Buffering", "no")
        .body(body)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))?;

    Ok(response)
}
