//! Models endpoint
//!
//! Lists available models through the proxy. The upstream list is fetched
//! as-is and the proxy's custom model entries are appended, so clients see
//! models reachable through the mapping even before they appear upstream.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    mapping::custom_model_entries,
    AppState,
};

/// List available models
///
/// Returns the upstream model list with the custom entries appended to
/// `data`. Responds 401 when the API key is unset and 502 when the upstream
/// cannot be reached.
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> AppResult<(StatusCode, Json<Value>)> {
    if !state.openai.is_configured() {
        return Err(AppError::ApiKeyMissing);
    }

    let mut models = state.openai.list_models().await?;

    if let Some(data) = models.get_mut("data").and_then(Value::as_array_mut) {
        data.extend(custom_model_entries());
        info!(count = data.len(), "Returning model list");
    }

    Ok((StatusCode::OK, Json(models)))
}
