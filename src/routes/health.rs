//! Health check endpoints
//!
//! Provides endpoints for monitoring and container orchestration:
//! - `/` - Liveness probe with service identity
//! - `/health` - Readiness probe, fails when the upstream key is unconfigured

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{
    error::{ErrorBody, ErrorResponse},
    AppState,
};

/// Root liveness response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub openai_configured: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe endpoint
///
/// Always returns 200 and reports whether the upstream key is configured.
pub async fn root(State(state): State<Arc<AppState>>) -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            status: "ok",
            service: "OpenAI Responses API Proxy",
            openai_configured: state.openai.is_configured(),
        }),
    )
}

/// Readiness probe endpoint
///
/// Returns 200 when the proxy can serve authenticated traffic, 500 when the
/// upstream API key is missing. Used by container health checks.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !state.openai.is_configured() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: ErrorBody {
                    code: "MISCONFIGURED".to_string(),
                    message: "OPENAI_API_KEY not configured".to_string(),
                },
            }),
        )
            .into_response();
    }

    (StatusCode::OK, Json(HealthResponse { status: "healthy" })).into_response()
}
