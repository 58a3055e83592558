//! Health endpoint integration tests
//!
//! Tests for the liveness and readiness endpoints:
//! - GET /        - Liveness probe with service identity
//! - GET /health  - Readiness probe, 500 when the API key is unset

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{spawn_configured_app, spawn_unconfigured_app};

#[tokio::test]
async fn test_root_reports_configured_key() {
    let server = spawn_configured_app("http://127.0.0.1:1");

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "OpenAI Responses API Proxy");
    assert_eq!(body["openai_configured"], true);
}

#[tokio::test]
async fn test_root_reports_missing_key() {
    let server = spawn_unconfigured_app();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["openai_configured"], false);
}

#[tokio::test]
async fn test_health_ok_when_configured() {
    let server = spawn_configured_app("http://127.0.0.1:1");

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_fails_without_key() {
    let server = spawn_unconfigured_app();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("OPENAI_API_KEY"));
}
