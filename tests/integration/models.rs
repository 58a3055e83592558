//! Models endpoint integration tests
//!
//! Tests for GET /v1/models: upstream list passthrough with the proxy's
//! custom model entries appended.

use axum::http::StatusCode;
use serde_json::Value;
use wiremock::MockServer;

use crate::common::{openai_mocks, spawn_configured_app, spawn_unconfigured_app};

#[tokio::test]
async fn test_models_appends_custom_entries() {
    let mock_server = MockServer::start().await;
    openai_mocks::mock_list_models(&mock_server).await;
    let server = spawn_configured_app(&mock_server.uri());

    let response = server.get("/v1/models").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();

    // One upstream model plus the two appended entries
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["id"], "gpt-4o");
    assert_eq!(data[1]["id"], "chatgpt-4o-latest");
    assert_eq!(data[2]["id"], "gpt-4.1");
}

#[tokio::test]
async fn test_models_requires_api_key() {
    let server = spawn_unconfigured_app();

    let response = server.get("/v1/models").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_models_transport_error_maps_to_502() {
    // Nothing listening on this address; the connection is refused
    let server = spawn_configured_app("http://127.0.0.1:1");

    let response = server.get("/v1/models").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_models_upstream_status_propagated() {
    let mock_server = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/models"))
        .respond_with(wiremock::ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;
    let server = spawn_configured_app(&mock_server.uri());

    let response = server.get("/v1/models").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("upstream down"));
}
