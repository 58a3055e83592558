//! Header utilities for upstream proxying
//!
//! Client headers are intentionally never forwarded upstream; every outbound
//! request carries exactly the proxy's own credentials.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Build default headers for upstream requests
pub fn build_default_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).expect("Invalid API key format"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
}
