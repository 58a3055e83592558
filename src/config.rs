//! Configuration management for Conduit
//!
//! Configuration is loaded from environment variables, once at startup.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// OpenAI API base URL
    pub openai_base_url: String,
    /// OpenAI API key. Absence is a detectable configuration state, not a
    /// startup failure: unauthenticated routes still work without it.
    pub openai_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid PORT")?,

            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
        })
    }

    /// Whether an upstream API key is configured
    pub fn openai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }
}
