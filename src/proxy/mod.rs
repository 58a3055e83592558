//! Proxy module
//!
//! Handles request forwarding to the upstream OpenAI API.

pub mod headers;
pub mod openai;

pub use openai::{ByteStream, OpenAIClient};
