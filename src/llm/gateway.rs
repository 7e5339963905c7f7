//! Core `ModelGateway` trait and the `LlmError` type shared by all backends.
//!
//! The gateway is the only seam between request handling and the hosted
//! model.  Handlers hold an `Arc<dyn ModelGateway>`, which keeps them
//! testable with in-process doubles and keeps provider details (URLs, auth,
//! wire format) inside the backend implementation.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the model provider.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The provider returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// The gateway is missing a required setting (usually the API key).
    #[error("model gateway not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ModelGateway trait
// ---------------------------------------------------------------------------

/// Async access to a hosted text-generation model.
///
/// Implementors must be `Send + Sync` so one instance can be shared by every
/// request handler (`Arc<dyn ModelGateway>`).
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Coordinated call: the prompt is answered by the coaching coordinator,
    /// which speaks for the speech, vision and voice specialists.  This is a
    /// single upstream request with one synthesized answer.
    async fn orchestrate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Direct call with an optional persona (system instruction).
    async fn generate(&self, prompt: &str, persona: Option<&str>) -> Result<String, LlmError>;
}
