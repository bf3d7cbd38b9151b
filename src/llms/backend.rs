//! Trait boundary for the generative-text backend.
//!
//! The backend is an opaque, non-deterministic, potentially-failing
//! collaborator. Everything above this trait treats its output as
//! untrusted until schema validation has run.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors crossing the backend boundary.
///
/// `Transport` and `Api` are provider-side failures; `Malformed` means the
/// provider answered but produced nothing structurally usable.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network or client-construction failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider returned an error status or error payload.
    #[error("backend API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider responded but the payload carries no structured output.
    #[error("unusable backend response: {0}")]
    Malformed(String),
}

/// A single-shot structured completion call.
///
/// One request per invocation; no retry, caching, or timeout policy lives
/// behind this trait. Implementations must be safe to share across
/// concurrent callers.
#[async_trait]
pub trait CompletionBackend: Send + Sync + fmt::Debug {
    /// Send `prompt` to the model, constraining the reply to `output_schema`,
    /// and return the parsed structured payload.
    async fn complete_structured(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Value, BackendError>;

    /// Model identifier used by this backend.
    fn model(&self) -> &str;
}
