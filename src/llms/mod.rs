//! Generative-text backend abstraction and provider clients.
//!
//! The matcher depends only on the [`backend::CompletionBackend`] trait;
//! [`gemini`] supplies the production client. Tests inject stubs.

pub mod backend;
pub mod gemini;

pub use backend::{BackendError, CompletionBackend};
pub use gemini::GeminiClient;
