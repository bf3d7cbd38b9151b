//! # Sanad
//!
//! Backend for a student mental-health support platform. The core is the
//! questionnaire-to-suggestion matching flow: typed questionnaire answers
//! are rendered into a French narrative, embedded into a fixed instruction
//! template, sent to a generative backend with a structured output schema,
//! and the reply is schema-validated into a typed
//! `{ therapistSuggestion, reasoning }` result or a typed failure.
//!
//! The backend is an injected [`llms::backend::CompletionBackend`];
//! production uses [`llms::gemini::GeminiClient`], tests use stubs.

pub mod config;
pub mod llms;
pub mod matching;
pub mod questionnaire;
pub mod resources;
pub mod server;

pub use config::MatchingConfig;
pub use llms::backend::{BackendError, CompletionBackend};
pub use llms::gemini::GeminiClient;
pub use matching::error::MatchError;
pub use matching::matcher::TherapistMatcher;
pub use matching::schema::{MatchRequest, TherapistMatch};
pub use questionnaire::answers::{QuestionnaireAnswers, ValidationError};
pub use questionnaire::narrative::render_narrative;

/// Library version.
pub const VERSION: &str = "0.1.0";
