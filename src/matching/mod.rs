//! The questionnaire-to-suggestion matching flow.
//!
//! Owns the contract with the generative backend: [`schema`] defines the
//! input/output shapes and the validation of model replies, [`prompt`]
//! holds the fixed instruction template, [`matcher`] performs the call,
//! and [`error`] names the ways it can fail.

pub mod error;
pub mod matcher;
pub mod prompt;
pub mod schema;

pub use error::MatchError;
pub use matcher::TherapistMatcher;
pub use schema::{MatchRequest, TherapistMatch};
