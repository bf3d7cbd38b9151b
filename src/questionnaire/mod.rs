//! Questionnaire data model and narrative rendering.
//!
//! The questionnaire is the structured record a student fills in before
//! asking for a therapist suggestion. [`answers`] holds the typed field
//! catalog and the cross-field validation pass; [`narrative`] renders a
//! validated record into the French-language text blob the matching
//! prompt embeds.

pub mod answers;
pub mod narrative;

pub use answers::{QuestionnaireAnswers, ValidationError};
pub use narrative::render_narrative;
