//! Input and output schemas of the matching contract.
//!
//! The output schema is enforced twice: structurally, by handing
//! [`output_schema`] to the backend as a generation constraint, and
//! defensively, by [`TherapistMatch::from_response`] before any value is
//! returned to a caller. Validation is all-or-nothing; a payload with one
//! good field and one empty field is rejected whole.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::MatchError;

/// Caller-facing input: the pre-rendered narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Narrative text describing the questionnaire answers.
    pub questionnaire_answers: String,
}

impl MatchRequest {
    pub fn new(questionnaire_answers: impl Into<String>) -> Self {
        Self {
            questionnaire_answers: questionnaire_answers.into(),
        }
    }

    /// The narrative must be non-empty.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.questionnaire_answers.trim().is_empty() {
            return Err(MatchError::MalformedInput {
                field: "questionnaireAnswers".to_string(),
                message: "le récit du questionnaire est vide".to_string(),
            });
        }
        Ok(())
    }
}

/// A validated match result.
///
/// Both fields are model-generated and guaranteed non-blank once this type
/// exists; construction goes through [`TherapistMatch::from_response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistMatch {
    /// Suggested therapist type or specialization, never a named individual.
    pub therapist_suggestion: String,
    /// Reasoning tying the suggestion back to the questionnaire content.
    pub reasoning: String,
}

impl TherapistMatch {
    /// Validate a raw backend payload against the output schema.
    pub fn from_response(value: &Value) -> Result<Self, MatchError> {
        let object = value.as_object().ok_or_else(|| MatchError::SchemaViolation {
            message: format!("expected a JSON object, got {}", json_kind(value)),
        })?;

        let therapist_suggestion = required_string(object, "therapistSuggestion")?;
        let reasoning = required_string(object, "reasoning")?;

        Ok(Self {
            therapist_suggestion,
            reasoning,
        })
    }
}

fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &str,
) -> Result<String, MatchError> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(MatchError::SchemaViolation {
            message: format!("field '{}' is empty", field),
        }),
        Some(other) => Err(MatchError::SchemaViolation {
            message: format!("field '{}' is not a string ({})", field, json_kind(other)),
        }),
        None => Err(MatchError::SchemaViolation {
            message: format!("field '{}' is missing", field),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON schema handed to the backend as a generation constraint.
pub fn output_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "therapistSuggestion": {
                "type": "string",
                "description": "The type or specialization of therapist suggested for the student (e.g., \"Un psychologue spécialisé en TCC et gestion du stress\")."
            },
            "reasoning": {
                "type": "string",
                "description": "The detailed reasoning behind the therapist suggestion, referencing specific answers from the questionnaire."
            }
        },
        "required": ["therapistSuggestion", "reasoning"]
    })
}
