//! Error taxonomy for the matching flow.

use thiserror::Error;

use crate::llms::backend::BackendError;
use crate::questionnaire::answers::ValidationError;

/// A failed match invocation.
///
/// Every failure is terminal for its invocation: the matcher never retries,
/// repairs, or substitutes defaults. Callers re-invoke to retry.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The request or its source answers are missing required structure.
    /// Raised before the backend call.
    #[error("malformed input ({field}): {message}")]
    MalformedInput { field: String, message: String },

    /// The backend call itself failed (network, transport, provider error).
    #[error("matching backend unavailable: {message}")]
    BackendUnavailable { message: String },

    /// The backend responded but the payload does not conform to the
    /// required output schema, including an entirely absent payload.
    #[error("backend response violates the output schema: {message}")]
    SchemaViolation { message: String },
}

impl MatchError {
    /// Stable discriminant name, used in logs and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "malformed_input",
            Self::BackendUnavailable { .. } => "backend_unavailable",
            Self::SchemaViolation { .. } => "schema_violation",
        }
    }
}

impl From<ValidationError> for MatchError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::MissingField { field, .. }
            | ValidationError::InvalidField { field, .. } => (*field).to_string(),
        };
        Self::MalformedInput {
            field,
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for MatchError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Transport(_) | BackendError::Api { .. } => Self::BackendUnavailable {
                message: err.to_string(),
            },
            BackendError::Malformed(_) => Self::SchemaViolation {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_malformed_input() {
        let err: MatchError = ValidationError::MissingField {
            field: "suicidalThoughtsLastTime",
            message: "requis".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "malformed_input");
        match err {
            MatchError::MalformedInput { field, .. } => {
                assert_eq!(field, "suicidalThoughtsLastTime");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn transport_failures_map_to_backend_unavailable() {
        let err: MatchError = BackendError::Transport("connection refused".to_string()).into();
        assert_eq!(err.kind(), "backend_unavailable");
    }

    #[test]
    fn malformed_payloads_map_to_schema_violation() {
        let err: MatchError = BackendError::Malformed("no candidates".to_string()).into();
        assert_eq!(err.kind(), "schema_violation");
    }
}
