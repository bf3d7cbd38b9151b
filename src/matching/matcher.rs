//! Matching invoker.
//!
//! One backend call per invocation, then strict schema validation. A
//! non-conforming response is surfaced as an error, never repaired or
//! replaced with a plausible-looking default. No retry, caching, or
//! timeout policy lives here; callers re-invoke to retry and the
//! transport layer owns its own timeout.

use std::sync::Arc;

use uuid::Uuid;

use crate::llms::backend::CompletionBackend;
use crate::questionnaire::answers::QuestionnaireAnswers;
use crate::questionnaire::narrative::render_narrative;

use super::error::MatchError;
use super::prompt;
use super::schema::{self, MatchRequest, TherapistMatch};

/// Invokes the matching backend with the composed prompt and validates
/// the reply.
///
/// Holds no per-request state; a single instance is safe to share across
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct TherapistMatcher {
    backend: Arc<dyn CompletionBackend>,
}

impl TherapistMatcher {
    /// Create a matcher around an injected backend.
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Match from a pre-rendered narrative.
    ///
    /// The async call suspends until the backend responds; exactly one
    /// backend request is issued, success or failure.
    pub async fn match_therapist(
        &self,
        request: MatchRequest,
    ) -> Result<TherapistMatch, MatchError> {
        request.validate()?;

        let call_id = Uuid::new_v4();
        let prompt = prompt::compose(&request.questionnaire_answers);
        log::debug!(
            "match_therapist[{}]: model={}, prompt={} chars",
            call_id,
            self.backend.model(),
            prompt.len(),
        );

        let raw = self
            .backend
            .complete_structured(&prompt, &schema::output_schema())
            .await?;
        let matched = TherapistMatch::from_response(&raw)?;

        log::debug!(
            "match_therapist[{}]: suggestion={} chars, reasoning={} chars",
            call_id,
            matched.therapist_suggestion.len(),
            matched.reasoning.len(),
        );
        Ok(matched)
    }

    /// Validate a full answer record, render its narrative, and match.
    pub async fn match_from_answers(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<TherapistMatch, MatchError> {
        answers.validate()?;
        let narrative = render_narrative(answers);
        self.match_therapist(MatchRequest::new(narrative)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llms::backend::{BackendError, CompletionBackend};
    use crate::questionnaire::answers::sample_answers;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Backend returning a fixed payload, recording the prompt it saw.
    #[derive(Debug)]
    struct StubBackend {
        payload: Value,
        seen_prompts: std::sync::Mutex<Vec<String>>,
    }

    impl StubBackend {
        fn returning(payload: Value) -> Arc<Self> {
            Arc::new(Self {
                payload,
                seen_prompts: std::sync::Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete_structured(
            &self,
            prompt: &str,
            _output_schema: &Value,
        ) -> Result<Value, BackendError> {
            self.seen_prompts
                .lock()
                .unwrap()
                .push(prompt.to_string());
            Ok(self.payload.clone())
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    /// Backend that deterministically fails at the transport level.
    #[derive(Debug)]
    struct DownBackend;

    #[async_trait]
    impl CompletionBackend for DownBackend {
        async fn complete_structured(
            &self,
            _prompt: &str,
            _output_schema: &Value,
        ) -> Result<Value, BackendError> {
            Err(BackendError::Transport("connection refused".to_string()))
        }

        fn model(&self) -> &str {
            "down-model"
        }
    }

    #[tokio::test]
    async fn resolves_with_the_backend_payload_unmodified() {
        let backend = StubBackend::returning(serde_json::json!({
            "therapistSuggestion": "Un thérapeute TCC orienté gestion du stress",
            "reasoning": "Votre réponse fait référence à l'anxiété avant les examens.",
        }));
        let matcher = TherapistMatcher::new(backend.clone());

        let matched = matcher.match_from_answers(&sample_answers()).await.unwrap();
        assert_eq!(
            matched.therapist_suggestion,
            "Un thérapeute TCC orienté gestion du stress"
        );
        assert_eq!(
            matched.reasoning,
            "Votre réponse fait référence à l'anxiété avant les examens."
        );

        // The prompt the backend saw embeds the narrative content.
        let prompts = backend.seen_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("stressé et fatigué depuis deux semaines"));
        assert!(prompts[0].contains("mieux gérer mon stress"));
        assert!(prompts[0].contains("- Impact sur la vie quotidienne: Considérablement"));
        assert!(prompts[0].contains("- Urgence du besoin: Bientôt"));
    }

    #[tokio::test]
    async fn empty_required_field_fails_with_schema_violation() {
        let backend = StubBackend::returning(serde_json::json!({
            "therapistSuggestion": "",
            "reasoning": "valid text",
        }));
        let matcher = TherapistMatcher::new(backend);
        let err = matcher
            .match_from_answers(&sample_answers())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "schema_violation");
    }

    #[tokio::test]
    async fn absent_payload_never_resolves_as_success() {
        let backend = StubBackend::returning(Value::Null);
        let matcher = TherapistMatcher::new(backend);
        let err = matcher
            .match_from_answers(&sample_answers())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "schema_violation");
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_backend_unavailable() {
        let matcher = TherapistMatcher::new(Arc::new(DownBackend));
        let err = matcher
            .match_from_answers(&sample_answers())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "backend_unavailable");
    }

    #[tokio::test]
    async fn failure_kind_is_idempotent_across_invocations() {
        let backend = StubBackend::returning(serde_json::json!({
            "therapistSuggestion": "",
            "reasoning": "valid text",
        }));
        let matcher = TherapistMatcher::new(backend);
        let answers = sample_answers();
        let first = matcher.match_from_answers(&answers).await.unwrap_err();
        let second = matcher.match_from_answers(&answers).await.unwrap_err();
        assert_eq!(first.kind(), second.kind());
    }

    #[tokio::test]
    async fn invalid_answers_fail_before_the_backend_is_called() {
        let backend = StubBackend::returning(serde_json::json!({
            "therapistSuggestion": "x", "reasoning": "y",
        }));
        let matcher = TherapistMatcher::new(backend.clone());

        let mut answers = sample_answers();
        answers.suicidal_thoughts_history = crate::questionnaire::answers::YesNo::Oui;
        answers.suicidal_thoughts_last_time = None;

        let err = matcher.match_from_answers(&answers).await.unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
        assert!(backend.seen_prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_narrative_is_rejected() {
        let backend = StubBackend::returning(Value::Null);
        let matcher = TherapistMatcher::new(backend.clone());
        let err = matcher
            .match_therapist(MatchRequest::new(""))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "malformed_input");
        assert!(backend.seen_prompts.lock().unwrap().is_empty());
    }
}
