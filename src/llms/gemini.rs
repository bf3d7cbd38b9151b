//! Google Gemini completion client.
//!
//! Talks to the `generateContent` endpoint of the Gemini API with JSON-mode
//! structured output: the desired output schema is passed as
//! `generationConfig.responseSchema` and the model replies with a single
//! JSON document, which this client parses and hands back untouched for
//! schema validation upstream.
//!
//! # Authentication
//!
//! The API key is injected at construction time ([`GeminiClient::new`] or
//! [`GeminiClient::from_config`]); there is no ambient singleton. The
//! bootstrap binary reads `GEMINI_API_KEY` / `GOOGLE_API_KEY` through
//! [`crate::config::MatchingConfig`].

use async_trait::async_trait;
use serde_json::Value;

use crate::config::MatchingConfig;
use crate::llms::backend::{BackendError, CompletionBackend};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Request timeout for a single completion call.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gemini API client for structured completions.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    model: String,
    api_key: String,
    temperature: Option<f64>,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for `model` authenticated with `api_key`.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self {
            model: model.into(),
            api_key: api_key.into(),
            temperature: None,
            http,
        })
    }

    /// Create a client from the process configuration.
    pub fn from_config(config: &MatchingConfig) -> Result<Self, BackendError> {
        let mut client = Self::new(config.model.clone(), config.api_key.clone())?;
        client.temperature = config.temperature;
        Ok(client)
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn api_endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }

    /// Generation config with JSON-mode structured output.
    fn generation_config(&self, output_schema: &Value) -> Value {
        let mut config = serde_json::Map::new();
        if let Some(temp) = self.temperature {
            config.insert("temperature".to_string(), serde_json::json!(temp));
        }
        config.insert(
            "responseMimeType".to_string(),
            serde_json::json!("application/json"),
        );
        config.insert("responseSchema".to_string(), output_schema.clone());
        Value::Object(config)
    }

    fn build_request_body(&self, prompt: &str, output_schema: &Value) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": self.generation_config(output_schema),
        })
    }

    /// Extract the structured payload from a `generateContent` response.
    ///
    /// In JSON mode the model's reply arrives as text parts holding one JSON
    /// document. Missing candidates or unparseable text are `Malformed`.
    fn parse_response(response: &Value) -> Result<Value, BackendError> {
        let candidates = response
            .get("candidates")
            .and_then(|c| c.as_array())
            .ok_or_else(|| BackendError::Malformed("no candidates in response".to_string()))?;

        let candidate = candidates
            .first()
            .ok_or_else(|| BackendError::Malformed("empty candidates array".to_string()))?;

        let parts = candidate
            .get("content")
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| BackendError::Malformed("no content.parts in candidate".to_string()))?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if text.trim().is_empty() {
            return Err(BackendError::Malformed(
                "candidate carries no text output".to_string(),
            ));
        }

        serde_json::from_str(&text)
            .map_err(|e| BackendError::Malformed(format!("response text is not JSON: {}", e)))
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete_structured(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Value, BackendError> {
        log::debug!(
            "GeminiClient.complete_structured: model={}, prompt={} chars",
            self.model,
            prompt.len(),
        );

        let body = self.build_request_body(prompt, output_schema);
        let response = self
            .http
            .post(self.api_endpoint())
            .header("content-type", "application/json")
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| text.chars().take(500).collect());
            log::warn!("Gemini API error {}: {}", status, message);
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_json: Value = serde_json::from_str(&text)
            .map_err(|e| BackendError::Malformed(format!("response body is not JSON: {}", e)))?;

        if let Some(error) = response_json.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown Gemini API error")
                .to_string();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Self::parse_response(&response_json)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new("gemini-2.0-flash", "test-key").unwrap()
    }

    #[test]
    fn endpoint_embeds_the_model() {
        assert_eq!(
            client().api_endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn request_body_carries_prompt_and_schema() {
        let schema = serde_json::json!({"type": "object"});
        let body = client().build_request_body("le questionnaire", &schema);
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            serde_json::json!("le questionnaire")
        );
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            serde_json::json!("application/json")
        );
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn temperature_is_optional_in_generation_config() {
        let schema = serde_json::json!({"type": "object"});
        let plain = client().build_request_body("x", &schema);
        assert!(plain["generationConfig"].get("temperature").is_none());

        let warm = client().temperature(0.4).build_request_body("x", &schema);
        assert_eq!(
            warm["generationConfig"]["temperature"],
            serde_json::json!(0.4)
        );
    }

    #[test]
    fn parse_response_extracts_the_json_payload() {
        let response = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"therapistSuggestion\": \"Un psychologue\", \"reasoning\": \"...\"}" }]
                }
            }]
        });
        let payload = GeminiClient::parse_response(&response).unwrap();
        assert_eq!(
            payload["therapistSuggestion"],
            serde_json::json!("Un psychologue")
        );
    }

    #[test]
    fn parse_response_rejects_missing_candidates() {
        let response = serde_json::json!({ "candidates": [] });
        assert!(matches!(
            GeminiClient::parse_response(&response),
            Err(BackendError::Malformed(_))
        ));
    }

    #[test]
    fn parse_response_rejects_non_json_text() {
        let response = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "désolé, je ne peux pas" }] }
            }]
        });
        assert!(matches!(
            GeminiClient::parse_response(&response),
            Err(BackendError::Malformed(_))
        ));
    }
}
