//! Process configuration for the matching backend.
//!
//! Credentials and model selection are read once at bootstrap and passed
//! explicitly into the client; nothing below the binary reads the
//! environment.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY` / `GOOGLE_API_KEY` — API credential (first match wins)
//! - `SANAD_MODEL` — model identifier (default: `gemini-2.0-flash`)
//! - `SANAD_TEMPERATURE` — optional sampling temperature

use thiserror::Error;

use crate::llms::gemini::DEFAULT_MODEL;

/// Configuration errors at bootstrap.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credential: set GEMINI_API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,

    #[error("invalid SANAD_TEMPERATURE '{0}': expected a number")]
    InvalidTemperature(String),
}

/// Matching backend configuration.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub model: String,
    pub api_key: String,
    pub temperature: Option<f64>,
}

impl MatchingConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| ConfigError::MissingApiKey)?;
        let model = std::env::var("SANAD_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = match std::env::var("SANAD_TEMPERATURE") {
            Ok(raw) => Some(parse_temperature(&raw)?),
            Err(_) => None,
        };
        Ok(Self {
            model,
            api_key,
            temperature,
        })
    }
}

fn parse_temperature(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidTemperature(raw.to_string()))
}
