//! Axum route handlers.
//!
//! # Routes
//!
//! - `GET  /health`        — liveness probe
//! - `POST /api/match`     — questionnaire answers in, therapist match out
//! - `GET  /api/resources` — static well-being resource catalog
//! - `GET  /api/emergency` — static emergency contacts
//!
//! The match handler maps [`MatchError`] onto HTTP statuses: malformed
//! input is the caller's fault (422); backend and schema failures are
//! upstream faults (502). The UI collaborator owns user-visible messaging
//! and the retry action.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::llms::backend::CompletionBackend;
use crate::matching::error::MatchError;
use crate::matching::matcher::TherapistMatcher;
use crate::matching::schema::TherapistMatch;
use crate::questionnaire::answers::QuestionnaireAnswers;
use crate::resources::{EMERGENCY_CONTACTS, RESOURCE_CATALOG};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<TherapistMatcher>,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            matcher: Arc::new(TherapistMatcher::new(backend)),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/match", post(match_handler))
        .route("/api/resources", get(resources_handler))
        .route("/api/emergency", get(emergency_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "sanad",
    }))
}

/// POST /api/match — run the matching flow for a submitted questionnaire.
async fn match_handler(
    State(state): State<AppState>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Result<Json<TherapistMatch>, (StatusCode, Json<Value>)> {
    match state.matcher.match_from_answers(&answers).await {
        Ok(matched) => Ok(Json(matched)),
        Err(err) => {
            tracing::warn!(kind = err.kind(), "match request failed: {}", err);
            let status = match &err {
                MatchError::MalformedInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                MatchError::BackendUnavailable { .. } | MatchError::SchemaViolation { .. } => {
                    StatusCode::BAD_GATEWAY
                }
            };
            Err((
                status,
                Json(serde_json::json!({
                    "error": err.to_string(),
                    "kind": err.kind(),
                })),
            ))
        }
    }
}

/// GET /api/resources — static resource catalog.
async fn resources_handler() -> impl IntoResponse {
    Json(RESOURCE_CATALOG)
}

/// GET /api/emergency — static emergency contacts.
async fn emergency_handler() -> impl IntoResponse {
    Json(EMERGENCY_CONTACTS)
}
