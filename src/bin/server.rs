//! Sanad HTTP server binary.
//!
//! # Environment variables
//!
//! - `PORT` — HTTP port (default: 8080)
//! - `GEMINI_API_KEY` / `GOOGLE_API_KEY` — matching backend credential
//! - `SANAD_MODEL` — Gemini model identifier (default: gemini-2.0-flash)
//! - `SANAD_TEMPERATURE` — optional sampling temperature
//! - `RUST_LOG` — log/tracing filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --bin server
//! ```

use std::sync::Arc;

use anyhow::Context;
use sanad::config::MatchingConfig;
use sanad::llms::gemini::GeminiClient;
use sanad::server::{app_router, AppState};

/// Install the tracing subscriber.
///
/// Must run exactly once: `init()` also registers the log-to-tracing
/// bridge as the global `log` logger, which forwards the LLM client
/// layer's `log::debug!`/`log::warn!` records into tracing.
fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sanad=debug".into()),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let config = MatchingConfig::from_env().context("loading matching configuration")?;
    let backend = GeminiClient::from_config(&config).context("building Gemini client")?;
    let state = AppState::new(Arc::new(backend));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{}", port);

    let app = app_router(state);

    tracing::info!("sanad server starting on {} (model: {})", bind_addr, config.model);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        — liveness probe");
    tracing::info!("  POST /api/match     — therapist matching");
    tracing::info!("  GET  /api/resources — resource catalog");
    tracing::info!("  GET  /api/emergency — emergency contacts");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("binding listener")?;

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    struct NopLogger;

    impl log::Log for NopLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            false
        }
        fn log(&self, _record: &log::Record) {}
        fn flush(&self) {}
    }

    #[test]
    fn telemetry_init_owns_the_log_facade() {
        super::init_telemetry();
        // The bridge installed by `init()` is the one and only `log`
        // logger; registering another one must fail rather than the
        // startup path attempting it.
        assert!(log::set_boxed_logger(Box::new(NopLogger)).is_err());
        log::debug!("record forwarded through the tracing bridge");
        tracing::debug!("subscriber is live");
    }
}
