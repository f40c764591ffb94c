//! HTTP surface of the medical information backend.
//!
//! Two POST routes (`/api/medical` and the legacy alias
//! `/api/wikipedia-medical`) share one handler that always answers
//! `200 {"response": …}`; `/health` exposes a best-effort upstream probe.
//! Malformed request bodies are rewritten into the same `{"response": …}`
//! shape by the JSON error-mapping middleware.

use std::sync::Arc;

mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

pub use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::middleware_layer::json_extractor::json_error_mapper;
use crate::routes::{health_route::health, medical::medical_route::medical};

/// Build the application router around shared state.
///
/// Kept public so tests can drive the router directly with a mock lookup.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/medical", post(medical))
        .route("/api/wikipedia-medical", post(medical))
        .route("/health", get(health))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Load state from the environment, bind, and serve until ctrl-c.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let bind_addr = state.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%bind_addr, "medical backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
