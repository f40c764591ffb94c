//! GET /health — best-effort upstream probe.

use std::sync::Arc;

use axum::{Json, extract::State};

use wiki_lookup::health_service::{self, HealthStatus};

use crate::core::app_state::AppState;

/// Handler: GET /health
///
/// Probes the reference API through the configured client; never fails. When
/// the state was built around a test double there is nothing to probe.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    match &state.wikipedia {
        Some(service) => Json(health_service::check(service).await),
        None => Json(HealthStatus {
            endpoint: String::new(),
            ok: false,
            latency_ms: 0,
            message: "lookup client not configured".into(),
        }),
    }
}
