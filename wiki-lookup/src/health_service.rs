//! Best-effort health probe for the upstream reference API.
//!
//! [`check`] is resilient and never fails: upstream problems are mapped to
//! `ok = false` with a short message. The returned [`HealthStatus`] is
//! JSON-serializable and suitable for a `/health` endpoint.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::language::Language;
use crate::services::wikipedia_service::WikipediaService;

/// Fixed, stable page used as the probe target.
const PROBE_TERM: &str = "Medicine";

/// A serializable health snapshot for the lookup backend.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Probed endpoint URL.
    pub endpoint: String,
    /// Overall health flag.
    pub ok: bool,
    /// Measured latency of the probe in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

/// Probe the REST summary endpoint with a fixed term.
///
/// Any error (timeout, non-2xx, decode) degrades to `ok = false`; the probe
/// itself never returns an error.
pub async fn check(service: &WikipediaService) -> HealthStatus {
    let endpoint = service.summary_url(PROBE_TERM, Language::En);
    let started = Instant::now();

    match service.summary(PROBE_TERM, Language::En).await {
        Ok(result) => {
            let latency_ms = started.elapsed().as_millis();
            debug!(%endpoint, latency_ms, "health probe ok");
            HealthStatus {
                endpoint,
                ok: true,
                latency_ms,
                message: format!("summary for '{}' resolved", result.title),
            }
        }
        Err(err) => {
            let latency_ms = started.elapsed().as_millis();
            warn!(%endpoint, latency_ms, "health probe failed: {err}");
            HealthStatus {
                endpoint,
                ok: false,
                latency_ms,
                message: err.to_string(),
            }
        }
    }
}
