//! Rewrites JSON extractor rejections into the regular answer envelope.
//!
//! The transport contract is "always return usable text": a body that axum's
//! `Json` extractor rejects (malformed JSON, wrong content type, wrong shape)
//! must still come back as `200 {"response": …}` rather than a 4xx. The
//! original client-error text is kept server-side in the logs only.

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::warn;

use medical_analysis::{Language, templates};

use crate::routes::medical::medical_request::MedicalResponse;

async fn take_body(res: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn ensure_request_id(parts: &mut axum::http::response::Parts) -> String {
    if let Some(h) = parts.headers.get("X-Request-Id") {
        if let Ok(v) = h.to_str() {
            if !v.trim().is_empty() {
                return v.to_string();
            }
        }
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    parts
        .headers
        .insert("X-Request-Id", HeaderValue::from_str(&id).unwrap());
    id
}

/// Statuses produced by `Json` extractor rejections.
fn is_json_rejection(status: StatusCode) -> bool {
    status == StatusCode::BAD_REQUEST
        || status == StatusCode::UNPROCESSABLE_ENTITY
        || status == StatusCode::UNSUPPORTED_MEDIA_TYPE
}

pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;

    // Only extractor rejections are rewritten; other responses pass through.
    if !is_json_rejection(res.status()) {
        return res;
    }

    let status = res.status();
    let (mut parts, bytes) = take_body(res).await;
    let original = String::from_utf8_lossy(&bytes);
    let req_id = ensure_request_id(&mut parts);

    // The rejection text stays in the logs; the caller gets usable text.
    warn!(%status, %req_id, "rewriting body rejection: {}", original.trim());

    // The body never parsed, so there is no language to honor; default to
    // English like an absent `language` field.
    let envelope = MedicalResponse {
        response: templates::for_language(Language::En).invalid_input.to_string(),
    };

    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts.status = StatusCode::OK;
    parts.headers.insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts
        .headers
        .remove(axum::http::header::CONTENT_LENGTH);

    Response::from_parts(parts, body.into())
}
