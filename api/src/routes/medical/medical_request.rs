//! Request/response DTOs for the medical routes.

use serde::{Deserialize, Serialize};

/// Inbound payload for `/api/medical` and `/api/wikipedia-medical`.
///
/// Exactly one of `symptoms`/`question` is expected; when both are present,
/// `symptoms` wins. `language` defaults to English, and unknown codes fall
/// back to English too.
#[derive(Debug, Deserialize)]
pub struct MedicalRequest {
    pub symptoms: Option<String>,
    pub question: Option<String>,
    pub language: Option<String>,
}

/// Outbound payload: always a single `response` text field.
#[derive(Debug, Serialize)]
pub struct MedicalResponse {
    pub response: String,
}
