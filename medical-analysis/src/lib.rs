//! Symptom/question analysis pipeline.
//!
//! Public API: [`analyze`]. It derives up to three search terms from the
//! user's text via fixed keyword tables, fans the reference lookups out with
//! bounded concurrency, reassembles the survivors in term order, and renders
//! one localized, disclaimer-bearing text answer. Everything except the
//! lookups themselves is pure and deterministic.

mod extractor;
mod formatter;
mod keywords;
mod pipeline;
pub mod templates;
mod types;

pub use extractor::{ExtractorConfig, MAX_TERMS, extract_terms};
pub use formatter::format_response;
pub use pipeline::analyze;
pub use templates::ResponseTemplates;
pub use types::{MedicalQuery, QueryKind};

pub use wiki_lookup::Language;
