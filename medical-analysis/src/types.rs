//! Core request types shared across the pipeline.

use wiki_lookup::Language;

/// What kind of analysis the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Free-text symptom description.
    Symptoms,
    /// Free-form medical question.
    Question,
}

/// One validated inbound query. Built per request, never mutated.
///
/// `text` is guaranteed non-blank by the HTTP layer; extraction relies on it.
#[derive(Debug, Clone)]
pub struct MedicalQuery {
    pub kind: QueryKind,
    pub text: String,
    pub language: Language,
}

impl MedicalQuery {
    pub fn new(kind: QueryKind, text: impl Into<String>, language: Language) -> Self {
        Self {
            kind,
            text: text.into(),
            language,
        }
    }
}
