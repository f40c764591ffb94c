//! Search term extraction from free-text input.
//!
//! Deterministic given the input and the fixed tables in [`crate::keywords`]:
//! no I/O, no randomness. Both modes guarantee between one and
//! [`MAX_TERMS`] terms, falling back to fixed generic pairs when nothing
//! matches. The caller must reject blank input before calling in here.

use crate::keywords::{
    MEDICAL_CONDITIONS, MEDICAL_KEYWORDS, NEUROLOGICAL_TERMS, PREVENTION_TRIGGERS,
    QUESTION_FALLBACK, QUESTION_STOP_WORDS, SYMPTOM_FALLBACK, SYMPTOM_HINTS,
    SYMPTOM_QUESTION_TRIGGERS, TREATMENT_TRIGGERS,
};
use crate::types::QueryKind;

/// Hard cap on the number of search terms (and therefore upstream calls)
/// derived from one query.
pub const MAX_TERMS: usize = 3;

/// Tunables for question-mode word splitting.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Free words shorter than or equal to this are discarded.
    pub min_word_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { min_word_len: 5 }
    }
}

/// Derive 1..=[`MAX_TERMS`] search terms from user text.
pub fn extract_terms(text: &str, kind: QueryKind, cfg: &ExtractorConfig) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut terms = match kind {
        QueryKind::Symptoms => symptom_terms(&lower),
        QueryKind::Question => question_terms(&lower, cfg),
    };

    terms.truncate(MAX_TERMS);
    terms
}

fn symptom_terms(lower: &str) -> Vec<String> {
    // Direct condition names, also matching the space-stripped spelling
    // ("memoryloss").
    let mut terms: Vec<String> = NEUROLOGICAL_TERMS
        .iter()
        .filter(|term| lower.contains(*term) || lower.contains(&term.replace(' ', "")))
        .take(MAX_TERMS)
        .map(|t| t.to_string())
        .collect();

    if !terms.is_empty() {
        return terms;
    }

    // Broader trigger words map to likely condition pairs.
    for (triggers, conditions) in SYMPTOM_HINTS {
        if triggers.iter().any(|t| lower.contains(t)) {
            terms.extend(conditions.iter().map(|c| c.to_string()));
        }
    }

    if terms.is_empty() {
        terms.extend(SYMPTOM_FALLBACK.iter().map(|t| t.to_string()));
    }

    terms
}

fn question_terms(lower: &str, cfg: &ExtractorConfig) -> Vec<String> {
    let conditions: Vec<&str> = MEDICAL_CONDITIONS
        .iter()
        .filter(|c| lower.contains(*c))
        .take(2)
        .copied()
        .collect();

    if !conditions.is_empty() {
        let suffix = question_suffix(lower);
        return conditions
            .into_iter()
            .map(|c| match suffix {
                Some(s) => format!("{c} {s}"),
                None => c.to_string(),
            })
            .collect();
    }

    let keywords: Vec<String> = MEDICAL_KEYWORDS
        .iter()
        .filter(|k| lower.contains(*k))
        .take(2)
        .map(|k| k.to_string())
        .collect();

    if !keywords.is_empty() {
        return keywords;
    }

    // Free-word fallback: keep longer, non-filler words.
    let words: Vec<String> = lower
        .split_whitespace()
        .filter(|w| w.len() > cfg.min_word_len && !QUESTION_STOP_WORDS.contains(w))
        .take(2)
        .map(|w| w.to_string())
        .collect();

    if !words.is_empty() {
        return words;
    }

    QUESTION_FALLBACK.iter().map(|t| t.to_string()).collect()
}

/// Focus suffix appended to matched condition names, derived from how the
/// question is framed. Treatment framing wins over prevention, prevention
/// over symptoms.
fn question_suffix(lower: &str) -> Option<&'static str> {
    if TREATMENT_TRIGGERS.iter().any(|t| lower.contains(t)) {
        Some("treatment")
    } else if PREVENTION_TRIGGERS.iter().any(|t| lower.contains(t)) {
        Some("prevention")
    } else if SYMPTOM_QUESTION_TRIGGERS.iter().any(|t| lower.contains(t)) {
        Some("symptoms")
    } else {
        None
    }
}
