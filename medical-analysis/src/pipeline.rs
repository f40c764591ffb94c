//! End-to-end analysis: extract, fan out lookups, format.

use futures::{StreamExt, stream};
use tracing::{debug, info};

use wiki_lookup::{LookupResult, ReferenceLookup};

use crate::extractor::{ExtractorConfig, extract_terms};
use crate::formatter::format_response;
use crate::types::MedicalQuery;

/// Upper bound on in-flight reference lookups for one query.
const MAX_CONCURRENT_LOOKUPS: usize = 3;

/// Run the full pipeline for one validated query and return the answer text.
///
/// Lookups run concurrently (bounded) and are reassembled in term order, so
/// completion order never changes the output. Individual lookup failures
/// surface as `None` inside the provider and are simply dropped; with zero
/// survivors the formatter renders its general-advice branch. This function
/// itself cannot fail.
pub async fn analyze(
    lookup: &dyn ReferenceLookup,
    query: &MedicalQuery,
    cfg: &ExtractorConfig,
) -> String {
    let terms = extract_terms(&query.text, query.kind, cfg);
    debug!(?terms, kind = ?query.kind, "extracted search terms");

    // Carry the original index through the unordered fan-out so results can
    // be put back in term order.
    let terms_ref = &terms;
    let mut indexed: Vec<(usize, LookupResult)> = stream::iter(0..terms.len())
        .map(|i| {
            let language = query.language;
            async move { (i, lookup.lookup(&terms_ref[i], language).await) }
        })
        .buffer_unordered(MAX_CONCURRENT_LOOKUPS)
        .filter_map(|(i, maybe)| async move { maybe.map(|r| (i, r)) })
        .collect()
        .await;
    indexed.sort_by_key(|(i, _)| *i);

    let results: Vec<LookupResult> = indexed.into_iter().map(|(_, r)| r).collect();
    info!(
        terms = terms.len(),
        resolved = results.len(),
        "reference lookups finished"
    );

    format_response(query.language, query.kind, &query.text, &results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wiki_lookup::{Language, LookupFuture, NoopLookup};

    use crate::types::QueryKind;

    /// Deterministic provider backed by a term -> result map, counting calls.
    struct MapLookup {
        results: HashMap<String, LookupResult>,
        calls: AtomicUsize,
    }

    impl MapLookup {
        fn new(entries: &[(&str, &str)]) -> Self {
            let results = entries
                .iter()
                .map(|(term, title)| {
                    (
                        term.to_string(),
                        LookupResult {
                            title: title.to_string(),
                            extract: format!("{title} is a medical topic."),
                            source_url: format!("https://en.wikipedia.org/wiki/{title}"),
                            term: term.to_string(),
                        },
                    )
                })
                .collect();
            Self {
                results,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ReferenceLookup for MapLookup {
        fn lookup<'a>(&'a self, term: &'a str, _language: Language) -> LookupFuture<'a> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { self.results.get(term).cloned() })
        }
    }

    #[tokio::test]
    async fn symptom_analysis_renders_numbered_list_in_term_order() {
        // Scenario: tremor + memory loss with successful lookups.
        let lookup = MapLookup::new(&[
            ("memory loss", "Amnesia"),
            ("tremor", "Essential tremor"),
        ]);
        let query = MedicalQuery::new(
            QueryKind::Symptoms,
            "I have a tremor and memory loss",
            Language::En,
        );

        let text = analyze(&lookup, &query, &ExtractorConfig::default()).await;

        // "memory loss" precedes "tremor" in the keyword table.
        assert!(text.contains("**1. Amnesia**"));
        assert!(text.contains("**2. Essential tremor**"));
        assert!(text.contains("**Symptoms Described:** I have a tremor and memory loss"));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_lookups_are_skipped_not_fatal() {
        // Only one of the extracted terms resolves.
        let lookup = MapLookup::new(&[("tremor", "Essential tremor")]);
        let query = MedicalQuery::new(
            QueryKind::Symptoms,
            "tremor and memory loss",
            Language::En,
        );

        let text = analyze(&lookup, &query, &ExtractorConfig::default()).await;

        assert!(text.contains("**1. Essential tremor**"));
        assert!(!text.contains("**2."));
    }

    #[tokio::test]
    async fn all_lookups_failing_degrades_to_advice_branch() {
        // Scenario: upstream fully unavailable.
        let query = MedicalQuery::new(
            QueryKind::Symptoms,
            "I have a tremor and memory loss",
            Language::En,
        );

        let text = analyze(&NoopLookup, &query, &ExtractorConfig::default()).await;

        assert!(text.contains("**General Medical Advice:**"));
        assert!(text.contains("**Tremors**"));
        assert!(text.contains("**Important Medical Disclaimer:**"));
        assert!(!text.contains("**Related Medical Conditions Found:**"));
    }

    #[tokio::test]
    async fn spanish_question_uses_spanish_templates_without_lookups() {
        let query = MedicalQuery::new(
            QueryKind::Question,
            "What is the treatment for Parkinson's?",
            Language::Es,
        );

        let text = analyze(&NoopLookup, &query, &ExtractorConfig::default()).await;

        assert!(text.contains("**Respuesta de Información Médica**"));
        assert!(text.contains("**Descargo Médico:**"));
    }
}
