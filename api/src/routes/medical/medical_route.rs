//! POST /api/medical — symptom analysis and medical Q&A.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, error, instrument};

use medical_analysis::{Language, MedicalQuery, QueryKind, analyze, templates};

use crate::{
    core::app_state::AppState,
    routes::medical::medical_request::{MedicalRequest, MedicalResponse},
};

/// Handler: POST /api/medical (alias: /api/wikipedia-medical)
///
/// Always answers `200 {"response": …}`. Missing or blank input
/// short-circuits to a localized prompt without touching the upstream API;
/// a panic anywhere in the pipeline degrades to a static localized fallback.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/medical \
///   -H 'content-type: application/json' \
///   -d '{"symptoms":"I have a tremor and memory loss","language":"en"}'
/// ```
#[instrument(name = "medical_route", skip(state, body))]
pub async fn medical(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MedicalRequest>,
) -> Json<MedicalResponse> {
    let language = Language::parse_or_default(body.language.as_deref().unwrap_or_default());

    let Some(query) = build_query(&body, language) else {
        debug!("no usable symptoms or question in request");
        return Json(MedicalResponse {
            response: templates::for_language(language).invalid_input.to_string(),
        });
    };

    // Run the pipeline on its own task so a panic is contained here instead
    // of surfacing as a transport error.
    let task_state = state.clone();
    let task_query = query.clone();
    let outcome = tokio::spawn(async move {
        analyze(
            task_state.lookup.as_ref(),
            &task_query,
            &task_state.extractor,
        )
        .await
    })
    .await;

    let response = match outcome {
        Ok(text) => text,
        Err(join_err) => {
            error!("analysis task failed: {join_err}");
            templates::for_language(language)
                .technical_difficulties
                .to_string()
        }
    };

    Json(MedicalResponse { response })
}

/// Decide the query kind and validate the active field. Blank-after-trim
/// input is treated the same as absent input.
fn build_query(body: &MedicalRequest, language: Language) -> Option<MedicalQuery> {
    let non_blank = |field: &Option<String>| -> Option<String> {
        field
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    };

    if let Some(symptoms) = non_blank(&body.symptoms) {
        return Some(MedicalQuery::new(QueryKind::Symptoms, symptoms, language));
    }
    if let Some(question) = non_blank(&body.question) {
        return Some(MedicalQuery::new(QueryKind::Question, question, language));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use wiki_lookup::{LookupFuture, LookupResult, ReferenceLookup};

    /// Lookup double that always resolves and counts its calls.
    #[derive(Default)]
    struct CountingLookup {
        calls: Arc<AtomicUsize>,
        resolve: bool,
    }

    impl ReferenceLookup for CountingLookup {
        fn lookup<'a>(&'a self, term: &'a str, _language: Language) -> LookupFuture<'a> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let resolve = self.resolve;
            Box::pin(async move {
                resolve.then(|| LookupResult {
                    title: format!("Article about {term}"),
                    extract: format!("{term} explained."),
                    source_url: String::new(),
                    term: term.to_string(),
                })
            })
        }
    }

    /// Lookup double whose future panics when polled.
    struct PanickingLookup;

    impl ReferenceLookup for PanickingLookup {
        fn lookup<'a>(&'a self, _term: &'a str, _language: Language) -> LookupFuture<'a> {
            Box::pin(async { panic!("lookup backend went away") })
        }
    }

    fn test_router(lookup: CountingLookup) -> Router {
        crate::router(Arc::new(AppState::with_lookup(Arc::new(lookup))))
    }

    async fn post(router: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn symptom_request_returns_numbered_results() {
        let lookup = CountingLookup {
            resolve: true,
            ..Default::default()
        };
        let (status, json) = post(
            test_router(lookup),
            "/api/medical",
            r#"{"symptoms":"I have a tremor and memory loss","language":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let text = json["response"].as_str().unwrap();
        assert!(text.contains("**Symptoms Described:** I have a tremor and memory loss"));
        assert!(text.contains("**1. Article about memory loss**"));
        assert!(text.contains("**Important Medical Disclaimer:**"));
    }

    #[tokio::test]
    async fn blank_symptoms_short_circuit_without_lookups() {
        let lookup = CountingLookup::default();
        let calls = lookup.calls.clone();

        let (status, json) = post(
            test_router(lookup),
            "/api/medical",
            r#"{"symptoms":"   ","language":"en"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["response"],
            "Please enter a symptom description or a medical question to analyze."
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_fields_short_circuit_too() {
        let lookup = CountingLookup::default();
        let calls = lookup.calls.clone();

        let (status, json) = post(test_router(lookup), "/api/medical", r#"{}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["response"].as_str().unwrap().contains("Please enter"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn spanish_question_answers_in_spanish_even_without_results() {
        let lookup = CountingLookup::default(); // resolves nothing
        let (status, json) = post(
            test_router(lookup),
            "/api/medical",
            r#"{"question":"What is the treatment for Parkinson's?","language":"es"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let text = json["response"].as_str().unwrap();
        assert!(text.contains("**Respuesta de Información Médica**"));
        assert!(text.contains("**Descargo Médico:**"));
    }

    #[tokio::test]
    async fn legacy_route_alias_answers_identically() {
        let lookup = CountingLookup {
            resolve: true,
            ..Default::default()
        };
        let (status, json) = post(
            test_router(lookup),
            "/api/wikipedia-medical",
            r#"{"question":"what is dementia"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["response"].as_str().unwrap().contains("**Your Question:** what is dementia"));
    }

    #[tokio::test]
    async fn unparseable_body_still_yields_response_text() {
        let lookup = CountingLookup::default();
        let calls = lookup.calls.clone();

        let (status, json) = post(test_router(lookup), "/api/medical", "not json at all").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["response"].is_string());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn panicking_pipeline_degrades_to_localized_fallback() {
        let router = crate::router(Arc::new(AppState::with_lookup(Arc::new(PanickingLookup))));
        let (status, json) = post(
            router,
            "/api/medical",
            r#"{"symptoms":"I have a tremor","language":"es"}"#,
        )
        .await;

        // The task's panic must stay server-side; the caller still gets the
        // static fallback in the requested language.
        assert_eq!(status, StatusCode::OK);
        let text = json["response"].as_str().unwrap();
        assert!(text.contains("dificultades técnicas"));
        assert!(text.contains("**Descargo Médico:**"));
    }

    #[tokio::test]
    async fn all_lookups_failing_keeps_full_disclaimer() {
        let lookup = CountingLookup::default(); // every lookup returns None
        let (_, json) = post(
            test_router(lookup),
            "/api/medical",
            r#"{"symptoms":"I have a tremor and memory loss"}"#,
        )
        .await;

        let text = json["response"].as_str().unwrap();
        assert!(text.contains("**General Medical Advice:**"));
        assert!(text.contains("**Important Medical Disclaimer:**"));
        assert!(text.contains("**Recommended Next Steps:**"));
        assert!(!text.contains("**Related Medical Conditions Found:**"));
    }
}
