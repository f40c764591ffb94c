//! Thin client for the public Wikipedia APIs.
//!
//! Two upstream endpoints per language edition:
//! - `GET https://{lang}.{host}/api/rest_v1/page/summary/{term}` — the REST
//!   summary, primary source of title/extract/URL.
//! - `GET https://{lang}.{host}/w/api.php?action=opensearch&…` — positional
//!   search payload, tried exactly once when the summary call fails.
//!
//! [`WikipediaService::resolve`] is the resilient entry point: it never fails,
//! mapping every upstream problem to `None` after logging it. The strict
//! `summary`/`opensearch` calls return proper errors and are what the health
//! probe builds on.

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::language::Language;
use crate::config::lookup_config::LookupConfig;
use crate::error_handler::{Result, WikiLookupError, make_snippet};
use crate::provider::{LookupFuture, LookupResult, ReferenceLookup};

/// Reqwest-backed Wikipedia client.
///
/// Reuses one HTTP client with the configured timeout and a descriptive
/// `User-Agent`. Cheap to clone is not needed; share via `Arc`.
pub struct WikipediaService {
    client: reqwest::Client,
    cfg: LookupConfig,
}

impl WikipediaService {
    /// Create a new service from the given config.
    ///
    /// # Errors
    /// [`WikiLookupError::Transport`] if the HTTP client cannot be built.
    pub fn new(cfg: LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .user_agent(cfg.user_agent.clone())
            .build()?;

        Ok(Self { client, cfg })
    }

    /// REST summary URL for a term, e.g.
    /// `https://es.wikipedia.org/api/rest_v1/page/summary/tremor`.
    pub fn summary_url(&self, term: &str, language: Language) -> String {
        format!(
            "https://{}.{}/api/rest_v1/page/summary/{}",
            language.subdomain(),
            self.cfg.host,
            urlencoding::encode(term)
        )
    }

    /// Opensearch fallback URL for a term.
    pub fn opensearch_url(&self, term: &str, language: Language) -> String {
        format!(
            "https://{}.{}/w/api.php?action=opensearch&search={}&limit=1&format=json&origin=*",
            language.subdomain(),
            self.cfg.host,
            urlencoding::encode(term)
        )
    }

    /// Fetch the REST page summary for a term.
    ///
    /// # Errors
    /// - [`WikiLookupError::HttpStatus`] for non-2xx responses (404 is the
    ///   common case for terms without an exact page)
    /// - [`WikiLookupError::Transport`] for network/timeout failures
    /// - [`WikiLookupError::Decode`] when the payload has no usable
    ///   title/extract
    #[instrument(skip(self), fields(lang = %language))]
    pub async fn summary(&self, term: &str, language: Language) -> Result<LookupResult> {
        let url = self.summary_url(term, language);

        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(WikiLookupError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            });
        }

        let payload: SummaryResponse = resp
            .json()
            .await
            .map_err(|e| WikiLookupError::Decode(format!("summary payload: {e}")))?;

        map_summary(payload, term)
    }

    /// Query the opensearch endpoint for the single best match of a term.
    ///
    /// # Errors
    /// Same taxonomy as [`WikipediaService::summary`]; an empty result set
    /// is reported as [`WikiLookupError::Decode`].
    #[instrument(skip(self), fields(lang = %language))]
    pub async fn opensearch(&self, term: &str, language: Language) -> Result<LookupResult> {
        let url = self.opensearch_url(term, language);

        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(WikiLookupError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            });
        }

        let payload: OpenSearchResponse = resp
            .json()
            .await
            .map_err(|e| WikiLookupError::Decode(format!("opensearch payload: {e}")))?;

        map_opensearch(payload, term)
    }

    /// Resolve a term, swallowing all upstream failures.
    ///
    /// Tries the REST summary first, then the opensearch fallback exactly
    /// once. Failures are logged at `warn` and collapse to `None` so the
    /// caller can continue with its remaining terms.
    pub async fn resolve(&self, term: &str, language: Language) -> Option<LookupResult> {
        match self.summary(term, language).await {
            Ok(result) => Some(result),
            Err(primary) => {
                debug!(%term, "summary failed, trying opensearch: {primary}");
                match self.opensearch(term, language).await {
                    Ok(result) => Some(result),
                    Err(fallback) => {
                        warn!(%term, %language, "lookup failed: {primary}; fallback: {fallback}");
                        None
                    }
                }
            }
        }
    }
}

impl ReferenceLookup for WikipediaService {
    fn lookup<'a>(&'a self, term: &'a str, language: Language) -> LookupFuture<'a> {
        Box::pin(self.resolve(term, language))
    }
}

/* ==========================
HTTP payloads & mapping
========================== */

/// Subset of the REST `page/summary` payload.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: Option<String>,
}

/// Positional opensearch payload: `(query, [titles], [extracts], [urls])`.
type OpenSearchResponse = (String, Vec<String>, Vec<String>, Vec<String>);

/// Validate and map a summary payload. Blank title or extract means the page
/// carries nothing worth showing, so it is treated as a decode failure.
fn map_summary(payload: SummaryResponse, term: &str) -> Result<LookupResult> {
    if payload.title.trim().is_empty() || payload.extract.trim().is_empty() {
        return Err(WikiLookupError::Decode(
            "summary payload has empty title or extract".into(),
        ));
    }

    let source_url = payload
        .content_urls
        .and_then(|c| c.desktop)
        .and_then(|d| d.page)
        .unwrap_or_default();

    Ok(LookupResult {
        title: payload.title,
        extract: payload.extract,
        source_url,
        term: term.to_string(),
    })
}

/// Map the first opensearch hit, requiring both a title and an extract.
fn map_opensearch(payload: OpenSearchResponse, term: &str) -> Result<LookupResult> {
    let (_, titles, extracts, urls) = payload;

    match (titles.into_iter().next(), extracts.into_iter().next()) {
        (Some(title), Some(extract)) if !title.trim().is_empty() => Ok(LookupResult {
            title,
            extract,
            source_url: urls.into_iter().next().unwrap_or_default(),
            term: term.to_string(),
        }),
        _ => Err(WikiLookupError::Decode(
            "opensearch returned no matches".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> WikipediaService {
        WikipediaService::new(LookupConfig::default()).unwrap()
    }

    #[test]
    fn summary_url_encodes_term_and_language() {
        let svc = service();
        assert_eq!(
            svc.summary_url("memory loss", Language::Es),
            "https://es.wikipedia.org/api/rest_v1/page/summary/memory%20loss"
        );
    }

    #[test]
    fn opensearch_url_has_single_result_limit() {
        let svc = service();
        let url = svc.opensearch_url("tremor", Language::En);
        assert!(url.starts_with("https://en.wikipedia.org/w/api.php?action=opensearch"));
        assert!(url.contains("search=tremor"));
        assert!(url.contains("limit=1"));
    }

    #[test]
    fn summary_payload_maps_to_result() {
        let payload: SummaryResponse = serde_json::from_value(serde_json::json!({
            "title": "Essential tremor",
            "extract": "Essential tremor is a movement disorder.",
            "content_urls": {
                "desktop": { "page": "https://en.wikipedia.org/wiki/Essential_tremor" }
            }
        }))
        .unwrap();

        let result = map_summary(payload, "tremor").unwrap();
        assert_eq!(result.title, "Essential tremor");
        assert_eq!(
            result.source_url,
            "https://en.wikipedia.org/wiki/Essential_tremor"
        );
        assert_eq!(result.term, "tremor");
    }

    #[test]
    fn summary_without_desktop_link_yields_empty_url() {
        let payload: SummaryResponse = serde_json::from_value(serde_json::json!({
            "title": "Ataxia",
            "extract": "Ataxia is a lack of voluntary coordination."
        }))
        .unwrap();

        let result = map_summary(payload, "ataxia").unwrap();
        assert_eq!(result.source_url, "");
    }

    #[test]
    fn blank_summary_is_a_decode_error() {
        let payload: SummaryResponse =
            serde_json::from_value(serde_json::json!({ "title": "", "extract": "" })).unwrap();
        assert!(matches!(
            map_summary(payload, "x"),
            Err(WikiLookupError::Decode(_))
        ));
    }

    #[test]
    fn opensearch_payload_maps_positionally() {
        let payload: OpenSearchResponse = serde_json::from_value(serde_json::json!([
            "dementia",
            ["Dementia"],
            ["Dementia is a group of brain disorders."],
            ["https://en.wikipedia.org/wiki/Dementia"]
        ]))
        .unwrap();

        let result = map_opensearch(payload, "dementia").unwrap();
        assert_eq!(result.title, "Dementia");
        assert_eq!(result.source_url, "https://en.wikipedia.org/wiki/Dementia");
    }

    #[test]
    fn empty_opensearch_is_a_decode_error() {
        let payload: OpenSearchResponse =
            serde_json::from_value(serde_json::json!(["nothing", [], [], []])).unwrap();
        assert!(matches!(
            map_opensearch(payload, "nothing"),
            Err(WikiLookupError::Decode(_))
        ));
    }

    #[test]
    fn opensearch_without_url_yields_empty_source() {
        let payload: OpenSearchResponse = serde_json::from_value(serde_json::json!([
            "aphasia",
            ["Aphasia"],
            ["Aphasia is an inability to comprehend or formulate language."],
            []
        ]))
        .unwrap();

        let result = map_opensearch(payload, "aphasia").unwrap();
        assert_eq!(result.source_url, "");
    }
}
