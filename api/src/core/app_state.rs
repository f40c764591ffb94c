//! Shared state for all HTTP handlers.

use std::sync::Arc;

use medical_analysis::ExtractorConfig;
use wiki_lookup::{LookupConfig, ReferenceLookup, WikipediaService};

use crate::error_handler::{AppError, AppResult};

/// Process-wide state handed to every handler.
pub struct AppState {
    /// Listen address, e.g. `127.0.0.1:8080`.
    pub bind_addr: String,
    /// Tunables for question-mode word splitting.
    pub extractor: ExtractorConfig,
    /// Reference lookup used by the analysis pipeline.
    pub lookup: Arc<dyn ReferenceLookup>,
    /// Concrete Wikipedia client kept around for the health probe; absent
    /// when the state was built around a test double.
    pub wikipedia: Option<Arc<WikipediaService>>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Recognized variables: `API_ADDRESS` (default `127.0.0.1:8080`),
    /// `QUESTION_MIN_WORD_LEN` (default 5), plus the `WIKI_*` family read by
    /// [`LookupConfig::from_env`].
    pub fn from_env() -> AppResult<Self> {
        let bind_addr =
            std::env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let mut extractor = ExtractorConfig::default();
        if let Ok(raw) = std::env::var("QUESTION_MIN_WORD_LEN") {
            extractor.min_word_len =
                raw.trim()
                    .parse()
                    .map_err(|_| AppError::InvalidEnvNumber {
                        var: "QUESTION_MIN_WORD_LEN",
                        reason: "expected a small non-negative integer",
                    })?;
        }

        let lookup_cfg = LookupConfig::from_env()?;
        let wikipedia =
            Arc::new(WikipediaService::new(lookup_cfg).map_err(AppError::LookupClient)?);

        Ok(Self {
            bind_addr,
            extractor,
            lookup: wikipedia.clone(),
            wikipedia: Some(wikipedia),
        })
    }

    /// State around an arbitrary lookup implementation; used by tests.
    pub fn with_lookup(lookup: Arc<dyn ReferenceLookup>) -> Self {
        Self {
            bind_addr: "127.0.0.1:0".into(),
            extractor: ExtractorConfig::default(),
            lookup,
            wikipedia: None,
        }
    }
}
