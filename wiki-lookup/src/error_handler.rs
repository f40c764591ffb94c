//! Unified error handling for `wiki-lookup`.
//!
//! One top-level [`WikiLookupError`] for the whole crate, with config errors
//! grouped in [`ConfigError`]. All messages carry the `[Wiki Lookup]` prefix
//! to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, WikiLookupError>;

/// Top-level error for the `wiki-lookup` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WikiLookupError {
    /// Configuration/validation errors (startup time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error (connect, timeout, TLS).
    #[error("[Wiki Lookup] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-successful HTTP status from upstream.
    #[error("[Wiki Lookup] unexpected HTTP status {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body.
        snippet: String,
    },

    /// Upstream answered 2xx but the payload was unusable.
    #[error("[Wiki Lookup] failed to decode response: {0}")]
    Decode(String),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (timeouts, ports).
    #[error("[Wiki Lookup] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g. `WIKI_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason.
        reason: &'static str,
    },
}

/// Clip a response body down to a log-friendly snippet.
pub(crate) fn make_snippet(body: &str) -> String {
    body.chars().take(240).collect()
}
