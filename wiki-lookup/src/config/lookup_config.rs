//! Configuration for the Wikipedia lookup client.

use crate::error_handler::ConfigError;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default descriptive client identifier sent with every upstream call.
pub const DEFAULT_USER_AGENT: &str = "InMind-Medical-App/1.0 (educational-purpose)";

/// Settings for [`crate::WikipediaService`].
///
/// `host` is the bare site host without language subdomain; the language is
/// prepended per call. Kept overridable so tests can point the client at a
/// local stub server.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Site host, e.g. `wikipedia.org`.
    pub host: String,
    /// Value for the `User-Agent` header.
    pub user_agent: String,
    /// Hard timeout applied to each upstream request, in seconds.
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            host: "wikipedia.org".into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LookupConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Recognized variables:
    /// - `WIKI_HOST` — site host (default `wikipedia.org`)
    /// - `WIKI_USER_AGENT` — client identifier header
    /// - `WIKI_TIMEOUT_SECS` — per-request timeout in seconds
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] when `WIKI_TIMEOUT_SECS` is set but not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Ok(host) = std::env::var("WIKI_HOST") {
            if !host.trim().is_empty() {
                cfg.host = host.trim().to_string();
            }
        }
        if let Ok(ua) = std::env::var("WIKI_USER_AGENT") {
            if !ua.trim().is_empty() {
                cfg.user_agent = ua.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var("WIKI_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "WIKI_TIMEOUT_SECS",
                    reason: "expected a positive integer number of seconds",
                })?;
            if secs == 0 {
                return Err(ConfigError::InvalidNumber {
                    var: "WIKI_TIMEOUT_SECS",
                    reason: "timeout must be greater than zero",
                });
            }
            cfg.timeout_secs = secs;
        }

        Ok(cfg)
    }
}
