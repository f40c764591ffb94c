//! Abstract reference lookup seam.
//!
//! The HTTP pipeline talks to [`ReferenceLookup`] rather than to the concrete
//! Wikipedia client, so tests can plug in deterministic fakes.

use std::{future::Future, pin::Pin};

use crate::config::language::Language;

/// One reference summary resolved for a search term.
///
/// `source_url` may be empty when upstream gives no desktop page link; the
/// formatter skips the source line in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Article title.
    pub title: String,
    /// Plain-text extract of the article lead.
    pub extract: String,
    /// Canonical desktop page URL, or empty.
    pub source_url: String,
    /// The search term that produced this result.
    pub term: String,
}

/// Boxed future returned by [`ReferenceLookup::lookup`].
pub type LookupFuture<'a> = Pin<Box<dyn Future<Output = Option<LookupResult>> + Send + 'a>>;

/// Provider interface for best-effort reference lookups.
///
/// Implementations must never propagate upstream failures: a lookup that
/// cannot produce a usable result resolves to `None`. Async because real
/// providers perform HTTP requests.
pub trait ReferenceLookup: Send + Sync {
    /// Resolve one search term against the reference source.
    fn lookup<'a>(&'a self, term: &'a str, language: Language) -> LookupFuture<'a>;
}

/// Default lookup that finds nothing (safe to link until a real one is wired).
#[derive(Debug, Clone, Default)]
pub struct NoopLookup;

impl ReferenceLookup for NoopLookup {
    fn lookup<'a>(&'a self, _term: &'a str, _language: Language) -> LookupFuture<'a> {
        Box::pin(async { None })
    }
}
