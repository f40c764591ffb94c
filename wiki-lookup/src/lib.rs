//! Best-effort Wikipedia lookup client.
//!
//! One [`WikipediaService`] per process: a thin reqwest client over the
//! Wikipedia REST summary endpoint with a single opensearch fallback per
//! term. The resilient entry point is [`WikipediaService::resolve`], which
//! swallows every upstream failure and returns `Option` so callers can keep
//! going with the remaining terms.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod provider;
pub mod services;
pub mod telemetry;

pub use config::language::Language;
pub use config::lookup_config::LookupConfig;
pub use error_handler::{Result, WikiLookupError};
pub use provider::{LookupFuture, LookupResult, NoopLookup, ReferenceLookup};
pub use services::wikipedia_service::WikipediaService;
