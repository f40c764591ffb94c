//! Application error type for boot and serve failures.
//!
//! Business-logic failures never reach this type: the medical route always
//! answers 200 with usable text. What remains is startup wiring — config,
//! bind, serve.

use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    LookupConfig(#[from] wiki_lookup::error_handler::ConfigError),

    #[error("failed to build lookup client")]
    LookupClient(#[source] wiki_lookup::WikiLookupError),

    #[error("invalid number in {var}: {reason}")]
    InvalidEnvNumber {
        var: &'static str,
        reason: &'static str,
    },

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),
}

/// Handy result alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;
