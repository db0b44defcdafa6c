//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `RingError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The base error type shared by all `ring-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RingError {
    /// A required scenario parameter is missing or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl RingError {
    /// Shorthand for an out-of-range parameter.
    pub fn invalid(name: &str, reason: impl std::fmt::Display) -> Self {
        RingError::Config(format!("{name} {reason}"))
    }
}

/// Shorthand result type for `ring-core`.
pub type RingResult<T> = Result<T, RingError>;
