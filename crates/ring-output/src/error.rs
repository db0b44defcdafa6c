//! Error types for ring-output.

use thiserror::Error;

/// Errors that can occur when persisting scenario documents.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML write error: {0}")]
    Xml(String),
}

impl OutputError {
    pub(crate) fn xml(e: impl std::fmt::Display) -> Self {
        OutputError::Xml(e.to_string())
    }
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
