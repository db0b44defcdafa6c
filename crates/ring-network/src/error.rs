//! Network-subsystem error type.

use thiserror::Error;

use ring_core::RingError;

/// Errors produced by `ring-network` and by [`NetworkCompiler`] backends.
///
/// [`NetworkCompiler`]: crate::NetworkCompiler
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    Config(#[from] RingError),

    /// The external compiler ran and reported failure.  `message` is the
    /// tool's own diagnostic, unmodified.
    #[error("network compiler {tool} failed ({status}): {message}")]
    Compile { tool: String, status: String, message: String },

    /// The compiler's input documents could not be prepared.
    #[error("failed to prepare network compiler input: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
