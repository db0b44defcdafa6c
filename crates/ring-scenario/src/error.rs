use thiserror::Error;

use ring_core::RingError;
use ring_fleet::FleetError;
use ring_network::NetworkError;
use ring_output::OutputError;

/// Scenario generation errors.
///
/// Two classes, both fatal:
///
/// | Class         | Variants                         | Raised                      |
/// |---------------|----------------------------------|-----------------------------|
/// | configuration | `Config`, `Fleet`, `Json`, `Io`  | before any external call    |
/// | external tool | `Network`, `Output`              | by the compiler or writer   |
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(RingError),

    #[error("fleet configuration error: {0}")]
    Fleet(#[from] FleetError),

    #[error("invalid scenario config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read scenario config: {0}")]
    Io(#[from] std::io::Error),

    /// Network compiler failure, passed through unmodified.
    #[error(transparent)]
    Network(NetworkError),

    /// Document writer failure, passed through unmodified.
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ScenarioError {
    pub fn config(msg: impl Into<String>) -> Self {
        ScenarioError::Config(RingError::Config(msg.into()))
    }

    /// Missing or invalid scenario input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ScenarioError::Config(_) | ScenarioError::Fleet(_) | ScenarioError::Json(_) | ScenarioError::Io(_)
        )
    }

    /// Failure of the network compiler or document writer.
    pub fn is_external(&self) -> bool {
        matches!(self, ScenarioError::Network(_) | ScenarioError::Output(_))
    }
}

impl From<RingError> for ScenarioError {
    fn from(e: RingError) -> Self {
        ScenarioError::Config(e)
    }
}

impl From<NetworkError> for ScenarioError {
    /// Parameter validation failures stay configuration errors; everything
    /// else came from the compiler.
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::Config(c) => ScenarioError::Config(c),
            other => ScenarioError::Network(other),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
