use thiserror::Error;

/// Errors raised by lattice construction, sampling and analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rejected construction or dispatch parameter.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Resampling needs at least `needed` samples.
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },
    /// The lattice has no site that can take part in the requested move.
    #[error("degenerate lattice state: {0}")]
    DegenerateState(String),
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<validator::ValidationErrors> for SimError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Config(format!("{e}"))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
