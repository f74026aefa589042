use thiserror::Error;

use super::config::ConfigError;
use super::timer::TimerError;
use super::utils::sampling::SamplingError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Settling timer failed: {source}")]
    Timer {
        #[from]
        source: TimerError,
    },

    #[error("Generated layout is not a dense {qubits}x{depth} matrix")]
    MalformedLayout { qubits: usize, depth: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
