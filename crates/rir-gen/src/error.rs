//! Error types for batch generation

use thiserror::Error;

/// Generation errors
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Path {0} already exists. Abort.")]
    OutputExists(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sampling failed: {0}")]
    Sampling(#[from] rir_core::SamplingError),

    #[error("Simulation failed for sample {index}: {source}")]
    Simulation {
        index: usize,
        #[source]
        source: rir_sim::SimulationError,
    },

    #[error("Sample {index} rendered at {found}Hz, simulator reports {expected}Hz")]
    SampleRateMismatch {
        index: usize,
        expected: u32,
        found: u32,
    },

    #[error("Failed to write output file: {0}")]
    WriteError(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation
pub type GenerateResult<T> = Result<T, GenerateError>;
