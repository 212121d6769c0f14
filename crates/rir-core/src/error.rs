//! Error types for parameter sampling

use thiserror::Error;

/// Sampling and naming errors
#[derive(Error, Debug)]
pub enum SamplingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Infeasible configuration: {what} not satisfied after {attempts} attempts")]
    Infeasible { what: &'static str, attempts: usize },

    #[error("Sabine inversion failed for RT60={rt60:.3}s: {reason}")]
    InversionFailed { rt60: f64, reason: String },

    #[error("Malformed RIR file name '{name}': {reason}")]
    MalformedFileName { name: String, reason: String },
}

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;
