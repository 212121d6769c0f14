//! Error types for RIR simulation

use thiserror::Error;

/// Simulation errors
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("RT60 could not be measured: {0}")]
    Rt60Unmeasurable(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
