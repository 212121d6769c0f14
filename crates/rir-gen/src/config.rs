//! Generator configuration

use crate::error::{GenerateError, GenerateResult};
use rir_core::SamplerConfig;
use rir_sim::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a generation run needs apart from the sample count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Geometry and RT60 sampling
    pub sampler: SamplerConfig,

    /// Simulator settings
    pub simulation: SimulationConfig,
}

impl GeneratorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> GenerateResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Builder pattern: set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sampler.seed = seed;
        self
    }

    /// Builder pattern: keep or remove DC
    pub fn with_keep_dc(mut self, keep_dc: bool) -> Self {
        self.simulation.keep_dc = keep_dc;
        self
    }

    /// Validate every range before any work starts
    pub fn validate(&self) -> GenerateResult<()> {
        self.sampler.validate()?;
        self.simulation
            .validate()
            .map_err(|e| GenerateError::InvalidConfig(e.to_string()))?;

        // Reflection order is derived with the sampler's c, delays with the simulator's
        if self.sampler.speed_of_sound != self.simulation.speed_of_sound {
            return Err(GenerateError::InvalidConfig(format!(
                "speed of sound differs between sampler ({} m/s) and simulation ({} m/s)",
                self.sampler.speed_of_sound, self.simulation.speed_of_sound
            )));
        }
        Ok(())
    }
}
