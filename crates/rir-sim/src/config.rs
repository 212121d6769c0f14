//! Simulation configuration

use crate::error::{Result, SimulationError};
use rir_core::SPEED_OF_SOUND;
use serde::{Deserialize, Serialize};

/// Configuration for the image-source simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Output sample rate (Hz)
    pub sample_rate: u32,

    /// Speed of sound (m/s)
    pub speed_of_sound: f64,

    /// Length of the windowed-sinc fractional delay filter (odd, taps)
    pub fractional_delay_length: usize,

    /// Keep DC in the response; when false a high-pass removes it
    pub keep_dc: bool,

    /// Cutoff of the DC-removing high-pass (Hz)
    pub high_pass_cutoff_hz: f64,

    /// Decay range used by the RT60 measurement (dB)
    pub rt60_decay_db: f64,

    /// Frequency-dependent air absorption; not modelled, must stay off
    pub air_absorption: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000,
            speed_of_sound: SPEED_OF_SOUND,
            fractional_delay_length: 81,
            keep_dc: false,
            high_pass_cutoff_hz: 10.0,
            rt60_decay_db: 60.0,
            air_absorption: false,
        }
    }
}

impl SimulationConfig {
    /// Builder pattern: set sample rate
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Builder pattern: keep or remove DC
    pub fn with_keep_dc(mut self, keep_dc: bool) -> Self {
        self.keep_dc = keep_dc;
        self
    }

    /// Builder pattern: set fractional delay filter length
    pub fn with_fractional_delay_length(mut self, taps: usize) -> Self {
        self.fractional_delay_length = taps;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SimulationError::InvalidConfig(
                "sample rate must be positive".into(),
            ));
        }
        if self.speed_of_sound <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "speed of sound must be positive".into(),
            ));
        }
        if self.fractional_delay_length == 0 || self.fractional_delay_length % 2 == 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "fractional delay length must be odd, got {}",
                self.fractional_delay_length
            )));
        }
        let nyquist = self.sample_rate as f64 / 2.0;
        let cutoff_ok = self.high_pass_cutoff_hz > 0.0 && self.high_pass_cutoff_hz < nyquist;
        if !self.keep_dc && !cutoff_ok {
            return Err(SimulationError::InvalidConfig(format!(
                "high-pass cutoff must lie in (0, {nyquist}) Hz"
            )));
        }
        if self.rt60_decay_db <= 0.0 {
            return Err(SimulationError::InvalidConfig(
                "RT60 decay range must be positive".into(),
            ));
        }
        if self.air_absorption {
            return Err(SimulationError::InvalidConfig(
                "air absorption is not supported".into(),
            ));
        }
        Ok(())
    }
}
