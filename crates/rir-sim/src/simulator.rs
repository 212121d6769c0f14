//! Simulator capability trait and its inputs/outputs

use crate::error::{Result, SimulationError};
use rir_core::{Point3, RoomDims, SampleParameters};
use serde::{Deserialize, Serialize};

/// Fully specified acoustic scene: shoebox, one source, one microphone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub room: RoomDims,
    pub source: Point3,
    pub mic: Point3,
    /// Energy absorption coefficient shared by all six surfaces
    pub absorption: f64,
    /// Maximum image-source reflection order
    pub max_order: u32,
}

impl From<&SampleParameters> for Scene {
    fn from(params: &SampleParameters) -> Self {
        Self {
            room: params.room,
            source: params.source,
            mic: params.mic,
            absorption: params.absorption,
            max_order: params.max_order,
        }
    }
}

impl Scene {
    /// Reject scenes no simulator can render
    pub fn validate(&self) -> Result<()> {
        if self.room.as_array().iter().any(|&d| !(d.is_finite() && d > 0.0)) {
            return Err(SimulationError::InvalidScene(format!(
                "room dimensions must be positive, got {:?}",
                self.room.as_array()
            )));
        }
        if !(0.0..=1.0).contains(&self.absorption) {
            return Err(SimulationError::InvalidScene(format!(
                "absorption {} outside [0, 1]",
                self.absorption
            )));
        }
        for (name, p) in [("source", &self.source), ("microphone", &self.mic)] {
            if !self.room.contains_with_margin(p, 0.0) {
                return Err(SimulationError::InvalidScene(format!(
                    "{name} {:?} outside the room",
                    p.as_array()
                )));
            }
        }
        if self.source.distance(&self.mic) <= 0.0 {
            return Err(SimulationError::InvalidScene(
                "source and microphone coincide".into(),
            ));
        }
        Ok(())
    }
}

/// Output of one simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedRir {
    /// Impulse response of the first microphone for the first source
    pub samples: Vec<f64>,
    /// Measured RT60 (seconds)
    pub rt60_measured: f64,
    /// Sample rate (Hz)
    pub sample_rate: u32,
}

/// Anything that can turn a scene into an impulse response.
///
/// Implementations must be deterministic: the same scene and configuration
/// always give the same samples and RT60.
pub trait Simulator {
    /// Version string, embedded in default output folder names
    fn version(&self) -> &str;

    /// Sample rate of produced responses (Hz)
    fn sample_rate(&self) -> u32;

    /// Render the impulse response and measure its RT60
    fn simulate(&self, scene: &Scene) -> Result<SimulatedRir>;
}

impl<S: Simulator + ?Sized> Simulator for &S {
    fn version(&self) -> &str {
        (**self).version()
    }

    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn simulate(&self, scene: &Scene) -> Result<SimulatedRir> {
        (**self).simulate(scene)
    }
}
