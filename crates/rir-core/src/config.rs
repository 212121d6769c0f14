//! Sampler configuration

use crate::error::{Result, SamplingError};
use crate::sabine::SPEED_OF_SOUND;
use serde::{Deserialize, Serialize};

/// Configuration for randomized room parameter sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seed for the deterministic RNG
    pub seed: u64,

    /// Range for each room dimension (meters)
    pub room_dim_range: (f64, f64),

    /// Minimum distance of source and microphone to any wall (meters)
    pub min_wall_dist: f64,

    /// Source and microphone must be strictly farther apart than this (meters)
    pub min_src_mic_dist: f64,

    /// Range of target RT60 values (seconds)
    pub rt60_range: (f64, f64),

    /// Speed of sound used by the Sabine inversion (m/s)
    pub speed_of_sound: f64,

    /// Upper bound on draws for every rejection loop
    pub max_attempts: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: 20241029,
            room_dim_range: (2.5, 10.0),
            min_wall_dist: 1.0,
            min_src_mic_dist: 1.5,
            rt60_range: (0.05, 0.7),
            speed_of_sound: SPEED_OF_SOUND,
            max_attempts: 10_000,
        }
    }
}

impl SamplerConfig {
    /// Small rooms with short reverberation, quick to simulate
    pub fn small_rooms() -> Self {
        Self {
            room_dim_range: (2.5, 5.0),
            min_wall_dist: 0.5,
            min_src_mic_dist: 1.0,
            rt60_range: (0.05, 0.3),
            ..Default::default()
        }
    }

    /// Builder pattern: set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder pattern: set room dimension range
    pub fn with_room_dim_range(mut self, min: f64, max: f64) -> Self {
        self.room_dim_range = (min, max);
        self
    }

    /// Builder pattern: set minimum wall distance
    pub fn with_min_wall_dist(mut self, dist: f64) -> Self {
        self.min_wall_dist = dist;
        self
    }

    /// Builder pattern: set minimum source/microphone distance
    pub fn with_min_src_mic_dist(mut self, dist: f64) -> Self {
        self.min_src_mic_dist = dist;
        self
    }

    /// Builder pattern: set RT60 range
    pub fn with_rt60_range(mut self, min: f64, max: f64) -> Self {
        self.rt60_range = (min, max);
        self
    }

    /// Builder pattern: set retry bound
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check ranges before any sampling happens
    pub fn validate(&self) -> Result<()> {
        let (dim_min, dim_max) = self.room_dim_range;
        if dim_min > dim_max || dim_min <= 0.0 || dim_max <= 0.0 {
            return Err(SamplingError::InvalidConfig(
                "the room dimension range should contain increasing positive values".into(),
            ));
        }

        let (rt_min, rt_max) = self.rt60_range;
        if rt_min > rt_max || rt_min <= 0.0 || rt_max <= 0.0 {
            return Err(SamplingError::InvalidConfig(
                "the RT60 range should contain increasing positive values".into(),
            ));
        }

        if self.min_wall_dist < 0.0 || self.min_src_mic_dist < 0.0 {
            return Err(SamplingError::InvalidConfig(
                "distances must be non-negative".into(),
            ));
        }

        if 2.0 * self.min_wall_dist > dim_max - dim_min {
            return Err(SamplingError::InvalidConfig(
                "the room dimension range should be at least twice the minimum wall distance"
                    .into(),
            ));
        }

        if 2.0 * self.min_wall_dist >= dim_max {
            return Err(SamplingError::InvalidConfig(format!(
                "no room dimension up to {dim_max} m exceeds twice the wall distance {} m",
                self.min_wall_dist
            )));
        }

        // Longest source/mic separation any room in range can offer
        let max_separation = 3f64.sqrt() * (dim_max - 2.0 * self.min_wall_dist);
        if self.min_src_mic_dist >= max_separation {
            return Err(SamplingError::InvalidConfig(format!(
                "minimum source/microphone distance {} m cannot be realised (max {max_separation:.3} m)",
                self.min_src_mic_dist
            )));
        }

        if self.speed_of_sound <= 0.0 {
            return Err(SamplingError::InvalidConfig(
                "speed of sound must be positive".into(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(SamplingError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
