//! Seeded rejection sampler for room, source/microphone and RT60 targets

use crate::config::SamplerConfig;
use crate::error::{Result, SamplingError};
use crate::geometry::{Point3, RoomDims};
use crate::sabine::inverse_sabine;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One fully specified simulation input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleParameters {
    /// Room dimensions (meters)
    pub room: RoomDims,
    /// Source position
    pub source: Point3,
    /// Microphone position
    pub mic: Point3,
    /// Target RT60 (seconds)
    pub rt60_target: f64,
    /// Energy absorption coefficient from the Sabine inversion
    pub absorption: f64,
    /// Image-source reflection order from the Sabine inversion
    pub max_order: u32,
}

/// Rejection sampler over a deterministic ChaCha stream
pub struct ParameterSampler {
    config: SamplerConfig,
    rng: ChaCha8Rng,
}

impl ParameterSampler {
    /// Validate `config` and seed the RNG from `config.seed`
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draw room dimensions until all three exceed twice the wall distance
    pub fn sample_room_dims(&mut self) -> Result<RoomDims> {
        let (lo, hi) = self.config.room_dim_range;
        let min_dim = 2.0 * self.config.min_wall_dist;

        for _ in 0..self.config.max_attempts {
            let dims = [
                self.rng.random_range(lo..=hi),
                self.rng.random_range(lo..=hi),
                self.rng.random_range(lo..=hi),
            ];
            if dims.iter().all(|&d| d > min_dim) {
                return Ok(RoomDims::from_array(dims));
            }
        }

        Err(SamplingError::Infeasible {
            what: "room dimensions above twice the wall distance",
            attempts: self.config.max_attempts,
        })
    }

    /// Uniform point at least the wall distance from every face.
    ///
    /// Fails when a room axis is shorter than twice the wall distance.
    pub fn sample_point(&mut self, room: &RoomDims) -> Result<Point3> {
        let margin = self.config.min_wall_dist;
        let dims = room.as_array();
        if let Some(&dim) = dims.iter().find(|&&d| d.is_nan() || d < 2.0 * margin) {
            return Err(SamplingError::InvalidConfig(format!(
                "room axis of {dim} m leaves no space {margin} m from both walls"
            )));
        }
        let coords = dims.map(|dim| self.rng.random_range(margin..=dim - margin));
        Ok(Point3::from_array(coords))
    }

    /// Source and microphone strictly farther apart than the minimum distance
    pub fn sample_source_mic(&mut self, room: &RoomDims) -> Result<(Point3, Point3)> {
        for _ in 0..self.config.max_attempts {
            let source = self.sample_point(room)?;
            let mic = self.sample_point(room)?;
            if source.distance(&mic) > self.config.min_src_mic_dist {
                return Ok((source, mic));
            }
        }

        Err(SamplingError::Infeasible {
            what: "source/microphone separation",
            attempts: self.config.max_attempts,
        })
    }

    /// Uniform RT60 target in seconds
    pub fn sample_rt60(&mut self) -> f64 {
        let (lo, hi) = self.config.rt60_range;
        self.rng.random_range(lo..=hi)
    }

    /// Draw a complete parameter set.
    ///
    /// When the Sabine inversion has no solution the whole tuple (room,
    /// points, target) is discarded and drawn again.
    pub fn next_parameters(&mut self) -> Result<SampleParameters> {
        for attempt in 0..self.config.max_attempts {
            let room = self.sample_room_dims()?;
            let (source, mic) = self.sample_source_mic(&room)?;
            let rt60_target = self.sample_rt60();

            match inverse_sabine(rt60_target, &room, self.config.speed_of_sound) {
                Ok((absorption, max_order)) => {
                    log::debug!(
                        "sampled room {:?} rt60={:.3}s absorption={:.4} order={} after {} rejections",
                        room.as_array(),
                        rt60_target,
                        absorption,
                        max_order,
                        attempt
                    );
                    return Ok(SampleParameters {
                        room,
                        source,
                        mic,
                        rt60_target,
                        absorption,
                        max_order,
                    });
                }
                Err(SamplingError::InversionFailed { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(SamplingError::Infeasible {
            what: "invertible RT60 target",
            attempts: self.config.max_attempts,
        })
    }

    /// Draw `num` parameter sets in order
    pub fn generate(&mut self, num: usize) -> Result<Vec<SampleParameters>> {
        (0..num).map(|_| self.next_parameters()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler() -> ParameterSampler {
        ParameterSampler::new(SamplerConfig::default()).unwrap()
    }

    #[test]
    fn test_rooms_exceed_twice_margin() {
        let mut sampler = sampler();
        for _ in 0..500 {
            let room = sampler.sample_room_dims().unwrap();
            assert!(room.as_array().iter().all(|&d| d > 2.0));
            assert!(room.as_array().iter().all(|&d| (2.5..=10.0).contains(&d)));
        }
    }

    #[test]
    fn test_points_respect_margin() {
        let mut sampler = sampler();
        let room = RoomDims::new(3.0, 5.0, 2.5);
        for _ in 0..500 {
            let p = sampler.sample_point(&room).unwrap();
            assert!(room.contains_with_margin(&p, 1.0), "{p:?}");
        }
    }

    #[test]
    fn test_point_in_too_narrow_room_is_an_error() {
        let mut sampler = sampler();
        let room = RoomDims::new(5.0, 1.5, 3.0);
        assert!(matches!(
            sampler.sample_point(&room),
            Err(SamplingError::InvalidConfig(_))
        ));
        assert!(sampler.sample_source_mic(&room).is_err());
    }

    #[test]
    fn test_source_mic_separation() {
        let mut sampler = sampler();
        for _ in 0..200 {
            let room = sampler.sample_room_dims().unwrap();
            let (s, m) = sampler.sample_source_mic(&room).unwrap();
            assert!(s.distance(&m) > 1.5);
        }
    }

    #[test]
    fn test_rt60_in_range() {
        let mut sampler = sampler();
        for _ in 0..500 {
            let rt60 = sampler.sample_rt60();
            assert!((0.05..=0.7).contains(&rt60));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = sampler().generate(10).unwrap();
        let b = sampler().generate(10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = sampler().generate(3).unwrap();
        let mut other = ParameterSampler::new(SamplerConfig::default().with_seed(1)).unwrap();
        let b = other.generate(3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_parameters_are_invertible() {
        let params = sampler().generate(20).unwrap();
        assert_eq!(params.len(), 20);
        for p in &params {
            assert!(p.absorption > 0.0 && p.absorption <= 1.0);
            assert!(p.source.distance(&p.mic) > 1.5);
            assert!(p.room.contains_with_margin(&p.source, 1.0));
            assert!(p.room.contains_with_margin(&p.mic, 1.0));
        }
    }

    #[test]
    fn test_unreachable_target_reports_infeasible() {
        // Big rooms with tiny RT60 never invert
        let config = SamplerConfig::default()
            .with_room_dim_range(9.0, 10.0)
            .with_min_wall_dist(0.4)
            .with_min_src_mic_dist(0.5)
            .with_rt60_range(0.01, 0.02)
            .with_max_attempts(50);
        let mut sampler = ParameterSampler::new(config).unwrap();
        let err = sampler.next_parameters().unwrap_err();
        assert!(matches!(err, SamplingError::Infeasible { attempts: 50, .. }));
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = SamplerConfig::default().with_room_dim_range(5.0, 3.0);
        assert!(ParameterSampler::new(config).is_err());
    }
}
