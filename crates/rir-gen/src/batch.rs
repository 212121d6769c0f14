//! Batch orchestration: sample, simulate, write

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::writer::write_rir;
use rir_core::{
    index_width, seconds_to_ms, version_dir_name, ParameterSampler, RirFileName, SampleParameters,
};
use rir_sim::{Scene, Simulator};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Default number of RIRs per run
pub const DEFAULT_NUM_RIRS: usize = 20;

/// One written RIR
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRir {
    /// Metadata encoded in the file name
    pub name: RirFileName,
    /// Written file
    pub path: PathBuf,
    /// Parameters the RIR was simulated from
    pub parameters: SampleParameters,
    /// Measured RT60 before rounding (seconds)
    pub rt60_measured: f64,
}

/// Result of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Output folder
    pub output_dir: PathBuf,
    /// Written RIRs in index order
    pub rirs: Vec<GeneratedRir>,
}

impl BatchSummary {
    /// Mean absolute difference between target and measured RT60 (ms)
    pub fn mean_rt60_error_ms(&self) -> f64 {
        if self.rirs.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .rirs
            .iter()
            .map(|r| (r.name.rt60_target_ms as f64 - r.name.rt60_measured_ms as f64).abs())
            .sum();
        total / self.rirs.len() as f64
    }
}

/// Default output folder for a simulator: `./rirs-<version>`
pub fn default_output_dir<S: Simulator>(simulator: &S) -> PathBuf {
    Path::new(".").join(version_dir_name(simulator.version()))
}

/// Runs the sampler and simulator for a whole batch
pub struct BatchGenerator<S: Simulator> {
    config: GeneratorConfig,
    simulator: S,
}

impl<S: Simulator> BatchGenerator<S> {
    pub fn new(config: GeneratorConfig, simulator: S) -> Self {
        Self { config, simulator }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Generate `num` RIRs into `out_dir`, which must not exist yet.
    ///
    /// Configuration is checked before anything touches the file system.
    pub fn run<P: AsRef<Path>>(&self, out_dir: P, num: usize) -> GenerateResult<BatchSummary> {
        let out_dir = out_dir.as_ref();

        if num == 0 {
            return Err(GenerateError::InvalidConfig(
                "number of RIRs must be at least 1".into(),
            ));
        }
        self.config.validate()?;

        if out_dir.exists() {
            return Err(GenerateError::OutputExists(out_dir.display().to_string()));
        }

        let mut sampler = ParameterSampler::new(self.config.sampler.clone())?;
        let parameters = sampler.generate(num)?;

        std::fs::create_dir_all(out_dir)?;
        log::info!(
            "Generating {} RIRs with simulator {} into {}",
            num,
            self.simulator.version(),
            out_dir.display()
        );

        let width = index_width(num);
        let sample_rate = self.simulator.sample_rate();
        let mut rirs = Vec::with_capacity(num);

        for (index, params) in parameters.into_iter().enumerate() {
            let started = Instant::now();
            let simulated = self
                .simulator
                .simulate(&Scene::from(&params))
                .map_err(|source| GenerateError::Simulation { index, source })?;
            if simulated.sample_rate != sample_rate {
                return Err(GenerateError::SampleRateMismatch {
                    index,
                    expected: sample_rate,
                    found: simulated.sample_rate,
                });
            }

            let name = RirFileName::new(
                index,
                seconds_to_ms(params.rt60_target),
                seconds_to_ms(simulated.rt60_measured),
            );
            let path = out_dir.join(name.file_name(width));
            write_rir(&path, &simulated.samples, simulated.sample_rate)?;

            log::info!(
                "[{}/{}] {} ({} samples, {:.0?})",
                index + 1,
                num,
                path.display(),
                simulated.samples.len(),
                started.elapsed()
            );

            rirs.push(GeneratedRir {
                name,
                path,
                parameters: params,
                rt60_measured: simulated.rt60_measured,
            });
        }

        Ok(BatchSummary {
            output_dir: out_dir.to_path_buf(),
            rirs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rir_sim::{SimulatedRir, SimulationError};

    /// Three-sample waveform and a constant 250 ms RT60
    struct StubSimulator;

    impl Simulator for StubSimulator {
        fn version(&self) -> &str {
            "stub"
        }

        fn sample_rate(&self) -> u32 {
            16000
        }

        fn simulate(&self, scene: &Scene) -> rir_sim::Result<SimulatedRir> {
            Ok(SimulatedRir {
                samples: vec![1.0, scene.absorption, 0.0],
                rt60_measured: 0.25,
                sample_rate: 16000,
            })
        }
    }

    struct FailingSimulator;

    impl Simulator for FailingSimulator {
        fn version(&self) -> &str {
            "broken"
        }

        fn sample_rate(&self) -> u32 {
            16000
        }

        fn simulate(&self, _scene: &Scene) -> rir_sim::Result<SimulatedRir> {
            Err(SimulationError::Rt60Unmeasurable("stub".into()))
        }
    }

    /// Reports 16 kHz but renders at 8 kHz
    struct InconsistentSimulator;

    impl Simulator for InconsistentSimulator {
        fn version(&self) -> &str {
            "inconsistent"
        }

        fn sample_rate(&self) -> u32 {
            16000
        }

        fn simulate(&self, _scene: &Scene) -> rir_sim::Result<SimulatedRir> {
            Ok(SimulatedRir {
                samples: vec![1.0, 0.5],
                rt60_measured: 0.25,
                sample_rate: 8000,
            })
        }
    }

    #[test]
    fn test_default_output_dir_uses_version() {
        assert_eq!(
            default_output_dir(&StubSimulator),
            Path::new(".").join("rirs-stub")
        );
    }

    #[test]
    fn test_run_writes_one_file_per_sample() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("rirs-stub");
        let generator = BatchGenerator::new(GeneratorConfig::default(), StubSimulator);

        let summary = generator.run(&out, 12).unwrap();
        assert_eq!(summary.rirs.len(), 12);

        let files = std::fs::read_dir(&out).unwrap().count();
        assert_eq!(files, 12);
        assert!(out.join(summary.rirs[3].name.file_name(2)).exists());
        assert!(summary.rirs[3].path.ends_with(summary.rirs[3].name.file_name(2)));
    }

    #[test]
    fn test_single_sample_has_index_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("one");
        let generator = BatchGenerator::new(GeneratorConfig::default(), StubSimulator);

        let summary = generator.run(&out, 1).unwrap();
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 1);
        let name = summary.rirs[0].path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("0_"), "{name}");
        assert_eq!(summary.rirs[0].name.rt60_measured_ms, 250);
    }

    #[test]
    fn test_existing_output_dir_refused() {
        let tmp = tempfile::tempdir().unwrap();
        let generator = BatchGenerator::new(GeneratorConfig::default(), StubSimulator);
        let err = generator.run(tmp.path(), 3).unwrap_err();
        assert!(matches!(err, GenerateError::OutputExists(_)));
    }

    #[test]
    fn test_invalid_config_creates_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("never");
        let mut config = GeneratorConfig::default();
        config.sampler.room_dim_range = (10.0, 2.5);

        let err = BatchGenerator::new(config, StubSimulator)
            .run(&out, 3)
            .unwrap_err();
        assert!(matches!(err, GenerateError::Sampling(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("zero");
        let generator = BatchGenerator::new(GeneratorConfig::default(), StubSimulator);
        assert!(matches!(
            generator.run(&out, 0),
            Err(GenerateError::InvalidConfig(_))
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_simulator_failure_aborts_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("broken");
        let generator = BatchGenerator::new(GeneratorConfig::default(), FailingSimulator);
        let err = generator.run(&out, 2).unwrap_err();
        assert!(matches!(err, GenerateError::Simulation { index: 0, .. }));
    }

    #[test]
    fn test_rendered_rate_must_match_simulator() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("inconsistent");
        let generator = BatchGenerator::new(GeneratorConfig::default(), InconsistentSimulator);
        let err = generator.run(&out, 2).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::SampleRateMismatch {
                index: 0,
                expected: 16000,
                found: 8000,
            }
        ));
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_targets_follow_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let generator = BatchGenerator::new(GeneratorConfig::default(), StubSimulator);
        let a = generator.run(tmp.path().join("a"), 3).unwrap();
        let b = generator.run(tmp.path().join("b"), 3).unwrap();

        let targets = |s: &BatchSummary| -> Vec<u32> {
            s.rirs.iter().map(|r| r.name.rt60_target_ms).collect()
        };
        assert_eq!(targets(&a), targets(&b));
    }
}
