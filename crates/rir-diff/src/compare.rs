//! Cross-version comparison driver

use crate::config::CompareConfig;
use crate::discovery::{discover, SampleIndex};
use crate::loader::load_rir;
use crate::matrix::{pad_to_common_length, pairwise_mse, ErrorAccumulator};
use crate::report::ComparisonReport;
use crate::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Comparison of one sample index across the versions that have it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleComparison {
    pub index: usize,

    /// Versions present for this sample, sorted
    pub versions: Vec<String>,

    /// MSE between `versions`, same order
    pub mse: Vec<Vec<f64>>,

    /// Measured RT60 from each file name (ms)
    pub rt60_measured_ms: BTreeMap<String, u32>,
}

/// Compares RIR folders produced by different simulator versions
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Discover and compare every version folder under `root`
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<ComparisonReport> {
        let root = root.as_ref();
        self.config.validate()?;

        let index = discover(root, &self.config.version_prefix)?;
        if index.versions.is_empty() {
            return Err(CompareError::NoVersions {
                root: root.display().to_string(),
                prefix: self.config.version_prefix.clone(),
            });
        }

        log::info!(
            "Found {} versions and {} samples under {}",
            index.versions.len(),
            index.samples.len(),
            root.display()
        );

        self.compare_index(root, index)
    }

    /// Compare an already discovered set of files
    pub fn compare_index(&self, root: &Path, index: SampleIndex) -> Result<ComparisonReport> {
        let missing = index.missing();
        for entry in &missing {
            log::warn!(
                "Sample {} missing for versions: {}",
                entry.index,
                entry.versions.join(", ")
            );
        }

        let labels: Vec<String> = index.versions.iter().cloned().collect();
        let mut accumulator = ErrorAccumulator::new(labels.clone());
        let mut sample_rate = self.config.sample_rate;
        let mut samples = Vec::with_capacity(index.samples.len());

        for (&sample, per_version) in &index.samples {
            let mut versions = Vec::with_capacity(per_version.len());
            let mut signals = Vec::with_capacity(per_version.len());
            let mut rt60_measured_ms = BTreeMap::new();

            for (version, entry) in per_version {
                let audio = load_rir(&entry.path)?;
                let expected = *sample_rate.get_or_insert(audio.sample_rate);
                if audio.sample_rate != expected {
                    return Err(CompareError::SampleRateMismatch {
                        path: audio.source_path,
                        expected,
                        found: audio.sample_rate,
                    });
                }

                versions.push(version.clone());
                signals.push(audio.samples);
                rt60_measured_ms.insert(version.clone(), entry.name.rt60_measured_ms);
            }

            let padded = pad_to_common_length(&signals);
            let refs: Vec<&[f64]> = padded.iter().map(Vec::as_slice).collect();
            let mse = pairwise_mse(&refs);
            accumulator.add(&versions, &mse)?;

            log::debug!("Sample {}: {} versions compared", sample, versions.len());
            samples.push(SampleComparison {
                index: sample,
                versions,
                mse,
                rt60_measured_ms,
            });
        }

        Ok(ComparisonReport {
            root: root.to_path_buf(),
            versions: labels,
            matrix: accumulator.finish(),
            sample_count: index.samples.len(),
            complete_count: index.complete_count(),
            missing,
            samples,
        })
    }
}
