//! RIR file loading

use crate::{CompareError, Result};
use std::path::Path;

/// A loaded mono RIR
#[derive(Debug, Clone, PartialEq)]
pub struct RirAudio {
    /// Samples, full scale at 1.0
    pub samples: Vec<f64>,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Source file path
    pub source_path: String,
}

impl RirAudio {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Load a mono WAV file, float or integer PCM
pub fn load_rir<P: AsRef<Path>>(path: P) -> Result<RirAudio> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let reader = hound::WavReader::open(path)
        .map_err(|e| CompareError::LoadError(format!("{}: {}", path_str, e)))?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(CompareError::ChannelMismatch {
            path: path_str,
            channels: spec.channels as usize,
        });
    }

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CompareError::LoadError(format!("{}: {}", path_str, e)))?,
        hound::SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max_val = (1i64 << (bits - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CompareError::LoadError(format!("{}: {}", path_str, e)))?
        }
    };

    log::trace!(
        "loaded {} ({} samples @ {}Hz)",
        path_str,
        samples.len(),
        spec.sample_rate
    );

    Ok(RirAudio {
        samples,
        sample_rate: spec.sample_rate,
        source_path: path_str,
    })
}
