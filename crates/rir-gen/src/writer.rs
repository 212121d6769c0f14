//! WAV output for generated RIRs

use crate::error::{GenerateError, GenerateResult};
use std::path::Path;

/// Write a mono 32-bit float WAV file
pub fn write_rir<P: AsRef<Path>>(
    path: P,
    samples: &[f64],
    sample_rate: u32,
) -> GenerateResult<()> {
    let path = path.as_ref();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let to_err = |e: hound::Error| GenerateError::WriteError(format!("{}: {}", path.display(), e));

    let mut writer = hound::WavWriter::create(path, spec).map_err(to_err)?;
    for &sample in samples {
        writer.write_sample(sample as f32).map_err(to_err)?;
    }
    writer.finalize().map_err(to_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_mono_float() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0_100_98.wav");
        write_rir(&path, &[0.0, 0.5, -0.25, 1.0], 16000).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);

        let samples: Vec<f32> = reader.into_samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0.0, 0.5, -0.25, 1.0]);
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("0_1_1.wav");
        assert!(matches!(
            write_rir(&path, &[0.0], 16000),
            Err(GenerateError::WriteError(_))
        ));
    }
}
