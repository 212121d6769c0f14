//! RT60 measurement from an impulse response
//!
//! Schroeder backward integration: the energy remaining after each sample, in
//! dB relative to the total. The decay between -5 dB and `-5 - decay_db` is
//! timed and scaled to 60 dB. When the response does not have enough dynamic
//! range the decay window shrinks to what is available.

/// Schroeder energy decay curve in dB, 0 dB at the first sample
pub fn schroeder_decay_db(samples: &[f64]) -> Vec<f64> {
    let mut energy: Vec<f64> = Vec::with_capacity(samples.len());
    let mut acc = 0.0;
    for &s in samples.iter().rev() {
        acc += s * s;
        energy.push(acc);
    }
    energy.reverse();

    let total = energy.first().copied().unwrap_or(0.0);
    if total <= 0.0 {
        return vec![f64::NEG_INFINITY; samples.len()];
    }
    energy
        .into_iter()
        .map(|e| 10.0 * (e / total).log10())
        .collect()
}

/// Estimate RT60 in seconds.
///
/// Returns `None` for silent or too short responses.
pub fn measure_rt60(samples: &[f64], sample_rate: u32, decay_db: f64) -> Option<f64> {
    if samples.is_empty() || sample_rate == 0 {
        return None;
    }

    let decay = schroeder_decay_db(samples);
    if !decay[0].is_finite() {
        return None;
    }

    let dynamic_range = -decay.iter().copied().fold(f64::INFINITY, f64::min);
    let decay_db = if dynamic_range - 5.0 < decay_db {
        dynamic_range - 5.0
    } else {
        decay_db
    };
    if decay_db.is_nan() || decay_db <= 0.0 {
        log::debug!("RT60: only {dynamic_range:.1} dB of decay available");
        return None;
    }

    let i_5db = decay.iter().position(|&e| e < -5.0)?;
    let i_decay = decay
        .iter()
        .position(|&e| e < -5.0 - decay_db)
        .unwrap_or(decay.len());

    let fs = sample_rate as f64;
    let decay_time = i_decay.saturating_sub(i_5db) as f64 / fs;
    Some(60.0 / decay_db * decay_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Exponential decay with a known RT60
    fn synthetic_rir(rt60: f64, fs: u32, seconds: f64) -> Vec<f64> {
        let n = (seconds * fs as f64) as usize;
        // Amplitude decays 60 dB (factor 1000) over rt60 seconds
        let k = (1000.0f64).ln() / rt60;
        (0..n)
            .map(|i| {
                let t = i as f64 / fs as f64;
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                sign * (-k * t).exp()
            })
            .collect()
    }

    #[test]
    fn test_decay_curve_starts_at_zero_db() {
        let decay = schroeder_decay_db(&[1.0, 0.5, 0.25]);
        assert_relative_eq!(decay[0], 0.0, epsilon = 1e-12);
        assert!(decay[1] < 0.0 && decay[2] < decay[1]);
    }

    #[test]
    fn test_known_exponential_decay() {
        let rir = synthetic_rir(0.4, 16000, 2.0);
        let rt60 = measure_rt60(&rir, 16000, 60.0).unwrap();
        assert_relative_eq!(rt60, 0.4, epsilon = 0.01);
    }

    #[test]
    fn test_short_response_uses_available_range() {
        // Truncated at 0.2s leaves ~30 dB of decay for a 0.4s RT60
        let rir = synthetic_rir(0.4, 16000, 0.2);
        let rt60 = measure_rt60(&rir, 16000, 60.0).unwrap();
        assert!(rt60 > 0.0);
    }

    #[test]
    fn test_silence_is_unmeasurable() {
        assert!(measure_rt60(&[0.0; 100], 16000, 60.0).is_none());
        assert!(measure_rt60(&[], 16000, 60.0).is_none());
    }

    #[test]
    fn test_single_sample_is_unmeasurable() {
        assert!(measure_rt60(&[1.0], 16000, 60.0).is_none());
    }
}
