//! Fractional delay and high-pass filters used when rendering RIRs

use std::f64::consts::PI;

/// Hann window of `length` taps (zero at both ends)
pub fn hann_window(length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.0; length];
    }
    let denom = (length - 1) as f64;
    (0..length)
        .map(|k| 0.5 - 0.5 * (2.0 * PI * k as f64 / denom).cos())
        .collect()
}

/// Hann-windowed sinc delaying by `half + frac` samples, `frac` in `[0, 1)`.
///
/// `window` must hold `2 * half + 1` taps; the result is written to `out`.
pub fn fractional_delay_into(frac: f64, window: &[f64], out: &mut [f64]) {
    let half = (window.len() / 2) as i64;
    // sin(pi (m - frac)) = -(-1)^m sin(pi frac) for integer m
    let sin_frac = (PI * frac).sin();

    for (k, (tap, &w)) in out.iter_mut().zip(window).enumerate() {
        let m = k as i64 - half;
        let x = m as f64 - frac;
        let sinc = if x.abs() < 1e-12 {
            1.0
        } else {
            let sign = if m.rem_euclid(2) == 0 { -1.0 } else { 1.0 };
            sign * sin_frac / (PI * x)
        };
        *tap = w * sinc;
    }
}

/// Allen-Berkley high-pass, applied in place
pub fn high_pass_in_place(samples: &mut [f64], cutoff_hz: f64, sample_rate: f64) {
    let w = 2.0 * PI * cutoff_hz / sample_rate;
    let r1 = (-w).exp();
    let b1 = 2.0 * r1 * w.cos();
    let b2 = -r1 * r1;
    let a1 = -(1.0 + r1);

    let mut y = [0.0f64; 3];
    for s in samples.iter_mut() {
        y[2] = y[1];
        y[1] = y[0];
        y[0] = b1 * y[1] + b2 * y[2] + *s;
        *s = y[0] + a1 * y[1] + r1 * y[2];
    }
}
