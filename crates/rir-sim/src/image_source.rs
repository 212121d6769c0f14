//! Image-source method for shoebox rooms
//!
//! Every wall reflection is modelled as a mirrored copy of the source. Along
//! one axis the image with index `n` sits at `n * L + s` (even `n`) or
//! `n * L + (L - s)` (odd `n`) and has met `|n|` walls. Images are kept while
//! `|nx| + |ny| + |nz| <= max_order`.

use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::filters::{fractional_delay_into, hann_window, high_pass_in_place};
use crate::rt60::measure_rt60;
use crate::simulator::{Scene, SimulatedRir, Simulator};
use std::f64::consts::PI;

/// Image-source shoebox simulator
#[derive(Debug, Clone)]
pub struct ImageSourceSimulator {
    config: SimulationConfig,
    window: Vec<f64>,
}

/// One image source as seen from the microphone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSource {
    /// Distance to the microphone (meters)
    pub distance: f64,
    /// Number of wall reflections
    pub order: u32,
    /// Pressure amplitude including spreading loss
    pub amplitude: f64,
}

impl ImageSourceSimulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let window = hann_window(config.fractional_delay_length);
        Ok(Self { config, window })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// All image sources up to the scene's reflection order
    pub fn image_sources(&self, scene: &Scene) -> Vec<ImageSource> {
        let order = scene.max_order as i64;
        let beta = (1.0 - scene.absorption).sqrt();
        let beta_pow: Vec<f64> = (0..=scene.max_order).map(|k| beta.powi(k as i32)).collect();

        // Per axis: (|n|, image coordinate - mic coordinate) for n in -order..=order
        let axis_offsets = |len: f64, src: f64, mic: f64| -> Vec<(i64, f64)> {
            (-order..=order)
                .map(|n| {
                    let base = n as f64 * len;
                    let coord = if n.rem_euclid(2) == 0 {
                        base + src
                    } else {
                        base + len - src
                    };
                    (n.abs(), coord - mic)
                })
                .collect()
        };

        let xs = axis_offsets(scene.room.width, scene.source.x, scene.mic.x);
        let ys = axis_offsets(scene.room.depth, scene.source.y, scene.mic.y);
        let zs = axis_offsets(scene.room.height, scene.source.z, scene.mic.z);

        let mut images = Vec::new();
        for &(nx, dx) in &xs {
            for &(ny, dy) in &ys {
                if nx + ny > order {
                    continue;
                }
                for &(nz, dz) in &zs {
                    let n = nx + ny + nz;
                    if n > order {
                        continue;
                    }
                    let distance = (dx * dx + dy * dy + dz * dz).sqrt();
                    images.push(ImageSource {
                        distance,
                        order: n as u32,
                        amplitude: beta_pow[n as usize] / (4.0 * PI * distance),
                    });
                }
            }
        }
        images
    }

    /// Render the impulse response without measuring it
    pub fn render(&self, scene: &Scene) -> Result<Vec<f64>> {
        scene.validate()?;

        let fs = self.config.sample_rate as f64;
        let c = self.config.speed_of_sound;
        let taps = self.window.len();

        let images = self.image_sources(scene);
        let max_delay = images
            .iter()
            .map(|im| im.distance / c * fs)
            .fold(0.0, f64::max);

        let len = max_delay.floor() as usize + taps + 1;
        let mut rir = vec![0.0; len];
        let mut kernel = vec![0.0; taps];

        for image in &images {
            let delay = image.distance / c * fs;
            let whole = delay.floor();
            fractional_delay_into(delay - whole, &self.window, &mut kernel);

            let start = whole as usize;
            for (out, &k) in rir[start..start + taps].iter_mut().zip(&kernel) {
                *out += image.amplitude * k;
            }
        }

        if !self.config.keep_dc {
            high_pass_in_place(&mut rir, self.config.high_pass_cutoff_hz, fs);
        }

        log::debug!(
            "rendered {} image sources into {} samples (order {})",
            images.len(),
            len,
            scene.max_order
        );

        Ok(rir)
    }
}

impl Simulator for ImageSourceSimulator {
    fn version(&self) -> &str {
        crate::VERSION
    }

    fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    fn simulate(&self, scene: &Scene) -> Result<SimulatedRir> {
        let samples = self.render(scene)?;
        let rt60_measured = measure_rt60(
            &samples,
            self.config.sample_rate,
            self.config.rt60_decay_db,
        )
        .ok_or_else(|| {
            SimulationError::Rt60Unmeasurable(format!(
                "no usable energy decay in {} samples",
                samples.len()
            ))
        })?;

        Ok(SimulatedRir {
            samples,
            rt60_measured,
            sample_rate: self.config.sample_rate,
        })
    }
}
