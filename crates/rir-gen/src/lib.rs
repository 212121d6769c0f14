//! # rir-gen
//!
//! Batch generation of randomized room impulse responses.
//!
//! ```text
//! SamplerConfig ──► ParameterSampler ──► [SampleParameters; N]
//!                                              │
//!                          Simulator::simulate ▼
//!                               <out>/<idx>_<tgt>_<meas>.wav
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rir_gen::{BatchGenerator, GeneratorConfig};
//! use rir_sim::ImageSourceSimulator;
//!
//! let config = GeneratorConfig::default();
//! let sim = ImageSourceSimulator::new(config.simulation.clone())?;
//! let summary = BatchGenerator::new(config, sim).run("rirs-0.1.0", 20)?;
//! ```

mod batch;
mod config;
mod error;
mod writer;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use writer::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
