//! # rir-core
//!
//! Parameter sampling for randomized room impulse response datasets.
//!
//! ## Features
//!
//! - **Geometry**: shoebox room dimensions and points inside them
//! - **Rejection Sampling**: seeded, bounded resample-until-valid for rooms,
//!   source/microphone pairs and RT60 targets
//! - **Sabine Inversion**: target RT60 to absorption + image-source order
//! - **File Naming**: the `<index>_<tgt>_<meas>.wav` contract shared by the
//!   generator and the comparator
//!
//! ## Example
//!
//! ```rust,ignore
//! use rir_core::{ParameterSampler, SamplerConfig};
//!
//! let config = SamplerConfig::default().with_seed(7);
//! let mut sampler = ParameterSampler::new(config)?;
//! for params in sampler.generate(20)? {
//!     println!("{:?} -> {:?}", params.source, params.mic);
//! }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod naming;
pub mod sabine;
pub mod sampler;

pub use config::SamplerConfig;
pub use error::{Result, SamplingError};
pub use geometry::{Point3, RoomDims};
pub use naming::{
    index_width, seconds_to_ms, version_dir_name, RirFileName, RIR_EXTENSION, VERSION_DIR_PREFIX,
};
pub use sabine::{inverse_sabine, sabine_rt60, SPEED_OF_SOUND};
pub use sampler::{ParameterSampler, SampleParameters};
