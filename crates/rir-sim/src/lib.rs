//! # rir-sim
//!
//! Room impulse response simulation behind a capability trait.
//!
//! ## Features
//!
//! - **Simulator trait**: `simulate(scene) -> (waveform, measured RT60)`, so
//!   batch code can run against a stub
//! - **Image-source method**: shoebox rooms with a single absorption
//!   coefficient and bounded reflection order
//! - **RT60 measurement**: Schroeder backward integration
//! - **Low-frequency handling**: optional DC-removing high-pass, configured per
//!   simulation instead of through process-wide state
//!
//! ## Example
//!
//! ```rust,ignore
//! use rir_sim::{ImageSourceSimulator, Scene, SimulationConfig, Simulator};
//!
//! let sim = ImageSourceSimulator::new(SimulationConfig::default())?;
//! let rir = sim.simulate(&Scene::from(&params))?;
//! println!("{} samples, RT60 {:.3}s", rir.samples.len(), rir.rt60_measured);
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod image_source;
pub mod rt60;
pub mod simulator;

pub use config::SimulationConfig;
pub use error::{Result, SimulationError};
pub use image_source::ImageSourceSimulator;
pub use rt60::measure_rt60;
pub use simulator::{Scene, SimulatedRir, Simulator};

/// Library version, used as the simulator version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
