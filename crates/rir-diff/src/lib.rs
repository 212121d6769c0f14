//! # rir-diff
//!
//! Cross-version comparison of generated room impulse responses.
//!
//! ## Features
//!
//! - **Discovery**: recursive scan for `rirs-<version>` folders and the
//!   `<index>_<tgt>_<meas>.wav` files inside them
//! - **Completeness**: every sample missing one or more versions is reported
//! - **Pairwise MSE**: zero-padded to a common length, every version against
//!   every other, averaged over samples
//! - **Report Generation**: text table, JSON and Markdown
//!
//! ## Example
//!
//! ```rust,ignore
//! use rir_diff::{CompareConfig, Comparator, ReportFormat};
//!
//! let report = Comparator::new(CompareConfig::default()).run("./")?;
//! println!("{}", report.generate(ReportFormat::Text));
//! ```

pub mod compare;
pub mod config;
pub mod discovery;
pub mod loader;
pub mod matrix;
pub mod report;

pub use compare::{Comparator, SampleComparison};
pub use config::CompareConfig;
pub use discovery::{discover, MissingVersions, RirEntry, SampleIndex};
pub use loader::{load_rir, RirAudio};
pub use matrix::{pad_to_common_length, pairwise_mse, ErrorAccumulator, ErrorMatrix};
pub use report::{ComparisonReport, ReportFormat};

use thiserror::Error;

/// Errors that can occur while comparing RIR folders
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to load audio file: {0}")]
    LoadError(String),

    #[error("Sample rate mismatch in {path}: expected {expected}Hz, found {found}Hz")]
    SampleRateMismatch {
        path: String,
        expected: u32,
        found: u32,
    },

    #[error("Channel count mismatch in {path}: expected mono, found {channels} channels")]
    ChannelMismatch { path: String, channels: usize },

    #[error("Sample {index} appears twice for version {version}: {first} and {second}")]
    DuplicateSample {
        index: usize,
        version: String,
        first: String,
        second: String,
    },

    #[error("No folders matching '{prefix}*' found under {root}")]
    NoVersions { root: String, prefix: String },

    #[error("Unknown version '{0}' in error matrix")]
    UnknownVersion(String),

    #[error(transparent)]
    Naming(#[from] rir_core::SamplingError),

    #[error("Directory scan failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;

/// Compare every version folder under `root` with default settings
pub fn quick_compare<P: AsRef<std::path::Path>>(root: P) -> Result<ComparisonReport> {
    Comparator::new(CompareConfig::default()).run(root)
}
