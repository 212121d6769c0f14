//! RIR file naming contract
//!
//! Generated files are named `<index>_<rt60_target_ms>_<rt60_measured_ms>.wav`
//! with a zero-padded index. The comparator reads metadata straight back from
//! the name, so parsing is strict: exactly three unsigned integer fields.

use crate::error::{Result, SamplingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Extension of every RIR file
pub const RIR_EXTENSION: &str = "wav";

/// Prefix of per-version output folders (`rirs-<version>`)
pub const VERSION_DIR_PREFIX: &str = "rirs-";

/// Folder name for RIRs produced by simulator `version`
pub fn version_dir_name(version: &str) -> String {
    format!("{VERSION_DIR_PREFIX}{version}")
}

/// Metadata encoded in an RIR file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RirFileName {
    /// Sample index within its run
    pub index: usize,
    /// Target RT60, rounded milliseconds
    pub rt60_target_ms: u32,
    /// Measured RT60, rounded milliseconds
    pub rt60_measured_ms: u32,
}

/// Zero-padding width for indices `0..num`
pub fn index_width(num: usize) -> usize {
    let mut last = num.saturating_sub(1);
    let mut width = 1;
    while last >= 10 {
        last /= 10;
        width += 1;
    }
    width
}

/// Seconds to integer milliseconds, rounding half to even
pub fn seconds_to_ms(seconds: f64) -> u32 {
    (seconds * 1000.0).round_ties_even().max(0.0) as u32
}

impl RirFileName {
    pub fn new(index: usize, rt60_target_ms: u32, rt60_measured_ms: u32) -> Self {
        Self {
            index,
            rt60_target_ms,
            rt60_measured_ms,
        }
    }

    /// Stem with the index padded to `width` digits
    pub fn stem(&self, width: usize) -> String {
        format!(
            "{:0width$}_{}_{}",
            self.index,
            self.rt60_target_ms,
            self.rt60_measured_ms,
            width = width
        )
    }

    /// Full file name with the index padded to `width` digits
    pub fn file_name(&self, width: usize) -> String {
        format!("{}.{}", self.stem(width), RIR_EXTENSION)
    }

    /// Parse the file name of `path`
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let has_wav_ext = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(RIR_EXTENSION))
            .unwrap_or(false);
        if !has_wav_ext {
            return Err(malformed(&name, "expected a .wav extension"));
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| malformed(&name, "file stem is not valid UTF-8"))?;

        stem.parse().map_err(|e| match e {
            SamplingError::MalformedFileName { reason, .. } => malformed(&name, &reason),
            other => other,
        })
    }
}

impl FromStr for RirFileName {
    type Err = SamplingError;

    /// Parse a stem such as `007_350_342`
    fn from_str(stem: &str) -> Result<Self> {
        let fields: Vec<&str> = stem.split('_').collect();
        if fields.len() != 3 {
            return Err(malformed(
                stem,
                &format!("expected 3 underscore-separated fields, found {}", fields.len()),
            ));
        }

        let index = parse_field::<usize>(stem, fields[0], "index")?;
        let rt60_target_ms = parse_field::<u32>(stem, fields[1], "target RT60")?;
        let rt60_measured_ms = parse_field::<u32>(stem, fields[2], "measured RT60")?;

        Ok(Self::new(index, rt60_target_ms, rt60_measured_ms))
    }
}

impl fmt::Display for RirFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stem(1))
    }
}

fn parse_field<T: FromStr>(stem: &str, field: &str, what: &str) -> Result<T> {
    // Reject signs and whitespace that `FromStr` would accept
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(stem, &format!("{what} field '{field}' is not an integer")));
    }
    field
        .parse::<T>()
        .map_err(|_| malformed(stem, &format!("{what} field '{field}' out of range")))
}

fn malformed(name: &str, reason: &str) -> SamplingError {
    SamplingError::MalformedFileName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
