//! Discovery of version folders and the RIR files inside them

use crate::{CompareError, Result};
use rir_core::{RirFileName, RIR_EXTENSION};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One RIR file of one version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RirEntry {
    /// File path
    pub path: PathBuf,
    /// Simulator version the file belongs to
    pub version: String,
    /// Metadata parsed from the file name
    pub name: RirFileName,
}

/// Samples missing from some versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingVersions {
    pub index: usize,
    pub versions: Vec<String>,
}

/// All discovered files, grouped by sample index then version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleIndex {
    /// Every discovered version, including folders without files
    pub versions: BTreeSet<String>,

    /// index -> version -> entry
    pub samples: BTreeMap<usize, BTreeMap<String, RirEntry>>,
}

impl SampleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a version folder
    pub fn add_version(&mut self, version: impl Into<String>) {
        self.versions.insert(version.into());
    }

    /// Add one file; a second file for the same (index, version) is an error
    pub fn insert(&mut self, entry: RirEntry) -> Result<()> {
        self.versions.insert(entry.version.clone());
        let per_version = self.samples.entry(entry.name.index).or_default();

        if let Some(existing) = per_version.get(&entry.version) {
            return Err(CompareError::DuplicateSample {
                index: entry.name.index,
                version: entry.version,
                first: existing.path.display().to_string(),
                second: entry.path.display().to_string(),
            });
        }

        per_version.insert(entry.version.clone(), entry);
        Ok(())
    }

    /// Samples lacking at least one discovered version
    pub fn missing(&self) -> Vec<MissingVersions> {
        self.samples
            .iter()
            .filter_map(|(&index, per_version)| {
                let versions: Vec<String> = self
                    .versions
                    .iter()
                    .filter(|v| !per_version.contains_key(*v))
                    .cloned()
                    .collect();
                (!versions.is_empty()).then_some(MissingVersions { index, versions })
            })
            .collect()
    }

    /// Samples present in every discovered version
    pub fn complete_count(&self) -> usize {
        self.samples
            .values()
            .filter(|per_version| per_version.len() == self.versions.len())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Scan `root` recursively for `<prefix><version>` folders.
///
/// Matching folders are not descended into when looking for further version
/// folders; their RIR files are collected recursively instead.
pub fn discover<P: AsRef<Path>>(root: P, prefix: &str) -> Result<SampleIndex> {
    let root = root.as_ref();
    let mut index = SampleIndex::new();

    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry?;
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let Some(version) = name.strip_prefix(prefix) else {
            continue;
        };
        if version.is_empty() {
            log::warn!("Ignoring folder without version: {}", entry.path().display());
            continue;
        }

        let version = version.to_string();
        let files = collect_rir_files(entry.path())?;
        log::debug!(
            "Version {} in {}: {} files",
            version,
            entry.path().display(),
            files.len()
        );

        index.add_version(version.clone());
        for path in files {
            let name = RirFileName::parse(&path)?;
            index.insert(RirEntry {
                path,
                version: version.clone(),
                name,
            })?;
        }

        walker.skip_current_dir();
    }

    Ok(index)
}

/// All `.wav` files below `dir`, sorted by path
fn collect_rir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let is_rir = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .map(|e| e.eq_ignore_ascii_case(RIR_EXTENSION))
                .unwrap_or(false);
        if is_rir {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), b"").unwrap();
    }

    fn layout() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for version in ["0.1.0", "0.2.0"] {
            let dir = tmp.path().join(format!("rirs-{version}"));
            touch(&dir, "0_100_98.wav");
            touch(&dir, "1_250_260.wav");
        }
        tmp
    }

    #[test]
    fn test_discovers_versions_and_samples() {
        let tmp = layout();
        let index = discover(tmp.path(), "rirs-").unwrap();

        let versions: Vec<&str> = index.versions.iter().map(String::as_str).collect();
        assert_eq!(versions, vec!["0.1.0", "0.2.0"]);
        assert_eq!(index.samples.len(), 2);
        assert_eq!(index.samples[&1]["0.2.0"].name.rt60_measured_ms, 260);
        assert!(index.missing().is_empty());
        assert_eq!(index.complete_count(), 2);
    }

    #[test]
    fn test_nested_version_folders_found() {
        let tmp = layout();
        touch(&tmp.path().join("runs").join("rirs-0.3.0"), "0_100_97.wav");

        let index = discover(tmp.path(), "rirs-").unwrap();
        assert_eq!(index.versions.len(), 3);
        assert_eq!(index.samples[&0].len(), 3);
    }

    #[test]
    fn test_padding_differences_group_by_index() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("rirs-a"), "03_100_98.wav");
        touch(&tmp.path().join("rirs-b"), "3_100_99.wav");

        let index = discover(tmp.path(), "rirs-").unwrap();
        assert_eq!(index.samples.len(), 1);
        assert_eq!(index.samples[&3].len(), 2);
    }

    #[test]
    fn test_reports_missing_versions() {
        let tmp = layout();
        fs::remove_file(tmp.path().join("rirs-0.2.0").join("1_250_260.wav")).unwrap();

        let index = discover(tmp.path(), "rirs-").unwrap();
        assert_eq!(
            index.missing(),
            vec![MissingVersions {
                index: 1,
                versions: vec!["0.2.0".to_string()],
            }]
        );
    }

    #[test]
    fn test_malformed_name_is_an_error() {
        let tmp = layout();
        touch(&tmp.path().join("rirs-0.1.0"), "impulse.wav");

        let err = discover(tmp.path(), "rirs-").unwrap_err();
        assert!(matches!(err, CompareError::Naming(_)));
    }

    #[test]
    fn test_duplicate_sample_is_an_error() {
        let tmp = layout();
        touch(&tmp.path().join("rirs-0.1.0"), "00_100_98.wav");

        let err = discover(tmp.path(), "rirs-").unwrap_err();
        assert!(matches!(err, CompareError::DuplicateSample { index: 0, .. }));
    }

    #[test]
    fn test_other_files_and_folders_ignored() {
        let tmp = layout();
        touch(&tmp.path().join("rirs-0.1.0"), "notes.txt");
        touch(&tmp.path().join("plots"), "0_1_1.wav");

        let index = discover(tmp.path(), "rirs-").unwrap();
        assert_eq!(index.versions.len(), 2);
        assert_eq!(index.samples.len(), 2);
    }
}
