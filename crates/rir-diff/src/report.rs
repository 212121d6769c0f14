//! Report generation for cross-version comparisons

use crate::compare::SampleComparison;
use crate::discovery::MissingVersions;
use crate::matrix::ErrorMatrix;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain text table
    #[default]
    Text,
    /// JSON report
    Json,
    /// Markdown report
    Markdown,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!(
                "unknown report format '{other}' (expected text, json or markdown)"
            )),
        }
    }
}

/// Result of comparing every discovered version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Folder that was scanned
    pub root: PathBuf,

    /// Discovered versions, sorted
    pub versions: Vec<String>,

    /// Mean pairwise MSE
    pub matrix: ErrorMatrix,

    /// Distinct sample indices seen
    pub sample_count: usize,

    /// Samples present in every version
    pub complete_count: usize,

    /// Samples missing from some versions
    pub missing: Vec<MissingVersions>,

    /// Per-sample details
    pub samples: Vec<SampleComparison>,
}

impl ComparisonReport {
    /// True when every sample exists in every version
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Generate report in specified format
    pub fn generate(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    /// Save report to file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> std::io::Result<()> {
        let content = self.generate(format);
        let mut file = std::fs::File::create(path)?;
        file.write_all(content.as_bytes())
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.matrix
            .labels
            .iter()
            .zip(&self.matrix.values)
            .map(|(label, row)| {
                std::iter::once(label.clone())
                    .chain(row.iter().map(|v| format_mse(*v)))
                    .collect()
            })
            .collect()
    }

    fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Versions: {} | Samples: {} | Complete: {}\n",
            self.versions.len(),
            self.sample_count,
            self.complete_count
        ));

        for entry in &self.missing {
            output.push_str(&format!(
                "File {} missing for versions {}\n",
                entry.index,
                entry.versions.join(", ")
            ));
        }
        output.push('\n');

        let header: Vec<String> = std::iter::once(String::new())
            .chain(self.matrix.labels.iter().cloned())
            .collect();
        let rows = self.rows();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header)
                    .chain(&rows)
                    .map(|r| r[col].len())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let render = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(col, (cell, &w))| {
                    if col == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        output.push_str(&render(&header));
        output.push('\n');
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');
        for row in &rows {
            output.push_str(&render(row));
            output.push('\n');
        }

        output
    }

    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }

    fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# RIR Version Comparison\n\n");
        output.push_str(&format!("**Root:** `{}`\n\n", self.root.display()));

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Versions | {} |\n", self.versions.len()));
        output.push_str(&format!("| Samples | {} |\n", self.sample_count));
        output.push_str(&format!("| Complete | {} |\n", self.complete_count));
        if let Some(max) = self.matrix.max_error() {
            output.push_str(&format!("| Max MSE | {} |\n", format_mse(Some(max))));
        }
        output.push('\n');

        output.push_str("## Mean Squared Error\n\n");
        output.push_str("| |");
        for label in &self.matrix.labels {
            output.push_str(&format!(" {} |", label));
        }
        output.push('\n');
        output.push_str("|---|");
        output.push_str(&"---:|".repeat(self.matrix.labels.len()));
        output.push('\n');
        for row in self.rows() {
            output.push_str(&format!("| **{}** |", row[0]));
            for cell in &row[1..] {
                output.push_str(&format!(" {} |", cell));
            }
            output.push('\n');
        }
        output.push('\n');

        if !self.missing.is_empty() {
            output.push_str("## Missing Files\n\n");
            for entry in &self.missing {
                output.push_str(&format!(
                    "- Sample {}: {}\n",
                    entry.index,
                    entry.versions.join(", ")
                ));
            }
            output.push('\n');
        }

        output
    }
}

fn format_mse(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6e}", v),
        None => "-".to_string(),
    }
}
