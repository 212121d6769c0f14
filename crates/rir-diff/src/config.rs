//! Configuration for RIR comparison

use crate::report::ReportFormat;
use crate::{CompareError, Result};
use rir_core::VERSION_DIR_PREFIX;
use serde::{Deserialize, Serialize};

/// Configuration for cross-version comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Folder name prefix; the remainder of the name is the version
    pub version_prefix: String,

    /// Required sample rate; `None` takes the rate of the first file read
    pub sample_rate: Option<u32>,

    /// Report rendering
    pub format: ReportFormat,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version_prefix: VERSION_DIR_PREFIX.to_string(),
            sample_rate: None,
            format: ReportFormat::Text,
        }
    }
}

impl CompareConfig {
    /// Builder pattern: set folder prefix
    pub fn with_version_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.version_prefix = prefix.into();
        self
    }

    /// Builder pattern: require a sample rate
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Builder pattern: set report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.version_prefix.is_empty() {
            return Err(CompareError::ConfigError(
                "version prefix must not be empty".into(),
            ));
        }
        if self.sample_rate == Some(0) {
            return Err(CompareError::ConfigError(
                "sample rate must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert_eq!(config.version_prefix, "rirs-");
        assert_eq!(config.sample_rate, None);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_partial_json() {
        let config: CompareConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.version_prefix, "rirs-");
    }

    #[test]
    fn test_builder_pattern() {
        let config = CompareConfig::default()
            .with_version_prefix("out-")
            .with_sample_rate(16000)
            .with_format(ReportFormat::Markdown);
        assert_eq!(config.version_prefix, "out-");
        assert_eq!(config.format, ReportFormat::Markdown);
        assert_eq!(config.sample_rate, Some(16000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let config = CompareConfig::default().with_version_prefix("");
        assert!(matches!(config.validate(), Err(CompareError::ConfigError(_))));
        assert!(CompareConfig::default().with_sample_rate(0).validate().is_err());
    }
}
