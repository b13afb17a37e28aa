//! Generation report types.
//!
//! Every `generate` run writes a report next to its artifact. The report
//! records provenance hashes, the layout the artifact was built with, and
//! any errors or warnings raised along the way.

use serde::{Deserialize, Serialize};

use crate::config::{BankConfig, GuardMode, Integration};
use crate::error::{ValidationError, ValidationWarning};

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// An error entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    /// Error code (e.g. "E003" or "WAVEBANK_002").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// JSON path to the offending config field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ReportError {
    /// Creates a new report error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Converts a ValidationError to a ReportError.
    pub fn from_validation_error(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
        }
    }
}

/// A warning entry in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// Warning code (e.g. "W004").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// JSON path to the related config field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ReportWarning {
    /// Creates a new report warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Converts a ValidationWarning to a ReportWarning.
    pub fn from_validation_warning(warn: &ValidationWarning) -> Self {
        Self {
            code: warn.code.code().to_string(),
            message: warn.message.clone(),
            path: warn.path.clone(),
        }
    }
}

/// Report for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report format version.
    pub report_version: u32,
    /// BLAKE3 hash of the canonical config.
    pub config_hash: String,
    /// BLAKE3 hash of the legacy source bytes.
    pub source_hash: String,
    /// BLAKE3 hash of the emitted artifact (absent when generation failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_hash: Option<String>,
    /// Artifact format (e.g. "c_header").
    pub output_format: String,
    /// Whether generation succeeded.
    pub ok: bool,
    /// Errors raised during the run.
    pub errors: Vec<ReportError>,
    /// Warnings raised during the run.
    pub warnings: Vec<ReportWarning>,
    /// Number of banks emitted.
    pub bank_count: usize,
    /// Waves per bank.
    pub waves_per_bank: usize,
    /// Samples per table, excluding guard.
    pub table_size: usize,
    /// Guard samples per table.
    pub guard_samples: usize,
    /// Post-resampling strategy.
    pub integration: Integration,
    /// Guard sample source.
    pub guard_mode: GuardMode,
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
    /// Generator identifier and version (e.g. "wavebank-backend v0.1.0").
    pub generator_version: String,
}

impl Report {
    /// Creates a new report builder.
    pub fn builder(config_hash: String, generator_version: String) -> ReportBuilder {
        ReportBuilder::new(config_hash, generator_version)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Standard report filename for an artifact.
    ///
    /// # Example
    ///
    /// ```
    /// use wavebank_spec::report::Report;
    ///
    /// assert_eq!(Report::filename("wavetables.h"), "wavetables.h.report.json");
    /// ```
    pub fn filename(artifact_name: &str) -> String {
        format!("{}.report.json", artifact_name)
    }
}

/// Builder for [`Report`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config_hash: String,
    source_hash: String,
    output_hash: Option<String>,
    output_format: String,
    ok: bool,
    errors: Vec<ReportError>,
    warnings: Vec<ReportWarning>,
    bank_count: usize,
    waves_per_bank: usize,
    table_size: usize,
    guard_samples: usize,
    integration: Integration,
    guard_mode: GuardMode,
    duration_ms: u64,
    generator_version: String,
}

impl ReportBuilder {
    /// Creates a new builder.
    pub fn new(config_hash: String, generator_version: String) -> Self {
        Self {
            config_hash,
            source_hash: String::new(),
            output_hash: None,
            output_format: String::new(),
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            bank_count: 0,
            waves_per_bank: 0,
            table_size: 0,
            guard_samples: 0,
            integration: Integration::default(),
            guard_mode: GuardMode::default(),
            duration_ms: 0,
            generator_version,
        }
    }

    /// Copies the layout fields from a config.
    pub fn layout(mut self, config: &BankConfig) -> Self {
        self.bank_count = config.banks.len();
        self.waves_per_bank = config.waves_per_bank;
        self.table_size = config.table_size;
        self.guard_samples = config.guard_samples;
        self.integration = config.integration;
        self.guard_mode = config.guard_mode;
        self
    }

    /// Sets the source hash.
    pub fn source_hash(mut self, hash: impl Into<String>) -> Self {
        self.source_hash = hash.into();
        self
    }

    /// Sets the output hash.
    pub fn output_hash(mut self, hash: impl Into<String>) -> Self {
        self.output_hash = Some(hash.into());
        self
    }

    /// Sets the output format name.
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    /// Adds an error and marks the report as failed.
    pub fn error(mut self, error: ReportError) -> Self {
        self.ok = false;
        self.errors.push(error);
        self
    }

    /// Adds errors from ValidationErrors.
    pub fn validation_errors(mut self, errors: &[ValidationError]) -> Self {
        if !errors.is_empty() {
            self.ok = false;
            self.errors
                .extend(errors.iter().map(ReportError::from_validation_error));
        }
        self
    }

    /// Adds a warning.
    pub fn warning(mut self, warning: ReportWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Adds warnings from ValidationWarnings.
    pub fn validation_warnings(mut self, warnings: &[ValidationWarning]) -> Self {
        self.warnings
            .extend(warnings.iter().map(ReportWarning::from_validation_warning));
        self
    }

    /// Sets the execution duration in milliseconds.
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Builds the final report.
    pub fn build(self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            config_hash: self.config_hash,
            source_hash: self.source_hash,
            output_hash: self.output_hash,
            output_format: self.output_format,
            ok: self.ok,
            errors: self.errors,
            warnings: self.warnings,
            bank_count: self.bank_count,
            waves_per_bank: self.waves_per_bank,
            table_size: self.table_size,
            guard_samples: self.guard_samples,
            integration: self.integration,
            guard_mode: self.guard_mode,
            duration_ms: self.duration_ms,
            generator_version: self.generator_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, WarningCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_layout() {
        let report = Report::builder("abc".to_string(), "wavebank v0.1.0".to_string())
            .layout(&BankConfig::ppg_wave_22())
            .source_hash("def")
            .output_hash("123")
            .output_format("c_header")
            .duration_ms(12)
            .build();

        assert!(report.ok);
        assert_eq!(report.report_version, REPORT_VERSION);
        assert_eq!(report.bank_count, 16);
        assert_eq!(report.waves_per_bank, 8);
        assert_eq!(report.table_size, 256);
        assert_eq!(report.guard_samples, 4);
        assert_eq!(report.output_hash.as_deref(), Some("123"));
    }

    #[test]
    fn test_validation_errors_fail_report() {
        let errors = vec![ValidationError::with_path(
            ErrorCode::NoBanks,
            "at least one bank is required",
            "banks",
        )];
        let warnings = vec![ValidationWarning::new(
            WarningCode::IntegrationEnabled,
            "integrated",
        )];
        let report = Report::builder("abc".to_string(), "v".to_string())
            .validation_errors(&errors)
            .validation_warnings(&warnings)
            .build();

        assert!(!report.ok);
        assert_eq!(report.errors[0].code, "E002");
        assert_eq!(report.errors[0].path.as_deref(), Some("banks"));
        assert_eq!(report.warnings[0].code, "W001");
    }

    #[test]
    fn test_empty_validation_errors_keep_ok() {
        let report = Report::builder("abc".to_string(), "v".to_string())
            .validation_errors(&[])
            .build();
        assert!(report.ok);
    }

    #[test]
    fn test_json_roundtrip() {
        let report = Report::builder("abc".to_string(), "v".to_string())
            .error(ReportError::new("WAVEBANK_001", "bad source"))
            .build();
        let json = report.to_json_pretty().unwrap();
        assert!(!json.contains("output_hash"));
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }
}
