//! JSON output types for machine-readable CLI output.
//!
//! These records back the `--json` flag on `generate`, `validate` and
//! `inspect`. Each command prints exactly one record to stdout.

use serde::{Deserialize, Serialize};
use wavebank_spec::{BackendError, ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. Validation (`E0xx`) and backend (`WAVEBANK_0xx`)
/// codes are passed through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E003", "WAVEBANK_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic config field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W004")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the related config field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    match err {
        InputError::FileRead { path, .. } => {
            JsonError::new(error_codes::FILE_READ, err.to_string())
                .with_file(path.display().to_string())
        }
        InputError::JsonParse { path, .. } => {
            JsonError::new(error_codes::JSON_PARSE, err.to_string())
                .with_file(path.display().to_string())
        }
    }
}

/// Converts a backend error to a JsonError.
pub fn backend_error_to_json<E: BackendError>(err: &E) -> JsonError {
    JsonError::new(err.code(), err.message())
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// Prints a record as pretty JSON on stdout.
pub fn print_json<T: Serialize>(record: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    println!("{}", json);
    Ok(())
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether the artifact was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings raised during validation, extraction and assembly
    pub warnings: Vec<JsonWarning>,
    /// Generation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    /// Canonical config hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
    /// BLAKE3 hash of the legacy source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl GenerateOutput {
    /// Creates a failed generate output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        config_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            config_hash,
            source_hash,
        }
    }
}

/// Generation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Artifact path
    pub output_path: String,
    /// Artifact syntax
    pub format: String,
    /// BLAKE3 hash of the artifact
    pub output_hash: String,
    /// Banks emitted
    pub bank_count: usize,
    /// Waves per bank
    pub waves_per_bank: usize,
    /// Samples per wave, guard included
    pub samples_per_wave: usize,
    /// Complete legacy waveforms found in the source
    pub waveform_count: usize,
    /// Sample data size in bytes
    pub data_bytes: usize,
    /// Report path (absent with --no-report)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    /// Execution time in milliseconds
    pub duration_ms: u64,
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical config hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Banks declared
    pub bank_count: usize,
    /// Waves per bank
    pub waves_per_bank: usize,
    /// Samples per table
    pub table_size: usize,
    /// Guard samples per table
    pub guard_samples: usize,
    /// Integration mode
    pub integration: String,
    /// Guard mode
    pub guard_mode: String,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the source could be extracted and assembled
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Extraction and assembly warnings
    pub warnings: Vec<JsonWarning>,
    /// Inspection details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
    /// BLAKE3 hash of the legacy source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Inspection details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// Numeric values read from the legacy array
    pub value_count: usize,
    /// Complete legacy waveforms
    pub waveform_count: usize,
    /// Samples per legacy waveform
    pub raw_length: usize,
    /// Resolved bank selections
    pub banks: Vec<InspectBank>,
}

/// One resolved bank in inspect output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectBank {
    /// Display name
    pub name: String,
    /// Legacy indices as configured
    pub requested: Vec<usize>,
    /// Legacy indices actually used (out-of-range replaced by 0)
    pub resolved: Vec<usize>,
}
