//! Error types for bank configuration validation and processing.

use thiserror::Error;

/// Error codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported config_version
    UnsupportedConfigVersion,
    /// E002: No banks declared
    NoBanks,
    /// E003: Bank name is not display-safe
    InvalidBankName,
    /// E004: Bank name exceeds the display budget
    BankNameTooLong,
    /// E005: Duplicate bank name
    DuplicateBankName,
    /// E006: Bank wave count differs from waves_per_bank, or waves_per_bank is 0
    WaveCountMismatch,
    /// E007: table_size is not greater than raw_length
    InvalidTableSize,
    /// E008: guard_samples is zero or larger than table_size
    InvalidGuardCount,
    /// E009: raw_length is too short to fit a spline
    InvalidRawLength,
    /// E010: source_array is not a valid identifier
    InvalidSourceArray,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedConfigVersion => "E001",
            ErrorCode::NoBanks => "E002",
            ErrorCode::InvalidBankName => "E003",
            ErrorCode::BankNameTooLong => "E004",
            ErrorCode::DuplicateBankName => "E005",
            ErrorCode::WaveCountMismatch => "E006",
            ErrorCode::InvalidTableSize => "E007",
            ErrorCode::InvalidGuardCount => "E008",
            ErrorCode::InvalidRawLength => "E009",
            ErrorCode::InvalidSourceArray => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for validation and generation.
///
/// W001 and W002 come from config validation; W003 and W004 are raised by
/// the backend while extracting and assembling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Integration enabled; the consumer must differentiate on read
    IntegrationEnabled,
    /// W002: Same legacy wave repeated inside one bank
    RepeatedWave,
    /// W003: Trailing partial waveform dropped
    WaveformLength,
    /// W004: Out-of-range wave index substituted with wave 0
    IndexOutOfRange,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::IntegrationEnabled => "W001",
            WarningCode::RepeatedWave => "W002",
            WarningCode::WaveformLength => "W003",
            WarningCode::IndexOutOfRange => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "banks\[3\].name").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for configuration operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Config validation failed with one or more errors.
    #[error("config validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of config validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives every backend error a stable code (e.g. "WAVEBANK_001") and a
/// category for reports.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedConfigVersion.code(), "E001");
        assert_eq!(ErrorCode::BankNameTooLong.code(), "E004");
        assert_eq!(ErrorCode::InvalidSourceArray.code(), "E010");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::IntegrationEnabled.code(), "W001");
        assert_eq!(WarningCode::IndexOutOfRange.code(), "W004");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::NoBanks, "at least one bank is required");
        assert_eq!(err.to_string(), "E002: at least one bank is required");

        let err_with_path = ValidationError::with_path(
            ErrorCode::DuplicateBankName,
            "bank name 'PWM' is declared twice",
            "banks[4].name",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E005: bank name 'PWM' is declared twice (at banks[4].name)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(
            WarningCode::IntegrationEnabled,
            "integration enabled",
        ));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::NoBanks, "no banks"));
        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 1);
        assert!(result.into_result().is_err());
    }
}
