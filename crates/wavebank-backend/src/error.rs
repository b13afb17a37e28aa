//! Error types for the conversion pipeline.

use thiserror::Error;
use wavebank_spec::BackendError;

/// Result type for pipeline operations.
pub type WavebankResult<T> = Result<T, WavebankError>;

/// Errors that can occur while converting a legacy waveform source.
#[derive(Debug, Error)]
pub enum WavebankError {
    /// The legacy array could not be located or parsed.
    #[error("source format error: {message}")]
    SourceFormat {
        /// Error message.
        message: String,
    },

    /// A waveform does not have the configured raw length.
    #[error("waveform {index} has {actual} samples, expected {expected}")]
    WaveformLength {
        /// Index of the waveform in the legacy set.
        index: usize,
        /// Configured raw length.
        expected: usize,
        /// Actual sample count.
        actual: usize,
    },

    /// The config failed validation.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },

    /// Guard count exceeds the table it is copied from.
    #[error("guard of {guard} samples exceeds table length {len}")]
    GuardTooLong {
        /// Requested guard count.
        guard: usize,
        /// Length of the table body.
        len: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavebankError {
    /// Creates a source format error.
    pub fn source_format(message: impl Into<String>) -> Self {
        Self::SourceFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl BackendError for WavebankError {
    fn code(&self) -> &'static str {
        match self {
            WavebankError::SourceFormat { .. } => "WAVEBANK_001",
            WavebankError::WaveformLength { .. } => "WAVEBANK_002",
            WavebankError::InvalidConfig { .. } => "WAVEBANK_003",
            WavebankError::GuardTooLong { .. } => "WAVEBANK_004",
            WavebankError::Io(_) => "WAVEBANK_005",
        }
    }

    fn category(&self) -> &'static str {
        "wavebank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_helper() {
        let err = WavebankError::source_format("array 'ppg_waveforms_data' not found");
        assert_eq!(err.code(), "WAVEBANK_001");
        assert!(err.to_string().contains("ppg_waveforms_data"));
    }

    #[test]
    fn test_waveform_length_message() {
        let err = WavebankError::WaveformLength {
            index: 3,
            expected: 64,
            actual: 12,
        };
        assert_eq!(err.to_string(), "waveform 3 has 12 samples, expected 64");
        assert_eq!(err.category(), "wavebank");
    }
}
