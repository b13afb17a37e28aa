//! Main entry point for wavetable generation.
//!
//! This module takes a legacy source and a bank config and renders the
//! artifact deterministically. Nothing is written to disk here; callers get
//! the artifact bytes and decide where they go.

use wavebank_spec::validation::validate_config;
use wavebank_spec::{BankConfig, ValidationWarning};

use crate::bank::{assemble, WavetableSet};
use crate::emit::{render, OutputFormat};
use crate::error::{WavebankError, WavebankResult};
use crate::extract::extract_waveforms;

/// Result of wavetable generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Rendered artifact.
    pub artifact: Vec<u8>,
    /// Syntax the artifact was rendered in.
    pub format: OutputFormat,
    /// BLAKE3 hash of the artifact bytes.
    pub output_hash: String,
    /// BLAKE3 hash of the legacy source bytes.
    pub source_hash: String,
    /// Number of complete legacy waveforms found.
    pub waveform_count: usize,
    /// The assembled banks.
    pub set: WavetableSet,
    /// Config, extraction and assembly warnings, in that order.
    pub warnings: Vec<ValidationWarning>,
}

/// Generates an artifact from a legacy source.
///
/// # Arguments
/// * `source` - Text of the legacy source file
/// * `config` - Bank configuration
/// * `format` - Artifact syntax
///
/// # Returns
/// The rendered artifact, its hashes, and every warning raised on the way.
/// Fails before rendering anything if the config is invalid or the source
/// cannot be parsed.
pub fn generate(
    source: &str,
    config: &BankConfig,
    format: OutputFormat,
) -> WavebankResult<GenerateResult> {
    let validation = validate_config(config);
    let mut warnings = match validation.into_result() {
        Ok(warnings) => warnings,
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            return Err(WavebankError::invalid_config(messages.join("; ")));
        }
    };

    let extraction = extract_waveforms(source, config)?;
    warnings.extend(extraction.warnings);

    let assembly = assemble(&extraction.waveforms, config)?;
    warnings.extend(assembly.warnings);

    let artifact = render(&assembly.set, format).into_bytes();
    let output_hash = blake3::hash(&artifact).to_hex().to_string();
    let source_hash = blake3::hash(source.as_bytes()).to_hex().to_string();

    Ok(GenerateResult {
        artifact,
        format,
        output_hash,
        source_hash,
        waveform_count: extraction.waveforms.len(),
        set: assembly.set,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavebank_spec::{BankSpec, WarningCode};

    fn source(values: &[u8]) -> String {
        let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        format!(
            "const uint8_t ppg_waveforms_data[] = {{\n    {}\n}};\n",
            body.join(", ")
        )
    }

    #[test]
    fn test_invalid_config_rejected_before_extraction() {
        let config = BankConfig::new(vec![]);
        let err = generate("not a source", &config, OutputFormat::CHeader).unwrap_err();
        assert!(matches!(err, WavebankError::InvalidConfig { .. }));
        assert!(err.to_string().contains("E002"));
    }

    #[test]
    fn test_source_error_is_fatal() {
        let config = BankConfig::new(vec![BankSpec::new("A", vec![0, 1])]).with_layout(4, 8, 2, 2);
        let err = generate("int x = 0;", &config, OutputFormat::CHeader).unwrap_err();
        assert!(matches!(err, WavebankError::SourceFormat { .. }));
    }

    #[test]
    fn test_warnings_collected_in_order() {
        let config = BankConfig::new(vec![BankSpec::new("A", vec![0, 7])])
            .with_layout(4, 8, 2, 2)
            .with_integration(wavebank_spec::Integration::Integrate);
        let result = generate(
            &source(&[0, 64, 128, 192, 10, 20]),
            &config,
            OutputFormat::CHeader,
        )
        .unwrap();

        let codes: Vec<_> = result.warnings.iter().map(|w| w.code).collect();
        assert_eq!(
            codes,
            vec![
                WarningCode::IntegrationEnabled,
                WarningCode::WaveformLength,
                WarningCode::IndexOutOfRange
            ]
        );
        assert_eq!(result.waveform_count, 1);
    }

    #[test]
    fn test_hashes() {
        let text = source(&[0, 64, 128, 192]);
        let config = BankConfig::new(vec![BankSpec::new("A", vec![0])]).with_layout(4, 8, 2, 1);
        let result = generate(&text, &config, OutputFormat::RustModule).unwrap();

        assert_eq!(
            result.output_hash,
            blake3::hash(&result.artifact).to_hex().to_string()
        );
        assert_eq!(
            result.source_hash,
            blake3::hash(text.as_bytes()).to_hex().to_string()
        );
        assert_eq!(result.format, OutputFormat::RustModule);
    }
}
