//! Generate command implementation
//!
//! Converts a legacy source into a wavetable artifact, writes it atomically
//! and records a report beside it.

mod human;
mod json;


use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use wavebank_backend::{GenerateResult, OutputFormat, WavebankError};
use wavebank_spec::hash::canonical_config_hash;
use wavebank_spec::validation::validate_config;
use wavebank_spec::{
    BackendError, BankConfig, Integration, Report, ReportError, ValidationError,
    ValidationWarning,
};

use super::reporting;
use crate::input::SourceLoad;
use crate::output::write_atomic;

/// Parses a `--format` value (`c-header` or `rust-module`).
pub fn parse_format(name: &str) -> Option<OutputFormat> {
    match name {
        "c-header" => Some(OutputFormat::CHeader),
        "rust-module" => Some(OutputFormat::RustModule),
        _ => None,
    }
}

/// Run the generate command
///
/// # Arguments
/// * `source_path` - Path to the legacy waveform source
/// * `config_path` - Optional bank config (default: built-in PPG preset)
/// * `out_path` - Artifact path
/// * `format` - Artifact syntax
/// * `integrate` - Force integration on, overriding the config
/// * `no_report` - Skip writing `<artifact>.report.json`
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 config or input error, 2 generation error
pub fn run(
    source_path: &str,
    config_path: Option<&str>,
    out_path: &str,
    format: OutputFormat,
    integrate: bool,
    no_report: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let request = GenerateRequest {
        source_path,
        config_path,
        out_path,
        format,
        integrate,
        no_report,
    };

    if json_output {
        json::run_json(&request)
    } else {
        human::run_human(&request)
    }
}

/// Arguments shared by the human and JSON front ends.
pub(crate) struct GenerateRequest<'a> {
    pub source_path: &'a str,
    pub config_path: Option<&'a str>,
    pub out_path: &'a str,
    pub format: OutputFormat,
    pub integrate: bool,
    pub no_report: bool,
}

impl GenerateRequest<'_> {
    fn config_path(&self) -> Option<&Path> {
        self.config_path.map(Path::new)
    }

    fn apply_overrides(&self, mut config: BankConfig) -> BankConfig {
        if self.integrate {
            config.integration = Integration::Integrate;
        }
        config
    }
}

/// What a generation attempt produced.
pub(crate) enum Outcome {
    /// Config failed validation; nothing was extracted.
    Invalid {
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationWarning>,
    },
    /// Extraction, assembly or the artifact write failed.
    Failed {
        error: WavebankError,
        warnings: Vec<ValidationWarning>,
    },
    /// The artifact was written.
    Generated(Box<GenerateResult>),
}

impl Outcome {
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Invalid { .. } => ExitCode::from(1),
            Outcome::Failed { .. } => ExitCode::from(2),
            Outcome::Generated(_) => ExitCode::SUCCESS,
        }
    }

    pub(crate) fn warnings(&self) -> &[ValidationWarning] {
        match self {
            Outcome::Invalid { warnings, .. } | Outcome::Failed { warnings, .. } => warnings,
            Outcome::Generated(result) => &result.warnings,
        }
    }
}

/// Result of one run, before presentation.
pub(crate) struct GenerateRun {
    pub config: BankConfig,
    pub config_hash: String,
    pub source_hash: String,
    pub outcome: Outcome,
    pub report_path: Option<String>,
    pub duration_ms: u64,
}

/// Validates, generates, writes the artifact and the report.
pub(crate) fn execute(
    request: &GenerateRequest<'_>,
    config: BankConfig,
    source: &SourceLoad,
    start: Instant,
) -> Result<GenerateRun> {
    let config_hash = canonical_config_hash(&config)?;

    let validation = validate_config(&config);
    let outcome = if !validation.is_ok() {
        Outcome::Invalid {
            errors: validation.errors,
            warnings: validation.warnings,
        }
    } else {
        match wavebank_backend::generate(&source.text, &config, request.format) {
            Ok(result) => match write_atomic(Path::new(request.out_path), &result.artifact) {
                Ok(()) => Outcome::Generated(Box::new(result)),
                Err(e) => Outcome::Failed {
                    error: WavebankError::Io(e),
                    warnings: result.warnings,
                },
            },
            Err(error) => Outcome::Failed {
                error,
                warnings: validation.warnings,
            },
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;

    let report_path = if request.no_report {
        None
    } else {
        let path = reporting::report_path(request.out_path);
        let report = build_report(
            &config,
            &config_hash,
            &source.hash,
            request.format,
            &outcome,
            duration_ms,
        );
        reporting::write_report(&report, &path)?;
        Some(path)
    };

    Ok(GenerateRun {
        config,
        config_hash,
        source_hash: source.hash.clone(),
        outcome,
        report_path,
        duration_ms,
    })
}

fn build_report(
    config: &BankConfig,
    config_hash: &str,
    source_hash: &str,
    format: OutputFormat,
    outcome: &Outcome,
    duration_ms: u64,
) -> Report {
    let mut builder = Report::builder(config_hash.to_string(), reporting::generator_version())
        .layout(config)
        .source_hash(source_hash)
        .output_format(format.as_str())
        .duration_ms(duration_ms);

    builder = match outcome {
        Outcome::Invalid { errors, warnings } => {
            reporting::apply_validation_messages(builder, errors, warnings)
        }
        Outcome::Failed { error, warnings } => {
            reporting::apply_validation_messages(builder, &[], warnings)
                .error(ReportError::new(error.code(), error.message()))
        }
        Outcome::Generated(result) => {
            reporting::apply_validation_messages(builder, &[], &result.warnings)
                .output_hash(&result.output_hash)
        }
    };

    builder.build()
}
