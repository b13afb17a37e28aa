//! Inspect command implementation
//!
//! Reports what a legacy source holds and how each configured bank resolves
//! against it, without rendering anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavebank_backend::{extract_waveforms, resolve_indices, WavebankError};
use wavebank_spec::validation::validate_config;
use wavebank_spec::{BackendError, BankConfig, ValidationError, ValidationWarning};

use super::json_output::{
    backend_error_to_json, input_error_to_json, print_json, validation_error_to_json,
    validation_warning_to_json, InspectBank, InspectOutput, InspectResult,
};
use crate::input::{load_config, load_source, SourceLoad};

/// Run the inspect command
///
/// # Arguments
/// * `source_path` - Path to the legacy waveform source
/// * `config_path` - Optional bank config (default: built-in PPG preset)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 config or input error, 2 source error
pub fn run(source_path: &str, config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(source_path, config_path)
    } else {
        run_human(source_path, config_path)
    }
}

/// What inspecting a source produced.
enum Inspection {
    Invalid {
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationWarning>,
    },
    Failed {
        error: WavebankError,
        warnings: Vec<ValidationWarning>,
    },
    Inspected {
        result: InspectResult,
        warnings: Vec<ValidationWarning>,
    },
}

impl Inspection {
    fn exit_code(&self) -> ExitCode {
        match self {
            Inspection::Invalid { .. } => ExitCode::from(1),
            Inspection::Failed { .. } => ExitCode::from(2),
            Inspection::Inspected { .. } => ExitCode::SUCCESS,
        }
    }

    fn warnings(&self) -> &[ValidationWarning] {
        match self {
            Inspection::Invalid { warnings, .. }
            | Inspection::Failed { warnings, .. }
            | Inspection::Inspected { warnings, .. } => warnings,
        }
    }
}

fn inspect(config: &BankConfig, source: &SourceLoad) -> Inspection {
    let validation = validate_config(config);
    if !validation.is_ok() {
        return Inspection::Invalid {
            errors: validation.errors,
            warnings: validation.warnings,
        };
    }
    let mut warnings = validation.warnings;

    let extraction = match extract_waveforms(&source.text, config) {
        Ok(extraction) => extraction,
        Err(error) => return Inspection::Failed { error, warnings },
    };
    warnings.extend(extraction.warnings);

    let available = extraction.waveforms.len();
    let banks = config
        .banks
        .iter()
        .enumerate()
        .map(|(ordinal, spec)| {
            let (resolved, bank_warnings) = resolve_indices(ordinal, spec, available);
            warnings.extend(bank_warnings);
            InspectBank {
                name: spec.name.clone(),
                requested: spec.waves.clone(),
                resolved,
            }
        })
        .collect();

    Inspection::Inspected {
        result: InspectResult {
            value_count: extraction.token_count,
            waveform_count: available,
            raw_length: config.raw_length,
            banks,
        },
        warnings,
    }
}

fn run_human(source_path: &str, config_path: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), source_path);

    let loaded = load_config(config_path.map(Path::new)).with_context(|| {
        format!(
            "Failed to load config: {}",
            config_path.unwrap_or("<preset>")
        )
    })?;
    println!("{} {}", "Config:".dimmed(), loaded.origin.label());

    let source = load_source(Path::new(source_path))
        .with_context(|| format!("Failed to load source: {}", source_path))?;
    println!("{} {}", "Source hash:".dimmed(), &source.hash[..16]);

    let inspection = inspect(&loaded.config, &source);

    let warnings = inspection.warnings();
    if !warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }

    match &inspection {
        Inspection::Invalid { errors, .. } => {
            println!("\n{}", "Errors:".red().bold());
            for error in errors {
                println!(
                    "  {} [{}]: {}",
                    "x".red(),
                    error.code.to_string().red(),
                    error.message
                );
            }
            println!("\n{} Config has {} error(s)", "FAILED".red().bold(), errors.len());
        }
        Inspection::Failed { error, .. } => {
            println!(
                "\n  {} [{}]: {}",
                "x".red(),
                error.code().red(),
                error.message()
            );
            println!("\n{} Source could not be read", "FAILED".red().bold());
        }
        Inspection::Inspected { result, .. } => {
            println!(
                "\n{} {} values, {} waveforms of {} samples",
                "Legacy set:".dimmed(),
                result.value_count,
                result.waveform_count,
                result.raw_length
            );
            for bank in &result.banks {
                let resolved: Vec<String> =
                    bank.resolved.iter().map(|i| i.to_string()).collect();
                let marker = if bank.requested == bank.resolved {
                    "+".green()
                } else {
                    "!".yellow()
                };
                println!(
                    "  {} {:<8} {}",
                    marker,
                    bank.name,
                    resolved.join(" ").dimmed()
                );
            }
            println!(
                "\n{} {} banks resolved",
                "SUCCESS".green().bold(),
                result.banks.len()
            );
        }
    }

    Ok(inspection.exit_code())
}

fn run_json(source_path: &str, config_path: Option<&str>) -> Result<ExitCode> {
    let loaded = match load_config(config_path.map(Path::new)) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_json(&input_failure(&e))?;
            return Ok(ExitCode::from(1));
        }
    };
    let source = match load_source(Path::new(source_path)) {
        Ok(source) => source,
        Err(e) => {
            print_json(&input_failure(&e))?;
            return Ok(ExitCode::from(1));
        }
    };

    let inspection = inspect(&loaded.config, &source);
    let warnings = inspection
        .warnings()
        .iter()
        .map(validation_warning_to_json)
        .collect();
    let exit_code = inspection.exit_code();

    let (errors, result) = match inspection {
        Inspection::Invalid { errors, .. } => {
            (errors.iter().map(validation_error_to_json).collect(), None)
        }
        Inspection::Failed { error, .. } => (vec![backend_error_to_json(&error)], None),
        Inspection::Inspected { result, .. } => (Vec::new(), Some(result)),
    };

    let output = InspectOutput {
        success: result.is_some(),
        errors,
        warnings,
        result,
        source_hash: Some(source.hash),
    };
    print_json(&output)?;

    Ok(exit_code)
}

fn input_failure(err: &crate::input::InputError) -> InspectOutput {
    InspectOutput {
        success: false,
        errors: vec![input_error_to_json(err)],
        warnings: Vec::new(),
        result: None,
        source_hash: None,
    }
}
