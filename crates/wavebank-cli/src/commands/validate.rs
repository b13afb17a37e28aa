//! Validate command implementation
//!
//! Validates a bank config without touching any legacy source.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use wavebank_spec::hash::canonical_config_hash;
use wavebank_spec::validation::validate_config;
use wavebank_spec::{BankConfig, ValidationResult};

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    ValidateOutput, ValidateResult,
};
use crate::input::load_config;

/// Run the validate command
///
/// # Arguments
/// * `config_path` - Path to the bank config
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(config_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(config_path)
    } else {
        run_human(config_path)
    }
}

fn run_human(config_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), config_path);

    let loaded = load_config(Some(Path::new(config_path)))
        .with_context(|| format!("Failed to load config: {}", config_path))?;
    let config = loaded.config;

    let config_hash = canonical_config_hash(&config).context("Failed to hash config")?;
    println!("{} {}", "Config hash:".dimmed(), &config_hash[..16]);

    let result = validate_config(&config);
    let duration_ms = start.elapsed().as_millis() as u64;

    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} {} banks x {} waves, {} samples + {} guard ({}ms)",
            "SUCCESS".green().bold(),
            config.banks.len(),
            config.waves_per_bank,
            config.table_size,
            config.guard_samples,
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Config has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(config_path: &str) -> Result<ExitCode> {
    let config = match load_config(Some(Path::new(config_path))) {
        Ok(loaded) => loaded.config,
        Err(e) => {
            let output = ValidateOutput {
                success: false,
                errors: vec![input_error_to_json(&e)],
                warnings: Vec::new(),
                result: None,
                config_hash: None,
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let config_hash = canonical_config_hash(&config).context("Failed to hash config")?;
    let result = validate_config(&config);
    let output = validate_output(&config, &result, config_hash);

    print_json(&output)?;
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn validate_output(
    config: &BankConfig,
    result: &ValidationResult,
    config_hash: String,
) -> ValidateOutput {
    let details = result.is_ok().then(|| ValidateResult {
        bank_count: config.banks.len(),
        waves_per_bank: config.waves_per_bank,
        table_size: config.table_size,
        guard_samples: config.guard_samples,
        integration: config.integration.to_string(),
        guard_mode: config.guard_mode.to_string(),
    });

    ValidateOutput {
        success: result.is_ok(),
        errors: result.errors.iter().map(validation_error_to_json).collect(),
        warnings: result
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect(),
        result: details,
        config_hash: Some(config_hash),
    }
}

/// Print validation results to the console
fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavebank_spec::{BankSpec, Integration};

    fn write_config(dir: &tempfile::TempDir, config: &BankConfig) -> String {
        let path = dir.path().join("banks.json");
        std::fs::write(&path, config.to_json_pretty().unwrap()).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_valid_preset_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, &BankConfig::ppg_wave_22());
        assert_eq!(run(&path, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&path, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_invalid_config_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, &BankConfig::new(vec![]));
        assert_eq!(run(&path, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_unparseable_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("banks.json");
        std::fs::write(&path, "[]").unwrap();
        let path = path.to_string_lossy().to_string();

        assert_eq!(run(&path, true).unwrap(), ExitCode::from(1));
        assert!(run(&path, false).is_err());
    }

    #[test]
    fn test_validate_output_details() {
        let config = BankConfig::new(vec![BankSpec::new("A", (0..8).collect())])
            .with_integration(Integration::Integrate);
        let result = validate_config(&config);
        let output = validate_output(&config, &result, "hash".to_string());

        assert!(output.success);
        assert_eq!(output.warnings[0].code, "W001");
        let details = output.result.unwrap();
        assert_eq!(details.integration, "integrate");
        assert_eq!(details.guard_mode, "bank_wrap");
    }
}
