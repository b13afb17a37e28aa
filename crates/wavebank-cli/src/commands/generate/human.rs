//! Human-readable (colored) output for the generate command.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use wavebank_spec::{BackendError, ValidationError, ValidationWarning};

use super::{execute, GenerateRequest, Outcome};
use crate::input::{load_config, load_source};

/// Run generate with human-readable (colored) output
pub(super) fn run_human(request: &GenerateRequest<'_>) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), request.out_path);

    let loaded = load_config(request.config_path()).with_context(|| {
        format!(
            "Failed to load config: {}",
            request.config_path.unwrap_or("<preset>")
        )
    })?;
    println!("{} {}", "Config:".dimmed(), loaded.origin.label());

    let config = request.apply_overrides(loaded.config);
    let source = load_source(Path::new(request.source_path))
        .with_context(|| format!("Failed to load source: {}", request.source_path))?;
    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        request.source_path,
        &source.hash[..16]
    );

    let run = execute(request, config, &source, start)?;

    print_warnings(run.outcome.warnings());

    match &run.outcome {
        Outcome::Invalid { errors, .. } => {
            print_errors(errors);
            if let Some(path) = &run.report_path {
                println!("{} {}", "Report:".dimmed(), path);
            }
            println!(
                "\n{} Config has {} error(s) ({}ms)",
                "FAILED".red().bold(),
                errors.len(),
                run.duration_ms
            );
        }
        Outcome::Failed { error, .. } => {
            println!(
                "\n  {} [{}]: {}",
                "x".red(),
                error.code().red(),
                error.message()
            );
            if let Some(path) = &run.report_path {
                println!("{} {}", "Report:".dimmed(), path);
            }
            println!(
                "\n{} Generation failed, nothing written ({}ms)",
                "FAILED".red().bold(),
                run.duration_ms
            );
        }
        Outcome::Generated(result) => {
            let layout = &result.set.layout;
            println!(
                "\n  {} {} waveforms extracted",
                "+".green(),
                result.waveform_count
            );
            for bank in &result.set.banks {
                let sources: Vec<String> = bank
                    .waves
                    .iter()
                    .map(|w| w.source_index.to_string())
                    .collect();
                println!(
                    "  {} {:<8} {}",
                    "+".green(),
                    bank.name,
                    sources.join(" ").dimmed()
                );
            }
            println!(
                "\n{} {} banks x {} waves x {} samples ({}, {}), {} bytes",
                "Tables:".dimmed(),
                result.set.bank_count(),
                layout.waves_per_bank,
                layout.samples_per_wave(),
                run.config.integration,
                run.config.guard_mode,
                result.set.data_bytes()
            );
            println!(
                "{} {} ({})",
                "Output:".dimmed(),
                request.out_path,
                &result.output_hash[..16]
            );
            if let Some(path) = &run.report_path {
                println!("{} {}", "Report:".dimmed(), path);
            }
            println!(
                "\n{} Generated {} ({}ms)",
                "SUCCESS".green().bold(),
                result.format,
                run.duration_ms
            );
        }
    }

    Ok(run.outcome.exit_code())
}

fn print_errors(errors: &[ValidationError]) {
    if errors.is_empty() {
        return;
    }
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
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

fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
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
