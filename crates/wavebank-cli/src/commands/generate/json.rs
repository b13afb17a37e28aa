//! Machine-readable JSON output for the generate command.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::{execute, GenerateRequest, Outcome};
use crate::commands::json_output::{
    backend_error_to_json, input_error_to_json, print_json, validation_error_to_json,
    validation_warning_to_json, GenerateOutput, GenerateResult, JsonError, JsonWarning,
};
use crate::input::{load_config, load_source};

/// Run generate with machine-readable JSON output
pub(super) fn run_json(request: &GenerateRequest<'_>) -> Result<ExitCode> {
    let start = Instant::now();

    let config = match load_config(request.config_path()) {
        Ok(loaded) => request.apply_overrides(loaded.config),
        Err(e) => {
            let output = GenerateOutput::failure(vec![input_error_to_json(&e)], vec![], None, None);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let source = match load_source(Path::new(request.source_path)) {
        Ok(source) => source,
        Err(e) => {
            let output = GenerateOutput::failure(vec![input_error_to_json(&e)], vec![], None, None);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let run = execute(request, config, &source, start)?;

    let warnings: Vec<JsonWarning> = run
        .outcome
        .warnings()
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let output = match &run.outcome {
        Outcome::Invalid { errors, .. } => {
            let errors: Vec<JsonError> = errors.iter().map(validation_error_to_json).collect();
            GenerateOutput::failure(
                errors,
                warnings,
                Some(run.config_hash.clone()),
                Some(run.source_hash.clone()),
            )
        }
        Outcome::Failed { error, .. } => GenerateOutput::failure(
            vec![backend_error_to_json(error)],
            warnings,
            Some(run.config_hash.clone()),
            Some(run.source_hash.clone()),
        ),
        Outcome::Generated(result) => GenerateOutput {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(GenerateResult {
                output_path: request.out_path.to_string(),
                format: result.format.to_string(),
                output_hash: result.output_hash.clone(),
                bank_count: result.set.bank_count(),
                waves_per_bank: result.set.layout.waves_per_bank,
                samples_per_wave: result.set.layout.samples_per_wave(),
                waveform_count: result.waveform_count,
                data_bytes: result.set.data_bytes(),
                report_path: run.report_path.clone(),
                duration_ms: run.duration_ms,
            }),
            config_hash: Some(run.config_hash.clone()),
            source_hash: Some(run.source_hash.clone()),
        },
    };

    print_json(&output)?;
    Ok(run.outcome.exit_code())
}
