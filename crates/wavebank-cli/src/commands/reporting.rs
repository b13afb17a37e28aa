//! Report helpers shared by commands.

use anyhow::{Context, Result};
use std::path::Path;
use wavebank_spec::{Report, ReportBuilder, ReportError, ReportWarning};
use wavebank_spec::{ValidationError, ValidationWarning};

use crate::output::write_atomic;

/// Generator identifier recorded in reports.
pub(crate) fn generator_version() -> String {
    format!("wavebank-cli v{}", env!("CARGO_PKG_VERSION"))
}

pub(crate) fn apply_validation_messages(
    mut builder: ReportBuilder,
    errors: &[ValidationError],
    warnings: &[ValidationWarning],
) -> ReportBuilder {
    for err in errors {
        builder = builder.error(ReportError::from_validation_error(err));
    }
    for warn in warnings {
        builder = builder.warning(ReportWarning::from_validation_warning(warn));
    }
    builder
}

/// Report path for an artifact: `<artifact>.report.json` beside it.
pub(crate) fn report_path(artifact_path: &str) -> String {
    let path = Path::new(artifact_path);
    let dir = path.parent().unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wavetables".to_string());
    dir.join(Report::filename(&name))
        .to_string_lossy()
        .to_string()
}

pub(crate) fn write_report(report: &Report, path: &str) -> Result<()> {
    let json = report.to_json_pretty().context("Failed to serialize report")?;
    write_atomic(Path::new(path), json.as_bytes())
        .with_context(|| format!("Failed to write report to: {}", path))?;
    Ok(())
}
