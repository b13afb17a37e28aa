//! Preset command implementation
//!
//! Prints the built-in PPG Wave 2.2 bank curation as a config file, ready
//! to be copied and edited.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use wavebank_spec::BankConfig;

use crate::output::write_atomic;

/// Run the preset command
///
/// # Arguments
/// * `out_path` - Optional file to write (default: stdout)
pub fn run(out_path: Option<&str>) -> Result<ExitCode> {
    let json = BankConfig::ppg_wave_22()
        .to_json_pretty()
        .context("Failed to serialize preset")?;

    match out_path {
        Some(path) => {
            write_atomic(Path::new(path), format!("{}\n", json).as_bytes())
                .with_context(|| format!("Failed to write preset to: {}", path))?;
            println!("{} {}", "Wrote preset:".green().bold(), path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_written_file_parses() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ppg.json");

        let code = run(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let json = std::fs::read_to_string(&path).unwrap();
        assert_eq!(BankConfig::from_json(&json).unwrap(), BankConfig::ppg_wave_22());
    }
}
