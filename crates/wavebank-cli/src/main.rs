//! wavebank CLI - converts legacy 8-bit waveform banks into wavetables
//!
//! This binary provides commands for generating wavetable artifacts,
//! validating bank configs and inspecting legacy sources.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavebank_cli::commands;

/// wavebank - Legacy waveform bank to wavetable converter
#[derive(Parser)]
#[command(name = "wavebank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a wavetable artifact from a legacy waveform source
    Generate {
        /// Path to the legacy C source holding the waveform array
        #[arg(short, long)]
        source: String,

        /// Bank config file (default: built-in PPG Wave 2.2 preset)
        #[arg(short, long)]
        config: Option<String>,

        /// Artifact path to write
        #[arg(short, long)]
        out: String,

        /// Artifact syntax
        #[arg(long, default_value = "c-header", value_parser = ["c-header", "rust-module"])]
        format: String,

        /// Integrate each table (overrides the config)
        #[arg(long)]
        integrate: bool,

        /// Do not write <artifact>.report.json
        #[arg(long)]
        no_report: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a bank config without generating anything
    Validate {
        /// Path to the bank config file
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show what a legacy source holds and how banks resolve against it
    Inspect {
        /// Path to the legacy C source holding the waveform array
        #[arg(short, long)]
        source: String,

        /// Bank config file (default: built-in PPG Wave 2.2 preset)
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in PPG Wave 2.2 bank config
    Preset {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            source,
            config,
            out,
            format,
            integrate,
            no_report,
            json,
        } => {
            let format = commands::generate::parse_format(&format)
                .expect("clap should have validated format");
            commands::generate::run(
                &source,
                config.as_deref(),
                &out,
                format,
                integrate,
                no_report,
                json,
            )
        }
        Commands::Validate { config, json } => commands::validate::run(&config, json),
        Commands::Inspect {
            source,
            config,
            json,
        } => commands::inspect::run(&source, config.as_deref(), json),
        Commands::Preset { out } => commands::preset::run(out.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
