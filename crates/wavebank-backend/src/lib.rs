//! Wavebank Conversion Pipeline
//!
//! This crate turns a legacy bank of short 8-bit cyclic waveforms into
//! higher-resolution, signed, interpolation-ready wavetables grouped into
//! named morphing banks.
//!
//! # Overview
//!
//! Each configured wave flows through the same stages:
//!
//! - **Extract** - locate the legacy array and split it into raw waveforms
//! - **Convert** - recenter unsigned samples to signed 16-bit full scale
//! - **Resample** - periodic not-a-knot cubic spline up to the table size
//! - **Finish** - optional integration, then clip and truncate to `i16`
//! - **Guard** - append leading samples of the next bank member (or itself)
//!
//! The bank assembler collects finished tables in configured order and the
//! emitters render them as a C header or a Rust module.
//!
//! # Determinism
//!
//! Every stage is a pure function of its input. Given the same source and
//! config the artifact is byte-identical across runs, and the BLAKE3 output
//! hash in [`GenerateResult`] is stable.
//!
//! # Example
//!
//! ```
//! use wavebank_backend::{generate, OutputFormat};
//! use wavebank_spec::{BankConfig, BankSpec};
//!
//! let source = "const uint8_t ppg_waveforms_data[] = { 0, 64, 128, 192 };";
//! let config = BankConfig::new(vec![BankSpec::new("SAW", vec![0])])
//!     .with_layout(4, 8, 2, 1);
//!
//! let result = generate(source, &config, OutputFormat::CHeader).unwrap();
//! assert_eq!(result.set.bank_names, vec!["SAW"]);
//! assert!(result.warnings.is_empty());
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`extract`] - Legacy array parsing
//! - [`convert`] - Sample conversion
//! - [`resample`] - Periodic cubic resampling
//! - [`integrate`] - Integration strategy and quantization
//! - [`guard`] - Guard sample appending
//! - [`bank`] - Bank assembly
//! - [`emit`] - Artifact rendering

pub mod bank;
pub mod convert;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod guard;
pub mod integrate;
pub mod resample;

pub use bank::{
    assemble, resolve_indices, Assembly, Bank, ProcessedWaveform, TableLayout, WavetableSet,
};
pub use emit::{render, OutputFormat};
pub use error::{WavebankError, WavebankResult};
pub use extract::{extract_waveforms, Extraction, RawWaveform};
pub use generate::{generate, GenerateResult};
