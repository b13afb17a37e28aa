//! Wavebank Bank Configuration Library
//!
//! This crate provides types, validation, hashing, and reports for wavebank
//! bank configurations. A config is a JSON document that declares how a
//! legacy 8-bit waveform source is laid out and which legacy waves are
//! curated into which named banks.
//!
//! # Example
//!
//! ```
//! use wavebank_spec::{BankConfig, BankSpec, Integration};
//! use wavebank_spec::validation::validate_config;
//! use wavebank_spec::hash::canonical_config_hash;
//!
//! let config = BankConfig::new(vec![
//!     BankSpec::new("SAW", (0..8).collect()),
//!     BankSpec::new("SQUARE", (8..16).collect()),
//! ])
//! .with_integration(Integration::None);
//!
//! let result = validate_config(&config);
//! assert!(result.is_ok());
//!
//! let hash = canonical_config_hash(&config).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Config types and layout defaults
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical hashing
//! - [`preset`]: Built-in bank curations
//! - [`report`]: Report types and builder for generation results
//! - [`validation`]: Config validation functions

pub mod config;
pub mod error;
pub mod hash;
pub mod preset;
pub mod report;
pub mod validation;

pub use config::{
    BankConfig, BankSpec, GuardMode, Integration, BANK_NAME_BUDGET, CONFIG_VERSION,
    DEFAULT_GUARD_SAMPLES, DEFAULT_RAW_LENGTH, DEFAULT_SOURCE_ARRAY, DEFAULT_TABLE_SIZE,
    DEFAULT_WAVES_PER_BANK,
};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use report::{Report, ReportBuilder, ReportError, ReportWarning, REPORT_VERSION};
