//! Bank configuration validation.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::{BankConfig, Integration, BANK_NAME_BUDGET, CONFIG_VERSION};
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};

/// Minimum raw waveform length; the not-a-knot spline needs four knots.
pub const MIN_RAW_LENGTH: usize = 4;

fn bank_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid bank name regex"))
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// Checks that a bank name is display-safe and fits the display budget.
///
/// # Example
/// ```
/// use wavebank_spec::validation::is_valid_bank_name;
///
/// assert!(is_valid_bank_name("UPPER_WT"));
/// assert!(!is_valid_bank_name("upper"));
/// assert!(!is_valid_bank_name("RESONANT1"));
/// ```
pub fn is_valid_bank_name(name: &str) -> bool {
    bank_name_regex().is_match(name) && name.len() <= BANK_NAME_BUDGET
}

/// Validates a bank configuration.
///
/// Checks the layout constants, the bank names, and the wave count of
/// every bank. Wave indices are not range-checked here: the legacy set
/// size is only known after extraction.
pub fn validate_config(config: &BankConfig) -> ValidationResult {
    let mut result = ValidationResult::success();

    if config.config_version != CONFIG_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedConfigVersion,
            format!(
                "config_version must be {}, got {}",
                CONFIG_VERSION, config.config_version
            ),
            "config_version",
        ));
    }

    if !identifier_regex().is_match(&config.source_array) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSourceArray,
            format!("'{}' is not a valid array identifier", config.source_array),
            "source_array",
        ));
    }

    validate_layout(config, &mut result);
    validate_banks(config, &mut result);

    if config.integration == Integration::Integrate {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::IntegrationEnabled,
            "tables will hold integrated waveforms; the oscillator must differentiate on read",
            "integration",
        ));
    }

    result
}

fn validate_layout(config: &BankConfig, result: &mut ValidationResult) {
    if config.raw_length < MIN_RAW_LENGTH {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidRawLength,
            format!(
                "raw_length must be at least {}, got {}",
                MIN_RAW_LENGTH, config.raw_length
            ),
            "raw_length",
        ));
    }

    if config.table_size <= config.raw_length {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTableSize,
            format!(
                "table_size ({}) must be greater than raw_length ({})",
                config.table_size, config.raw_length
            ),
            "table_size",
        ));
    }

    if config.waves_per_bank == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::WaveCountMismatch,
            "waves_per_bank must be at least 1",
            "waves_per_bank",
        ));
    }

    if config.guard_samples == 0 || config.guard_samples > config.table_size {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGuardCount,
            format!(
                "guard_samples must be between 1 and table_size ({}), got {}",
                config.table_size, config.guard_samples
            ),
            "guard_samples",
        ));
    }
}

fn validate_banks(config: &BankConfig, result: &mut ValidationResult) {
    if config.banks.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoBanks,
            "at least one bank is required",
            "banks",
        ));
        return;
    }

    let mut seen_names = HashSet::new();
    for (i, bank) in config.banks.iter().enumerate() {
        let name_path = format!("banks[{}].name", i);

        if !bank_name_regex().is_match(&bank.name) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidBankName,
                format!(
                    "bank name '{}' must match [A-Z][A-Z0-9_]*",
                    bank.name
                ),
                name_path.clone(),
            ));
        } else if bank.name.len() > BANK_NAME_BUDGET {
            result.add_error(ValidationError::with_path(
                ErrorCode::BankNameTooLong,
                format!(
                    "bank name '{}' is {} characters; the display budget is {}",
                    bank.name,
                    bank.name.len(),
                    BANK_NAME_BUDGET
                ),
                name_path.clone(),
            ));
        }

        if !seen_names.insert(bank.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateBankName,
                format!("bank name '{}' is declared more than once", bank.name),
                name_path,
            ));
        }

        if bank.waves.len() != config.waves_per_bank {
            result.add_error(ValidationError::with_path(
                ErrorCode::WaveCountMismatch,
                format!(
                    "bank '{}' has {} waves, expected {}",
                    bank.name,
                    bank.waves.len(),
                    config.waves_per_bank
                ),
                format!("banks[{}].waves", i),
            ));
        }

        let mut seen_waves = HashSet::new();
        for (slot, &wave) in bank.waves.iter().enumerate() {
            if !seen_waves.insert(wave) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::RepeatedWave,
                    format!("bank '{}' uses legacy wave {} more than once", bank.name, wave),
                    format!("banks[{}].waves[{}]", i, slot),
                ));
            }
        }
    }
}
