//! Bank configuration types.
//!
//! A [`BankConfig`] is the complete, build-time description of one wavetable
//! generation run: how the legacy source is laid out, the target table
//! shape, the processing strategy, and the ordered bank selection.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Current config version.
pub const CONFIG_VERSION: u32 = 1;

/// Default name of the legacy array declaration.
pub const DEFAULT_SOURCE_ARRAY: &str = "ppg_waveforms_data";

/// Default number of samples per legacy waveform.
pub const DEFAULT_RAW_LENGTH: usize = 64;

/// Default number of samples per generated table (one period).
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Default number of guard samples appended to each table.
pub const DEFAULT_GUARD_SAMPLES: usize = 4;

/// Default number of waves per bank.
pub const DEFAULT_WAVES_PER_BANK: usize = 8;

/// Maximum bank name length (downstream display constraint).
pub const BANK_NAME_BUDGET: usize = 8;

/// Processing strategy applied after resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    /// Store the resampled waveform directly.
    #[default]
    None,
    /// Store the DC-corrected running integral; the consumer differentiates on read.
    Integrate,
}

impl Integration {
    /// Returns the integration mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Integration::None => "none",
            Integration::Integrate => "integrate",
        }
    }
}

impl std::fmt::Display for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where guard samples are copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    /// Guard duplicates the next bank member's leading samples; the last
    /// member wraps to the first.
    #[default]
    BankWrap,
    /// Guard duplicates the wave's own leading samples.
    SelfWrap,
}

impl GuardMode {
    /// Returns the guard mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardMode::BankWrap => "bank_wrap",
            GuardMode::SelfWrap => "self_wrap",
        }
    }
}

impl std::fmt::Display for GuardMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named bank: an ordered selection of legacy wave indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankSpec {
    /// Display name (upper-case, at most [`BANK_NAME_BUDGET`] characters).
    pub name: String,
    /// Indices into the legacy waveform set, in morph order.
    pub waves: Vec<usize>,
}

impl BankSpec {
    /// Creates a new bank selection.
    pub fn new(name: impl Into<String>, waves: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            waves,
        }
    }
}

/// Complete configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankConfig {
    /// Schema version; must be 1.
    pub config_version: u32,

    /// Name of the legacy array declaration to extract.
    #[serde(default = "default_source_array")]
    pub source_array: String,

    /// Samples per legacy waveform.
    #[serde(default = "default_raw_length")]
    pub raw_length: usize,

    /// Samples per generated table, excluding guard samples.
    #[serde(default = "default_table_size")]
    pub table_size: usize,

    /// Guard samples appended after each table.
    #[serde(default = "default_guard_samples")]
    pub guard_samples: usize,

    /// Waves in every bank.
    #[serde(default = "default_waves_per_bank")]
    pub waves_per_bank: usize,

    /// Post-resampling strategy.
    #[serde(default)]
    pub integration: Integration,

    /// Guard sample source.
    #[serde(default)]
    pub guard_mode: GuardMode,

    /// Banks in output order.
    pub banks: Vec<BankSpec>,
}

fn default_source_array() -> String {
    DEFAULT_SOURCE_ARRAY.to_string()
}

fn default_raw_length() -> usize {
    DEFAULT_RAW_LENGTH
}

fn default_table_size() -> usize {
    DEFAULT_TABLE_SIZE
}

fn default_guard_samples() -> usize {
    DEFAULT_GUARD_SAMPLES
}

fn default_waves_per_bank() -> usize {
    DEFAULT_WAVES_PER_BANK
}

impl BankConfig {
    /// Creates a config with default layout and the given banks.
    pub fn new(banks: Vec<BankSpec>) -> Self {
        Self {
            config_version: CONFIG_VERSION,
            source_array: default_source_array(),
            raw_length: DEFAULT_RAW_LENGTH,
            table_size: DEFAULT_TABLE_SIZE,
            guard_samples: DEFAULT_GUARD_SAMPLES,
            waves_per_bank: DEFAULT_WAVES_PER_BANK,
            integration: Integration::default(),
            guard_mode: GuardMode::default(),
            banks,
        }
    }

    /// Sets the integration strategy.
    pub fn with_integration(mut self, integration: Integration) -> Self {
        self.integration = integration;
        self
    }

    /// Sets the guard mode.
    pub fn with_guard_mode(mut self, guard_mode: GuardMode) -> Self {
        self.guard_mode = guard_mode;
        self
    }

    /// Overrides the table layout.
    pub fn with_layout(
        mut self,
        raw_length: usize,
        table_size: usize,
        guard_samples: usize,
        waves_per_bank: usize,
    ) -> Self {
        self.raw_length = raw_length;
        self.table_size = table_size;
        self.guard_samples = guard_samples;
        self.waves_per_bank = waves_per_bank;
        self
    }

    /// Number of samples stored per wave (table plus guard).
    pub fn samples_per_wave(&self) -> usize {
        self.table_size + self.guard_samples
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the config to a JSON value (for hashing).
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }
}
