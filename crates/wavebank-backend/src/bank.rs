//! Bank assembly.
//!
//! Resolves every configured wave index, runs it through the per-wave
//! pipeline (convert, resample, strategy, guard) and collects the results in
//! configured order. The resulting [`WavetableSet`] keeps the bank table and
//! the bank-name table parallel: position `i` of both comes from
//! `config.banks[i]`.

use wavebank_spec::{BankConfig, BankSpec, GuardMode, Integration, ValidationWarning, WarningCode};

use crate::convert::convert;
use crate::error::{WavebankError, WavebankResult};
use crate::extract::RawWaveform;
use crate::guard::{append_bank_guards, append_guard};
use crate::integrate::finish;
use crate::resample::resample;

/// Table shape constants shared by every wave in a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Samples per legacy waveform.
    pub raw_length: usize,
    /// Samples per table (one period).
    pub table_size: usize,
    /// Guard samples after each table.
    pub guard_samples: usize,
    /// Waves per bank.
    pub waves_per_bank: usize,
}

impl TableLayout {
    /// Takes the layout from a config.
    pub fn from_config(config: &BankConfig) -> Self {
        Self {
            raw_length: config.raw_length,
            table_size: config.table_size,
            guard_samples: config.guard_samples,
            waves_per_bank: config.waves_per_bank,
        }
    }

    /// Samples stored per wave (table plus guard).
    pub fn samples_per_wave(&self) -> usize {
        self.table_size + self.guard_samples
    }
}

/// A finished table: one period followed by guard samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedWaveform {
    /// Legacy waveform this table was built from.
    pub source_index: usize,
    /// `table_size + guard_samples` samples.
    pub samples: Vec<i16>,
}

impl ProcessedWaveform {
    /// The period without its guard.
    pub fn body(&self, table_size: usize) -> &[i16] {
        &self.samples[..table_size.min(self.samples.len())]
    }

    /// The trailing guard samples.
    pub fn guard(&self, table_size: usize) -> &[i16] {
        &self.samples[table_size.min(self.samples.len())..]
    }
}

/// A named, ordered group of tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// Display name.
    pub name: String,
    /// Position in the set.
    pub ordinal: usize,
    /// Members in configured order.
    pub waves: Vec<ProcessedWaveform>,
}

impl Bank {
    /// Member slots referenced by the bank table: every member in order,
    /// then the first member again as the morph-wrap guard.
    pub fn references(&self) -> Vec<usize> {
        let mut refs: Vec<usize> = (0..self.waves.len()).collect();
        if !self.waves.is_empty() {
            refs.push(0);
        }
        refs
    }

    /// Lower-case identifier stem used for emitted array names.
    pub fn identifier(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The generated banks and their parallel name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavetableSet {
    /// Banks in configured order.
    pub banks: Vec<Bank>,
    /// Display names, parallel to `banks`.
    pub bank_names: Vec<String>,
    /// Shape shared by every table.
    pub layout: TableLayout,
    /// Strategy the tables were built with.
    pub integration: Integration,
    /// Guard form the tables were built with.
    pub guard_mode: GuardMode,
}

impl WavetableSet {
    /// Number of banks.
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// Looks up a bank by position.
    pub fn bank(&self, ordinal: usize) -> Option<&Bank> {
        self.banks.get(ordinal)
    }

    /// Looks up a bank by display name.
    pub fn bank_by_name(&self, name: &str) -> Option<&Bank> {
        self.bank_names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.banks.get(i))
    }

    /// Total sample data size in bytes (16-bit samples).
    pub fn data_bytes(&self) -> usize {
        self.banks
            .iter()
            .flat_map(|b| b.waves.iter())
            .map(|w| w.samples.len() * std::mem::size_of::<i16>())
            .sum()
    }
}

/// Result of assembling a set.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// The assembled set.
    pub set: WavetableSet,
    /// Recoverable diagnostics (substituted indices).
    pub warnings: Vec<ValidationWarning>,
}

/// Converts, resamples and applies the configured strategy to one legacy
/// waveform. The result is one period without guard samples.
pub fn process_wave(raw: &RawWaveform, config: &BankConfig) -> WavebankResult<Vec<i16>> {
    let converted = convert(raw, config.raw_length)?;
    let resampled = resample(&converted.samples, config.table_size)?;
    Ok(finish(&resampled, config.integration))
}

/// Resolves one bank's configured indices against a legacy set of
/// `available` waveforms.
///
/// Indices past the end resolve to 0 and raise W004 at
/// `banks[<ordinal>].waves[<slot>]`.
pub fn resolve_indices(
    ordinal: usize,
    spec: &BankSpec,
    available: usize,
) -> (Vec<usize>, Vec<ValidationWarning>) {
    let mut warnings = Vec::new();
    let resolved = spec
        .waves
        .iter()
        .enumerate()
        .map(|(slot, &requested)| {
            if requested < available {
                return requested;
            }
            warnings.push(ValidationWarning::with_path(
                WarningCode::IndexOutOfRange,
                format!(
                    "bank '{}' wave {} not found ({} available), using wave 0",
                    spec.name, requested, available
                ),
                format!("banks[{}].waves[{}]", ordinal, slot),
            ));
            0
        })
        .collect();
    (resolved, warnings)
}

/// Builds every configured bank from the extracted legacy set.
///
/// Out-of-range indices are replaced by waveform 0 with a W004 warning.
pub fn assemble(waveforms: &[RawWaveform], config: &BankConfig) -> WavebankResult<Assembly> {
    if waveforms.is_empty() {
        return Err(WavebankError::source_format(
            "legacy set holds no waveforms",
        ));
    }

    let mut warnings = Vec::new();
    let mut banks = Vec::with_capacity(config.banks.len());

    for (ordinal, spec) in config.banks.iter().enumerate() {
        let (sources, bank_warnings) = resolve_indices(ordinal, spec, waveforms.len());
        warnings.extend(bank_warnings);

        let bodies = sources
            .iter()
            .map(|&index| process_wave(&waveforms[index], config))
            .collect::<WavebankResult<Vec<_>>>()?;

        let tables = match config.guard_mode {
            GuardMode::BankWrap => append_bank_guards(&bodies, config.guard_samples)?,
            GuardMode::SelfWrap => bodies
                .iter()
                .map(|body| append_guard(body, config.guard_samples))
                .collect::<WavebankResult<Vec<_>>>()?,
        };

        let waves = sources
            .into_iter()
            .zip(tables)
            .map(|(index, samples)| ProcessedWaveform {
                source_index: waveforms[index].index,
                samples,
            })
            .collect();

        banks.push(Bank {
            name: spec.name.clone(),
            ordinal,
            waves,
        });
    }

    let bank_names = banks.iter().map(|b| b.name.clone()).collect();

    Ok(Assembly {
        set: WavetableSet {
            banks,
            bank_names,
            layout: TableLayout::from_config(config),
            integration: config.integration,
            guard_mode: config.guard_mode,
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavebank_spec::BankSpec;

    fn legacy_set(count: usize) -> Vec<RawWaveform> {
        (0..count)
            .map(|index| RawWaveform {
                index,
                samples: vec![0, 64, 128, (index % 256) as u8],
            })
            .collect()
    }

    fn small_config(banks: Vec<BankSpec>) -> BankConfig {
        BankConfig::new(banks).with_layout(4, 8, 2, 2)
    }

    #[test]
    fn test_bank_order_and_names_parallel() {
        let config = small_config(vec![
            BankSpec::new("ZULU", vec![3, 2]),
            BankSpec::new("ALPHA", vec![0, 1]),
        ]);
        let assembly = assemble(&legacy_set(4), &config).unwrap();
        let set = assembly.set;

        assert_eq!(set.bank_names, vec!["ZULU", "ALPHA"]);
        assert_eq!(set.banks.len(), set.bank_names.len());
        assert_eq!(set.banks[0].waves[0].source_index, 3);
        assert_eq!(set.banks[0].waves[1].source_index, 2);
        assert_eq!(set.bank_by_name("ALPHA").unwrap().ordinal, 1);
        assert!(set.bank_by_name("BETA").is_none());
        assert!(assembly.warnings.is_empty());
    }

    #[test]
    fn test_bank_wrap_guards() {
        let config = small_config(vec![BankSpec::new("A", vec![1, 2])]);
        let set = assemble(&legacy_set(3), &config).unwrap().set;
        let bank = &set.banks[0];

        assert_eq!(bank.waves[0].guard(8), &bank.waves[1].samples[..2]);
        assert_eq!(bank.waves[1].guard(8), &bank.waves[0].samples[..2]);
    }

    #[test]
    fn test_self_wrap_guards() {
        let config = small_config(vec![BankSpec::new("A", vec![1, 2])])
            .with_guard_mode(GuardMode::SelfWrap);
        let set = assemble(&legacy_set(3), &config).unwrap().set;

        for wave in &set.banks[0].waves {
            assert_eq!(wave.samples.len(), 10);
            assert_eq!(wave.guard(8), &wave.samples[..2]);
        }
    }

    #[test]
    fn test_out_of_range_substitutes_zero() {
        let config = small_config(vec![BankSpec::new("A", vec![1, 999])]);
        let legacy = legacy_set(4);
        let assembly = assemble(&legacy, &config).unwrap();

        assert_eq!(assembly.warnings.len(), 1);
        assert_eq!(assembly.warnings[0].code, WarningCode::IndexOutOfRange);
        assert_eq!(
            assembly.warnings[0].path.as_deref(),
            Some("banks[0].waves[1]")
        );

        let substituted = &assembly.set.banks[0].waves[1];
        assert_eq!(substituted.source_index, 0);
        assert_eq!(
            substituted.body(8),
            process_wave(&legacy[0], &config).unwrap().as_slice()
        );
    }

    #[test]
    fn test_resolve_indices() {
        let spec = BankSpec::new("A", vec![2, 7, 0, 4]);
        let (resolved, warnings) = resolve_indices(3, &spec, 4);

        assert_eq!(resolved, vec![2, 0, 0, 0]);
        let paths: Vec<_> = warnings.iter().filter_map(|w| w.path.as_deref()).collect();
        assert_eq!(paths, vec!["banks[3].waves[1]", "banks[3].waves[3]"]);
    }

    #[test]
    fn test_references_end_with_first_member() {
        let config = small_config(vec![BankSpec::new("A", vec![0, 1])]);
        let set = assemble(&legacy_set(2), &config).unwrap().set;
        assert_eq!(set.banks[0].references(), vec![0, 1, 0]);
        assert_eq!(set.banks[0].identifier(), "a");
    }

    #[test]
    fn test_data_bytes() {
        let config = small_config(vec![
            BankSpec::new("A", vec![0, 1]),
            BankSpec::new("B", vec![1, 0]),
        ]);
        let set = assemble(&legacy_set(2), &config).unwrap().set;
        assert_eq!(set.data_bytes(), 2 * 2 * 10 * 2);
    }

    #[test]
    fn test_empty_legacy_set() {
        let config = small_config(vec![BankSpec::new("A", vec![0, 1])]);
        assert!(assemble(&[], &config).is_err());
    }
}
