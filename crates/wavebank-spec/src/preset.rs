//! Built-in bank curations.

use crate::config::{BankConfig, BankSpec};

/// Bank names and first legacy wave of the PPG Wave 2.2 curation.
///
/// Each bank takes eight consecutive waves starting at the listed index.
const PPG_BANKS: [(&str, usize); 16] = [
    ("UPPER_WT", 0),
    ("RESON1", 8),
    ("RESON2", 16),
    ("MELLOW", 24),
    ("BRIGHT", 32),
    ("HARSH", 40),
    ("CLIPPER", 48),
    ("SYNC", 56),
    ("PWM", 64),
    ("VOCAL1", 72),
    ("VOCAL2", 80),
    ("ORGAN", 88),
    ("BELL", 96),
    ("ALIEN", 104),
    ("NOISE", 112),
    ("SPECIAL", 120),
];

impl BankConfig {
    /// The PPG Wave 2.2 curation: 16 banks of 8 waves over legacy waves 0-127,
    /// 64-sample sources resampled to 256 samples with 4 guard samples.
    pub fn ppg_wave_22() -> Self {
        let banks = PPG_BANKS
            .iter()
            .map(|&(name, first)| BankSpec::new(name, (first..first + 8).collect()))
            .collect();
        BankConfig::new(banks)
    }
}
