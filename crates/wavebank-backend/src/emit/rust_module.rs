//! Rust module emitter.

use crate::bank::WavetableSet;

use super::{bank_summary, format_sample_rows};

fn wave_name(bank_ident: &str, slot: usize) -> String {
    format!("WT_{}_{}", bank_ident, slot)
}

fn bank_table_name(bank_ident: &str) -> String {
    format!("WAVETABLE_BANK_REF_{}", bank_ident)
}

/// Renders a set as a Rust module.
pub fn render_rust_module(set: &WavetableSet) -> String {
    let layout = &set.layout;
    let mut out = String::new();

    out.push_str("//! Pre-computed wavetable data.\n");
    out.push_str("//!\n");
    out.push_str("//! Generated by wavebank. Do not edit.\n");
    out.push_str(&format!(
        "//! Tables: {} samples, {} guard samples ({}), integration: {}.\n",
        layout.table_size, layout.guard_samples, set.guard_mode, set.integration
    ));
    out.push_str("//!\n");
    for line in bank_summary(set) {
        out.push_str(&format!("//! - {}\n", line));
    }
    out.push('\n');

    out.push_str(&format!("pub const WT_TABLE_SIZE: usize = {};\n", layout.table_size));
    out.push_str(&format!(
        "pub const WT_WAVES_PER_BANK: usize = {};\n",
        layout.waves_per_bank
    ));
    out.push_str(&format!("pub const WT_NUM_BANKS: usize = {};\n", set.bank_count()));
    out.push_str(&format!(
        "pub const WT_GUARD_SAMPLES: usize = {};\n",
        layout.guard_samples
    ));
    out.push_str("pub const WT_SAMPLES_PER_WAVE: usize = WT_TABLE_SIZE + WT_GUARD_SAMPLES;\n\n");

    out.push_str("/// One table: a period followed by its guard samples.\n");
    out.push_str("pub type Wave = [i16; WT_SAMPLES_PER_WAVE];\n");
    out.push_str("/// Bank members followed by the first member again.\n");
    out.push_str("pub type WaveBank = [&'static Wave; WT_WAVES_PER_BANK + 1];\n\n");

    for bank in &set.banks {
        let ident = bank.name.to_uppercase();
        out.push_str(&format!("// Bank {}: {}\n\n", bank.ordinal, bank.name));
        for (slot, wave) in bank.waves.iter().enumerate() {
            out.push_str(&format!("/// Legacy wave {}.\n", wave.source_index));
            out.push_str("#[rustfmt::skip]\n");
            out.push_str(&format!(
                "pub static {}: Wave = [\n",
                wave_name(&ident, slot)
            ));
            out.push_str(&format_sample_rows(&wave.samples, true));
            out.push_str("\n];\n\n");
        }
    }

    for bank in &set.banks {
        let ident = bank.name.to_uppercase();
        out.push_str(&format!(
            "pub static {}: WaveBank = [\n",
            bank_table_name(&ident)
        ));
        for slot in bank.references() {
            out.push_str(&format!("    &{},\n", wave_name(&ident, slot)));
        }
        out.push_str("];\n\n");
    }

    out.push_str("pub static WAVETABLE_BANKS: [&WaveBank; WT_NUM_BANKS] = [\n");
    for bank in &set.banks {
        out.push_str(&format!(
            "    &{},\n",
            bank_table_name(&bank.name.to_uppercase())
        ));
    }
    out.push_str("];\n\n");

    out.push_str("pub static WAVETABLE_BANK_NAMES: [&str; WT_NUM_BANKS] = [\n");
    for name in &set.bank_names {
        out.push_str(&format!("    \"{}\",\n", name));
    }
    out.push_str("];\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Bank, ProcessedWaveform, TableLayout};
    use wavebank_spec::{GuardMode, Integration};

    #[test]
    fn test_rust_module_shape() {
        let set = WavetableSet {
            banks: vec![Bank {
                name: "PWM".to_string(),
                ordinal: 0,
                waves: vec![ProcessedWaveform {
                    source_index: 64,
                    samples: vec![1, -2, 3, 1],
                }],
            }],
            bank_names: vec!["PWM".to_string()],
            layout: TableLayout {
                raw_length: 2,
                table_size: 3,
                guard_samples: 1,
                waves_per_bank: 1,
            },
            integration: Integration::Integrate,
            guard_mode: GuardMode::BankWrap,
        };

        let module = render_rust_module(&set);
        assert!(module.contains("pub const WT_NUM_BANKS: usize = 1;\n"));
        assert!(module.contains("pub static WT_PWM_0: Wave = [\n         1,     -2,      3,      1,\n];"));
        assert!(module.contains("pub static WAVETABLE_BANK_REF_PWM: WaveBank = [\n    &WT_PWM_0,\n    &WT_PWM_0,\n];"));
        assert!(module.contains("pub static WAVETABLE_BANK_NAMES: [&str; WT_NUM_BANKS] = [\n    \"PWM\",\n];"));
        assert!(module.contains("integration: integrate"));
    }
}
