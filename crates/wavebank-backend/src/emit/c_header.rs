//! C header emitter.

use crate::bank::WavetableSet;

use super::{bank_summary, format_sample_rows};

const RULE: &str =
    "// ============================================================================";

fn wave_name(bank_ident: &str, slot: usize) -> String {
    format!("wt_{}_{}", bank_ident, slot)
}

fn bank_table_name(bank_ident: &str) -> String {
    format!("wavetable_bank_ref_{}", bank_ident)
}

/// Renders a set as a C header.
pub fn render_c_header(set: &WavetableSet) -> String {
    let layout = &set.layout;
    let mut out = String::new();

    out.push_str("/**\n");
    out.push_str(" * @file wavetables.h\n");
    out.push_str(" * @brief Pre-computed wavetable data\n");
    out.push_str(" *\n");
    out.push_str(" * Generated by wavebank. Do not edit.\n");
    out.push_str(&format!(
        " * Source waves: {} samples, 8-bit unsigned\n",
        layout.raw_length
    ));
    out.push_str(&format!(
        " * Tables: {} samples, 16-bit signed, {} guard samples ({})\n",
        layout.table_size, layout.guard_samples, set.guard_mode
    ));
    out.push_str(&format!(" * Integration: {}\n", set.integration));
    out.push_str(" *\n");
    out.push_str(&format!(
        " * {} banks with {} waves each:\n",
        set.bank_count(),
        layout.waves_per_bank
    ));
    for line in bank_summary(set) {
        out.push_str(&format!(" * - {}\n", line));
    }
    out.push_str(" */\n\n");

    out.push_str("#pragma once\n\n");
    out.push_str("#include <stdint.h>\n\n");
    out.push_str("// Wavetable dimensions\n");
    out.push_str(&format!("#define WT_TABLE_SIZE {}\n", layout.table_size));
    out.push_str(&format!(
        "#define WT_WAVES_PER_BANK {}\n",
        layout.waves_per_bank
    ));
    out.push_str(&format!("#define WT_NUM_BANKS {}\n", set.bank_count()));
    out.push_str(&format!(
        "#define WT_GUARD_SAMPLES {}\n",
        layout.guard_samples
    ));
    out.push_str("#define WT_SAMPLES_PER_WAVE (WT_TABLE_SIZE + WT_GUARD_SAMPLES)\n\n");

    for bank in &set.banks {
        let ident = bank.identifier();
        out.push_str(&format!(
            "{}\n// BANK {}: {}\n{}\n\n",
            RULE, bank.ordinal, bank.name, RULE
        ));
        for (slot, wave) in bank.waves.iter().enumerate() {
            out.push_str(&format!("// Legacy wave {}\n", wave.source_index));
            out.push_str(&format!(
                "static const int16_t {}[WT_SAMPLES_PER_WAVE] = {{\n",
                wave_name(&ident, slot)
            ));
            out.push_str(&format_sample_rows(&wave.samples, false));
            out.push_str("\n};\n\n");
        }
    }

    out.push_str(&format!("{}\n// Bank reference tables\n{}\n\n", RULE, RULE));
    for bank in &set.banks {
        let ident = bank.identifier();
        out.push_str(&format!(
            "static const int16_t* const {}[WT_WAVES_PER_BANK + 1] = {{\n",
            bank_table_name(&ident)
        ));
        let refs = bank.references();
        let members = refs.len().saturating_sub(1);
        for &slot in &refs[..members] {
            out.push_str(&format!("    {},\n", wave_name(&ident, slot)));
        }
        if let Some(&first) = refs.last() {
            out.push_str(&format!(
                "    {}  // Guard for interpolation\n",
                wave_name(&ident, first)
            ));
        }
        out.push_str("};\n\n");
    }

    out.push_str(&format!("{}\n// Master bank table\n{}\n", RULE, RULE));
    out.push_str("static const int16_t* const* const wavetable_banks[WT_NUM_BANKS] = {\n");
    for bank in &set.banks {
        out.push_str(&format!("    {},\n", bank_table_name(&bank.identifier())));
    }
    out.push_str("};\n\n");

    out.push_str("// Bank names for display (max 8 chars)\n");
    out.push_str("static const char* const wavetable_bank_names[WT_NUM_BANKS] = {\n");
    for name in &set.bank_names {
        out.push_str(&format!("    \"{}\",\n", name));
    }
    out.push_str("};\n");

    out
}
