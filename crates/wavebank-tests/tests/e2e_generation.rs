//! End-to-End Generation Tests for wavebank
//!
//! Tests drive the CLI entry points over a synthetic 128 x 64 legacy set
//! and check the written artifacts and reports.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavebank-tests --test e2e_generation
//! ```

use std::collections::BTreeMap;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use regex::Regex;

use wavebank_backend::{generate, OutputFormat};
use wavebank_cli::commands;
use wavebank_spec::{BankConfig, BankSpec, Integration, Report};
use wavebank_tests::fixtures::{legacy_source, LegacyBankFixture};

const PPG_BANKS: [&str; 16] = [
    "UPPER_WT", "RESON1", "RESON2", "MELLOW", "BRIGHT", "HARSH", "CLIPPER", "SYNC", "PWM",
    "VOCAL1", "VOCAL2", "ORGAN", "BELL", "ALIEN", "NOISE", "SPECIAL",
];

/// Parses every per-wave array of a C header into name -> samples.
fn c_header_waves(header: &str) -> BTreeMap<String, Vec<i32>> {
    let array = Regex::new(
        r"(?s)static const int16_t (wt_\w+)\[WT_SAMPLES_PER_WAVE\] = \{(.*?)\};",
    )
    .unwrap();
    collect_arrays(&array, header)
}

/// Parses every per-wave array of a Rust module into name -> samples.
fn rust_module_waves(module: &str) -> BTreeMap<String, Vec<i32>> {
    let array = Regex::new(r"(?s)pub static (WT_\w+): Wave = \[(.*?)\];").unwrap();
    collect_arrays(&array, module)
}

fn collect_arrays(array: &Regex, text: &str) -> BTreeMap<String, Vec<i32>> {
    let number = Regex::new(r"-?\d+").unwrap();
    array
        .captures_iter(text)
        .map(|caps| {
            let samples = number
                .find_iter(&caps[2])
                .map(|m| m.as_str().parse().unwrap())
                .collect();
            (caps[1].to_string(), samples)
        })
        .collect()
}

fn read_report(out: &str) -> Report {
    let json = std::fs::read_to_string(format!("{}.report.json", out)).unwrap();
    Report::from_json(&json).unwrap()
}

// ============================================================================
// Preset generation
// ============================================================================

#[test]
fn test_preset_c_header_structure() {
    let fixture = LegacyBankFixture::new();
    let out = fixture.out("wavetables.h");

    let code = commands::generate::run(
        &fixture.source(),
        None,
        &out,
        OutputFormat::CHeader,
        false,
        false,
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let header = std::fs::read_to_string(&out).unwrap();
    assert!(header.contains("#define WT_TABLE_SIZE 256\n"));
    assert!(header.contains("#define WT_WAVES_PER_BANK 8\n"));
    assert!(header.contains("#define WT_NUM_BANKS 16\n"));
    assert!(header.contains("#define WT_GUARD_SAMPLES 4\n"));

    let waves = c_header_waves(&header);
    assert_eq!(waves.len(), 128);
    for (name, samples) in &waves {
        assert_eq!(samples.len(), 260, "{} has wrong length", name);
        assert!(
            samples.iter().all(|s| (-32767..=32767).contains(s)),
            "{} exceeds the 16-bit range",
            name
        );
    }

    let names_table = header.split("wavetable_bank_names").nth(1).unwrap();
    let quoted = Regex::new(r#""(\w+)""#).unwrap();
    let names: Vec<&str> = quoted
        .captures_iter(names_table)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();
    assert_eq!(names, PPG_BANKS.to_vec());

    let report = read_report(&out);
    assert!(report.ok);
    assert_eq!(report.bank_count, 16);
    assert_eq!(report.waves_per_bank, 8);
    assert!(report.warnings.is_empty());
    assert_eq!(
        report.output_hash.as_deref(),
        Some(blake3::hash(header.as_bytes()).to_hex().as_str())
    );
}

#[test]
fn test_preset_guards_wrap_within_bank() {
    let source = legacy_source(128, 64);
    let result = generate(&source, &BankConfig::ppg_wave_22(), OutputFormat::CHeader).unwrap();
    let header = String::from_utf8(result.artifact).unwrap();
    let waves = c_header_waves(&header);

    for bank in PPG_BANKS {
        let ident = bank.to_lowercase();
        for slot in 0..8 {
            let wave = &waves[&format!("wt_{}_{}", ident, slot)];
            let next = &waves[&format!("wt_{}_{}", ident, (slot + 1) % 8)];
            assert_eq!(&wave[256..], &next[..4], "{} slot {}", bank, slot);
        }
    }
}

#[test]
fn test_rust_module_carries_same_samples() {
    let source = legacy_source(128, 64);
    let config = BankConfig::ppg_wave_22();

    let header = generate(&source, &config, OutputFormat::CHeader).unwrap();
    let module = generate(&source, &config, OutputFormat::RustModule).unwrap();
    assert_eq!(header.set, module.set);

    let c_waves = c_header_waves(&String::from_utf8(header.artifact).unwrap());
    let rs_waves = rust_module_waves(&String::from_utf8(module.artifact).unwrap());
    assert_eq!(rs_waves.len(), c_waves.len());
    for (name, samples) in &c_waves {
        assert_eq!(&rs_waves[&name.to_uppercase()], samples);
    }
}

// ============================================================================
// Options and recoverable diagnostics
// ============================================================================

#[test]
fn test_integrate_flag() {
    let fixture = LegacyBankFixture::new();
    let out = fixture.out("integrated.h");

    let code = commands::generate::run(
        &fixture.source(),
        None,
        &out,
        OutputFormat::CHeader,
        true,
        false,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let report = read_report(&out);
    assert_eq!(report.integration, Integration::Integrate);
    assert_eq!(report.warnings[0].code, "W001");

    let header = std::fs::read_to_string(&out).unwrap();
    assert!(header.contains(" * Integration: integrate\n"));
    for samples in c_header_waves(&header).values() {
        assert!(samples.iter().all(|s| s.abs() <= 30000));
    }
}

#[test]
fn test_short_source_substitutes_wave_zero() {
    // 20 full waves plus a 10-sample remainder.
    let mut source = legacy_source(20, 64);
    source = source.replace("};\n", "    1, 2, 3, 4, 5, 6, 7, 8, 9, 10,\n};\n");
    let fixture = LegacyBankFixture::with_source(&source);
    let config = BankConfig::new(vec![BankSpec::new("SAW", vec![0, 8, 16, 24, 32, 40, 48, 19])]);
    let config_path = fixture.write_config("banks.json", &config);
    let out = fixture.out("wavetables.h");

    let code = commands::generate::run(
        &fixture.source(),
        Some(&config_path),
        &out,
        OutputFormat::CHeader,
        false,
        false,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let report = read_report(&out);
    let codes: Vec<&str> = report.warnings.iter().map(|w| w.code.as_str()).collect();
    assert_eq!(codes, vec!["W003", "W004", "W004", "W004", "W004"]);
    assert_eq!(report.warnings[1].path.as_deref(), Some("banks[0].waves[3]"));

    let header = std::fs::read_to_string(&out).unwrap();
    let waves = c_header_waves(&header);
    assert_eq!(waves["wt_saw_3"][..256], waves["wt_saw_0"][..256]);
    assert!(header.contains("// Legacy wave 19\n"));
}

#[test]
fn test_preset_file_matches_builtin() {
    let fixture = LegacyBankFixture::new();
    let preset_path = fixture.out("ppg.json");
    assert_eq!(
        commands::preset::run(Some(&preset_path)).unwrap(),
        ExitCode::SUCCESS
    );
    assert_eq!(
        commands::validate::run(&preset_path, true).unwrap(),
        ExitCode::SUCCESS
    );

    let from_file = fixture.out("from_file.h");
    let builtin = fixture.out("builtin.h");
    for (config, out) in [(Some(preset_path.as_str()), &from_file), (None, &builtin)] {
        let code = commands::generate::run(
            &fixture.source(),
            config,
            out,
            OutputFormat::CHeader,
            false,
            false,
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    assert_eq!(
        std::fs::read(&from_file).unwrap(),
        std::fs::read(&builtin).unwrap()
    );
    assert_eq!(
        read_report(&from_file).config_hash,
        read_report(&builtin).config_hash
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_out_of_range_value_fails_without_artifact() {
    let source = legacy_source(16, 64).replace("/* wave 3 */", "/* wave 3 */ 256,");
    let fixture = LegacyBankFixture::with_source(&source);
    let out = fixture.out("wavetables.h");

    let code = commands::generate::run(
        &fixture.source(),
        None,
        &out,
        OutputFormat::CHeader,
        false,
        false,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::from(2));
    assert!(!std::path::Path::new(&out).exists());

    let report = read_report(&out);
    assert!(!report.ok);
    assert_eq!(report.errors[0].code, "WAVEBANK_001");
    assert!(report.errors[0].message.contains("256"));
}

#[test]
fn test_invalid_config_fails_before_extraction() {
    let fixture = LegacyBankFixture::with_source("not a legacy source");
    let config = BankConfig::new(vec![BankSpec::new("SAW", vec![0, 1, 2])]);
    let config_path = fixture.write_config("banks.json", &config);
    let out = fixture.out("wavetables.h");

    let code = commands::generate::run(
        &fixture.source(),
        Some(&config_path),
        &out,
        OutputFormat::CHeader,
        false,
        false,
        true,
    )
    .unwrap();
    assert_eq!(code, ExitCode::from(1));

    let report = read_report(&out);
    assert_eq!(report.errors[0].code, "E006");
    assert_eq!(report.source_hash.len(), 64);
}
