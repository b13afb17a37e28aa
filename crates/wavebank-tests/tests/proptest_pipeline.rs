//! Property-based pipeline tests for wavebank using proptest.
//!
//! These tests check that extraction never panics on arbitrary text and
//! that every stage keeps its output inside the documented bounds.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavebank-tests --test proptest_pipeline
//! ```

use proptest::prelude::*;

use wavebank_backend::convert::convert_sample;
use wavebank_backend::integrate::{finish, INTEGRATION_HEADROOM};
use wavebank_backend::resample::resample;
use wavebank_backend::{extract_waveforms, generate, OutputFormat};
use wavebank_spec::validation::is_valid_bank_name;
use wavebank_spec::{BankConfig, BankSpec, Integration, WarningCode};

fn source_from(values: &[u8]) -> String {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!(
        "const uint8_t ppg_waveforms_data[] = {{ {} }};\n",
        body.join(", ")
    )
}

proptest! {
    /// Arbitrary text never panics the extractor.
    #[test]
    fn extraction_never_panics(text in "\\PC{0,400}") {
        let config = BankConfig::ppg_wave_22();
        let _ = extract_waveforms(&text, &config);
    }

    /// Arbitrary array bodies never panic either.
    #[test]
    fn array_body_never_panics(body in "[0-9a-fxA-FX ,/*\\n-]{0,200}") {
        let text = format!("const uint8_t ppg_waveforms_data[] = {{{}}};", body);
        let _ = extract_waveforms(&text, &BankConfig::ppg_wave_22());
    }

    /// Every complete waveform is kept, in order, and the remainder dropped.
    #[test]
    fn extraction_chunks_values(values in prop::collection::vec(any::<u8>(), 4..64)) {
        let config = BankConfig::new(vec![]).with_layout(4, 8, 2, 2);
        let extraction = extract_waveforms(&source_from(&values), &config).unwrap();

        prop_assert_eq!(extraction.token_count, values.len());
        prop_assert_eq!(extraction.waveforms.len(), values.len() / 4);
        prop_assert_eq!(extraction.warnings.len(), usize::from(values.len() % 4 != 0));
        for (i, wave) in extraction.waveforms.iter().enumerate() {
            prop_assert_eq!(wave.index, i);
            prop_assert_eq!(&wave.samples[..], &values[i * 4..i * 4 + 4]);
        }
    }

    /// Conversion is monotonic and stays inside the signed range.
    #[test]
    fn conversion_bounded(a in any::<u8>(), b in any::<u8>()) {
        let (sa, sb) = (convert_sample(a), convert_sample(b));
        prop_assert!(sa >= -32767);
        if a <= b {
            prop_assert!(sa <= sb);
        }
    }

    /// Resampled and finished tables stay inside the signed range, and
    /// integrated tables inside the headroom.
    #[test]
    fn finished_tables_bounded(raw in prop::collection::vec(any::<u8>(), 4..=64)) {
        let signed: Vec<i16> = raw.iter().map(|&v| convert_sample(v)).collect();
        let resampled = resample(&signed, 256).unwrap();
        prop_assert_eq!(resampled.len(), 256);

        let plain = finish(&resampled, Integration::None);
        prop_assert!(plain.iter().all(|&s| s >= -32767));

        let integrated = finish(&resampled, Integration::Integrate);
        let headroom = INTEGRATION_HEADROOM as i16;
        prop_assert!(integrated.iter().all(|&s| (-headroom..=headroom).contains(&s)));
    }

    /// Names that fit the display budget pass validation.
    #[test]
    fn short_upper_names_valid(name in "[A-Z][A-Z0-9_]{0,7}") {
        prop_assert!(is_valid_bank_name(&name));
    }

    /// Names past the display budget fail.
    #[test]
    fn long_names_invalid(name in "[A-Z][A-Z0-9_]{8,20}") {
        prop_assert!(!is_valid_bank_name(&name));
    }

    /// Any selection of indices generates; out-of-range ones only warn.
    #[test]
    fn any_indices_generate(waves in prop::collection::vec(0usize..40, 2)) {
        let values: Vec<u8> = (0..64u8).map(|v| v.wrapping_mul(37)).collect();
        let config = BankConfig::new(vec![BankSpec::new("A", waves.clone())])
            .with_layout(4, 8, 2, 2);

        let result = generate(&source_from(&values), &config, OutputFormat::CHeader).unwrap();
        let out_of_range = waves.iter().filter(|&&w| w >= 16).count();
        let substituted = result
            .warnings
            .iter()
            .filter(|w| w.code == WarningCode::IndexOutOfRange)
            .count();
        prop_assert_eq!(substituted, out_of_range);
        prop_assert_eq!(result.waveform_count, 16);
    }
}
