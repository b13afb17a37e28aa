#![no_main]

use libfuzzer_sys::fuzz_target;
use wavebank_backend::{generate, OutputFormat};
use wavebank_spec::{BankConfig, BankSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let config = BankConfig::new(vec![BankSpec::new("FUZZ", vec![0, 1, 7, 300])])
        .with_layout(4, 16, 2, 4);
    let _ = generate(source, &config, OutputFormat::CHeader);
});
