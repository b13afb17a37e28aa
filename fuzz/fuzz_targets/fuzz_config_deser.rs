#![no_main]

use libfuzzer_sys::fuzz_target;
use wavebank_spec::validation::validate_config;
use wavebank_spec::BankConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = BankConfig::from_json(json) {
        let _ = validate_config(&config);
        let _ = serde_json::to_string(&config);
    }
});
