//! Test fixture utilities for synthetic legacy sources.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use wavebank_spec::{BankConfig, DEFAULT_SOURCE_ARRAY};

/// One synthetic legacy sample. Waves cycle through saw, pulse, triangle
/// and a fixed pseudo-random pattern, each shifted by the wave index so
/// every wave differs from its neighbours.
fn legacy_sample(wave: usize, i: usize, len: usize) -> u8 {
    let phase = i * 256 / len;
    match wave % 4 {
        0 => ((phase + wave * 8) % 256) as u8,
        1 => {
            let duty = len * (1 + wave % 7) / 8;
            if i < duty {
                224
            } else {
                32
            }
        }
        2 => {
            let tri = if phase < 128 { phase * 2 } else { (255 - phase) * 2 };
            (tri * (8 + wave % 8) / 16).min(255) as u8
        }
        _ => {
            let mut x = (wave as u32).wrapping_mul(2_654_435_761) ^ (i as u32);
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x & 0xFF) as u8
        }
    }
}

/// Renders a legacy C source holding `count` waveforms of `raw_length`
/// samples in the default array.
pub fn legacy_source(count: usize, raw_length: usize) -> String {
    let mut out = String::new();
    out.push_str("// Legacy PPG waveform dump - test fixture\n");
    out.push_str("#include <avr/pgmspace.h>\n\n");
    out.push_str(&format!(
        "const uint8_t {}[] PROGMEM = {{\n",
        DEFAULT_SOURCE_ARRAY
    ));
    for wave in 0..count {
        out.push_str(&format!("    /* wave {} */\n", wave));
        for row in (0..raw_length).collect::<Vec<_>>().chunks(16) {
            let values: Vec<String> = row
                .iter()
                .map(|&i| legacy_sample(wave, i, raw_length).to_string())
                .collect();
            out.push_str(&format!("    {},\n", values.join(", ")));
        }
    }
    out.push_str("};\n");
    out
}

/// A temporary project holding a legacy source and optional config.
pub struct LegacyBankFixture {
    pub root: TempDir,
    pub source_path: PathBuf,
}

impl LegacyBankFixture {
    /// Creates a fixture with the full 128 x 64 legacy set.
    pub fn new() -> Self {
        Self::with_source(&legacy_source(128, 64))
    }

    /// Creates a fixture with the given source text.
    pub fn with_source(source: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let source_path = root.path().join("ppg_data.c");
        fs::write(&source_path, source).expect("Failed to write legacy source");
        Self { root, source_path }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Source path as a string, for CLI entry points.
    pub fn source(&self) -> String {
        self.source_path.to_string_lossy().to_string()
    }

    /// Writes a bank config and returns its path.
    pub fn write_config(&self, name: &str, config: &BankConfig) -> String {
        let path = self.path().join(name);
        let json = config.to_json_pretty().expect("Failed to serialize config");
        fs::write(&path, json).expect("Failed to write config");
        path.to_string_lossy().to_string()
    }

    /// Path for an output file inside the fixture.
    pub fn out(&self, name: &str) -> String {
        self.path().join(name).to_string_lossy().to_string()
    }
}

impl Default for LegacyBankFixture {
    fn default() -> Self {
        Self::new()
    }
}
