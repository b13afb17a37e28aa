//! Legacy waveform extraction.
//!
//! The legacy bank is stored as a compilable C array:
//!
//! ```text
//! const uint8_t ppg_waveforms_data[] PROGMEM = {
//!     // wave 0
//!     128, 131, 134, ...
//! };
//! ```
//!
//! Extraction locates the named declaration, drops commentary, reads every
//! numeric token in order and splits the flat stream into fixed-length
//! waveforms.

use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;
use wavebank_spec::{BankConfig, ValidationWarning, WarningCode};

use crate::error::{WavebankError, WavebankResult};

/// One legacy waveform, as read from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWaveform {
    /// Position in the legacy set.
    pub index: usize,
    /// Unsigned 8-bit samples, one full period.
    pub samples: Vec<u8>,
}

/// Result of extracting a legacy source.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Complete waveforms in source order.
    pub waveforms: Vec<RawWaveform>,
    /// Total numeric tokens read from the array body.
    pub token_count: usize,
    /// Non-fatal diagnostics (dropped trailing samples).
    pub warnings: Vec<ValidationWarning>,
}

fn comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("valid comment regex"))
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[0-9][0-9A-Za-z_]*\b").expect("valid token regex")
    })
}

/// Removes `//` line comments and `/* */` block comments.
pub fn strip_comments(source: &str) -> String {
    comment_regex().replace_all(source, " ").into_owned()
}

/// Returns the text between the opening brace of the named array and its
/// closing brace.
fn array_body<'a>(source: &'a str, array_name: &str) -> WavebankResult<&'a str> {
    let pattern = format!(
        r"\b{}\s*\[[^\]]*\][^=;{{}}]*=\s*\{{",
        regex::escape(array_name)
    );
    let decl = Regex::new(&pattern)
        .map_err(|e| WavebankError::source_format(format!("bad array name: {}", e)))?;

    let start = decl
        .find(source)
        .ok_or_else(|| {
            WavebankError::source_format(format!("array '{}' not found", array_name))
        })?
        .end();

    let rest = &source[start..];
    let end = rest.find('}').ok_or_else(|| {
        WavebankError::source_format(format!("array '{}' is not terminated", array_name))
    })?;
    Ok(&rest[..end])
}

/// Parses one integer literal: decimal or `0x` hex, with an optional C
/// `u`/`l` suffix.
fn parse_token(token: &str) -> WavebankResult<u8> {
    let digits = token.trim_end_matches(['u', 'U', 'l', 'L']);
    let value = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    };

    match value {
        Ok(v) if v <= u8::MAX as u64 => Ok(v as u8),
        Ok(_) => Err(out_of_range(token)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(out_of_range(token)),
        Err(_) => Err(WavebankError::source_format(format!(
            "'{}' is not an integer literal",
            token
        ))),
    }
}

fn out_of_range(token: &str) -> WavebankError {
    WavebankError::source_format(format!(
        "value '{}' is outside the raw sample range 0-255",
        token
    ))
}

/// Parses the numeric tokens of the named array, in textual order.
pub fn extract_samples(source: &str, array_name: &str) -> WavebankResult<Vec<u8>> {
    let stripped = strip_comments(source);
    let body = array_body(&stripped, array_name)?;
    token_regex()
        .find_iter(body)
        .map(|m| parse_token(m.as_str()))
        .collect()
}

/// Extracts the legacy waveform set described by `config`.
///
/// Fails with [`WavebankError::SourceFormat`] when the array is missing,
/// unterminated, holds an out-of-range value, or contains no complete
/// waveform. A trailing partial waveform is dropped with a W003 warning.
pub fn extract_waveforms(source: &str, config: &BankConfig) -> WavebankResult<Extraction> {
    let raw_length = config.raw_length;
    if raw_length == 0 {
        return Err(WavebankError::invalid_config("raw_length must be non-zero"));
    }

    let samples = extract_samples(source, &config.source_array)?;
    let token_count = samples.len();

    let waveforms: Vec<RawWaveform> = samples
        .chunks_exact(raw_length)
        .enumerate()
        .map(|(index, chunk)| RawWaveform {
            index,
            samples: chunk.to_vec(),
        })
        .collect();

    if waveforms.is_empty() {
        return Err(WavebankError::source_format(format!(
            "array '{}' holds {} values, fewer than one {}-sample waveform",
            config.source_array, token_count, raw_length
        )));
    }

    let mut warnings = Vec::new();
    let remainder = token_count % raw_length;
    if remainder != 0 {
        warnings.push(ValidationWarning::new(
            WarningCode::WaveformLength,
            format!(
                "dropped trailing partial waveform {} ({} of {} samples)",
                waveforms.len(),
                remainder,
                raw_length
            ),
        ));
    }

    Ok(Extraction {
        waveforms,
        token_count,
        warnings,
    })
}
