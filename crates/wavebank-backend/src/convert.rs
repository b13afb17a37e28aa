//! Unsigned 8-bit to signed 16-bit sample conversion.

use crate::error::{WavebankError, WavebankResult};
use crate::extract::RawWaveform;

/// Midpoint of the raw unsigned sample range.
pub const RAW_MIDPOINT: i32 = 128;

/// Ratio of the signed 16-bit range to the raw 8-bit range.
pub const RAW_TO_SIGNED_SCALE: i32 = 256;

/// Symmetric clip bound for every emitted sample.
pub const SAMPLE_LIMIT: i16 = 32767;

/// A legacy waveform recentered to zero at full 16-bit scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedWaveform {
    /// Index of the legacy waveform this came from.
    pub source_index: usize,
    /// Signed samples within `[-SAMPLE_LIMIT, SAMPLE_LIMIT]`.
    pub samples: Vec<i16>,
}

/// Converts one raw sample.
///
/// # Example
/// ```
/// use wavebank_backend::convert::convert_sample;
///
/// assert_eq!(convert_sample(128), 0);
/// assert_eq!(convert_sample(192), 16384);
/// assert_eq!(convert_sample(0), -32767);
/// ```
pub fn convert_sample(raw: u8) -> i16 {
    let scaled = (raw as i32 - RAW_MIDPOINT) * RAW_TO_SIGNED_SCALE;
    let limit = SAMPLE_LIMIT as i32;
    scaled.clamp(-limit, limit) as i16
}

/// Converts a raw waveform, rejecting it if its length is not `raw_length`.
pub fn convert(raw: &RawWaveform, raw_length: usize) -> WavebankResult<ConvertedWaveform> {
    if raw.samples.len() != raw_length {
        return Err(WavebankError::WaveformLength {
            index: raw.index,
            expected: raw_length,
            actual: raw.samples.len(),
        });
    }

    Ok(ConvertedWaveform {
        source_index: raw.index,
        samples: raw.samples.iter().copied().map(convert_sample).collect(),
    })
}
