//! Post-resampling strategies and final quantization.
//!
//! [`Integration::None`] stores the resampled period directly.
//! [`Integration::Integrate`] stores its DC-corrected running integral,
//! scaled to [`INTEGRATION_HEADROOM`]; a playback engine that differentiates
//! on read recovers the waveform with attenuated high-frequency content.

use wavebank_spec::Integration;

use crate::convert::SAMPLE_LIMIT;

/// Peak absolute value of an integrated table.
pub const INTEGRATION_HEADROOM: f64 = 30000.0;

/// Running sum with the straight ramp from 0 to the final sum removed,
/// normalized to [`INTEGRATION_HEADROOM`].
///
/// An all-zero result is returned unscaled.
pub fn integrate(samples: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    let cumulative: Vec<f64> = samples
        .iter()
        .map(|&s| {
            running += s;
            running
        })
        .collect();

    let n = cumulative.len();
    let last = cumulative.last().copied().unwrap_or(0.0);
    let detrended: Vec<f64> = cumulative
        .iter()
        .enumerate()
        .map(|(k, &c)| {
            let ramp = if n > 1 {
                last * k as f64 / (n - 1) as f64
            } else {
                0.0
            };
            c - ramp
        })
        .collect();

    let peak = detrended.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if peak == 0.0 {
        return detrended;
    }

    let scale = INTEGRATION_HEADROOM / peak;
    detrended.iter().map(|v| v * scale).collect()
}

/// Clips to `[-SAMPLE_LIMIT, SAMPLE_LIMIT]` and truncates toward zero.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    let limit = SAMPLE_LIMIT as f64;
    samples
        .iter()
        .map(|&v| v.clamp(-limit, limit).trunc() as i16)
        .collect()
}

/// Applies the configured strategy to a resampled period and quantizes it.
pub fn finish(resampled: &[f64], integration: Integration) -> Vec<i16> {
    match integration {
        Integration::None => quantize(resampled),
        Integration::Integrate => quantize(&integrate(resampled)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quantize_truncates_and_clips() {
        let out = quantize(&[1.9, -1.9, 40000.0, -40000.0, 0.4]);
        assert_eq!(out, vec![1, -1, 32767, -32767, 0]);
    }

    #[test]
    fn test_finish_without_integration() {
        let out = finish(&[100.7, -5.2], Integration::None);
        assert_eq!(out, vec![100, -5]);
    }

    #[test]
    fn test_integrate_square_wave() {
        let square: Vec<f64> = (0..8)
            .map(|i| if i < 4 { 1000.0 } else { -1000.0 })
            .collect();
        let out = integrate(&square);

        assert_eq!(out.len(), 8);
        let peak = out.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        assert!((peak - INTEGRATION_HEADROOM).abs() < 1e-6);
        // Triangle-like: rises then falls.
        assert!(out[3] > out[0]);
        assert!(out[7] < out[3]);
    }

    #[test]
    fn test_integrate_ends_on_ramp() {
        // Ramp removal pins the final sample to zero.
        let out = integrate(&[3.0, 1.0, -2.0, 5.0]);
        assert!(out[3].abs() < 1e-9);
    }

    #[test]
    fn test_silent_integral_unscaled() {
        let out = integrate(&[0.0; 16]);
        assert!(out.iter().all(|&v| v == 0.0));
        assert_eq!(finish(&[0.0; 16], Integration::Integrate), vec![0; 16]);
    }

    #[test]
    fn test_integrated_within_headroom() {
        let saw: Vec<f64> = (0..256).map(|i| (i as f64 - 128.0) * 256.0).collect();
        let out = finish(&saw, Integration::Integrate);
        assert!(out.iter().all(|&s| (s as f64).abs() <= INTEGRATION_HEADROOM));
    }
}
