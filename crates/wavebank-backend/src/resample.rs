//! Periodic cubic resampling.
//!
//! A waveform of length L is one period of a cyclic signal. Fitting a cubic
//! spline over just those L knots leaves the seam between sample L-1 and
//! sample 0 unconstrained, so the input is first extended with its own
//! leading samples. The spline is then fitted over L + [`PERIODIC_EXTENSION`]
//! knots with not-a-knot end conditions and evaluated at phases `i / T` for
//! `i` in `0..T`.

use crate::error::{WavebankError, WavebankResult};

/// Leading samples copied onto the tail before fitting.
pub const PERIODIC_EXTENSION: usize = 4;

/// Not-a-knot cubic spline over one extended period.
///
/// Knots sit at unit spacing in sample-index space; knot `k` corresponds to
/// phase `k / period`.
#[derive(Debug, Clone)]
pub struct PeriodicSpline {
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
    period: usize,
}

impl PeriodicSpline {
    /// Fits a spline over one period of samples.
    pub fn fit(samples: &[i16]) -> WavebankResult<Self> {
        if samples.is_empty() {
            return Err(WavebankError::invalid_config(
                "cannot resample an empty waveform",
            ));
        }

        let period = samples.len();
        let values: Vec<f64> = (0..period + PERIODIC_EXTENSION)
            .map(|k| samples[k % period] as f64)
            .collect();
        let second_derivatives = not_a_knot_second_derivatives(&values);

        Ok(Self {
            values,
            second_derivatives,
            period,
        })
    }

    /// Number of samples in one period of the source.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Evaluates the spline at a phase, where phase 1.0 is one full period.
    ///
    /// Phases are clamped to the fitted range `[0, (L + 3) / L]`.
    pub fn evaluate(&self, phase: f64) -> f64 {
        let last = (self.values.len() - 1) as f64;
        let u = (phase * self.period as f64).clamp(0.0, last);
        self.evaluate_index(u)
    }

    fn evaluate_index(&self, u: f64) -> f64 {
        let segment = (u.floor() as usize).min(self.values.len() - 2);
        let t = u - segment as f64;
        let s = 1.0 - t;

        let y0 = self.values[segment];
        let y1 = self.values[segment + 1];
        let m0 = self.second_derivatives[segment];
        let m1 = self.second_derivatives[segment + 1];

        // Linear part plus curvature correction; exact at knots.
        y0 * s + y1 * t + ((s * s * s - s) * m0 + (t * t * t - t) * m1) / 6.0
    }
}

/// Solves for the knot second derivatives of a unit-spaced not-a-knot spline.
///
/// Interior rows are `M[i-1] + 4 M[i] + M[i+1] = 6 (y[i-1] - 2 y[i] + y[i+1])`.
/// Not-a-knot continuity of the third derivative at the second and
/// penultimate knots gives `M[0] = 2 M[1] - M[2]`, which collapses the first
/// and last interior rows to `6 M[1] = r[1]` and `6 M[n-2] = r[n-2]`.
fn not_a_knot_second_derivatives(y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut m = vec![0.0; n];
    if n < 4 {
        // Too few knots for curvature; the spline degenerates to linear.
        return m;
    }

    let rhs: Vec<f64> = (0..n)
        .map(|i| {
            if i == 0 || i == n - 1 {
                0.0
            } else {
                6.0 * (y[i - 1] - 2.0 * y[i] + y[i + 1])
            }
        })
        .collect();

    m[1] = rhs[1] / 6.0;
    m[n - 2] = rhs[n - 2] / 6.0;

    // Tridiagonal system for M[2..=n-3] (Thomas algorithm).
    let inner = n - 4;
    if inner > 0 {
        let mut c_prime = vec![0.0; inner];
        let mut d_prime = vec![0.0; inner];

        for k in 0..inner {
            let row = k + 2;
            let mut d = rhs[row];
            if row == 2 {
                d -= m[1];
            }
            if row == n - 3 {
                d -= m[n - 2];
            }
            let upper = if k + 1 < inner { 1.0 } else { 0.0 };

            if k == 0 {
                c_prime[k] = upper / 4.0;
                d_prime[k] = d / 4.0;
            } else {
                let denom = 4.0 - c_prime[k - 1];
                c_prime[k] = upper / denom;
                d_prime[k] = (d - d_prime[k - 1]) / denom;
            }
        }

        m[inner + 1] = d_prime[inner - 1];
        for k in (0..inner - 1).rev() {
            m[k + 2] = d_prime[k] - c_prime[k] * m[k + 3];
        }
    }

    m[0] = 2.0 * m[1] - m[2];
    m[n - 1] = 2.0 * m[n - 2] - m[n - 3];
    m
}

/// Resamples one period of samples to `target` samples.
///
/// Output `i` is the periodic spline at phase `i / target`. Values are not
/// clipped.
pub fn resample(samples: &[i16], target: usize) -> WavebankResult<Vec<f64>> {
    let spline = PeriodicSpline::fit(samples)?;
    let period = spline.period() as f64;
    let target_f = target as f64;

    Ok((0..target)
        .map(|i| spline.evaluate_index(i as f64 * period / target_f))
        .collect())
}
