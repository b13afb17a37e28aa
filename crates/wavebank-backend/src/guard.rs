//! Interpolation guard samples.
//!
//! A reader interpolating near the end of a table may read up to `guard`
//! samples past it. Standalone tables wrap to their own start; tables inside
//! a bank wrap to the next member so morphing reads stay continuous.

use crate::error::{WavebankError, WavebankResult};

/// Appends the first `guard` samples of `body` to itself.
///
/// # Example
/// ```
/// use wavebank_backend::guard::append_guard;
///
/// let table = append_guard(&[1, 2, 3, 4], 2).unwrap();
/// assert_eq!(table, vec![1, 2, 3, 4, 1, 2]);
/// ```
pub fn append_guard(body: &[i16], guard: usize) -> WavebankResult<Vec<i16>> {
    check_guard(body, guard)?;
    let mut out = Vec::with_capacity(body.len() + guard);
    out.extend_from_slice(body);
    out.extend_from_slice(&body[..guard]);
    Ok(out)
}

/// Appends to member `i` the first `guard` samples of member `(i + 1) % n`.
///
/// The last member wraps to the first.
pub fn append_bank_guards(bodies: &[Vec<i16>], guard: usize) -> WavebankResult<Vec<Vec<i16>>> {
    for body in bodies {
        check_guard(body, guard)?;
    }

    let n = bodies.len();
    Ok(bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let next = &bodies[(i + 1) % n];
            let mut out = Vec::with_capacity(body.len() + guard);
            out.extend_from_slice(body);
            out.extend_from_slice(&next[..guard]);
            out
        })
        .collect())
}

fn check_guard(body: &[i16], guard: usize) -> WavebankResult<()> {
    if guard > body.len() {
        return Err(WavebankError::GuardTooLong {
            guard,
            len: body.len(),
        });
    }
    Ok(())
}
