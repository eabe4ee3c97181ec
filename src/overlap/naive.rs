//! Direct all-pairs computation, used as a reference oracle.
//!
//! Runs in `O(n² · maxLen²)` and is only meant for small inputs and
//! differential testing.

use super::modular::Modulus;
use crate::error::{OverlapError, Result};

/// Length of the longest suffix of `x` that is also a prefix of `y`.
///
/// # Examples
///
/// ```rust
/// use liboverlap::overlap::naive::overlap;
///
/// assert_eq!(overlap(b"abc", b"bcd"), 2);
/// assert_eq!(overlap(b"aa", b"aa"), 2);
/// assert_eq!(overlap(b"abc", b"xyz"), 0);
/// ```
pub fn overlap(x: &[u8], y: &[u8]) -> usize {
    (1..=x.len().min(y.len()))
        .rev()
        .find(|&m| x[x.len() - m..] == y[..m])
        .unwrap_or(0)
}

/// Σ F(s_k, s_l) over ordered pairs of distinct indices, without reduction.
pub fn distinct_pair_sum<S: AsRef<[u8]>>(strings: &[S]) -> u128 {
    let mut sum = 0u128;
    for (k, x) in strings.iter().enumerate() {
        for (l, y) in strings.iter().enumerate() {
            if k != l {
                sum += overlap(x.as_ref(), y.as_ref()) as u128;
            }
        }
    }
    sum
}

/// Expected chain cost modulo `modulus`, computed by brute force.
pub fn expected_overlap_naive<S: AsRef<[u8]>>(strings: &[S], modulus: Modulus) -> Result<u64> {
    let n = strings.len();
    let inverse = modulus
        .inverse(n as u64)
        .ok_or(OverlapError::NonInvertibleCount {
            count: n,
            modulus: modulus.value(),
        })?;
    let sum = (distinct_pair_sum(strings) % modulus.value() as u128) as u64;
    Ok(modulus.mul(sum, inverse))
}
