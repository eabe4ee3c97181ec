//! Arithmetic modulo a prime.

use crate::error::{OverlapError, Result};

/// The default modulus, `10^9 + 7`.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// A prime modulus.
///
/// Products go through `u128`, so any 64-bit prime is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus(u64);

impl Modulus {
    /// Wrap `p`, checking that it is prime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liboverlap::overlap::modular::Modulus;
    ///
    /// assert!(Modulus::new(1_000_000_007).is_ok());
    /// assert!(Modulus::new(1_000_000_008).is_err());
    /// ```
    pub fn new(p: u64) -> Result<Self> {
        if is_prime(p) {
            Ok(Self(p))
        } else {
            Err(OverlapError::InvalidModulus(p))
        }
    }

    /// The raw modulus.
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Reduce `x`.
    #[inline]
    pub fn reduce(self, x: u64) -> u64 {
        x % self.0
    }

    /// `(a + b) mod p` for reduced operands.
    #[inline]
    pub fn add(self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.0 as u128) as u64
    }

    /// `(a - b) mod p` for reduced operands, never negative.
    #[inline]
    pub fn sub(self, a: u64, b: u64) -> u64 {
        ((a as u128 + self.0 as u128 - b as u128) % self.0 as u128) as u64
    }

    /// `(a * b) mod p`.
    #[inline]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        mul_mod(a, b, self.0)
    }

    /// `base^exp mod p` by square-and-multiply.
    pub fn pow(self, base: u64, exp: u64) -> u64 {
        pow_mod(base, exp, self.0)
    }

    /// Multiplicative inverse by Fermat's little theorem, `x^(p-2)`.
    ///
    /// Returns `None` when `x ≡ 0 (mod p)`.
    pub fn inverse(self, x: u64) -> Option<u64> {
        let x = self.reduce(x);
        if x == 0 {
            None
        } else {
            Some(self.pow(x, self.0 - 2))
        }
    }
}

impl Default for Modulus {
    fn default() -> Self {
        Self(DEFAULT_MODULUS)
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic Miller-Rabin for 64-bit integers.
pub fn is_prime(n: u64) -> bool {
    const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }

    let mut d = n - 1;
    let mut r = 0;
    while d % 2 == 0 {
        d /= 2;
        r += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
