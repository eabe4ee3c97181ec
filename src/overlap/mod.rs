//! Expected overlap cost of a random string chain.
//!
//! For strings `s_1..s_n` arranged in a uniformly random order, the cost of
//! the chain is the sum of `F(a, b)` over adjacent pairs, where `F(a, b)` is
//! the length of the longest suffix of `a` that is also a prefix of `b`. By
//! linearity of expectation:
//!
//! ```text
//! E[cost] = (Σ_{k≠l} F(s_k, s_l)) / n
//! ```
//!
//! The pipeline is:
//!
//! 1. Validate the input against [`OverlapConfig`]
//! 2. Build a [`GeneralizedSuffixAutomaton`] over all strings
//! 3. Count prefix weights and suffix occurrences per state ([`counter`])
//! 4. Fold the counts into modular sums ([`aggregate`](aggregate::aggregate))
//!
//! # Example
//!
//! ```rust
//! use liboverlap::overlap::expected_overlap;
//!
//! assert_eq!(expected_overlap(&["ab", "ba"]).unwrap(), 1);
//! assert_eq!(expected_overlap(&["aa", "aa"]).unwrap(), 2);
//! ```

pub mod aggregate;
pub mod counter;
pub mod modular;
pub mod naive;

pub use aggregate::OverlapSums;
pub use counter::OccurrenceCounts;
pub use modular::Modulus;

use crate::automaton::{GeneralizedSuffixAutomaton, GsaBuilder};
use crate::config::OverlapConfig;
use crate::error::{OverlapError, Result};

/// Result of one batch computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapReport {
    /// Expected chain cost modulo the configured modulus.
    pub expected: u64,
    /// Σ F over all ordered pairs, self-pairs included (mod p).
    pub pair_sum: u64,
    /// Self-pair contribution Σ |s_i| (mod p).
    pub diagonal_sum: u64,
    /// Σ F over ordered pairs of distinct indices (mod p).
    pub distinct_sum: u64,
    /// Number of strings.
    pub string_count: usize,
    /// Sum of string lengths.
    pub total_length: usize,
    /// Number of automaton states.
    pub state_count: usize,
}

/// Batch calculator for the expected overlap cost.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedOverlap {
    config: OverlapConfig,
    modulus: Modulus,
}

impl ExpectedOverlap {
    /// Create a calculator, validating `config`.
    pub fn new(config: OverlapConfig) -> Result<Self> {
        let modulus = config.validate()?;
        Ok(Self { config, modulus })
    }

    /// The configuration in use.
    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// The validated modulus results are reduced by.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Compute the expected overlap cost of `strings`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liboverlap::config::OverlapConfig;
    /// use liboverlap::overlap::ExpectedOverlap;
    ///
    /// let calc = ExpectedOverlap::new(OverlapConfig::default()).unwrap();
    /// let report = calc.compute(&["abc", "bcd", "cde"]).unwrap();
    /// assert_eq!(report.distinct_sum, 5);
    /// assert_eq!(report.expected, 666_666_673); // 5/3 mod 1e9+7
    /// ```
    pub fn compute<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<OverlapReport> {
        let total_length = self.check_input(strings)?;

        let gsa = self.construct(strings)?;
        let counts = OccurrenceCounts::compute(&gsa, strings)?;
        let sums = aggregate::aggregate(&gsa, &counts, self.modulus)?;

        Ok(OverlapReport {
            expected: sums.expected,
            pair_sum: sums.pair_sum,
            diagonal_sum: sums.diagonal_sum,
            distinct_sum: sums.distinct_sum,
            string_count: strings.len(),
            total_length,
            state_count: gsa.state_count(),
        })
    }

    /// Validate `strings` and build their automaton.
    pub fn build<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<GeneralizedSuffixAutomaton> {
        self.check_input(strings)?;
        self.construct(strings)
    }

    fn construct<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<GeneralizedSuffixAutomaton> {
        let gsa = GsaBuilder::build(strings, self.config.separators);
        if self.config.validate_automaton {
            gsa.validate()?;
        }
        Ok(gsa)
    }

    /// Reject inputs the computation is not defined for, returning the total
    /// length.
    fn check_input<S: AsRef<[u8]>>(&self, strings: &[S]) -> Result<usize> {
        let n = strings.len();
        if n < 2 {
            return Err(OverlapError::TooFewStrings(n));
        }
        if n > self.config.max_strings {
            return Err(OverlapError::TooManyStrings {
                count: n,
                limit: self.config.max_strings,
            });
        }
        if let Some(index) = strings.iter().position(|s| s.as_ref().is_empty()) {
            return Err(OverlapError::EmptyString { index });
        }

        let total: usize = strings.iter().map(|s| s.as_ref().len()).sum();
        if total > self.config.max_total_length {
            return Err(OverlapError::CapacityExceeded {
                total,
                capacity: self.config.max_total_length,
            });
        }
        if self.modulus.reduce(n as u64) == 0 {
            return Err(OverlapError::NonInvertibleCount {
                count: n,
                modulus: self.modulus.value(),
            });
        }
        Ok(total)
    }
}

impl Default for ExpectedOverlap {
    fn default() -> Self {
        Self {
            config: OverlapConfig::default(),
            modulus: Modulus::default(),
        }
    }
}

/// Expected overlap cost of `strings` modulo `10^9 + 7`, default settings.
pub fn expected_overlap<S: AsRef<[u8]>>(strings: &[S]) -> Result<u64> {
    ExpectedOverlap::default()
        .compute(strings)
        .map(|report| report.expected)
}
