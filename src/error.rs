//! Error types for overlap computation.

use thiserror::Error;

/// Errors that can occur while validating input or computing the expected
/// overlap cost.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlapError {
    /// Fewer than two strings were supplied.
    ///
    /// A chain needs at least one adjacent pair.
    #[error("At least 2 strings are required, got {0}")]
    TooFewStrings(usize),

    /// More strings were supplied than the configuration allows.
    #[error("Too many strings: {count} exceeds the configured limit of {limit}")]
    TooManyStrings {
        /// Number of strings supplied
        count: usize,
        /// Configured limit
        limit: usize,
    },

    /// One of the strings is empty.
    #[error("String {index} is empty")]
    EmptyString {
        /// Position of the offending string in the input
        index: usize,
    },

    /// The total input length exceeds the configured capacity.
    ///
    /// The state arena is sized from this bound, so the input is rejected
    /// before construction begins.
    #[error("Total input length {total} exceeds the configured capacity of {capacity}")]
    CapacityExceeded {
        /// Sum of all string lengths
        total: usize,
        /// Configured maximum
        capacity: usize,
    },

    /// The configured modulus is not a prime number.
    #[error("Modulus {0} is not prime")]
    InvalidModulus(u64),

    /// The string count has no inverse modulo the configured modulus.
    #[error("String count {count} has no inverse modulo {modulus}")]
    NonInvertibleCount {
        /// Number of strings
        count: usize,
        /// Configured modulus
        modulus: u64,
    },

    /// A configuration limit is zero.
    #[error("Configuration value `{0}` must be greater than zero")]
    ZeroLimit(&'static str),

    /// An automaton invariant does not hold.
    ///
    /// This indicates a construction or counting bug and is never recovered
    /// from.
    #[error("Automaton invariant violated: {0}")]
    InvariantViolation(String),
}

/// A specialized `Result` type for overlap computations.
pub type Result<T> = std::result::Result<T, OverlapError>;
