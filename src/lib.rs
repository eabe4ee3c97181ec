//! # liboverlap
//!
//! Expected overlap cost of a random string chain, computed with a
//! generalized suffix automaton.
//!
//! Given strings `s_1..s_n` placed in a uniformly random order, the cost of
//! the chain is the sum, over adjacent pairs `(a, b)`, of the length of the
//! longest suffix of `a` that is also a prefix of `b`. This crate computes the
//! expected cost modulo a prime in time linear in the total input length,
//! instead of comparing all `n²` pairs.
//!
//! ## Example
//!
//! ```rust
//! use liboverlap::prelude::*;
//!
//! // F(ab, ba) = 1 and F(ba, ab) = 1, so the expected cost is 2 / 2 = 1.
//! assert_eq!(expected_overlap(&["ab", "ba"]).unwrap(), 1);
//!
//! let config = OverlapConfig::builder().modulus(998_244_353).build().unwrap();
//! let report = ExpectedOverlap::new(config)
//!     .unwrap()
//!     .compute(&["abc", "bcd", "cde"])
//!     .unwrap();
//! assert_eq!(report.distinct_sum, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod config;
pub mod error;
pub mod overlap;

/// Seeded random string sets for tests and benchmarks
#[cfg(feature = "rand")]
pub mod corpus;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        GeneralizedSuffixAutomaton, GsaBuilder, SeparatorPolicy, StateId, Symbol, ROOT,
    };
    pub use crate::config::{OverlapConfig, OverlapConfigBuilder};
    pub use crate::error::{OverlapError, Result};
    pub use crate::overlap::naive::expected_overlap_naive;
    pub use crate::overlap::{expected_overlap, ExpectedOverlap, Modulus, OverlapReport};
}
