//! Random string sets for validation and benchmarking.
//!
//! Overlap statistics depend heavily on how similar the strings are, so the
//! generators cover both ends:
//!
//! - **Independent strings**: each byte drawn uniformly from the alphabet
//! - **Windows**: substrings cut from one shared random text, so that many
//!   pairs overlap
//!
//! ## Usage
//!
//! This module is only available with the `rand` feature:
//!
//! ```rust
//! use liboverlap::corpus::StringSetGenerator;
//!
//! let mut gen = StringSetGenerator::new(42).alphabet(b"ab");
//! let strings = gen.independent(6, 1, 6);
//! let similar = gen.windows(1_000, 20, 5_000);
//! ```

pub mod generator;

pub use generator::StringSetGenerator;
