//! Configuration for overlap computations.
//!
//! [`OverlapConfig`] carries the modulus, the input limits used to size the
//! state arena, and construction options. Use [`OverlapConfig::default`] for
//! the standard settings or [`OverlapConfigBuilder`] to override them:
//!
//! ```rust
//! use liboverlap::config::OverlapConfig;
//! use liboverlap::automaton::SeparatorPolicy;
//!
//! let config = OverlapConfig::builder()
//!     .modulus(998_244_353)
//!     .separators(SeparatorPolicy::Omit)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.modulus, 998_244_353);
//! ```

use crate::automaton::SeparatorPolicy;
use crate::error::{OverlapError, Result};
use crate::overlap::modular::{Modulus, DEFAULT_MODULUS};

/// Default cap on the sum of string lengths.
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 1_000_000;

/// Default cap on the number of strings.
pub const DEFAULT_MAX_STRINGS: usize = 200_000;

/// Settings for [`ExpectedOverlap`](crate::overlap::ExpectedOverlap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OverlapConfig {
    /// Prime modulus the result is reduced by.
    pub modulus: u64,
    /// Maximum sum of string lengths.
    pub max_total_length: usize,
    /// Maximum number of strings.
    pub max_strings: usize,
    /// What to feed between strings during construction.
    pub separators: SeparatorPolicy,
    /// Run [`validate`](crate::automaton::GeneralizedSuffixAutomaton::validate)
    /// on the automaton before counting.
    pub validate_automaton: bool,
}

impl OverlapConfig {
    /// Start a builder from the default settings.
    pub fn builder() -> OverlapConfigBuilder {
        OverlapConfigBuilder::new()
    }

    /// Check the settings, returning the validated modulus.
    pub fn validate(&self) -> Result<Modulus> {
        if self.max_total_length == 0 {
            return Err(OverlapError::ZeroLimit("max_total_length"));
        }
        if self.max_strings == 0 {
            return Err(OverlapError::ZeroLimit("max_strings"));
        }
        Modulus::new(self.modulus)
    }
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
            max_strings: DEFAULT_MAX_STRINGS,
            separators: SeparatorPolicy::default(),
            validate_automaton: false,
        }
    }
}

/// Fluent builder for [`OverlapConfig`].
#[derive(Debug, Clone, Default)]
pub struct OverlapConfigBuilder {
    config: OverlapConfig,
}

impl OverlapConfigBuilder {
    /// Create a builder holding the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prime modulus.
    pub fn modulus(mut self, modulus: u64) -> Self {
        self.config.modulus = modulus;
        self
    }

    /// Set the maximum sum of string lengths.
    pub fn max_total_length(mut self, max_total_length: usize) -> Self {
        self.config.max_total_length = max_total_length;
        self
    }

    /// Set the maximum number of strings.
    pub fn max_strings(mut self, max_strings: usize) -> Self {
        self.config.max_strings = max_strings;
        self
    }

    /// Set the separator policy.
    pub fn separators(mut self, separators: SeparatorPolicy) -> Self {
        self.config.separators = separators;
        self
    }

    /// Enable or disable automaton validation before counting.
    pub fn validate_automaton(mut self, validate: bool) -> Self {
        self.config.validate_automaton = validate;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<OverlapConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
