//! Generalized suffix automaton over a fixed set of byte strings.
//!
//! A **generalized suffix automaton** (GSA) recognizes every substring of
//! every indexed string. Each state groups substrings that share the same set
//! of ending positions across the whole input set:
//!
//! - **Equivalence class**: state `u` represents the lengths
//!   `(max_length(link(u)), max_length(u)]`
//! - **Suffix links**: form a tree rooted at state 0
//! - **Size**: at most `2m - 1` states for `m` fed symbols
//!
//! Construction is online, one symbol at a time, via [`GsaBuilder::extend`].
//! Strings are separated by [`Symbol::Separator`] values that can never occur
//! inside a string.
//!
//! # Example
//!
//! ```rust
//! use liboverlap::automaton::{GsaBuilder, SeparatorPolicy};
//!
//! let gsa = GsaBuilder::build(&["abc", "bcd"], SeparatorPolicy::Unique);
//! assert_eq!(gsa.string_count(), 2);
//! assert!(gsa.contains(b"bc"));
//! assert!(!gsa.contains(b"abcd"));
//! ```

pub mod arena;
pub mod builder;

pub use arena::{State, StateArena};
pub use builder::{GeneralizedSuffixAutomaton, GsaBuilder, GsaStats, SeparatorPolicy};

/// Index of a state in the [`StateArena`].
pub type StateId = usize;

/// The root state, representing the empty string.
pub const ROOT: StateId = 0;

/// An input symbol of the automaton.
///
/// Ordinary bytes and separators live in disjoint variants, so a separator can
/// never collide with string content regardless of the input alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A byte of an input string.
    Byte(u8),
    /// The sentinel fed after string `i` (and before string `i + 1`).
    Separator(u32),
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::Byte(byte)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "{}", char::from(*b)),
            Symbol::Byte(b) => write!(f, "\\x{:02x}", b),
            Symbol::Separator(i) => write!(f, "#{}", i),
        }
    }
}
