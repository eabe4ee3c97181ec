//! Online construction of the generalized suffix automaton.

use super::arena::{State, StateArena};
use super::{StateId, Symbol, ROOT};
use crate::error::{OverlapError, Result};

/// What to feed between consecutive strings during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SeparatorPolicy {
    /// Feed one unique [`Symbol::Separator`] after every string but the last,
    /// extending from that string's end state. The resulting state is not
    /// retained.
    #[default]
    Unique,

    /// Feed nothing between strings.
    Omit,
}

impl SeparatorPolicy {
    /// Get a human-readable name for this policy
    pub fn name(&self) -> &'static str {
        match self {
            SeparatorPolicy::Unique => "unique",
            SeparatorPolicy::Omit => "omit",
        }
    }
}

impl std::fmt::Display for SeparatorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SeparatorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unique" => Ok(SeparatorPolicy::Unique),
            "omit" | "none" => Ok(SeparatorPolicy::Omit),
            _ => Err(format!(
                "Unknown separator policy: {}. Valid options: unique, omit",
                s
            )),
        }
    }
}

/// Incremental builder for a [`GeneralizedSuffixAutomaton`].
///
/// Holds the arena and the per-string end states while strings are fed in.
/// The active state is passed explicitly through [`extend`](Self::extend)
/// rather than stored, so each string starts its own walk from the root.
#[derive(Debug)]
pub struct GsaBuilder {
    arena: StateArena,
    end_states: Vec<StateId>,
    string_lengths: Vec<usize>,
    separators: SeparatorPolicy,
    symbols_fed: usize,
    clones: usize,
}

impl GsaBuilder {
    /// Create a builder with an arena sized for `total_length` bytes spread
    /// over `string_count` strings.
    pub fn with_capacity(
        total_length: usize,
        string_count: usize,
        separators: SeparatorPolicy,
    ) -> Self {
        let separator_count = match separators {
            SeparatorPolicy::Unique => string_count.saturating_sub(1),
            SeparatorPolicy::Omit => 0,
        };
        Self {
            arena: StateArena::with_capacity(StateArena::max_states(
                total_length + separator_count,
            )),
            end_states: Vec::with_capacity(string_count),
            string_lengths: Vec::with_capacity(string_count),
            separators,
            symbols_fed: 0,
            clones: 0,
        }
    }

    /// Build the automaton for `strings` in one go.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use liboverlap::automaton::{GsaBuilder, SeparatorPolicy};
    ///
    /// let gsa = GsaBuilder::build(&["ab", "ba"], SeparatorPolicy::Unique);
    /// assert_eq!(gsa.string_count(), 2);
    /// assert!(gsa.validate().is_ok());
    /// ```
    pub fn build<S: AsRef<[u8]>>(
        strings: &[S],
        separators: SeparatorPolicy,
    ) -> GeneralizedSuffixAutomaton {
        let total_length = strings.iter().map(|s| s.as_ref().len()).sum();
        let mut builder = Self::with_capacity(total_length, strings.len(), separators);
        for string in strings {
            builder.add_string(string.as_ref());
        }
        builder.finish()
    }

    /// Add one string, returning its end state.
    ///
    /// If a string was added before, the boundary separator is fed first from
    /// the previous string's end state (per the [`SeparatorPolicy`]).
    pub fn add_string(&mut self, bytes: &[u8]) -> StateId {
        if let (SeparatorPolicy::Unique, Some(&previous_end)) =
            (self.separators, self.end_states.last())
        {
            let boundary = (self.end_states.len() - 1) as u32;
            self.extend(previous_end, Symbol::Separator(boundary));
        }

        let mut last = ROOT;
        for &byte in bytes {
            last = self.extend(last, Symbol::Byte(byte));
        }
        self.end_states.push(last);
        self.string_lengths.push(bytes.len());
        last
    }

    /// Extend the automaton with one symbol from the active state `last`.
    ///
    /// Returns the state reached after appending `symbol`. This is the
    /// classic online algorithm (Blumer et al., 1985); when `last` already
    /// has an edge on `symbol` (a later string retracing an earlier one) the
    /// existing target is reused, split if its class is too long.
    ///
    /// # Complexity
    ///
    /// - Time: O(1) amortized per symbol
    /// - Space: adds at most 1 state and 1 clone
    pub fn extend(&mut self, last: StateId, symbol: Symbol) -> StateId {
        self.symbols_fed += 1;
        let last_length = self.arena.get(last).max_length();

        if let Some(q) = self.arena.get(last).transition(symbol) {
            if self.arena.get(q).max_length() == last_length + 1 {
                return q;
            }
            return self.split(last, q, symbol);
        }

        let cur = self.arena.allocate();
        self.arena.get_mut(cur).set_max_length(last_length + 1);

        // Walk suffix links backward, adding transitions to the new state
        let mut p = Some(last);
        let mut found = None;
        while let Some(p_idx) = p {
            if let Some(q) = self.arena.get(p_idx).transition(symbol) {
                found = Some((p_idx, q));
                break;
            }
            self.arena.get_mut(p_idx).set_transition(symbol, cur);
            p = self.arena.get(p_idx).suffix_link();
        }

        let link = match found {
            None => ROOT,
            Some((p_idx, q))
                if self.arena.get(q).max_length() == self.arena.get(p_idx).max_length() + 1 =>
            {
                q
            }
            Some((p_idx, q)) => self.split(p_idx, q, symbol),
        };
        self.arena.get_mut(cur).set_suffix_link(link);

        cur
    }

    /// Split the class of `q` so that `p --symbol-->` lands on a state of
    /// length `max_length(p) + 1`.
    ///
    /// Allocates the clone, copies `q`'s edges and link, redirects every
    /// `--symbol--> q` edge on the suffix path from `p`, and relinks `q`
    /// under the clone. Returns the clone.
    fn split(&mut self, p: StateId, q: StateId, symbol: Symbol) -> StateId {
        let clone = self.arena.allocate();
        let mut cloned: State = self.arena.get(q).clone();
        cloned.set_max_length(self.arena.get(p).max_length() + 1);
        *self.arena.get_mut(clone) = cloned;

        let mut p2 = Some(p);
        while let Some(p2_idx) = p2 {
            if self.arena.get(p2_idx).transition(symbol) != Some(q) {
                break;
            }
            self.arena.get_mut(p2_idx).set_transition(symbol, clone);
            p2 = self.arena.get(p2_idx).suffix_link();
        }

        self.arena.get_mut(q).set_suffix_link(clone);
        self.clones += 1;
        clone
    }

    /// Freeze the builder into an immutable automaton.
    pub fn finish(self) -> GeneralizedSuffixAutomaton {
        GeneralizedSuffixAutomaton {
            arena: self.arena,
            end_states: self.end_states,
            string_lengths: self.string_lengths,
            symbols_fed: self.symbols_fed,
            clones: self.clones,
        }
    }
}

/// Size statistics of a finished automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GsaStats {
    /// Number of states, root included
    pub states: usize,
    /// Number of edges
    pub edges: usize,
    /// Number of clone states created by splits
    pub clones: usize,
    /// Number of indexed strings
    pub strings: usize,
    /// Number of symbols fed, separators included
    pub symbols: usize,
}

impl GsaStats {
    /// Maximum state count for the number of symbols fed.
    pub fn state_bound(&self) -> usize {
        StateArena::max_states(self.symbols)
    }
}

/// A finished, read-only generalized suffix automaton.
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixAutomaton {
    arena: StateArena,
    end_states: Vec<StateId>,
    string_lengths: Vec<usize>,
    symbols_fed: usize,
    clones: usize,
}

impl GeneralizedSuffixAutomaton {
    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of indexed strings.
    pub fn string_count(&self) -> usize {
        self.end_states.len()
    }

    /// End state of string `index`.
    pub fn end_state(&self, index: usize) -> Option<StateId> {
        self.end_states.get(index).copied()
    }

    /// End states of all strings, in input order.
    pub fn end_states(&self) -> &[StateId] {
        &self.end_states
    }

    /// Borrow state `id`.
    pub fn state(&self, id: StateId) -> &State {
        self.arena.get(id)
    }

    /// Iterate over `(id, state)` pairs.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.arena.iter()
    }

    /// Follow `bytes` from the root, returning the state reached.
    pub fn walk(&self, bytes: &[u8]) -> Option<StateId> {
        bytes.iter().try_fold(ROOT, |state, &byte| {
            self.arena.get(state).transition(Symbol::Byte(byte))
        })
    }

    /// Returns `true` if `bytes` is a substring of some indexed string.
    pub fn contains(&self, bytes: &[u8]) -> bool {
        self.walk(bytes).is_some()
    }

    /// Size statistics.
    pub fn stats(&self) -> GsaStats {
        GsaStats {
            states: self.arena.len(),
            edges: self.arena.iter().map(|(_, s)| s.edge_count()).sum(),
            clones: self.clones,
            strings: self.end_states.len(),
            symbols: self.symbols_fed,
        }
    }

    /// Check the structural invariants of the automaton.
    ///
    /// Suffix-link lengths strictly decrease toward the root, which also
    /// guarantees that every link chain terminates there.
    pub fn validate(&self) -> Result<()> {
        let count = self.arena.len();
        let bound = self.stats().state_bound();
        if count > bound {
            return Err(OverlapError::InvariantViolation(format!(
                "{} states exceed the bound of {} for {} symbols",
                count, bound, self.symbols_fed
            )));
        }

        for (id, state) in self.arena.iter() {
            match (id, state.suffix_link()) {
                (ROOT, None) => {}
                (ROOT, Some(link)) => {
                    return Err(OverlapError::InvariantViolation(format!(
                        "root has suffix link {}",
                        link
                    )));
                }
                (_, None) => {
                    return Err(OverlapError::InvariantViolation(format!(
                        "state {} has no suffix link",
                        id
                    )));
                }
                (_, Some(link)) if link >= count => {
                    return Err(OverlapError::InvariantViolation(format!(
                        "state {} links to unknown state {}",
                        id, link
                    )));
                }
                (_, Some(link)) if self.arena.get(link).max_length() >= state.max_length() => {
                    return Err(OverlapError::InvariantViolation(format!(
                        "state {} (length {}) links to state {} (length {})",
                        id,
                        state.max_length(),
                        link,
                        self.arena.get(link).max_length()
                    )));
                }
                _ => {}
            }

            for (symbol, target) in state.edges() {
                if target >= count || self.arena.get(target).max_length() <= state.max_length() {
                    return Err(OverlapError::InvariantViolation(format!(
                        "edge {} --{}--> {} does not extend the source class",
                        id, symbol, target
                    )));
                }
            }
        }

        let ends = self.end_states.iter().zip(&self.string_lengths);
        for (index, (&end, &length)) in ends.enumerate() {
            if self.arena.get(end).max_length() != length {
                return Err(OverlapError::InvariantViolation(format!(
                    "string {} of length {} ends at state {} of length {}",
                    index,
                    length,
                    end,
                    self.arena.get(end).max_length()
                )));
            }
        }

        Ok(())
    }
}
