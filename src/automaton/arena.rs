//! Append-only storage for automaton states.

use smallvec::SmallVec;

use super::{StateId, Symbol};

/// A state in the generalized suffix automaton.
///
/// Each state represents an equivalence class of substrings that have the same
/// set of ending positions across all indexed strings.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Outgoing edges: (symbol, target state).
    ///
    /// Kept sorted by symbol. Most states have one or two children, so the
    /// first couple of edges live inline.
    edges: SmallVec<[(Symbol, StateId); 2]>,

    /// Suffix link: the state representing the longest proper suffix in a
    /// different equivalence class. `None` only for the root.
    suffix_link: Option<StateId>,

    /// Length of the longest string in this equivalence class.
    max_length: usize,
}

impl State {
    /// Length of the longest substring in this state's class.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Suffix-link parent, or `None` for the root.
    #[inline]
    pub fn suffix_link(&self) -> Option<StateId> {
        self.suffix_link
    }

    /// Target of the edge labelled `symbol`, if any.
    ///
    /// Uses linear search for small edge counts, binary search for larger.
    pub fn transition(&self, symbol: Symbol) -> Option<StateId> {
        if self.edges.len() < 16 {
            self.edges
                .iter()
                .find(|(s, _)| *s == symbol)
                .map(|(_, t)| *t)
        } else {
            self.edges
                .binary_search_by_key(&symbol, |(s, _)| *s)
                .ok()
                .map(|idx| self.edges[idx].1)
        }
    }

    /// Outgoing edges in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    pub(crate) fn set_suffix_link(&mut self, link: StateId) {
        self.suffix_link = Some(link);
    }

    /// Add or overwrite the edge labelled `symbol`, keeping edges sorted.
    pub(crate) fn set_transition(&mut self, symbol: Symbol, target: StateId) {
        match self.edges.binary_search_by_key(&symbol, |(s, _)| *s) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (symbol, target)),
        }
    }
}

/// Owner of every automaton state.
///
/// States are addressed by index; an id handed out by [`allocate`] stays
/// valid for the lifetime of the arena. Nothing is ever removed.
///
/// [`allocate`]: StateArena::allocate
#[derive(Clone, Debug)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    /// Create an arena holding only the root state.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an arena holding only the root, with room for `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity.max(1));
        states.push(State::default());
        Self { states }
    }

    /// Upper bound on the number of states for `symbols` fed symbols.
    pub fn max_states(symbols: usize) -> usize {
        (2 * symbols).saturating_sub(1).max(2)
    }

    /// Append a zero-initialized state and return its id.
    #[inline]
    pub fn allocate(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State::default());
        id
    }

    /// Borrow a state.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Mutably borrow a state.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id]
    }

    /// Number of allocated states, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: the root is allocated on creation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over `(id, state)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states.iter().enumerate()
    }
}

impl Default for StateArena {
    fn default() -> Self {
        Self::new()
    }
}
