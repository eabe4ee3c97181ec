//! Per-state occurrence counts over a finished automaton.
//!
//! Two independent passes:
//!
//! - **Prefix pass**: walks every string from the root and credits the state
//!   of each prefix with that prefix's *weight*
//! - **Suffix pass**: seeds each string's end state and propagates counts up
//!   the suffix-link tree, longest states first
//!
//! The weight of the length-`m` prefix of `s` is `m - border(s[..m])`, where
//! `border` is the length of the longest proper border. The prefixes of `y`
//! that are also suffixes of `x` are exactly the borders of the longest one,
//! so their weights telescope to the overlap length `F(x, y)`.

use crate::automaton::{GeneralizedSuffixAutomaton, Symbol, ROOT};
use crate::error::{OverlapError, Result};

/// Occurrence statistics indexed by state id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceCounts {
    /// Sum of prefix weights landing exactly on each state.
    pub prefix_weight: Vec<u64>,
    /// Number of strings having each state's substrings as a suffix.
    pub suffix_count: Vec<u64>,
}

impl OccurrenceCounts {
    /// Run both passes over `gsa`, which must have been built from `strings`.
    pub fn compute<S: AsRef<[u8]>>(
        gsa: &GeneralizedSuffixAutomaton,
        strings: &[S],
    ) -> Result<Self> {
        Ok(Self {
            prefix_weight: prefix_weights(gsa, strings)?,
            suffix_count: suffix_counts(gsa),
        })
    }
}

/// Longest proper border of every prefix of `bytes` (KMP failure function).
///
/// `borders[m - 1]` is the border length of `bytes[..m]`.
pub fn prefix_borders(bytes: &[u8]) -> Vec<usize> {
    let mut borders = vec![0; bytes.len()];
    let mut k = 0;
    for i in 1..bytes.len() {
        while k > 0 && bytes[i] != bytes[k] {
            k = borders[k - 1];
        }
        if bytes[i] == bytes[k] {
            k += 1;
        }
        borders[i] = k;
    }
    borders
}

/// Prefix pass: credit each prefix's state with its weight.
pub fn prefix_weights<S: AsRef<[u8]>>(
    gsa: &GeneralizedSuffixAutomaton,
    strings: &[S],
) -> Result<Vec<u64>> {
    let mut weights = vec![0u64; gsa.state_count()];

    for (index, string) in strings.iter().enumerate() {
        let bytes = string.as_ref();
        let borders = prefix_borders(bytes);
        let mut state = ROOT;

        for (m, (&byte, &border)) in (1..).zip(bytes.iter().zip(&borders)) {
            state = gsa.state(state).transition(Symbol::Byte(byte)).ok_or_else(|| {
                OverlapError::InvariantViolation(format!(
                    "prefix of length {} of string {} is not in the automaton",
                    m, index
                ))
            })?;
            weights[state] += (m - border) as u64;
        }
    }

    Ok(weights)
}

/// Suffix pass: count, per state, the strings ending in its class or below.
///
/// States are visited in strictly decreasing `max_length` (a counting sort),
/// which is a topological order of the suffix-link tree.
pub fn suffix_counts(gsa: &GeneralizedSuffixAutomaton) -> Vec<u64> {
    let mut counts = vec![0u64; gsa.state_count()];
    for &end in gsa.end_states() {
        counts[end] += 1;
    }

    for state in by_decreasing_length(gsa) {
        if let Some(link) = gsa.state(state).suffix_link() {
            counts[link] += counts[state];
        }
    }

    counts
}

/// State ids ordered by decreasing `max_length`.
fn by_decreasing_length(gsa: &GeneralizedSuffixAutomaton) -> Vec<usize> {
    let longest = gsa.states().map(|(_, s)| s.max_length()).max().unwrap_or(0);

    let mut starts = vec![0usize; longest + 2];
    for (_, state) in gsa.states() {
        starts[longest - state.max_length() + 1] += 1;
    }
    for i in 1..starts.len() {
        starts[i] += starts[i - 1];
    }

    let mut order = vec![0; gsa.state_count()];
    for (id, state) in gsa.states() {
        let bucket = longest - state.max_length();
        order[starts[bucket]] = id;
        starts[bucket] += 1;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{GsaBuilder, SeparatorPolicy};

    #[test]
    fn test_prefix_borders() {
        assert_eq!(prefix_borders(b""), Vec::<usize>::new());
        assert_eq!(prefix_borders(b"a"), vec![0]);
        assert_eq!(prefix_borders(b"aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(prefix_borders(b"abab"), vec![0, 0, 1, 2]);
        assert_eq!(prefix_borders(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
    }

    #[test]
    fn test_prefix_weights_sum_to_length() {
        // Each string's own prefix chain telescopes to its full length.
        let strings = ["abab", "aaa", "abc"];
        let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
        let weights = prefix_weights(&gsa, &strings).unwrap();
        let total: u64 = weights.iter().sum();
        let expected: u64 = strings
            .iter()
            .map(|s| {
                let borders = prefix_borders(s.as_bytes());
                (1..=s.len()).map(|m| (m - borders[m - 1]) as u64).sum::<u64>()
            })
            .sum();
        assert_eq!(total, expected);
        assert_eq!(weights[ROOT], 0);
    }

    #[test]
    fn test_prefix_pass_rejects_foreign_strings() {
        let gsa = GsaBuilder::build(&["ab", "cd"], SeparatorPolicy::Unique);
        let err = prefix_weights(&gsa, &["ab", "xy"]).unwrap_err();
        assert!(matches!(err, OverlapError::InvariantViolation(_)));
    }

    #[test]
    fn test_suffix_counts_reach_root() {
        let strings = ["abc", "bc", "c", "xyz"];
        let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
        let counts = suffix_counts(&gsa);

        assert_eq!(counts[ROOT], strings.len() as u64);
        assert_eq!(counts[gsa.walk(b"c").unwrap()], 3);
        assert_eq!(counts[gsa.walk(b"bc").unwrap()], 2);
        assert_eq!(counts[gsa.walk(b"abc").unwrap()], 1);
        assert_eq!(counts[gsa.walk(b"z").unwrap()], 1);
        assert_eq!(counts[gsa.walk(b"x").unwrap()], 0);
    }

    #[test]
    fn test_decreasing_length_order() {
        let gsa = GsaBuilder::build(&["abcab", "bcabc"], SeparatorPolicy::Unique);
        let order = by_decreasing_length(&gsa);
        assert_eq!(order.len(), gsa.state_count());
        assert!(order
            .windows(2)
            .all(|w| gsa.state(w[0]).max_length() >= gsa.state(w[1]).max_length()));
        assert_eq!(*order.last().unwrap(), ROOT);
    }

    #[test]
    fn test_compute_matches_individual_passes() {
        let strings = ["aa", "aa"];
        let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
        let counts = OccurrenceCounts::compute(&gsa, &strings).unwrap();
        assert_eq!(counts.prefix_weight, prefix_weights(&gsa, &strings).unwrap());
        assert_eq!(counts.suffix_count, suffix_counts(&gsa));
    }
}
