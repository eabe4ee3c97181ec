//! Combining per-state counts into the expected chain cost.

use super::counter::OccurrenceCounts;
use super::modular::Modulus;
use crate::automaton::{GeneralizedSuffixAutomaton, ROOT};
use crate::error::{OverlapError, Result};

/// Modular sums produced by [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSums {
    /// Σ F(s_k, s_l) over all ordered pairs, self-pairs included at full length.
    pub pair_sum: u64,
    /// Σ |s_i|, the self-pair contribution.
    pub diagonal_sum: u64,
    /// Σ F(s_k, s_l) over ordered pairs of distinct indices.
    pub distinct_sum: u64,
    /// `distinct_sum / n`.
    pub expected: u64,
}

/// Aggregate occurrence counts into the expected overlap cost modulo `modulus`.
pub fn aggregate(
    gsa: &GeneralizedSuffixAutomaton,
    counts: &OccurrenceCounts,
    modulus: Modulus,
) -> Result<OverlapSums> {
    if counts.prefix_weight.len() != gsa.state_count()
        || counts.suffix_count.len() != gsa.state_count()
    {
        return Err(OverlapError::InvariantViolation(format!(
            "counters cover {}/{} states, automaton has {}",
            counts.prefix_weight.len(),
            counts.suffix_count.len(),
            gsa.state_count()
        )));
    }

    let pair_sum = counts
        .prefix_weight
        .iter()
        .zip(&counts.suffix_count)
        .skip(ROOT + 1)
        .fold(0, |acc, (&weight, &suffixes)| {
            let term = modulus.mul(modulus.reduce(weight), modulus.reduce(suffixes));
            modulus.add(acc, term)
        });

    let diagonal_sum = gsa.end_states().iter().fold(0, |acc, &end| {
        let length = gsa.state(end).max_length() as u64;
        modulus.add(acc, modulus.reduce(length))
    });

    let distinct_sum = modulus.sub(pair_sum, diagonal_sum);

    let n = gsa.string_count();
    let inverse = modulus
        .inverse(n as u64)
        .ok_or(OverlapError::NonInvertibleCount {
            count: n,
            modulus: modulus.value(),
        })?;

    Ok(OverlapSums {
        pair_sum,
        diagonal_sum,
        distinct_sum,
        expected: modulus.mul(distinct_sum, inverse),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{GsaBuilder, SeparatorPolicy};

    fn sums(strings: &[&str]) -> OverlapSums {
        let gsa = GsaBuilder::build(strings, SeparatorPolicy::Unique);
        let counts = OccurrenceCounts::compute(&gsa, strings).unwrap();
        aggregate(&gsa, &counts, Modulus::default()).unwrap()
    }

    #[test]
    fn test_swapped_pair() {
        let s = sums(&["ab", "ba"]);
        assert_eq!(s.pair_sum, 6);
        assert_eq!(s.diagonal_sum, 4);
        assert_eq!(s.distinct_sum, 2);
        assert_eq!(s.expected, 1);
    }

    #[test]
    fn test_identical_strings_overlap_fully() {
        let s = sums(&["aa", "aa"]);
        assert_eq!(s.pair_sum, 8);
        assert_eq!(s.diagonal_sum, 4);
        assert_eq!(s.distinct_sum, 4);
        assert_eq!(s.expected, 2);
    }

    #[test]
    fn test_disjoint_alphabets() {
        let s = sums(&["abc", "xyz", "pq"]);
        assert_eq!(s.distinct_sum, 0);
        assert_eq!(s.expected, 0);
    }

    #[test]
    fn test_counter_size_mismatch() {
        let gsa = GsaBuilder::build(&["ab", "ba"], SeparatorPolicy::Unique);
        let counts = OccurrenceCounts {
            prefix_weight: vec![0; 1],
            suffix_count: vec![0; 1],
        };
        assert!(matches!(
            aggregate(&gsa, &counts, Modulus::default()),
            Err(OverlapError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_non_invertible_count() {
        let strings = ["a", "a"];
        let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
        let counts = OccurrenceCounts::compute(&gsa, &strings).unwrap();
        let err = aggregate(&gsa, &counts, Modulus::new(2).unwrap()).unwrap_err();
        assert_eq!(
            err,
            OverlapError::NonInvertibleCount {
                count: 2,
                modulus: 2
            }
        );
    }
}
