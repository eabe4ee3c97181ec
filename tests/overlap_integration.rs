//! Integration tests for the expected overlap pipeline.
//!
//! These tests exercise the public API end to end: input validation,
//! automaton construction, occurrence counting and modular aggregation.

use liboverlap::overlap::counter::{prefix_borders, prefix_weights, suffix_counts};
use liboverlap::overlap::naive::{distinct_pair_sum, overlap};
use liboverlap::prelude::*;

fn calc_with(separators: SeparatorPolicy) -> ExpectedOverlap {
    let config = OverlapConfig::builder()
        .separators(separators)
        .validate_automaton(true)
        .build()
        .unwrap();
    ExpectedOverlap::new(config).unwrap()
}

#[test]
fn test_swapped_pair() {
    assert_eq!(expected_overlap(&["ab", "ba"]), Ok(1));
}

#[test]
fn test_identical_pair() {
    assert_eq!(expected_overlap(&["aa", "aa"]), Ok(2));
}

#[test]
fn test_shifted_windows() {
    let report = ExpectedOverlap::default()
        .compute(&["abc", "bcd", "cde"])
        .unwrap();
    assert_eq!(report.distinct_sum, 5);
    // 5 * inverse(3) mod 1e9+7
    assert_eq!(report.expected, 666_666_673);
    assert_eq!((report.expected as u128 * 3) % 1_000_000_007, 5);
}

#[test]
fn test_single_characters() {
    // Equal one-character strings overlap fully, distinct ones not at all.
    let strings = ["a", "a", "b"];
    assert_eq!(distinct_pair_sum(&strings), 2);
    let report = ExpectedOverlap::default().compute(&strings).unwrap();
    assert_eq!(report.distinct_sum, 2);
}

#[test]
fn test_periodic_strings() {
    let strings = ["abab", "baba", "ababab", "b"];
    let expected = expected_overlap_naive(&strings, Modulus::default()).unwrap();
    assert_eq!(expected_overlap(&strings), Ok(expected));
}

#[test]
fn test_non_ascii_bytes() {
    let strings: Vec<Vec<u8>> = vec![vec![0xff, 0x00, 0xff], vec![0x00, 0xff], vec![0xff]];
    let expected = expected_overlap_naive(&strings, Modulus::default()).unwrap();
    assert_eq!(expected_overlap(&strings), Ok(expected));
}

#[test]
fn test_long_repeated_string() {
    let s = "a".repeat(2_000);
    let strings = vec![s.clone(), s.clone(), s];
    let report = calc_with(SeparatorPolicy::Unique).compute(&strings).unwrap();
    // Every ordered pair of distinct indices overlaps fully.
    assert_eq!(report.distinct_sum, 6 * 2_000);
    assert_eq!(report.expected, 4_000);
}

#[test]
fn test_error_cases() {
    assert_eq!(
        expected_overlap(&["only"]),
        Err(OverlapError::TooFewStrings(1))
    );
    assert_eq!(
        expected_overlap(&["a", "b", ""]),
        Err(OverlapError::EmptyString { index: 2 })
    );

    let config = OverlapConfig::builder().max_total_length(3).build().unwrap();
    let err = ExpectedOverlap::new(config)
        .unwrap()
        .compute(&["ab", "cd"])
        .unwrap_err();
    assert_eq!(
        err,
        OverlapError::CapacityExceeded {
            total: 4,
            capacity: 3
        }
    );
    assert!(err.to_string().contains('4'));
}

#[test]
fn test_rejects_invalid_config() {
    let config = OverlapConfig {
        modulus: 1_000_000_008,
        ..OverlapConfig::default()
    };
    assert_eq!(
        ExpectedOverlap::new(config).unwrap_err(),
        OverlapError::InvalidModulus(1_000_000_008)
    );
}

#[test]
fn test_other_prime_modulus() {
    let config = OverlapConfig::builder().modulus(998_244_353).build().unwrap();
    let report = ExpectedOverlap::new(config)
        .unwrap()
        .compute(&["abc", "bcd", "cde"])
        .unwrap();
    assert_eq!((report.expected as u128 * 3) % 998_244_353, 5);
}

#[test]
fn test_automaton_structure() {
    let strings = ["abcab", "bcabc", "cab", "abcab"];
    for policy in [SeparatorPolicy::Unique, SeparatorPolicy::Omit] {
        let calc = calc_with(policy);
        let gsa = calc.build(&strings).unwrap();
        assert!(gsa.validate().is_ok());

        for (i, s) in strings.iter().enumerate() {
            let end = gsa.end_state(i).unwrap();
            assert_eq!(gsa.state(end).max_length(), s.len());
            assert_eq!(gsa.walk(s.as_bytes()), Some(end));
        }
        // Identical strings end in the same state.
        assert_eq!(gsa.end_state(0), gsa.end_state(3));
        assert!(gsa.end_state(4).is_none());

        for (id, state) in gsa.states() {
            if id == ROOT {
                assert!(state.suffix_link().is_none());
            } else {
                let link = state.suffix_link().unwrap();
                assert!(gsa.state(link).max_length() < state.max_length());
            }
        }
    }
}

#[test]
fn test_recognises_exactly_the_substrings() {
    let strings = ["abcab", "cba"];
    let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
    for s in &strings {
        for i in 0..s.len() {
            for j in i + 1..=s.len() {
                assert!(gsa.contains(&s.as_bytes()[i..j]));
            }
        }
    }
    // Crosses a string boundary.
    assert!(!gsa.contains(b"abcabc"));
    assert!(!gsa.contains(b"bcb"));
}

#[test]
fn test_root_counts_every_string() {
    let strings = ["xy", "yx", "xyx", "x"];
    let gsa = GsaBuilder::build(&strings, SeparatorPolicy::Unique);
    let suffixes = suffix_counts(&gsa);
    assert_eq!(suffixes[ROOT], strings.len() as u64);

    // A prefix of length m carries weight m - border(m).
    let weights = prefix_weights(&gsa, &strings).unwrap();
    assert_eq!(weights[ROOT], 0);
    let total: u64 = weights.iter().sum();
    let expected: usize = strings
        .iter()
        .map(|s| {
            let borders = prefix_borders(s.as_bytes());
            (1..=s.len()).map(|m| m - borders[m - 1]).sum::<usize>()
        })
        .sum();
    assert_eq!(total, expected as u64);
    assert_eq!(total, 3 + 3 + 5 + 1);
}

#[test]
fn test_overlap_definition() {
    assert_eq!(overlap(b"abc", b"bcd"), 2);
    assert_eq!(overlap(b"bcd", b"abc"), 0);
    assert_eq!(overlap(b"abab", b"abab"), 4);
}
