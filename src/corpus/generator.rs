//! Seeded generators for string sets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates reproducible sets of byte strings.
///
/// # Example
///
/// ```rust
/// use liboverlap::corpus::StringSetGenerator;
///
/// let mut gen = StringSetGenerator::new(7).alphabet(b"abc");
/// let strings = gen.independent(4, 2, 5);
/// assert_eq!(strings.len(), 4);
/// ```
pub struct StringSetGenerator {
    rng: StdRng,
    alphabet: Vec<u8>,
}

impl StringSetGenerator {
    /// Create new generator with seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - Random seed for reproducibility
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            alphabet: b"abcdefghijklmnopqrstuvwxyz".to_vec(),
        }
    }

    /// Replace the alphabet. An empty alphabet keeps the current one.
    pub fn alphabet(mut self, alphabet: &[u8]) -> Self {
        if !alphabet.is_empty() {
            self.alphabet = alphabet.to_vec();
        }
        self
    }

    /// Generate `count` independent strings with lengths in
    /// `min_len..=max_len`.
    ///
    /// Lengths are clamped to at least 1.
    pub fn independent(&mut self, count: usize, min_len: usize, max_len: usize) -> Vec<Vec<u8>> {
        let min_len = min_len.max(1);
        let max_len = max_len.max(min_len);
        (0..count)
            .map(|_| {
                let len = self.rng.gen_range(min_len..=max_len);
                self.random_bytes(len)
            })
            .collect()
    }

    /// Generate `count` strings of length `len`, each a window of one shared
    /// random text of length `text_len`.
    ///
    /// `text_len` is raised to `len` if smaller.
    pub fn windows(&mut self, count: usize, len: usize, text_len: usize) -> Vec<Vec<u8>> {
        let len = len.max(1);
        let text = self.random_bytes(text_len.max(len));
        (0..count)
            .map(|_| {
                let start = self.rng.gen_range(0..=text.len() - len);
                text[start..start + len].to_vec()
            })
            .collect()
    }

    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect()
    }
}
