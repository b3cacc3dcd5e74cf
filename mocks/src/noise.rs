//! Reproducible random streams for photometric noise.
//!
//! A noise realisation is fixed by a seed *string*. The string is hashed with
//! MD5, the lowercase hex digest (32 ASCII bytes) is read as eight
//! little-endian `u32` words, and those words seed a ChaCha20 stream. The
//! stream is created once per run and threaded through every filter, so the
//! order in which filters are processed is part of the realisation.
//!
//! Consumers draw through the [`NormalSource`] trait which lets tests replace
//! the generator with a fixed sequence of deviates.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;

/// Seed string used when none is given
pub const DEFAULT_SEED: &str = "KV450";

/// Source of standard normal deviates (mean 0, standard deviation 1)
pub trait NormalSource {
    fn standard_normal(&mut self) -> f64;
}

/// Derive the seed words for a seed string.
///
/// # Example
/// ```
/// use mocks::noise::seed_words;
///
/// let words = seed_words("KV450");
/// assert_eq!(words.len(), 8);
/// assert_eq!(words, seed_words("KV450"));
/// assert_ne!(words, seed_words("KV1000"));
/// ```
pub fn seed_words(seed: &str) -> [u32; 8] {
    let hex = format!("{:x}", md5::compute(seed.as_bytes()));
    let bytes = hex.as_bytes();

    let mut words = [0u32; 8];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// ChaCha20 backed normal deviates seeded from a string
#[derive(Debug, Clone)]
pub struct SeededNormal {
    rng: ChaCha20Rng,
}

impl SeededNormal {
    pub fn from_seed_str(seed: &str) -> Self {
        let words = seed_words(seed);
        log::debug!("seed '{}' -> words {:08x?}", seed, words);

        let mut key = [0u8; 32];
        for (chunk, word) in key.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self {
            rng: ChaCha20Rng::from_seed(key),
        }
    }
}

impl NormalSource for SeededNormal {
    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Replays a fixed list of deviates, cycling when exhausted.
///
/// Useful for driving the realisation with known draws, e.g. all zeros to get
/// the noiseless limit. An empty list replays zeros.
#[derive(Debug, Clone)]
pub struct FixedDeviates {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedDeviates {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of deviates handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl NormalSource for FixedDeviates {
    fn standard_normal(&mut self) -> f64 {
        let value = match self.values.len() {
            0 => 0.0,
            n => self.values[self.cursor % n],
        };
        self.cursor += 1;
        value
    }
}
