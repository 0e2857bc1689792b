//! Uniform random source behind a trait, so the attendance generator can be
//! driven by a scripted sequence in tests.

use rand::Rng;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be > 0.
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize % len
    }

    /// Uniform integer in `[lo, hi]` inclusive.
    fn next_range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.next_index((hi - lo + 1) as usize) as u32
    }
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }

    fn next_range(&mut self, lo: u32, hi: u32) -> u32 {
        rand::rng().random_range(lo..=hi)
    }
}

/// Scripted source for tests: replays a fixed sequence of draws, cycling
/// when exhausted.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
