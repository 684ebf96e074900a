/// Randomness as an injectable capability.
///
/// The simulation only ever asks for "a number in `0..n`". Production code
/// uses a seeded `StdRng`; tests use `ScriptedRng` to dictate every draw.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `0..n`. `n` is never 0.
    fn below(&mut self, n: u32) -> u32;
}

/// Process-local PRNG stream, seeded once.
pub struct SeededRng {
    inner: StdRng,
    seed: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng { inner: StdRng::seed_from_u64(seed), seed }
    }

    /// Use `seed` if given, otherwise the wall clock.
    pub fn from_seed_or_clock(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(clock_seed))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn below(&mut self, n: u32) -> u32 {
        self.inner.gen_range(0..n)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
pub use scripted::ScriptedRng;
