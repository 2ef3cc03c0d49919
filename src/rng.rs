//! Random number capability for obstacle generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats.
pub trait UniformSource {
    /// Uniform value in `[min, max)`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

/// Adapts any `rand` generator to [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    /// Process-lifetime generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSource for RandomSource<R> {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if !(min < max) {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
