//! A tool to generate noise from an explicitly seeded random stream.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};


/// A stream of independent standard normal draws seeded from an explicit
/// integer, created fresh for each simulation call so that runs with the
/// same seed replay the same noise and concurrent runs never share state
pub struct NoiseStream {
    rng: StdRng,
}

impl NoiseStream {
    /// Creates a new stream from the given seed
    pub fn new(seed: u64) -> Self {
        NoiseStream {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Samples the next value from a normal distribution with
    /// mean `0.` and standard deviation `1.`
    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }
}
