//! Seeded pseudo-random number generator for simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Simulation random number generator.
///
/// Wraps a seeded [`StdRng`] with standard-normal sampling. The same seed
/// always produces the same draw sequence, which makes Monte Carlo prices
/// reproducible in tests; the seed is retained for reporting.
///
/// # Examples
///
/// ```rust
/// use optval_pricing::rng::SimRng;
///
/// let mut rng1 = SimRng::from_seed(12345);
/// let mut rng2 = SimRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
pub struct SimRng {
    inner: StdRng,
    seed: u64,
}

impl SimRng {
    /// Creates an RNG initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG with a fresh entropy-derived seed.
    ///
    /// The realised seed stays queryable through [`seed`](Self::seed) so
    /// a non-reproducible run can still be replayed afterwards.
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate.
    ///
    /// Uses the Ziggurat sampler from `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller. An
    /// empty buffer is a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
