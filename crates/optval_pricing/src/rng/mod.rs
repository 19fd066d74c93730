//! Random number generation for Monte Carlo simulation.
//!
//! This module provides [`SimRng`], a seeded PRNG wrapper with batch
//! normal sampling for reproducible simulations.

mod prng;

pub use prng::SimRng;
