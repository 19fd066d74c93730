//! Error types for lattice pricing.

use thiserror::Error;

/// Lattice pricing errors.
///
/// # Variants
/// - `InvalidStepCount`: step count below 1
/// - `ProbabilityOutOfRange`: derived risk-neutral probability outside [0, 1]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Step count must be at least 1.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Derived risk-neutral up-probability fell outside [0, 1].
    ///
    /// Happens for pathological small-dt, high-rate or low-volatility
    /// inputs. The price would still be computable arithmetically, but it
    /// would no longer be a probability-weighted expectation, so it is
    /// surfaced instead of returned.
    #[error("Risk-neutral probability p = {p} is outside [0, 1]")]
    ProbabilityOutOfRange {
        /// The out-of-range probability value
        p: f64,
    },
}
