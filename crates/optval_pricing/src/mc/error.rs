//! Error types for Monte Carlo configuration.

use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// Raised at build time when a simulation parameter is outside its valid
/// range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// Required parameter missing from the builder.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}
