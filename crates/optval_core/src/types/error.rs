//! Error types for structured error handling.
//!
//! This module provides:
//! - `ContractError`: Errors from contract construction
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Contract construction errors.
///
/// Raised by [`OptionContract::new`](crate::types::OptionContract::new)
/// when a pricing input violates its required range. Each variant carries
/// the offending value so callers can report it verbatim.
///
/// # Examples
/// ```
/// use optval_core::types::ContractError;
///
/// let err = ContractError::InvalidSpot { spot: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractError {
    /// Spot price is not positive and finite.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Strike price is not positive and finite.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Time to maturity is not positive and finite.
    #[error("Invalid time to maturity: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value (years)
        expiry: f64,
    },

    /// Risk-free rate is negative or non-finite.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Volatility is not positive and finite.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `NoBracket`: Function values at bracket endpoints have same sign
///
/// # Examples
/// ```
/// use optval_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}
