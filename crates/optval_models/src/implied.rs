//! Implied volatility recovery.
//!
//! Inverts the Black-Scholes formula by bracketed root search: given an
//! observed market premium, find the volatility at which the analytic
//! price reproduces it. The search bracket is fixed at
//! `[VOL_BRACKET_LO, VOL_BRACKET_HI]` (roughly 0% to 500% annualised).
//!
//! An unreachable market price — one that violates no-arbitrage bounds or
//! exceeds what any volatility in the bracket can produce — is a normal
//! `None` result, not an error.

use optval_core::math::solvers::{BrentSolver, SolverConfig};
use optval_core::types::{ContractError, OptionContract, OptionKind};
use thiserror::Error;

use crate::analytical::black_scholes;

/// Lower volatility bracket endpoint.
pub const VOL_BRACKET_LO: f64 = 1e-6;

/// Upper volatility bracket endpoint (500% annualised).
pub const VOL_BRACKET_HI: f64 = 5.0;

/// Quote construction errors.
///
/// # Variants
/// - `Contract`: a pricing parameter violates its range
/// - `InvalidPrice`: the observed market premium is not positive and finite
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// A pricing parameter violates its required range.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// Market premium is not positive and finite.
    #[error("Invalid market price: {price}")]
    InvalidPrice {
        /// The invalid market price value
        price: f64,
    },
}

/// An observed market quote for a European option.
///
/// Carries the same pricing parameters as an
/// [`OptionContract`] — minus the volatility, which is the unknown —
/// plus the observed market premium.
///
/// # Examples
/// ```
/// use optval_core::types::OptionKind;
/// use optval_models::implied::OptionQuote;
///
/// let quote = OptionQuote::new(100.0, 100.0, 1.0, 0.05, 10.45, OptionKind::Call).unwrap();
/// assert_eq!(quote.price(), 10.45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionQuote {
    /// Template contract; its volatility is replaced per solver probe.
    contract: OptionContract,
    /// Observed market premium.
    price: f64,
}

impl OptionQuote {
    /// Creates a new validated quote.
    ///
    /// # Errors
    /// Returns [`QuoteError`] if any pricing parameter or the market
    /// premium violates its range.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        price: f64,
        kind: OptionKind,
    ) -> Result<Self, QuoteError> {
        // Placeholder volatility satisfies the contract invariants; every
        // solver probe replaces it before pricing.
        let contract = OptionContract::new(spot, strike, expiry, rate, 1.0, kind)?;

        if !(price.is_finite() && price > 0.0) {
            return Err(QuoteError::InvalidPrice { price });
        }

        Ok(Self { contract, price })
    }

    /// Returns the observed market premium.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.contract.kind()
    }

    /// Returns the pricing contract at the given candidate volatility.
    #[inline]
    fn contract_at(&self, volatility: f64) -> OptionContract {
        self.contract.with_volatility(volatility)
    }
}

/// Implied volatility solver.
///
/// Owns a [`BrentSolver`] and searches the fixed volatility bracket for a
/// root of `σ ↦ black_scholes::price(σ) − market_price`.
///
/// # Examples
/// ```
/// use optval_core::types::{OptionContract, OptionKind};
/// use optval_models::analytical::black_scholes;
/// use optval_models::implied::{ImpliedVolSolver, OptionQuote};
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let premium = black_scholes::price(&contract);
///
/// let quote = OptionQuote::new(100.0, 100.0, 1.0, 0.05, premium, OptionKind::Call).unwrap();
/// let vol = ImpliedVolSolver::default().solve(&quote).unwrap();
/// assert!((vol - 0.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    solver: BrentSolver<f64>,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl ImpliedVolSolver {
    /// Creates a solver with the given root-finding configuration.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self {
            solver: BrentSolver::new(config),
        }
    }

    /// Recovers the volatility that reproduces the quoted market premium.
    ///
    /// Returns `None` when the objective has no sign change over the
    /// bracket (no volatility in `[1e-6, 5.0]` reproduces the price) or
    /// the search fails to converge. Never panics; deterministic.
    pub fn solve(&self, quote: &OptionQuote) -> Option<f64> {
        let objective =
            |sigma: f64| black_scholes::price(&quote.contract_at(sigma)) - quote.price();

        self.solver
            .find_root(objective, VOL_BRACKET_LO, VOL_BRACKET_HI)
            .ok()
    }
}

/// Recovers implied volatility with the default solver configuration.
///
/// Convenience wrapper over [`ImpliedVolSolver::solve`].
pub fn implied_volatility(quote: &OptionQuote) -> Option<f64> {
    ImpliedVolSolver::default().solve(quote)
}
