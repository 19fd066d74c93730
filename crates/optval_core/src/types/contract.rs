//! Option contract definitions.
//!
//! This module provides the validated, immutable value object that every
//! pricer in the workspace consumes, together with the call/put selector.

use super::error::ContractError;

/// Type of option payoff.
///
/// A closed two-variant set matched exhaustively at every use site, so an
/// out-of-range option kind cannot be represented.
///
/// # Examples
/// ```
/// use optval_core::types::OptionKind;
///
/// let call = OptionKind::Call;
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
///
/// let put = OptionKind::Put;
/// assert_eq!(put.payoff(110.0, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the intrinsic payoff for given spot and strike.
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }
}

/// Immutable option pricing inputs.
///
/// Bundles the five scalar pricing parameters and the option kind.
/// Validation happens once at construction; pricers receive known-good
/// values and need no further range checks. Two contracts with equal
/// fields are interchangeable.
///
/// # Examples
/// ```
/// use optval_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(contract.spot(), 100.0);
///
/// // Non-positive volatility is rejected
/// assert!(OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Risk-free interest rate (r), annualised decimal
    rate: f64,
    /// Volatility (σ), annualised decimal
    volatility: f64,
    /// Call or put
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a new validated contract.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive, finite)
    /// * `strike` - Strike price (must be positive, finite)
    /// * `expiry` - Time to maturity in years (must be positive, finite)
    /// * `rate` - Risk-free rate, annualised decimal (must be non-negative, finite)
    /// * `volatility` - Volatility, annualised decimal (must be positive, finite)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// Returns the matching [`ContractError`] variant for the first
    /// parameter that violates its range.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, ContractError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(ContractError::InvalidSpot { spot });
        }
        if !(strike.is_finite() && strike > 0.0) {
            return Err(ContractError::InvalidStrike { strike });
        }
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(ContractError::InvalidExpiry { expiry });
        }
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(ContractError::InvalidRate { rate });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(ContractError::InvalidVolatility { volatility });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            kind,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Evaluates the intrinsic payoff at the given spot price.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.kind.payoff(spot, self.strike)
    }

    /// Returns a copy of this contract with a replaced volatility.
    ///
    /// Used by the implied-volatility objective, which probes the analytic
    /// price over a bracket of candidate volatilities. `volatility` must be
    /// positive; the fixed solver bracket guarantees this for that use.
    #[inline]
    #[must_use]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        debug_assert!(volatility > 0.0, "volatility must be positive");
        Self { volatility, ..*self }
    }
}
