//! Black-Scholes pricing for European options.
//!
//! Closed-form prices and first-order Greeks under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Every function takes a validated [`OptionContract`]; the contract
//! guarantees `expiry > 0` and `volatility > 0`, so the d₁ denominator is
//! never zero.

use optval_core::types::{OptionContract, OptionKind};

use super::distributions::{norm_cdf, norm_pdf};

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(contract: &OptionContract) -> f64 {
    let vol_sqrt_t = contract.volatility() * contract.expiry().sqrt();

    let log_moneyness = (contract.spot() / contract.strike()).ln();
    let drift =
        (contract.rate() + 0.5 * contract.volatility() * contract.volatility()) * contract.expiry();

    (log_moneyness + drift) / vol_sqrt_t
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(contract: &OptionContract) -> f64 {
    d1(contract) - contract.volatility() * contract.expiry().sqrt()
}

/// Computes the European option price.
///
/// Matches the contract kind exhaustively:
/// - Call: C = S·N(d₁) - K·e^(-rT)·N(d₂)
/// - Put: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
///
/// Deterministic, O(1), no side effects.
///
/// # Examples
/// ```
/// use optval_core::types::{OptionContract, OptionKind};
/// use optval_models::analytical::black_scholes;
///
/// let call = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let price = black_scholes::price(&call);
/// assert!((price - 10.4506).abs() < 0.001);
/// ```
#[inline]
pub fn price(contract: &OptionContract) -> f64 {
    let d1 = d1(contract);
    let d2 = d2(contract);

    let discount = (-contract.rate() * contract.expiry()).exp();

    match contract.kind() {
        OptionKind::Call => {
            contract.spot() * norm_cdf(d1) - contract.strike() * discount * norm_cdf(d2)
        }
        OptionKind::Put => {
            contract.strike() * discount * norm_cdf(-d2) - contract.spot() * norm_cdf(-d1)
        }
    }
}

/// Computes Delta (∂V/∂S).
///
/// - Call Delta = N(d₁)
/// - Put Delta = N(d₁) - 1
#[inline]
pub fn delta(contract: &OptionContract) -> f64 {
    let n_d1 = norm_cdf(d1(contract));

    match contract.kind() {
        OptionKind::Call => n_d1,
        OptionKind::Put => n_d1 - 1.0,
    }
}

/// Computes Gamma (∂²V/∂S²).
///
/// Gamma = φ(d₁) / (S·σ·√T); identical for calls and puts.
#[inline]
pub fn gamma(contract: &OptionContract) -> f64 {
    norm_pdf(d1(contract))
        / (contract.spot() * contract.volatility() * contract.expiry().sqrt())
}

/// Computes Vega (∂V/∂σ).
///
/// Vega = S·√T·φ(d₁); identical for calls and puts.
#[inline]
pub fn vega(contract: &OptionContract) -> f64 {
    contract.spot() * contract.expiry().sqrt() * norm_pdf(d1(contract))
}

/// Computes Theta (∂V/∂t).
///
/// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
/// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
///
/// Usually negative (time decay).
#[inline]
pub fn theta(contract: &OptionContract) -> f64 {
    let d1 = d1(contract);
    let d2 = d2(contract);
    let sqrt_t = contract.expiry().sqrt();
    let discount = (-contract.rate() * contract.expiry()).exp();

    let decay = -(contract.spot() * contract.volatility() * norm_pdf(d1)) / (2.0 * sqrt_t);

    match contract.kind() {
        OptionKind::Call => decay - contract.rate() * contract.strike() * discount * norm_cdf(d2),
        OptionKind::Put => decay + contract.rate() * contract.strike() * discount * norm_cdf(-d2),
    }
}

/// Computes Rho (∂V/∂r).
///
/// - Call Rho = K·T·e^(-rT)·N(d₂)
/// - Put Rho = -K·T·e^(-rT)·N(-d₂)
#[inline]
pub fn rho(contract: &OptionContract) -> f64 {
    let d2 = d2(contract);
    let discount = (-contract.rate() * contract.expiry()).exp();

    match contract.kind() {
        OptionKind::Call => contract.strike() * contract.expiry() * discount * norm_cdf(d2),
        OptionKind::Put => -contract.strike() * contract.expiry() * discount * norm_cdf(-d2),
    }
}
