//! Cox-Ross-Rubinstein binomial tree pricer.
//!
//! References: Cox-Ross-Rubinstein (1979); Hull, Options, Futures and
//! Other Derivatives, Ch. 13.

use optval_core::types::OptionContract;

use super::error::LatticeError;

/// Cox-Ross-Rubinstein binomial tree pricer.
///
/// Prices European exercise by backward induction over a recombining
/// tree with per-step factors `u = exp(σ√dt)`, `d = 1/u` and risk-neutral
/// up-probability `p = (exp(r·dt) − d)/(u − d)`.
///
/// Interior nodes take the discounted risk-neutral expectation of their
/// two children; no early-exercise comparison is made.
///
/// # Examples
/// ```
/// use optval_core::types::{OptionContract, OptionKind};
/// use optval_pricing::lattice::CrrPricer;
///
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let pricer = CrrPricer::new(500).unwrap();
///
/// let price = pricer.price(&contract).unwrap();
/// assert!((price - 10.45).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct CrrPricer {
    steps: usize,
}

impl CrrPricer {
    /// Creates a pricer with the given number of tree steps.
    ///
    /// # Errors
    /// Returns `LatticeError::InvalidStepCount` if `steps < 1`.
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps < 1 {
            return Err(LatticeError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    /// Returns the number of tree steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices the contract by backward induction to the root node.
    ///
    /// O(steps²) time, O(steps) space: node values live in a rolling
    /// array seeded with terminal payoffs and overwritten step by step
    /// back to the root.
    ///
    /// # Errors
    /// Returns `LatticeError::ProbabilityOutOfRange` when the derived
    /// risk-neutral probability is not a probability; the discretisation
    /// is invalid for those inputs and a finer step count (or different
    /// parameters) is required.
    pub fn price(&self, contract: &OptionContract) -> Result<f64, LatticeError> {
        let n = self.steps;
        let dt = contract.expiry() / n as f64;

        let u = (contract.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        let growth = (contract.rate() * dt).exp();
        let p = (growth - d) / (u - d);

        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(LatticeError::ProbabilityOutOfRange { p });
        }

        let disc = (-contract.rate() * dt).exp();
        let disc_p = disc * p;
        let disc_1mp = disc * (1.0 - p);

        // Terminal layer: node j carries j down-moves, so
        // S_T = S·u^(n-j)·d^j. The multiplicative recurrence replaces
        // O(n) powf calls per node with one multiply.
        let ratio = d / u;
        let mut values = vec![0.0_f64; n + 1];
        let mut terminal = contract.spot() * u.powi(n as i32);
        for value in values.iter_mut() {
            *value = contract.payoff(terminal);
            terminal *= ratio;
        }

        // Backward induction: node (i, j) has up-child (i+1, j) and
        // down-child (i+1, j+1)
        for i in (0..n).rev() {
            for j in 0..=i {
                values[j] = disc_p * values[j] + disc_1mp * values[j + 1];
            }
        }

        Ok(values[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optval_core::types::OptionKind;
    use proptest::prelude::*;

    // Black-Scholes reference values for S=100, K=100, T=1, r=0.05, σ=0.2
    const BS_CALL_REF: f64 = 10.4506;
    const BS_PUT_REF: f64 = 5.5735;

    fn atm(kind: OptionKind) -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).unwrap()
    }

    #[test]
    fn test_zero_steps_rejected() {
        let result = CrrPricer::new(0);
        assert!(matches!(result, Err(LatticeError::InvalidStepCount(0))));
    }

    #[test]
    fn test_single_step_tree() {
        let pricer = CrrPricer::new(1).unwrap();
        let price = pricer.price(&atm(OptionKind::Call)).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn test_call_converges_to_reference() {
        let pricer = CrrPricer::new(500).unwrap();
        let price = pricer.price(&atm(OptionKind::Call)).unwrap();
        assert!(
            (price - BS_CALL_REF).abs() < 0.05,
            "tree = {}, reference = {}",
            price,
            BS_CALL_REF
        );
    }

    #[test]
    fn test_put_converges_to_reference() {
        let pricer = CrrPricer::new(500).unwrap();
        let price = pricer.price(&atm(OptionKind::Put)).unwrap();
        assert!((price - BS_PUT_REF).abs() < 0.05);
    }

    #[test]
    fn test_convergence_tightens_with_steps() {
        let coarse = CrrPricer::new(25).unwrap().price(&atm(OptionKind::Call)).unwrap();
        let fine = CrrPricer::new(2000)
            .unwrap()
            .price(&atm(OptionKind::Call))
            .unwrap();

        assert!((fine - BS_CALL_REF).abs() < 0.02);
        // The coarse tree is still in the right neighbourhood
        assert!((coarse - BS_CALL_REF).abs() < 0.5);
    }

    #[test]
    fn test_put_call_parity_within_discretisation_error() {
        let pricer = CrrPricer::new(500).unwrap();
        let call = pricer.price(&atm(OptionKind::Call)).unwrap();
        let put = pricer.price(&atm(OptionKind::Put)).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 0.05);
    }

    #[test]
    fn test_price_monotone_in_volatility() {
        let pricer = CrrPricer::new(200).unwrap();
        let mut last = 0.0;
        for vol in [0.05, 0.1, 0.2, 0.4] {
            let contract = atm(OptionKind::Call).with_volatility(vol);
            let price = pricer.price(&contract).unwrap();
            assert!(price > last, "not increasing at σ = {}", vol);
            last = price;
        }
    }

    #[test]
    fn test_call_monotone_in_spot() {
        let pricer = CrrPricer::new(200).unwrap();
        let low = pricer
            .price(&OptionContract::new(90.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap())
            .unwrap();
        let high = pricer
            .price(&OptionContract::new(110.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap())
            .unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_probability_out_of_range_surfaced() {
        // One coarse step with low volatility and high rate: the growth
        // factor exceeds the up-factor and p > 1
        let contract = OptionContract::new(100.0, 100.0, 1.0, 0.5, 0.01, OptionKind::Call).unwrap();
        let pricer = CrrPricer::new(1).unwrap();

        match pricer.price(&contract) {
            Err(LatticeError::ProbabilityOutOfRange { p }) => assert!(p > 1.0),
            other => panic!("Expected ProbabilityOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_itm_call_near_forward_intrinsic() {
        let contract = OptionContract::new(200.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
        let pricer = CrrPricer::new(500).unwrap();
        let price = pricer.price(&contract).unwrap();
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= intrinsic - 0.05);
    }

    proptest! {
        // Tree prices respect the no-arbitrage envelope for calls:
        // max(0, S - K·e^(-rT)) <= C <= S
        #[test]
        fn prop_call_price_within_arbitrage_bounds(
            strike in 50.0_f64..150.0,
            vol in 0.1_f64..0.6,
        ) {
            let contract =
                OptionContract::new(100.0, strike, 1.0, 0.05, vol, OptionKind::Call).unwrap();
            let price = CrrPricer::new(50).unwrap().price(&contract).unwrap();

            let lower = (100.0 - strike * (-0.05_f64).exp()).max(0.0);
            prop_assert!(price >= lower - 1e-9);
            prop_assert!(price <= 100.0 + 1e-9);
        }
    }
}
