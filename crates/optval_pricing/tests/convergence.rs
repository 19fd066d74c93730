//! Cross-engine comparison tests.
//!
//! Verifies the numerical engines against the closed-form analytic layer:
//!
//! 1. **Lattice convergence**: the CRR tree's European price approaches
//!    the Black-Scholes price as the step count grows
//! 2. **Exercise-premium ordering**: the LSM American put never prices
//!    below the European put
//! 3. **Call equivalence**: the LSM call path reproduces the European
//!    call up to sampling noise

use approx::assert_relative_eq;
use optval_core::types::{OptionContract, OptionKind};
use optval_models::analytical::black_scholes;
use optval_pricing::lattice::CrrPricer;
use optval_pricing::mc::{LsmConfig, LsmPricer};

fn contract(spot: f64, strike: f64, vol: f64, kind: OptionKind) -> OptionContract {
    OptionContract::new(spot, strike, 1.0, 0.05, vol, kind).unwrap()
}

// ============================================================================
// Lattice vs Analytic
// ============================================================================

#[test]
fn test_lattice_converges_to_analytic_atm_call() {
    let c = contract(100.0, 100.0, 0.2, OptionKind::Call);
    let analytic = black_scholes::price(&c);

    let tree = CrrPricer::new(500).unwrap().price(&c).unwrap();
    assert!(
        (tree - analytic).abs() < 0.05,
        "tree = {:.4}, analytic = {:.4}",
        tree,
        analytic
    );
}

#[test]
fn test_lattice_error_shrinks_with_step_count() {
    let c = contract(100.0, 100.0, 0.2, OptionKind::Call);
    let analytic = black_scholes::price(&c);

    let coarse = (CrrPricer::new(10).unwrap().price(&c).unwrap() - analytic).abs();
    let fine = (CrrPricer::new(2000).unwrap().price(&c).unwrap() - analytic).abs();

    assert!(
        fine < coarse,
        "error did not shrink: coarse = {:.5}, fine = {:.5}",
        coarse,
        fine
    );
    assert!(fine < 0.01);
}

#[test]
fn test_lattice_matches_analytic_across_moneyness() {
    let pricer = CrrPricer::new(1000).unwrap();

    for kind in [OptionKind::Call, OptionKind::Put] {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let c = contract(100.0, strike, 0.2, kind);
            let tree = pricer.price(&c).unwrap();
            let analytic = black_scholes::price(&c);

            assert!(
                (tree - analytic).abs() < 0.05,
                "{:?} K = {}: tree = {:.4}, analytic = {:.4}",
                kind,
                strike,
                tree,
                analytic
            );
        }
    }
}

#[test]
fn test_lattice_put_call_parity_tracks_analytic() {
    let pricer = CrrPricer::new(500).unwrap();
    let call = pricer.price(&contract(100.0, 100.0, 0.2, OptionKind::Call)).unwrap();
    let put = pricer.price(&contract(100.0, 100.0, 0.2, OptionKind::Put)).unwrap();

    let forward = 100.0 - 100.0 * (-0.05_f64).exp();
    assert_relative_eq!(call - put, forward, epsilon = 0.05);
}

// ============================================================================
// LSM vs Analytic
// ============================================================================

fn lsm(seed: u64) -> LsmPricer {
    LsmPricer::new(
        LsmConfig::builder()
            .n_paths(100_000)
            .n_steps(50)
            .seed(seed)
            .build()
            .unwrap(),
    )
}

#[test]
fn test_american_put_dominates_european_across_strikes() {
    let pricer = lsm(42);

    for strike in [90.0, 100.0, 110.0] {
        let c = contract(100.0, strike, 0.2, OptionKind::Put);
        let american = pricer.price(&c);
        let european = black_scholes::price(&c);

        // Sampling noise margin below the European floor
        assert!(
            american > european - 0.1,
            "K = {}: American = {:.4} fell below European = {:.4}",
            strike,
            american,
            european
        );
    }
}

#[test]
fn test_american_put_exercise_premium_grows_in_the_money() {
    // The early-exercise premium is material for ITM puts
    let pricer = lsm(42);
    let c = contract(100.0, 120.0, 0.2, OptionKind::Put);

    let american = pricer.price(&c);
    let european = black_scholes::price(&c);

    assert!(
        american > european + 0.1,
        "ITM American = {:.4} should carry a premium over European = {:.4}",
        american,
        european
    );
}

#[test]
fn test_lsm_call_reproduces_european_call() {
    let pricer = lsm(42);

    for strike in [90.0, 100.0, 110.0] {
        let c = contract(100.0, strike, 0.2, OptionKind::Call);
        let simulated = pricer.price(&c);
        let analytic = black_scholes::price(&c);

        assert!(
            (simulated - analytic).abs() < 0.3,
            "K = {}: LSM call = {:.4}, analytic = {:.4}",
            strike,
            simulated,
            analytic
        );
    }
}

#[test]
fn test_engines_agree_on_european_call() {
    // Same contract through all three engines
    let c = contract(100.0, 100.0, 0.2, OptionKind::Call);

    let analytic = black_scholes::price(&c);
    let tree = CrrPricer::new(500).unwrap().price(&c).unwrap();
    let simulated = lsm(7).price(&c);

    assert!((tree - analytic).abs() < 0.05);
    assert!((simulated - analytic).abs() < 0.3);
}
