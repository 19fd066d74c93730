//! Trajectory generation for Monte Carlo simulation.
//!
//! Simulates geometric Brownian motion with the exact log-space
//! discretisation:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - σ²/2)·dt + σ·√dt × Z)
//! ```
//!
//! Trajectories are independent, so generation fans out across rayon
//! workers. Each trajectory draws from its own RNG stream derived from
//! the base seed and the trajectory index, which keeps a seeded
//! simulation bit-identical regardless of thread count.

use optval_core::types::OptionContract;
use rayon::prelude::*;

use super::workspace::PathWorkspace;
use crate::rng::SimRng;

/// Generates all trajectories into the workspace path grid.
///
/// Uses the full workspace dimensions: `workspace.n_paths()` trajectories
/// of `workspace.n_steps()` steps covering `contract.expiry()` years.
/// Trajectory `i` starts at the contract spot and evolves under the
/// stream seeded `base_seed + i` (`StdRng::seed_from_u64` decorrelates
/// adjacent seeds through SplitMix64 expansion).
pub fn generate_paths(workspace: &mut PathWorkspace, contract: &OptionContract, base_seed: u64) {
    let n_steps = workspace.n_steps();
    let dt = contract.expiry() / n_steps as f64;

    // Hoisted per-step constants
    let drift_dt = (contract.rate() - 0.5 * contract.volatility() * contract.volatility()) * dt;
    let vol_sqrt_dt = contract.volatility() * dt.sqrt();
    let spot = contract.spot();

    workspace
        .paths_mut()
        .par_chunks_mut(n_steps + 1)
        .enumerate()
        .for_each(|(path_idx, path)| {
            let mut rng = SimRng::from_seed(base_seed.wrapping_add(path_idx as u64));

            path[0] = spot;
            for step in 0..n_steps {
                let z = rng.gen_normal();
                path[step + 1] = path[step] * (drift_dt + vol_sqrt_dt * z).exp();
            }
        });
}
