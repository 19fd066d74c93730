//! Root-finding solvers.
//!
//! This module provides derivative-free root finding for inverting
//! pricing formulas:
//! - [`SolverConfig`]: shared tolerance and iteration settings
//! - [`BrentSolver`]: bracketed Brent's method

mod brent;
mod config;

pub use brent::BrentSolver;
pub use config::SolverConfig;
