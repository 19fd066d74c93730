//! Core value types for option valuation.
//!
//! This module provides:
//! - `OptionKind`: call/put payoff selector
//! - `OptionContract`: validated, immutable pricing inputs
//! - Error types shared across the workspace

mod contract;
mod error;

pub use contract::{OptionContract, OptionKind};
pub use error::{ContractError, SolverError};
