//! # Optval Core (Foundation Layer)
//!
//! Shared foundations for the optval pricing workspace.
//!
//! This crate provides:
//! - Contract value types (`OptionContract`, `OptionKind`)
//! - Structured error types (`ContractError`, `SolverError`)
//! - Root-finding solvers (`BrentSolver`)
//!
//! ## Design Principles
//!
//! - **Validated value objects**: parameter-range errors are caught at
//!   construction, so the pricers above this layer operate on known-good
//!   inputs
//! - **Enum-based option kinds** for exhaustive matching (no string
//!   dispatch)
//! - **Typed errors** returned to the caller, never logged or retried

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{ContractError, OptionContract, OptionKind, SolverError};
