//! # Optval Models (Analytic Layer)
//!
//! Closed-form valuation for European options.
//!
//! This crate provides:
//! - Standard normal distribution functions (CDF, PDF)
//! - Black-Scholes prices and Greeks over an
//!   [`OptionContract`](optval_core::types::OptionContract)
//! - Implied volatility recovery by bracketed root search
//!
//! ## Design Principles
//!
//! - **Pure functions of the contract**: no model object carries state
//!   between calls
//! - **Validation at the boundary**: contracts arrive range-checked, so
//!   the formulas never divide by zero
//! - **Sentinel, not panic**: an unreachable implied volatility is a
//!   `None`, never an error path

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied;
