//! # Optval Pricing (Engine Layer)
//!
//! Numerical pricing engines for vanilla options.
//!
//! This crate provides:
//! - Cox-Ross-Rubinstein binomial lattice for European exercise
//! - Least-squares Monte Carlo (Longstaff-Schwartz) for American-style
//!   early exercise
//! - Seeded random number generation for reproducible simulation
//!
//! ## Design Principles
//!
//! - **Per-call state only**: path grids, cashflow vectors, and lattice
//!   arrays are allocated inside a pricing call and discarded on return;
//!   concurrent calls share nothing
//! - **Explicit randomness**: every simulation draws from a seedable
//!   source passed through configuration, never from ambient global state
//! - **Trajectory fan-out**: path simulation parallelises across rayon
//!   workers; backward induction stays sequential across time steps

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lattice;
pub mod mc;
pub mod rng;

pub use lattice::{CrrPricer, LatticeError};
pub use mc::{ConfigError, LsmConfig, LsmPricer};
