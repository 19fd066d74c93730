//! Least-squares Monte Carlo pricing.
//!
//! This module provides the Longstaff-Schwartz pricer for American-style
//! options:
//! - [`LsmConfig`]: validated simulation configuration with optional seed
//! - [`PathWorkspace`]: per-call path grid and cashflow buffers
//! - [`LsmPricer`]: backward-induction pricer with regression-based
//!   continuation values

mod config;
mod error;
mod lsm;
mod paths;
mod regression;
mod workspace;

pub use config::{LsmConfig, LsmConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use lsm::LsmPricer;
pub use paths::generate_paths;
pub use workspace::PathWorkspace;
