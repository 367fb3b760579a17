//! # hmc-methods
//!
//! Monte Carlo machinery for the Heston engine: path simulation across a
//! grid of independent trajectories, European option pricing from terminal
//! prices, and the harness comparing discretization schemes on accuracy,
//! convergence, and statistical stability.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod comparison;
pub mod monte_carlo;

pub use comparison::MethodComparison;
pub use monte_carlo::{OptionPricer, PathSet, PathSimulator};
