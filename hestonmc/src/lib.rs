//! # hestonmc
//!
//! Monte Carlo simulation of the Heston stochastic volatility model under
//! competing time-discretization schemes — full-truncation Euler,
//! Milstein, and Andersen's quadratic-exponential — with European option
//! pricing and a harness comparing the schemes on accuracy, convergence,
//! and statistical stability.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hmc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hestonmc = "0.1"
//! ```
//!
//! ```rust
//! use hestonmc::math::PseudoRandomDraws;
//! use hestonmc::methods::{OptionPricer, PathSimulator};
//! use hestonmc::processes::{EulerScheme, HestonParameters};
//!
//! let parameters =
//!     HestonParameters::new(100.0, 0.04, 2.0, 0.04, 0.3, -0.7, 0.05).unwrap();
//! let scheme = EulerScheme::new(parameters);
//! let simulator = PathSimulator::new(&scheme, 1_000, 1.0, 64).unwrap();
//! let mut draws = PseudoRandomDraws::new(42, parameters.rho());
//! let mut pricer = OptionPricer::new(&simulator, &mut draws);
//!
//! let price = pricer.european_call(100.0).unwrap();
//! assert!(price > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hmc_core as core;

/// Mathematical utilities: distributions, RNG and draw sources,
/// statistics.
pub use hmc_math as math;

/// The Heston model and its discretization schemes.
pub use hmc_processes as processes;

/// Monte Carlo methods: path simulation, pricing, scheme comparison.
pub use hmc_methods as methods;
