//! # hmc-processes
//!
//! The Heston model and its time-discretization schemes.
//!
//! The joint dynamics under the risk-neutral measure are
//!
//! ```text
//! dS = r S dt + √v S dW₁
//! dv = κ(θ − v) dt + σ √v dW₂
//! dW₁ dW₂ = ρ dt
//! ```
//!
//! [`HestonParameters`] holds the validated model constants; the three
//! [`DiscretizationScheme`] implementations advance the state `(S, v)` by
//! one time increment from explicitly injected random draws.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod discretization;
pub mod euler_scheme;
pub mod heston_parameters;
pub mod milstein_scheme;
pub mod quadratic_exponential_scheme;

pub use discretization::DiscretizationScheme;
pub use euler_scheme::EulerScheme;
pub use heston_parameters::HestonParameters;
pub use milstein_scheme::MilsteinScheme;
pub use quadratic_exponential_scheme::QuadraticExponentialScheme;
