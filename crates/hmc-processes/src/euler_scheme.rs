//! Full-truncation Euler discretization.
//!
//! ```text
//! v' = v + κ(θ − v) Δt + σ √v √Δt Z₂ ,  floored at 0
//! S' = S · exp((r − v/2) Δt + √v √Δt Z₁)
//! ```
//!
//! The price update uses the *pre-step* variance as its local volatility.
//! First-order weak accuracy; for low Feller ratios the variance path
//! hits the floor frequently.

use crate::discretization::{check_dt, DiscretizationScheme};
use crate::heston_parameters::HestonParameters;
use hmc_core::{Price, Real, Result, Time, Variance};

/// The full-truncation Euler scheme.
#[derive(Debug, Clone)]
pub struct EulerScheme {
    parameters: HestonParameters,
}

impl EulerScheme {
    /// Create an Euler scheme for the given model constants.
    pub fn new(parameters: HestonParameters) -> Self {
        Self { parameters }
    }
}

impl DiscretizationScheme for EulerScheme {
    fn parameters(&self) -> &HestonParameters {
        &self.parameters
    }

    fn step(
        &self,
        s: Price,
        v: Variance,
        dt: Time,
        z1: Real,
        z2: Real,
        _u: Real,
    ) -> Result<(Price, Variance)> {
        check_dt(dt)?;
        let p = &self.parameters;

        // Clamp before the square root; the incoming variance is already
        // non-negative when produced by this scheme.
        let v = v.max(0.0);
        let sqrt_v = v.sqrt();
        let sqrt_dt = dt.sqrt();

        let v_next = (v + p.kappa() * (p.theta() - v) * dt + p.sigma() * sqrt_v * sqrt_dt * z2)
            .max(0.0);
        let s_next = s * ((p.r() - 0.5 * v) * dt + sqrt_v * sqrt_dt * z1).exp();

        Ok((s_next, v_next))
    }
}
