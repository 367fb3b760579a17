//! Milstein discretization.
//!
//! Adds the second-order Itô correction to both updates:
//!
//! ```text
//! v' = v + κ(θ − v) Δt + σ √v √Δt Z₂ + σ²/4 · Δt (Z₂² − 1) ,  floored at 0
//! S' = S · exp((r − v/2) Δt + √v √Δt Z₁ + σ √v / 2 · Δt (Z₁² − 1))
//! ```
//!
//! Reduces discretization bias versus Euler at the same step count.

use crate::discretization::{check_dt, DiscretizationScheme};
use crate::heston_parameters::HestonParameters;
use hmc_core::{Price, Real, Result, Time, Variance};

/// The Milstein scheme.
#[derive(Debug, Clone)]
pub struct MilsteinScheme {
    parameters: HestonParameters,
}

impl MilsteinScheme {
    /// Create a Milstein scheme for the given model constants.
    pub fn new(parameters: HestonParameters) -> Self {
        Self { parameters }
    }
}

impl DiscretizationScheme for MilsteinScheme {
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

        let v = v.max(0.0);
        let sqrt_v = v.sqrt();
        let sqrt_dt = dt.sqrt();

        let v_next = (v
            + p.kappa() * (p.theta() - v) * dt
            + p.sigma() * sqrt_v * sqrt_dt * z2
            + 0.25 * p.sigma() * p.sigma() * dt * (z2 * z2 - 1.0))
            .max(0.0);

        let s_next = s
            * ((p.r() - 0.5 * v) * dt
                + sqrt_v * sqrt_dt * z1
                + 0.5 * sqrt_v * p.sigma() * dt * (z1 * z1 - 1.0))
                .exp();

        Ok((s_next, v_next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EulerScheme;
    use approx::assert_abs_diff_eq;

    fn parameters() -> HestonParameters {
        HestonParameters::new(100.0, 0.04, 2.0, 0.04, 0.3, -0.7, 0.05).unwrap()
    }

    #[test]
    fn single_step_regression() {
        // v' = 0.0382 + 0.25·0.09·0.01·(0.09 − 1)      = 0.03799525
        // S' = 100 · exp(0.0103 + 0.5·0.2·0.3·0.01·(0.25 − 1))
        //    = 100 · exp(0.010075)
        let scheme = MilsteinScheme::new(parameters());
        let (s_next, v_next) = scheme.step(100.0, 0.04, 0.01, 0.5, -0.3, 0.5).unwrap();
        assert_abs_diff_eq!(v_next, 0.037_995_25, epsilon = 1e-12);
        assert_abs_diff_eq!(s_next, 101.012_592_37, epsilon = 1e-6);
    }

    #[test]
    fn reduces_to_euler_when_corrections_vanish() {
        // Z² = 1 kills both correction terms
        let milstein = MilsteinScheme::new(parameters());
        let euler = EulerScheme::new(parameters());
        let m = milstein.step(100.0, 0.03, 0.01, 1.0, -1.0, 0.5).unwrap();
        let e = euler.step(100.0, 0.03, 0.01, 1.0, -1.0, 0.5).unwrap();
        assert_abs_diff_eq!(m.0, e.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.1, e.1, epsilon = 1e-12);
    }

    #[test]
    fn variance_is_floored_at_zero() {
        let scheme = MilsteinScheme::new(parameters());
        let (_, v_next) = scheme.step(100.0, 0.0004, 0.5, 0.0, -3.0, 0.5).unwrap();
        assert!(v_next >= 0.0);
    }
}
