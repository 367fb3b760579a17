//! Heston model parameters.

use hmc_core::{ensure_param, Price, Rate, Real, Result, Variance, Volatility};

/// The immutable set of Heston model constants.
///
/// * `s0`    — initial asset price
/// * `v0`    — initial variance
/// * `kappa` — mean-reversion speed of variance
/// * `theta` — long-run variance level
/// * `sigma` — vol-of-vol
/// * `rho`   — correlation between the two Brownian motions
/// * `r`     — risk-free rate
///
/// Validated once at construction; every scheme built from a
/// `HestonParameters` value shares the same constants and none mutates
/// them afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HestonParameters {
    s0: Price,
    v0: Variance,
    kappa: Real,
    theta: Variance,
    sigma: Volatility,
    rho: Real,
    r: Rate,
}

impl HestonParameters {
    /// Create a validated parameter set.
    ///
    /// Fails with `InvalidParameter` if `s0 ≤ 0`, `v0 < 0`, `kappa ≤ 0`,
    /// `theta ≤ 0`, `sigma ≤ 0`, or `rho` lies outside [-1, 1]. The rate
    /// `r` may be any real number.
    pub fn new(
        s0: Price,
        v0: Variance,
        kappa: Real,
        theta: Variance,
        sigma: Volatility,
        rho: Real,
        r: Rate,
    ) -> Result<Self> {
        ensure_param!(s0 > 0.0, "initial price must be positive, got {s0}");
        ensure_param!(v0 >= 0.0, "initial variance must be non-negative, got {v0}");
        ensure_param!(kappa > 0.0, "mean-reversion speed must be positive, got {kappa}");
        ensure_param!(theta > 0.0, "long-run variance must be positive, got {theta}");
        ensure_param!(sigma > 0.0, "vol-of-vol must be positive, got {sigma}");
        ensure_param!(
            (-1.0..=1.0).contains(&rho),
            "correlation must be in [-1, 1], got {rho}"
        );
        Ok(Self {
            s0,
            v0,
            kappa,
            theta,
            sigma,
            rho,
            r,
        })
    }

    /// Initial asset price.
    pub fn s0(&self) -> Price {
        self.s0
    }

    /// Initial variance.
    pub fn v0(&self) -> Variance {
        self.v0
    }

    /// Mean-reversion speed.
    pub fn kappa(&self) -> Real {
        self.kappa
    }

    /// Long-run variance.
    pub fn theta(&self) -> Variance {
        self.theta
    }

    /// Vol-of-vol.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Correlation between the price and variance Brownian motions.
    pub fn rho(&self) -> Real {
        self.rho
    }

    /// Risk-free rate.
    pub fn r(&self) -> Rate {
        self.r
    }

    /// The Feller ratio `2κθ / σ²`.
    ///
    /// Values below 1 mean the variance process can reach zero, which
    /// stresses the truncation-based schemes.
    pub fn feller_ratio(&self) -> Real {
        2.0 * self.kappa * self.theta / (self.sigma * self.sigma)
    }

    /// Whether the Feller condition `2κθ ≥ σ²` holds.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.kappa * self.theta >= self.sigma * self.sigma
    }
}
