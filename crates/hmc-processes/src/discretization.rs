//! `DiscretizationScheme` — the common per-step contract of the three
//! Heston discretizations.
//!
//! A scheme is a pure function of its inputs: the current state `(S, v)`,
//! the time increment, and the random draws for the step. All randomness
//! is injected by the caller, so competing schemes can be driven by
//! identical draws for a like-for-like comparison.

use crate::heston_parameters::HestonParameters;
use hmc_core::{ensure_arg, Price, Real, Result, Time, Variance};

/// One-step state update rule for the Heston dynamics.
pub trait DiscretizationScheme: std::fmt::Debug + Send + Sync {
    /// The model constants the scheme was built from.
    fn parameters(&self) -> &HestonParameters;

    /// Advance the state `(s, v)` by one increment `dt`.
    ///
    /// * `z1` — standard normal deviate driving the price update
    /// * `z2` — standard normal deviate driving the variance update,
    ///   already correlated with `z1`
    /// * `u` — auxiliary uniform deviate in `[0, 1)`; consumed only by the
    ///   quadratic-exponential scheme, ignored by the others
    ///
    /// The returned variance is never negative. Fails with
    /// `InvalidArgument` if `dt ≤ 0`.
    fn step(
        &self,
        s: Price,
        v: Variance,
        dt: Time,
        z1: Real,
        z2: Real,
        u: Real,
    ) -> Result<(Price, Variance)>;
}

/// Shared `dt` precondition check used by every scheme.
pub(crate) fn check_dt(dt: Time) -> Result<()> {
    ensure_arg!(dt > 0.0, "time increment must be positive, got {dt}");
    Ok(())
}
