//! Comparison harness scoring discretization schemes against a reference
//! price.
//!
//! Three diagnostics, each built from European call pricing runs:
//!
//! * **accuracy** — absolute error of one estimate against the supplied
//!   reference price;
//! * **convergence** — accuracy per step count, in the caller's order;
//! * **stability** — standard deviation of repeated independent estimates.
//!
//! The harness owns the random-generator lifecycle: it holds a base seed
//! and hands every pricing run its own derived stream, so trials are
//! independent yet the whole comparison replays exactly from the same
//! seed.

use crate::monte_carlo::{OptionPricer, PathSimulator};
use hmc_core::{ensure_arg, Price, Real, Result, Size, Time};
use hmc_math::{PseudoRandomDraws, Statistics};
use hmc_processes::DiscretizationScheme;

/// Customary number of repeated trials for [`MethodComparison::stability`].
pub const DEFAULT_NUM_TRIALS: Size = 10;

/// Splitmix64 golden-ratio increment separating per-run streams.
const STREAM_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Scores schemes on accuracy, convergence, and stability.
pub struct MethodComparison {
    maturity: Time,
    strike: Price,
    true_price: Price,
    seed: u64,
    stream: u64,
}

impl MethodComparison {
    /// Create a harness for the given horizon, strike, reference price,
    /// and base seed.
    ///
    /// Fails with `InvalidArgument` if `maturity ≤ 0`.
    pub fn new(maturity: Time, strike: Price, true_price: Price, seed: u64) -> Result<Self> {
        ensure_arg!(maturity > 0.0, "maturity must be positive, got {maturity}");
        Ok(Self {
            maturity,
            strike,
            true_price,
            seed,
            stream: 0,
        })
    }

    /// The reference price estimates are scored against.
    pub fn true_price(&self) -> Price {
        self.true_price
    }

    /// A fresh draw source on the next derived stream.
    fn next_stream(&mut self, correlation: Real) -> PseudoRandomDraws {
        let seed = self
            .seed
            .wrapping_add(self.stream.wrapping_mul(STREAM_INCREMENT));
        self.stream += 1;
        PseudoRandomDraws::new(seed, correlation)
    }

    /// One European call pricing run with fresh randomness.
    fn call_estimate(
        &mut self,
        scheme: &dyn DiscretizationScheme,
        num_paths: Size,
        num_steps: Size,
    ) -> Result<Price> {
        let simulator = PathSimulator::new(scheme, num_paths, self.maturity, num_steps)?;
        let mut draws = self.next_stream(scheme.parameters().rho());
        let mut pricer = OptionPricer::new(&simulator, &mut draws);
        pricer.european_call(self.strike)
    }

    /// Absolute pricing error of one run, `|estimate − true price|`.
    ///
    /// A failing scheme run aborts the call; errors are not caught here.
    pub fn accuracy(
        &mut self,
        scheme: &dyn DiscretizationScheme,
        num_paths: Size,
        num_steps: Size,
    ) -> Result<Real> {
        let estimate = self.call_estimate(scheme, num_paths, num_steps)?;
        Ok((estimate - self.true_price).abs())
    }

    /// Accuracy per step count, preserving the input order.
    pub fn convergence(
        &mut self,
        scheme: &dyn DiscretizationScheme,
        num_paths: Size,
        step_counts: &[Size],
    ) -> Result<Vec<Real>> {
        step_counts
            .iter()
            .map(|&num_steps| self.accuracy(scheme, num_paths, num_steps))
            .collect()
    }

    /// Sample standard deviation of `num_trials` independent price
    /// estimates (each trial draws fresh randomness by design — the point
    /// is to measure estimator variance).
    ///
    /// Fails with `InvalidArgument` if `num_trials < 2`.
    pub fn stability(
        &mut self,
        scheme: &dyn DiscretizationScheme,
        num_paths: Size,
        num_steps: Size,
        num_trials: Size,
    ) -> Result<Real> {
        ensure_arg!(
            num_trials >= 2,
            "at least two trials are required, got {num_trials}"
        );
        let mut stats = Statistics::new();
        for _ in 0..num_trials {
            stats.add(self.call_estimate(scheme, num_paths, num_steps)?);
        }
        Ok(stats.std_dev().unwrap_or(0.0))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
