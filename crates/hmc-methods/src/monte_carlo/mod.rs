//! Monte Carlo simulation and pricing.
//!
//! # Overview
//!
//! * [`PathSet`] — the simulated price and variance grids
//! * [`PathSimulator`] — drives a discretization scheme across
//!   `num_paths × num_steps` increments from an injected draw source
//! * [`OptionPricer`] — discounted expected payoff over terminal prices
//!
//! Every path starts at `(S0, v0)` and paths are mutually independent;
//! the whole simulation is deterministic given a fixed draw source.

use hmc_core::{ensure_arg, DiscountFactor, Error, Price, Real, Result, Size, Time, Variance};
use hmc_math::{DrawSource, Matrix, Statistics};
use hmc_processes::DiscretizationScheme;

// ─── PathSet ──────────────────────────────────────────────────────────────────

/// The result of one simulation run: price and variance states on a
/// `num_paths × (num_steps + 1)` grid, column 0 holding the initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSet {
    prices: Matrix,
    variances: Matrix,
}

impl PathSet {
    /// Number of simulated trajectories.
    pub fn num_paths(&self) -> Size {
        self.prices.rows()
    }

    /// Number of states per trajectory (`num_steps + 1`).
    pub fn num_points(&self) -> Size {
        self.prices.cols()
    }

    /// Price state of path `i` at grid point `j`.
    pub fn price(&self, i: Size, j: Size) -> Price {
        self.prices[(i, j)]
    }

    /// Variance state of path `i` at grid point `j`.
    pub fn variance(&self, i: Size, j: Size) -> Variance {
        self.variances[(i, j)]
    }

    /// The full price trajectory of path `i`.
    pub fn price_path(&self, i: Size) -> Vec<Price> {
        self.prices.row(i)
    }

    /// The full variance trajectory of path `i`.
    pub fn variance_path(&self, i: Size) -> Vec<Variance> {
        self.variances.row(i)
    }

    /// Terminal prices of all paths (the last grid column).
    pub fn terminal_prices(&self) -> Vec<Price> {
        self.prices.column(self.prices.cols() - 1)
    }

    /// The price grid.
    pub fn prices(&self) -> &Matrix {
        &self.prices
    }

    /// The variance grid.
    pub fn variances(&self) -> &Matrix {
        &self.variances
    }
}

// ─── PathSimulator ────────────────────────────────────────────────────────────

/// Drives a discretization scheme across a grid of independent paths.
pub struct PathSimulator<'a> {
    scheme: &'a dyn DiscretizationScheme,
    num_paths: Size,
    maturity: Time,
    num_steps: Size,
}

impl<'a> PathSimulator<'a> {
    /// Create a simulator.
    ///
    /// Fails with `InvalidArgument` if `num_paths`, `num_steps`, or
    /// `maturity` is not positive.
    pub fn new(
        scheme: &'a dyn DiscretizationScheme,
        num_paths: Size,
        maturity: Time,
        num_steps: Size,
    ) -> Result<Self> {
        ensure_arg!(num_paths > 0, "path count must be positive, got {num_paths}");
        ensure_arg!(num_steps > 0, "step count must be positive, got {num_steps}");
        ensure_arg!(maturity > 0.0, "maturity must be positive, got {maturity}");
        Ok(Self {
            scheme,
            num_paths,
            maturity,
            num_steps,
        })
    }

    /// The scheme being simulated.
    pub fn scheme(&self) -> &dyn DiscretizationScheme {
        self.scheme
    }

    /// Number of trajectories per run.
    pub fn num_paths(&self) -> Size {
        self.num_paths
    }

    /// Time horizon in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Number of time steps per trajectory.
    pub fn num_steps(&self) -> Size {
        self.num_steps
    }

    /// The uniform time increment `T / num_steps`.
    pub fn dt(&self) -> Time {
        self.maturity / self.num_steps as Real
    }

    /// Simulate all paths, consuming one draw pair and one uniform per
    /// `(path, step)` cell of the source.
    pub fn generate(&self, draws: &mut dyn DrawSource) -> Result<PathSet> {
        let parameters = self.scheme.parameters();
        let dt = self.dt();
        let mut prices = Matrix::zeros(self.num_paths, self.num_steps + 1);
        let mut variances = Matrix::zeros(self.num_paths, self.num_steps + 1);

        for path in 0..self.num_paths {
            let mut s = parameters.s0();
            let mut v = parameters.v0();
            prices[(path, 0)] = s;
            variances[(path, 0)] = v;

            for step in 0..self.num_steps {
                let pair = draws.draw(path, step);
                let u = draws.uniform(path, step);
                let (s_next, v_next) = self.scheme.step(s, v, dt, pair.z1, pair.z2, u)?;
                s = s_next;
                v = v_next;
                prices[(path, step + 1)] = s;
                variances[(path, step + 1)] = v;
            }
        }

        Ok(PathSet { prices, variances })
    }

    /// Simulate a single trajectory (path index 0 of the source).
    ///
    /// Returns the price and variance paths as vectors of
    /// `num_steps + 1` states.
    pub fn single_path(&self, draws: &mut dyn DrawSource) -> Result<(Vec<Price>, Vec<Variance>)> {
        let parameters = self.scheme.parameters();
        let dt = self.dt();
        let mut prices = Vec::with_capacity(self.num_steps + 1);
        let mut variances = Vec::with_capacity(self.num_steps + 1);

        let mut s = parameters.s0();
        let mut v = parameters.v0();
        prices.push(s);
        variances.push(v);

        for step in 0..self.num_steps {
            let pair = draws.draw(0, step);
            let u = draws.uniform(0, step);
            let (s_next, v_next) = self.scheme.step(s, v, dt, pair.z1, pair.z2, u)?;
            s = s_next;
            v = v_next;
            prices.push(s);
            variances.push(v);
        }

        Ok((prices, variances))
    }
}

// ─── OptionPricer ─────────────────────────────────────────────────────────────

/// Prices European payoffs from a simulator's terminal prices.
///
/// Each pricing call triggers a path generation from the held draw source:
/// a lazy source gives fresh paths per call, a [`hmc_math::DrawTable`]
/// replays identical paths — the mode to use when several payoffs must be
/// evaluated on the same trajectories.
pub struct OptionPricer<'a> {
    simulator: &'a PathSimulator<'a>,
    draws: &'a mut dyn DrawSource,
}

impl<'a> OptionPricer<'a> {
    /// Create a pricer around a simulator and a draw source.
    pub fn new(simulator: &'a PathSimulator<'a>, draws: &'a mut dyn DrawSource) -> Self {
        Self { simulator, draws }
    }

    /// Discounted expected payoff `exp(-rT) · mean(max(payoff(S_T), 0))`.
    pub fn price<F>(&mut self, payoff: F) -> Result<Price>
    where
        F: Fn(Price) -> Real,
    {
        self.price_with_error(payoff).map(|(price, _)| price)
    }

    /// Like [`price`](Self::price), also returning the Monte Carlo
    /// standard error of the discounted estimate.
    pub fn price_with_error<F>(&mut self, payoff: F) -> Result<(Price, Real)>
    where
        F: Fn(Price) -> Real,
    {
        let paths = self.simulator.generate(self.draws)?;
        let parameters = self.simulator.scheme().parameters();
        let discount: DiscountFactor = (-parameters.r() * self.simulator.maturity()).exp();

        let mut stats = Statistics::new();
        for s_t in paths.terminal_prices() {
            stats.add(payoff(s_t).max(0.0));
        }

        let mean = stats
            .mean()
            .ok_or_else(|| Error::NumericDomain("no terminal prices to average".into()))?;
        if !mean.is_finite() {
            return Err(Error::NumericDomain(format!(
                "discounted payoff mean is not finite: {mean}"
            )));
        }
        let error = stats.error_estimate().unwrap_or(0.0);

        Ok((discount * mean, discount * error))
    }

    /// Price of a European call with the given strike.
    pub fn european_call(&mut self, strike: Price) -> Result<Price> {
        self.price(|s| s - strike)
    }

    /// Price of a European put with the given strike.
    pub fn european_put(&mut self, strike: Price) -> Result<Price> {
        self.price(|s| strike - s)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hmc_core::Error;
    use hmc_math::{DrawTable, PseudoRandomDraws};
    use hmc_processes::{
        EulerScheme, HestonParameters, MilsteinScheme, QuadraticExponentialScheme,
    };

    fn parameters() -> HestonParameters {
        HestonParameters::new(100.0, 0.04, 2.0, 0.04, 0.3, -0.7, 0.05).unwrap()
    }

    fn schemes() -> Vec<Box<dyn DiscretizationScheme>> {
        vec![
            Box::new(EulerScheme::new(parameters())),
            Box::new(MilsteinScheme::new(parameters())),
            Box::new(QuadraticExponentialScheme::new(parameters())),
        ]
    }

    #[test]
    fn simulator_rejects_degenerate_arguments() {
        let scheme = EulerScheme::new(parameters());
        for result in [
            PathSimulator::new(&scheme, 0, 1.0, 10),
            PathSimulator::new(&scheme, 10, 1.0, 0),
            PathSimulator::new(&scheme, 10, 0.0, 10),
            PathSimulator::new(&scheme, 10, -1.0, 10),
        ] {
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn grid_shape_and_initial_state() {
        for scheme in schemes() {
            let simulator = PathSimulator::new(scheme.as_ref(), 4, 1.0, 8).unwrap();
            let mut draws = PseudoRandomDraws::new(42, parameters().rho());
            let paths = simulator.generate(&mut draws).unwrap();
            assert_eq!(paths.num_paths(), 4);
            assert_eq!(paths.num_points(), 9);
            for i in 0..4 {
                assert_eq!(paths.price(i, 0), 100.0, "{scheme:?}");
                assert_eq!(paths.variance(i, 0), 0.04, "{scheme:?}");
            }
        }
    }

    #[test]
    fn variances_stay_non_negative_for_all_schemes() {
        // Feller-violating constants stress the floor and, for QE, the
        // exponential branch with its point mass at zero
        let stressed = HestonParameters::new(100.0, 0.01, 0.5, 0.01, 0.6, -0.9, 0.05).unwrap();
        let schemes: Vec<Box<dyn DiscretizationScheme>> = vec![
            Box::new(EulerScheme::new(stressed)),
            Box::new(MilsteinScheme::new(stressed)),
            Box::new(QuadraticExponentialScheme::new(stressed)),
        ];
        for scheme in schemes {
            let simulator = PathSimulator::new(scheme.as_ref(), 50, 2.0, 50).unwrap();
            let mut draws = PseudoRandomDraws::new(7, stressed.rho());
            let paths = simulator.generate(&mut draws).unwrap();
            assert!(
                paths.variances().iter().all(|&v| v >= 0.0),
                "{scheme:?} produced a negative variance"
            );
            assert!(paths.prices().iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn simulation_is_deterministic_given_the_seed() {
        for scheme in schemes() {
            let simulator = PathSimulator::new(scheme.as_ref(), 10, 1.0, 20).unwrap();
            let mut a = PseudoRandomDraws::new(123, parameters().rho());
            let mut b = PseudoRandomDraws::new(123, parameters().rho());
            let paths_a = simulator.generate(&mut a).unwrap();
            let paths_b = simulator.generate(&mut b).unwrap();
            assert_eq!(paths_a, paths_b, "{scheme:?}");
        }
    }

    #[test]
    fn draw_table_replays_identical_paths() {
        let scheme = EulerScheme::new(parameters());
        let simulator = PathSimulator::new(&scheme, 10, 1.0, 20).unwrap();
        let mut table = DrawTable::generate(99, parameters().rho(), 10, 20);
        let first = simulator.generate(&mut table).unwrap();
        let second = simulator.generate(&mut table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_path_matches_the_grid_contract() {
        let scheme = MilsteinScheme::new(parameters());
        let simulator = PathSimulator::new(&scheme, 1, 1.0, 50).unwrap();
        let mut draws = PseudoRandomDraws::new(5, parameters().rho());
        let (prices, variances) = simulator.single_path(&mut draws).unwrap();
        assert_eq!(prices.len(), 51);
        assert_eq!(variances.len(), 51);
        assert_eq!(prices[0], 100.0);
        assert_eq!(variances[0], 0.04);
        assert!(variances.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn pricer_reuses_paths_from_a_shared_table() {
        let scheme = EulerScheme::new(parameters());
        let simulator = PathSimulator::new(&scheme, 500, 1.0, 16).unwrap();
        let mut table = DrawTable::generate(21, parameters().rho(), 500, 16);
        let mut pricer = OptionPricer::new(&simulator, &mut table);
        let first = pricer.european_call(100.0).unwrap();
        let second = pricer.european_call(100.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn put_call_parity_on_shared_paths() {
        // On identical paths, call − put reduces to
        // exp(-rT)·mean(S_T) − K·exp(-rT), which must approximate
        // S0 − K·exp(-rT) within Monte Carlo tolerance.
        let parameters = parameters();
        let scheme = EulerScheme::new(parameters);
        let simulator = PathSimulator::new(&scheme, 10_000, 1.0, 32).unwrap();
        let mut table = DrawTable::generate(42, parameters.rho(), 10_000, 32);
        let mut pricer = OptionPricer::new(&simulator, &mut table);

        let strike = 100.0;
        let call = pricer.european_call(strike).unwrap();
        let put = pricer.european_put(strike).unwrap();
        let forward = 100.0 - strike * (-0.05_f64).exp();
        assert_abs_diff_eq!(call - put, forward, epsilon = 1.0);
    }

    #[test]
    fn scenario_call_price_is_in_the_plausible_band() {
        // S0 = 100, v0 = 0.04, κ = 2.0, θ = 0.04, σ = 0.3, ρ = −0.7,
        // r = 0.05, T = 1, K = 100, 252 steps, 10 000 paths. The estimate
        // sits near the Black-Scholes magnitude for a 20 % volatility
        // (≈ 10.45); the band allows for discretization and sampling noise.
        let parameters = parameters();
        let scheme = EulerScheme::new(parameters);
        let simulator = PathSimulator::new(&scheme, 10_000, 1.0, 252).unwrap();
        let mut draws = PseudoRandomDraws::new(42, parameters.rho());
        let mut pricer = OptionPricer::new(&simulator, &mut draws);

        let (price, error) = pricer.price_with_error(|s| s - 100.0).unwrap();
        assert!(
            (7.0..13.0).contains(&price),
            "call price {price} outside plausible band"
        );
        // With 10 000 paths the standard error is a few tenths at most
        assert!(error > 0.0 && error < 0.5, "standard error {error}");
    }

    #[test]
    fn custom_payoffs_are_clamped_at_zero() {
        let scheme = EulerScheme::new(parameters());
        let simulator = PathSimulator::new(&scheme, 200, 1.0, 8).unwrap();
        let mut table = DrawTable::generate(3, parameters().rho(), 200, 8);
        let mut pricer = OptionPricer::new(&simulator, &mut table);
        // A payoff that is negative everywhere prices to exactly zero
        let price = pricer.price(|_| -1.0).unwrap();
        assert_eq!(price, 0.0);
    }
}
