//! Random number generators and the draw sources feeding the path
//! simulator.
//!
//! The base generator is the Mersenne Twister MT19937-64; standard normal
//! deviates are obtained through the inverse cumulative normal transform.
//! On top of the raw generators sit the *draw sources*: per simulated
//! `(path, step)` they supply a correlated normal pair (for the price and
//! variance updates) plus one auxiliary uniform (for the
//! quadratic-exponential variance sampling). Two sources exist:
//!
//! * [`PseudoRandomDraws`] — lazy and sequential; every request produces
//!   fresh deviates.
//! * [`DrawTable`] — an eager, seeded, indexed table. Reusing one table
//!   across several scheme runs drives them with *common random numbers*,
//!   so that differences in the results come from the schemes themselves
//!   rather than from sampling noise.

use crate::distributions::normal_cdf_inverse;
use hmc_core::{Real, Size};
use rand_mt::Mt19937GenRand64;

// ─── Uniform / normal generators ──────────────────────────────────────────────

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // Map u64 to [0.0, 1.0)
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// An inverse-cumulative normal random number generator.
///
/// Wraps a uniform RNG and transforms its output through the inverse CDF
/// of the standard normal distribution.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Avoid exact 0 which would produce −∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 && u < 1.0 {
                break u;
            }
        };
        normal_cdf_inverse(u)
    }
}

// ─── Correlated draws ─────────────────────────────────────────────────────────

/// A correlated pair of standard normal deviates.
///
/// `z1` drives the price update, `z2` the variance update, with
/// `corr(z1, z2) = ρ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPair {
    /// Deviate driving the asset-price update.
    pub z1: Real,
    /// Deviate driving the variance update, correlated with `z1`.
    pub z2: Real,
}

impl DrawPair {
    /// Build a correlated pair from two *independent* standard normals:
    /// `z2 = ρ·z1 + √(1−ρ²)·z2_indep`.
    pub fn correlated(z1: Real, z2_indep: Real, rho: Real) -> Self {
        Self {
            z1,
            z2: rho * z1 + (1.0 - rho * rho).sqrt() * z2_indep,
        }
    }
}

/// A per-step supplier of random draws for the path simulator.
///
/// For every `(path, step)` cell the simulator requests exactly one
/// [`DrawPair`] followed by exactly one uniform, for every scheme, so that
/// all schemes consume draws at the same rate.
pub trait DrawSource {
    /// The correlated normal pair for the given path/step cell.
    fn draw(&mut self, path: Size, step: Size) -> DrawPair;

    /// The auxiliary uniform deviate in `[0, 1)` for the given cell.
    fn uniform(&mut self, path: Size, step: Size) -> Real;
}

/// Seed offset separating the uniform stream from the normal stream.
const UNIFORM_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// A lazy, seeded draw source producing fresh deviates on every request.
///
/// The `(path, step)` indices are ignored: draws are handed out in request
/// order. Repeated simulations from the same `PseudoRandomDraws` value see
/// *different* randomness; rebuild the source (or use a [`DrawTable`]) to
/// replay a stream.
pub struct PseudoRandomDraws {
    normals: InverseCumulativeNormalRng,
    uniforms: MersenneTwisterUniformRng,
    correlation: Real,
}

impl PseudoRandomDraws {
    /// Create a source with the given seed and normal-pair correlation.
    ///
    /// # Panics
    /// Panics if `correlation` is outside [-1, 1].
    pub fn new(seed: u64, correlation: Real) -> Self {
        assert!(
            (-1.0..=1.0).contains(&correlation),
            "correlation must be in [-1, 1], got {correlation}"
        );
        Self {
            normals: InverseCumulativeNormalRng::new(seed),
            uniforms: MersenneTwisterUniformRng::new(seed ^ UNIFORM_STREAM_OFFSET),
            correlation,
        }
    }
}

impl DrawSource for PseudoRandomDraws {
    fn draw(&mut self, _path: Size, _step: Size) -> DrawPair {
        let z1 = self.normals.next_real();
        let z2_indep = self.normals.next_real();
        DrawPair::correlated(z1, z2_indep, self.correlation)
    }

    fn uniform(&mut self, _path: Size, _step: Size) -> Real {
        self.uniforms.next_real()
    }
}

/// An eager, seeded table of pre-generated draws.
///
/// Holds `num_paths × num_steps` correlated pairs and uniforms. Lookups
/// are pure (indexed, no generator state), so a table can be replayed any
/// number of times — and shared across schemes — to obtain identical
/// randomness per run.
pub struct DrawTable {
    z1: Vec<Real>,
    z2: Vec<Real>,
    u: Vec<Real>,
    num_paths: Size,
    num_steps: Size,
}

impl DrawTable {
    /// Pre-generate a `num_paths × num_steps` table from the given seed
    /// and normal-pair correlation.
    ///
    /// # Panics
    /// Panics if `correlation` is outside [-1, 1].
    pub fn generate(seed: u64, correlation: Real, num_paths: Size, num_steps: Size) -> Self {
        let mut source = PseudoRandomDraws::new(seed, correlation);
        let n = num_paths * num_steps;
        let mut z1 = Vec::with_capacity(n);
        let mut z2 = Vec::with_capacity(n);
        let mut u = Vec::with_capacity(n);
        for path in 0..num_paths {
            for step in 0..num_steps {
                let pair = source.draw(path, step);
                z1.push(pair.z1);
                z2.push(pair.z2);
                u.push(source.uniform(path, step));
            }
        }
        Self {
            z1,
            z2,
            u,
            num_paths,
            num_steps,
        }
    }

    /// Number of paths the table covers.
    pub fn num_paths(&self) -> Size {
        self.num_paths
    }

    /// Number of steps per path the table covers.
    pub fn num_steps(&self) -> Size {
        self.num_steps
    }

    #[inline]
    fn cell(&self, path: Size, step: Size) -> Size {
        assert!(
            path < self.num_paths && step < self.num_steps,
            "draw ({path}, {step}) outside generated {} × {} table",
            self.num_paths,
            self.num_steps
        );
        path * self.num_steps + step
    }
}

impl DrawSource for DrawTable {
    fn draw(&mut self, path: Size, step: Size) -> DrawPair {
        let i = self.cell(path, step);
        DrawPair {
            z1: self.z1[i],
            z2: self.z2[i],
        }
    }

    fn uniform(&mut self, path: Size, step: Size) -> Real {
        let i = self.cell(path, step);
        self.u[i]
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
