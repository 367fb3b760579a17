//! # hmc-math
//!
//! Mathematical support for hestonmc-rs: the path-grid matrix type,
//! normal-distribution helpers, random number generation (including the
//! correlated draw sources consumed by the path simulator), and sample
//! statistics.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod distributions;
pub mod matrix;
pub mod random_numbers;
pub mod statistics;

pub use matrix::Matrix;
pub use random_numbers::{
    DrawPair, DrawSource, DrawTable, InverseCumulativeNormalRng, MersenneTwisterUniformRng,
    PseudoRandomDraws,
};
pub use statistics::Statistics;
