//! Error types for hestonmc-rs.
//!
//! A single `thiserror`-derived enum covers the whole engine: model
//! constants outside their domain, malformed simulation arguments, and the
//! defensive numeric-domain class that the schemes prevent by construction
//! (every variance is floored before a `sqrt`/`log` is taken).

use thiserror::Error;

/// The top-level error type used throughout hestonmc-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model constant is outside its admissible domain
    /// (raised at parameter construction).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A simulation argument is malformed (non-positive path count,
    /// step count, maturity, or time increment).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric result left its domain (NaN/∞ where a finite value is
    /// required). Should never occur with valid inputs.
    #[error("numeric domain error: {0}")]
    NumericDomain(String),
}

/// Shorthand `Result` type used throughout hestonmc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a model-parameter domain condition.
///
/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hmc_core::{ensure_param, errors::Error};
/// fn positive(x: f64) -> hmc_core::errors::Result<f64> {
///     ensure_param!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_param {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Check a simulation-argument condition.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hmc_core::{ensure_arg, errors::Error};
/// fn steps(n: usize) -> hmc_core::errors::Result<usize> {
///     ensure_arg!(n > 0, "step count must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(steps(10).is_ok());
/// assert!(steps(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_arg {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
