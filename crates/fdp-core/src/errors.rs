//! Error types for fdpricing.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  The two
//! variants mirror the failure taxonomy of the pricing core: malformed
//! inputs are rejected up front, and a degenerate linear system aborts the
//! computation rather than producing a partial result.

use thiserror::Error;

/// The top-level error type used throughout fdpricing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed input: non-positive volatility or residual time, an even
    /// or too-small grid, mismatched sizes between cooperating components.
    ///
    /// Raised synchronously at the point of detection; inputs are never
    /// silently clamped.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A degenerate linear system during the tridiagonal solve.
    ///
    /// A correctly built diffusion-dominant operator cannot produce this;
    /// it indicates a defect in the operator construction, not a
    /// recoverable runtime condition.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
}

/// Shorthand `Result` type used throughout fdpricing.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition on input data.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fdp_core::ensure;
/// fn positive(x: f64) -> fdp_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Abort with a `NumericalFailure`.
///
/// # Example
/// ```
/// use fdp_core::fail;
/// fn always_err() -> fdp_core::Result<()> {
///     fail!("pivot vanished");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NumericalFailure(format!($($msg)*)))
    };
}
