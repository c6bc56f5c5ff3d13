//! # fdp-math
//!
//! Mathematical building blocks: the `Array` newtype (over nalgebra),
//! float-comparison helpers, and the standard normal distribution
//! (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional vector of reals.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// The standard normal distribution.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
