//! # fdpricing
//!
//! Early-exercise (American) option pricing by backward finite-difference
//! solution of the Black-Scholes-Merton PDE, with Greeks extracted from
//! the grid and discretization error reduced by a control variate against
//! the closed-form European price.
//!
//! This crate is a **façade** re-exporting the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `fdp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use fdpricing::pricers::{FdAmericanOption, OptionSpec, OptionType};
//!
//! let spec = OptionSpec {
//!     option_type: OptionType::Put,
//!     spot: 100.0,
//!     strike: 100.0,
//!     dividend_yield: 0.0,
//!     risk_free_rate: 0.05,
//!     residual_time: 1.0,
//!     volatility: 0.3,
//!     time_steps: 100,
//!     grid_points: 101,
//! };
//! let pricer = FdAmericanOption::new(spec).unwrap();
//! let greeks = pricer.greeks().unwrap();
//! assert!(greeks.value > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fdp_core as core;

/// Mathematical utilities: arrays, comparisons, distributions.
pub use fdp_math as math;

/// Finite-difference machinery.
pub use fdp_methods as methods;

/// Analytic and finite-difference pricers.
pub use fdp_pricers as pricers;
