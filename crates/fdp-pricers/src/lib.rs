//! # fdp-pricers
//!
//! Option pricers built on the finite-difference machinery of
//! `fdp-methods`:
//!
//! * [`analytic_european`] — the closed-form Black-Scholes-Merton
//!   reference (value, delta, gamma, theta)
//! * [`FdEuropeanOption`] — numerical European pricer
//! * [`FdAmericanOption`] — the early-exercise pricer with
//!   control-variate error reduction, the entry point of the library

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Closed-form European pricing.
pub mod analytic_european;

/// Finite-difference American pricer with control variate.
pub mod fd_american;

/// Finite-difference European pricer.
pub mod fd_european;

/// Option specification and results.
pub mod option_spec;

/// Option type and vanilla payoff.
pub mod payoff;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use analytic_european::analytic_european;
pub use fd_american::FdAmericanOption;
pub use fd_european::FdEuropeanOption;
pub use option_spec::{Greeks, OptionSpec};
pub use payoff::{OptionType, PlainVanillaPayoff};
