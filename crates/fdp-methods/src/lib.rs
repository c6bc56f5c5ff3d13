//! # fdp-methods
//!
//! Finite-difference machinery for pricing options on a 1-D log-price grid:
//!
//! * [`Grid`] — log-spaced price coordinates centered on the spot
//! * [`TridiagonalOperator`] — three-diagonal linear operator with a
//!   Thomas-algorithm solver
//! * [`bsm_operator`] — the discretized Black-Scholes-Merton operator
//! * [`CrankNicolson`] — θ = ½ implicit/explicit time stepping
//! * [`StepCondition`] / [`AmericanExercise`] — per-step constraints
//! * [`FiniteDifferenceModel`] — backward-in-time rollback orchestration

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The discretized BSM differential operator.
pub mod bsm_operator;

/// Crank-Nicolson time stepping.
pub mod crank_nicolson;

/// Rollback orchestration.
pub mod fd_model;

/// Price grid and center-point sampling.
pub mod grid;

/// Per-step constraints (early exercise).
pub mod step_condition;

/// Tridiagonal operator and solver.
pub mod tridiagonal_operator;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bsm_operator::{bsm_operator, BsmCoefficients};
pub use crank_nicolson::CrankNicolson;
pub use fd_model::FiniteDifferenceModel;
pub use grid::Grid;
pub use step_condition::{AmericanExercise, StepCondition};
pub use tridiagonal_operator::TridiagonalOperator;
