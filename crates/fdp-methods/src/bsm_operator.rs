//! The discretized Black-Scholes-Merton differential operator.
//!
//! In log-price `x = ln S` the BSM PDE reads
//!
//! `∂V/∂t + α·∂²V/∂x² + ν·∂V/∂x − r·V = 0`
//!
//! with diffusion `α = σ²/2` and drift `ν = r − q − σ²/2`.  Central
//! differences on the uniform log spacing `dx` turn the spatial part into
//! a tridiagonal operator `L` with constant rows.

use fdp_core::{Rate, Real, Result, Volatility};

use crate::grid::Grid;
use crate::tridiagonal_operator::TridiagonalOperator;

/// The dynamics of the underlying: risk-free rate, continuous dividend
/// yield, and (constant) volatility.
///
/// Supplies the drift and diffusion coefficients that parameterize the
/// discretized operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsmCoefficients {
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: Rate,
    /// Continuous dividend yield.
    pub dividend_yield: Rate,
    /// Volatility of the underlying.
    pub volatility: Volatility,
}

impl BsmCoefficients {
    /// Drift of the log-price process: `ν = r − q − σ²/2`.
    pub fn drift(&self) -> Real {
        self.risk_free_rate - self.dividend_yield - 0.5 * self.volatility * self.volatility
    }

    /// Diffusion coefficient of the log-price process: `α = σ²/2`.
    pub fn diffusion(&self) -> Real {
        0.5 * self.volatility * self.volatility
    }
}

/// Build the spatial operator `L` for the given grid and dynamics.
///
/// Interior rows hold the central-difference stencil
///
/// `lower = α/dx² − ν/(2dx)`, `diag = −2α/dx² − r`, `upper = α/dx² + ν/(2dx)`.
///
/// The first and last rows are left at zero, so both the explicit and the
/// implicit part of a time step leave the boundary values untouched: the
/// boundary stays frozen at its payoff value, which is accurate at the
/// grid edges the [`Grid`] builder places them at.
pub fn bsm_operator(grid: &Grid, coefficients: &BsmCoefficients) -> Result<TridiagonalOperator> {
    let dx = grid.log_spacing();
    let alpha = coefficients.diffusion();
    let nu = coefficients.drift();

    let lower = alpha / (dx * dx) - nu / (2.0 * dx);
    let diag = -2.0 * alpha / (dx * dx) - coefficients.risk_free_rate;
    let upper = alpha / (dx * dx) + nu / (2.0 * dx);

    let mut op = TridiagonalOperator::new(grid.size())?;
    op.set_mid_rows(lower, diag, upper);
    Ok(op)
}
