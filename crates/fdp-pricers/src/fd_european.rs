//! Finite-difference European option pricer.
//!
//! Rolls the terminal payoff back through the BSM PDE without any
//! per-step constraint.  Mostly useful as a convergence reference and as
//! the unconstrained half of the control variate; production European
//! pricing goes through [`analytic_european`](crate::analytic_european).

use std::cell::OnceCell;

use fdp_core::{Real, Result};
use fdp_methods::{bsm_operator, BsmCoefficients, CrankNicolson, FiniteDifferenceModel, Grid};

use crate::option_spec::{Greeks, OptionSpec};
use crate::payoff::PlainVanillaPayoff;

/// Numerical European pricer.
///
/// The result is computed once and memoized; the spec is immutable, so a
/// parameter change means building a new instance.  Not synchronized:
/// share across threads only behind external serialization, or give each
/// thread its own instance.
#[derive(Debug)]
pub struct FdEuropeanOption {
    spec: OptionSpec,
    result: OnceCell<Greeks>,
}

impl FdEuropeanOption {
    /// Create a pricer for the given (validated) specification.
    pub fn new(spec: OptionSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            result: OnceCell::new(),
        })
    }

    /// The specification this pricer is keyed by.
    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// Value, delta, gamma, and theta at the spot.
    pub fn greeks(&self) -> Result<Greeks> {
        if let Some(g) = self.result.get() {
            return Ok(*g);
        }
        let g = self.calculate()?;
        Ok(*self.result.get_or_init(|| g))
    }

    fn calculate(&self) -> Result<Greeks> {
        let s = &self.spec;
        let grid = Grid::centered(s.spot, s.strike, s.volatility, s.residual_time, s.grid_points)?;
        let payoff = PlainVanillaPayoff::new(s.option_type, s.strike);
        let mut values = grid.apply_payoff(|price| payoff.value(price));

        let coefficients = BsmCoefficients {
            risk_free_rate: s.risk_free_rate,
            dividend_yield: s.dividend_yield,
            volatility: s.volatility,
        };
        let op = bsm_operator(&grid, &coefficients)?;
        let mut model = FiniteDifferenceModel::new(CrankNicolson::new(op));

        model.rollback(&mut values, s.residual_time, 0.0, s.time_steps, None)?;
        let value = grid.value_at_center(&values);
        let delta = grid.first_derivative_at_center(&values);
        let gamma = grid.second_derivative_at_center(&values);

        // One extra step past the valuation date for a backward difference
        // in time.
        let dt = s.residual_time / s.time_steps as Real;
        model.rollback(&mut values, 0.0, -dt, 1, None)?;
        let theta = (value - grid.value_at_center(&values)) / dt;

        Ok(Greeks {
            value,
            delta,
            gamma,
            theta,
        })
    }
}
