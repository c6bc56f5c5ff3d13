//! Finite-difference American option pricer with control-variate error
//! reduction.
//!
//! The same grid, operator, and step count are rolled back twice: once
//! unconstrained (European) and once under the early-exercise condition
//! (American).  The discretization error of the two passes nearly cancels,
//! so replacing the numerical European result with the closed-form one
//!
//! `value = numericAmerican − numericEuropean + analyticEuropean`
//!
//! removes the dominant bias and leaves only the much smaller error
//! attributable to the exercise boundary.  The same combination is applied
//! to delta, gamma, and theta.

use std::cell::OnceCell;

use fdp_core::{Real, Result, Size, Time};
use fdp_math::Array;
use fdp_methods::{
    bsm_operator, AmericanExercise, BsmCoefficients, CrankNicolson, FiniteDifferenceModel, Grid,
    StepCondition,
};

use crate::analytic_european::analytic_european;
use crate::option_spec::{Greeks, OptionSpec};
use crate::payoff::PlainVanillaPayoff;

/// The extra rollback step used for the backward theta difference is
/// `residual_time / (SMALL_DT_STEPS · time_steps)` — much smaller than a
/// regular step, so the discretization of the step itself does not
/// dominate the derivative estimate.
pub const SMALL_DT_STEPS: Size = 100;

/// American option pricer: Crank-Nicolson rollback under the
/// early-exercise constraint, with control-variate combination against
/// the closed-form European price.
///
/// The result is computed once and memoized; the spec is immutable, so a
/// parameter change means building a new instance.  Not synchronized:
/// share across threads only behind external serialization, or give each
/// thread its own instance — independent instances share no state.
#[derive(Debug)]
pub struct FdAmericanOption {
    spec: OptionSpec,
    result: OnceCell<Greeks>,
}

impl FdAmericanOption {
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
        let initial = grid.apply_payoff(|price| payoff.value(price));

        let coefficients = BsmCoefficients {
            risk_free_rate: s.risk_free_rate,
            dividend_yield: s.dividend_yield,
            volatility: s.volatility,
        };
        let op = bsm_operator(&grid, &coefficients)?;
        let mut model = FiniteDifferenceModel::new(CrankNicolson::new(op));

        let small_dt = s.residual_time / (SMALL_DT_STEPS * s.time_steps) as Real;

        // Unconstrained and constrained passes, each on its own copy of
        // the initial condition.
        let analytic = analytic_european(s);
        let european = sample_rollback(&mut model, &grid, initial.clone(), s, small_dt, None)?;
        let condition = AmericanExercise::new(initial.clone());
        let american = sample_rollback(&mut model, &grid, initial, s, small_dt, Some(&condition))?;

        Ok(Greeks {
            value: american.value - european.value + analytic.value,
            delta: american.delta - european.delta + analytic.delta,
            gamma: american.gamma - european.gamma + analytic.gamma,
            theta: american.theta - european.theta + analytic.theta,
        })
    }
}

/// Roll `values` back from maturity to the valuation date, sample the
/// center-point value and spatial derivatives, then take one extra small
/// step for the backward difference in time.
fn sample_rollback(
    model: &mut FiniteDifferenceModel,
    grid: &Grid,
    mut values: Array,
    spec: &OptionSpec,
    small_dt: Time,
    condition: Option<&dyn StepCondition>,
) -> Result<Greeks> {
    model.rollback(
        &mut values,
        spec.residual_time,
        0.0,
        spec.time_steps,
        condition,
    )?;
    let value = grid.value_at_center(&values);
    let delta = grid.first_derivative_at_center(&values);
    let gamma = grid.second_derivative_at_center(&values);

    model.rollback(&mut values, 0.0, -small_dt, 1, condition)?;
    let theta = (value - grid.value_at_center(&values)) / small_dt;

    Ok(Greeks {
        value,
        delta,
        gamma,
        theta,
    })
}
