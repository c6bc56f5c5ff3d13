//! Rollback orchestration.
//!
//! A `FiniteDifferenceModel` drives a time-stepping scheme backward from a
//! starting time (maturity) to a target time, optionally enforcing a
//! [`StepCondition`] after every sub-step.

use fdp_core::{ensure, Result, Size, Time};
use fdp_math::{close_enough, Array};

use crate::crank_nicolson::CrankNicolson;
use crate::step_condition::StepCondition;

/// Drives repeated application of the time-stepping scheme.
#[derive(Debug, Clone)]
pub struct FiniteDifferenceModel {
    evolver: CrankNicolson,
}

impl FiniteDifferenceModel {
    /// Create a model around the given evolver.
    pub fn new(evolver: CrankNicolson) -> Self {
        Self { evolver }
    }

    /// Roll `x` back from `from` to `to` in `steps` equal sub-intervals.
    ///
    /// If a condition is supplied it is applied to `x` at `from` itself —
    /// exercise at maturity, where intrinsic value may already exceed
    /// continuation value — and again after every sub-step.  `x` is
    /// mutated in place; the caller keeps exclusive ownership.
    ///
    /// `steps == 0`, or `from` and `to` equal to within a few ulps, is a
    /// no-op.  Fails with
    /// [`InvalidArgument`](fdp_core::Error::InvalidArgument) if
    /// `to > from` or if `x` does not match the operator dimension.
    pub fn rollback(
        &mut self,
        x: &mut Array,
        from: Time,
        to: Time,
        steps: Size,
        condition: Option<&dyn StepCondition>,
    ) -> Result<()> {
        ensure!(
            to <= from,
            "cannot roll back from {from} to later time {to}"
        );
        ensure!(
            x.size() == self.evolver.size(),
            "array size {} does not match operator dimension {}",
            x.size(),
            self.evolver.size()
        );
        // Times that differ only by accumulated rounding are the same
        // instant; stepping over such an interval would divide it into
        // sub-femtosecond steps.
        if steps == 0 || close_enough(from, to, 42) {
            return Ok(());
        }

        let dt = (from - to) / steps as Time;
        if let Some(c) = condition {
            c.apply(x, from);
        }
        let mut t = from;
        for _ in 0..steps {
            t -= dt;
            self.evolver.step(x, dt)?;
            if let Some(c) = condition {
                c.apply(x, t);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsm_operator::{bsm_operator, BsmCoefficients};
    use crate::grid::Grid;
    use crate::step_condition::AmericanExercise;
    use fdp_core::Error;

    fn setup() -> (Grid, FiniteDifferenceModel, Array) {
        let grid = Grid::centered(100.0, 100.0, 0.3, 1.0, 101).unwrap();
        let c = BsmCoefficients {
            risk_free_rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.3,
        };
        let op = bsm_operator(&grid, &c).unwrap();
        let initial = grid.apply_payoff(|s| (100.0 - s).max(0.0));
        (grid, FiniteDifferenceModel::new(CrankNicolson::new(op)), initial)
    }

    #[test]
    fn zero_steps_is_noop() {
        let (_, mut model, mut x) = setup();
        let before = x.clone();
        model.rollback(&mut x, 1.0, 0.0, 0, None).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn equal_times_is_noop() {
        let (_, mut model, mut x) = setup();
        let before = x.clone();
        model.rollback(&mut x, 1.0, 1.0, 10, None).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn nearly_equal_times_is_noop() {
        // A target a few ulps below the start is rounding noise, not an
        // interval to be split into ten steps.
        let (_, mut model, mut x) = setup();
        let before = x.clone();
        let from: Time = 1.0;
        let to = from - 4.0 * f64::EPSILON;
        model.rollback(&mut x, from, to, 10, None).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn backward_times_rejected() {
        let (_, mut model, mut x) = setup();
        assert!(matches!(
            model.rollback(&mut x, 0.0, 1.0, 10, None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn size_mismatch_rejected() {
        let (_, mut model, _) = setup();
        let mut wrong = Array::zeros(7);
        assert!(matches!(
            model.rollback(&mut wrong, 1.0, 0.0, 10, None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rollback_gains_time_value() {
        // An ATM put is worth more than its (zero) intrinsic value at the
        // center once time value is accounted for.
        let (grid, mut model, mut x) = setup();
        model.rollback(&mut x, 1.0, 0.0, 100, None).unwrap();
        let atm_value = grid.value_at_center(&x);
        assert!(atm_value > 1.0, "ATM put value {atm_value} too small");
    }

    #[test]
    fn condition_keeps_values_at_or_above_intrinsic() {
        let (_, mut model, initial) = setup();
        let condition = AmericanExercise::new(initial.clone());
        let mut x = initial.clone();
        model
            .rollback(&mut x, 1.0, 0.0, 100, Some(&condition))
            .unwrap();
        for i in 0..x.size() {
            assert!(
                x[i] >= initial[i] - 1e-12,
                "value {} below intrinsic {} at {i}",
                x[i],
                initial[i]
            );
        }
    }

    #[test]
    fn constrained_dominates_unconstrained() {
        let (_, mut model, initial) = setup();
        let mut european = initial.clone();
        model.rollback(&mut european, 1.0, 0.0, 100, None).unwrap();

        let condition = AmericanExercise::new(initial.clone());
        let mut american = initial.clone();
        model
            .rollback(&mut american, 1.0, 0.0, 100, Some(&condition))
            .unwrap();

        for i in 0..american.size() {
            assert!(
                american[i] >= european[i] - 1e-12,
                "american {} < european {} at {i}",
                american[i],
                european[i]
            );
        }
    }
}
