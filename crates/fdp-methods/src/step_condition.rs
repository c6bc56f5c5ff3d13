//! Constraints applied to the value array after each time step.

use fdp_core::Time;
use fdp_math::Array;

/// A constraint applied to the value array after every rollback sub-step.
pub trait StepCondition {
    /// Enforce the condition on `x` at simulated time `t`, in place.
    fn apply(&self, x: &mut Array, t: Time);
}

/// The American early-exercise constraint.
///
/// Holds the intrinsic (immediate exercise) value at every grid point and
/// projects each entry of the value array up to it: continuation value can
/// never fall below immediate exercise value.  Idempotent, and never
/// decreases an entry.
#[derive(Debug, Clone)]
pub struct AmericanExercise {
    intrinsic: Array,
}

impl AmericanExercise {
    /// Create the condition from the intrinsic values at the grid points.
    pub fn new(intrinsic: Array) -> Self {
        Self { intrinsic }
    }
}

impl StepCondition for AmericanExercise {
    fn apply(&self, x: &mut Array, _t: Time) {
        debug_assert_eq!(x.size(), self.intrinsic.size());
        for i in 0..x.size() {
            x[i] = x[i].max(self.intrinsic[i]);
        }
    }
}
