//! Crank-Nicolson time stepping.
//!
//! One backward step of size `dt` computes
//!
//! `x ← (I − θ·dt·L)⁻¹ · (I + (1−θ)·dt·L) · x`
//!
//! with θ = ½.  The equal implicit/explicit weighting is unconditionally
//! stable and second-order accurate in time; pure implicit stepping is
//! only first-order, pure explicit stepping only conditionally stable.

use fdp_core::{Real, Result, Size, Time};
use fdp_math::Array;

use crate::tridiagonal_operator::TridiagonalOperator;

/// Implicit/explicit weighting.  Fixed: the scheme set is closed.
const THETA: Real = 0.5;

/// The blended explicit and implicit parts for one step size.
#[derive(Debug, Clone)]
struct SchemeParts {
    dt: Time,
    explicit: TridiagonalOperator,
    implicit: TridiagonalOperator,
}

/// Crank-Nicolson evolver for a fixed spatial operator.
///
/// The two blended operators are rebuilt only when the step size changes;
/// for a constant-coefficient operator a whole rollback reuses them.
#[derive(Debug, Clone)]
pub struct CrankNicolson {
    op: TridiagonalOperator,
    parts: Option<SchemeParts>,
}

impl CrankNicolson {
    /// Create an evolver for the spatial operator `op`.
    pub fn new(op: TridiagonalOperator) -> Self {
        Self { op, parts: None }
    }

    /// Dimension of the underlying operator.
    pub fn size(&self) -> Size {
        self.op.size()
    }

    fn parts_for(&mut self, dt: Time) -> Result<&SchemeParts> {
        let stale = match &self.parts {
            Some(p) => p.dt != dt,
            None => true,
        };
        if stale {
            let identity = TridiagonalOperator::identity(self.op.size())?;
            self.parts = Some(SchemeParts {
                dt,
                explicit: &identity + &(&self.op * ((1.0 - THETA) * dt)),
                implicit: &identity - &(&self.op * (THETA * dt)),
            });
        }
        Ok(self.parts.as_ref().unwrap())
    }

    /// Advance `x` backward in time by `dt`.
    pub fn step(&mut self, x: &mut Array, dt: Time) -> Result<()> {
        let parts = self.parts_for(dt)?;
        let rhs = parts.explicit.apply(x)?;
        *x = parts.implicit.solve_for(&rhs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsm_operator::{bsm_operator, BsmCoefficients};
    use crate::grid::Grid;

    fn evolver(r: f64) -> (Grid, CrankNicolson) {
        let grid = Grid::centered(100.0, 100.0, 0.2, 1.0, 51).unwrap();
        let c = BsmCoefficients {
            risk_free_rate: r,
            dividend_yield: 0.0,
            volatility: 0.2,
        };
        let op = bsm_operator(&grid, &c).unwrap();
        (grid, CrankNicolson::new(op))
    }

    #[test]
    fn zero_dt_is_identity() {
        let (grid, mut cn) = evolver(0.05);
        let v0 = grid.apply_payoff(|s| (s - 100.0).max(0.0));
        let mut v = v0.clone();
        cn.step(&mut v, 0.0).unwrap();
        for i in 0..v.size() {
            assert!((v[i] - v0[i]).abs() < 1e-14);
        }
    }

    #[test]
    fn constant_decays_at_discount_rate() {
        // With v ≡ 1 on the interior, one step multiplies interior values
        // by (1 − r·dt/2)/(1 + r·dt/2) = e^{-r·dt} + O(dt³).
        let (_, mut cn) = evolver(0.05);
        let n = cn.size();
        let mut v = Array::from_element(n, 1.0);
        let dt = 0.01;
        cn.step(&mut v, dt).unwrap();
        let expected = (1.0 - 0.5 * 0.05 * dt) / (1.0 + 0.5 * 0.05 * dt);
        // Away from the frozen boundaries the decay is uniform.
        let mid = n / 2;
        approx::assert_relative_eq!(v[mid], expected, epsilon = 1e-10);
    }

    #[test]
    fn parts_rebuilt_on_dt_change() {
        let (grid, mut cn) = evolver(0.05);
        let mut v = grid.apply_payoff(|s| (s - 100.0).max(0.0));
        cn.step(&mut v, 0.01).unwrap();
        let after_first = v.clone();
        cn.step(&mut v, 0.02).unwrap();
        // A different dt must produce a different evolution.
        assert_ne!(v, after_first);
    }
}
