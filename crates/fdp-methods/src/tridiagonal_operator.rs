//! Tridiagonal linear operator and direct solver.
//!
//! The nearest-neighbor finite-difference discretization of the BSM
//! operator couples each grid point only to its two neighbors, so the
//! linear systems of the implicit time step are tridiagonal and solve
//! exactly in O(N) by forward elimination and back substitution.

use fdp_core::{ensure, fail, Real, Result, Size};
use fdp_math::Array;
use std::ops::{Add, Mul, Sub};

/// Pivot magnitude below which the elimination is considered degenerate.
const PIVOT_TOLERANCE: Real = 1e-30;

/// A linear operator represented by its three diagonals.
///
/// `lower[0]` and `upper[n-1]` are carried for alignment but never read.
/// Operator arithmetic (`+`, `-`, scalar `*`) combines diagonals
/// element-wise, which is all the Crank-Nicolson blend requires.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    lower: Array,
    diag: Array,
    upper: Array,
}

impl TridiagonalOperator {
    /// Create a zero operator of dimension `n`.
    pub fn new(n: Size) -> Result<Self> {
        ensure!(n >= 2, "operator dimension must be at least 2, got {n}");
        Ok(Self {
            lower: Array::zeros(n),
            diag: Array::zeros(n),
            upper: Array::zeros(n),
        })
    }

    /// Create the identity operator of dimension `n`.
    pub fn identity(n: Size) -> Result<Self> {
        let mut op = Self::new(n)?;
        op.diag = Array::from_element(n, 1.0);
        Ok(op)
    }

    /// Operator dimension.
    pub fn size(&self) -> Size {
        self.diag.size()
    }

    /// Set row 0 to `(diag, upper)`.
    pub fn set_first_row(&mut self, diag: Real, upper: Real) {
        self.diag[0] = diag;
        self.upper[0] = upper;
    }

    /// Set every interior row to `(lower, diag, upper)`.
    pub fn set_mid_rows(&mut self, lower: Real, diag: Real, upper: Real) {
        for i in 1..self.size() - 1 {
            self.lower[i] = lower;
            self.diag[i] = diag;
            self.upper[i] = upper;
        }
    }

    /// Set the last row to `(lower, diag)`.
    pub fn set_last_row(&mut self, lower: Real, diag: Real) {
        let n = self.size();
        self.lower[n - 1] = lower;
        self.diag[n - 1] = diag;
    }

    /// Apply the operator: `y = A·x`.
    pub fn apply(&self, x: &Array) -> Result<Array> {
        let n = self.size();
        ensure!(
            x.size() == n,
            "operator dimension {n} does not match array size {}",
            x.size()
        );
        let mut y = Array::zeros(n);
        y[0] = self.diag[0] * x[0] + self.upper[0] * x[1];
        for i in 1..n - 1 {
            y[i] = self.lower[i] * x[i - 1] + self.diag[i] * x[i] + self.upper[i] * x[i + 1];
        }
        y[n - 1] = self.lower[n - 1] * x[n - 2] + self.diag[n - 1] * x[n - 1];
        Ok(y)
    }

    /// Solve `A·x = rhs` by forward elimination and back substitution.
    ///
    /// Fails with [`NumericalFailure`](fdp_core::Error::NumericalFailure)
    /// on a vanishing pivot.  The BSM operator is diagonally dominant by
    /// construction, so a failure here indicates a defective operator, not
    /// a condition to recover from.
    pub fn solve_for(&self, rhs: &Array) -> Result<Array> {
        let n = self.size();
        ensure!(
            rhs.size() == n,
            "operator dimension {n} does not match array size {}",
            rhs.size()
        );

        // Forward elimination
        let mut c_prime = Array::zeros(n);
        let mut d_prime = Array::zeros(n);
        if self.diag[0].abs() < PIVOT_TOLERANCE {
            fail!("zero pivot at row 0");
        }
        c_prime[0] = self.upper[0] / self.diag[0];
        d_prime[0] = rhs[0] / self.diag[0];
        for i in 1..n {
            let pivot = self.diag[i] - self.lower[i] * c_prime[i - 1];
            if pivot.abs() < PIVOT_TOLERANCE {
                fail!("zero pivot at row {i}");
            }
            if i < n - 1 {
                c_prime[i] = self.upper[i] / pivot;
            }
            d_prime[i] = (rhs[i] - self.lower[i] * d_prime[i - 1]) / pivot;
        }

        // Back substitution
        let mut x = Array::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }
        Ok(x)
    }
}

// ── Operator arithmetic ───────────────────────────────────────────────────────

impl Add for &TridiagonalOperator {
    type Output = TridiagonalOperator;
    fn add(self, rhs: &TridiagonalOperator) -> TridiagonalOperator {
        debug_assert_eq!(self.size(), rhs.size());
        TridiagonalOperator {
            lower: &self.lower + &rhs.lower,
            diag: &self.diag + &rhs.diag,
            upper: &self.upper + &rhs.upper,
        }
    }
}

impl Sub for &TridiagonalOperator {
    type Output = TridiagonalOperator;
    fn sub(self, rhs: &TridiagonalOperator) -> TridiagonalOperator {
        debug_assert_eq!(self.size(), rhs.size());
        TridiagonalOperator {
            lower: &self.lower - &rhs.lower,
            diag: &self.diag - &rhs.diag,
            upper: &self.upper - &rhs.upper,
        }
    }
}

impl Mul<Real> for &TridiagonalOperator {
    type Output = TridiagonalOperator;
    fn mul(self, rhs: Real) -> TridiagonalOperator {
        TridiagonalOperator {
            lower: &self.lower * rhs,
            diag: &self.diag * rhs,
            upper: &self.upper * rhs,
        }
    }
}
