//! `Array` — a one-dimensional vector of reals.
//!
//! A thin newtype around `nalgebra::DVector<f64>`.  In the finite-difference
//! code an `Array` co-indexed with a grid holds the option value at each
//! grid point; rollback mutates it in place, and `Clone` produces the
//! independently-owned copies that the European and American passes require.

use fdp_core::Real;
use nalgebra::DVector;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A dynamically-sized 1D vector of `Real` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Array(DVector<Real>);

impl Array {
    /// Create a zero-filled array of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Create an array filled with `value`.
    pub fn from_element(n: usize, value: Real) -> Self {
        Self(DVector::from_element(n, value))
    }

    /// Create an array from a slice.
    pub fn from_slice(data: &[Real]) -> Self {
        Self(DVector::from_column_slice(data))
    }

    /// Create an array from a `Vec`.
    pub fn from_vec(data: Vec<Real>) -> Self {
        Self(DVector::from_vec(data))
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the elements as a slice.
    pub fn as_slice(&self) -> &[Real] {
        self.0.as_slice()
    }

    /// Return the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        self.0.as_mut_slice()
    }

    /// Apply a function element-wise, returning a new array.
    pub fn map<F: Fn(Real) -> Real>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    /// Minimum element.
    pub fn min(&self) -> Real {
        self.0.min()
    }

    /// Maximum element.
    pub fn max(&self) -> Real {
        self.0.max()
    }

    /// Iterator over elements.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

impl From<Vec<Real>> for Array {
    fn from(v: Vec<Real>) -> Self {
        Self::from_vec(v)
    }
}

impl Index<usize> for Array {
    type Output = Real;
    fn index(&self, i: usize) -> &Real {
        &self.0[i]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.0[i]
    }
}

// ── Element-wise arithmetic ───────────────────────────────────────────────────

impl Add for &Array {
    type Output = Array;
    fn add(self, rhs: &Array) -> Array {
        Array(&self.0 + &rhs.0)
    }
}

impl Sub for &Array {
    type Output = Array;
    fn sub(self, rhs: &Array) -> Array {
        Array(&self.0 - &rhs.0)
    }
}

impl Mul<Real> for &Array {
    type Output = Array;
    fn mul(self, rhs: Real) -> Array {
        Array(&self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let a = Array::zeros(5);
        assert_eq!(a.size(), 5);
        assert_eq!(a[0], 0.0);
    }

    #[test]
    fn from_slice_and_index() {
        let a = Array::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(a.size(), 3);
        assert_eq!(a[1], 2.0);
    }

    #[test]
    fn index_mut() {
        let mut a = Array::zeros(3);
        a[1] = 7.0;
        assert_eq!(a.as_slice(), &[0.0, 7.0, 0.0]);
    }

    #[test]
    fn element_wise_ops() {
        let a = Array::from_slice(&[1.0, 2.0, 3.0]);
        let b = Array::from_slice(&[4.0, 5.0, 6.0]);
        let sum = &a + &b;
        assert_eq!(sum.as_slice(), &[5.0, 7.0, 9.0]);
        let diff = &b - &a;
        assert_eq!(diff.as_slice(), &[3.0, 3.0, 3.0]);
        let scaled = &a * 2.0;
        assert_eq!(scaled.as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn clone_is_independent() {
        let a = Array::from_slice(&[1.0, 2.0]);
        let mut b = a.clone();
        b[0] = 10.0;
        assert_eq!(a[0], 1.0);
    }

    #[test]
    fn map_min_max() {
        let a = Array::from_slice(&[-1.0, 2.0, -3.0]);
        let b = a.map(|x| x.abs());
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(a.min(), -3.0);
        assert_eq!(a.max(), 2.0);
    }
}
