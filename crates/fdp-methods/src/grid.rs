//! Price grid construction and center-point sampling.
//!
//! The grid is log-equally spaced in price and centered on the spot: the
//! coordinate range spans `±max(4σ√T, |ln(K/S)| + σ√T)` in log space, wide
//! enough that truncating the PDE domain there has no visible effect at the
//! center, and wide enough to keep the payoff kink at the strike inside
//! the grid.

use fdp_core::{ensure, Real, Result, Size, Time, Volatility};
use fdp_math::{close, Array};

/// Number of total standard deviations covered on each side of the spot.
const RANGE_STDEVS: Real = 4.0;

/// An ordered, strictly increasing sequence of price coordinates with a
/// well-defined center at the spot.
///
/// Immutable once built; one grid serves one pricing request.
#[derive(Debug, Clone)]
pub struct Grid {
    prices: Array,
    log_spacing: Real,
    center: usize,
}

impl Grid {
    /// Build a grid of `size` log-spaced prices centered on `spot`.
    ///
    /// `size` must be odd and at least 3 so that the center point has a
    /// neighbor on each side; `spot`, `strike`, `volatility`, and
    /// `residual_time` must be strictly positive.
    pub fn centered(
        spot: Real,
        strike: Real,
        volatility: Volatility,
        residual_time: Time,
        size: Size,
    ) -> Result<Self> {
        ensure!(spot > 0.0, "spot must be positive, got {spot}");
        ensure!(strike > 0.0, "strike must be positive, got {strike}");
        ensure!(
            volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        ensure!(
            residual_time > 0.0,
            "residual time must be positive, got {residual_time}"
        );
        ensure!(size >= 3, "at least 3 grid points required, got {size}");
        ensure!(size % 2 == 1, "grid size must be odd, got {size}");

        let total_vol = volatility * residual_time.sqrt();
        let half_width = (RANGE_STDEVS * total_vol).max((strike / spot).ln().abs() + total_vol);
        let dx = 2.0 * half_width / (size - 1) as Real;
        let center = size / 2;

        let prices: Vec<Real> = (0..size)
            .map(|i| spot * ((i as Real - center as Real) * dx).exp())
            .collect();
        // Center-point sampling reads the spot value straight off the grid.
        debug_assert!(close(prices[center], spot, spot * 1e-14));

        Ok(Self {
            prices: Array::from_vec(prices),
            log_spacing: dx,
            center,
        })
    }

    /// Number of grid points.
    pub fn size(&self) -> usize {
        self.prices.size()
    }

    /// Index of the center point (`size / 2`).
    pub fn center(&self) -> usize {
        self.center
    }

    /// The uniform spacing in log-price.
    pub fn log_spacing(&self) -> Real {
        self.log_spacing
    }

    /// The price coordinate at index `i`.
    pub fn price(&self, i: usize) -> Real {
        self.prices[i]
    }

    /// All price coordinates.
    pub fn prices(&self) -> &Array {
        &self.prices
    }

    /// Evaluate a terminal payoff at every grid coordinate.
    ///
    /// This is the initial condition of the backward rollback.
    pub fn apply_payoff<F: Fn(Real) -> Real>(&self, payoff: F) -> Array {
        self.prices.map(payoff)
    }

    /// The sampled value at the center point.
    pub fn value_at_center(&self, a: &Array) -> Real {
        debug_assert_eq!(a.size(), self.size());
        a[self.center]
    }

    /// Centered first difference at the center point, i.e. the sampled
    /// first derivative with respect to price (delta).
    pub fn first_derivative_at_center(&self, a: &Array) -> Real {
        debug_assert_eq!(a.size(), self.size());
        let j = self.center;
        (a[j + 1] - a[j - 1]) / (self.prices[j + 1] - self.prices[j - 1])
    }

    /// Centered second difference at the center point, i.e. the sampled
    /// second derivative with respect to price (gamma).
    ///
    /// Uses the one-sided slopes on each side of the center, which stays
    /// second-order accurate on the non-uniform price spacing.
    pub fn second_derivative_at_center(&self, a: &Array) -> Real {
        debug_assert_eq!(a.size(), self.size());
        let j = self.center;
        let delta_plus = (a[j + 1] - a[j]) / (self.prices[j + 1] - self.prices[j]);
        let delta_minus = (a[j] - a[j - 1]) / (self.prices[j] - self.prices[j - 1]);
        let ds = (self.prices[j + 1] - self.prices[j - 1]) / 2.0;
        (delta_plus - delta_minus) / ds
    }
}
