//! The standard normal distribution.
//!
//! The CDF is routed through the error function from `statrs`, which is
//! accurate to machine precision; the pdf is the closed form.

use fdp_core::Real;
use statrs::function::erf::erf;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// The standard normal probability density function.
///
/// `φ(x) = exp(-x²/2) / √(2π)`
#[inline]
pub fn normal_pdf(x: Real) -> Real {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// The standard normal cumulative distribution function.
///
/// `Φ(x) = (1 + erf(x/√2)) / 2`
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * (1.0 + erf(x * FRAC_1_SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pdf_at_zero() {
        assert_relative_eq!(normal_pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
    }

    #[test]
    fn cdf_symmetry() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-15);
        for &x in &[0.3, 1.0, 2.5] {
            assert_relative_eq!(normal_cdf(x) + normal_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn cdf_known_values() {
        // Φ(1.96) ≈ 0.975 (two-sided 5% quantile)
        assert_relative_eq!(normal_cdf(1.959_963_984_540_054), 0.975, epsilon = 1e-9);
        assert_relative_eq!(normal_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-12);
    }
}
