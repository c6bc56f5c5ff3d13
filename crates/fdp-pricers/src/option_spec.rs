//! Option specification and pricing results.

use fdp_core::{ensure, Rate, Real, Result, Size, Time, Volatility};

use crate::payoff::OptionType;

/// A complete description of one pricing request.
///
/// Immutable once built; a pricer instance is keyed by its spec, and a
/// parameter change means a new spec and a new instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    /// Call or put.
    pub option_type: OptionType,
    /// Current price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Continuous dividend yield.
    pub dividend_yield: Rate,
    /// Continuously compounded risk-free rate.
    pub risk_free_rate: Rate,
    /// Residual time to maturity, in years.
    pub residual_time: Time,
    /// Volatility of the underlying.
    pub volatility: Volatility,
    /// Number of rollback time steps.
    pub time_steps: Size,
    /// Number of grid points (odd, ≥ 3).
    pub grid_points: Size,
}

impl OptionSpec {
    /// Check the specification, failing with
    /// [`InvalidArgument`](fdp_core::Error::InvalidArgument) on the first
    /// violated constraint.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spot.is_finite() && self.spot > 0.0,
            "spot must be finite and positive, got {}",
            self.spot
        );
        ensure!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be finite and positive, got {}",
            self.strike
        );
        ensure!(
            self.dividend_yield.is_finite(),
            "dividend yield must be finite, got {}",
            self.dividend_yield
        );
        ensure!(
            self.risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {}",
            self.risk_free_rate
        );
        ensure!(
            self.residual_time.is_finite() && self.residual_time > 0.0,
            "residual time must be finite and positive, got {}",
            self.residual_time
        );
        ensure!(
            self.volatility.is_finite() && self.volatility > 0.0,
            "volatility must be finite and positive, got {}",
            self.volatility
        );
        ensure!(
            self.time_steps >= 1,
            "at least one time step required, got {}",
            self.time_steps
        );
        ensure!(
            self.grid_points >= 3 && self.grid_points % 2 == 1,
            "grid points must be odd and at least 3, got {}",
            self.grid_points
        );
        Ok(())
    }
}

/// Value and sensitivities of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Present value.
    pub value: Real,
    /// ∂value/∂spot.
    pub delta: Real,
    /// ∂²value/∂spot².
    pub gamma: Real,
    /// −∂value/∂time-to-maturity (per year).
    pub theta: Real,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdp_core::Error;

    fn spec() -> OptionSpec {
        OptionSpec {
            option_type: OptionType::Put,
            spot: 100.0,
            strike: 100.0,
            dividend_yield: 0.0,
            risk_free_rate: 0.05,
            residual_time: 1.0,
            volatility: 0.3,
            time_steps: 100,
            grid_points: 101,
        }
    }

    #[test]
    fn valid_spec_passes() {
        assert!(spec().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_volatility() {
        let mut s = spec();
        s.volatility = 0.0;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_nonpositive_time() {
        let mut s = spec();
        s.residual_time = -0.5;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_non_finite_rate() {
        let mut s = spec();
        s.risk_free_rate = f64::NAN;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_even_or_tiny_grid() {
        let mut s = spec();
        s.grid_points = 100;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
        s.grid_points = 1;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_zero_steps() {
        let mut s = spec();
        s.time_steps = 0;
        assert!(matches!(s.validate(), Err(Error::InvalidArgument(_))));
    }
}
