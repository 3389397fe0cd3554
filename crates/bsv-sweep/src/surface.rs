//! The strike/volatility call-price surface.

use crate::range::SweepRange;
use bsv_core::Real;
use bsv_engine::{call_price, BsParameters};
use bsv_math::Matrix;

/// Default surface strike axis: 80 to 120 in steps of 5.
pub const SURFACE_STRIKE_RANGE: SweepRange = SweepRange {
    start: 80.0,
    stop: 120.0,
    step: 5.0,
    decimals: None,
};

/// Default surface volatility axis: 10 % to 50 % in 2 % steps, on the
/// 2-decimal grid.
pub const SURFACE_VOLATILITY_RANGE: SweepRange = SweepRange {
    start: 0.10,
    stop: 0.50,
    step: 0.02,
    decimals: Some(2),
};

/// Call-price surface over a strike × volatility grid.
///
/// Row-major with row = volatility: `values[(i, j)]` is the call price at
/// `volatilities[i]` and `strikes[j]`, with the remaining parameters
/// (S, t, r) fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSweep {
    /// Strike axis (columns), ascending.
    pub strikes: Vec<Real>,
    /// Volatility axis (rows), ascending.
    pub volatilities: Vec<Real>,
    /// The price grid: `volatilities.len()` rows × `strikes.len()` columns.
    pub values: Matrix,
}

/// Evaluate the call-price surface over the given strike and volatility
/// ranges.
pub fn sweep_surface_over(
    params: &BsParameters,
    strike_range: &SweepRange,
    volatility_range: &SweepRange,
) -> SurfaceSweep {
    let strikes = strike_range.values();
    let volatilities = volatility_range.values();
    let values = Matrix::from_fn(volatilities.len(), strikes.len(), |i, j| {
        call_price(
            params.spot,
            strikes[j],
            params.expiry,
            params.rate,
            volatilities[i],
        )
    });
    SurfaceSweep {
        strikes,
        volatilities,
        values,
    }
}

/// The default strike/volatility surface (strikes 80–120, vols 10–50 %).
pub fn sweep_surface(params: &BsParameters) -> SurfaceSweep {
    sweep_surface_over(params, &SURFACE_STRIKE_RANGE, &SURFACE_VOLATILITY_RANGE)
}
