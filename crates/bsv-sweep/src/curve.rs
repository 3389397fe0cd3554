//! Curve sweeps: call/put price series over one varying parameter.

use crate::range::SweepRange;
use bsv_core::{Real, Size};
use bsv_engine::BsParameters;

/// Default volatility axis: 5 % to 60 % in 1 % steps, on the 2-decimal grid.
pub const VOLATILITY_RANGE: SweepRange = SweepRange {
    start: 0.05,
    stop: 0.60,
    step: 0.01,
    decimals: Some(2),
};

/// Default underlying axis: 50 to 150 in steps of 2.
pub const UNDERLYING_RANGE: SweepRange = SweepRange {
    start: 50.0,
    stop: 150.0,
    step: 2.0,
    decimals: None,
};

/// The parameter a curve sweep varies; all others stay fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepVariable {
    /// Vary σ, fixing S, K, t, r.
    Volatility,
    /// Vary S, fixing K, t, r, σ.
    Underlying,
}

/// Ordered chart data for one curve sweep.
///
/// `calls` and `puts` are parallel to `axis`: `calls[i]` and `puts[i]`
/// are the prices with the varying parameter set to `axis[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSweep {
    /// The independent axis values, ascending.
    pub axis: Vec<Real>,
    /// Call price at each axis value.
    pub calls: Vec<Real>,
    /// Put price at each axis value.
    pub puts: Vec<Real>,
}

impl CurveSweep {
    /// Number of grid points.
    pub fn len(&self) -> Size {
        self.axis.len()
    }

    /// Whether the sweep holds no points.
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }
}

/// Evaluate the engine over `range`, varying the given parameter.
pub fn sweep_curve(
    params: &BsParameters,
    variable: SweepVariable,
    range: &SweepRange,
) -> CurveSweep {
    let axis = range.values();
    let mut calls = Vec::with_capacity(axis.len());
    let mut puts = Vec::with_capacity(axis.len());
    for &x in &axis {
        let point = match variable {
            SweepVariable::Volatility => BsParameters {
                volatility: x,
                ..*params
            },
            SweepVariable::Underlying => BsParameters { spot: x, ..*params },
        };
        calls.push(point.call());
        puts.push(point.put());
    }
    CurveSweep { axis, calls, puts }
}

/// Price-vs-volatility chart data over the default axis.
pub fn sweep_by_volatility(params: &BsParameters) -> CurveSweep {
    sweep_curve(params, SweepVariable::Volatility, &VOLATILITY_RANGE)
}

/// Price-vs-underlying chart data over the default axis.
pub fn sweep_by_underlying(params: &BsParameters) -> CurveSweep {
    sweep_curve(params, SweepVariable::Underlying, &UNDERLYING_RANGE)
}
