//! Inclusive stepped sweep axes.

use bsv_core::{ensure, Real, Result, Size};
use bsv_math::rounding::{round, Rounding};

/// An inclusive `[start, stop]` axis stepped by `step`, optionally pinned
/// to a fixed number of decimals.
///
/// Pinning reproduces the decimal grid a chart axis is expected to show
/// (`0.05, 0.06, …`) instead of accumulated float error.  Fields are
/// public so that known-good defaults can be consts; [`SweepRange::new`]
/// and [`SweepRange::rounded`] validate caller-supplied ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    /// First axis value.
    pub start: Real,
    /// Inclusive upper bound.
    pub stop: Real,
    /// Positive step between consecutive values.
    pub step: Real,
    /// Decimal places each value is rounded to, if any.
    pub decimals: Option<i32>,
}

impl SweepRange {
    /// Create a validated range with no decimal pinning.
    pub fn new(start: Real, stop: Real, step: Real) -> Result<Self> {
        ensure!(step > 0.0, "step must be positive, got {step}");
        ensure!(
            stop >= start,
            "stop ({stop}) must not precede start ({start})"
        );
        Ok(Self {
            start,
            stop,
            step,
            decimals: None,
        })
    }

    /// Create a validated range whose values are rounded to `decimals`
    /// places.
    pub fn rounded(start: Real, stop: Real, step: Real, decimals: i32) -> Result<Self> {
        let mut range = Self::new(start, stop, step)?;
        range.decimals = Some(decimals);
        Ok(range)
    }

    // The epsilon keeps `stop` inclusive when (stop - start)/step lands
    // just under an integer, e.g. (0.60 - 0.05)/0.01 = 54.999…
    fn count(&self) -> Size {
        ((self.stop - self.start) / self.step + 1e-9).floor() as Size + 1
    }

    /// Materialize the axis values in ascending order.
    pub fn values(&self) -> Vec<Real> {
        (0..self.count())
            .map(|i| {
                let v = self.start + i as Real * self.step;
                match self.decimals {
                    Some(d) => round(v, d, Rounding::Closest),
                    None => v,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_ranges() {
        assert!(SweepRange::new(0.0, 1.0, 0.0).is_err());
        assert!(SweepRange::new(0.0, 1.0, -0.1).is_err());
        assert!(SweepRange::new(1.0, 0.0, 0.1).is_err());
    }

    #[test]
    fn integer_stepped_axis() {
        let axis = SweepRange::new(50.0, 150.0, 2.0).unwrap().values();
        assert_eq!(axis.len(), 51);
        assert_eq!(axis[0], 50.0);
        assert_eq!(axis[1], 52.0);
        assert_eq!(*axis.last().unwrap(), 150.0);
    }

    #[test]
    fn rounded_axis_stays_on_decimal_grid() {
        let axis = SweepRange::rounded(0.05, 0.60, 0.01, 2).unwrap().values();
        assert_eq!(axis.len(), 56);
        assert_eq!(axis[0], 0.05);
        assert_eq!(axis[12], 0.17);
        assert_eq!(*axis.last().unwrap(), 0.60);
    }

    #[test]
    fn stop_inclusive_when_quotient_lands_under_an_integer() {
        // (0.50 - 0.10)/0.02 computes to 19.999…, still 21 points
        let axis = SweepRange::rounded(0.10, 0.50, 0.02, 2).unwrap().values();
        assert_eq!(axis.len(), 21);
        assert_eq!(*axis.last().unwrap(), 0.50);
    }

    #[test]
    fn degenerate_single_point_range() {
        let axis = SweepRange::new(5.0, 5.0, 1.0).unwrap().values();
        assert_eq!(axis, vec![5.0]);
    }
}
