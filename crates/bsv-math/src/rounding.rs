//! Decimal rounding utilities.
//!
//! Sweep axes pin each grid value to a fixed number of decimals so that a
//! stepped axis reads `0.05, 0.06, …` instead of accumulating float error.

use bsv_core::Real;

/// Rounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// No rounding — return the value unchanged.
    None,
    /// Round up (ceiling towards positive infinity).
    Up,
    /// Round down (floor towards negative infinity).
    Down,
    /// Round to nearest, ties away from zero.
    Closest,
}

/// Round `value` to `precision` decimal places using the given convention.
pub fn round(value: Real, precision: i32, convention: Rounding) -> Real {
    let mult = 10_f64.powi(precision);
    match convention {
        Rounding::None => value,
        Rounding::Up => (value * mult).ceil() / mult,
        Rounding::Down => (value * mult).floor() / mult,
        Rounding::Closest => (value * mult).round() / mult,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_rounding() {
        assert!((round(1.2345, 2, Rounding::Closest) - 1.23).abs() < 1e-10);
        assert!((round(1.2355, 2, Rounding::Closest) - 1.24).abs() < 1e-10);
    }

    #[test]
    fn up_and_down_rounding() {
        assert!((round(1.2301, 2, Rounding::Up) - 1.24).abs() < 1e-10);
        assert!((round(1.2399, 2, Rounding::Down) - 1.23).abs() < 1e-10);
    }

    #[test]
    fn none_is_identity() {
        assert_eq!(round(1.23456, 2, Rounding::None), 1.23456);
    }

    #[test]
    fn pins_stepped_axis_values() {
        // repeated += 0.01 drifts away from the decimal grid
        let drifted = (0..12).fold(0.05_f64, |acc, _| acc + 0.01);
        assert_eq!(round(drifted, 2, Rounding::Closest), 0.17);
    }
}
