//! Error types for bsviz.
//!
//! The pricing engine itself never fails: degenerate inputs are signalled
//! through NaN or intrinsic-value clamping.  The error type here covers the
//! remaining fallible surface: constructors that validate caller-supplied
//! configuration, such as custom sweep ranges.

use thiserror::Error;

/// The top-level error type used throughout bsviz.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout bsviz.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Bail out with `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bsv_core::ensure;
/// fn positive(x: f64) -> bsv_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: f64) -> Result<f64> {
        crate::ensure!(x.is_finite(), "x must be finite, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(2.0), Ok(2.0));
        let err = checked(f64::NAN).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
        assert!(err.to_string().contains("finite"));
    }
}
