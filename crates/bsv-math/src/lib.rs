//! # bsv-math
//!
//! Mathematical utilities for bsviz: floating-point comparison, decimal
//! rounding, the standard normal distribution, and a small matrix newtype
//! (over nalgebra) used for price-surface storage.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// 2D matrix newtype.
pub mod matrix;

/// Rounding conventions.
pub mod rounding;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
pub use matrix::Matrix;
pub use rounding::{round, Rounding};
