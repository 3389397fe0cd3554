//! # bsv-sweep
//!
//! Parameter-sweep generation for chart rendering.
//!
//! Three pure, deterministic generators evaluate the pricing engine over
//! ordered grids: price vs. volatility, price vs. underlying, and a
//! strike/volatility call-price surface.  Each grid point is one engine
//! evaluation, with no caching between calls.  NaN from degenerate
//! parameters passes through untouched for the renderer to display or
//! skip.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Curve sweeps (one varying parameter).
pub mod curve;

/// Inclusive stepped sweep axes.
pub mod range;

/// The strike/volatility price surface.
pub mod surface;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use curve::{
    sweep_by_underlying, sweep_by_volatility, sweep_curve, CurveSweep, SweepVariable,
    UNDERLYING_RANGE, VOLATILITY_RANGE,
};
pub use range::SweepRange;
pub use surface::{
    sweep_surface, sweep_surface_over, SurfaceSweep, SURFACE_STRIKE_RANGE,
    SURFACE_VOLATILITY_RANGE,
};
