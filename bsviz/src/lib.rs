//! # bsviz
//!
//! Black-Scholes option pricing and chart-sweep generation for
//! interactive visualizers.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code (typically the
//! presentation layer driving sliders and charts) should depend on this
//! crate rather than the individual `bsv-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! bsviz = "0.1"
//! ```
//!
//! ```rust
//! use bsviz::engine::BsParameters;
//! use bsviz::sweep::sweep_by_volatility;
//!
//! let params = BsParameters::default();
//! let prices = params.prices();
//! assert!((prices.call - 10.45).abs() < 0.01);
//! assert!((prices.put - 5.57).abs() < 0.01);
//!
//! let chart = sweep_by_volatility(&params);
//! assert_eq!(chart.axis.len(), chart.calls.len());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bsv_core as core;

/// Mathematical utilities: normal distribution, rounding, comparison.
pub use bsv_math as math;

/// The closed-form pricing engine.
pub use bsv_engine as engine;

/// Parameter-sweep generation for charts.
pub use bsv_sweep as sweep;
