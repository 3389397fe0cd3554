//! # bsv-engine
//!
//! Closed-form Black-Scholes pricing for European options.
//!
//! Pure numeric functions only: d1/d2, call/put prices, the put-call
//! parity residual, and Greeks.  Degenerate parameter regions are
//! signalled through NaN or intrinsic-value clamping rather than errors;
//! see [`black_scholes::d1_d2`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The Black-Scholes closed form and its sensitivities.
pub mod black_scholes;

/// Evaluation parameter set and derived point results.
pub mod params;

/// Option type (call / put).
pub mod payoff;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_scholes::{call_price, d1_d2, greeks, parity_diff, price, put_price, Greeks};
pub use params::{BsParameters, OptionPrices};
pub use payoff::OptionType;
