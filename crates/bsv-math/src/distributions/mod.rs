//! Probability distributions.
//!
//! Only the standard normal is needed for Black-Scholes; its cdf is a
//! hand-rolled polynomial approximation so that pricing carries no
//! dependency on an external special-functions implementation.

pub mod normal;

pub use normal::{normal_cdf, normal_pdf};
