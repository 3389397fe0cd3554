//! Evaluation parameter set and derived point results.

use crate::black_scholes::{self, Greeks};
use crate::payoff::OptionType;
use bsv_core::{Price, Rate, Real, Time, Volatility};

/// A single Black-Scholes evaluation point.
///
/// Immutable per evaluation, no identity beyond its values.  The fields
/// are plain reals; the documented slider ranges of the visualization
/// front-end are defaults, not validation bounds.  The math tolerates any
/// value, with the degenerate handling described in
/// [`black_scholes::d1_d2`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsParameters {
    /// Current price of the underlying asset (S).
    pub spot: Price,
    /// Strike price (K).
    pub strike: Price,
    /// Remaining option lifetime in years (t).
    pub expiry: Time,
    /// Continuously-compounded risk-free rate (r).
    pub rate: Rate,
    /// Annualized volatility of log returns (σ).
    pub volatility: Volatility,
}

impl Default for BsParameters {
    /// The front-end's default slider position: an at-the-money one-year
    /// option at 5 % rates and 20 % volatility.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl BsParameters {
    /// Create a parameter set from its five values.
    pub fn new(spot: Price, strike: Price, expiry: Time, rate: Rate, volatility: Volatility) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        }
    }

    /// Call price at this parameter set.
    pub fn call(&self) -> Price {
        black_scholes::call_price(self.spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Put price at this parameter set.
    pub fn put(&self) -> Price {
        black_scholes::put_price(self.spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Both prices at this parameter set.
    pub fn prices(&self) -> OptionPrices {
        OptionPrices {
            call: self.call(),
            put: self.put(),
        }
    }

    /// Put-call parity residual of this parameter set's own prices.
    pub fn parity_diff(&self) -> Real {
        let OptionPrices { call, put } = self.prices();
        black_scholes::parity_diff(self.spot, self.strike, self.expiry, self.rate, call, put)
    }

    /// Greeks for the given option type at this parameter set.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        black_scholes::greeks(
            option_type,
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
        )
    }
}

/// Call and put prices at one parameter set.
///
/// Derived, never stored; recomputed on every parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionPrices {
    /// European call price.
    pub call: Price,
    /// European put price.
    pub put: Price,
}
