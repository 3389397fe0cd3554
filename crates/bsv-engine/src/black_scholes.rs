//! The Black-Scholes closed form and its sensitivities.
//!
//! Prices European vanilla options under constant risk-free rate and
//! volatility, with no dividends:
//!
//! $$C = S N(d_1) - K e^{-rT} N(d_2)$$
//! $$P = K e^{-rT} N(-d_2) - S N(-d_1)$$
//!
//! where $d_{1,2} = \frac{\ln(S/K) + (r \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
//!
//! Degenerate regimes carry no error channel: at or past expiry
//! (`t ≤ 0`) prices clamp to intrinsic value, while `σ ≤ 0`, `S ≤ 0`, or
//! `K ≤ 0` with `t > 0` yields NaN through [`d1_d2`].  Callers treat NaN
//! as "undefined at these parameters" (a chart renderer would skip the
//! point).

use crate::payoff::OptionType;
use bsv_core::{Price, Rate, Real, Time, Volatility};
use bsv_math::distributions::{normal_cdf, normal_pdf};

/// Compute the standardized Black-Scholes intermediates `(d1, d2)`.
///
/// Returns `(NAN, NAN)` when `t ≤ 0`, `σ ≤ 0`, `S ≤ 0`, or `K ≤ 0`: a
/// sentinel for the undefined regime, not an error.
pub fn d1_d2(spot: Price, strike: Price, expiry: Time, rate: Rate, vol: Volatility) -> (Real, Real) {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 || strike <= 0.0 {
        return (f64::NAN, f64::NAN);
    }
    let sqrt_t = expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    (d1, d2)
}

/// Black-Scholes price of a European option.
///
/// `φ·(S·N(φ·d1) − K·e^{−rt}·N(φ·d2))` with `φ = +1` for a call, `−1` for
/// a put.  At or past expiry (`t ≤ 0`) returns the intrinsic value; with
/// `t > 0` and `σ ≤ 0`, `S ≤ 0`, or `K ≤ 0` the NaN from [`d1_d2`]
/// propagates; prices are not clamped to intrinsic value in that regime.
pub fn price(
    option_type: OptionType,
    spot: Price,
    strike: Price,
    expiry: Time,
    rate: Rate,
    vol: Volatility,
) -> Price {
    if expiry <= 0.0 {
        return option_type.intrinsic_value(spot, strike);
    }
    let phi = option_type.sign();
    let (d1, d2) = d1_d2(spot, strike, expiry, rate, vol);
    let df = (-rate * expiry).exp();
    phi * (spot * normal_cdf(phi * d1) - strike * df * normal_cdf(phi * d2))
}

/// Black-Scholes price of a European call.
pub fn call_price(spot: Price, strike: Price, expiry: Time, rate: Rate, vol: Volatility) -> Price {
    price(OptionType::Call, spot, strike, expiry, rate, vol)
}

/// Black-Scholes price of a European put.
pub fn put_price(spot: Price, strike: Price, expiry: Time, rate: Rate, vol: Volatility) -> Price {
    price(OptionType::Put, spot, strike, expiry, rate, vol)
}

/// Put-call parity residual: `call − put − (S − K·e^{−rt})`.
///
/// Diagnostic residual, ≈ 0 for self-consistent call/put prices at the same
/// parameters.
pub fn parity_diff(
    spot: Price,
    strike: Price,
    expiry: Time,
    rate: Rate,
    call: Price,
    put: Price,
) -> Real {
    call - put - (spot - strike * (-rate * expiry).exp())
}

/// First- and second-order Black-Scholes sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ (per 1.0 absolute vol, not per 1%).
    pub vega: Real,
    /// ∂V/∂t (per year).
    pub theta: Real,
    /// ∂V/∂r (per 1.0 rate shift).
    pub rho: Real,
}

/// Compute the Black-Scholes Greeks.
///
/// An expired option (`t ≤ 0`) has no remaining sensitivities: all zero.
/// Degenerate inputs with `t > 0` propagate NaN like the prices.
pub fn greeks(
    option_type: OptionType,
    spot: Price,
    strike: Price,
    expiry: Time,
    rate: Rate,
    vol: Volatility,
) -> Greeks {
    if expiry <= 0.0 {
        return Greeks {
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
            theta: 0.0,
            rho: 0.0,
        };
    }
    let phi = option_type.sign();
    let (d1, d2) = d1_d2(spot, strike, expiry, rate, vol);
    let sqrt_t = expiry.sqrt();
    let df = (-rate * expiry).exp();
    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    Greeks {
        delta: phi * nd1,
        gamma: npd1 / (spot * vol * sqrt_t),
        vega: spot * npd1 * sqrt_t,
        theta: -(spot * npd1 * vol) / (2.0 * sqrt_t) - phi * rate * strike * df * nd2,
        rho: phi * strike * expiry * df * nd2,
    }
}
