// src/pricing/european.rs
//! Black-Scholes-Merton prices for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes-Merton model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! Risk-neutral pricing gives closed-form European option prices in terms
//! of the standard normal CDF Φ(x):
//! ```text
//! C(S,K,T,r,σ) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P(S,K,T,r,σ) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//!
//! At or past expiration (T ≤ 0) there is no optionality left and both
//! prices collapse to intrinsic value.

use crate::error::{validation::*, PricingError, PricingResult};
use crate::math_utils::{ErfNormalCdf, NormalCdf};

/// Market and contract parameters for a European option pair
#[derive(Clone, Copy, Debug)]
pub struct BsmParams {
    pub s: f64,     // Spot price
    pub k: f64,     // Strike price
    pub t: f64,     // Time to expiration (years)
    pub r: f64,     // Risk-free rate (annualized, continuously compounded)
    pub sigma: f64, // Volatility (annualized)
}

impl BsmParams {
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        BsmParams { s, k, t, r, sigma }
    }

    /// Validate the parameters for the branch they select
    ///
    /// All five inputs must be finite. With `t > 0` the log and square-root
    /// terms additionally require positive `s`, `k` and `sigma`. With
    /// `t <= 0` the price is intrinsic value, which is defined for any
    /// finite spot and strike.
    pub fn validate(&self) -> PricingResult<()> {
        validate_finite("s", self.s)?;
        validate_finite("k", self.k)?;
        validate_finite("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_finite("sigma", self.sigma)?;

        if self.t > 0.0 {
            validate_positive("s", self.s)?;
            validate_positive("k", self.k)?;
            validate_positive("sigma", self.sigma)?;
        }

        Ok(())
    }
}

/// Call and put prices for one parameter set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

impl OptionPrices {
    /// Prices at expiration: the in-the-money leg pays `|S - K|`
    ///
    /// The at-the-money tie falls on the put side, where `K - S` is zero.
    pub fn intrinsic(s: f64, k: f64) -> Self {
        if s > k {
            OptionPrices {
                call: s - k,
                put: 0.0,
            }
        } else {
            OptionPrices {
                call: 0.0,
                put: k - s,
            }
        }
    }
}

/// The d₁ and d₂ terms shared by the call and put formulas
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
fn d1_d2(params: &BsmParams) -> (f64, f64) {
    let sqrt_t = params.t.sqrt();
    let d1 = ((params.s / params.k).ln()
        + (params.r + 0.5 * params.sigma * params.sigma) * params.t)
        / (params.sigma * sqrt_t);
    let d2 = d1 - params.sigma * sqrt_t;
    (d1, d2)
}

/// Black-Scholes-Merton European call and put prices
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// For `t <= 0` both legs are intrinsic: `C = max(S-K, 0)`,
/// `P = max(K-S, 0)`.
///
/// # Parameters
/// - `params.s`: Current stock price
/// - `params.k`: Strike price
/// - `params.t`: Time to expiration in years
/// - `params.r`: Risk-free rate
/// - `params.sigma`: Volatility
///
/// # Returns
/// Present value of the call and put as [`OptionPrices`]
///
/// # Errors
///
/// Returns `PricingError` for:
/// - Non-finite inputs, or non-positive `s`/`k`/`sigma` when `t > 0`
/// - Non-finite computed prices (extreme parameter magnitudes)
pub fn price_european(params: &BsmParams) -> PricingResult<OptionPrices> {
    price_european_with_cdf(params, &ErfNormalCdf)
}

/// Same as [`price_european`], with a caller-supplied CDF evaluator
pub fn price_european_with_cdf<C: NormalCdf>(
    params: &BsmParams,
    normal: &C,
) -> PricingResult<OptionPrices> {
    params.validate()?;

    if params.t <= 0.0 {
        return Ok(OptionPrices::intrinsic(params.s, params.k));
    }

    let (d1, d2) = d1_d2(params);
    let discount = (-params.r * params.t).exp();

    let call = params.s * normal.cdf(d1) - params.k * discount * normal.cdf(d2);
    let put = params.k * discount * normal.cdf(-d2) - params.s * normal.cdf(-d1);

    if !call.is_finite() {
        return Err(PricingError::NumericalInstability {
            quantity: "call price".to_string(),
            reason: format!("computed value is not finite: {}", call),
        });
    }
    if !put.is_finite() {
        return Err(PricingError::NumericalInstability {
            quantity: "put price".to_string(),
            reason: format!("computed value is not finite: {}", put),
        });
    }

    // Round-off can leave a deep out-of-the-money leg a hair below zero
    Ok(OptionPrices {
        call: call.max(0.0),
        put: put.max(0.0),
    })
}

/// European call price alone
pub fn call_price(params: &BsmParams) -> PricingResult<f64> {
    Ok(price_european(params)?.call)
}

/// European put price alone
pub fn put_price(params: &BsmParams) -> PricingResult<f64> {
    Ok(price_european(params)?.put)
}
