//! # bsm-pricer: Black-Scholes-Merton European Option Pricing
//!
//! A Rust library for pricing European call and put options with the
//! Black-Scholes-Merton closed-form model, together with the interactive
//! console front end built on top of it.
//!
//! ## Key Features
//!
//! - **Closed-Form Pricing**: Call and put computed in one pass over shared d₁/d₂ terms
//! - **Degenerate Expiry Handling**: T ≤ 0 collapses to intrinsic value
//! - **Pluggable Normal CDF**: erf-backed default plus an Abramowitz-Stegun reference
//! - **Robust Validation**: Structured domain errors instead of NaN results
//! - **Testable Console I/O**: Prompt loop and report writer generic over reader/writer
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_pricer::pricing::european::{price_european, BsmParams};
//!
//! // One-year at-the-money contract
//! let params = BsmParams {
//!     s: 100.0,    // Spot price
//!     k: 100.0,    // Strike price
//!     t: 1.0,      // Time to expiration (years)
//!     r: 0.05,     // Risk-free rate
//!     sigma: 0.2,  // Volatility
//! };
//!
//! let prices = price_european(&params).expect("Valid parameters");
//! println!("Call: {:.4}  Put: {:.4}", prices.call, prices.put);
//! ```
//!
//! ## Mathematical Foundation
//!
//! With time to expiration T, spot S, strike K, rate r and volatility σ:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P  = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//! where Φ is the standard normal CDF. At or past expiration the prices
//! reduce to intrinsic value.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod output;
pub mod pricing;
pub mod shell;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use pricing::european::{price_european, BsmParams, OptionPrices};
