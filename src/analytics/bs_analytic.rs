// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! European options then have closed-form values in terms of the standard normal CDF Φ:
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P  = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//!
//! # Failure semantics
//!
//! Nothing here validates. Non-positive `s`, `k`, `sigma` or `t` flow through `ln`, `√` and
//! division and come back as NaN or ±∞. Use [`crate::Contract::validate`] at the boundary if
//! that matters to the caller.

use crate::contract::OptionType;
use crate::math_utils::{norm_cdf, norm_pdf};
use std::fmt;

const VEGA_SCALE: f64 = 100.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// First-order sensitivities of an option's price.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Greeks {
    /// ∂V/∂S; in [0, 1] for calls, [-1, 0] for puts
    pub delta: f64,
    /// ∂²V/∂S²; non-negative and identical for calls and puts
    pub gamma: f64,
    /// ∂V/∂σ per 1% absolute move in volatility
    pub vega: f64,
    /// ∂V/∂t per calendar day; usually negative for long options
    pub theta: f64,
}

impl fmt::Display for Greeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Greeks(delta={}, gamma={}, vega={}, theta={})",
            self.delta, self.gamma, self.vega, self.theta
        )
    }
}

/// Returns `(d₁, d₂, √T)`
#[inline(always)]
fn d1d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64, f64) {
    let sqrt_t = t.sqrt();
    let vol_sqrt_t = sigma * sqrt_t;
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t, sqrt_t)
}

/// Black-Scholes price of a European option
///
/// # Parameters
/// - `s`: Spot price
/// - `k`: Strike price
/// - `r`: Continuously compounded risk-free rate (e.g. 0.05)
/// - `sigma`: Volatility (e.g. 0.20)
/// - `t`: Time to expiry in years
/// - `option_type`: Call or put
///
/// # Returns
/// Present value of the option
#[inline]
pub fn price_option(s: f64, k: f64, r: f64, sigma: f64, t: f64, option_type: OptionType) -> f64 {
    let (d1, d2, _) = d1d2(s, k, r, sigma, t);
    let disc = (-r * t).exp();

    match option_type {
        OptionType::Call => s * norm_cdf(d1) - k * disc * norm_cdf(d2),
        OptionType::Put => k * disc * norm_cdf(-d2) - s * norm_cdf(-d1),
    }
}

/// Analytical Black-Scholes Greeks for a European option
///
/// Same parameter conventions as [`price_option`]. The four sensitivities share `d₁`, `d₂`,
/// `φ(d₁)` and the discount factor, so they are always computed together.
///
/// # Formulas
/// ```text
/// Δ_call = Φ(d₁)                     Δ_put = Φ(d₁) - 1
/// Γ      = φ(d₁) / (S σ √T)
/// ν      = S φ(d₁) √T / 100
/// Θ_call = (-S φ(d₁) σ / (2√T) - r K e^(-rT) Φ(d₂))  / 365
/// Θ_put  = (-S φ(d₁) σ / (2√T) + r K e^(-rT) Φ(-d₂)) / 365
/// ```
///
/// Vega is quoted per 1% absolute vol move and theta per calendar day; callers on a
/// trading-day convention rescale theta themselves.
pub fn compute_greeks(
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
    option_type: OptionType,
) -> Greeks {
    let (d1, d2, sqrt_t) = d1d2(s, k, r, sigma, t);
    let disc = (-r * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let gamma = pdf_d1 / (s * sigma * sqrt_t);
    let vega = s * pdf_d1 * sqrt_t / VEGA_SCALE;

    // Time decay from volatility; shared by calls and puts
    let decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);

    let (delta, annual_theta) = match option_type {
        OptionType::Call => (norm_cdf(d1), decay - r * k * disc * norm_cdf(d2)),
        OptionType::Put => (norm_cdf(d1) - 1.0, decay + r * k * disc * norm_cdf(-d2)),
    };

    Greeks {
        delta,
        gamma,
        vega,
        theta: annual_theta / DAYS_PER_YEAR,
    }
}
