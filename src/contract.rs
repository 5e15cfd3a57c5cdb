// src/contract.rs
//! Contract definitions
//!
//! [`OptionType`] and [`Contract`] are plain data: construction never fails and a contract has
//! no identity beyond its field values. Validation lives in [`Contract::validate`] and is only
//! run by callers that ask for it.

use crate::analytics::bs_analytic::{self, Greeks};
use crate::error::{validation::*, PricerError, PricerResult};
use std::fmt;
use std::str::FromStr;

/// European exercise right: buy (call) or sell (put) at the strike on expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "CALL"),
            OptionType::Put => write!(f, "PUT"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricerError::UnknownOptionType(s.to_string())),
        }
    }
}

/// All parameters needed to price a single option contract.
///
/// Host bindings expose the fields as `S`, `K`, `r`, `sigma`, `T` and `option_type`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contract {
    /// Spot price of the underlying
    pub s: f64,
    /// Strike price
    pub k: f64,
    /// Continuously compounded risk-free rate, decimal per year (0.05 = 5%)
    pub r: f64,
    /// Volatility, decimal per √year (0.20 = 20%)
    pub sigma: f64,
    /// Time to expiry in years
    pub t: f64,
    pub option_type: OptionType,
}

impl Contract {
    pub fn new(s: f64, k: f64, r: f64, sigma: f64, t: f64, option_type: OptionType) -> Self {
        Self {
            s,
            k,
            r,
            sigma,
            t,
            option_type,
        }
    }

    /// Closed-form price; unchecked, see [`bs_analytic::price_option`]
    #[inline]
    pub fn price(&self) -> f64 {
        bs_analytic::price_option(self.s, self.k, self.r, self.sigma, self.t, self.option_type)
    }

    /// Analytical Greeks; unchecked, see [`bs_analytic::compute_greeks`]
    #[inline]
    pub fn greeks(&self) -> Greeks {
        bs_analytic::compute_greeks(self.s, self.k, self.r, self.sigma, self.t, self.option_type)
    }

    /// Check every field against the domain the closed form needs.
    ///
    /// `S`, `K`, `sigma` and `T` must be finite and strictly positive; `r` may be any finite
    /// value, negative rates included.
    pub fn validate(&self) -> PricerResult<()> {
        validate_positive("S", self.s)?;
        validate_positive("K", self.k)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("T", self.t)?;
        Ok(())
    }

    /// Validate, then price.
    pub fn try_price(&self) -> PricerResult<f64> {
        self.validate()?;
        Ok(self.price())
    }

    /// Validate, then compute Greeks.
    pub fn try_greeks(&self) -> PricerResult<Greeks> {
        self.validate()?;
        Ok(self.greeks())
    }
}
