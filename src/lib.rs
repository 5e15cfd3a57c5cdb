//! # options-pricer: Black-Scholes-Merton pricing for European options
//!
//! Closed-form valuation and analytical Greeks for European calls and puts, plus a batch
//! driver for pricing large arrays of heterogeneous contracts in one call.
//!
//! ## Key Features
//!
//! - **Closed form**: `S·Φ(d₁) − K·e^(−rT)·Φ(d₂)` with Φ taken from `erfc`, stable in both tails
//! - **Analytical Greeks**: delta, gamma, vega (per 1% vol), theta (per calendar day)
//! - **Batch pricing**: one allocation, index-aligned output, optional Rayon parallelism
//! - **Total kernel**: no validation and no error channel; bad inputs come back as NaN/±∞
//! - **Opt-in checks**: [`Contract::validate`] and [`Contract::try_price`] for boundary code
//!
//! ## Quick Start
//!
//! ```rust
//! use options_pricer::{compute_greeks, price_batch, price_option, Contract, OptionType};
//!
//! let call = price_option(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call);
//! let put = price_option(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put);
//! assert!((call - put - (100.0 - 100.0 * (-0.05f64).exp())).abs() < 1e-10);
//!
//! let greeks = compute_greeks(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call);
//! println!("{}", greeks); // Greeks(delta=…, gamma=…, vega=…, theta=…)
//!
//! let contracts = vec![
//!     Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call),
//!     Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put),
//! ];
//! let prices = price_batch(&contracts);
//! assert_eq!(prices, vec![call, put]);
//! ```
//!
//! ## Units
//!
//! All inputs are `f64`. Rates and volatilities are decimal fractions per year (0.05 = 5%),
//! expiry is in years. Vega is the textbook value divided by 100 and theta the annualized
//! value divided by 365.

// Module declarations
pub mod analytics;
pub mod batch;
pub mod contract;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod rng;

#[cfg(feature = "python")]
mod python;

// Host-facing surface
pub use analytics::bs_analytic::{compute_greeks, price_option, Greeks};
pub use batch::{price_batch, price_batch_par};
pub use contract::{Contract, OptionType};
pub use error::{PricerError, PricerResult};
