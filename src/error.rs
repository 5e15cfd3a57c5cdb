// src/error.rs
//! Error types for the boundary layer around the pricing kernel.
//!
//! The kernel in [`crate::analytics::bs_analytic`] is total: bad inputs come back as NaN or
//! infinities, never as errors. Everything in this module is opt-in, for callers (the CLI,
//! the benchmark harness, bindings) that want to reject a contract before it is priced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricerError {
    /// A contract or sampler parameter lies outside its mathematical domain.
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Configuration that cannot be used as given.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Text that is neither CALL nor PUT.
    #[error("Unknown option type '{0}': expected CALL or PUT")]
    UnknownOptionType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for options-pricer operations
pub type PricerResult<T> = Result<T, PricerError>;

/// Validation utilities
pub mod validation {
    use super::{PricerError, PricerResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PricerResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricerResult<()> {
        if !value.is_finite() {
            Err(PricerError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a half-open sampling range `[low, high)`
    pub fn validate_range(name: &str, low: f64, high: f64) -> PricerResult<()> {
        validate_finite(name, low)?;
        validate_finite(name, high)?;
        if low >= high {
            Err(PricerError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("empty range [{}, {})", low, high),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a contract count for generated batches
    pub fn validate_count(name: &str, count: usize) -> PricerResult<()> {
        if count == 0 {
            Err(PricerError::InvalidConfiguration {
                field: name.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
