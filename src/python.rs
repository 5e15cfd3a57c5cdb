// src/python.rs
//! Python bindings, built with `--features python`.
//!
//! The module is importable as `options_pricer`. Parameter and field names follow the
//! finance notation (`S`, `K`, `r`, `sigma`, `T`) so they can be passed as keywords.
#![allow(non_snake_case)]

use pyo3::prelude::*;

use crate::analytics::bs_analytic::{self, Greeks};
use crate::batch;
use crate::contract::{Contract, OptionType};

#[pyclass(name = "OptionType", eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyOptionType {
    #[pyo3(name = "CALL")]
    Call,
    #[pyo3(name = "PUT")]
    Put,
}

impl From<PyOptionType> for OptionType {
    fn from(value: PyOptionType) -> Self {
        match value {
            PyOptionType::Call => OptionType::Call,
            PyOptionType::Put => OptionType::Put,
        }
    }
}

#[pyclass(name = "Greeks", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyGreeks {
    inner: Greeks,
}

#[pymethods]
impl PyGreeks {
    /// dV/dS; positive [0,1] for calls, negative [-1,0] for puts.
    #[getter]
    fn delta(&self) -> f64 {
        self.inner.delta
    }

    /// d²V/dS²; always positive, largest near ATM.
    #[getter]
    fn gamma(&self) -> f64 {
        self.inner.gamma
    }

    /// dV/dσ per 1% vol move; always positive for long options.
    #[getter]
    fn vega(&self) -> f64 {
        self.inner.vega
    }

    /// dV/dT per calendar day; typically negative (time decay).
    #[getter]
    fn theta(&self) -> f64 {
        self.inner.theta
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Contract")]
#[derive(Debug, Clone, Copy)]
pub struct PyContract {
    #[pyo3(get, set, name = "S")]
    s: f64,
    #[pyo3(get, set, name = "K")]
    k: f64,
    #[pyo3(get, set)]
    r: f64,
    #[pyo3(get, set)]
    sigma: f64,
    #[pyo3(get, set, name = "T")]
    t: f64,
    #[pyo3(get, set)]
    option_type: PyOptionType,
}

#[pymethods]
impl PyContract {
    #[new]
    #[pyo3(signature = (S, K, r, sigma, T, option_type))]
    fn new(S: f64, K: f64, r: f64, sigma: f64, T: f64, option_type: PyOptionType) -> Self {
        Self {
            s: S,
            k: K,
            r,
            sigma,
            t: T,
            option_type,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Contract(S={}, K={}, r={}, sigma={}, T={}, option_type={})",
            self.s,
            self.k,
            self.r,
            self.sigma,
            self.t,
            OptionType::from(self.option_type)
        )
    }
}

impl From<&PyContract> for Contract {
    fn from(c: &PyContract) -> Self {
        Contract::new(c.s, c.k, c.r, c.sigma, c.t, c.option_type.into())
    }
}

/// Compute the Black-Scholes price of a European option.
#[pyfunction]
#[pyo3(signature = (S, K, r, sigma, T, option_type))]
fn price_option(S: f64, K: f64, r: f64, sigma: f64, T: f64, option_type: PyOptionType) -> f64 {
    bs_analytic::price_option(S, K, r, sigma, T, option_type.into())
}

/// Compute analytical Black-Scholes Greeks for a European option.
#[pyfunction]
#[pyo3(signature = (S, K, r, sigma, T, option_type))]
fn compute_greeks(
    S: f64,
    K: f64,
    r: f64,
    sigma: f64,
    T: f64,
    option_type: PyOptionType,
) -> PyGreeks {
    PyGreeks {
        inner: bs_analytic::compute_greeks(S, K, r, sigma, T, option_type.into()),
    }
}

/// Price a list of Contract objects. Returns a list of prices in the same order.
#[pyfunction]
fn price_batch(py: Python<'_>, contracts: Vec<PyContract>) -> Vec<f64> {
    let contracts: Vec<Contract> = contracts.iter().map(Contract::from).collect();
    py.allow_threads(|| batch::price_batch(&contracts))
}

/// Black-Scholes options pricing engine with analytical Greeks.
#[pymodule]
fn options_pricer(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyOptionType>()?;
    module.add_class::<PyGreeks>()?;
    module.add_class::<PyContract>()?;

    // OptionType.CALL / OptionType.PUT are also reachable as module-level names
    module.add("CALL", PyOptionType::Call)?;
    module.add("PUT", PyOptionType::Put)?;

    module.add_function(wrap_pyfunction!(price_option, module)?)?;
    module.add_function(wrap_pyfunction!(compute_greeks, module)?)?;
    module.add_function(wrap_pyfunction!(price_batch, module)?)?;
    Ok(())
}
