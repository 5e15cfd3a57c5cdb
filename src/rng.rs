// src/rng.rs
//! Synthetic contract generation
//!
//! The benchmark and the batch tests need large, heterogeneous, reproducible inputs. A
//! [`ContractSampler`] draws each field from an independent uniform distribution using a
//! seeded [`StdRng`], so the same seed always yields the same contracts. Option types
//! alternate deterministically: even indices are calls, odd indices are puts.

use crate::contract::{Contract, OptionType};
use crate::error::{validation::*, PricerResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Sampling ranges, each half-open `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    pub spot: (f64, f64),
    pub strike: (f64, f64),
    pub sigma: (f64, f64),
    pub expiry: (f64, f64),
    /// Flat risk-free rate shared by every generated contract
    pub rate: f64,
}

impl SamplerConfig {
    pub fn validate(&self) -> PricerResult<()> {
        for (name, (low, high)) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("sigma", self.sigma),
            ("expiry", self.expiry),
        ] {
            validate_range(name, low, high)?;
            validate_positive(name, low)?;
        }
        validate_finite("rate", self.rate)?;
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            spot: (80.0, 120.0),
            strike: (70.0, 130.0),
            sigma: (0.10, 0.50),
            expiry: (0.10, 2.00),
            rate: 0.05,
        }
    }
}

pub struct ContractSampler {
    rng: StdRng,
    rate: f64,
    spot: Uniform<f64>,
    strike: Uniform<f64>,
    sigma: Uniform<f64>,
    expiry: Uniform<f64>,
    index: u64,
}

impl ContractSampler {
    pub fn new(cfg: SamplerConfig, seed: u64) -> PricerResult<Self> {
        cfg.validate()?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            rate: cfg.rate,
            spot: Uniform::new(cfg.spot.0, cfg.spot.1),
            strike: Uniform::new(cfg.strike.0, cfg.strike.1),
            sigma: Uniform::new(cfg.sigma.0, cfg.sigma.1),
            expiry: Uniform::new(cfg.expiry.0, cfg.expiry.1),
            index: 0,
        })
    }

    /// Draw the next contract in the sequence
    pub fn next_contract(&mut self) -> Contract {
        let option_type = if self.index % 2 == 0 {
            OptionType::Call
        } else {
            OptionType::Put
        };
        self.index += 1;

        Contract {
            s: self.spot.sample(&mut self.rng),
            k: self.strike.sample(&mut self.rng),
            r: self.rate,
            sigma: self.sigma.sample(&mut self.rng),
            t: self.expiry.sample(&mut self.rng),
            option_type,
        }
    }

    /// Draw `n` contracts into one pre-sized vector
    pub fn sample(&mut self, n: usize) -> Vec<Contract> {
        let mut contracts = Vec::with_capacity(n);
        for _ in 0..n {
            contracts.push(self.next_contract());
        }
        contracts
    }
}

/// `n` contracts from the default ranges
pub fn random_contracts(n: usize, seed: u64) -> PricerResult<Vec<Contract>> {
    validate_count("contracts", n)?;
    let mut sampler = ContractSampler::new(SamplerConfig::default(), seed)?;
    Ok(sampler.sample(n))
}
