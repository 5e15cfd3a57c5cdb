// src/batch.rs
//! Batch pricing driver
//!
//! Prices a slice of [`Contract`]s into a freshly allocated `Vec<f64>` that is index-aligned
//! with the input: `prices[i]` is exactly `contracts[i].price()`, bit for bit. The output
//! buffer is sized once up front and never grows mid-run.
//!
//! Greeks are not batched here. Callers that need them loop over
//! [`crate::compute_greeks`] and pick their own layout.

use crate::contract::Contract;
use rayon::prelude::*;

/// Price every contract in order on the calling thread.
pub fn price_batch(contracts: &[Contract]) -> Vec<f64> {
    tracing::trace!(contracts = contracts.len(), "serial batch");

    let mut prices = Vec::with_capacity(contracts.len());
    for contract in contracts {
        prices.push(contract.price());
    }
    prices
}

/// Price every contract across the rayon thread pool.
///
/// Each element goes through the same kernel call as [`price_batch`], so the two drivers
/// return identical vectors for identical input.
pub fn price_batch_par(contracts: &[Contract]) -> Vec<f64> {
    tracing::trace!(
        contracts = contracts.len(),
        threads = rayon::current_num_threads(),
        "parallel batch"
    );

    let mut prices = Vec::with_capacity(contracts.len());
    contracts
        .par_iter()
        .map(Contract::price)
        .collect_into_vec(&mut prices);
    prices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::OptionType;

    #[test]
    fn test_empty_batch() {
        assert!(price_batch(&[]).is_empty());
        assert!(price_batch_par(&[]).is_empty());
    }

    #[test]
    fn test_capacity_matches_input() {
        let contracts = vec![Contract::new(100.0, 95.0, 0.03, 0.25, 0.5, OptionType::Put); 37];
        let prices = price_batch(&contracts);
        assert_eq!(prices.len(), 37);
        assert_eq!(prices.capacity(), 37);
    }

    #[test]
    fn test_inputs_left_untouched() {
        let contracts = vec![
            Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call),
            Contract::new(90.0, 110.0, 0.01, 0.35, 0.25, OptionType::Put),
        ];
        let snapshot = contracts.clone();
        let _ = price_batch(&contracts);
        let _ = price_batch_par(&contracts);
        assert_eq!(contracts, snapshot);
    }
}
