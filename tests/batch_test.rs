// tests/batch_test.rs
use options_pricer::rng::{random_contracts, ContractSampler, SamplerConfig};
use options_pricer::{compute_greeks, price_batch, price_batch_par, price_option, Contract, OptionType};

#[test]
fn test_batch_index_alignment_bit_exact() {
    let contracts = random_contracts(10_000, 42).expect("default sampler is valid");
    let prices = price_batch(&contracts);

    assert_eq!(prices.len(), contracts.len());
    for (i, (c, &price)) in contracts.iter().zip(&prices).enumerate() {
        let single = price_option(c.s, c.k, c.r, c.sigma, c.t, c.option_type);
        assert_eq!(
            price.to_bits(),
            single.to_bits(),
            "index {} diverged: batch {} vs single {}",
            i,
            price,
            single
        );
    }
}

#[test]
fn test_parallel_batch_matches_serial() {
    let contracts = random_contracts(50_000, 7).expect("default sampler is valid");
    let serial = price_batch(&contracts);
    let parallel = price_batch_par(&contracts);

    assert_eq!(serial.len(), parallel.len());
    assert!(
        serial
            .iter()
            .zip(&parallel)
            .all(|(a, b)| a.to_bits() == b.to_bits()),
        "parallel driver must reproduce the serial output exactly"
    );
}

#[test]
fn test_batch_preserves_order_and_duplicates() {
    let call = Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call);
    let put = Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put);
    let contracts = vec![call, put, call, call, put];

    let prices = price_batch(&contracts);
    assert_eq!(prices.len(), 5);
    assert_eq!(prices[0], prices[2]);
    assert_eq!(prices[0], prices[3]);
    assert_eq!(prices[1], prices[4]);
    assert!(prices[0] > prices[1]);
}

#[test]
fn test_batch_passes_invalid_contracts_through() {
    let contracts = vec![
        Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call),
        Contract::new(-1.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call),
        Contract::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Put),
    ];

    let prices = price_batch(&contracts);
    assert_eq!(prices.len(), 3);
    assert!(prices[0].is_finite());
    assert!(prices[1].is_nan());
    assert!(prices[2].is_finite());
}

#[test]
fn test_batch_is_repeatable() {
    let contracts = random_contracts(1_000, 99).expect("default sampler is valid");
    assert_eq!(price_batch(&contracts), price_batch(&contracts));
}

#[test]
fn test_caller_side_batch_greeks() {
    // Greeks are not batched by the library; a caller loop stays index-aligned too
    let cfg = SamplerConfig {
        spot: (95.0, 105.0),
        ..SamplerConfig::default()
    };
    let mut sampler = ContractSampler::new(cfg, 3).expect("valid sampler config");
    let contracts = sampler.sample(200);

    let greeks: Vec<_> = contracts.iter().map(Contract::greeks).collect();
    assert_eq!(greeks.len(), contracts.len());
    for (c, g) in contracts.iter().zip(&greeks) {
        assert_eq!(*g, compute_greeks(c.s, c.k, c.r, c.sigma, c.t, c.option_type));
    }
}
