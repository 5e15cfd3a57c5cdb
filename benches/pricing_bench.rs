use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use options_pricer::rng::random_contracts;
use options_pricer::{compute_greeks, price_batch, price_batch_par, price_option, OptionType};
use std::hint::black_box;

fn bench_price_option(c: &mut Criterion) {
    c.bench_function("price_option_atm_call", |b| {
        b.iter(|| {
            price_option(
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(0.20),
                black_box(1.0),
                black_box(OptionType::Call),
            )
        })
    });
}

fn bench_compute_greeks(c: &mut Criterion) {
    c.bench_function("compute_greeks_atm_put", |b| {
        b.iter(|| {
            compute_greeks(
                black_box(100.0),
                black_box(100.0),
                black_box(0.05),
                black_box(0.20),
                black_box(1.0),
                black_box(OptionType::Put),
            )
        })
    });
}

fn bench_price_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_batch");

    for n in [1_000_usize, 100_000] {
        let contracts = random_contracts(n, 42).expect("default sampler is valid");
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("serial", n), &contracts, |b, contracts| {
            b.iter(|| black_box(price_batch(black_box(contracts))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &contracts, |b, contracts| {
            b.iter(|| black_box(price_batch_par(black_box(contracts))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_price_option, bench_compute_greeks, bench_price_batch);
criterion_main!(benches);
