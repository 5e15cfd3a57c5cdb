// demos/quickstart.rs
use options_pricer::rng::random_contracts;
use options_pricer::{compute_greeks, price_batch, price_option, OptionType};

fn main() {
    println!("options-pricer quickstart");
    println!("=========================\n");

    let (s, k, r, sigma, t) = (100.0, 105.0, 0.05, 0.20, 0.5);

    for option_type in [OptionType::Call, OptionType::Put] {
        let price = price_option(s, k, r, sigma, t, option_type);
        let greeks = compute_greeks(s, k, r, sigma, t, option_type);
        println!("{:<4} price = {:>8.4}  {}", option_type, price, greeks);
    }

    let call = price_option(s, k, r, sigma, t, OptionType::Call);
    let put = price_option(s, k, r, sigma, t, OptionType::Put);
    let parity = (call - put) - (s - k * (-r * t).exp());
    println!("\nPut-call parity residual: {:.3e}", parity);

    // Batch Greeks are a plain loop over the single-contract function
    let contracts = random_contracts(5, 42).expect("default sampler is valid");
    let prices = price_batch(&contracts);
    println!("\n{:<6} {:>8} {:>8} {:>6} {:>6} {:>10} {:>8}", "type", "S", "K", "sigma", "T", "price", "delta");
    for (c, price) in contracts.iter().zip(&prices) {
        let g = c.greeks();
        println!(
            "{:<6} {:>8.2} {:>8.2} {:>6.3} {:>6.3} {:>10.4} {:>8.4}",
            c.option_type, c.s, c.k, c.sigma, c.t, price, g.delta
        );
    }
}
