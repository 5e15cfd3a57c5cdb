// scripts/price.rs
use anyhow::{Context, Result};
use clap::Parser;
use options_pricer::{Contract, OptionType};
use tracing::{debug, Level};

/// Price one European option and print its Greeks
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Spot price of the underlying (S)
    #[arg(long, default_value_t = 100.0)]
    spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 105.0)]
    strike: f64,

    /// Continuously compounded risk-free rate, decimal per year (r)
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,

    /// Volatility, decimal per sqrt(year) (sigma)
    #[arg(long, default_value_t = 0.20)]
    sigma: f64,

    /// Time to expiry in years (T)
    #[arg(long, default_value_t = 0.5)]
    expiry: f64,

    /// CALL or PUT
    #[arg(long, default_value = "call")]
    option_type: OptionType,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let contract = Contract::new(
        args.spot,
        args.strike,
        args.rate,
        args.sigma,
        args.expiry,
        args.option_type,
    );
    debug!(?contract, "pricing contract");

    let price = contract.try_price().context("rejected contract")?;
    let greeks = contract.greeks();

    println!(
        "Contract : S={}, K={}, r={}, sigma={}, T={} yr  [{}]",
        contract.s, contract.k, contract.r, contract.sigma, contract.t, contract.option_type
    );
    println!();
    println!("{:<10} {:>12}  Notes", "Metric", "Value");
    println!("{:-<52}", "");
    println!("{:<10} {:>12.4}", "Price", price);
    println!("{:<10} {:>12.4}  dV/dS", "Delta", greeks.delta);
    println!("{:<10} {:>12.4}  d2V/dS2", "Gamma", greeks.gamma);
    println!("{:<10} {:>12.4}  per 1% vol move", "Vega", greeks.vega);
    println!("{:<10} {:>12.4}  per calendar day", "Theta", greeks.theta);

    Ok(())
}
