// scripts/benchmark.rs
use anyhow::{Context, Result};
use clap::Parser;
use options_pricer::error::validation::validate_count;
use options_pricer::math_utils::Timer;
use options_pricer::output::{write_prices_to_csv, write_summary_to_csv};
use options_pricer::rng::{ContractSampler, SamplerConfig};
use options_pricer::{price_batch, price_batch_par};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Time price_batch over synthetic contracts")]
struct Args {
    /// Number of contracts to generate and price
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    contracts: usize,

    /// Seed for contract generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Use the Rayon batch driver instead of the serial one
    #[arg(long, default_value = "false")]
    parallel: bool,

    /// Write a key/value summary of the run to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write every contract and its price to this CSV file
    #[arg(long)]
    prices_csv: Option<PathBuf>,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let system_info = SystemInfo::gather();
    info!(
        os = %system_info.os,
        cpu = %system_info.cpu_model,
        cores = system_info.cpu_cores,
        rayon_threads = system_info.rayon_threads,
        rust = %system_info.rust_version,
        rustflags = %system_info.rustc_flags,
        "system information"
    );

    validate_count("contracts", args.contracts)?;
    info!(contracts = args.contracts, seed = args.seed, "generating contracts");
    let mut sampler = ContractSampler::new(SamplerConfig::default(), args.seed)
        .context("building contract sampler")?;
    let contracts = sampler.sample(args.contracts);

    // Only the batch call sits inside the timing window
    let driver = if args.parallel { "parallel" } else { "serial" };
    info!(driver, "pricing batch");
    let mut timer = Timer::new();
    timer.start();
    let prices = if args.parallel {
        price_batch_par(&contracts)
    } else {
        price_batch(&contracts)
    };
    let time_ms = timer.elapsed_ms();

    let n = contracts.len();
    let contracts_per_sec = n as f64 / (time_ms / 1000.0);
    let checksum: f64 = prices.iter().sum();

    println!("Contracts priced : {}", n);
    println!("Driver           : {}", driver);
    println!("Total time       : {:.2} ms", time_ms);
    println!("Throughput       : {:.0} contracts/sec", contracts_per_sec);
    println!("Price checksum   : {:.6}", checksum);

    if let Some(path) = &args.csv {
        let summary = [
            ("contracts", n.to_string()),
            ("seed", args.seed.to_string()),
            ("driver", driver.to_string()),
            ("time_ms", format!("{:.2}", time_ms)),
            ("contracts_per_sec", format!("{:.0}", contracts_per_sec)),
            ("price_checksum", format!("{:.6}", checksum)),
            ("os", system_info.os.clone()),
            ("cpu", system_info.cpu_model.clone()),
            ("cpu_cores", system_info.cpu_cores.to_string()),
            ("rayon_threads", system_info.rayon_threads.to_string()),
            ("rust_version", system_info.rust_version.clone()),
            (
                "benchmark_date",
                chrono::Utc::now()
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
            ),
        ];
        write_summary_to_csv(path, &summary)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    if let Some(path) = &args.prices_csv {
        write_prices_to_csv(path, &contracts, &prices)
            .with_context(|| format!("writing prices to {}", path.display()))?;
        info!(path = %path.display(), "prices written");
    }

    Ok(())
}
