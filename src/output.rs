// src/output.rs
use crate::contract::Contract;
use crate::error::PricerResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One row per contract: index, contract fields, price.
///
/// `contracts` and `prices` are expected to be index-aligned, as returned by the batch
/// driver; rows stop at the shorter of the two.
pub fn write_prices_to_csv<P: AsRef<Path>>(
    filename: P,
    contracts: &[Contract],
    prices: &[f64],
) -> PricerResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "index,S,K,r,sigma,T,option_type,price")?;
    for (i, (c, price)) in contracts.iter().zip(prices).enumerate() {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{}",
            i, c.s, c.k, c.r, c.sigma, c.t, c.option_type, price
        )?;
    }
    file.flush()?;
    Ok(())
}

pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    summary_data: &[(&str, String)],
) -> PricerResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    file.flush()?;
    Ok(())
}
