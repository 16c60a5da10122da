// src/output.rs
use crate::pricing::european::{BsmParams, OptionPrices};
use std::io::{self, Write};

/// Render the results block: echoed inputs, then both prices
///
/// Currency fields print with two decimals for the echoed spot and strike
/// and four decimals for the prices; time, rate and volatility echo with
/// four decimals.
pub fn write_report<W: Write>(
    out: &mut W,
    params: &BsmParams,
    prices: &OptionPrices,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Results ---")?;
    writeln!(out, "Input Parameters:")?;
    writeln!(out, "  Spot Price (S):      ${:.2}", params.s)?;
    writeln!(out, "  Strike Price (K):    ${:.2}", params.k)?;
    writeln!(out, "  Time (T):            {:.4} years", params.t)?;
    writeln!(out, "  Risk-Free Rate (r):  {:.4}", params.r)?;
    writeln!(out, "  Volatility (sigma):  {:.4}", params.sigma)?;
    writeln!(out, "{:-<25}", "")?;
    writeln!(out, "European Call Price: ${:.4}", prices.call)?;
    writeln!(out, "European Put Price:  ${:.4}", prices.put)?;
    writeln!(out, "{:-<25}", "")?;
    Ok(())
}

/// [`write_report`] to stdout
pub fn print_report(params: &BsmParams, prices: &OptionPrices) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, params, prices)
}
