// src/shell.rs
//! Interactive prompt loop for the console pricer
//!
//! Reads the five pricing inputs one line at a time, reprompting on
//! non-numeric or below-minimum values. Both functions are generic over the
//! reader and writer so sessions can be scripted in tests.

use crate::pricing::european::BsmParams;
use std::io::{self, BufRead, Write};

/// Prompt for one numeric value until an acceptable one arrives
///
/// Values below `min` and lines that do not parse as a number print an
/// error and prompt again. A closed input stream is reported as
/// [`io::ErrorKind::UnexpectedEof`].
pub fn read_parameter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: f64,
) -> io::Result<f64> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended while reading a parameter",
            ));
        }

        match line.trim().parse::<f64>() {
            Ok(value) => {
                if value < min {
                    // Debug keeps the floor's fractional part ("0.0", not "0")
                    writeln!(output, "Error: Value must be at least {:?}.", min)?;
                } else {
                    return Ok(value);
                }
            }
            Err(_) => {
                writeln!(output, "Error: Invalid input. Please enter a number.")?;
            }
        }
    }
}

/// Prompt for the five pricing inputs in order
///
/// Spot and strike accept any non-negative value. The floors on time and
/// volatility keep the interactive path out of the degenerate expiry branch;
/// the rate floor admits moderately negative rates.
pub fn read_inputs<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<BsmParams> {
    let s = read_parameter(input, output, "Current Stock Price (S): $", 0.0)?;
    let k = read_parameter(input, output, "Option Strike Price (K): $", 0.0)?;
    let t = read_parameter(
        input,
        output,
        "Time to Expiration (T, in years, e.g., 0.5): ",
        0.0001,
    )?;
    let r = read_parameter(
        input,
        output,
        "Risk-Free Rate (r, decimal, e.g., 0.05 for 5%): ",
        -0.5,
    )?;
    let sigma = read_parameter(
        input,
        output,
        "Volatility (sigma, decimal, e.g., 0.30 for 30%): ",
        0.0001,
    )?;

    Ok(BsmParams { s, k, t, r, sigma })
}
