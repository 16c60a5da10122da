// scripts/pricer.rs
use bsm_pricer::output;
use bsm_pricer::pricing::european::price_european;
use bsm_pricer::shell;
use std::io;
use std::process;

fn main() {
    println!("\n--- Black-Scholes-Merton European Option Pricer ---");
    println!("Please enter the required parameters.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts = io::stdout();

    let params = match shell::read_inputs(&mut input, &mut prompts) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    let prices = match price_european(&params) {
        Ok(prices) => prices,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = output::print_report(&params, &prices) {
        eprintln!("Error writing results: {}", e);
        process::exit(1);
    }
}
