// demos/quickstart.rs
use bsm_pricer::pricing::european::{price_european, BsmParams};

fn main() {
    println!("bsm-pricer Quick Start");
    println!("======================\n");

    // --- Standard Pricing ---
    println!("--- Standard Pricing ---");

    let params = BsmParams {
        s: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.2,
    };

    let prices = price_european(&params).expect("Valid parameters");

    println!(
        "Spot {:.2}, strike {:.2}, {:.2}y, r = {:.2}, sigma = {:.2}",
        params.s, params.k, params.t, params.r, params.sigma
    );
    println!("European Call Price: {:.4}", prices.call);
    println!("European Put Price:  {:.4}", prices.put);

    // --- Put-Call Parity ---
    println!("\n--- Put-Call Parity ---");

    let lhs = prices.call - prices.put;
    let rhs = params.s - params.k * (-params.r * params.t).exp();
    println!("C - P         = {:.6}", lhs);
    println!("S - K*e^(-rT) = {:.6}", rhs);
    println!("Difference    = {:e}", (lhs - rhs).abs());

    // --- Expiration ---
    println!("\n--- Expiration ---");

    let expired = BsmParams {
        s: 110.0,
        t: 0.0,
        ..params
    };
    let at_expiry = price_european(&expired).expect("Valid parameters");
    println!(
        "Spot {:.2} at expiry: call {:.4} (intrinsic), put {:.4}",
        expired.s, at_expiry.call, at_expiry.put
    );

    let expired_low = BsmParams {
        s: 90.0,
        t: 0.0,
        ..params
    };
    let at_expiry_low = price_european(&expired_low).expect("Valid parameters");
    println!(
        "Spot {:.2} at expiry: call {:.4}, put {:.4} (intrinsic)",
        expired_low.s, at_expiry_low.call, at_expiry_low.put
    );
}
