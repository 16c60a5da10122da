// demos/error_handling.rs
use bsm_pricer::error::PricingError;
use bsm_pricer::pricing::european::{price_european, BsmParams};

fn main() {
    println!("Error Handling Demo for bsm-pricer");
    println!("==================================\n");

    // Test 1: Negative spot price
    println!("1. Testing negative spot price...");

    let negative_spot = BsmParams {
        s: -100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.2,
    };

    match price_european(&negative_spot) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility with time on the clock
    println!("\n2. Testing zero volatility...");

    let zero_vol = BsmParams {
        s: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.0,
    };

    match price_european(&zero_vol) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: NaN input
    println!("\n3. Testing NaN time to expiration...");

    let nan_time = BsmParams {
        s: 100.0,
        k: 100.0,
        t: f64::NAN,
        r: 0.05,
        sigma: 0.2,
    };

    match price_european(&nan_time) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Expired contract is not an error
    println!("\n4. Testing expired contract...");

    let expired = BsmParams {
        s: 90.0,
        k: 100.0,
        t: 0.0,
        r: 0.05,
        sigma: 0.2,
    };

    match price_european(&expired) {
        Ok(prices) => println!(
            "   ✓ Intrinsic value: call = {:.4}, put = {:.4}",
            prices.call, prices.put
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Valid parameters should work
    println!("\n5. Testing valid parameters...");

    let valid = BsmParams {
        s: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.2,
    };

    match price_european(&valid) {
        Ok(prices) => println!(
            "   ✓ Success: call = {:.4}, put = {:.4}",
            prices.call, prices.put
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 6: Error type matching
    println!("\n6. Testing error type matching...");

    let bad_strike = BsmParams {
        s: 100.0,
        k: 0.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.2,
    };

    match price_european(&bad_strike) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
