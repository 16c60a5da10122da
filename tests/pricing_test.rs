// tests/pricing_test.rs
use approx::assert_abs_diff_eq;
use bsm_pricer::error::PricingError;
use bsm_pricer::math_utils::AbramowitzStegunCdf;
use bsm_pricer::pricing::european::{price_european, price_european_with_cdf, BsmParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_reference_value_atm_one_year() {
    // S=100, K=100, T=1, r=5%, sigma=20%: the standard worked example
    let params = BsmParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let prices = price_european(&params).expect("Valid parameters");

    println!("\nCall: {}", prices.call);
    println!("Put:  {}", prices.put);

    assert_abs_diff_eq!(prices.call, 10.450583572185565, epsilon = 1e-6);
    assert_abs_diff_eq!(prices.put, 5.573526022256971, epsilon = 1e-6);

    // Rounded figures quoted in most references
    assert_abs_diff_eq!(prices.call, 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(prices.put, 5.5735, epsilon = 1e-3);
}

#[test]
fn test_reference_values_published_examples() {
    // Hull: S=42, K=40, T=0.5, r=10%, sigma=20% -> c = 4.76, p = 0.81
    let hull = BsmParams::new(42.0, 40.0, 0.5, 0.1, 0.2);
    let hull_prices = price_european(&hull).expect("Valid parameters");

    println!("\nHull example: call = {}, put = {}", hull_prices.call, hull_prices.put);
    assert_abs_diff_eq!(hull_prices.call, 4.76, epsilon = 5e-3);
    assert_abs_diff_eq!(hull_prices.put, 0.81, epsilon = 5e-3);

    // Haug: S=60, K=65, T=0.25, r=8%, sigma=30% -> c = 2.1334
    let haug = BsmParams::new(60.0, 65.0, 0.25, 0.08, 0.3);
    let haug_prices = price_european(&haug).expect("Valid parameters");

    println!("Haug example: call = {}", haug_prices.call);
    assert_abs_diff_eq!(haug_prices.call, 2.1334, epsilon = 1e-3);
}

#[test]
fn test_atm_zero_rate_call_equals_put() {
    // With S=K and r=0, d2 = -d1 and the two legs mirror each other
    let params = BsmParams::new(100.0, 100.0, 1.0, 0.0, 0.2);
    let prices = price_european(&params).expect("Valid parameters");

    println!("\nATM r=0 call: {}", prices.call);
    println!("ATM r=0 put:  {}", prices.put);

    let gap = (prices.call - prices.put).abs();
    assert!(gap < 1e-12, "Call and put differ at the money: {}", gap);
    assert_abs_diff_eq!(prices.call, 7.965567455405804, epsilon = 1e-9);

    // Same symmetry away from the canonical parameters
    let other = BsmParams::new(50.0, 50.0, 0.5, 0.0, 0.35);
    let other_prices = price_european(&other).expect("Valid parameters");
    let other_gap = (other_prices.call - other_prices.put).abs();
    assert!(other_gap < 1e-12, "Call and put differ at the money: {}", other_gap);
}

#[test]
fn test_expiry_boundary_cases() {
    // In the money at expiry: call pays S - K exactly
    let itm = price_european(&BsmParams::new(110.0, 100.0, 0.0, 0.05, 0.2))
        .expect("Valid parameters");
    assert_eq!(itm.call, 10.0);
    assert_eq!(itm.put, 0.0);

    // Out of the money at expiry: put pays K - S exactly
    let otm = price_european(&BsmParams::new(90.0, 100.0, 0.0, 0.05, 0.2))
        .expect("Valid parameters");
    assert_eq!(otm.call, 0.0);
    assert_eq!(otm.put, 10.0);

    // At the money at expiry: both legs worthless
    let atm = price_european(&BsmParams::new(100.0, 100.0, 0.0, 0.05, 0.2))
        .expect("Valid parameters");
    assert_eq!(atm.call, 0.0);
    assert_eq!(atm.put, 0.0);

    // Past expiry behaves the same as at expiry
    let past = price_european(&BsmParams::new(95.0, 100.0, -0.25, 0.05, 0.2))
        .expect("Valid parameters");
    assert_eq!(past.call, 0.0);
    assert_eq!(past.put, 5.0);
}

#[test]
fn test_expired_contract_ignores_rate_and_vol() {
    // Intrinsic value depends on spot and strike alone
    let wild = price_european(&BsmParams::new(120.0, 100.0, 0.0, 10.0, 5.0))
        .expect("Valid parameters");
    assert_eq!(wild.call, 20.0);
    assert_eq!(wild.put, 0.0);

    // Zero volatility is fine once there is no time on the clock
    let flat = price_european(&BsmParams::new(80.0, 100.0, -1.0, 0.05, 0.0))
        .expect("Valid parameters");
    assert_eq!(flat.call, 0.0);
    assert_eq!(flat.put, 20.0);
}

#[test]
fn test_domain_errors_name_the_parameter() {
    let cases = [
        (BsmParams::new(-100.0, 100.0, 1.0, 0.05, 0.2), "s"),
        (BsmParams::new(100.0, 0.0, 1.0, 0.05, 0.2), "k"),
        (BsmParams::new(100.0, 100.0, 1.0, 0.05, -0.2), "sigma"),
        (BsmParams::new(100.0, 100.0, f64::NAN, 0.05, 0.2), "t"),
        (BsmParams::new(100.0, 100.0, 1.0, f64::INFINITY, 0.2), "r"),
    ];

    for (params, expected) in cases {
        match price_european(&params) {
            Err(PricingError::InvalidParameters { parameter, .. }) => {
                assert_eq!(parameter, expected);
            }
            other => panic!(
                "Expected InvalidParameters for '{}', got {:?}",
                expected, other
            ),
        }
    }
}

#[test]
fn test_overflowing_price_reports_instability() {
    // The inputs are valid, but K*e^(-rT) overflows f64 and the raw call
    // leg lands at -inf; that comes back as an error, not a price
    let params = BsmParams::new(1e308, 1e308, 4.0, -0.5, 0.2);
    match price_european(&params) {
        Err(PricingError::NumericalInstability { quantity, reason }) => {
            assert_eq!(quantity, "call price");
            assert!(
                reason.contains("not finite"),
                "Unexpected reason text: {}",
                reason
            );
        }
        other => panic!("Expected NumericalInstability, got {:?}", other),
    }
}

#[test]
fn test_deep_moneyness_limits() {
    let t: f64 = 1.0;
    let r: f64 = 0.05;
    let discounted_strike = 100.0 * (-r * t).exp();

    // Deep in the money: the call converges to S - K*e^(-rT)
    let deep_itm = price_european(&BsmParams::new(300.0, 100.0, t, r, 0.2))
        .expect("Valid parameters");
    assert_abs_diff_eq!(deep_itm.call, 300.0 - discounted_strike, epsilon = 1e-5);
    assert!(deep_itm.put >= 0.0);
    assert!(deep_itm.put < 1e-5, "Deep ITM put should vanish: {}", deep_itm.put);

    // Deep out of the money: the call vanishes
    let deep_otm = price_european(&BsmParams::new(30.0, 100.0, t, r, 0.2))
        .expect("Valid parameters");
    assert!(deep_otm.call >= 0.0);
    assert!(deep_otm.call < 1e-5, "Deep OTM call should vanish: {}", deep_otm.call);
    assert_abs_diff_eq!(deep_otm.put, discounted_strike - 30.0, epsilon = 1e-5);
}

#[test]
fn test_parity_holds_on_grid() {
    let spots = [80.0, 90.0, 100.0, 110.0, 120.0];
    let strikes = [90.0, 100.0, 110.0];
    let times = [0.25, 1.0, 2.0];
    let rates = [-0.05, 0.0, 0.05];
    let sigmas = [0.1, 0.2, 0.4];

    let mut checked = 0;
    for &s in &spots {
        for &k in &strikes {
            for &t in &times {
                for &r in &rates {
                    for &sigma in &sigmas {
                        let params = BsmParams::new(s, k, t, r, sigma);
                        let prices = price_european(&params).expect("Valid parameters");

                        let lhs = prices.call - prices.put;
                        let rhs = s - k * (-r * t).exp();
                        let gap = (lhs - rhs).abs();
                        assert!(
                            gap < 1e-8,
                            "Parity violated at S={} K={} T={} r={} sigma={}: {}",
                            s,
                            k,
                            t,
                            r,
                            sigma,
                            gap
                        );
                        checked += 1;
                    }
                }
            }
        }
    }

    println!("\nParity checked on {} grid points", checked);
}

#[test]
fn test_parity_random_sweep() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let s = rng.gen_range(10.0..500.0);
        let k = rng.gen_range(10.0..500.0);
        let t = rng.gen_range(0.05..3.0);
        let r = rng.gen_range(-0.25..0.25);
        let sigma = rng.gen_range(0.05..0.8);

        let params = BsmParams::new(s, k, t, r, sigma);
        let prices = price_european(&params).expect("Valid parameters");

        let gap = ((prices.call - prices.put) - (s - k * (-r * t).exp())).abs();
        assert!(
            gap < 1e-8,
            "Parity violated at S={} K={} T={} r={} sigma={}: {}",
            s,
            k,
            t,
            r,
            sigma,
            gap
        );
    }
}

#[test]
fn test_monotonic_in_spot() {
    let mut last: Option<(f64, f64)> = None;

    for spot in (60..=140).step_by(5) {
        let params = BsmParams::new(spot as f64, 100.0, 1.0, 0.05, 0.2);
        let prices = price_european(&params).expect("Valid parameters");

        if let Some((prev_call, prev_put)) = last {
            assert!(
                prices.call >= prev_call - 1e-10,
                "Call decreased in spot at S={}: {} -> {}",
                spot,
                prev_call,
                prices.call
            );
            assert!(
                prices.put <= prev_put + 1e-10,
                "Put increased in spot at S={}: {} -> {}",
                spot,
                prev_put,
                prices.put
            );
        }
        last = Some((prices.call, prices.put));
    }
}

#[test]
fn test_monotonic_in_strike() {
    let mut last: Option<(f64, f64)> = None;

    for strike in (60..=140).step_by(5) {
        let params = BsmParams::new(100.0, strike as f64, 1.0, 0.05, 0.2);
        let prices = price_european(&params).expect("Valid parameters");

        if let Some((prev_call, prev_put)) = last {
            assert!(
                prices.call <= prev_call + 1e-10,
                "Call increased in strike at K={}: {} -> {}",
                strike,
                prev_call,
                prices.call
            );
            assert!(
                prices.put >= prev_put - 1e-10,
                "Put decreased in strike at K={}: {} -> {}",
                strike,
                prev_put,
                prices.put
            );
        }
        last = Some((prices.call, prices.put));
    }
}

#[test]
fn test_pricing_with_reference_cdf() {
    // The Abramowitz-Stegun evaluator prices within its CDF error bound
    let reference = AbramowitzStegunCdf;

    let cases = [
        BsmParams::new(100.0, 100.0, 1.0, 0.05, 0.2),
        BsmParams::new(42.0, 40.0, 0.5, 0.1, 0.2),
        BsmParams::new(60.0, 65.0, 0.25, 0.08, 0.3),
        BsmParams::new(150.0, 100.0, 2.0, -0.01, 0.5),
    ];

    for params in cases {
        let default_prices = price_european(&params).expect("Valid parameters");
        let reference_prices =
            price_european_with_cdf(&params, &reference).expect("Valid parameters");

        let call_gap = (default_prices.call - reference_prices.call).abs();
        let put_gap = (default_prices.put - reference_prices.put).abs();

        println!(
            "S={} K={}: call gap = {:e}, put gap = {:e}",
            params.s, params.k, call_gap, put_gap
        );
        assert!(call_gap < 1e-4, "Evaluators disagree on the call: {}", call_gap);
        assert!(put_gap < 1e-4, "Evaluators disagree on the put: {}", put_gap);
    }
}
