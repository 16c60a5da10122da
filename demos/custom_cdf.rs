// demos/custom_cdf.rs
use bsm_pricer::math_utils::{AbramowitzStegunCdf, ErfNormalCdf, NormalCdf};
use bsm_pricer::pricing::european::{price_european_with_cdf, BsmParams};

/// Logistic approximation Φ(x) ≈ 1/(1 + e^(-1.702x)), max error ~1e-2
struct LogisticCdf;

impl NormalCdf for LogisticCdf {
    fn cdf(&self, x: f64) -> f64 {
        1.0 / (1.0 + (-1.702 * x).exp())
    }
}

fn main() {
    println!("Pluggable CDF Demo for bsm-pricer");
    println!("=================================\n");

    // --- Evaluator Comparison ---
    println!("--- Evaluator Comparison ---");
    println!(
        "{:>6} {:>14} {:>14} {:>14}",
        "x", "erf", "A&S 26.2.17", "logistic"
    );

    let erf_cdf = ErfNormalCdf;
    let as_cdf = AbramowitzStegunCdf;
    let logistic = LogisticCdf;

    for &x in &[-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0] {
        println!(
            "{:>6.2} {:>14.8} {:>14.8} {:>14.8}",
            x,
            erf_cdf.cdf(x),
            as_cdf.cdf(x),
            logistic.cdf(x)
        );
    }

    // --- Pricing With Each Evaluator ---
    println!("\n--- Pricing With Each Evaluator ---");

    let params = BsmParams {
        s: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        sigma: 0.2,
    };

    let with_erf = price_european_with_cdf(&params, &erf_cdf).expect("Valid parameters");
    let with_as = price_european_with_cdf(&params, &as_cdf).expect("Valid parameters");
    let with_logistic = price_european_with_cdf(&params, &logistic).expect("Valid parameters");

    println!(
        "erf:       call = {:.8}, put = {:.8}",
        with_erf.call, with_erf.put
    );
    println!(
        "A&S:       call = {:.8}, put = {:.8}",
        with_as.call, with_as.put
    );
    println!(
        "logistic:  call = {:.8}, put = {:.8}",
        with_logistic.call, with_logistic.put
    );

    println!(
        "\n|erf - A&S| on the call: {:e}",
        (with_erf.call - with_as.call).abs()
    );
    println!(
        "|erf - logistic| on the call: {:e}",
        (with_erf.call - with_logistic.call).abs()
    );
    println!("\nThe reference evaluators agree to ~1e-7; the crude logistic");
    println!("approximation lands several tenths away from the true price.");
}
