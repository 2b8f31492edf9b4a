// demos/demo.rs
use heston_cf::analytics::bs_analytic;
use heston_cf::math_utils::Timer;
use heston_cf::models::heston::{Heston, HestonParams};
use heston_cf::pricing::{heston_cf_price, price_batch, PricingConfig};

fn main() {
    println!("Running heston-cf Pricing Demo\n");

    let params = HestonParams {
        s0: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        v0: 0.04,
        theta: 0.04,
        kappa: 2.0,
        sigma: 0.5,
        rho: -0.7,
    };

    let heston = Heston::new(params).expect("Valid parameters");
    let cfg = PricingConfig::default();

    let mut timer = Timer::new();
    timer.start();
    let estimate = heston_cf_price(&heston, &cfg).expect("Converging quadrature");
    let elapsed = timer.elapsed_ms();

    println!("Heston CF price:        {:.6}", estimate.price);
    println!("Quadrature error bound: {:.3e}", estimate.error_bound);
    println!("CF evaluations:         {}", estimate.evaluations);
    println!("Elapsed:                {:.3} ms", elapsed);

    // For orientation only: the simplified characteristic function is not
    // the textbook Heston closed form, so this is not expected to match.
    let bs = bs_analytic::bs_call_price(params.s0, params.k, params.r, params.v0.sqrt(), params.t);
    println!("\nBlack-Scholes (σ = √v0) call for reference: {:.6}", bs);

    // Batch pricing across a maturity ladder, in parallel
    println!("\nMaturity ladder (batch, parallel):");
    let ladder: Vec<HestonParams> = [0.25, 0.5, 1.0, 2.0, 5.0]
        .iter()
        .map(|&t| HestonParams { t, ..params })
        .collect();

    timer.start();
    let results = price_batch(&ladder, &cfg);
    let batch_elapsed = timer.elapsed_ms();

    for (req, res) in ladder.iter().zip(&results) {
        match res {
            Ok(est) => println!("  T = {:>4.2}: {:.6}", req.t, est.price),
            Err(e) => println!("  T = {:>4.2}: failed ({})", req.t, e),
        }
    }
    println!("Batch elapsed: {:.3} ms", batch_elapsed);
}
