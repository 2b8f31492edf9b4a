// demos/error_handling_demo.rs
use heston_cf::error::PricingError;
use heston_cf::models::heston::{Heston, HestonParams};
use heston_cf::pricing::{heston_cf_price, PricingConfig};

fn reference_params() -> HestonParams {
    HestonParams {
        s0: 100.0,
        k: 100.0,
        t: 1.0,
        r: 0.05,
        v0: 0.04,
        theta: 0.04,
        kappa: 2.0,
        sigma: 0.5,
        rho: -0.7,
    }
}

fn main() {
    println!("Error Handling Demo for heston-cf");
    println!("==================================\n");

    // Test 1: Invalid strike
    println!("1. Testing zero strike...");

    let invalid_params = HestonParams {
        k: 0.0,
        ..reference_params()
    };

    match Heston::new(invalid_params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Invalid correlation
    println!("\n2. Testing invalid correlation...");

    let invalid_rho_params = HestonParams {
        rho: 1.5,
        ..reference_params()
    };

    match Heston::new(invalid_rho_params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Extreme vol-of-vol is rejected before any integration
    println!("\n3. Testing extreme vol-of-vol...");

    let extreme_params = HestonParams {
        sigma: 1e6,
        ..reference_params()
    };

    match Heston::new(extreme_params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Degenerate denominator at u = 0 (ρσ = 0)
    println!("\n4. Testing degenerate characteristic function...");

    let degenerate_params = HestonParams {
        rho: 0.0,
        ..reference_params()
    };

    let heston = Heston::new(degenerate_params).expect("Parameters are individually valid");
    match heston_cf_price(&heston, &PricingConfig::default()) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::DegenerateComputation { u, reason }) => {
            println!("   ✓ Caught DegenerateComputation at u = {}: {}", u, reason);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 5: Starved quadrature budget surfaces the partial estimate
    println!("\n5. Testing quadrature non-convergence...");

    let heston = Heston::new(reference_params()).expect("Valid parameters");
    let starved_cfg = PricingConfig {
        abs_tol: 1e-12,
        max_depth: 1,
        ..Default::default()
    };

    match heston_cf_price(&heston, &starved_cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::IntegrationNonConvergence {
            estimate,
            error_bound,
            ..
        }) => {
            println!(
                "   ✓ Caught IntegrationNonConvergence: estimate = {:.6}, error bound = {:.3e}",
                estimate, error_bound
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 6: Valid configuration should work
    println!("\n6. Testing valid configuration...");

    match heston_cf_price(&heston, &PricingConfig::default()) {
        Ok(estimate) => println!(
            "   ✓ Success: Price = {:.6}, Error bound = {:.3e}",
            estimate.price, estimate.error_bound
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
