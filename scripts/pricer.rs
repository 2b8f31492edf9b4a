// scripts/pricer.rs
//! Interactive shell around the pricing core: prompts for the nine Heston
//! parameters, re-prompting on malformed numbers, prices once and prints the
//! result. Everything here is a thin collaborator; the pricing semantics
//! live entirely in the library.

use heston_cf::math_utils::Timer;
use heston_cf::models::heston::{Heston, HestonParams};
use heston_cf::pricing::{heston_cf_price, PricingConfig, DEFAULT_UPPER_BOUND};
use heston_cf::PricingError;
use std::io::{self, BufRead, Write};

/// Prompt until the input line parses as a number.
fn read_f64(input: &mut impl BufRead, prompt: &str) -> io::Result<f64> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before all parameters were read",
            ));
        }

        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

fn read_params(input: &mut impl BufRead) -> io::Result<HestonParams> {
    Ok(HestonParams {
        s0: read_f64(input, "Initial price of the underlying asset (e.g., 100): ")?,
        k: read_f64(input, "Strike price (e.g., 100): ")?,
        t: read_f64(input, "Time to maturity (in years) (e.g., 1): ")?,
        r: read_f64(input, "Risk-free rate (e.g., 0.05): ")?,
        v0: read_f64(input, "Initial variance (e.g., 0.04): ")?,
        theta: read_f64(input, "Long-term variance (e.g., 0.04): ")?,
        kappa: read_f64(input, "Rate of mean reversion (e.g., 2.0): ")?,
        sigma: read_f64(input, "Volatility of volatility (e.g., 0.5): ")?,
        rho: read_f64(input, "Correlation between asset price and volatility (e.g., -0.7): ")?,
    })
}

fn run() -> io::Result<()> {
    println!("Please enter the parameters for the Heston model:");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let params = read_params(&mut input)?;

    let heston = match Heston::new(params) {
        Ok(heston) => heston,
        Err(e) => {
            eprintln!("Rejected: {}", e);
            std::process::exit(1);
        }
    };

    let cfg = PricingConfig {
        upper_bound: DEFAULT_UPPER_BOUND,
        ..Default::default()
    };

    let mut timer = Timer::new();
    timer.start();
    match heston_cf_price(&heston, &cfg) {
        Ok(estimate) => {
            let elapsed = timer.elapsed_ms();
            println!(
                "The European option price using the Heston model is: {}",
                estimate.price
            );
            println!(
                "(estimated quadrature error: {:.3e}, {} evaluations, {:.2} ms)",
                estimate.error_bound, estimate.evaluations, elapsed
            );
        }
        Err(PricingError::IntegrationNonConvergence {
            estimate,
            error_bound,
            tolerance,
        }) => {
            eprintln!(
                "WARNING!: quadrature did not converge (error bound {:.3e} > tolerance {:.3e}).",
                error_bound, tolerance
            );
            eprintln!("Best available estimate: {}", estimate);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Pricing failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("I/O error: {}", e);
        std::process::exit(1);
    }
}
