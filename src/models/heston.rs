// src/models/heston.rs
//! Heston Stochastic Volatility Model — Characteristic Function
//!
//! # Mathematical Framework
//!
//! The Heston model describes asset price evolution with stochastic volatility:
//! ```text
//! dS_t = r S_t dt + √V_t S_t dW_t^(1)
//! dV_t = κ(θ - V_t) dt + σ√V_t dW_t^(2)
//! ```
//!
//! Where:
//! - S_t: Asset price
//! - V_t: Instantaneous variance (volatility squared)
//! - κ: Mean reversion speed for variance
//! - θ: Long-term variance level
//! - σ: Volatility of variance (vol-of-vol)
//! - ρ: Correlation between dW_t^(1) and dW_t^(2)
//!
//! # Characteristic Function
//!
//! Transform pricing works on the characteristic function of the log-price
//! distribution rather than on simulated paths. The function implemented here
//! is the simplified form
//! ```text
//! φ(u) = exp(iu·ln(S0/K) + r·iu·T - u²v0·T/2) · exp(κT(θ - v0)) / (λ² + (u - ρσ)²)
//! λ = √(σ²(u² + iu))      (principal complex square root)
//! ```
//!
//! This is deliberately NOT the textbook Heston closed form: it omits the
//! complex-log branch-correction term found in the literature. The simplified
//! form is kept as-is for compatibility with the historical implementation;
//! see DESIGN.md for the fidelity discussion.
//!
//! # Feller Condition
//!
//! For variance to remain positive in the underlying SDE, the Feller
//! condition must hold:
//! ```text
//! 2κθ > σ²
//! ```
//!
//! A violation does not invalidate the characteristic function, so it is
//! reported as a warning rather than an error.

use crate::error::{validation::*, PricingError, PricingResult};
use num_complex::Complex64;

#[derive(Clone, Copy, Debug)]
pub struct HestonParams {
    pub s0: f64,    // Spot price
    pub k: f64,     // Strike price
    pub t: f64,     // Time to maturity (years)
    pub r: f64,     // Risk-free rate
    pub v0: f64,    // Initial variance
    pub theta: f64, // Long-run mean variance
    pub kappa: f64, // Mean reversion speed
    pub sigma: f64, // Volatility of variance (vol-of-vol)
    pub rho: f64,   // Correlation between asset and variance
}

pub struct Heston {
    pub params: HestonParams,
}

impl Heston {
    pub fn new(params: HestonParams) -> PricingResult<Self> {
        Self::new_quiet(params, false)
    }

    pub fn new_quiet(params: HestonParams, suppress_warnings: bool) -> PricingResult<Self> {
        Self::validate_params(&params)?;

        // Check Feller condition
        let feller = 2.0 * params.kappa * params.theta;
        if feller <= params.sigma * params.sigma && !suppress_warnings {
            eprintln!("WARNING!: Feller condition violated (2κθ ≤ σ²). Variance may hit zero.");
        }

        Ok(Heston { params })
    }

    /// Validate Heston parameters
    fn validate_params(params: &HestonParams) -> PricingResult<()> {
        validate_positive("s0", params.s0)?;
        validate_positive("k", params.k)?;
        validate_positive("t", params.t)?;
        validate_finite("r", params.r)?;
        validate_non_negative("v0", params.v0)?;
        validate_non_negative("theta", params.theta)?;
        validate_positive("kappa", params.kappa)?;
        validate_non_negative("sigma", params.sigma)?;
        validate_correlation("rho", params.rho)?;

        // Business-logic bound: an extreme vol-of-vol collapses the
        // characteristic function to numerical noise, so the quadrature would
        // "converge" to a meaningless near-zero value. Reject up front.
        if params.sigma > 5.0 {
            return Err(PricingError::InvalidParameters {
                parameter: "sigma".to_string(),
                value: params.sigma,
                constraint: "extremely high vol-of-vol (>5) may cause numerical issues".to_string(),
            });
        }

        Ok(())
    }

    /// Log-moneyness `ln(S0/K)`, shared by the characteristic function and
    /// the pricing integrand
    pub fn log_moneyness(&self) -> f64 {
        (self.params.s0 / self.params.k).ln()
    }

    /// Evaluate the characteristic function at a real argument `u`.
    ///
    /// Pure function of `(params, u)`, no internal state. `λ` uses
    /// `Complex64::sqrt`, the principal branch. For pathological inputs the
    /// denominator `λ² + (u - ρσ)²` can be exactly zero (e.g. `u = ρσ` with
    /// `σ = 0`, and in particular `u = 0` whenever `ρσ = 0`); the division
    /// then yields a non-finite value which the pricing integrand reports as
    /// `DegenerateComputation`.
    pub fn characteristic_function(&self, u: f64) -> Complex64 {
        let p = &self.params;
        let i = Complex64::new(0.0, 1.0);

        let lambda = (Complex64::new(u * u, u) * (p.sigma * p.sigma)).sqrt();
        let d1 = i * u * self.log_moneyness() + p.r * i * u * p.t;
        let d2 = Complex64::new(-0.5 * u * u * p.v0 * p.t, 0.0);
        let denominator = lambda * lambda + (u - p.rho * p.sigma) * (u - p.rho * p.sigma);

        (d1 + d2).exp() * (p.kappa * p.t * (p.theta - p.v0)).exp() / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn assert_complex_close(z: Complex64, re: f64, im: f64, tol: f64) {
        assert!(
            (z.re - re).abs() < tol && (z.im - im).abs() < tol,
            "got {} + {}i, expected {} + {}i",
            z.re,
            z.im,
            re,
            im
        );
    }

    #[test]
    fn test_cf_reference_values() {
        let heston = Heston::new_quiet(reference_params(), true).expect("Valid parameters");

        // At u = 0 everything collapses to 1/(ρσ)² = 1/0.1225
        assert_complex_close(
            heston.characteristic_function(0.0),
            8.163265306122451,
            0.0,
            1e-12,
        );
        assert_complex_close(
            heston.characteristic_function(0.5),
            1.2407213895552187,
            -0.16588210549292154,
            1e-10,
        );
        assert_complex_close(
            heston.characteristic_function(1.0),
            0.4683993812356191,
            -0.032863850372406335,
            1e-10,
        );
        assert_complex_close(
            heston.characteristic_function(2.0),
            0.14107504415211033,
            0.0033147315824085216,
            1e-10,
        );
    }

    #[test]
    fn test_cf_off_reference_params() {
        let params = HestonParams {
            s0: 120.0,
            k: 100.0,
            t: 0.75,
            r: 0.02,
            v0: 0.09,
            theta: 0.06,
            kappa: 1.5,
            sigma: 0.4,
            rho: -0.6,
        };
        let heston = Heston::new_quiet(params, true).expect("Valid parameters");
        assert_complex_close(
            heston.characteristic_function(1.0),
            0.5452627663098786,
            0.056553555279055,
            1e-10,
        );
    }

    #[test]
    fn test_cf_is_pure() {
        let heston = Heston::new_quiet(reference_params(), true).expect("Valid parameters");
        let a = heston.characteristic_function(1.3);
        let b = heston.characteristic_function(1.3);
        assert_eq!(a, b, "repeated evaluation must be bit-identical");
    }

    #[test]
    fn test_cf_degenerate_denominator() {
        // ρσ = 0 makes the denominator vanish at u = 0
        let params = HestonParams {
            rho: 0.0,
            ..reference_params()
        };
        let heston = Heston::new_quiet(params, true).expect("Valid parameters");
        assert!(!heston.characteristic_function(0.0).is_finite());
    }

    #[test]
    fn test_feller_violation_is_not_an_error() {
        // Reference scenario violates Feller (2·2·0.04 = 0.16 ≤ 0.25); it
        // must still construct, warning aside.
        let _heston = Heston::new_quiet(reference_params(), true)
            .expect("Should create despite Feller violation");
    }

    #[test]
    fn test_invalid_parameters() {
        // Zero strike
        let bad = HestonParams {
            k: 0.0,
            ..reference_params()
        };
        assert!(Heston::new(bad).is_err());

        // Negative spot
        let bad = HestonParams {
            s0: -100.0,
            ..reference_params()
        };
        assert!(Heston::new(bad).is_err());

        // Correlation out of range
        let bad = HestonParams {
            rho: 1.5,
            ..reference_params()
        };
        assert!(Heston::new(bad).is_err());

        // Negative initial variance
        let bad = HestonParams {
            v0: -0.04,
            ..reference_params()
        };
        assert!(Heston::new(bad).is_err());

        // Zero mean-reversion speed
        let bad = HestonParams {
            kappa: 0.0,
            ..reference_params()
        };
        assert!(Heston::new(bad).is_err());

        // Extreme vol-of-vol
        let bad = HestonParams {
            sigma: 1e6,
            ..reference_params()
        };
        match Heston::new(bad) {
            Err(PricingError::InvalidParameters { parameter, .. }) => {
                assert_eq!(parameter, "sigma")
            }
            other => panic!("expected InvalidParameters for sigma, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_negative_rate_is_valid() {
        let params = HestonParams {
            r: -0.01,
            ..reference_params()
        };
        assert!(Heston::new_quiet(params, true).is_ok());
    }
}
