// src/quad.rs
//! Adaptive Simpson quadrature
//!
//! # Algorithm
//!
//! Classic recursive adaptive Simpson with Richardson extrapolation. For a
//! panel `[a, b]` with midpoint `m`:
//! ```text
//! S(a,b)   = (b-a)/6 * (f(a) + 4f(m) + f(b))
//! S2(a,b)  = S(a,m) + S(m,b)
//! err      = S2 - S
//! ```
//! The panel is accepted when `|err| ≤ 15·tol` (the factor 15 comes from the
//! fourth-order error expansion), and the returned value `S2 + err/15` gains
//! one extra order of accuracy. Otherwise the panel is split and the
//! tolerance halved, down to a fixed subdivision-depth budget.
//!
//! # Failure modes
//!
//! - A non-finite integrand sample aborts the integration immediately with
//!   `DegenerateComputation` carrying the offending abscissa.
//! - Exhausting the depth budget with the accumulated error estimate still
//!   above tolerance yields `IntegrationNonConvergence` carrying the best
//!   available estimate and its error bound, so the caller can decide
//!   whether to accept it.

use crate::error::{PricingError, PricingResult};

pub const DEFAULT_ABS_TOL: f64 = 1e-10;
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Integral estimate together with its diagnostic by-products
#[derive(Clone, Copy, Debug)]
pub struct QuadEstimate {
    /// Integral value
    pub value: f64,
    /// Estimated absolute error (sum of accepted panel errors)
    pub error_bound: f64,
    /// Number of integrand evaluations
    pub evaluations: usize,
}

/// Adaptive Simpson integrator over a finite interval
#[derive(Clone, Copy, Debug)]
pub struct SimpsonIntegral {
    abs_tol: f64,
    max_depth: usize,
}

impl Default for SimpsonIntegral {
    fn default() -> Self {
        SimpsonIntegral {
            abs_tol: DEFAULT_ABS_TOL,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SimpsonIntegral {
    pub fn new(abs_tol: f64, max_depth: usize) -> PricingResult<Self> {
        if !(abs_tol > 0.0 && abs_tol.is_finite()) {
            return Err(PricingError::InvalidConfiguration {
                field: "abs_tol".to_string(),
                reason: format!("must be positive and finite, got {}", abs_tol),
            });
        }
        Ok(SimpsonIntegral { abs_tol, max_depth })
    }

    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Integrate `f` over `[a, b]`.
    ///
    /// Returns the estimate with its error bound, or an error per the module
    /// docs. `a == b` short-circuits to zero.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> PricingResult<QuadEstimate>
    where
        F: Fn(f64) -> f64,
    {
        if !(a.is_finite() && b.is_finite() && a <= b) {
            return Err(PricingError::InvalidConfiguration {
                field: "interval".to_string(),
                reason: format!("bounds must be finite with a ≤ b, got [{}, {}]", a, b),
            });
        }
        if a == b {
            return Ok(QuadEstimate {
                value: 0.0,
                error_bound: 0.0,
                evaluations: 0,
            });
        }

        let mut evaluations = 0usize;
        let fa = sample(&f, a, &mut evaluations)?;
        let fb = sample(&f, b, &mut evaluations)?;
        let m = 0.5 * (a + b);
        let fm = sample(&f, m, &mut evaluations)?;
        let whole = simpson(a, fa, m, fm, b, fb);

        let panel = self.refine(
            &f,
            a,
            fa,
            m,
            fm,
            b,
            fb,
            whole,
            self.abs_tol,
            self.max_depth,
            &mut evaluations,
        )?;

        if !panel.converged {
            return Err(PricingError::IntegrationNonConvergence {
                estimate: panel.value,
                error_bound: panel.error_bound,
                tolerance: self.abs_tol,
            });
        }

        Ok(QuadEstimate {
            value: panel.value,
            error_bound: panel.error_bound,
            evaluations,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn refine<F>(
        &self,
        f: &F,
        a: f64,
        fa: f64,
        m: f64,
        fm: f64,
        b: f64,
        fb: f64,
        whole: f64,
        tol: f64,
        depth: usize,
        evaluations: &mut usize,
    ) -> PricingResult<Panel>
    where
        F: Fn(f64) -> f64,
    {
        let lm = 0.5 * (a + m);
        let rm = 0.5 * (m + b);
        let flm = sample(f, lm, evaluations)?;
        let frm = sample(f, rm, evaluations)?;

        let left = simpson(a, fa, lm, flm, m, fm);
        let right = simpson(m, fm, rm, frm, b, fb);
        let err = left + right - whole;

        if depth == 0 || err.abs() <= 15.0 * tol {
            return Ok(Panel {
                value: left + right + err / 15.0,
                error_bound: err.abs() / 15.0,
                converged: err.abs() <= 15.0 * tol,
            });
        }

        let lp = self.refine(f, a, fa, lm, flm, m, fm, left, 0.5 * tol, depth - 1, evaluations)?;
        let rp = self.refine(f, m, fm, rm, frm, b, fb, right, 0.5 * tol, depth - 1, evaluations)?;

        Ok(Panel {
            value: lp.value + rp.value,
            error_bound: lp.error_bound + rp.error_bound,
            converged: lp.converged && rp.converged,
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Panel {
    value: f64,
    error_bound: f64,
    converged: bool,
}

fn simpson(a: f64, fa: f64, m: f64, fm: f64, b: f64, fb: f64) -> f64 {
    debug_assert!(a < m && m < b);
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn sample<F>(f: &F, u: f64, evaluations: &mut usize) -> PricingResult<f64>
where
    F: Fn(f64) -> f64,
{
    *evaluations += 1;
    let y = f(u);
    if !y.is_finite() {
        return Err(PricingError::DegenerateComputation {
            u,
            reason: format!("integrand sample is not finite ({})", y),
        });
    }
    Ok(y)
}
