// src/error.rs
use std::fmt;

/// Custom error types for the heston-cf library
#[derive(Debug, Clone)]
pub enum PricingError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid pricing configuration
    InvalidConfiguration { field: String, reason: String },

    /// The characteristic function's denominator vanished (or the integrand
    /// otherwise produced a non-finite sample) at some quadrature node
    DegenerateComputation { u: f64, reason: String },

    /// Adaptive quadrature exhausted its subdivision budget with the error
    /// estimate still above tolerance
    IntegrationNonConvergence {
        estimate: f64,
        error_bound: f64,
        tolerance: f64,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PricingError::DegenerateComputation { u, reason } => {
                write!(f, "Degenerate computation at u = {}: {}", u, reason)
            }
            PricingError::IntegrationNonConvergence {
                estimate,
                error_bound,
                tolerance,
            } => {
                write!(
                    f,
                    "Quadrature did not converge: estimate = {:.10} with error bound {:.3e} > tolerance {:.3e}",
                    estimate, error_bound, tolerance
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for heston-cf operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if !(value > 0.0 && value.is_finite()) {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if !(value >= 0.0 && value.is_finite()) {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is within a range
    pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> PricingResult<()> {
        if !(value >= min && value <= max) {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: format!("must be in range [{}, {}]", min, max),
            })
        } else {
            Ok(())
        }
    }

    /// Validate correlation parameter
    pub fn validate_correlation(name: &str, rho: f64) -> PricingResult<()> {
        validate_range(name, rho, -1.0, 1.0)
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
