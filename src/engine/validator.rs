//! Configuration validation.
//!
//! ## Purpose
//!
//! This module provides fail-fast sanity checks for the configuration values
//! the compound operations consume. Checks are ordered from cheap to
//! expensive and stop at the first violation.
//!
//! ## Design notes
//!
//! * **Static methods**: All checks are associated functions returning
//!   `Result<(), TraceError>`; there is no state.
//! * **Scope**: Validation covers configuration only. Data validation
//!   (monotonicity) lives on the series itself, where its memo is.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for configuration values.
pub struct Validator;

impl Validator {
    /// Validate the shared option bundle.
    ///
    /// Tolerances must be finite and non-negative; the weighted-difference
    /// terms must be finite, non-negative, and not both zero (the pair forms
    /// a denominator).
    pub fn validate_options<T: Float, V: Float>(opt: &Options<T, V>) -> Result<(), TraceError> {
        Self::finite_non_negative(opt.time_tolerance, "time_tolerance")?;
        Self::finite_non_negative(opt.value_tolerance, "value_tolerance")?;
        Self::finite_non_negative(opt.atol, "atol")?;
        Self::finite_non_negative(opt.rtol, "rtol")?;
        if opt.atol == V::zero() && opt.rtol == V::zero() {
            return Err(TraceError::InvalidOption {
                name: "atol",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Validate a resampling step: finite and strictly positive.
    pub fn validate_step<T: Float>(step: T) -> Result<(), TraceError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(TraceError::InvalidOption {
                name: "step",
                value: step.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    fn finite_non_negative<N: Float>(value: N, name: &'static str) -> Result<(), TraceError> {
        if !value.is_finite() || value < N::zero() {
            return Err(TraceError::InvalidOption {
                name,
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}
