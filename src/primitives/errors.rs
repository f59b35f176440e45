//! Error types for time-series operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions surfaced by series construction,
//! validation, interpolation, and CSV I/O.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (offending lengths and
//!   times) rather than bare messages.
//! * **No-std**: Supports `no_std` environments; the file-system variant is
//!   only present with the `std` feature.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Construction**: Parallel time/value inputs must have equal lengths.
//! 2. **Validation**: Series must be non-decreasing in time.
//! 3. **Interpolation**: A linear bracket needs at least two samples.
//! 4. **Configuration**: Option values must pass their sanity checks.
//! 5. **I/O**: CSV paths that cannot be opened are reported with the cause.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric payloads are widened to `f64` so the enum stays non-generic.
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself.
//! * This module does not provide recovery strategies.

#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for time-series operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceError {
    /// Parallel time and value inputs differ in length.
    SizeMismatch {
        /// Number of time coordinates provided.
        times_len: usize,
        /// Number of values provided.
        values_len: usize,
    },

    /// The series is not non-decreasing in time.
    NonMonotonic {
        /// Time of the earlier sample of the first offending pair.
        prev: f64,
        /// Time of the later sample, strictly below `prev`.
        next: f64,
    },

    /// Interpolation was requested on a series with no usable bracket.
    InterpolationUnderdefined {
        /// Number of samples in the series (fewer than two).
        len: usize,
    },

    /// A configuration value fails its sanity check.
    InvalidOption {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value, widened to `f64`.
        value: f64,
    },

    /// A CSV path could not be opened.
    #[cfg(feature = "std")]
    OpenFailed {
        /// The path that failed to open.
        path: String,
        /// The underlying I/O error, formatted.
        reason: String,
    },

    /// A CSV record could not be written.
    #[cfg(feature = "std")]
    WriteFailed {
        /// The underlying I/O error, formatted.
        reason: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TraceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::SizeMismatch {
                times_len,
                values_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {times_len} times, {values_len} values"
                )
            }
            Self::NonMonotonic { prev, next } => {
                write!(f, "Series is not monotonic: t={prev} precedes t={next}")
            }
            Self::InterpolationUnderdefined { len } => {
                write!(
                    f,
                    "Interpolation underdefined: {len} samples (need at least 2)"
                )
            }
            Self::InvalidOption { name, value } => {
                write!(f, "Invalid value for '{name}': {value}")
            }
            #[cfg(feature = "std")]
            Self::OpenFailed { path, reason } => {
                write!(f, "Cannot open '{path}': {reason}")
            }
            #[cfg(feature = "std")]
            Self::WriteFailed { reason } => {
                write!(f, "Cannot write record: {reason}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TraceError {}
