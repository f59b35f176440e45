//! Shared configuration consumed by every algorithm.
//!
//! ## Purpose
//!
//! This module defines `Options`, the single configuration bundle passed to
//! the locator, union, compression, difference, comparison, and resampling
//! operations, together with its two policy types (`MultiValue`,
//! `RangeFilter`).
//!
//! ## Design notes
//!
//! * **Plain struct, not a builder**: All fields are public with documented
//!   defaults; `set_*` methods mutate in place and chain for convenience.
//! * **One bundle everywhere**: The same tolerances drive point location,
//!   union deduplication, and compression, which keeps the operations
//!   mutually consistent across edge cases.
//!
//! ## Key concepts
//!
//! * **Time tolerance**: Half-width of the window that decides "same time".
//! * **Value tolerance**: Threshold under which two values are considered
//!   equal by compression.
//! * **Weighted difference scaling**: `atol`/`rtol` scale comparison
//!   residuals as `(a - b) / (rtol * max(|a|, |b|) + atol)`.
//! * **Range**: Half-open time filter `begin <= t < end` applied when merging
//!   time axes.
//! * **Multi-value policy**: What to do when several samples share a query
//!   window.

// External dependencies
use num_traits::Float;

// ============================================================================
// Multi-Value Policy
// ============================================================================

/// Policy applied when several samples fall inside one tolerance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiValue {
    /// Return every sample in the window unchanged.
    #[default]
    All,

    /// Collapse the window to its maximum value.
    Max,

    /// Collapse the window to its minimum value.
    Min,

    /// Collapse the window to the arithmetic mean of its values.
    Avg,
}

// ============================================================================
// Range Filter
// ============================================================================

/// Half-open time filter `begin <= t < end`; unset bounds are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeFilter<T> {
    /// Inclusive lower bound, if any.
    pub begin: Option<T>,
    /// Exclusive upper bound, if any.
    pub end: Option<T>,
}

impl<T: Float> RangeFilter<T> {
    /// Whether `t` passes the filter.
    #[inline]
    pub fn contains(&self, t: T) -> bool {
        self.begin.is_none_or(|b| t >= b) && self.end.is_none_or(|e| t < e)
    }

    /// Remove both bounds.
    #[inline]
    pub fn clear(&mut self) {
        self.begin = None;
        self.end = None;
    }
}

// ============================================================================
// Options
// ============================================================================

/// Configuration bundle shared by every algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options<T, V = T> {
    /// Half-width of the tolerance window around a query time
    /// (default `1e-8`).
    pub time_tolerance: T,

    /// Threshold under which two values compare equal during compression
    /// (default `1e-8`).
    pub value_tolerance: V,

    /// Absolute term of the weighted-difference denominator (default `1.0`).
    pub atol: V,

    /// Relative term of the weighted-difference denominator (default `0.0`).
    pub rtol: V,

    /// Half-open time filter applied to merged time axes (default unbounded).
    pub range: RangeFilter<T>,

    /// Policy for windows holding several samples (default [`MultiValue::All`]).
    pub multi_value: MultiValue,
}

impl<T: Float, V: Float> Default for Options<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, V: Float> Options<T, V> {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self {
            time_tolerance: T::from(1e-8).unwrap(),
            value_tolerance: V::from(1e-8).unwrap(),
            atol: V::one(),
            rtol: V::zero(),
            range: RangeFilter { begin: None, end: None },
            multi_value: MultiValue::All,
        }
    }

    /// Set the time tolerance.
    pub fn set_time_tolerance(&mut self, tolerance: T) -> &mut Self {
        self.time_tolerance = tolerance;
        self
    }

    /// Set the value tolerance.
    pub fn set_value_tolerance(&mut self, tolerance: V) -> &mut Self {
        self.value_tolerance = tolerance;
        self
    }

    /// Set the absolute weighted-difference term.
    pub fn set_atol(&mut self, atol: V) -> &mut Self {
        self.atol = atol;
        self
    }

    /// Set the relative weighted-difference term.
    pub fn set_rtol(&mut self, rtol: V) -> &mut Self {
        self.rtol = rtol;
        self
    }

    /// Set the half-open time range `begin <= t < end`.
    pub fn set_range(&mut self, begin: T, end: T) -> &mut Self {
        self.range = RangeFilter {
            begin: Some(begin),
            end: Some(end),
        };
        self
    }

    /// Remove the time range filter.
    pub fn clear_range(&mut self) -> &mut Self {
        self.range.clear();
        self
    }

    /// Set the multi-value policy.
    pub fn set_multi_value(&mut self, policy: MultiValue) -> &mut Self {
        self.multi_value = policy;
        self
    }

    /// The full width of the "same time" window, `2 * time_tolerance`.
    ///
    /// Used both by union deduplication and by compression so the two agree
    /// on which samples coincide.
    #[inline]
    pub fn coincidence_width(&self) -> T {
        self.time_tolerance + self.time_tolerance
    }
}
