//! Monotonic sample container with a memoized validity check.
//!
//! ## Purpose
//!
//! This module defines `Series`, the ordered sequence of samples every
//! algorithm in the crate consumes and produces.
//!
//! ## Design notes
//!
//! * **Non-strict ordering**: Times must be non-decreasing; equal adjacent
//!   times are allowed and denote a multi-value point.
//! * **Memoized validation**: `check` walks the series once and records
//!   success in an atomic flag, so repeated algorithmic entry points skip the
//!   walk. Every mutating method clears the flag.
//! * **Sharing**: The memo uses release/acquire atomics, which keeps a
//!   validated series safely shareable across threads for reading. Mutation
//!   still requires exclusive access, as usual.
//!
//! ## Invariants
//!
//! * `checked` is true only if the stored points were non-decreasing in time
//!   when last inspected; any `&mut self` method resets it.
//!
//! ## Non-goals
//!
//! * This module does not sort; out-of-order input is rejected, not repaired.
//! * This module does not deduplicate times (`compress` does, on request).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::sync::atomic::{AtomicBool, Ordering};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::point::Point;

// ============================================================================
// Series
// ============================================================================

/// An ordered sequence of `(t, v)` samples, non-decreasing in `t`.
#[derive(Debug, Default)]
pub struct Series<T, V = T> {
    points: Vec<Point<T, V>>,
    checked: AtomicBool,
}

impl<T: Clone, V: Clone> Clone for Series<T, V> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            checked: AtomicBool::new(self.checked.load(Ordering::Acquire)),
        }
    }
}

impl<T: PartialEq, V: PartialEq> PartialEq for Series<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Float, V: Float> Series<T, V> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            checked: AtomicBool::new(false),
        }
    }

    /// Create an empty series with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            checked: AtomicBool::new(false),
        }
    }

    /// Create a series from parallel time and value sequences.
    ///
    /// Fails with [`TraceError::SizeMismatch`] when the lengths differ.
    pub fn from_parts(times: Vec<T>, values: Vec<V>) -> Result<Self, TraceError> {
        if times.len() != values.len() {
            return Err(TraceError::SizeMismatch {
                times_len: times.len(),
                values_len: values.len(),
            });
        }
        let points = times
            .into_iter()
            .zip(values)
            .map(|(t, v)| Point::new(t, v))
            .collect();
        Ok(Self {
            points,
            checked: AtomicBool::new(false),
        })
    }

    /// Create a series from borrowed parallel slices.
    ///
    /// Fails with [`TraceError::SizeMismatch`] when the lengths differ.
    pub fn from_slices(times: &[T], values: &[V]) -> Result<Self, TraceError> {
        if times.len() != values.len() {
            return Err(TraceError::SizeMismatch {
                times_len: times.len(),
                values_len: values.len(),
            });
        }
        let points = times
            .iter()
            .zip(values)
            .map(|(&t, &v)| Point::new(t, v))
            .collect();
        Ok(Self {
            points,
            checked: AtomicBool::new(false),
        })
    }

    /// Create a series from a tabular source of `(t, v)` rows.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
    {
        Self {
            points: pairs
                .into_iter()
                .map(|(t, v)| Point::new(t, v))
                .collect(),
            checked: AtomicBool::new(false),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The samples as a slice.
    #[inline]
    pub fn points(&self) -> &[Point<T, V>] {
        &self.points
    }

    /// Iterate over the samples.
    pub fn iter(&self) -> core::slice::Iter<'_, Point<T, V>> {
        self.points.iter()
    }

    /// The first sample, if any.
    #[inline]
    pub fn first(&self) -> Option<&Point<T, V>> {
        self.points.first()
    }

    /// The last sample, if any.
    #[inline]
    pub fn last(&self) -> Option<&Point<T, V>> {
        self.points.last()
    }

    /// The sample at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point<T, V>> {
        self.points.get(index)
    }

    /// The time coordinates, collected into a vector.
    pub fn times(&self) -> Vec<T> {
        self.points.iter().map(Point::t).collect()
    }

    /// The values, collected into a vector.
    pub fn values(&self) -> Vec<V> {
        self.points.iter().map(Point::v).collect()
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Append a sample.
    pub fn push(&mut self, t: T, v: V) {
        self.points.push(Point::new(t, v));
        self.invalidate();
    }

    /// Exchange contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.points, &mut other.points);
        self.invalidate();
        other.invalidate();
    }

    /// Remove every sample.
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Mutable access to the underlying samples. Clears the validity memo.
    #[inline]
    pub(crate) fn points_vec_mut(&mut self) -> &mut Vec<Point<T, V>> {
        self.invalidate();
        &mut self.points
    }

    #[inline]
    fn invalidate(&mut self) {
        self.checked.store(false, Ordering::Release);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Find the first adjacent pair whose times decrease.
    ///
    /// Returns `None` for monotonic series, including the empty series. A
    /// returned pair `(prev, next)` satisfies `prev.t() > next.t()`.
    pub fn is_monotonic(&self) -> Option<(Point<T, V>, Point<T, V>)> {
        self.points
            .windows(2)
            .find(|w| w[0].t() > w[1].t())
            .map(|w| (w[0], w[1]))
    }

    /// Validate monotonicity, memoizing success.
    ///
    /// The walk is skipped when a previous call already succeeded and no
    /// mutation happened since. Fails with [`TraceError::NonMonotonic`]
    /// carrying the first offending pair of times.
    pub fn check(&self) -> Result<(), TraceError> {
        if self.checked.load(Ordering::Acquire) {
            return Ok(());
        }
        if let Some((prev, next)) = self.is_monotonic() {
            return Err(TraceError::NonMonotonic {
                prev: prev.t().to_f64().unwrap_or(f64::NAN),
                next: next.t().to_f64().unwrap_or(f64::NAN),
            });
        }
        self.checked.store(true, Ordering::Release);
        Ok(())
    }
}

impl<'a, T, V> IntoIterator for &'a Series<T, V> {
    type Item = &'a Point<T, V>;
    type IntoIter = core::slice::Iter<'a, Point<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
