//! Incremental comparison statistics for pairs of series.
//!
//! ## Purpose
//!
//! This module accumulates per-sample difference statistics between two
//! series: count, sum, sum of squares, mean, the extreme weighted
//! differences with the pairs that produced them, and the maximum absolute
//! cumulative deviation (a Kolmogorov-Smirnov-style score over raw
//! differences rather than distribution functions).
//!
//! ## Design notes
//!
//! * **State machine**: `Empty` until the first aligned pair arrives,
//!   `Accumulating` while updates run, `Finished` once `finish` freezes the
//!   mean. `finish` is idempotent; updating a finished result is a logic
//!   error and is ignored outside debug builds.
//! * **Weighted extremes**: Extremes are ranked by the scaled magnitude
//!   `|a - b| / (rtol * max(|a|, |b|) + atol)`, which makes "largest
//!   deviation" meaningful across traces whose amplitudes differ by orders
//!   of magnitude.
//! * **Cluster zipping**: Each union time contributes the elementwise pairs
//!   of both clusters, stopping at the shorter cluster so no sample is
//!   invented.
//!
//! ## Invariants
//!
//! * `max` and `min` are both `None` exactly when `count == 0`.
//! * `ks_diff` is non-negative and non-decreasing over updates.
//! * Swapping the two inputs leaves `max.wd()`, `min.wd()`, and `ks_test()`
//!   unchanged.

// External dependencies
use core::fmt::{Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::locator::get_time_points;
use crate::algorithms::union::union_times;
use crate::primitives::cursor::Cursor;
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;
use crate::primitives::series::Series;

// ============================================================================
// Weighted Difference
// ============================================================================

/// The scaled residual `(a - b) / (rtol * max(|a|, |b|) + atol)`.
///
/// With the default `atol = 1, rtol = 0` this is the raw difference; with
/// `rtol > 0` it becomes insensitive to the absolute magnitude of the inputs.
#[inline]
pub fn weighted_difference<T: Float, V: Float>(a: V, b: V, opt: &Options<T, V>) -> V {
    (a - b) / (opt.rtol * a.abs().max(b.abs()) + opt.atol)
}

// ============================================================================
// Extremes
// ============================================================================

/// One extreme aligned pair: where it happened and what produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme<T, V> {
    t: T,
    wd: V,
    v1: V,
    v2: V,
}

impl<T: Copy, V: Copy> Extreme<T, V> {
    /// Time of the pair (taken from the first series' sample).
    pub fn t(&self) -> T {
        self.t
    }

    /// Absolute weighted difference of the pair.
    pub fn wd(&self) -> V {
        self.wd
    }

    /// Value from the first series.
    pub fn v1(&self) -> V {
        self.v1
    }

    /// Value from the second series.
    pub fn v2(&self) -> V {
        self.v2
    }
}

// ============================================================================
// Compare Result
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    Accumulating,
    Finished,
}

/// Running aggregate of per-sample differences between two series.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareResult<T, V> {
    count: usize,
    sum: V,
    sq_sum: V,
    avg: V,
    max: Option<Extreme<T, V>>,
    min: Option<Extreme<T, V>>,
    ks_diff_sum: V,
    ks_diff: V,
    state: State,
}

impl<T: Float, V: Float> Default for CompareResult<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, V: Float> CompareResult<T, V> {
    /// A fresh, empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: V::zero(),
            sq_sum: V::zero(),
            avg: V::zero(),
            max: None,
            min: None,
            ks_diff_sum: V::zero(),
            ks_diff: V::zero(),
            state: State::Empty,
        }
    }

    // ========================================================================
    // Accumulation
    // ========================================================================

    /// Fold the aligned pairs of two same-time clusters into the aggregate.
    ///
    /// Clusters are zipped elementwise and the walk stops at the shorter
    /// one. The first pair ever seen seeds both extremes. Must not be called
    /// after [`finish`](Self::finish); such calls are ignored.
    pub fn update(&mut self, s1: &Series<T, V>, s2: &Series<T, V>, opt: &Options<T, V>) {
        debug_assert!(
            self.state != State::Finished,
            "update on a finished CompareResult"
        );
        if self.state == State::Finished {
            return;
        }

        for (p1, p2) in s1.iter().zip(s2.iter()) {
            let d = p1.v() - p2.v();
            let awd = weighted_difference(p1.v(), p2.v(), opt).abs();
            let extreme = Extreme {
                t: p1.t(),
                wd: awd,
                v1: p1.v(),
                v2: p2.v(),
            };

            match self.state {
                State::Empty => {
                    self.max = Some(extreme);
                    self.min = Some(extreme);
                    self.state = State::Accumulating;
                }
                State::Accumulating => {
                    if self.max.is_some_and(|m| awd > m.wd) {
                        self.max = Some(extreme);
                    }
                    if self.min.is_some_and(|m| awd < m.wd) {
                        self.min = Some(extreme);
                    }
                }
                State::Finished => unreachable!(),
            }

            self.ks_diff_sum = self.ks_diff_sum + d;
            self.ks_diff = self.ks_diff.max(self.ks_diff_sum.abs());

            self.sum = self.sum + d;
            self.sq_sum = self.sq_sum + d * d;
            self.count += 1;
        }
    }

    /// Finalize the mean and freeze the aggregate. Idempotent.
    pub fn finish(&mut self) -> &Self {
        if self.state != State::Finished {
            if self.count > 0 {
                self.avg = self.sum / V::from(self.count).unwrap();
            }
            self.state = State::Finished;
        }
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of aligned pairs folded in.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sum of raw differences.
    pub fn sum(&self) -> V {
        self.sum
    }

    /// Sum of squared raw differences.
    pub fn sq_sum(&self) -> V {
        self.sq_sum
    }

    /// Mean raw difference; meaningful once finished.
    pub fn avg(&self) -> V {
        self.avg
    }

    /// The pair with the largest weighted difference, if any pair was seen.
    pub fn max(&self) -> Option<&Extreme<T, V>> {
        self.max.as_ref()
    }

    /// The pair with the smallest weighted difference, if any pair was seen.
    pub fn min(&self) -> Option<&Extreme<T, V>> {
        self.min.as_ref()
    }

    /// Maximum absolute cumulative sum of raw differences.
    pub fn ks_test(&self) -> V {
        self.ks_diff
    }

    /// Whether [`finish`](Self::finish) has run.
    pub fn finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Whether the largest weighted difference stays within `tolerance`.
    ///
    /// Two series with no aligned pairs compare identical.
    pub fn identical(&self, tolerance: V) -> bool {
        self.max.map_or(true, |m| m.wd <= tolerance)
    }
}

impl<T: Float + Display, V: Float + Display> Display for CompareResult<T, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Comparison:")?;
        writeln!(f, "  Pairs:   {}", self.count)?;
        writeln!(f, "  Sum:     {}", self.sum)?;
        writeln!(f, "  Sq sum:  {}", self.sq_sum)?;
        writeln!(f, "  Mean:    {}", self.avg)?;
        writeln!(f, "  KS:      {}", self.ks_diff)?;
        if let Some(m) = &self.max {
            writeln!(f, "  Max wd:  {} at t={} ({} vs {})", m.wd, m.t, m.v1, m.v2)?;
        }
        if let Some(m) = &self.min {
            writeln!(f, "  Min wd:  {} at t={} ({} vs {})", m.wd, m.t, m.v1, m.v2)?;
        }
        Ok(())
    }
}

// ============================================================================
// Comparison Walk
// ============================================================================

/// Compare two series over their union time axis.
///
/// At each union time both series are resolved through the locator with
/// independent cursors and the resulting clusters are folded into a fresh
/// [`CompareResult`], which is finished before being returned.
pub fn compare<T: Float, V: Float>(
    a: &Series<T, V>,
    b: &Series<T, V>,
    opt: &Options<T, V>,
) -> Result<CompareResult<T, V>, TraceError> {
    let times = union_times(a, b, opt)?;

    let mut result = CompareResult::new();
    let mut ca = Cursor::unset();
    let mut cb = Cursor::unset();

    for &t in &times {
        let s1 = get_time_points(a, t, opt, &mut ca)?;
        let s2 = get_time_points(b, t, opt, &mut cb)?;
        result.update(&s1, &s2, opt);
    }

    result.finish();
    Ok(result)
}
