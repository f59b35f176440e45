//! High-level API for time-series operations.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points as inherent
//! methods on [`Series`], delegating to the algorithm, evaluation, and
//! engine layers, and re-exports every public type of the crate.
//!
//! ## Design notes
//!
//! * **Validated entry**: Compound operations validate the option bundle
//!   once at the surface; inner loops run unchecked.
//! * **Owned results**: Every operation returns a freshly owned series or
//!   aggregate; nothing is shared mutably between caller and callee.
//! * **Cursor in caller hands**: The locator takes the caller's cursor by
//!   mutable reference so several sweeps can run over one series at once.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::compress;
use crate::algorithms::locator;
use crate::algorithms::union;
use crate::engine::difference;
use crate::engine::resample;
use crate::engine::validator::Validator;
use crate::evaluation::compare;

// Publicly re-exported types
pub use crate::evaluation::compare::{weighted_difference, CompareResult, Extreme};
#[cfg(feature = "std")]
pub use crate::io::csv::{read_series, read_series_from, write_series, write_series_to};
pub use crate::primitives::cursor::Cursor;
pub use crate::primitives::errors::TraceError;
pub use crate::primitives::options::{MultiValue, Options, RangeFilter};
pub use crate::primitives::point::Point;
pub use crate::primitives::series::Series;

// ============================================================================
// Series Operations
// ============================================================================

impl<T: Float, V: Float> Series<T, V> {
    /// Collect the samples that represent this series at `time`.
    ///
    /// Samples inside the tolerance window `[time - tol, time + tol)` are
    /// returned as a cluster; an empty window falls back to linear
    /// interpolation; a window holding two or more samples is aggregated per
    /// `opt.multi_value`. The cursor is advanced so that a sweep of
    /// non-decreasing query times amortizes to O(1) per query.
    ///
    /// ```rust
    /// use tseries_rs::prelude::*;
    ///
    /// let series = Series::from_parts(vec![1.0, 1.0], vec![2.0, 3.0])?;
    /// let mut opt = Options::new();
    /// opt.set_multi_value(Avg);
    ///
    /// let mut cursor = Cursor::unset();
    /// let cluster = series.get_time_points(1.0, &opt, &mut cursor)?;
    /// assert_eq!(cluster.values(), vec![2.5]);
    /// # Result::<(), TraceError>::Ok(())
    /// ```
    pub fn get_time_points(
        &self,
        time: T,
        opt: &Options<T, V>,
        cursor: &mut Cursor,
    ) -> Result<Series<T, V>, TraceError> {
        locator::get_time_points(self, time, opt, cursor)
    }

    /// The ordered union of this and the other series' time axes.
    ///
    /// Times outside `opt.range` are dropped, and a time closer than
    /// `2 * time_tolerance` to the previously accepted one is merged away.
    pub fn union_times(&self, other: &Self, opt: &Options<T, V>) -> Result<Vec<T>, TraceError> {
        Validator::validate_options(opt)?;
        union::union_times(self, other, opt)
    }

    /// Drop redundant samples in place.
    ///
    /// Removes near-duplicates of the last kept sample and samples lying
    /// within `value_tolerance` of the line through their neighbors, leaving
    /// the smallest piecewise-linear representation equivalent to the input
    /// within tolerances. Returns the number of samples removed.
    ///
    /// ```rust
    /// use tseries_rs::prelude::*;
    ///
    /// let mut series = Series::from_parts(
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![0.0, 1.0, 2.0, 3.0],
    /// )?;
    /// let removed = series.compress(&Options::new())?;
    /// assert_eq!(removed, 2);
    /// assert_eq!(series.times(), vec![0.0, 3.0]);
    /// # Result::<(), TraceError>::Ok(())
    /// ```
    pub fn compress(&mut self, opt: &Options<T, V>) -> Result<usize, TraceError> {
        Validator::validate_options(opt)?;
        compress::compress(self, opt)
    }

    /// The per-time difference `self - other` over the union time axis.
    ///
    /// At each union time both series are resolved through the locator and
    /// the clusters are zipped elementwise, stopping at the shorter one. The
    /// result may hold repeated times under the `All` policy; compress it
    /// when a unique-time series is needed.
    pub fn difference(&self, other: &Self, opt: &Options<T, V>) -> Result<Self, TraceError> {
        Validator::validate_options(opt)?;
        difference::difference(self, other, opt)
    }

    /// Compare against `other`, producing finished difference statistics.
    ///
    /// ```rust
    /// use tseries_rs::prelude::*;
    ///
    /// let a = Series::from_parts(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0])?;
    /// let b = Series::from_parts(vec![0.0, 1.0, 2.0], vec![1.0, 2.5, 3.0])?;
    ///
    /// let result = a.compare(&b, &Options::new())?;
    /// assert_eq!(result.count(), 3);
    /// assert_eq!(result.ks_test(), 0.5);
    /// assert!(!result.identical(0.0));
    /// # Result::<(), TraceError>::Ok(())
    /// ```
    pub fn compare(
        &self,
        other: &Self,
        opt: &Options<T, V>,
    ) -> Result<CompareResult<T, V>, TraceError> {
        Validator::validate_options(opt)?;
        compare::compare(self, other, opt)
    }

    /// Resample onto the uniform grid `start + k * step`, up to and
    /// including `end`.
    ///
    /// Every sample of the cluster resolved at a grid time is emitted with
    /// the grid time as its coordinate.
    ///
    /// ```rust
    /// use tseries_rs::prelude::*;
    ///
    /// let series = Series::from_parts(vec![0.0, 1.0], vec![0.0, 2.0])?;
    /// let dense = series.dense_output(0.0, 1.0, 0.5, &Options::new())?;
    /// assert_eq!(dense.values(), vec![0.0, 1.0, 2.0]);
    /// # Result::<(), TraceError>::Ok(())
    /// ```
    pub fn dense_output(
        &self,
        start: T,
        end: T,
        step: T,
        opt: &Options<T, V>,
    ) -> Result<Self, TraceError> {
        Validator::validate_options(opt)?;
        resample::dense_output(self, start, end, step, opt)
    }
}

// ============================================================================
// CSV Convenience
// ============================================================================

#[cfg(feature = "std")]
impl<T: Float, V: Float> Series<T, V> {
    /// Read a series from the CSV file at `path`. See [`read_series`].
    pub fn from_csv<P: AsRef<std::path::Path>>(path: P) -> Result<Self, TraceError> {
        read_series(path)
    }

    /// Read a series from any reader. See [`read_series_from`].
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Self {
        read_series_from(reader)
    }

    /// Write this series to the CSV file at `path`. See [`write_series`].
    pub fn to_csv<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), TraceError> {
        write_series(path, self)
    }

    /// Write this series to any writer. See [`write_series_to`].
    pub fn to_csv_writer<W: std::io::Write>(&self, writer: W) -> Result<(), TraceError> {
        write_series_to(writer, self)
    }
}
