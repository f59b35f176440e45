//! Tolerance-window point location with multi-value aggregation.
//!
//! ## Purpose
//!
//! This module answers the primitive query every higher-level operation is
//! built on: which samples represent the series at time `t`? Samples inside
//! the tolerance window around `t` are collected; an empty window falls back
//! to interpolation; a crowded window is aggregated per the configured
//! multi-value policy.
//!
//! ## Design notes
//!
//! * **Half-open window**: The window is `[t - tol, t + tol)`. Closing it on
//!   the left and opening it on the right keeps a grid-aligned sample from
//!   being counted by two adjacent queries.
//! * **Cursor threading**: Bracket searches start at the caller's cursor and
//!   leave it at the left bracket, so a sweep of non-decreasing query times
//!   pays one O(log N) search and amortizes to O(1) per query afterwards.
//! * **Cluster signature**: The result is always a series. The `All` policy
//!   returns the collected cluster unchanged; the collapsing policies return
//!   a single synthetic sample stamped with the query time.
//!
//! ## Key concepts
//!
//! * **Locate**: binary bracket searches for `t >= time - tol` and
//!   `t > time + tol` over the suffix starting at the cursor.
//! * **Fallback**: an empty collection interpolates at the left bracket.
//! * **Aggregation**: `Min`, `Max`, and `Avg` collapse clusters of two or
//!   more samples; single samples are returned verbatim.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_at;
use crate::primitives::cursor::Cursor;
use crate::primitives::errors::TraceError;
use crate::primitives::options::{MultiValue, Options};
use crate::primitives::series::Series;

// ============================================================================
// Locator
// ============================================================================

/// Collect the samples that represent `series` at `time`.
///
/// Returns an empty series for an empty input and the sole sample verbatim
/// for a single-sample input. Otherwise the tolerance window around `time`
/// is collected, falling back to interpolation when it is empty and applying
/// `opt.multi_value` when it holds two or more samples. `cursor` is advanced
/// to the left bracket for the caller's next query.
pub fn get_time_points<T: Float, V: Float>(
    series: &Series<T, V>,
    time: T,
    opt: &Options<T, V>,
    cursor: &mut Cursor,
) -> Result<Series<T, V>, TraceError> {
    series.check()?;

    let pts = series.points();
    if pts.is_empty() {
        return Ok(Series::new());
    }
    if pts.len() == 1 {
        let mut out = Series::with_capacity(1);
        out.push(pts[0].t(), pts[0].v());
        return Ok(out);
    }

    let lo = time - opt.time_tolerance;
    let hi = time + opt.time_tolerance;

    let start = cursor.start_index(pts.len());
    let left = start + pts[start..].partition_point(|p| p.t() < lo);
    let right = start + pts[start..].partition_point(|p| p.t() <= hi);
    cursor.set(left);

    let mut cluster = Series::new();
    for p in &pts[left..right] {
        if p.t() >= lo && p.t() < hi {
            cluster.push(p.t(), p.v());
        }
    }

    if cluster.is_empty() {
        let v = interpolate_at(series, left, time)?;
        let mut out = Series::with_capacity(1);
        out.push(time, v);
        return Ok(out);
    }

    if cluster.len() >= 2 {
        let collapsed = match opt.multi_value {
            MultiValue::All => return Ok(cluster),
            MultiValue::Max => cluster
                .iter()
                .map(|p| p.v())
                .fold(V::neg_infinity(), V::max),
            MultiValue::Min => cluster.iter().map(|p| p.v()).fold(V::infinity(), V::min),
            MultiValue::Avg => {
                let sum = cluster.iter().map(|p| p.v()).fold(V::zero(), |a, b| a + b);
                sum / V::from(cluster.len()).unwrap()
            }
        };
        let mut out = Series::with_capacity(1);
        out.push(time, collapsed);
        return Ok(out);
    }

    Ok(cluster)
}
