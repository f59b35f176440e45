//! Piecewise-linear interpolation between bracketing samples.
//!
//! ## Purpose
//!
//! This module evaluates a series between its samples by linear
//! interpolation. It is the fallback the locator reaches for when a query
//! time has no sample inside its tolerance window, and it doubles as linear
//! extrapolation beyond either end of the series.
//!
//! ## Design notes
//!
//! * **Cursor protocol**: The caller hands over the lower-bound position of
//!   its bracket search, which lies one past the left anchor of the target
//!   bracket; the first step therefore moves one sample back.
//! * **Bracket selection**: The forward bracket `(place, place + 1)` is
//!   preferred; the backward bracket `(place - 1, place)` covers queries past
//!   the final sample.
//! * **Degenerate brackets**: A zero-width bracket (duplicated abscissa)
//!   resolves deterministically to the left value when the bracket lies
//!   beyond the query and to the right value otherwise.
//!
//! ## Invariants
//!
//! * A series with at least two samples always yields a value, for any query
//!   time; fewer than two samples is an error.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::series::Series;

// ============================================================================
// Interpolation
// ============================================================================

/// Interpolate `series` at `time`, starting from the search position `place`.
///
/// `place` is the lower-bound index produced by a bracket search for `time`,
/// so the target bracket starts one sample earlier. Fails with
/// [`TraceError::InterpolationUnderdefined`] when the series has fewer than
/// two samples.
pub fn interpolate_at<T: Float, V: Float>(
    series: &Series<T, V>,
    place: usize,
    time: T,
) -> Result<V, TraceError> {
    let pts = series.points();
    if pts.len() < 2 {
        return Err(TraceError::InterpolationUnderdefined { len: pts.len() });
    }
    debug_assert!(place <= pts.len(), "search position out of range");

    // The caller's lower bound lies strictly after the target bracket.
    let mut place = place;
    if place > 0 {
        place -= 1;
    }

    let (left, right) = if place + 1 < pts.len() {
        (pts[place], pts[place + 1])
    } else {
        (pts[place - 1], pts[place])
    };

    let width = right.t() - left.t();
    if width == T::zero() {
        // Duplicated abscissa: resolve by which side of the query it sits on.
        return Ok(if left.t() > time { left.v() } else { right.v() });
    }

    let ratio = V::from((time - left.t()) / width).unwrap();
    Ok(left.v() + (right.v() - left.v()) * ratio)
}
