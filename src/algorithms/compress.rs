//! Removal of temporally and collinearly redundant samples.
//!
//! ## Purpose
//!
//! This module shrinks a series to the smallest piecewise-linear
//! representation that is equivalent to the input within the configured
//! tolerances: near-duplicate samples and samples lying on the line through
//! their neighbors are dropped in place.
//!
//! ## Design notes
//!
//! * **Last-kept anchor**: Each candidate is judged against the most recent
//!   surviving sample, not its immediate predecessor, so a long collinear
//!   run collapses to its two endpoints.
//! * **Lookahead**: Collinearity is measured against the candidate's
//!   successor in the original sequence. The final sample has no successor
//!   and always survives.
//! * **Degenerate spans**: When the anchor and the successor share one time,
//!   the candidate between them carries no information and is dropped.
//! * **Idempotent**: Compressing an already compressed series removes
//!   nothing.
//!
//! ## Invariants
//!
//! * The first and last samples always survive.
//! * Surviving samples keep their original order and coordinates.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;
use crate::primitives::series::Series;

// ============================================================================
// Compression
// ============================================================================

/// Drop redundant samples from `series` in place.
///
/// A candidate is dropped when it nearly duplicates the last kept sample in
/// both coordinates, or when it lies within `value_tolerance` of the line
/// from the last kept sample to the candidate's successor. Returns the
/// number of samples removed.
pub fn compress<T: Float, V: Float>(
    series: &mut Series<T, V>,
    opt: &Options<T, V>,
) -> Result<usize, TraceError> {
    series.check()?;
    if series.len() < 2 {
        return Ok(0);
    }

    let width = opt.coincidence_width();
    let vtol = opt.value_tolerance;

    let pts = series.points_vec_mut();
    let total = pts.len();
    let mut kept = 1;

    for curr_idx in 1..total {
        let curr = pts[curr_idx];
        let prev = pts[kept - 1];

        // Near-duplicate of the last kept sample.
        if (prev.t() - curr.t()).abs() < width && (prev.v() - curr.v()).abs() < vtol {
            continue;
        }

        if curr_idx + 1 < total {
            let next = pts[curr_idx + 1];
            let span = next.t() - prev.t();
            if span == T::zero() {
                // The whole span sits at one time; the anchors suffice.
                continue;
            }
            let ratio = V::from((curr.t() - prev.t()) / span).unwrap();
            let lin = prev.v() + (next.v() - prev.v()) * ratio;
            if (curr.v() - lin).abs() < vtol {
                continue;
            }
        }

        pts[kept] = curr;
        kept += 1;
    }

    pts.truncate(kept);
    Ok(total - kept)
}
