//! Merge of two time axes deduplicated by tolerance.
//!
//! ## Purpose
//!
//! This module builds the union time axis that comparison and difference
//! walk: every time that appears in either series, in increasing order,
//! clipped to the configured range and with near-coincident entries
//! collapsed.
//!
//! ## Design notes
//!
//! * **Two-cursor merge**: The classic walk advancing the smaller head, then
//!   draining the longer series, O(|A| + |B|).
//! * **Coincidence width**: A candidate closer than `2 * time_tolerance` to
//!   the previously accepted time is dropped, matching the width of the
//!   locator's query window so one union entry maps to one window.
//! * **Range clipping**: The half-open filter `begin <= t < end` is applied
//!   before deduplication.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;
use crate::primitives::series::Series;

// ============================================================================
// Union
// ============================================================================

/// The ordered union of both time axes, range-clipped and deduplicated.
pub fn union_times<T: Float, V: Float>(
    a: &Series<T, V>,
    b: &Series<T, V>,
    opt: &Options<T, V>,
) -> Result<Vec<T>, TraceError> {
    a.check()?;
    b.check()?;

    let pa = a.points();
    let pb = b.points();
    let width = opt.coincidence_width();

    let mut out = Vec::with_capacity(pa.len() + pb.len());
    let (mut i, mut j) = (0, 0);

    loop {
        let t = match (pa.get(i), pb.get(j)) {
            (Some(x), Some(y)) => {
                if x.t() <= y.t() {
                    i += 1;
                    x.t()
                } else {
                    j += 1;
                    y.t()
                }
            }
            (Some(x), None) => {
                i += 1;
                x.t()
            }
            (None, Some(y)) => {
                j += 1;
                y.t()
            }
            (None, None) => break,
        };

        if !opt.range.contains(t) {
            continue;
        }
        if let Some(&last) = out.last() {
            if t - last < width {
                continue;
            }
        }
        out.push(t);
    }

    Ok(out)
}
