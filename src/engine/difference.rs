//! Per-time subtraction of two series over their union axis.
//!
//! ## Purpose
//!
//! This module produces the difference series of two inputs: at every union
//! time, the clusters resolved from both series are zipped elementwise and
//! each aligned pair contributes one `(t, v1 - v2)` sample.
//!
//! ## Design notes
//!
//! * **Shorter cluster wins**: Zipping stops at the shorter cluster rather
//!   than inventing phantom samples for the longer one.
//! * **Not unique-time**: Under the `All` policy a multi-value point yields
//!   several samples at one time; apply compression afterwards when a
//!   unique-time result is needed.
//! * **Cursor reuse**: Both series are swept with their own cursor, so the
//!   whole walk costs O(|union|) locator work after the first query.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::locator::get_time_points;
use crate::algorithms::union::union_times;
use crate::primitives::cursor::Cursor;
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;
use crate::primitives::series::Series;

// ============================================================================
// Difference
// ============================================================================

/// The per-time difference `a - b` over the union time axis.
pub fn difference<T: Float, V: Float>(
    a: &Series<T, V>,
    b: &Series<T, V>,
    opt: &Options<T, V>,
) -> Result<Series<T, V>, TraceError> {
    let times = union_times(a, b, opt)?;

    let mut out = Series::with_capacity(times.len());
    let mut ca = Cursor::unset();
    let mut cb = Cursor::unset();

    for &t in &times {
        let s1 = get_time_points(a, t, opt, &mut ca)?;
        let s2 = get_time_points(b, t, opt, &mut cb)?;
        for (p1, p2) in s1.iter().zip(s2.iter()) {
            out.push(t, p1.v() - p2.v());
        }
    }

    Ok(out)
}
