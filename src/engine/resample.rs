//! Uniform-grid resampling through the locator.
//!
//! ## Purpose
//!
//! This module resamples an irregular series onto the uniform grid
//! `start, start + step, …` up to and including `end`, producing the dense
//! output used to plot or post-process transient traces.
//!
//! ## Design notes
//!
//! * **Grid by multiplication**: Grid times are computed as
//!   `start + k * step` rather than by repeated addition, so rounding error
//!   stays bounded over long grids.
//! * **Grid-stamped samples**: Every sample of the cluster resolved at a
//!   grid time is emitted with the grid time as its coordinate. Under the
//!   `All` policy a multi-value source point therefore yields several
//!   samples at one grid time; the collapsing policies keep the grid
//!   strictly uniform.
//! * **One sweep**: Grid times are non-decreasing, so a single threaded
//!   cursor keeps the locator amortized O(1) per grid point.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::locator::get_time_points;
use crate::engine::validator::Validator;
use crate::primitives::cursor::Cursor;
use crate::primitives::errors::TraceError;
use crate::primitives::options::Options;
use crate::primitives::series::Series;

// ============================================================================
// Dense Output
// ============================================================================

/// Resample `series` onto the grid `start + k * step` while the grid time
/// stays at or below `end`.
pub fn dense_output<T: Float, V: Float>(
    series: &Series<T, V>,
    start: T,
    end: T,
    step: T,
    opt: &Options<T, V>,
) -> Result<Series<T, V>, TraceError> {
    Validator::validate_step(step)?;
    series.check()?;

    let estimate = ((end - start) / step)
        .ceil()
        .to_usize()
        .map_or(0, |n| n + 1);
    let mut out = Series::with_capacity(estimate);
    let mut cursor = Cursor::unset();

    let mut k = 0usize;
    loop {
        let t = start + T::from(k).unwrap() * step;
        if t > end {
            break;
        }
        let cluster = get_time_points(series, t, opt, &mut cursor)?;
        for p in cluster.iter() {
            out.push(t, p.v());
        }
        k += 1;
    }

    Ok(out)
}
