// Tests for the tolerance-window locator.
//
// These tests verify the behavior of `get_time_points` across its cases:
// degenerate series, window collection, interpolation fallback, multi-value
// aggregation, and the cursor threading contract.
//
// ## Test Organization
//
// 1. **Degenerate Series** - Empty and single-sample inputs
// 2. **Window Collection** - Half-open window semantics
// 3. **Interpolation Fallback** - Queries between and beyond samples
// 4. **Multi-Value Aggregation** - All, Min, Max, Avg
// 5. **Cursors** - Sweeps, overlapping sweeps, resets

use approx::assert_relative_eq;
use tseries_rs::prelude::*;

fn six_sample_series() -> Series<f64> {
    Series::from_parts(
        vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    )
    .unwrap()
}

// ============================================================================
// Degenerate Series Tests
// ============================================================================

/// Test that an empty series yields an empty result.
#[test]
fn test_empty_series() {
    let series = Series::<f64>::new();
    let mut cursor = Cursor::unset();
    let result = series
        .get_time_points(1.0, &Options::new(), &mut cursor)
        .unwrap();
    assert!(result.is_empty());
}

/// Test that a single-sample series returns its sample verbatim for any
/// query time.
#[test]
fn test_single_sample_series() {
    let series = Series::from_parts(vec![1.0], vec![1.0]).unwrap();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.05);

    for t in [-1.0, 0.0, 1.0] {
        let mut cursor = Cursor::unset();
        let result = series.get_time_points(t, &opt, &mut cursor).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().t(), 1.0);
        assert_eq!(result.first().unwrap().v(), 1.0);
    }
}

/// Test that a non-monotonic series is rejected at the entry point.
#[test]
fn test_rejects_non_monotonic() {
    let series = Series::from_parts(vec![2.0, 1.0], vec![1.0, 2.0]).unwrap();
    let mut cursor = Cursor::unset();
    let err = series
        .get_time_points(1.5, &Options::new(), &mut cursor)
        .unwrap_err();
    assert_eq!(err, TraceError::NonMonotonic { prev: 2.0, next: 1.0 });
}

// ============================================================================
// Window Collection Tests
// ============================================================================

/// Test that a sample exactly at the query time is collected verbatim.
#[test]
fn test_exact_hit_collected() {
    let series = six_sample_series();
    let mut cursor = Cursor::unset();
    let result = series
        .get_time_points(2.0, &Options::new(), &mut cursor)
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.first().unwrap().t(), 2.0);
    assert_eq!(result.first().unwrap().v(), 2.0);
}

/// Test that the window is half-open: closed on the left edge, open on the
/// right edge.
#[test]
fn test_window_half_open() {
    let series = Series::from_parts(vec![0.0, 1.0], vec![5.0, 7.0]).unwrap();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.5);

    // Window [0.0, 1.0): the left sample is in, the right sample is not.
    let mut cursor = Cursor::unset();
    let result = series.get_time_points(0.5, &opt, &mut cursor).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.first().unwrap().t(), 0.0);
    assert_eq!(result.first().unwrap().v(), 5.0);
}

// ============================================================================
// Interpolation Fallback Tests
// ============================================================================

/// Test linear interpolation between samples.
#[test]
fn test_interpolates_between_samples() {
    let series = six_sample_series();
    let mut cursor = Cursor::unset();

    let result = series
        .get_time_points(1.5, &Options::new(), &mut cursor)
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.first().unwrap().t(), 1.5);
    assert_relative_eq!(result.first().unwrap().v(), 1.5);
}

/// Test linear extrapolation before the first and after the last sample.
#[test]
fn test_extrapolates_beyond_ends() {
    let series = six_sample_series();

    let mut cursor = Cursor::unset();
    let before = series
        .get_time_points(-1.0, &Options::new(), &mut cursor)
        .unwrap();
    assert_relative_eq!(before.first().unwrap().v(), -1.0);

    let mut cursor = Cursor::unset();
    let after = series
        .get_time_points(7.0, &Options::new(), &mut cursor)
        .unwrap();
    assert_relative_eq!(after.first().unwrap().v(), 8.0);
}

/// Test the deterministic tie-break at a duplicated abscissa.
///
/// A two-sample series whose samples share one time has only zero-width
/// brackets; queries resolve to the left value beyond the bracket and to
/// the right value otherwise.
#[test]
fn test_duplicated_abscissa_tie_break() {
    let series = Series::from_parts(vec![1.0, 1.0], vec![2.0, 3.0]).unwrap();

    let mut cursor = Cursor::unset();
    let below = series
        .get_time_points(0.0, &Options::new(), &mut cursor)
        .unwrap();
    assert_eq!(below.first().unwrap().v(), 2.0);

    let mut cursor = Cursor::unset();
    let above = series
        .get_time_points(2.0, &Options::new(), &mut cursor)
        .unwrap();
    assert_eq!(above.first().unwrap().v(), 3.0);
}

/// Test that any query on a non-empty series yields at least one sample.
#[test]
fn test_nonempty_result_for_nonempty_series() {
    let series = six_sample_series();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.05);

    let mut cursor = Cursor::unset();
    let mut t = -1.0;
    while t < 6.0 {
        let result = series.get_time_points(t, &opt, &mut cursor).unwrap();
        assert!(!result.is_empty(), "empty result at t={t}");
        t += 0.01;
    }
}

// ============================================================================
// Multi-Value Aggregation Tests
// ============================================================================

/// Test the four policies on a two-value point.
#[test]
fn test_multi_value_policies() {
    let series = Series::from_parts(vec![1.0, 1.0], vec![2.0, 3.0]).unwrap();
    let mut opt = Options::new();

    opt.set_multi_value(All);
    let mut cursor = Cursor::unset();
    let all = series.get_time_points(1.0, &opt, &mut cursor).unwrap();
    assert_eq!(all.values(), vec![2.0, 3.0]);
    assert_eq!(all.times(), vec![1.0, 1.0]);

    opt.set_multi_value(Min);
    let mut cursor = Cursor::unset();
    let min = series.get_time_points(1.0, &opt, &mut cursor).unwrap();
    assert_eq!(min.times(), vec![1.0]);
    assert_eq!(min.values(), vec![2.0]);

    opt.set_multi_value(Max);
    let mut cursor = Cursor::unset();
    let max = series.get_time_points(1.0, &opt, &mut cursor).unwrap();
    assert_eq!(max.values(), vec![3.0]);

    opt.set_multi_value(Avg);
    let mut cursor = Cursor::unset();
    let avg = series.get_time_points(1.0, &opt, &mut cursor).unwrap();
    assert_eq!(avg.values(), vec![2.5]);
}

/// Test that aggregation stamps the query time on the collapsed sample.
#[test]
fn test_aggregation_stamps_query_time() {
    let series = Series::from_parts(vec![1.0, 1.0, 2.0], vec![2.0, 3.0, 9.0]).unwrap();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.25).set_multi_value(Avg);

    // Query slightly off the duplicated time still covers both samples.
    let mut cursor = Cursor::unset();
    let result = series.get_time_points(1.1, &opt, &mut cursor).unwrap();
    assert_eq!(result.times(), vec![1.1]);
    assert_eq!(result.values(), vec![2.5]);
}

/// Test that a single collected sample is returned verbatim under every
/// policy.
#[test]
fn test_single_collection_ignores_policy() {
    let series = six_sample_series();
    for policy in [All, Min, Max, Avg] {
        let mut opt = Options::new();
        opt.set_multi_value(policy);
        let mut cursor = Cursor::unset();
        let result = series.get_time_points(2.0, &opt, &mut cursor).unwrap();
        assert_eq!(result.times(), vec![2.0]);
        assert_eq!(result.values(), vec![2.0]);
    }
}

// ============================================================================
// Cursor Tests
// ============================================================================

/// Test that a threaded cursor returns the same results as fresh searches
/// over a non-decreasing sweep.
#[test]
fn test_cursor_sweep_matches_fresh_searches() {
    let series = six_sample_series();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.05);

    let mut swept = Cursor::unset();
    let mut t = -1.0;
    while t < 6.0 {
        let with_cursor = series.get_time_points(t, &opt, &mut swept).unwrap();
        let mut fresh = Cursor::unset();
        let without = series.get_time_points(t, &opt, &mut fresh).unwrap();
        assert_eq!(with_cursor, without, "results diverge at t={t}");
        t += 0.01;
    }
}

/// Test that two overlapping sweeps with independent cursors do not
/// interfere.
#[test]
fn test_overlapping_sweeps() {
    let series = six_sample_series();
    let opt = Options::new();

    let mut ahead = Cursor::unset();
    let mut behind = Cursor::unset();
    for k in 0..40 {
        let t_ahead = 1.0 + 0.1 * k as f64;
        let t_behind = 1.0 + 0.05 * k as f64;
        let a = series.get_time_points(t_ahead, &opt, &mut ahead).unwrap();
        let b = series.get_time_points(t_behind, &opt, &mut behind).unwrap();

        let mut fresh = Cursor::unset();
        assert_eq!(a, series.get_time_points(t_ahead, &opt, &mut fresh).unwrap());
        let mut fresh = Cursor::unset();
        assert_eq!(b, series.get_time_points(t_behind, &opt, &mut fresh).unwrap());
    }
}

/// Test that the cursor lands on the lower bound of the last query.
#[test]
fn test_cursor_advances_to_left_bracket() {
    let series = six_sample_series();
    let mut cursor = Cursor::unset();
    series
        .get_time_points(3.0, &Options::new(), &mut cursor)
        .unwrap();
    // The lower bound for t=3 is the first of the two samples at t=3.
    assert_eq!(cursor.index(), Some(2));
}
