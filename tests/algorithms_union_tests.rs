// Tests for the union time axis.
//
// These tests verify the two-cursor merge, the tolerance-based
// deduplication of near-coincident times, and range clipping.

use tseries_rs::prelude::*;

// ============================================================================
// Merge Tests
// ============================================================================

/// Test a plain interleaved merge.
#[test]
fn test_interleaved_merge() {
    let a = Series::from_parts(vec![0.0, 1.0, 2.0], vec![0.0; 3]).unwrap();
    let b = Series::from_parts(vec![0.5, 1.0, 3.0], vec![0.0; 3]).unwrap();

    let times = a.union_times(&b, &Options::new()).unwrap();
    assert_eq!(times, vec![0.0, 0.5, 1.0, 2.0, 3.0]);
}

/// Test that one exhausted side drains the other.
#[test]
fn test_drains_longer_side() {
    let a = Series::from_parts(vec![0.0], vec![0.0]).unwrap();
    let b = Series::from_parts(vec![1.0, 2.0, 3.0], vec![0.0; 3]).unwrap();

    let times = a.union_times(&b, &Options::new()).unwrap();
    assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0]);

    let times = b.union_times(&a, &Options::new()).unwrap();
    assert_eq!(times, vec![0.0, 1.0, 2.0, 3.0]);
}

/// Test unions with an empty side.
#[test]
fn test_empty_sides() {
    let empty = Series::<f64>::new();
    let series = Series::from_parts(vec![1.0, 2.0], vec![0.0; 2]).unwrap();

    assert_eq!(
        empty.union_times(&series, &Options::new()).unwrap(),
        vec![1.0, 2.0]
    );
    assert_eq!(
        series.union_times(&empty, &Options::new()).unwrap(),
        vec![1.0, 2.0]
    );
    assert!(empty.union_times(&empty, &Options::new()).unwrap().is_empty());
}

/// Test that the result is strictly increasing.
#[test]
fn test_strictly_increasing_output() {
    let a = Series::from_parts(vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0], vec![0.0; 6]).unwrap();
    let b = Series::from_parts(vec![-1.0, 3.0, 3.0, 7.0], vec![0.0; 4]).unwrap();

    let times = a.union_times(&b, &Options::new()).unwrap();
    assert_eq!(times, vec![-1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0]);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
}

// ============================================================================
// Deduplication Tests
// ============================================================================

/// Test that times closer than twice the time tolerance to the previously
/// accepted time are merged away.
#[test]
fn test_dedup_within_coincidence_width() {
    let a = Series::from_parts(vec![0.0, 0.15, 0.4], vec![0.0; 3]).unwrap();
    let b = Series::<f64>::new();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.1);

    // 0.15 sits within 0.2 of 0.0 and is dropped; 0.4 survives.
    let times = a.union_times(&b, &opt).unwrap();
    assert_eq!(times, vec![0.0, 0.4]);
}

/// Test that a time exactly at the coincidence width survives.
#[test]
fn test_dedup_boundary_survives() {
    let a = Series::from_parts(vec![0.0, 0.5], vec![0.0; 2]).unwrap();
    let b = Series::<f64>::new();
    let mut opt = Options::new();
    opt.set_time_tolerance(0.25);

    let times = a.union_times(&b, &opt).unwrap();
    assert_eq!(times, vec![0.0, 0.5]);
}

// ============================================================================
// Range Tests
// ============================================================================

/// Test that the half-open range clips the union.
#[test]
fn test_range_clips_union() {
    let a = Series::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0; 5]).unwrap();
    let b = Series::<f64>::new();
    let mut opt = Options::new();
    opt.set_range(1.0, 3.0);

    // begin is inclusive, end is exclusive.
    let times = a.union_times(&b, &opt).unwrap();
    assert_eq!(times, vec![1.0, 2.0]);
}

/// Test that a non-monotonic input is rejected.
#[test]
fn test_rejects_non_monotonic() {
    let a = Series::from_parts(vec![1.0, 0.0], vec![0.0; 2]).unwrap();
    let b = Series::<f64>::new();
    let err = a.union_times(&b, &Options::new()).unwrap_err();
    assert_eq!(err, TraceError::NonMonotonic { prev: 1.0, next: 0.0 });
}
