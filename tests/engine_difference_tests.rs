// Tests for the difference walk.
//
// These tests verify per-time subtraction over the union axis, cluster
// zipping, range interaction, and the self-difference contract.
//
// ## Test Organization
//
// 1. **Basic Differences** - Aligned and interleaved time axes
// 2. **Clusters** - Multi-value zipping, shorter-cluster stop
// 3. **Reference Scenario** - Ramp source against its resampled reference
// 4. **Contracts** - Self-difference bounded by the value tolerance

use tseries_rs::prelude::*;

fn six_sample_series() -> Series<f64> {
    Series::from_parts(
        vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0],
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    )
    .unwrap()
}

fn reference_series() -> Series<f64> {
    Series::from_parts(vec![-1.0, 3.0, 3.0, 7.0], vec![-1.0, 3.0, 4.0, 8.0]).unwrap()
}

// ============================================================================
// Basic Difference Tests
// ============================================================================

/// Test subtraction over identical time axes.
#[test]
fn test_aligned_axes() {
    let a = Series::from_parts(vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0]).unwrap();
    let b = Series::from_parts(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0]).unwrap();

    let diff = a.difference(&b, &Options::new()).unwrap();
    assert_eq!(diff.times(), vec![0.0, 1.0, 2.0]);
    assert_eq!(diff.values(), vec![4.0, 5.0, 6.0]);
}

/// Test that interleaved axes interpolate the missing side.
#[test]
fn test_interleaved_axes_interpolate() {
    let a = Series::from_parts(vec![0.0, 2.0], vec![0.0, 2.0]).unwrap();
    let b = Series::from_parts(vec![1.0], vec![0.5]).unwrap();

    // At t=1 series `a` interpolates to 1.0; series `b` is single-sample
    // and contributes 0.5 everywhere.
    let diff = a.difference(&b, &Options::new()).unwrap();
    assert_eq!(diff.times(), vec![0.0, 1.0, 2.0]);
    assert_eq!(diff.values(), vec![-0.5, 0.5, 1.5]);
}

/// Test that differencing against an empty series yields an empty result.
#[test]
fn test_empty_side_yields_empty() {
    let a = six_sample_series();
    let empty = Series::<f64>::new();

    let diff = a.difference(&empty, &Options::new()).unwrap();
    assert!(diff.is_empty());
}

// ============================================================================
// Cluster Tests
// ============================================================================

/// Test elementwise zipping of two multi-value clusters.
#[test]
fn test_multi_value_clusters_zip_elementwise() {
    let a = Series::from_parts(vec![1.0, 1.0], vec![5.0, 8.0]).unwrap();
    let b = Series::from_parts(vec![1.0, 1.0], vec![1.0, 2.0]).unwrap();

    let diff = a.difference(&b, &Options::new()).unwrap();
    assert_eq!(diff.times(), vec![1.0, 1.0]);
    assert_eq!(diff.values(), vec![4.0, 6.0]);
}

/// Test that zipping stops at the shorter cluster.
#[test]
fn test_shorter_cluster_stops_zip() {
    let a = Series::from_parts(vec![1.0, 1.0], vec![5.0, 8.0]).unwrap();
    let b = Series::from_parts(vec![1.0], vec![1.0]).unwrap();

    let diff = a.difference(&b, &Options::new()).unwrap();
    assert_eq!(diff.times(), vec![1.0]);
    assert_eq!(diff.values(), vec![4.0]);
}

// ============================================================================
// Reference Scenario Tests
// ============================================================================

/// Test the difference of a compressed reference against its source over a
/// clipped range.
#[test]
fn test_reference_difference_on_range() {
    let source = six_sample_series();
    let reference = reference_series();

    let mut opt = Options::new();
    opt.set_range(1.0, 5.5);

    let mut diff = reference.difference(&source, &opt).unwrap();
    assert_eq!(diff.times(), vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);
    assert!(diff.values().iter().all(|v| v.abs() < 1e-12));

    diff.compress(&Options::new()).unwrap();
    assert_eq!(diff.times(), vec![1.0, 5.0]);
    assert_eq!(diff.values(), vec![0.0, 0.0]);
}

/// Test the same difference with the range cleared.
#[test]
fn test_reference_difference_full_axis() {
    let source = six_sample_series();
    let reference = reference_series();

    let mut opt = Options::new();
    opt.set_range(1.0, 5.5);
    opt.clear_range();

    let mut diff = reference.difference(&source, &opt).unwrap();
    diff.compress(&opt).unwrap();
    assert_eq!(diff.times(), vec![-1.0, 7.0]);
    assert_eq!(diff.values(), vec![0.0, 0.0]);
}

// ============================================================================
// Contract Tests
// ============================================================================

/// Test that a self-difference compresses to values below the value
/// tolerance.
#[test]
fn test_self_difference_is_null() {
    let series = six_sample_series();
    let opt = Options::new();

    let mut diff = series.difference(&series, &opt).unwrap();
    diff.compress(&opt).unwrap();
    assert!(diff
        .values()
        .iter()
        .all(|v| v.abs() < opt.value_tolerance));
}
