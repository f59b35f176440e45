//! # tseries - tolerance-aware time-series post-processing for Rust
//!
//! A library for manipulating numeric time series: sequences of `(time,
//! value)` samples ordered non-strictly by time, as produced by transient
//! circuit and physics solvers, data loggers, and sampled telemetry.
//!
//! ## What it does
//!
//! The crate covers the operations that dominate post-processing of
//! simulation traces:
//!
//! - **Point location**: find the samples that represent a series at an
//!   arbitrary time, interpolating when none exist and aggregating when
//!   several coincide ([`Series::get_time_points`]).
//! - **Dense output**: resample an irregular series onto a uniform grid
//!   ([`Series::dense_output`]).
//! - **Compression**: drop samples that a piecewise-linear reconstruction
//!   makes redundant, within tolerances ([`Series::compress`]).
//! - **Difference**: subtract two series over the union of their time axes
//!   ([`Series::difference`]).
//! - **Comparison**: scalar difference statistics including the extreme
//!   weighted deviations and a Kolmogorov-Smirnov-style maximum cumulative
//!   deviation ([`Series::compare`]).
//! - **CSV I/O**: read and write the `;`-separated, `,`-decimal sample
//!   files common to solver toolchains (`std` feature).
//!
//! All operations share one configuration bundle ([`Options`]) and one
//! invariant (times non-decreasing; equal adjacent times form a multi-value
//! point), which keeps them consistent with each other across edge cases.
//!
//! ## Quick Start
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! // A reference trace and a rerun to validate against it.
//! let reference = Series::from_parts(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 4.0, 9.0],
//! )?;
//! let rerun = Series::from_parts(
//!     vec![0.0, 0.5, 1.5, 2.5, 3.0],
//!     vec![0.0, 0.3, 2.2, 6.3, 9.0],
//! )?;
//!
//! let opt = Options::new();
//! let result = reference.compare(&rerun, &opt)?;
//!
//! println!("aligned pairs: {}", result.count());
//! println!("max deviation: {:?}", result.max().map(|m| m.wd()));
//! println!("ks score:      {}", result.ks_test());
//! assert!(result.finished());
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## Options
//!
//! [`Options`] is a plain struct with public fields, defaults, and chainable
//! `set_*` setters. It is consumed by every operation.
//!
//! | Field             | Default | Effect                                              |
//! |-------------------|---------|-----------------------------------------------------|
//! | `time_tolerance`  | `1e-8`  | Half-width of the "same time" window                |
//! | `value_tolerance` | `1e-8`  | Equality threshold used by compression              |
//! | `atol`, `rtol`    | `1, 0`  | Weighted-difference scaling for comparison extremes |
//! | `range`           | unset   | Half-open `begin <= t < end` filter on union times  |
//! | `multi_value`     | `All`   | Policy for windows holding several samples          |
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! let mut opt = Options::<f64>::new();
//! opt.set_time_tolerance(0.05)
//!     .set_multi_value(Max)
//!     .set_range(0.0, 10.0);
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## Multi-value points
//!
//! A series may record several values at one time (a discontinuity, or
//! coincident channels). When a query window holds two or more samples the
//! `multi_value` policy decides the outcome: `All` returns the whole
//! cluster, `Min`, `Max`, and `Avg` collapse it to a single sample stamped
//! with the query time.
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! let series = Series::from_parts(vec![1.0, 1.0], vec![2.0, 3.0])?;
//! let mut opt = Options::new();
//! let mut cursor = Cursor::unset();
//!
//! opt.set_multi_value(All);
//! assert_eq!(
//!     series.get_time_points(1.0, &opt, &mut cursor)?.values(),
//!     vec![2.0, 3.0],
//! );
//!
//! opt.set_multi_value(Avg);
//! cursor.reset();
//! assert_eq!(
//!     series.get_time_points(1.0, &opt, &mut cursor)?.values(),
//!     vec![2.5],
//! );
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## Cursors
//!
//! The locator threads an explicit [`Cursor`] through successive calls.
//! Sweeping non-decreasing query times with one cursor costs a single
//! O(log N) search and amortizes to O(1) per query afterwards; the
//! comparison, difference, and resampling walks rely on this. Reset the
//! cursor (or use a fresh one) before a sweep that moves backwards, and use
//! one cursor per sweep when several run over the same series.
//!
//! ## Compression
//!
//! [`Series::compress`] removes, in place, samples that are near-duplicates
//! in both coordinates and samples lying on the line between their
//! neighbors. The survivors are the smallest piecewise-linear representation
//! equivalent to the input within tolerances; compressing twice removes
//! nothing more.
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! let mut ramp = Series::from_parts(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![0.0, 2.0, 4.0, 6.0, 8.0],
//! )?;
//! let removed = ramp.compress(&Options::new())?;
//! assert_eq!(removed, 3);
//! assert_eq!(ramp.times(), vec![0.0, 4.0]);
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## CSV files
//!
//! With the `std` feature (default), series move in and out of sample files
//! with one `t;v` record per line and `,` as the decimal separator,
//! independent of the host locale. Reading is forgiving: a short record
//! ends the input and a malformed field stops parsing silently, because
//! trace files routinely end in truncated lines.
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! let series: Series<f64> = read_series_from(&b"0;1,5\n1;2,5\n"[..]);
//! assert_eq!(series.values(), vec![1.5, 2.5]);
//!
//! let mut out = Vec::new();
//! write_series_to(&mut out, &series)?;
//! assert_eq!(out, b"0;1,5\n1;2,5\n");
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Operations return `Result<_, TraceError>`; nothing is recovered locally.
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use tseries_rs::prelude::*;
//!
//! let err = Series::<f64>::from_parts(vec![1.0, 2.0], vec![1.0]).unwrap_err();
//! assert_eq!(
//!     err,
//!     TraceError::SizeMismatch { times_len: 2, values_len: 1 },
//! );
//! # Result::<(), TraceError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The computational core supports `no_std` environments (an allocator is
//! required). Disable default features to remove the standard library and
//! the CSV layer:
//!
//! ```toml
//! [dependencies]
//! tseries_rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the sample pair (`Point`), the monotonic container (`Series`),
// search cursors, the shared configuration (`Options`), and error types.
mod primitives;

// Layer 2: Algorithms - core series algorithms.
//
// Contains piecewise-linear interpolation, the tolerance-window locator,
// the union of two time axes, and in-place compression.
mod algorithms;

// Layer 3: Evaluation - comparison statistics.
//
// Contains the incremental `CompareResult` accumulator and the union-axis
// comparison walk.
mod evaluation;

// Layer 4: Engine - orchestration.
//
// Contains the difference walk, uniform-grid resampling, and configuration
// validation.
mod engine;

// CSV I/O (std only).
//
// Contains the semicolon-separated, comma-decimal sample file reader and
// writer.
#[cfg(feature = "std")]
mod io;

// High-level API.
//
// Provides the user-facing `Series` methods and public re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use tseries_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        weighted_difference, CompareResult, Cursor, Extreme,
        MultiValue,
        MultiValue::{All, Avg, Max, Min},
        Options, Point, RangeFilter, Series, TraceError,
    };
    #[cfg(feature = "std")]
    pub use crate::api::{read_series, read_series_from, write_series, write_series_to};
}

// Re-export the primary types at the crate root as well.
pub use crate::api::{
    weighted_difference, CompareResult, Cursor, Extreme, MultiValue, Options, Point, RangeFilter,
    Series, TraceError,
};
#[cfg(feature = "std")]
pub use crate::api::{read_series, read_series_from, write_series, write_series_to};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and statistics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal I/O.
    #[cfg(feature = "std")]
    pub mod io {
        pub use crate::io::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
