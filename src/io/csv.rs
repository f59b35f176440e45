//! Semicolon-separated, comma-decimal CSV reading and writing.
//!
//! ## Purpose
//!
//! This module parses and emits the sample-file dialect common to transient
//! solvers on European locales: one sample per line, two fields separated by
//! `;`, decimal separator `,`.
//!
//! ## Design notes
//!
//! * **Forgiving reader**: A record with fewer than two fields ends the
//!   input, extra fields on a record are ignored, and a malformed numeric
//!   field stops parsing without an error. Trace files routinely end in
//!   truncated or garbage lines; the samples before the stop are what the
//!   caller wants. The stop is reported as a `tracing` warning so strict
//!   callers can hook a subscriber.
//! * **Locale-independent**: The decimal mapping between `,` and `.` is
//!   explicit in both directions, so the host locale never matters.
//! * **Scoped handles**: Files are opened per call and closed on every exit
//!   path; open failures surface as errors and are not retried.
//!
//! ## Key concepts
//!
//! * **Path surface**: [`read_series`] and [`write_series`] for files.
//! * **Stream surface**: [`read_series_from`] and [`write_series_to`] for
//!   arbitrary readers and writers (stdout included).

// External dependencies
use csv::{ReaderBuilder, WriterBuilder};
use num_traits::Float;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

// Internal dependencies
use crate::primitives::errors::TraceError;
use crate::primitives::series::Series;

// ============================================================================
// Reading
// ============================================================================

/// Read a series from the CSV file at `path`.
///
/// Fails with [`TraceError::OpenFailed`] when the file cannot be opened;
/// parse problems inside the file stop reading silently instead.
pub fn read_series<T, V, P>(path: P) -> Result<Series<T, V>, TraceError>
where
    T: Float,
    V: Float,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TraceError::OpenFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(read_series_from(file))
}

/// Read a series from any reader until the input ends or turns malformed.
pub fn read_series_from<T, V, R>(reader: R) -> Series<T, V>
where
    T: Float,
    V: Float,
    R: Read,
{
    let mut records = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut series = Series::new();
    for (index, record) in records.records().enumerate() {
        let Ok(record) = record else {
            tracing::warn!(record = index + 1, "sample file stops at unreadable record");
            break;
        };
        // A short record marks the end of the input.
        if record.len() < 2 {
            break;
        }
        let parsed = (parse_field::<T>(&record[0]), parse_field::<V>(&record[1]));
        let (Some(t), Some(v)) = parsed else {
            tracing::warn!(record = index + 1, "sample file stops at malformed record");
            break;
        };
        series.push(t, v);
    }

    tracing::debug!(samples = series.len(), "sample file read");
    series
}

/// Parse one numeric field, accepting `,` as the decimal separator.
fn parse_field<N: Float>(field: &str) -> Option<N> {
    let normalized = field.trim().replace(',', ".");
    normalized.parse::<f64>().ok().and_then(N::from)
}

// ============================================================================
// Writing
// ============================================================================

/// Write a series to the CSV file at `path`, replacing its contents.
///
/// Fails with [`TraceError::OpenFailed`] when the file cannot be created.
pub fn write_series<T, V, P>(path: P, series: &Series<T, V>) -> Result<(), TraceError>
where
    T: Float,
    V: Float,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TraceError::OpenFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    write_series_to(file, series)
}

/// Write a series to any writer, one `t;v` record per sample.
pub fn write_series_to<T, V, W>(writer: W, series: &Series<T, V>) -> Result<(), TraceError>
where
    T: Float,
    V: Float,
    W: Write,
{
    let mut records = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    for p in series {
        records
            .write_record([format_field(p.t()), format_field(p.v())])
            .map_err(|e| TraceError::WriteFailed {
                reason: e.to_string(),
            })?;
    }
    records.flush().map_err(|e| TraceError::WriteFailed {
        reason: e.to_string(),
    })?;

    tracing::debug!(samples = series.len(), "sample file written");
    Ok(())
}

/// Format one numeric field with `,` as the decimal separator.
fn format_field<N: Float>(value: N) -> String {
    format!("{}", value.to_f64().unwrap_or(f64::NAN)).replace('.', ",")
}
