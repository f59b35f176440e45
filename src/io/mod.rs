//! CSV I/O for sample files.
//!
//! # Purpose
//!
//! This layer moves series in and out of the semicolon-separated,
//! comma-decimal sample files produced by transient solvers and data
//! loggers. It is only available with the `std` feature.

/// Semicolon-separated, comma-decimal CSV reading and writing.
pub mod csv;
