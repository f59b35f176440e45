//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms into whole-series operations:
//! - Per-time subtraction over the union axis (`difference`)
//! - Uniform-grid resampling (`dense_output`)
//! - Fail-fast configuration validation (`Validator`)
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-time subtraction of two series over their union axis.
pub mod difference;

/// Uniform-grid resampling through the locator.
pub mod resample;

/// Configuration validation.
pub mod validator;
