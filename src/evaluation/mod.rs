//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer turns pairs of series into comparison statistics:
//! - The incremental [`CompareResult`](compare::CompareResult) accumulator
//! - The union-axis comparison walk feeding it
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Incremental comparison statistics and the comparison walk.
pub mod compare;
