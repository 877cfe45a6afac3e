//! Benchmark support crate for junction.
//!
//! Provides seeded synthetic point sets and parameter labels for the
//! Criterion benchmarks covering edge ranking, the union-find partition, and
//! both connectivity drivers.

pub mod error;
pub mod params;
pub mod source;
