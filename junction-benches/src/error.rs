//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of panicking inside
//! the measured closures.

use crate::source::SyntheticError;
use junction_core::JunctionError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A connectivity query rejected the generated input.
    #[error("connectivity query failed: {0}")]
    Junction(#[from] JunctionError),
}
