//! Support library for the `junction` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
