//! Command-line interface for the junction box solver.
//!
//! The single `solve` command loads a point file, connects the junction
//! boxes, and reports the circuit product, the closing-connection product, or
//! both.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, Part, SolveArgs, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
