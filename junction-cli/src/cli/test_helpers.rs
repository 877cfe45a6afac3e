//! Helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::solve_command;
use super::{Cli, CliError, Command, Part, SolveArgs, run_cli};

pub(super) const EXAMPLE_INPUT: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Arguments solving `path` with ten attempts and the default circuit count.
pub(super) fn solve_args(path: PathBuf, part: Part) -> SolveArgs {
    SolveArgs {
        path,
        attempts: 10,
        circuits: 3,
        part,
        name: None,
    }
}

pub(super) fn solve_cli(args: SolveArgs) -> Cli {
    Cli {
        command: Command::Solve(args),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn solve_command_expecting_error(args: SolveArgs, panic_msg: &str) -> CliError {
    match solve_command(args) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
