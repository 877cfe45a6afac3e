//! Command implementations and argument parsing for the junction CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use junction_core::{
    CircuitSummary, ClosingConnection, DEFAULT_ATTEMPT_LIMIT, DEFAULT_CIRCUIT_COUNT,
    JunctionError, LoadError, Playground, PlaygroundBuilder, PointSet,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "junction", about = "Connect junction boxes into circuits.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve one point file.
    Solve(SolveArgs),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveArgs {
    /// Path to a text file with one `X,Y,Z` point per line.
    pub path: PathBuf,

    /// Connection attempts made before the circuits are measured.
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    pub attempts: usize,

    /// Number of largest circuits whose sizes are multiplied.
    #[arg(long, default_value_t = DEFAULT_CIRCUIT_COUNT)]
    pub circuits: usize,

    /// Which answers to compute.
    #[arg(long, value_enum, default_value_t = Part::Both)]
    pub part: Part,

    /// Override name for the point set (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Answers the `solve` command can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    /// Product of the largest circuit sizes after the attempts.
    One,
    /// Product of the x coordinates of the closing connection.
    Two,
    /// Both answers from a single ranking.
    Both,
}

impl Part {
    fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
            Self::Both => "both",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading or parsing the points failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Connecting the points failed.
    #[error(transparent)]
    Core(#[from] JunctionError),
}

impl CliError {
    /// Returns the stable code of the underlying parse or core error.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Load(load) => load.parse_code().map(|code| code.as_str()),
            Self::Core(core) => Some(core.code().as_str()),
        }
    }
}

/// Outcome of a `solve` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the point set.
    pub data_source: String,
    /// Number of points loaded.
    pub points: usize,
    /// Circuit summary, present when part one was requested.
    pub circuits: Option<CircuitSummary>,
    /// Closing connection, present when part two was requested.
    pub closing: Option<ClosingConnection>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or solving fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{Cli, Command, Part, SolveArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n3,0,0\n10,0,0\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveArgs {
///         path: file.path().to_path_buf(),
///         attempts: 1,
///         circuits: 2,
///         part: Part::Both,
///         name: Some("demo".into()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.circuits.map(|c| c.product()), Some(2));
/// assert_eq!(summary.closing.map(|c| c.x_product()), Some(30));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(args) => {
            Span::current().record("command", field::display("solve"));
            solve_command(args)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(args),
    fields(
        path = field::Empty,
        attempts = args.attempts,
        circuits = args.circuits,
        part = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn solve_command(args: SolveArgs) -> Result<ExecutionSummary, CliError> {
    let SolveArgs {
        path,
        attempts,
        circuits,
        part,
        name,
    } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("part", field::display(part.as_str()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let playground = PlaygroundBuilder::new()
        .with_attempt_limit(attempts)
        .with_circuit_count(circuits)
        .build()?;
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_reader(&path)?;
    let points = PointSet::try_from_reader(chosen_name, reader)?;

    let summary = solve_parts(&playground, &points, part)?;
    info!(
        data_source = summary.data_source.as_str(),
        points = summary.points,
        "command completed"
    );
    Ok(summary)
}

fn solve_parts(
    playground: &Playground,
    points: &PointSet,
    part: Part,
) -> Result<ExecutionSummary, CliError> {
    let (circuits, closing) = match part {
        Part::One => (Some(playground.circuits(points)?), None),
        Part::Two => (None, Some(playground.closing_connection(points)?)),
        Part::Both => {
            let solution = playground.solve(points)?;
            (
                Some(solution.circuits().clone()),
                Some(*solution.closing()),
            )
        }
    };
    Ok(ExecutionSummary {
        data_source: points.name().to_owned(),
        points: points.len(),
        circuits,
        closing,
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "points".to_owned())
}

/// Renders `summary` to `writer`, one answer per line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use junction_cli::cli::{ExecutionSummary, render_summary};
/// # use junction_core::{PlaygroundBuilder, PointSet};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let points = PointSet::parse("demo", "0,0,0\n2,0,0\n")?;
/// let playground = PlaygroundBuilder::new().with_attempt_limit(1).build()?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     points: points.len(),
///     circuits: None,
///     closing: Some(playground.closing_connection(&points)?),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\npoints: 2\nPart 2: 0\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.points)?;
    if let Some(circuits) = &summary.circuits {
        writeln!(writer, "Part 1: {}", circuits.product())?;
    }
    if let Some(closing) = &summary.closing {
        writeln!(writer, "Part 2: {}", closing.x_product())?;
    }
    Ok(())
}
