// crates/elevator-judge-cli/src/bin/judge.rs
// ============================================================================
// Binary: elevator-judge
// Description: Validates a contestant's output log against a request stream.
// Purpose: CLI entry point wrapping `elevator_judge_core::validate`.
// Dependencies: clap, elevator-judge-core
// ============================================================================

//! ## Overview
//! Reads the request stream and the contestant's log from disk, replays the
//! log through the world state machine, and reports `Accepted` or the first
//! violated invariant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use elevator_judge_core::JudgeError;
use elevator_judge_core::core::time::Timestamp;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum simulation time, in seconds, for the hardest track.
const DEFAULT_MAX_TIME: f64 = 220.0;

// ============================================================================
// SECTION: CLI Arguments
// ============================================================================

/// Command-line arguments for `elevator-judge`.
#[derive(Parser, Debug)]
#[command(name = "elevator-judge")]
struct Cli {
    /// Path to the request stream file.
    #[arg(long, value_name = "PATH", default_value = "input.txt")]
    input_file: PathBuf,
    /// Path to the contestant's output log.
    #[arg(long, value_name = "PATH", default_value = "output.txt")]
    output_file: PathBuf,
    /// Maximum simulation time, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_MAX_TIME)]
    max_time: f64,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Every way the judge binary can fail before or while delegating to the
/// core crate.
#[derive(Debug, Error)]
enum CliError {
    /// A configured file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `--max-time` was not a valid non-negative timestamp.
    #[error("invalid --max-time value {0}")]
    InvalidMaxTime(f64),

    /// The core crate rejected the run.
    #[error(transparent)]
    Judge(#[from] JudgeError),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(()) => {
            let _ = writeln!(std::io::stdout(), "Accepted");
            ExitCode::SUCCESS
        }
        Err(err) => emit_error(&err),
    }
}

/// Executes the judge: reads both files, validates, and replays to the end.
///
/// # Errors
/// Returns [`CliError`] on I/O failure, an invalid `--max-time`, or the
/// first violated invariant the core crate reports.
fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let input_text = read_file(&cli.input_file)?;
    let output_text = read_file(&cli.output_file)?;
    let max_time = Timestamp::new(cli.max_time).ok_or(CliError::InvalidMaxTime(cli.max_time))?;
    elevator_judge_core::validate(&input_text, &output_text, max_time)?;
    Ok(())
}

/// Reads a file to a `String`, wrapping I/O failures with the path.
fn read_file(path: &PathBuf) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })
}

/// Writes the failure diagnostic to stderr and returns the failure exit code.
fn emit_error(err: &CliError) -> ExitCode {
    let _ = writeln!(std::io::stderr(), "Validation Error: {err}");
    ExitCode::FAILURE
}
