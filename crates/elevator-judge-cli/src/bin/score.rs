// crates/elevator-judge-cli/src/bin/score.rs
// ============================================================================
// Binary: elevator-score
// Description: Validates then scores a contestant's run, appending a row to
//              a results CSV.
// Purpose: CLI entry point wrapping `elevator_judge_core::validate` and
//          `elevator_judge_core::score::score`.
// Dependencies: clap, csv, elevator-judge-core
// ============================================================================

//! ## Overview
//! Runs the same validation pass as `elevator-judge`, then computes the
//! throughput, weighted-wait, and energy numbers and records them in a
//! results table alongside the case this run belongs to.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use elevator_judge_core::JudgeError;
use elevator_judge_core::core::time::Timestamp;
use elevator_judge_core::score::ScoreReport;
use elevator_judge_core::score::case_label;
use elevator_judge_core::score::score;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum simulation time, in seconds, for the hardest track.
const DEFAULT_MAX_TIME: f64 = 220.0;

/// Header row written once per new results CSV.
const CSV_HEADER: [&str; 8] =
    ["case", "T_max", "WT", "W", "arrive_count", "open_count", "close_count", "completed_passengers"];

// ============================================================================
// SECTION: CLI Arguments
// ============================================================================

/// Command-line arguments for `elevator-score`.
#[derive(Parser, Debug)]
#[command(name = "elevator-score")]
struct Cli {
    /// Path to the request stream file.
    input_file: PathBuf,
    /// Path to the contestant's output log.
    output_file: PathBuf,
    /// Measured wall-clock runtime of the contestant's program, in seconds.
    #[arg(long, value_name = "SECONDS")]
    real_time: Option<f64>,
    /// Path to the results CSV that this run's row is appended to.
    #[arg(long, value_name = "PATH", default_value = "log/results.csv")]
    csv_file: PathBuf,
    /// Maximum simulation time, in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_MAX_TIME)]
    max_time: f64,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Every way the scorer binary can fail.
#[derive(Debug, Error)]
enum CliError {
    /// A configured file could not be read or written.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read or write.
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

    /// The results CSV could not be written.
    #[error("failed to write {path}: {source}")]
    Csv {
        /// CSV path that failed to write.
        path: PathBuf,
        /// Underlying csv-crate error.
        #[source]
        source: csv::Error,
    },
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            let _ = writeln!(std::io::stdout(), "T_max_score: {:.4}", report.t_max_score);
            let _ = writeln!(std::io::stdout(), "WT: {}", format_wt(report.wt));
            let _ = writeln!(std::io::stdout(), "W: {:.4}", report.w);
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "Validation Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Executes the judge and scorer, appending one row to the results CSV.
///
/// # Errors
/// Returns [`CliError`] on I/O failure, an invalid `--max-time`, a violated
/// invariant, or a CSV write failure.
fn run() -> Result<ScoreReport, CliError> {
    let cli = Cli::parse();
    let input_text = read_file(&cli.input_file)?;
    let output_text = read_file(&cli.output_file)?;
    let max_time = Timestamp::new(cli.max_time).ok_or(CliError::InvalidMaxTime(cli.max_time))?;
    let world = elevator_judge_core::validate(&input_text, &output_text, max_time)?;
    let report = score(&world, cli.real_time);
    append_csv_row(&cli.csv_file, &cli.output_file, &report)?;
    Ok(report)
}

/// Reads a file to a `String`, wrapping I/O failures with the path.
fn read_file(path: &PathBuf) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.clone(), source })
}

/// Renders a weighted-wait value, spelling out `inf` for an incomplete run.
fn format_wt(wt: f64) -> String {
    if wt.is_infinite() { "inf".to_owned() } else { format!("{wt:.4}") }
}

/// Appends one row to the results CSV, writing the header first if the file
/// is new.
fn append_csv_row(csv_path: &Path, output_path: &Path, report: &ScoreReport) -> Result<(), CliError> {
    if let Some(parent) = csv_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CliError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    let needs_header = !csv_path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)
        .map_err(|source| CliError::Io { path: csv_path.to_path_buf(), source })?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    if needs_header {
        writer
            .write_record(CSV_HEADER)
            .map_err(|source| CliError::Csv { path: csv_path.to_path_buf(), source })?;
    }

    writer
        .write_record([
            case_label(output_path),
            format!("{:.4}", report.t_max_score),
            format_wt(report.wt),
            format!("{:.4}", report.w),
            report.arrive_count.to_string(),
            report.open_count.to_string(),
            report.close_count.to_string(),
            format!("{}/{}", report.completed_passengers, report.total_passengers),
        ])
        .map_err(|source| CliError::Csv { path: csv_path.to_path_buf(), source })?;
    writer.flush().map_err(|source| CliError::Io { path: csv_path.to_path_buf(), source: source.into() })?;
    Ok(())
}
