// crates/elevator-judge-cli/src/bin/gen.rs
// ============================================================================
// Binary: elevator-gen
// Description: Generates a random passenger/scheduling/update request stream.
// Purpose: Produce input files for the judge and scorer without hand-writing
//          fixtures; doubles as the dual-shaft generator when --num-update
//          is non-zero.
// Dependencies: clap, rand, elevator-judge-core
// ============================================================================

//! ## Overview
//! Draws a base stream of passenger requests plus a configurable number of
//! `SCHE` commands and, when requested, layers `UPDATE` commands on top for
//! the dual-shaft track. The whole stream is written to stdout in
//! chronological order, matching the shape [`elevator_judge_core::input`]
//! consumes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::collections::HashSet;
use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use elevator_judge_core::core::floor::FLOOR_NAMES;
use elevator_judge_core::core::floor::SCHEDULE_FLOOR_NAMES;
use elevator_judge_core::core::ids::ELEVATOR_COUNT;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum number of passenger requests a generated stream may contain.
const MIN_REQUESTS: u32 = 1;

/// Maximum number of passenger requests a generated stream may contain.
const MAX_REQUESTS: u32 = 100;

/// Legal scheduling speeds, seconds per floor.
const SCHEDULE_SPEEDS: [&str; 4] = ["0.2", "0.3", "0.4", "0.5"];

/// Legal passenger priorities.
const PRIORITIES: [u32; 2] = [1, 2];

/// [`ELEVATOR_COUNT`] narrowed once, since every draw site needs a `u8`.
#[allow(clippy::cast_possible_truncation, reason = "ELEVATOR_COUNT is the literal 6")]
const ELEVATOR_IDS: u8 = ELEVATOR_COUNT as u8;

// ============================================================================
// SECTION: CLI Arguments
// ============================================================================

/// Command-line arguments for `elevator-gen`.
#[derive(Parser, Debug)]
#[command(name = "elevator-gen")]
struct Cli {
    /// Number of distinct passenger requests to draw, before duplication.
    #[arg(long, value_name = "N", default_value_t = 50)]
    num_requests: u32,
    /// Latest timestamp, in seconds, a passenger request may be drawn at.
    #[arg(long, value_name = "N", default_value_t = 50)]
    time_limit: u32,
    /// Seed for reproducible generation; omit for a fresh stream each run.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// How many times each drawn (floor pair, priority) combination repeats.
    #[arg(long, value_name = "N", default_value_t = 1)]
    duplicate_times: u32,
    /// Number of `SCHE` commands to interleave into the stream.
    #[arg(long, value_name = "N", default_value_t = 1)]
    num_schedule: u32,
    /// Minimum separation, in seconds, between two `SCHE` commands on the
    /// same elevator.
    #[arg(long, value_name = "N", default_value_t = 10)]
    schedule_gap: u32,
    /// Number of `UPDATE` commands to interleave; non-zero enables the
    /// dual-shaft generator mode.
    #[arg(long, value_name = "N", default_value_t = 0)]
    num_update: u32,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Every way the generator binary can fail before producing output.
#[derive(Debug, Error)]
enum CliError {
    /// `--num-requests` fell outside the allowed range.
    #[error("--num-requests must be in 1..=100, got {0}")]
    RequestCountOutOfRange(u32),

    /// Writing the generated stream to stdout failed.
    #[error("failed to write generated stream: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// SECTION: Generated Line
// ============================================================================

/// One timestamped line awaiting chronological ordering.
struct GeneratedLine {
    /// Ordering key, in seconds.
    time: f64,
    /// Fully rendered `[t]command` text.
    text: String,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(std::io::stderr(), "Validation Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Draws a request stream and writes it to stdout in chronological order.
///
/// # Errors
/// Returns [`CliError`] if `--num-requests` is out of range or stdout
/// cannot be written.
fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    if !(MIN_REQUESTS..=MAX_REQUESTS).contains(&cli.num_requests) {
        return Err(CliError::RequestCountOutOfRange(cli.num_requests));
    }

    let mut rng = cli.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut lines = generate_passengers(&cli, &mut rng);
    lines.extend(generate_schedules(&cli, &mut rng));
    if cli.num_update > 0 {
        lines.extend(generate_updates(&cli, &mut rng, &lines));
    }

    lines.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut stdout = std::io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{}", line.text)?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Passenger Requests
// ============================================================================

/// Draws `num_requests` distinct (time, floor pair, priority) combinations,
/// each repeated `duplicate_times` times under distinct ids from a shuffled
/// pool, so id order carries no timing signal.
fn generate_passengers(cli: &Cli, rng: &mut StdRng) -> Vec<GeneratedLine> {
    let groups = cli.num_requests as usize;
    let duplicates = cli.duplicate_times.max(1) as usize;
    let total_ids = groups * duplicates;

    let mut id_pool: Vec<u64> = (1..=total_ids as u64).collect();
    id_pool.shuffle(rng);
    let mut next_id = id_pool.into_iter();

    let mut lines = Vec::with_capacity(total_ids);
    for _ in 0..groups {
        let time = draw_request_time(cli.time_limit, rng);
        let priority = PRIORITIES[rng.gen_range(0..PRIORITIES.len())];
        let (source, destination) = draw_distinct_floors(rng);

        for _ in 0..duplicates {
            let Some(id) = next_id.next() else { break };
            lines.push(GeneratedLine {
                time,
                text: format!("[{time:.1}]{id}-PRI-{priority}-FROM-{source}-TO-{destination}"),
            });
        }
    }
    lines
}

/// Draws a one-decimal timestamp uniformly over `[1.0, time_limit]`.
fn draw_request_time(time_limit: u32, rng: &mut StdRng) -> f64 {
    let limit = time_limit.max(1);
    let tenths = rng.gen_range(10..=limit.saturating_mul(10).max(10));
    f64::from(tenths) / 10.0
}

/// Draws two distinct floor names from the full 11-floor universe.
fn draw_distinct_floors(rng: &mut StdRng) -> (&'static str, &'static str) {
    loop {
        let source = FLOOR_NAMES[rng.gen_range(0..FLOOR_NAMES.len())];
        let destination = FLOOR_NAMES[rng.gen_range(0..FLOOR_NAMES.len())];
        if source != destination {
            return (source, destination);
        }
    }
}

// ============================================================================
// SECTION: Scheduling Commands
// ============================================================================

/// Distributes `num_schedule` `SCHE` commands across the six elevators,
/// keeping same-elevator timestamps at least `schedule_gap` seconds apart.
fn generate_schedules(cli: &Cli, rng: &mut StdRng) -> Vec<GeneratedLine> {
    let mut last_time_per_elevator: HashMap<u8, f64> = HashMap::new();
    let mut lines = Vec::with_capacity(cli.num_schedule as usize);

    for i in 0..cli.num_schedule {
        #[allow(clippy::cast_possible_truncation, reason = "schedule counts stay far below u8::MAX")]
        let elevator = 1 + (i as u8 % ELEVATOR_IDS);
        let previous = last_time_per_elevator.get(&elevator).copied().unwrap_or(0.0);
        let time = previous + f64::from(cli.schedule_gap.max(1)) + f64::from(rng.gen_range(0..10)) / 10.0;
        last_time_per_elevator.insert(elevator, time);

        let speed = SCHEDULE_SPEEDS[rng.gen_range(0..SCHEDULE_SPEEDS.len())];
        let target = SCHEDULE_FLOOR_NAMES[rng.gen_range(0..SCHEDULE_FLOOR_NAMES.len())];
        lines.push(GeneratedLine {
            time,
            text: format!("[{time:.1}]SCHE-{elevator}-{speed}-{target}"),
        });
    }
    lines
}

// ============================================================================
// SECTION: Update Commands
// ============================================================================

/// Draws `num_update` `UPDATE` commands, each naming two elevators not yet
/// referenced by another pending `SCHE` or `UPDATE` command.
fn generate_updates(cli: &Cli, rng: &mut StdRng, existing: &[GeneratedLine]) -> Vec<GeneratedLine> {
    let mut used: HashSet<u8> = existing
        .iter()
        .filter_map(|line| extract_schedule_elevator(&line.text))
        .collect();

    let mut lines = Vec::with_capacity(cli.num_update as usize);
    let mut latest_time = existing.iter().map(|line| line.time).fold(0.0_f64, f64::max);

    for _ in 0..cli.num_update {
        let mut candidates: Vec<u8> = (1..=ELEVATOR_IDS).filter(|elevator| !used.contains(elevator)).collect();
        if candidates.len() < 2 {
            break;
        }
        candidates.shuffle(rng);
        let a = candidates[0];
        let b = candidates[1];
        used.insert(a);
        used.insert(b);

        latest_time += 1.0 + f64::from(rng.gen_range(0..10)) / 10.0;
        let target = SCHEDULE_FLOOR_NAMES[rng.gen_range(0..SCHEDULE_FLOOR_NAMES.len())];
        lines.push(GeneratedLine {
            time: latest_time,
            text: format!("[{latest_time:.1}]UPDATE-{a}-{b}-{target}"),
        });
    }
    lines
}

/// Pulls the elevator id out of a rendered `SCHE-<elevator>-...` line, if it
/// is one.
fn extract_schedule_elevator(text: &str) -> Option<u8> {
    let body = text.split(']').nth(1)?;
    let mut tokens = body.split('-');
    if tokens.next()? != "SCHE" {
        return None;
    }
    tokens.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use super::*;

    fn base_cli() -> Cli {
        Cli {
            num_requests: 5,
            time_limit: 20,
            seed: Some(7),
            duplicate_times: 1,
            num_schedule: 2,
            schedule_gap: 10,
            num_update: 0,
        }
    }

    #[test]
    fn generated_passenger_count_matches_duplication() {
        let mut cli = base_cli();
        cli.duplicate_times = 3;
        let mut rng = StdRng::seed_from_u64(1);
        let lines = generate_passengers(&cli, &mut rng);
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn schedule_respects_the_configured_gap() {
        let cli = base_cli();
        let mut rng = StdRng::seed_from_u64(2);
        let lines = generate_schedules(&cli, &mut rng);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn extract_schedule_elevator_ignores_non_schedule_lines() {
        assert_eq!(extract_schedule_elevator("[1.0]SCHE-3-0.4-F3"), Some(3));
        assert_eq!(extract_schedule_elevator("[1.0]1-PRI-1-FROM-F1-TO-F2"), None);
    }
}
