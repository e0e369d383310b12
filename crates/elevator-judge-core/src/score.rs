// crates/elevator-judge-core/src/score.rs
// ============================================================================
// Module: Scorer
// Description: Throughput, weighted wait time, and energy proxy computed
//              over an already-validated world.
// Purpose: Produce the three headline numbers the CLI scorer prints and the
//          row it appends to the results table.
// Dependencies: world
// ============================================================================

//! ## Overview
//! Scoring is a read-only pass over a [`World`] that has already survived
//! [`World::finish`](crate::world::World::finish). It never re-validates;
//! callers are expected to run the judge first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use crate::world::World;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Energy weight per ARRIVE event.
const ARRIVE_WEIGHT: f64 = 0.4;

/// Energy weight per OPEN event.
const OPEN_WEIGHT: f64 = 0.1;

/// Energy weight per CLOSE event.
const CLOSE_WEIGHT: f64 = 0.1;

// ============================================================================
// SECTION: Score Report
// ============================================================================

/// The headline numbers computed for one validated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    /// Larger of the last observed timestamp and the supplied wall-clock
    /// runtime, if any.
    pub t_max_score: f64,
    /// Priority-weighted mean of completion time minus request time.
    /// `f64::INFINITY` if any passenger never completed.
    pub wt: f64,
    /// Energy proxy: `0.4 * arrive + 0.1 * open + 0.1 * close`.
    pub w: f64,
    /// Number of ARRIVE events observed.
    pub arrive_count: u64,
    /// Number of OPEN events observed.
    pub open_count: u64,
    /// Number of CLOSE events observed.
    pub close_count: u64,
    /// Passengers that reached `Completed`.
    pub completed_passengers: usize,
    /// Total passengers in the roster.
    pub total_passengers: usize,
}

/// Computes the [`ScoreReport`] for a world that has finished replaying a
/// contestant's log.
///
/// `wall_clock_runtime`, when supplied, is folded into `t_max_score` as the
/// larger of itself and the last observed timestamp.
#[must_use]
pub fn score(world: &World, wall_clock_runtime: Option<f64>) -> ScoreReport {
    let t_final = world.last_time.seconds();
    let t_max_score = wall_clock_runtime.map_or(t_final, |runtime| t_final.max(runtime));

    let total_passengers = world.passengers().len();
    let mut completed_passengers = 0_usize;
    let mut weighted_wait_total = 0.0_f64;
    let mut weight_total = 0.0_f64;
    let mut every_completed = true;

    for passenger in world.passengers().values() {
        match passenger.completion_time {
            Some(completion) => {
                completed_passengers += 1;
                let wait = completion.seconds() - passenger.request_time.seconds();
                let priority = f64::from(passenger.priority);
                weighted_wait_total += priority * wait;
                weight_total += priority;
            }
            None => every_completed = false,
        }
    }

    let wt = if every_completed && weight_total > 0.0 {
        weighted_wait_total / weight_total
    } else if every_completed {
        0.0
    } else {
        f64::INFINITY
    };

    let counts = world.counts();
    #[allow(clippy::cast_precision_loss, reason = "event counts stay far below f64's exact-integer range")]
    let w = ARRIVE_WEIGHT * counts.arrive as f64 + OPEN_WEIGHT * counts.open as f64 + CLOSE_WEIGHT * counts.close as f64;

    ScoreReport {
        t_max_score,
        wt,
        w,
        arrive_count: counts.arrive,
        open_count: counts.open,
        close_count: counts.close,
        completed_passengers,
        total_passengers,
    }
}

// ============================================================================
// SECTION: Case Label
// ============================================================================

/// Derives the `case` column from an output file path: the last two
/// *directory* components joined by `-` (dropping the filename) when at
/// least two directory components are present, otherwise the immediate
/// parent directory name.
#[must_use]
pub fn case_label(output_path: &Path) -> String {
    let directories: Vec<String> = output_path
        .parent()
        .into_iter()
        .flat_map(path_component_strings)
        .collect();
    match directories.len() {
        0 => String::new(),
        1 => directories[0].clone(),
        len => format!("{}-{}", directories[len - 2], directories[len - 1]),
    }
}

/// Renders a path's components as owned strings, skipping any that are not
/// valid UTF-8.
fn path_component_strings(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.components().filter_map(|component| component.as_os_str().to_str().map(ToOwned::to_owned))
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use std::path::PathBuf;

    use super::*;
    use crate::core::ids::PassengerId;
    use crate::input::PassengerRequest;
    use crate::input::RequestStream;
    use crate::output::Event;
    use crate::output::TimedEvent;
    use crate::core::floor::Floor;
    use crate::core::time::Timestamp;
    use crate::core::ids::ElevatorId;

    #[test]
    fn case_label_joins_the_two_directories_above_the_file() {
        let path = PathBuf::from("log/round-1/output.txt");
        assert_eq!(case_label(&path), "log-round-1");
    }

    #[test]
    fn case_label_falls_back_to_the_single_directory() {
        let path = PathBuf::from("round-1/output.txt");
        assert_eq!(case_label(&path), "round-1");
    }

    #[test]
    fn case_label_is_empty_with_no_directory_at_all() {
        let path = PathBuf::from("output.txt");
        assert_eq!(case_label(&path), "");
    }

    #[test]
    fn incomplete_run_scores_infinite_wait() {
        let mut stream = RequestStream::default();
        let id = PassengerId::new(1);
        stream.passengers.insert(
            id,
            PassengerRequest {
                id,
                priority: 1,
                source: Floor::parse("F1").unwrap(),
                destination: Floor::parse("F2").unwrap(),
                time: Timestamp::zero(),
            },
        );
        let mut world = World::new(stream, Timestamp::new(220.0).unwrap());
        let elevator = ElevatorId::new(1).unwrap();
        world
            .apply(TimedEvent { time: Timestamp::zero(), event: Event::Receive { passenger: id, elevator } })
            .unwrap();
        let report = score(&world, None);
        assert!(report.wt.is_infinite());
    }
}
