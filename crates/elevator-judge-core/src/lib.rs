// crates/elevator-judge-core/src/lib.rs
// ============================================================================
// Module: Elevator Judge Core Library
// Description: Public API surface for the elevator judge core.
// Purpose: Wire together the request-stream parser, the log tokeniser, the
//          world state machine, and the scorer behind one crate.
// Dependencies: crate::{core, input, output, world, error, score}
// ============================================================================

//! ## Overview
//! `elevator-judge-core` validates a contestant's elevator-control log
//! against a replayed world state machine and, once a run is Accepted,
//! scores it on throughput, weighted wait time, and energy use. It is
//! backend-agnostic: the three CLI binaries in `elevator-judge-cli` are thin
//! wrappers over [`validate`] and [`score::score`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod error;
pub mod input;
pub mod output;
pub mod score;
pub mod world;

/// Shared bracketed-timestamp line grammar used by both parsers.
mod line;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::JudgeError;

// ============================================================================
// SECTION: Convenience Entry Point
// ============================================================================

/// Parses a request stream and a contestant's output log, replays every
/// event against a fresh [`world::World`], and runs the final-state audit.
///
/// Returns the finished world so callers (the scorer, or tests) can inspect
/// passenger and elevator state without re-parsing.
///
/// # Errors
/// Returns the first [`JudgeError`] encountered, in the order: malformed
/// request stream, malformed output line, or violated world invariant.
pub fn validate(
    input_text: &str,
    output_text: &str,
    max_time: core::time::Timestamp,
) -> Result<world::World, JudgeError> {
    let stream = input::parse_request_stream(input_text)?;
    let mut world = world::World::new(stream, max_time);

    for raw_line in output_text.lines() {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let timed = output::parse_event_line(trimmed)?;
        world.apply(timed)?;
    }

    world.finish()?;
    Ok(world)
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use super::*;

    #[test]
    fn validate_accepts_a_well_formed_single_passenger_run() {
        let input = "[1.0]1-PRI-1-FROM-F1-TO-F2\n";
        let output = "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
[1.8]OUT-S-1-F2-1
[2.2]CLOSE-F2-1
";
        let world = validate(input, output, core::time::Timestamp::new(220.0).unwrap()).unwrap();
        assert_eq!(world.counts().arrive, 1);
    }

    #[test]
    fn validate_rejects_a_malformed_request_stream() {
        let result = validate("not a line\n", "", core::time::Timestamp::new(220.0).unwrap());
        assert!(matches!(result, Err(JudgeError::Input(_))));
    }
}
