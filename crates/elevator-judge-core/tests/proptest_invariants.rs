// crates/elevator-judge-core/tests/proptest_invariants.rs
// ============================================================================
// Module: Quantified Invariant Property Tests
// Description: Property tests for the timing and capacity invariants that
//              must hold for any Accepted trace.
// Purpose: Cover the boundary behaviours a handful of literal scenarios
//          cannot, across a wide range of timing jitter.
// ============================================================================

//! Property-based tests for the timing-tolerance and capacity invariants.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions fail fast on the unexpected case"
)]

use elevator_judge_core::JudgeError;
use elevator_judge_core::core::time::Timestamp;
use elevator_judge_core::world::ValidationError;
use proptest::prelude::*;

fn max_time() -> Timestamp {
    Timestamp::new(220.0).expect("220.0 is a valid timestamp")
}

/// Builds the single-passenger trace that opens with `RECEIVE` then
/// `ARRIVE`s from `F1` to `F2` after `delay` seconds.
fn trace_with_arrive_delay(delay: f64) -> (String, String) {
    let input = "[0.0]1-PRI-1-FROM-F1-TO-F2\n".to_owned();
    let output = format!(
        "[0.0]RECEIVE-1-1\n[{delay:.1}]ARRIVE-F2-1\n",
    );
    (input, output)
}

/// Builds the single-passenger trace that `OPEN`s at `F2` then `CLOSE`s
/// `dwell` seconds later.
fn trace_with_close_dwell(dwell: f64) -> (String, String) {
    let input = "[0.0]1-PRI-1-FROM-F1-TO-F2\n".to_owned();
    let output = format!(
        "[0.0]RECEIVE-1-1\n[0.4]ARRIVE-F2-1\n[0.4]OPEN-F2-1\n[{:.1}]CLOSE-F2-1\n",
        0.4 + dwell,
    );
    (input, output)
}

proptest! {
    #[test]
    fn arrive_faster_than_the_default_speed_always_rejects(tenths in 1_u32..3) {
        let delay = f64::from(tenths) / 10.0;
        prop_assume!(delay + 1e-6 < 0.4);
        let (input, output) = trace_with_arrive_delay(delay);
        let result = elevator_judge_core::validate(&input, &output, max_time());
        prop_assert!(matches!(
            result,
            Err(JudgeError::Validation(ValidationError::MovementTiming { .. }))
        ));
    }

    #[test]
    fn arrive_at_or_above_the_default_speed_never_rejects_on_timing(tenths in 4_u32..20) {
        let delay = f64::from(tenths) / 10.0;
        let (input, output) = trace_with_arrive_delay(delay);
        let result = elevator_judge_core::validate(&input, &output, max_time());
        prop_assert!(!matches!(
            result,
            Err(JudgeError::Validation(ValidationError::MovementTiming { .. }))
        ));
    }

    #[test]
    fn close_before_the_minimum_dwell_always_rejects(tenths in 0_u32..4) {
        let dwell = f64::from(tenths) / 10.0;
        prop_assume!(dwell + 1e-6 < 0.4);
        let (input, output) = trace_with_close_dwell(dwell);
        let result = elevator_judge_core::validate(&input, &output, max_time());
        prop_assert!(matches!(
            result,
            Err(JudgeError::Validation(ValidationError::MovementTiming { .. }))
        ));
    }

    #[test]
    fn close_at_or_after_the_minimum_dwell_never_rejects_on_timing(tenths in 4_u32..20) {
        let dwell = f64::from(tenths) / 10.0;
        let (input, output) = trace_with_close_dwell(dwell);
        let result = elevator_judge_core::validate(&input, &output, max_time());
        prop_assert!(!matches!(
            result,
            Err(JudgeError::Validation(ValidationError::MovementTiming { .. }))
        ));
    }

    #[test]
    fn a_seventh_passenger_never_boards_the_same_elevator(extra in 1_u32..3) {
        let total = 6 + extra;
        let mut input = String::new();
        let mut output = String::new();
        for id in 1..=total {
            input.push_str(&format!("[0.0]{id}-PRI-1-FROM-F2-TO-F1\n"));
            output.push_str(&format!("[0.0]RECEIVE-{id}-1\n"));
        }
        output.push_str("[0.4]ARRIVE-F2-1\n[0.4]OPEN-F2-1\n");
        for id in 1..=total {
            output.push_str(&format!("[0.4]IN-{id}-F2-1\n"));
        }

        let result = elevator_judge_core::validate(&input, &output, max_time());
        prop_assert!(matches!(
            result,
            Err(JudgeError::Validation(ValidationError::DoorOrElevatorPosition { .. }))
        ));
    }
}
