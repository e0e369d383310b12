// crates/elevator-judge-core/tests/scenarios.rs
// ============================================================================
// Module: End-To-End Scenario Tests
// Description: Concrete input/output pairs exercising one invariant each.
// Purpose: Pin down the observable behaviour of `validate` against literal
//          traces, independent of the unit tests inside each layer.
// ============================================================================

//! Concrete end-to-end scenarios over literal request streams and logs.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions fail fast on the unexpected case"
)]

use elevator_judge_core::JudgeError;
use elevator_judge_core::core::time::Timestamp;
use elevator_judge_core::score;
use elevator_judge_core::world::ValidationError;

fn max_time() -> Timestamp {
    Timestamp::new(220.0).expect("220.0 is a valid timestamp")
}

#[test]
fn boarding_at_a_floor_the_passenger_has_not_reached_is_rejected() {
    let input = "[1.0]1-PRI-1-FROM-F1-TO-F2\n";
    let output = "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::PassengerState { .. }))
    ));
}

#[test]
fn an_empty_elevator_with_no_assignment_or_task_may_not_arrive() {
    let input = "[1.0]1-PRI-1-FROM-F1-TO-F2\n";
    let output = "[1.0]ARRIVE-F2-1\n";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::DoorOrElevatorPosition { .. }))
    ));
}

#[test]
fn a_clean_single_passenger_delivery_is_accepted_and_scored() {
    let input = "[1.0]1-PRI-1-FROM-F1-TO-F2\n";
    let output = "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
[1.8]OUT-S-1-F2-1
[2.2]CLOSE-F2-1
";
    let world = elevator_judge_core::validate(input, output, max_time()).expect("well-formed trace");
    let report = score::score(&world, None);

    assert!((report.t_max_score - 2.2).abs() < 1e-9);
    assert!((report.wt - 0.8).abs() < 1e-9);
    assert!((report.w - 0.6).abs() < 1e-9);
    assert_eq!(report.arrive_count, 1);
    assert_eq!(report.open_count, 1);
    assert_eq!(report.close_count, 1);
    assert_eq!(report.completed_passengers, 1);
    assert_eq!(report.total_passengers, 1);
}

#[test]
fn sche_begin_after_too_many_intervening_arrives_is_rejected() {
    let input = "\
[1.0]1-PRI-1-FROM-F1-TO-F2
[2.0]SCHE-1-0.2-F3
";
    let output = "\
[2.0]SCHE-ACCEPT-1-0.2-F3
[2.4]ARRIVE-F2-1
[2.8]ARRIVE-F3-1
[3.2]ARRIVE-F4-1
[3.2]SCHE-BEGIN-1
";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::SchedulingProtocol { .. }))
    ));
}

#[test]
fn update_begin_with_a_passenger_still_aboard_is_rejected() {
    let input = "\
[0.0]1-PRI-1-FROM-F1-TO-F4
[3.0]UPDATE-1-2-F3
";
    let output = "\
[0.0]RECEIVE-1-1
[0.0]OPEN-F1-1
[0.0]IN-1-F1-1
[3.0]UPDATE-ACCEPT-1-2-F3
[3.5]UPDATE-BEGIN-1-2
";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::UpdateProtocol { .. }))
    ));
}

#[test]
fn double_carriage_b_reaching_a_s_floor_is_rejected() {
    let input = "\
[0.0]1-PRI-1-FROM-F1-TO-F2
[1.0]UPDATE-1-2-F3
";
    let output = "\
[1.0]UPDATE-ACCEPT-1-2-F3
[1.5]UPDATE-BEGIN-1-2
[2.5]UPDATE-END-1-2
[2.7]ARRIVE-F3-1
[2.9]ARRIVE-F3-2
";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::UpdateProtocol { .. }))
    ));
}

#[test]
fn a_log_that_ends_with_an_open_door_fails_the_final_audit() {
    let input = "[1.0]1-PRI-1-FROM-F1-TO-F2\n";
    let output = "\
[1.0]RECEIVE-1-1
[1.4]ARRIVE-F2-1
[1.4]OPEN-F2-1
[1.8]IN-1-F2-1
[1.8]OUT-S-1-F2-1
";
    let result = elevator_judge_core::validate(input, output, max_time());
    assert!(matches!(
        result,
        Err(JudgeError::Validation(ValidationError::FinalState { .. }))
    ));
}
