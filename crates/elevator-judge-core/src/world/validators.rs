// crates/elevator-judge-core/src/world/validators.rs
// ============================================================================
// Module: Event Validators
// Description: The precondition/effect pair for each of the twelve output
//              event kinds, plus the final-state audit.
// Purpose: Implement §4.3 of the component design: one function per event
//          kind, each returning the first violated invariant it finds.
// Dependencies: core, world::state
// ============================================================================

//! ## Overview
//! Every function here follows the same shape: clone the relevant elevator
//! and/or passenger state, check every precondition against the clone, then
//! commit the effect back into the [`World`] only once every check passes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::elevator::CarriageRole;
use crate::core::elevator::DoubleCarriage;
use crate::core::elevator::Mode;
use crate::core::elevator::ScheTask;
use crate::core::elevator::UpdateTask;
use crate::core::elevator::CAPACITY;
use crate::core::elevator::DEFAULT_SPEED;
use crate::core::elevator::DOUBLE_CARRIAGE_SPEED;
use crate::core::elevator::MIN_DOOR_OPEN_SECONDS;
use crate::core::elevator::MIN_SCHE_STOP_SECONDS;
use crate::core::elevator::MIN_UPDATE_BEGIN_TO_END_SECONDS;
use crate::core::elevator::SCHE_MAX_ARRIVES_BEFORE_BEGIN;
use crate::core::elevator::SCHE_WINDOW_SECONDS;
use crate::core::elevator::UPDATE_WINDOW_SECONDS;
use crate::core::floor::Floor;
use crate::core::floor::FloorRange;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::passenger::PassengerStatus;
use crate::core::time::Timestamp;
use crate::core::time::TOLERANCE;
use crate::world::state::Assignment;
use crate::world::state::ValidationError;
use crate::world::state::World;

// ============================================================================
// SECTION: Movement and Doors
// ============================================================================

/// Validates and applies an ARRIVE event.
pub(crate) fn arrive(
    world: &mut World,
    time: Timestamp,
    floor: Floor,
    id: ElevatorId,
) -> Result<(), ValidationError> {
    let mut car = world.elevator(id).clone();

    if car.door_open {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "ARRIVE with the door open".to_owned(),
        });
    }
    if car.mode.is_frozen() {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "ARRIVE while UPDATING or DISABLED".to_owned(),
        });
    }
    if !car.floor.is_adjacent(floor) {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: format!("ARRIVE at {floor} is not adjacent to {}", car.floor),
        });
    }
    if !car.mode.floor_range().contains(floor) {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: format!("ARRIVE at {floor} is outside the elevator's valid range"),
        });
    }
    let has_live_assignment = world.assignments.values().any(|assignment| assignment.elevator == id);
    if car.occupants.is_empty() && !has_live_assignment && !car.mode.has_pending_task() {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "ARRIVE with an empty car, no live assignment, and no scheduling/update task".to_owned(),
        });
    }
    let elapsed = time.since(car.last_action);
    if elapsed + TOLERANCE < car.speed {
        return Err(ValidationError::MovementTiming {
            time,
            elevator: id,
            detail: format!("ARRIVE after {elapsed:.4}s, faster than its speed of {}s", car.speed),
        });
    }
    if let Mode::Double(carriage) = car.mode {
        let partner_floor = world.elevator(carriage.partner).floor;
        let (upper, lower) = match carriage.role {
            CarriageRole::Upper => (floor, partner_floor),
            CarriageRole::Lower => (partner_floor, floor),
        };
        if lower.index() >= upper.index() {
            let (a, b) = match carriage.role {
                CarriageRole::Upper => (id, carriage.partner),
                CarriageRole::Lower => (carriage.partner, id),
            };
            return Err(ValidationError::UpdateProtocol {
                time,
                a,
                b,
                detail: "double-carriage B must remain strictly below A".to_owned(),
            });
        }
    }

    car.floor = floor;
    car.last_action = time;
    car.last_arrive = Some(time);
    match &mut car.mode {
        Mode::SchePending(task) => task.arrive_count += 1,
        Mode::UpdatePending(task) => task.arrive_count += 1,
        _ => {}
    }
    *world.elevator_mut(id) = car;
    Ok(())
}

/// Validates and applies an OPEN event.
pub(crate) fn open(world: &mut World, time: Timestamp, floor: Floor, id: ElevatorId) -> Result<(), ValidationError> {
    let mut car = world.elevator(id).clone();

    if car.floor != floor {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "OPEN at a floor the elevator is not at".to_owned(),
        });
    }
    if car.door_open {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "OPEN while the door is already open".to_owned(),
        });
    }
    if car.mode.is_frozen() {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "OPEN while UPDATING or DISABLED".to_owned(),
        });
    }
    if let Mode::ScheMoving(task) = &car.mode {
        if task.target != floor {
            return Err(ValidationError::SchedulingProtocol {
                time,
                elevator: id,
                detail: "OPEN before reaching the scheduled target".to_owned(),
            });
        }
    }

    let initial_idle = car.last_arrive.is_none() && floor == Floor::initial() && time == Timestamp::zero();
    if !initial_idle {
        let opens_no_earlier_than_arrival = car
            .last_arrive
            .is_some_and(|last_arrive| !time.strictly_before(last_arrive));
        if !opens_no_earlier_than_arrival {
            return Err(ValidationError::DoorOrElevatorPosition {
                time,
                elevator: id,
                detail: "OPEN precedes the elevator's last ARRIVE at this floor".to_owned(),
            });
        }
    }

    car.door_open = true;
    car.last_action = time;
    car.last_open = Some(time);
    if let Mode::ScheMoving(task) = car.mode {
        car.mode = Mode::ScheStopping(task);
    }
    *world.elevator_mut(id) = car;
    Ok(())
}

/// Validates and applies a CLOSE event.
pub(crate) fn close(world: &mut World, time: Timestamp, floor: Floor, id: ElevatorId) -> Result<(), ValidationError> {
    let mut car = world.elevator(id).clone();

    if car.floor != floor {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "CLOSE at a floor the elevator is not at".to_owned(),
        });
    }
    if !car.door_open {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "CLOSE while the door is already closed".to_owned(),
        });
    }
    if matches!(car.mode, Mode::Disabled) {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "CLOSE while DISABLED".to_owned(),
        });
    }
    let Some(open_time) = car.last_open else {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator: id,
            detail: "CLOSE without a prior OPEN".to_owned(),
        });
    };
    let elapsed = time.since(open_time);
    let minimum = if matches!(car.mode, Mode::ScheStopping(_)) {
        MIN_SCHE_STOP_SECONDS
    } else {
        MIN_DOOR_OPEN_SECONDS
    };
    if elapsed + TOLERANCE < minimum {
        return Err(ValidationError::MovementTiming {
            time,
            elevator: id,
            detail: format!("CLOSE after {elapsed:.4}s open, short of the required {minimum}s"),
        });
    }

    car.door_open = false;
    car.last_action = time;
    car.last_close = Some(time);
    *world.elevator_mut(id) = car;
    Ok(())
}

// ============================================================================
// SECTION: Boarding and Alighting
// ============================================================================

/// Validates and applies an IN event.
pub(crate) fn enter(
    world: &mut World,
    time: Timestamp,
    passenger: PassengerId,
    floor: Floor,
    elevator: ElevatorId,
) -> Result<(), ValidationError> {
    let car = world.elevator(elevator).clone();
    if car.floor != floor || !car.door_open {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "IN at a floor the elevator is not at, or with the door closed".to_owned(),
        });
    }
    if matches!(car.mode, Mode::ScheStopping(_)) {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "IN during a mandatory scheduling stop".to_owned(),
        });
    }
    if car.occupants.len() >= CAPACITY {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "IN exceeds elevator capacity".to_owned(),
        });
    }

    let mut rider = world
        .passengers
        .get(&passenger)
        .cloned()
        .ok_or_else(|| ValidationError::PassengerState {
            time,
            passenger,
            detail: "IN references a passenger that does not yet exist".to_owned(),
        })?;
    if rider.status != PassengerStatus::Waiting || rider.elevator != Some(elevator) {
        return Err(ValidationError::PassengerState {
            time,
            passenger,
            detail: "IN without a matching WAITING assignment to this elevator".to_owned(),
        });
    }
    if rider.current_floor != floor {
        return Err(ValidationError::PassengerState {
            time,
            passenger,
            detail: "IN at a floor the passenger is not at".to_owned(),
        });
    }

    let assignment =
        world
            .assignments
            .get(&passenger)
            .copied()
            .ok_or_else(|| ValidationError::AssignmentMissing {
                time,
                passenger,
                elevator,
                detail: "IN without a live RECEIVE".to_owned(),
            })?;
    if assignment.elevator != elevator || time.strictly_before(assignment.receive_time) {
        return Err(ValidationError::AssignmentMissing {
            time,
            passenger,
            elevator,
            detail: "IN does not match its RECEIVE".to_owned(),
        });
    }

    rider.status = PassengerStatus::Inside;
    world.passengers.insert(passenger, rider);
    world.assignments.remove(&passenger);
    world.elevator_mut(elevator).occupants.push(passenger);
    Ok(())
}

/// Validates and applies an OUT event.
pub(crate) fn exit(
    world: &mut World,
    time: Timestamp,
    success: bool,
    passenger: PassengerId,
    floor: Floor,
    elevator: ElevatorId,
) -> Result<(), ValidationError> {
    let car = world.elevator(elevator).clone();
    if car.floor != floor || !car.door_open {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "OUT at a floor the elevator is not at, or with the door closed".to_owned(),
        });
    }
    if !car.contains(passenger) {
        return Err(ValidationError::PassengerState {
            time,
            passenger,
            detail: "OUT for a passenger not inside this elevator".to_owned(),
        });
    }
    let mut rider = world
        .passengers
        .get(&passenger)
        .cloned()
        .ok_or_else(|| ValidationError::PassengerState {
            time,
            passenger,
            detail: "OUT references a passenger that does not yet exist".to_owned(),
        })?;
    if success && rider.destination != floor {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "OUT-S at a floor that is not the passenger's destination".to_owned(),
        });
    }

    world.elevator_mut(elevator).occupants.retain(|candidate| *candidate != passenger);
    if success {
        rider.status = PassengerStatus::Completed;
        rider.completion_time = Some(time);
    } else {
        rider.status = if matches!(car.mode, Mode::ScheStopping(_)) {
            PassengerStatus::FailedOut
        } else {
            PassengerStatus::Outside
        };
    }
    rider.current_floor = floor;
    rider.elevator = None;
    world.passengers.insert(passenger, rider);
    world.assignments.remove(&passenger);
    Ok(())
}

// ============================================================================
// SECTION: Assignment
// ============================================================================

/// Validates and applies a RECEIVE event.
pub(crate) fn receive(
    world: &mut World,
    time: Timestamp,
    passenger: PassengerId,
    elevator: ElevatorId,
) -> Result<(), ValidationError> {
    let car = world.elevator(elevator).clone();
    if car.mode.rejects_receive() {
        return Err(ValidationError::DoorOrElevatorPosition {
            time,
            elevator,
            detail: "RECEIVE while the elevator cannot accept assignments".to_owned(),
        });
    }
    let mut rider = world
        .passengers
        .get(&passenger)
        .cloned()
        .ok_or_else(|| ValidationError::PassengerState {
            time,
            passenger,
            detail: "RECEIVE references a passenger that does not yet exist".to_owned(),
        })?;
    if !rider.status.is_receivable() {
        return Err(ValidationError::PassengerState {
            time,
            passenger,
            detail: "RECEIVE while the passenger is not OUTSIDE or FAILED_OUT".to_owned(),
        });
    }
    if world.assignments.contains_key(&passenger) {
        return Err(ValidationError::PassengerState {
            time,
            passenger,
            detail: "RECEIVE while an assignment is already active".to_owned(),
        });
    }

    rider.status = PassengerStatus::Waiting;
    rider.elevator = Some(elevator);
    rider.last_receive_time = Some(time);
    world.passengers.insert(passenger, rider);
    world
        .assignments
        .insert(passenger, Assignment { elevator, receive_time: time });
    Ok(())
}

/// Cancels every active assignment held by `elevator`, restoring those
/// passengers to OUTSIDE.
fn cancel_assignments_for(world: &mut World, elevator: ElevatorId) {
    let affected: Vec<PassengerId> = world
        .assignments
        .iter()
        .filter(|(_, assignment)| assignment.elevator == elevator)
        .map(|(passenger, _)| *passenger)
        .collect();
    for passenger in affected {
        world.assignments.remove(&passenger);
        if let Some(rider) = world.passengers.get_mut(&passenger) {
            rider.status = PassengerStatus::Outside;
            rider.elevator = None;
        }
    }
}

// ============================================================================
// SECTION: Scheduling Protocol
// ============================================================================

/// Validates and applies a SCHE-ACCEPT event.
pub(crate) fn sche_accept(
    world: &mut World,
    time: Timestamp,
    id: ElevatorId,
    speed: f64,
    target: Floor,
) -> Result<(), ValidationError> {
    {
        let car = world.elevator(id);
        if !matches!(car.mode, Mode::Normal) {
            return Err(ValidationError::SchedulingProtocol {
                time,
                elevator: id,
                detail: "SCHE-ACCEPT while not NORMAL".to_owned(),
            });
        }
        if car.has_updated {
            return Err(ValidationError::SchedulingProtocol {
                time,
                elevator: id,
                detail: "SCHE-ACCEPT after a prior UPDATE".to_owned(),
            });
        }
    }

    let Some(index) = world
        .pending_schedule
        .iter()
        .position(|request| request.elevator == id && request.target == target && request.time.approx_eq(time))
    else {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-ACCEPT does not match a pending SCHE request".to_owned(),
        });
    };
    let request = world.pending_schedule.remove(index);
    if (request.speed - speed).abs() > f64::EPSILON {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-ACCEPT speed does not match the requested speed".to_owned(),
        });
    }

    let task = ScheTask {
        target,
        temp_speed: speed,
        accept_time: time,
        begin_time: None,
        arrive_count: 0,
    };
    let car = world.elevator_mut(id);
    car.mode = Mode::SchePending(task);
    car.has_scheduled = true;
    car.last_action = time;
    Ok(())
}

/// Validates and applies a SCHE-BEGIN event.
pub(crate) fn sche_begin(world: &mut World, time: Timestamp, id: ElevatorId) -> Result<(), ValidationError> {
    let car = world.elevator(id).clone();
    let Mode::SchePending(mut task) = car.mode else {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-BEGIN while not SCHE_PENDING".to_owned(),
        });
    };
    if car.door_open {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-BEGIN with the door open".to_owned(),
        });
    }
    if task.arrive_count > SCHE_MAX_ARRIVES_BEFORE_BEGIN {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: format!("SCHE-BEGIN after {} ARRIVEs since ACCEPT", task.arrive_count),
        });
    }

    task.begin_time = Some(time);
    task.arrive_count = 0;
    cancel_assignments_for(world, id);

    let car = world.elevator_mut(id);
    car.speed = task.temp_speed;
    car.mode = Mode::ScheMoving(task);
    car.last_action = time;
    Ok(())
}

/// Validates and applies a SCHE-END event.
pub(crate) fn sche_end(world: &mut World, time: Timestamp, id: ElevatorId) -> Result<(), ValidationError> {
    let car = world.elevator(id).clone();
    let Mode::ScheStopping(task) = car.mode else {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-END while not SCHE_STOPPING".to_owned(),
        });
    };
    if car.door_open || !car.occupants.is_empty() {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-END with the door open or passengers aboard".to_owned(),
        });
    }
    if car.floor != task.target {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-END away from the scheduled target".to_owned(),
        });
    }
    let follows_close = car.last_close.is_some_and(|close_time| !time.strictly_before(close_time));
    if !follows_close {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: "SCHE-END precedes its terminating CLOSE".to_owned(),
        });
    }
    let elapsed = time.since(task.accept_time);
    if elapsed > SCHE_WINDOW_SECONDS + TOLERANCE {
        return Err(ValidationError::SchedulingProtocol {
            time,
            elevator: id,
            detail: format!("SCHE-END after {elapsed:.4}s, exceeding the {SCHE_WINDOW_SECONDS}s window"),
        });
    }

    let car = world.elevator_mut(id);
    car.mode = Mode::Normal;
    car.speed = DEFAULT_SPEED;
    car.last_action = time;
    Ok(())
}

// ============================================================================
// SECTION: Dual-Shaft Update Protocol
// ============================================================================

/// Validates and applies an UPDATE-ACCEPT event.
pub(crate) fn update_accept(
    world: &mut World,
    time: Timestamp,
    a: ElevatorId,
    b: ElevatorId,
    target: Floor,
) -> Result<(), ValidationError> {
    if a == b {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "UPDATE-ACCEPT names the same elevator twice".to_owned(),
        });
    }
    for id in [a, b] {
        let car = world.elevator(id);
        if !matches!(car.mode, Mode::Normal) {
            return Err(ValidationError::UpdateProtocol {
                time,
                a,
                b,
                detail: format!("elevator {id} is not NORMAL"),
            });
        }
        if car.has_scheduled || car.has_updated {
            return Err(ValidationError::UpdateProtocol {
                time,
                a,
                b,
                detail: format!("elevator {id} was already involved in a SCHE or UPDATE"),
            });
        }
    }

    let Some(index) = world.pending_update.iter().position(|request| {
        let names_pair = (request.a == a && request.b == b) || (request.a == b && request.b == a);
        names_pair && request.target == target && request.time.approx_eq(time)
    }) else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "UPDATE-ACCEPT does not match a pending UPDATE request".to_owned(),
        });
    };
    world.pending_update.remove(index);

    for (id, partner) in [(a, b), (b, a)] {
        let task = UpdateTask {
            partner,
            target,
            accept_time: time,
            begin_time: None,
            arrive_count: 0,
        };
        let car = world.elevator_mut(id);
        car.mode = Mode::UpdatePending(task);
        car.has_updated = true;
        car.last_action = time;
    }
    Ok(())
}

/// Validates and applies an UPDATE-BEGIN event.
pub(crate) fn update_begin(world: &mut World, time: Timestamp, a: ElevatorId, b: ElevatorId) -> Result<(), ValidationError> {
    let mut tasks = Vec::with_capacity(2);
    for id in [a, b] {
        let car = world.elevator(id).clone();
        let Mode::UpdatePending(task) = car.mode else {
            return Err(ValidationError::UpdateProtocol {
                time,
                a,
                b,
                detail: format!("elevator {id} is not UPDATE_PENDING"),
            });
        };
        if car.door_open || !car.occupants.is_empty() {
            return Err(ValidationError::UpdateProtocol {
                time,
                a,
                b,
                detail: format!("elevator {id} has an open door or passengers aboard"),
            });
        }
        tasks.push((id, task));
    }

    cancel_assignments_for(world, a);
    cancel_assignments_for(world, b);

    for (id, mut task) in tasks {
        task.begin_time = Some(time);
        let car = world.elevator_mut(id);
        car.mode = Mode::Updating(task);
        car.last_action = time;
    }
    Ok(())
}

/// Validates and applies an UPDATE-END event.
pub(crate) fn update_end(world: &mut World, time: Timestamp, a: ElevatorId, b: ElevatorId) -> Result<(), ValidationError> {
    let car_a = world.elevator(a).clone();
    let car_b = world.elevator(b).clone();
    let Mode::Updating(task_a) = car_a.mode else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: format!("elevator {a} is not UPDATING"),
        });
    };
    let Mode::Updating(task_b) = car_b.mode else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: format!("elevator {b} is not UPDATING"),
        });
    };
    if task_a.partner != b || task_b.partner != a {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "UPDATE-END elevators are not partnered".to_owned(),
        });
    }
    let Some(begin_time) = task_a.begin_time else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "UPDATE-END before UPDATE-BEGIN".to_owned(),
        });
    };
    let elapsed_begin = time.since(begin_time);
    if elapsed_begin + TOLERANCE < MIN_UPDATE_BEGIN_TO_END_SECONDS {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: format!("UPDATE-END only {elapsed_begin:.4}s after UPDATE-BEGIN"),
        });
    }
    let elapsed_accept = time.since(task_a.accept_time);
    if elapsed_accept > UPDATE_WINDOW_SECONDS + TOLERANCE {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: format!("UPDATE-END after {elapsed_accept:.4}s, exceeding the {UPDATE_WINDOW_SECONDS}s window"),
        });
    }

    let target = task_a.target;
    let Some(upper_floor) = target.up() else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "scheduled target has no floor above it".to_owned(),
        });
    };
    let Some(lower_floor) = target.down() else {
        return Err(ValidationError::UpdateProtocol {
            time,
            a,
            b,
            detail: "scheduled target has no floor below it".to_owned(),
        });
    };
    let upper_range = FloorRange { min: target, max: Floor::max() };
    let lower_range = FloorRange { min: Floor::min(), max: target };

    let upper = world.elevator_mut(a);
    upper.mode = Mode::Double(DoubleCarriage { partner: b, role: CarriageRole::Upper, range: upper_range });
    upper.floor = upper_floor;
    upper.speed = DOUBLE_CARRIAGE_SPEED;
    upper.last_action = time;

    let lower = world.elevator_mut(b);
    lower.mode = Mode::Double(DoubleCarriage { partner: a, role: CarriageRole::Lower, range: lower_range });
    lower.floor = lower_floor;
    lower.speed = DOUBLE_CARRIAGE_SPEED;
    lower.last_action = time;
    Ok(())
}

// ============================================================================
// SECTION: Final-State Audit
// ============================================================================

/// Runs the end-of-log audit described in §4.3.
pub(crate) fn final_state_audit(world: &World) -> Result<(), ValidationError> {
    if !world.pending_passengers.is_empty() {
        return Err(ValidationError::FinalState {
            detail: format!("{} passenger request(s) were never introduced", world.pending_passengers.len()),
        });
    }
    for passenger in world.passengers.values() {
        if !passenger.is_completed() {
            return Err(ValidationError::FinalState {
                detail: format!("passenger {} never reached COMPLETED", passenger.id),
            });
        }
    }
    for elevator in &world.elevators {
        if matches!(elevator.mode, Mode::Disabled) {
            continue;
        }
        if elevator.door_open {
            return Err(ValidationError::FinalState {
                detail: format!("elevator {} ended with its door open", elevator.id),
            });
        }
        if !elevator.occupants.is_empty() {
            return Err(ValidationError::FinalState {
                detail: format!("elevator {} ended with passengers aboard", elevator.id),
            });
        }
    }
    if world.last_time.seconds() > world.max_time.seconds() + TOLERANCE {
        return Err(ValidationError::FinalState {
            detail: format!("timeline {} exceeds max time {}", world.last_time, world.max_time),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use super::*;
    use crate::input::PassengerRequest;
    use crate::input::RequestStream;
    use crate::output::Event;
    use crate::output::TimedEvent;

    fn floor(name: &str) -> Floor {
        Floor::parse(name).unwrap()
    }

    fn one_passenger_world() -> World {
        let mut stream = RequestStream::default();
        let id = PassengerId::new(1);
        stream.passengers.insert(
            id,
            PassengerRequest {
                id,
                priority: 1,
                source: floor("F1"),
                destination: floor("F2"),
                time: Timestamp::zero(),
            },
        );
        World::new(stream, Timestamp::new(220.0).unwrap())
    }

    #[test]
    fn happy_path_delivers_a_single_passenger() {
        let mut world = one_passenger_world();
        let elevator = ElevatorId::new(1).unwrap();
        let passenger = PassengerId::new(1);

        world
            .apply(TimedEvent { time: Timestamp::zero(), event: Event::Receive { passenger, elevator } })
            .unwrap();
        world
            .apply(TimedEvent { time: Timestamp::new(0.4).unwrap(), event: Event::Arrive { floor: floor("F2"), elevator } })
            .unwrap();
        world
            .apply(TimedEvent { time: Timestamp::new(0.4).unwrap(), event: Event::Open { floor: floor("F2"), elevator } })
            .unwrap();
        world
            .apply(TimedEvent {
                time: Timestamp::new(0.8).unwrap(),
                event: Event::In { passenger, floor: floor("F2"), elevator },
            })
            .unwrap();
        world
            .apply(TimedEvent {
                time: Timestamp::new(0.8).unwrap(),
                event: Event::Out { success: true, passenger, floor: floor("F2"), elevator },
            })
            .unwrap();
        world
            .apply(TimedEvent { time: Timestamp::new(1.2).unwrap(), event: Event::Close { floor: floor("F2"), elevator } })
            .unwrap();

        world.finish().unwrap();
    }

    #[test]
    fn in_at_the_wrong_floor_is_rejected() {
        let mut world = one_passenger_world();
        let elevator = ElevatorId::new(1).unwrap();
        let passenger = PassengerId::new(1);

        world
            .apply(TimedEvent { time: Timestamp::zero(), event: Event::Receive { passenger, elevator } })
            .unwrap();
        world
            .apply(TimedEvent { time: Timestamp::new(0.4).unwrap(), event: Event::Arrive { floor: floor("F2"), elevator } })
            .unwrap();
        world
            .apply(TimedEvent { time: Timestamp::new(0.4).unwrap(), event: Event::Open { floor: floor("F2"), elevator } })
            .unwrap();
        let result = world.apply(TimedEvent {
            time: Timestamp::new(0.8).unwrap(),
            event: Event::In { passenger, floor: floor("F2"), elevator },
        });
        assert!(matches!(result, Err(ValidationError::PassengerState { .. })));
    }

    #[test]
    fn arrive_faster_than_speed_is_rejected() {
        let mut world = one_passenger_world();
        let elevator = ElevatorId::new(1).unwrap();
        let result = world.apply(TimedEvent {
            time: Timestamp::new(0.1).unwrap(),
            event: Event::Arrive { floor: floor("F2"), elevator },
        });
        assert!(matches!(result, Err(ValidationError::MovementTiming { .. })));
    }
}
