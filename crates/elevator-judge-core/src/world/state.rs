// crates/elevator-judge-core/src/world/state.rs
// ============================================================================
// Module: World State
// Description: The authoritative state structure and the top-level event
//              dispatch loop.
// Purpose: Own every elevator and passenger record, the active-assignment
//          table, and the still-pending scheduling/update commands; route
//          each parsed event to its validator.
// Dependencies: core, input, output, world::validators
// ============================================================================

//! ## Overview
//! [`World`] is constructed from a parsed [`RequestStream`](crate::input::RequestStream)
//! and replays a sequence of [`TimedEvent`](crate::output::TimedEvent)s one at
//! a time via [`World::apply`]. The first invariant violation is returned and
//! terminates the replay; callers are expected to stop feeding events once an
//! error is returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::elevator::Elevator;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::passenger::Passenger;
use crate::core::time::Timestamp;
use crate::input::PassengerRequest;
use crate::input::RequestStream;
use crate::input::ScheduleRequest;
use crate::input::UpdateRequest;
use crate::output::Event;
use crate::output::TimedEvent;
use crate::world::validators;

// ============================================================================
// SECTION: Error
// ============================================================================

/// Every way a parsed output event can violate the world specification.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A timestamp decreased, or the log ran past the configured max time.
    #[error("[{time}] TimestampOrder: {detail}")]
    TimestampOrder {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Human-readable detail.
        detail: String,
    },

    /// An ARRIVE was too fast, or a door opened for too short a time.
    #[error("[{time}] MovementTiming: {detail} (elevator {elevator})")]
    MovementTiming {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Elevator at fault.
        elevator: ElevatorId,
        /// Human-readable detail.
        detail: String,
    },

    /// OPEN/CLOSE/IN/OUT occurred at the wrong floor, wrong door state, or
    /// capacity was exceeded.
    #[error("[{time}] DoorOrElevatorPosition: {detail} (elevator {elevator})")]
    DoorOrElevatorPosition {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Elevator at fault.
        elevator: ElevatorId,
        /// Human-readable detail.
        detail: String,
    },

    /// IN/OUT/RECEIVE was applied to a passenger in an incompatible status.
    #[error("[{time}] PassengerState: {detail} (passenger {passenger})")]
    PassengerState {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Passenger at fault.
        passenger: PassengerId,
        /// Human-readable detail.
        detail: String,
    },

    /// IN was applied without a live RECEIVE.
    #[error("[{time}] AssignmentMissing: {detail} (passenger {passenger}, elevator {elevator})")]
    AssignmentMissing {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Passenger at fault.
        passenger: PassengerId,
        /// Elevator at fault.
        elevator: ElevatorId,
        /// Human-readable detail.
        detail: String,
    },

    /// Invalid ACCEPT/BEGIN/END ordering, a missed window, residual
    /// passengers, or the wrong floor in the scheduling protocol.
    #[error("[{time}] SchedulingProtocol: {detail} (elevator {elevator})")]
    SchedulingProtocol {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// Elevator at fault.
        elevator: ElevatorId,
        /// Human-readable detail.
        detail: String,
    },

    /// As `SchedulingProtocol`, plus carriage-range or B-above-A violations.
    #[error("[{time}] UpdateProtocol: {detail} (elevators {a}, {b})")]
    UpdateProtocol {
        /// Timestamp of the offending event.
        time: Timestamp,
        /// First elevator in the pair.
        a: ElevatorId,
        /// Second elevator in the pair.
        b: ElevatorId,
        /// Human-readable detail.
        detail: String,
    },

    /// An undelivered passenger, an open door, or a non-empty car at the end
    /// of the log.
    #[error("FinalState: {detail}")]
    FinalState {
        /// Human-readable detail.
        detail: String,
    },
}

// ============================================================================
// SECTION: Active Assignment
// ============================================================================

/// A live RECEIVE not yet resolved by IN, OUT, or a begun scheduling/update
/// task.
#[derive(Debug, Clone, Copy)]
pub struct Assignment {
    /// Elevator this passenger is assigned to.
    pub elevator: ElevatorId,
    /// Timestamp the RECEIVE was processed.
    pub receive_time: Timestamp,
}

// ============================================================================
// SECTION: Event Counters
// ============================================================================

/// Running counts of the three event kinds the scorer's energy proxy uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCounts {
    /// Number of ARRIVE events observed.
    pub arrive: u64,
    /// Number of OPEN events observed.
    pub open: u64,
    /// Number of CLOSE events observed.
    pub close: u64,
}

// ============================================================================
// SECTION: World
// ============================================================================

/// The complete elevator/passenger state machine.
pub struct World {
    pub(crate) elevators: Vec<Elevator>,
    pub(crate) passengers: BTreeMap<PassengerId, Passenger>,
    pub(crate) pending_passengers: BTreeMap<PassengerId, PassengerRequest>,
    pub(crate) assignments: BTreeMap<PassengerId, Assignment>,
    pub(crate) pending_schedule: Vec<ScheduleRequest>,
    pub(crate) pending_update: Vec<UpdateRequest>,
    pub(crate) max_time: Timestamp,
    pub(crate) last_time: Timestamp,
    pub(crate) counts: EventCounts,
}

impl World {
    /// Creates a world at its initial state: six idle elevators at the
    /// initial floor, every passenger request still pending admission.
    #[must_use]
    pub fn new(stream: RequestStream, max_time: Timestamp) -> Self {
        let elevators = ElevatorId::all().map(Elevator::new).collect();
        let mut pending_schedule = Vec::new();
        let mut pending_update = Vec::new();
        for command in stream.commands {
            match command {
                crate::input::SpecialCommand::Schedule(request) => pending_schedule.push(request),
                crate::input::SpecialCommand::Update(request) => pending_update.push(request),
            }
        }
        Self {
            elevators,
            passengers: BTreeMap::new(),
            pending_passengers: stream.passengers,
            assignments: BTreeMap::new(),
            pending_schedule,
            pending_update,
            max_time,
            last_time: Timestamp::zero(),
            counts: EventCounts::default(),
        }
    }

    /// Returns a shared reference to an elevator's state.
    #[must_use]
    pub(crate) fn elevator(&self, id: ElevatorId) -> &Elevator {
        &self.elevators[id.index()]
    }

    /// Returns a mutable reference to an elevator's state.
    pub(crate) fn elevator_mut(&mut self, id: ElevatorId) -> &mut Elevator {
        &mut self.elevators[id.index()]
    }

    /// Admits every pending passenger request whose time has arrived.
    fn admit_passengers_up_to(&mut self, time: Timestamp) {
        let ready: Vec<PassengerId> = self
            .pending_passengers
            .iter()
            .filter(|(_, request)| !time.strictly_before(request.time))
            .map(|(id, _)| *id)
            .collect();
        for id in ready {
            if let Some(request) = self.pending_passengers.remove(&id) {
                self.passengers.insert(
                    id,
                    Passenger::new(id, request.priority, request.source, request.destination, request.time),
                );
            }
        }
    }

    /// Applies one parsed event, dispatching to its validator.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered.
    pub fn apply(&mut self, timed: TimedEvent) -> Result<(), ValidationError> {
        if timed.time.strictly_before(self.last_time) {
            return Err(ValidationError::TimestampOrder {
                time: timed.time,
                detail: "timestamp decreases from a previous event".to_owned(),
            });
        }
        if timed.time.seconds() > self.max_time.seconds() + crate::core::time::TOLERANCE {
            return Err(ValidationError::TimestampOrder {
                time: timed.time,
                detail: format!("exceeds configured max time {}", self.max_time),
            });
        }
        self.last_time = timed.time;
        self.admit_passengers_up_to(timed.time);

        match timed.event {
            Event::Arrive { floor, elevator } => validators::arrive(self, timed.time, floor, elevator)?,
            Event::Open { floor, elevator } => validators::open(self, timed.time, floor, elevator)?,
            Event::Close { floor, elevator } => validators::close(self, timed.time, floor, elevator)?,
            Event::In { passenger, floor, elevator } => {
                validators::enter(self, timed.time, passenger, floor, elevator)?;
            }
            Event::Out { success, passenger, floor, elevator } => {
                validators::exit(self, timed.time, success, passenger, floor, elevator)?;
            }
            Event::Receive { passenger, elevator } => {
                validators::receive(self, timed.time, passenger, elevator)?;
            }
            Event::ScheAccept { elevator, speed, target } => {
                validators::sche_accept(self, timed.time, elevator, speed, target)?;
            }
            Event::ScheBegin { elevator } => validators::sche_begin(self, timed.time, elevator)?,
            Event::ScheEnd { elevator } => validators::sche_end(self, timed.time, elevator)?,
            Event::UpdateAccept { a, b, target } => {
                validators::update_accept(self, timed.time, a, b, target)?;
            }
            Event::UpdateBegin { a, b } => validators::update_begin(self, timed.time, a, b)?,
            Event::UpdateEnd { a, b } => validators::update_end(self, timed.time, a, b)?,
        }

        match timed.event {
            Event::Arrive { .. } => self.counts.arrive += 1,
            Event::Open { .. } => self.counts.open += 1,
            Event::Close { .. } => self.counts.close += 1,
            _ => {}
        }

        Ok(())
    }

    /// Runs the final-state audit: every passenger COMPLETED, every
    /// non-DISABLED elevator's door closed and car empty.
    ///
    /// # Errors
    /// Returns [`ValidationError::FinalState`] on the first violation found.
    pub fn finish(&self) -> Result<(), ValidationError> {
        validators::final_state_audit(self)
    }

    /// Returns the running event counts, for the scorer's energy proxy.
    #[must_use]
    pub const fn counts(&self) -> EventCounts {
        self.counts
    }

    /// Returns a shared reference to the passenger table, for the scorer.
    #[must_use]
    pub const fn passengers(&self) -> &BTreeMap<PassengerId, Passenger> {
        &self.passengers
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use super::*;
    use crate::core::floor::Floor;
    use crate::core::ids::ELEVATOR_COUNT;

    fn single_passenger_world() -> World {
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
        World::new(stream, Timestamp::new(220.0).unwrap())
    }

    #[test]
    fn new_world_has_six_idle_elevators() {
        let world = single_passenger_world();
        assert_eq!(world.elevators.len(), ELEVATOR_COUNT);
        for elevator in &world.elevators {
            assert_eq!(elevator.floor, Floor::initial());
        }
    }

    #[test]
    fn admits_passengers_whose_request_time_has_arrived() {
        let mut world = single_passenger_world();
        assert!(world.passengers.is_empty());
        world.admit_passengers_up_to(Timestamp::zero());
        assert_eq!(world.passengers.len(), 1);
    }
}
