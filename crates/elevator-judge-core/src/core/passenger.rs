// crates/elevator-judge-core/src/core/passenger.rs
// ============================================================================
// Module: Passenger State
// Description: Per-passenger mutable state and status lifecycle.
// Purpose: Track each passenger's position, assignment, and completion
//          across the lifetime of a validation run.
// Dependencies: core::floor, core::ids, core::time
// ============================================================================

//! ## Overview
//! A passenger's status forms a small lifecycle: `Outside` (or `FailedOut`)
//! until RECEIVE moves it to `Waiting`, IN moves it to `Inside`, and a
//! successful OUT moves it to the terminal `Completed` status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::floor::Floor;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Status
// ============================================================================

/// A passenger's current position in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerStatus {
    /// Not yet assigned, or exited without reaching its destination.
    Outside,
    /// Holds an active assignment to some elevator, waiting to board.
    Waiting,
    /// Currently inside an elevator.
    Inside,
    /// Delivered to its destination; terminal.
    Completed,
    /// Exited involuntarily during a scheduling stop.
    FailedOut,
}

impl PassengerStatus {
    /// Returns `true` if RECEIVE may be applied from this status.
    #[must_use]
    pub const fn is_receivable(self) -> bool {
        matches!(self, Self::Outside | Self::FailedOut)
    }
}

// ============================================================================
// SECTION: Passenger
// ============================================================================

/// One passenger's complete mutable state.
#[derive(Debug, Clone)]
pub struct Passenger {
    /// This passenger's identifier.
    pub id: PassengerId,
    /// Priority weight used by the scorer's weighted wait time.
    pub priority: u32,
    /// Requested origin floor.
    pub source: Floor,
    /// Requested destination floor.
    pub destination: Floor,
    /// Timestamp the request was issued.
    pub request_time: Timestamp,
    /// Current lifecycle status.
    pub status: PassengerStatus,
    /// Current floor (origin until boarding, destination or exit floor
    /// after leaving an elevator).
    pub current_floor: Floor,
    /// Elevator this passenger is currently bound to, while `Waiting` or
    /// `Inside`.
    pub elevator: Option<ElevatorId>,
    /// Timestamp of the most recent RECEIVE naming this passenger.
    pub last_receive_time: Option<Timestamp>,
    /// Timestamp of the completing OUT, once `Completed`.
    pub completion_time: Option<Timestamp>,
}

impl Passenger {
    /// Creates a passenger in its initial `Outside` status, at its source
    /// floor, unassigned.
    #[must_use]
    pub fn new(
        id: PassengerId,
        priority: u32,
        source: Floor,
        destination: Floor,
        request_time: Timestamp,
    ) -> Self {
        Self {
            id,
            priority,
            source,
            destination,
            request_time,
            status: PassengerStatus::Outside,
            current_floor: source,
            elevator: None,
            last_receive_time: None,
            completion_time: None,
        }
    }

    /// Returns `true` if this passenger reached its destination.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, PassengerStatus::Completed)
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

    fn floor(name: &str) -> Floor {
        Floor::parse(name).unwrap()
    }

    #[test]
    fn new_passenger_starts_outside_at_its_source() {
        let passenger = Passenger::new(
            PassengerId::new(1),
            1,
            floor("F1"),
            floor("F2"),
            Timestamp::zero(),
        );
        assert_eq!(passenger.status, PassengerStatus::Outside);
        assert_eq!(passenger.current_floor, floor("F1"));
        assert!(passenger.elevator.is_none());
    }

    #[test]
    fn only_outside_and_failed_out_are_receivable() {
        assert!(PassengerStatus::Outside.is_receivable());
        assert!(PassengerStatus::FailedOut.is_receivable());
        assert!(!PassengerStatus::Waiting.is_receivable());
        assert!(!PassengerStatus::Inside.is_receivable());
        assert!(!PassengerStatus::Completed.is_receivable());
    }
}
