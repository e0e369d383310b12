// crates/elevator-judge-core/src/output/event.rs
// ============================================================================
// Module: Output Event Tokeniser
// Description: Grammar for the twelve event kinds a contestant's log may
//              emit, one per line.
// Purpose: Turn a single log line into a typed, validated `TimedEvent`, or
//          fail with a precise OutputFormat diagnostic.
// Dependencies: core, line
// ============================================================================

//! ## Overview
//! Every line is `[<t>]<KIND>-<params...>`, hyphen-delimited with no
//! tolerance for extra or missing fields. Floor and elevator parameters are
//! validated against their universes immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::floor::Floor;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::time::Timestamp;
use crate::line::parse_timestamp;
use crate::line::split_bracketed;

// ============================================================================
// SECTION: Error
// ============================================================================

/// Every way a log line can fail to tokenise. All variants belong to the
/// single `OutputFormat` failure category.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The line matched none of the twelve recognised event shapes.
    #[error("malformed output line: {text:?}")]
    MalformedLine {
        /// The offending line text.
        text: String,
    },

    /// A floor token did not name one of the eleven canonical floors.
    #[error("unknown floor {name:?}")]
    UnknownFloor {
        /// The offending floor token.
        name: String,
    },

    /// An elevator token was out of the `1..=6` range.
    #[error("elevator {value:?} out of range")]
    InvalidElevator {
        /// The offending token.
        value: String,
    },

    /// A passenger token was not a valid non-negative integer.
    #[error("invalid passenger id {value:?}")]
    InvalidPassenger {
        /// The offending token.
        value: String,
    },

    /// An OUT success flag was neither `S` nor `F`.
    #[error("invalid OUT flag {value:?}, expected S or F")]
    InvalidFlag {
        /// The offending token.
        value: String,
    },

    /// A SCHE-ACCEPT speed token was not a valid decimal.
    #[error("invalid scheduling speed {value:?}")]
    InvalidSpeed {
        /// The offending token.
        value: String,
    },
}

// ============================================================================
// SECTION: Event
// ============================================================================

/// One typed, timestamped event parsed from a contestant's log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Elevator arrived at an adjacent floor.
    Arrive {
        /// Floor the elevator arrived at.
        floor: Floor,
        /// Elevator that moved.
        elevator: ElevatorId,
    },
    /// Elevator opened its door.
    Open {
        /// Floor the door opened at.
        floor: Floor,
        /// Elevator whose door opened.
        elevator: ElevatorId,
    },
    /// Elevator closed its door.
    Close {
        /// Floor the door closed at.
        floor: Floor,
        /// Elevator whose door closed.
        elevator: ElevatorId,
    },
    /// Passenger boarded an elevator.
    In {
        /// Passenger who boarded.
        passenger: PassengerId,
        /// Floor the boarding occurred at.
        floor: Floor,
        /// Elevator boarded.
        elevator: ElevatorId,
    },
    /// Passenger left an elevator, successfully or not.
    Out {
        /// `true` for a successful (`S`) exit, `false` for `F`.
        success: bool,
        /// Passenger who exited.
        passenger: PassengerId,
        /// Floor the exit occurred at.
        floor: Floor,
        /// Elevator exited.
        elevator: ElevatorId,
    },
    /// Elevator was assigned a passenger.
    Receive {
        /// Passenger assigned.
        passenger: PassengerId,
        /// Elevator assigned to.
        elevator: ElevatorId,
    },
    /// Elevator accepted a scheduling command.
    ScheAccept {
        /// Elevator accepting the task.
        elevator: ElevatorId,
        /// Temporary speed requested.
        speed: f64,
        /// Scheduled target floor.
        target: Floor,
    },
    /// Elevator began its scheduling task.
    ScheBegin {
        /// Elevator beginning the task.
        elevator: ElevatorId,
    },
    /// Elevator completed its scheduling task.
    ScheEnd {
        /// Elevator completing the task.
        elevator: ElevatorId,
    },
    /// An elevator pair accepted an update command.
    UpdateAccept {
        /// First elevator in the pair.
        a: ElevatorId,
        /// Second elevator in the pair.
        b: ElevatorId,
        /// Target floor where the shaft merge occurs.
        target: Floor,
    },
    /// An elevator pair began its update task.
    UpdateBegin {
        /// First elevator in the pair.
        a: ElevatorId,
        /// Second elevator in the pair.
        b: ElevatorId,
    },
    /// An elevator pair completed its update task.
    UpdateEnd {
        /// First elevator in the pair.
        a: ElevatorId,
        /// Second elevator in the pair.
        b: ElevatorId,
    },
}

/// A parsed event paired with the timestamp it occurred at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedEvent {
    /// Timestamp the event occurred at.
    pub time: Timestamp,
    /// The typed event itself.
    pub event: Event,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses one complete output log line into a [`TimedEvent`].
///
/// # Errors
/// Returns [`OutputError`] if the line does not match `[<t>]<KIND>-<params>`
/// for one of the twelve recognised event kinds, or a parameter fails its
/// floor/elevator/flag validation.
pub fn parse_event_line(line: &str) -> Result<TimedEvent, OutputError> {
    let trimmed = line.trim();
    let (timestamp_text, body) =
        split_bracketed(trimmed).ok_or_else(|| OutputError::MalformedLine {
            text: trimmed.to_owned(),
        })?;
    let time = parse_timestamp(timestamp_text).ok_or_else(|| OutputError::MalformedLine {
        text: trimmed.to_owned(),
    })?;
    let tokens: Vec<&str> = body.split('-').collect();
    let event = parse_event(body, &tokens)?;
    Ok(TimedEvent { time, event })
}

/// Parses and validates a floor token.
fn floor(token: &str) -> Result<Floor, OutputError> {
    Floor::parse(token).ok_or_else(|| OutputError::UnknownFloor {
        name: token.to_owned(),
    })
}

/// Parses and range-checks an elevator identifier token.
fn elevator(token: &str) -> Result<ElevatorId, OutputError> {
    let raw: u64 = token.parse().map_err(|_| OutputError::InvalidElevator {
        value: token.to_owned(),
    })?;
    ElevatorId::new(raw).ok_or_else(|| OutputError::InvalidElevator {
        value: token.to_owned(),
    })
}

/// Parses a passenger identifier token.
fn passenger(token: &str) -> Result<PassengerId, OutputError> {
    token
        .parse::<u64>()
        .map(PassengerId::new)
        .map_err(|_| OutputError::InvalidPassenger {
            value: token.to_owned(),
        })
}

/// Parses a scheduling speed token.
fn speed(token: &str) -> Result<f64, OutputError> {
    token.parse().map_err(|_| OutputError::InvalidSpeed {
        value: token.to_owned(),
    })
}

/// Dispatches on the leading token(s) to the shape-specific parser.
fn parse_event(body: &str, tokens: &[&str]) -> Result<Event, OutputError> {
    let malformed = || OutputError::MalformedLine {
        text: body.to_owned(),
    };
    match tokens {
        ["ARRIVE", floor_tok, elevator_tok] => Ok(Event::Arrive {
            floor: floor(floor_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["OPEN", floor_tok, elevator_tok] => Ok(Event::Open {
            floor: floor(floor_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["CLOSE", floor_tok, elevator_tok] => Ok(Event::Close {
            floor: floor(floor_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["IN", passenger_tok, floor_tok, elevator_tok] => Ok(Event::In {
            passenger: passenger(passenger_tok)?,
            floor: floor(floor_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["OUT", flag_tok, passenger_tok, floor_tok, elevator_tok] => Ok(Event::Out {
            success: parse_flag(flag_tok)?,
            passenger: passenger(passenger_tok)?,
            floor: floor(floor_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["RECEIVE", passenger_tok, elevator_tok] => Ok(Event::Receive {
            passenger: passenger(passenger_tok)?,
            elevator: elevator(elevator_tok)?,
        }),
        ["SCHE", "ACCEPT", elevator_tok, speed_tok, floor_tok] => Ok(Event::ScheAccept {
            elevator: elevator(elevator_tok)?,
            speed: speed(speed_tok)?,
            target: floor(floor_tok)?,
        }),
        ["SCHE", "BEGIN", elevator_tok] => Ok(Event::ScheBegin {
            elevator: elevator(elevator_tok)?,
        }),
        ["SCHE", "END", elevator_tok] => Ok(Event::ScheEnd {
            elevator: elevator(elevator_tok)?,
        }),
        ["UPDATE", "ACCEPT", a_tok, b_tok, floor_tok] => Ok(Event::UpdateAccept {
            a: elevator(a_tok)?,
            b: elevator(b_tok)?,
            target: floor(floor_tok)?,
        }),
        ["UPDATE", "BEGIN", a_tok, b_tok] => Ok(Event::UpdateBegin {
            a: elevator(a_tok)?,
            b: elevator(b_tok)?,
        }),
        ["UPDATE", "END", a_tok, b_tok] => Ok(Event::UpdateEnd {
            a: elevator(a_tok)?,
            b: elevator(b_tok)?,
        }),
        _ => Err(malformed()),
    }
}

/// Parses an OUT success flag, `S` or `F`.
fn parse_flag(token: &str) -> Result<bool, OutputError> {
    match token {
        "S" => Ok(true),
        "F" => Ok(false),
        other => Err(OutputError::InvalidFlag {
            value: other.to_owned(),
        }),
    }
}
