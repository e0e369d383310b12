// crates/elevator-judge-core/src/input/parser.rs
// ============================================================================
// Module: Request Stream Parser
// Description: Line-by-line grammar for passenger, scheduling, and update
//              requests.
// Purpose: Turn a contestant's request stream into a passenger roster and a
//          time-ordered table of special commands, or fail with a precise
//          InputFormat diagnostic.
// Dependencies: core, line
// ============================================================================

//! ## Overview
//! Every line is `[<t>]<command>` where `<command>` is one of three shapes:
//! a passenger request, a `SCHE` command, or an `UPDATE` command. Timestamps
//! must be non-decreasing across the whole stream. The passenger count is
//! bounded to `[1, 100]`, checked once the stream has been fully consumed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::floor::Floor;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::time::Timestamp;
use crate::line::parse_timestamp;
use crate::line::split_bracketed;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum number of passenger requests a legal stream may contain.
pub const MIN_PASSENGER_COUNT: usize = 1;

/// Maximum number of passenger requests a legal stream may contain.
pub const MAX_PASSENGER_COUNT: usize = 100;

/// Scheduling speeds a `SCHE` command may request.
pub const SCHEDULE_SPEEDS: [f64; 4] = [0.2, 0.3, 0.4, 0.5];

// ============================================================================
// SECTION: Error
// ============================================================================

/// Every way a request stream can fail to be well-formed. All variants
/// belong to the single `InputFormat` failure category.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The line matched none of the three recognised command shapes.
    #[error("line {line}: malformed request stream line: {text:?}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line text.
        text: String,
    },

    /// A timestamp is smaller than the previous line's timestamp.
    #[error("line {line}: timestamp decreases from the previous line")]
    NonMonotonicTimestamp {
        /// One-based line number.
        line: usize,
    },

    /// A floor token did not name one of the eleven canonical floors.
    #[error("line {line}: unknown floor {name:?}")]
    UnknownFloor {
        /// One-based line number.
        line: usize,
        /// The offending floor token.
        name: String,
    },

    /// A floor token named a floor outside the scheduling/update target set.
    #[error("line {line}: {name:?} is not a valid scheduling target")]
    NotAScheduleTarget {
        /// One-based line number.
        line: usize,
        /// The offending floor token.
        name: String,
    },

    /// Two passenger requests shared the same identifier.
    #[error("line {line}: duplicate passenger id {id}")]
    DuplicatePassengerId {
        /// One-based line number.
        line: usize,
        /// The repeated identifier.
        id: PassengerId,
    },

    /// A priority token was not a positive integer.
    #[error("line {line}: invalid priority {value:?}")]
    InvalidPriority {
        /// One-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// A passenger request named the same source and destination floor.
    #[error("line {line}: source and destination floors must differ")]
    SameSourceAndDestination {
        /// One-based line number.
        line: usize,
    },

    /// An elevator token was out of the `1..=6` range.
    #[error("line {line}: elevator {value:?} out of range")]
    InvalidElevator {
        /// One-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// An `UPDATE` command named the same elevator twice.
    #[error("line {line}: update pair must name two distinct elevators")]
    SameElevatorPair {
        /// One-based line number.
        line: usize,
    },

    /// A scheduling speed token was not one of the four legal speeds.
    #[error("line {line}: invalid scheduling speed {value:?}")]
    InvalidSpeed {
        /// One-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// The stream's total passenger count fell outside `[1, 100]`.
    #[error("request stream has {count} passenger requests, outside the allowed range 1..=100")]
    RequestCountOutOfRange {
        /// The observed passenger count.
        count: usize,
    },
}

// ============================================================================
// SECTION: Parsed Structures
// ============================================================================

/// A single passenger request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassengerRequest {
    /// This passenger's identifier.
    pub id: PassengerId,
    /// Requested priority weight.
    pub priority: u32,
    /// Requested origin floor.
    pub source: Floor,
    /// Requested destination floor.
    pub destination: Floor,
    /// Timestamp the request was issued.
    pub time: Timestamp,
}

/// A `SCHE-<elevator>-<speed>-<floor>` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRequest {
    /// Timestamp the command was issued.
    pub time: Timestamp,
    /// Target elevator.
    pub elevator: ElevatorId,
    /// Requested temporary speed, seconds per floor.
    pub speed: f64,
    /// Requested target floor.
    pub target: Floor,
}

/// An `UPDATE-<a>-<b>-<floor>` command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRequest {
    /// Timestamp the command was issued.
    pub time: Timestamp,
    /// First elevator in the pair.
    pub a: ElevatorId,
    /// Second elevator in the pair.
    pub b: ElevatorId,
    /// Target floor where the shaft merge occurs.
    pub target: Floor,
}

/// One entry in the ordered table of special commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialCommand {
    /// A scheduling request.
    Schedule(ScheduleRequest),
    /// A dual-shaft update request.
    Update(UpdateRequest),
}

impl SpecialCommand {
    /// Returns this command's timestamp, regardless of variant.
    #[must_use]
    pub const fn time(&self) -> Timestamp {
        match self {
            Self::Schedule(request) => request.time,
            Self::Update(request) => request.time,
        }
    }
}

/// The fully parsed request stream: a passenger roster indexed by id, and a
/// time-ordered table of special commands.
#[derive(Debug, Clone, Default)]
pub struct RequestStream {
    /// Passenger requests indexed by identifier.
    pub passengers: BTreeMap<PassengerId, PassengerRequest>,
    /// Scheduling and update commands, in stream order.
    pub commands: Vec<SpecialCommand>,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a complete request stream from its textual form.
///
/// # Errors
/// Returns [`InputError`] on the first malformed line, unknown floor,
/// duplicate passenger id, disallowed parameter value, or non-monotonic
/// timestamp; the passenger-count bound is checked once the whole stream has
/// been consumed.
pub fn parse_request_stream(text: &str) -> Result<RequestStream, InputError> {
    let mut stream = RequestStream::default();
    let mut previous_time: Option<Timestamp> = None;

    for (line_no, raw_line) in text.lines().enumerate() {
        let raw_line = raw_line.trim();
        if raw_line.is_empty() {
            continue;
        }
        let line = line_no + 1;

        let (timestamp_text, body) = split_bracketed(raw_line).ok_or_else(|| InputError::MalformedLine {
            line,
            text: raw_line.to_owned(),
        })?;
        let time = parse_timestamp(timestamp_text).ok_or_else(|| InputError::MalformedLine {
            line,
            text: raw_line.to_owned(),
        })?;
        if let Some(previous) = previous_time {
            if time.strictly_before(previous) {
                return Err(InputError::NonMonotonicTimestamp { line });
            }
        }
        previous_time = Some(time);

        let tokens: Vec<&str> = body.split('-').collect();
        match tokens.first().copied() {
            Some("SCHE") => stream
                .commands
                .push(SpecialCommand::Schedule(parse_schedule(line, time, &tokens)?)),
            Some("UPDATE") => stream
                .commands
                .push(SpecialCommand::Update(parse_update(line, time, &tokens)?)),
            _ => {
                let request = parse_passenger(line, time, body, &tokens)?;
                if stream.passengers.insert(request.id, request).is_some() {
                    return Err(InputError::DuplicatePassengerId { line, id: request.id });
                }
            }
        }
    }

    let count = stream.passengers.len();
    if !(MIN_PASSENGER_COUNT..=MAX_PASSENGER_COUNT).contains(&count) {
        return Err(InputError::RequestCountOutOfRange { count });
    }

    Ok(stream)
}

/// Parses the `<id>-PRI-<p>-FROM-<floor>-TO-<floor>` shape.
fn parse_passenger(
    line: usize,
    time: Timestamp,
    body: &str,
    tokens: &[&str],
) -> Result<PassengerRequest, InputError> {
    let malformed = || InputError::MalformedLine {
        line,
        text: body.to_owned(),
    };
    let [id_tok, "PRI", priority_tok, "FROM", source_tok, "TO", destination_tok] = tokens else {
        return Err(malformed());
    };

    let id = id_tok
        .parse::<u64>()
        .map(PassengerId::new)
        .map_err(|_| malformed())?;
    let priority: u32 = priority_tok.parse().map_err(|_| InputError::InvalidPriority {
        line,
        value: (*priority_tok).to_owned(),
    })?;
    if priority < 1 {
        return Err(InputError::InvalidPriority {
            line,
            value: (*priority_tok).to_owned(),
        });
    }
    let source = Floor::parse(source_tok).ok_or_else(|| InputError::UnknownFloor {
        line,
        name: (*source_tok).to_owned(),
    })?;
    let destination = Floor::parse(destination_tok).ok_or_else(|| InputError::UnknownFloor {
        line,
        name: (*destination_tok).to_owned(),
    })?;
    if source == destination {
        return Err(InputError::SameSourceAndDestination { line });
    }

    Ok(PassengerRequest {
        id,
        priority,
        source,
        destination,
        time,
    })
}

/// Parses and range-checks an elevator identifier token.
fn parse_elevator(line: usize, token: &str) -> Result<ElevatorId, InputError> {
    let raw: u64 = token.parse().map_err(|_| InputError::InvalidElevator {
        line,
        value: token.to_owned(),
    })?;
    ElevatorId::new(raw).ok_or_else(|| InputError::InvalidElevator {
        line,
        value: token.to_owned(),
    })
}

/// Parses a floor token and checks it against the restricted target set
/// shared by `SCHE` and `UPDATE` commands.
fn parse_schedule_target(line: usize, token: &str) -> Result<Floor, InputError> {
    let floor = Floor::parse(token).ok_or_else(|| InputError::UnknownFloor {
        line,
        name: token.to_owned(),
    })?;
    if floor.is_schedule_target() {
        Ok(floor)
    } else {
        Err(InputError::NotAScheduleTarget {
            line,
            name: token.to_owned(),
        })
    }
}

/// Parses the `SCHE-<elevator>-<speed>-<floor>` shape.
fn parse_schedule(line: usize, time: Timestamp, tokens: &[&str]) -> Result<ScheduleRequest, InputError> {
    let [_, elevator_tok, speed_tok, target_tok] = tokens else {
        return Err(InputError::MalformedLine {
            line,
            text: tokens.join("-"),
        });
    };
    let elevator = parse_elevator(line, elevator_tok)?;
    let speed: f64 = speed_tok.parse().map_err(|_| InputError::InvalidSpeed {
        line,
        value: (*speed_tok).to_owned(),
    })?;
    if !SCHEDULE_SPEEDS.iter().any(|candidate| (*candidate - speed).abs() < f64::EPSILON) {
        return Err(InputError::InvalidSpeed {
            line,
            value: (*speed_tok).to_owned(),
        });
    }
    let target = parse_schedule_target(line, target_tok)?;
    Ok(ScheduleRequest {
        time,
        elevator,
        speed,
        target,
    })
}

/// Parses the `UPDATE-<a>-<b>-<floor>` shape.
fn parse_update(line: usize, time: Timestamp, tokens: &[&str]) -> Result<UpdateRequest, InputError> {
    let [_, a_tok, b_tok, target_tok] = tokens else {
        return Err(InputError::MalformedLine {
            line,
            text: tokens.join("-"),
        });
    };
    let a = parse_elevator(line, a_tok)?;
    let b = parse_elevator(line, b_tok)?;
    if a == b {
        return Err(InputError::SameElevatorPair { line });
    }
    let target = parse_schedule_target(line, target_tok)?;
    Ok(UpdateRequest { time, a, b, target })
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "test assertions fail fast on the unexpected case"
    )]

    use super::*;

    fn stream_of(lines: &[&str]) -> Result<RequestStream, InputError> {
        parse_request_stream(&lines.join("\n"))
    }

    #[test]
    fn parses_a_single_passenger_request() {
        let stream = stream_of(&["[1.0]1-PRI-1-FROM-F1-TO-F2"]).unwrap();
        assert_eq!(stream.passengers.len(), 1);
        let request = stream.passengers[&PassengerId::new(1)];
        assert_eq!(request.source, Floor::parse("F1").unwrap());
        assert_eq!(request.destination, Floor::parse("F2").unwrap());
    }

    #[test]
    fn parses_schedule_and_update_commands() {
        let stream = stream_of(&[
            "[1.0]1-PRI-1-FROM-F1-TO-F2",
            "[2.0]SCHE-1-0.2-F3",
            "[3.0]UPDATE-2-3-F1",
        ])
        .unwrap();
        assert_eq!(stream.commands.len(), 2);
    }

    #[test]
    fn rejects_duplicate_passenger_ids() {
        let result = stream_of(&[
            "[1.0]1-PRI-1-FROM-F1-TO-F2",
            "[1.0]1-PRI-1-FROM-F1-TO-F3",
        ]);
        assert!(matches!(result, Err(InputError::DuplicatePassengerId { .. })));
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let result = stream_of(&[
            "[2.0]1-PRI-1-FROM-F1-TO-F2",
            "[1.0]2-PRI-1-FROM-F1-TO-F2",
        ]);
        assert!(matches!(result, Err(InputError::NonMonotonicTimestamp { .. })));
    }

    #[test]
    fn rejects_identical_source_and_destination() {
        let result = stream_of(&["[1.0]1-PRI-1-FROM-F1-TO-F1"]);
        assert!(matches!(result, Err(InputError::SameSourceAndDestination { .. })));
    }

    #[test]
    fn rejects_out_of_range_schedule_target() {
        let result = stream_of(&["[1.0]1-PRI-1-FROM-F1-TO-F2", "[2.0]SCHE-1-0.2-F7"]);
        assert!(matches!(result, Err(InputError::NotAScheduleTarget { .. })));
    }

    #[test]
    fn rejects_empty_stream() {
        let result = stream_of(&[]);
        assert!(matches!(result, Err(InputError::RequestCountOutOfRange { count: 0 })));
    }
}
