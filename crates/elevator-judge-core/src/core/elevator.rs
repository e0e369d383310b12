// crates/elevator-judge-core/src/core/elevator.rs
// ============================================================================
// Module: Elevator State
// Description: Per-elevator mutable state and mode tagged-variant encoding.
// Purpose: Give the world state machine one owned record per shaft car,
//          carrying whichever scheduling/update/double-carriage payload its
//          current mode requires.
// Dependencies: core::floor, core::ids, core::time
// ============================================================================

//! ## Overview
//! An elevator's long-lived mode is a tagged-variant enum: `Normal` carries
//! no payload, the scheduling and update modes carry their task record, and
//! the double-carriage modes carry the partner id and valid floor range.
//! `Disabled` is terminal — no further actions are legal on that shaft.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::floor::Floor;
use crate::core::floor::FloorRange;
use crate::core::ids::ElevatorId;
use crate::core::ids::PassengerId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default movement speed, seconds per floor.
pub const DEFAULT_SPEED: f64 = 0.4;

/// Fixed speed assigned to both carriages of a merged double shaft.
pub const DOUBLE_CARRIAGE_SPEED: f64 = 0.2;

/// Minimum dwell time between OPEN and CLOSE outside a scheduling stop.
pub const MIN_DOOR_OPEN_SECONDS: f64 = 0.4;

/// Minimum dwell time between OPEN and CLOSE during a scheduling stop.
pub const MIN_SCHE_STOP_SECONDS: f64 = 1.0;

/// Maximum seconds allowed from SCHE-ACCEPT to SCHE-END.
pub const SCHE_WINDOW_SECONDS: f64 = 6.0;

/// Maximum ARRIVEs permitted between SCHE-ACCEPT and SCHE-BEGIN.
pub const SCHE_MAX_ARRIVES_BEFORE_BEGIN: u32 = 2;

/// Minimum seconds from UPDATE-BEGIN to UPDATE-END.
pub const MIN_UPDATE_BEGIN_TO_END_SECONDS: f64 = 1.0;

/// Maximum seconds allowed from UPDATE-ACCEPT to UPDATE-END.
pub const UPDATE_WINDOW_SECONDS: f64 = 6.0;

/// Maximum passengers an elevator car may carry at once.
pub const CAPACITY: usize = 6;

// ============================================================================
// SECTION: Scheduling Task
// ============================================================================

/// The task record carried by every `SCHE_*` mode.
#[derive(Debug, Clone, Copy)]
pub struct ScheTask {
    /// Scheduled target floor.
    pub target: Floor,
    /// Temporary speed in effect for the duration of the task.
    pub temp_speed: f64,
    /// Timestamp of SCHE-ACCEPT.
    pub accept_time: Timestamp,
    /// Timestamp of SCHE-BEGIN, set once BEGIN is processed.
    pub begin_time: Option<Timestamp>,
    /// ARRIVEs observed since ACCEPT; reset once BEGIN is processed.
    pub arrive_count: u32,
}

// ============================================================================
// SECTION: Update Task
// ============================================================================

/// The task record carried by every `UPDATE_*` mode.
#[derive(Debug, Clone, Copy)]
pub struct UpdateTask {
    /// The other elevator in this update pair.
    pub partner: ElevatorId,
    /// Target floor where the shaft merge occurs.
    pub target: Floor,
    /// Timestamp of UPDATE-ACCEPT.
    pub accept_time: Timestamp,
    /// Timestamp of UPDATE-BEGIN, set once BEGIN is processed.
    pub begin_time: Option<Timestamp>,
    /// ARRIVEs observed since ACCEPT.
    pub arrive_count: u32,
}

// ============================================================================
// SECTION: Double Carriage
// ============================================================================

/// Which half of a merged shaft a carriage occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarriageRole {
    /// Upper carriage; strictly above its partner at all times.
    Upper,
    /// Lower carriage; strictly below its partner at all times.
    Lower,
}

/// State carried by an elevator operating as one carriage of a merged shaft.
#[derive(Debug, Clone, Copy)]
pub struct DoubleCarriage {
    /// The other carriage sharing this shaft.
    pub partner: ElevatorId,
    /// This elevator's role in the pair.
    pub role: CarriageRole,
    /// The sub-range of floors this carriage may legally occupy.
    pub range: FloorRange,
}

// ============================================================================
// SECTION: Mode
// ============================================================================

/// An elevator's long-lived operating mode.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    /// Default mode: full floor range, default speed, no pending task.
    Normal,
    /// SCHE-ACCEPT received, awaiting SCHE-BEGIN.
    SchePending(ScheTask),
    /// SCHE-BEGIN received, en route to the scheduled target.
    ScheMoving(ScheTask),
    /// Arrived at the scheduled target, completing the mandatory stop.
    ScheStopping(ScheTask),
    /// UPDATE-ACCEPT received, awaiting UPDATE-BEGIN.
    UpdatePending(UpdateTask),
    /// UPDATE-BEGIN received, frozen until UPDATE-END.
    Updating(UpdateTask),
    /// Operating as one carriage of a merged double shaft.
    Double(DoubleCarriage),
    /// Vacated shaft after an update; no further actions are legal.
    Disabled,
}

impl Mode {
    /// Returns `true` if movement and door actions are frozen in this mode.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Updating(_) | Self::Disabled)
    }

    /// Returns `true` if RECEIVE is disallowed in this mode.
    #[must_use]
    pub const fn rejects_receive(&self) -> bool {
        matches!(
            self,
            Self::ScheMoving(_) | Self::ScheStopping(_) | Self::Updating(_) | Self::Disabled
        )
    }

    /// Returns the valid floor range for ARRIVE in this mode.
    #[must_use]
    pub fn floor_range(&self) -> FloorRange {
        match self {
            Self::Double(carriage) => carriage.range,
            _ => FloorRange::full(),
        }
    }

    /// Returns `true` if this mode is a scheduling or update task in
    /// progress, or a merged double-carriage shaft, any of which permit an
    /// empty car to keep moving without a live assignment.
    #[must_use]
    pub const fn has_pending_task(&self) -> bool {
        matches!(
            self,
            Self::SchePending(_)
                | Self::ScheMoving(_)
                | Self::ScheStopping(_)
                | Self::UpdatePending(_)
                | Self::Updating(_)
                | Self::Double(_)
        )
    }
}

// ============================================================================
// SECTION: Elevator
// ============================================================================

/// One elevator's complete mutable state.
#[derive(Debug, Clone)]
pub struct Elevator {
    /// This elevator's identifier.
    pub id: ElevatorId,
    /// Current floor.
    pub floor: Floor,
    /// Whether the door is currently open.
    pub door_open: bool,
    /// Passengers currently inside, in arrival order.
    pub occupants: Vec<PassengerId>,
    /// Current movement speed, seconds per floor.
    pub speed: f64,
    /// Current operating mode.
    pub mode: Mode,
    /// Timestamp of the last action advancing the movement/door clock.
    pub last_action: Timestamp,
    /// Timestamp of the last ARRIVE, if any.
    pub last_arrive: Option<Timestamp>,
    /// Timestamp of the last OPEN, if any.
    pub last_open: Option<Timestamp>,
    /// Timestamp of the last CLOSE, if any.
    pub last_close: Option<Timestamp>,
    /// Set once this elevator has ever processed a SCHE-ACCEPT.
    pub has_scheduled: bool,
    /// Set once this elevator has ever processed an UPDATE-ACCEPT.
    pub has_updated: bool,
}

impl Elevator {
    /// Creates a fresh elevator at the world's initial floor, in `Normal`
    /// mode with closed doors and no occupants.
    #[must_use]
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            floor: Floor::initial(),
            door_open: false,
            occupants: Vec::new(),
            speed: DEFAULT_SPEED,
            mode: Mode::Normal,
            last_action: Timestamp::zero(),
            last_arrive: None,
            last_open: None,
            last_close: None,
            has_scheduled: false,
            has_updated: false,
        }
    }

    /// Returns `true` if the car is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= CAPACITY
    }

    /// Returns `true` if `passenger` is currently inside this elevator.
    #[must_use]
    pub fn contains(&self, passenger: PassengerId) -> bool {
        self.occupants.contains(&passenger)
    }
}
