// crates/elevator-judge-core/src/core/mod.rs
// ============================================================================
// Module: Core Data Model
// Description: Floor universe, identifiers, timestamps, and per-elevator and
//              per-passenger state records shared by every other module.
// Purpose: Collect the data model (§3) in one place so the input parser,
//          output parser, and world state machine all build on the same
//          types.
// Dependencies: none beyond the submodules below
// ============================================================================

//! ## Overview
//! This module has no behaviour of its own beyond its submodules: [`floor`],
//! [`ids`], [`time`], [`elevator`], and [`passenger`].

/// Elevator state, mode tagged-variants, and task records.
pub mod elevator;
/// The 11-name floor universe and adjacency.
pub mod floor;
/// Elevator and passenger identifiers.
pub mod ids;
/// Passenger state and lifecycle status.
pub mod passenger;
/// Tolerance-aware simulation timestamps.
pub mod time;
