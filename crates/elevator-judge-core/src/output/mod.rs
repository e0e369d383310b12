// crates/elevator-judge-core/src/output/mod.rs
// ============================================================================
// Module: Output Event Stream
// Description: Tokenises a contestant's log into timestamped, typed events.
// Purpose: Produce the event stream the world state machine replays one
//          line at a time.
// Dependencies: core, line
// ============================================================================

//! ## Overview
//! See [`event`] for the grammar and [`OutputError`] for the failure
//! taxonomy. This is the only module that fails with `OutputFormat`.

pub use event::parse_event_line;
pub use event::Event;
pub use event::OutputError;
pub use event::TimedEvent;

/// Grammar, error taxonomy, and the per-line event tokeniser.
pub mod event;
