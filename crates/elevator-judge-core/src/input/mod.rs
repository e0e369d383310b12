// crates/elevator-judge-core/src/input/mod.rs
// ============================================================================
// Module: Input Request Stream
// Description: Parses a contestant's request stream into a passenger roster
//              and an ordered table of scheduling/update commands.
// Purpose: Produce the two structures the world state machine consumes
//          before it can replay a contestant's output log.
// Dependencies: core, line
// ============================================================================

//! ## Overview
//! See [`parser`] for the grammar and [`InputError`] for the failure
//! taxonomy. This is the only module that fails with `InputFormat`.

pub use parser::parse_request_stream;
pub use parser::InputError;
pub use parser::PassengerRequest;
pub use parser::RequestStream;
pub use parser::ScheduleRequest;
pub use parser::SpecialCommand;
pub use parser::UpdateRequest;

/// Grammar, error taxonomy, and the request-stream parser itself.
pub mod parser;
