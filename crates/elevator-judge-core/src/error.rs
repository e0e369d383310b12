// crates/elevator-judge-core/src/error.rs
// ============================================================================
// Module: Judge Error Aggregate
// Description: Crate-level error composing the per-layer failure taxonomies.
// Purpose: Give CLI callers one type to match on while keeping each layer's
//          enum scoped to the interface it guards.
// Dependencies: input, output, world, std::io
// ============================================================================

//! ## Overview
//! [`JudgeError`] does not replace the layered taxonomy described in the
//! component design; it wraps whichever layer's error reached the caller,
//! plus the one concern none of the layers own: file I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::input::InputError;
use crate::output::OutputError;
use crate::world::ValidationError;

// ============================================================================
// SECTION: Error
// ============================================================================

/// Every way a full judge run can fail, one variant per layer.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    /// The request stream was ill-formed or out of range.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The contestant's output log was ill-formed or unrecognised.
    #[error(transparent)]
    Output(#[from] OutputError),

    /// A parsed output event violated a world invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A configured file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
