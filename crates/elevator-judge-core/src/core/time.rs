// crates/elevator-judge-core/src/core/time.rs
// ============================================================================
// Module: Timestamp
// Description: Simulation-clock timestamps with tolerance-aware comparisons.
// Purpose: Centralize the floating-point tolerance used across every
//          timing invariant so it is defined exactly once.
// Dependencies: std::fmt, std::cmp
// ============================================================================

//! ## Overview
//! All timestamps are seconds since the simulation started, as printed by a
//! contestant's `[elapsed]` prefix. Comparisons tolerate floating-point jitter
//! up to [`TOLERANCE`] so that values meant to be equal are never rejected for
//! being a few nanoseconds apart after parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum difference, in seconds, still treated as equal.
pub const TOLERANCE: f64 = 1e-6;

// ============================================================================
// SECTION: Timestamp
// ============================================================================

/// A non-negative simulation timestamp, in seconds.
///
/// # Invariants
/// - Always finite and `>= 0.0`.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Creates a timestamp, rejecting negative, infinite, or `NaN` values.
    #[must_use]
    pub fn new(seconds: f64) -> Option<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            Some(Self(seconds))
        } else {
            None
        }
    }

    /// The zero timestamp, the instant the simulation begins.
    #[must_use]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw seconds value.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        self.0
    }

    /// Returns `true` if `self` and `other` are within [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.0 - other.0).abs() <= TOLERANCE
    }

    /// Returns `true` if `self` is strictly before `other`, outside tolerance.
    #[must_use]
    pub fn strictly_before(self, other: Self) -> bool {
        other.0 - self.0 > TOLERANCE
    }

    /// Returns `true` if `self` is at or after `other`, within tolerance.
    #[must_use]
    pub fn at_or_after(self, other: Self) -> bool {
        !self.strictly_before(other)
    }

    /// Returns the elapsed seconds from `earlier` to `self`, clamped at zero.
    ///
    /// A negative raw difference collapses to `0.0`; callers that must detect
    /// out-of-order timestamps should compare with [`Timestamp::strictly_before`]
    /// first.
    #[must_use]
    pub fn since(self, earlier: Self) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
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

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(Timestamp::new(-0.1).is_none());
        assert!(Timestamp::new(f64::NAN).is_none());
        assert!(Timestamp::new(f64::INFINITY).is_none());
    }

    #[test]
    fn tolerance_absorbs_float_jitter() {
        let a = Timestamp::new(1.000_000_1).unwrap();
        let b = Timestamp::new(1.000_000_9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn strictly_before_respects_tolerance() {
        let a = Timestamp::new(1.0).unwrap();
        let b = Timestamp::new(1.000_000_1).unwrap();
        assert!(!a.strictly_before(b));
        let c = Timestamp::new(2.0).unwrap();
        assert!(a.strictly_before(c));
    }

    #[test]
    fn since_clamps_at_zero() {
        let earlier = Timestamp::new(5.0).unwrap();
        let later = Timestamp::new(3.0).unwrap();
        assert_eq!(later.since(earlier), 0.0);
    }
}
