// crates/elevator-judge-core/src/core/floor.rs
// ============================================================================
// Module: Floor Universe
// Description: The 11-name floor sequence shared by every component.
// Purpose: Provide a single canonical index space for adjacency and ranges.
// Dependencies: std::fmt
// ============================================================================

//! ## Overview
//! Floors form one ordered sequence: four underground levels below seven
//! above-ground levels. There is no floor between `B1` and `F1`; adjacency is
//! purely by index in this sequence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

// ============================================================================
// SECTION: Floor Names
// ============================================================================

/// Canonical floor name sequence, lowest to highest.
pub const FLOOR_NAMES: [&str; 11] =
    ["B4", "B3", "B2", "B1", "F1", "F2", "F3", "F4", "F5", "F6", "F7"];

/// Floor names eligible as scheduling/update targets.
pub const SCHEDULE_FLOOR_NAMES: [&str; 7] = ["B2", "B1", "F1", "F2", "F3", "F4", "F5"];

/// Zero-based index into [`FLOOR_NAMES`].
///
/// # Invariants
/// - Always `< FLOOR_NAMES.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Floor(u8);

impl Floor {
    /// Parses a floor name into its canonical index.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        FLOOR_NAMES.iter().position(|candidate| *candidate == name).map(|idx| {
            #[allow(clippy::cast_possible_truncation, reason = "FLOOR_NAMES.len() == 11")]
            Self(idx as u8)
        })
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the canonical floor name.
    #[must_use]
    pub fn name(self) -> &'static str {
        FLOOR_NAMES[self.index()]
    }

    /// Returns whether this floor is a legal scheduling/update target.
    #[must_use]
    pub fn is_schedule_target(self) -> bool {
        SCHEDULE_FLOOR_NAMES.contains(&self.name())
    }

    /// Returns `true` if `self` and `other` are exactly one index apart.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.0.abs_diff(other.0) == 1
    }

    /// Returns the floor one index above `self`, if any.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        FLOOR_NAMES.get(self.index() + 1).map(|_| Self(self.0 + 1))
    }

    /// Returns the floor one index below `self`, if any.
    #[must_use]
    pub fn down(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// The lowest floor in the universe (`B4`).
    #[must_use]
    pub const fn min() -> Self {
        Self(0)
    }

    /// The highest floor in the universe (`F7`).
    #[must_use]
    pub fn max() -> Self {
        #[allow(clippy::cast_possible_truncation, reason = "FLOOR_NAMES.len() == 11")]
        Self((FLOOR_NAMES.len() - 1) as u8)
    }

    /// The initial floor every elevator starts on (`F1`, index 4).
    #[must_use]
    pub const fn initial() -> Self {
        Self(4)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SECTION: Floor Range
// ============================================================================

/// Inclusive range of floor indices an elevator may legally visit.
///
/// # Invariants
/// - `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRange {
    /// Lowest permitted floor.
    pub min: Floor,
    /// Highest permitted floor.
    pub max: Floor,
}

impl FloorRange {
    /// The full floor universe, `B4..=F7`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            min: Floor::min(),
            max: Floor::max(),
        }
    }

    /// Returns whether `floor` falls within this range.
    #[must_use]
    pub fn contains(self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
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
    fn parses_every_canonical_name() {
        for name in FLOOR_NAMES {
            assert_eq!(Floor::parse(name).map(Floor::name), Some(name));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Floor::parse("F8"), None);
        assert_eq!(Floor::parse("B5"), None);
        assert_eq!(Floor::parse("f1"), None);
    }

    #[test]
    fn adjacency_has_no_gap_at_ground() {
        let b1 = Floor::parse("B1").unwrap();
        let f1 = Floor::parse("F1").unwrap();
        assert!(b1.is_adjacent(f1));
        assert_eq!(f1, Floor::initial());
    }

    #[test]
    fn schedule_targets_exclude_extremes() {
        let f7 = Floor::parse("F7").unwrap();
        let b4 = Floor::parse("B4").unwrap();
        assert!(!f7.is_schedule_target());
        assert!(!b4.is_schedule_target());
    }
}
