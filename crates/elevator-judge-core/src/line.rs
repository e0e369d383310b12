// crates/elevator-judge-core/src/line.rs
// ============================================================================
// Module: Bracketed Timestamp Lines
// Description: Shared tokenising of the `[<t>]<command>` line shape used by
//              both the request-stream grammar and the output-event grammar.
// Purpose: Avoid duplicating whitespace-tolerant bracket/timestamp parsing
//          across the input and output parsers.
// Dependencies: core::time
// ============================================================================

//! ## Overview
//! Both file formats share one line shape: a bracketed timestamp, optionally
//! padded with interior whitespace, followed by a hyphen-delimited command.
//! This module isolates that shared grammar fragment.

use crate::core::time::Timestamp;

/// Splits `[<t>]<rest>` into the trimmed timestamp text and the remainder,
/// tolerating leading/trailing whitespace around the whole line and interior
/// whitespace immediately inside the brackets.
#[must_use]
pub fn split_bracketed(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    let after_open = trimmed.strip_prefix('[')?;
    let (timestamp_text, rest) = after_open.split_once(']')?;
    Some((timestamp_text.trim(), rest))
}

/// Parses a one-decimal-place timestamp of the form `\d+\.\d+`.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    let (whole, fraction) = text.split_once('.')?;
    if whole.is_empty() || !whole.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    if fraction.len() != 1 || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok().and_then(Timestamp::new)
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
    fn splits_a_well_formed_line() {
        let (timestamp, rest) = split_bracketed("[1.0]ARRIVE-F2-1").unwrap();
        assert_eq!(timestamp, "1.0");
        assert_eq!(rest, "ARRIVE-F2-1");
    }

    #[test]
    fn tolerates_interior_whitespace() {
        let (timestamp, rest) = split_bracketed("  [ 1.0 ]ARRIVE-F2-1  ").unwrap();
        assert_eq!(timestamp, "1.0");
        assert_eq!(rest, "ARRIVE-F2-1");
    }

    #[test]
    fn rejects_missing_brackets() {
        assert!(split_bracketed("1.0]ARRIVE-F2-1").is_none());
        assert!(split_bracketed("[1.0ARRIVE-F2-1").is_none());
    }

    #[test]
    fn requires_exactly_one_fractional_digit() {
        assert!(parse_timestamp("1.0").is_some());
        assert!(parse_timestamp("1.05").is_none());
        assert!(parse_timestamp("1").is_none());
        assert!(parse_timestamp("-1.0").is_none());
    }
}
