//! Lenient parsing of the free-form core list into sector counts.
//!
//! The input is human typing: `.` and `,` both separate tokens, surrounding
//! whitespace is irrelevant, and anything that is not a plain decimal number
//! in 1..=9 is dropped without comment. Malformed tokens are never an error.

use crate::domain::model::{Sector, SectorCounts};

/// Validate one already-split token: trim, digit-check, range-check.
/// Returns the sector it names, or `None` when the token is to be dropped.
pub fn parse_token(token: &str) -> Option<Sector> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // Oversized all-digit tokens fail the parse and fall out of range anyway.
    let n: u32 = token.parse().ok()?;
    Sector::from_number(n)
}

/// Count sector occurrences in a comma- or period-separated core list.
pub fn parse_core_list(text: &str) -> SectorCounts {
    let mut counts = SectorCounts::new();
    let normalized = text.replace('.', ",");
    for token in normalized.split(',') {
        if let Some(sector) = parse_token(token) {
            counts.add(sector);
        }
    }
    counts
}
