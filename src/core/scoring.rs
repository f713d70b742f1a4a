//! Scoring module - line-clear scoring, combo multiplier and the speed curve
//!
//! Clearing n rows in one lock awards `BASE_POINTS[n] * level * combo`.
//! The combo counter is incremented before scoring, so the first clear in a
//! chain multiplies by 1. A lock that clears nothing resets the combo to 0.

use crate::types::{BASE_DROP_MS, BASE_POINTS, DROP_STEP_MS, MIN_DROP_MS};

/// Points for clearing `lines` rows at the given level and combo count.
///
/// A single lock adds four cells, so at most four rows can fill at once;
/// the index is clamped anyway.
pub fn score_for_clear(lines: usize, level: u32, combo: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    BASE_POINTS[lines.min(BASE_POINTS.len() - 1)] * level * combo
}

/// Level for a cumulative line count: every 10 lines, starting at level 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / 10 + 1
}

/// Gravity interval for a level (milliseconds), floored at `MIN_DROP_MS`
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_STEP_MS)
        .max(MIN_DROP_MS)
}
