//! Consecutive-day streak arithmetic
//!
//! The gap between activities is measured in calendar dates (difference of
//! the date components), not elapsed milliseconds. A completion at 23:59
//! followed by one at 00:01 is one calendar day apart and continues the
//! streak; two completions the same afternoon are zero days apart and
//! leave it unchanged.

use chrono::{DateTime, Utc};

/// Apply one activity at `now` to a `(current, longest)` streak pair.
///
/// - no previous activity, or a gap of two or more days, or a gap in the
///   past (clock skew): the streak restarts at 1;
/// - same calendar day: unchanged;
/// - exactly one calendar day later: incremented.
///
/// `longest >= current` holds on return.
pub fn apply_streak(
    current: u32,
    longest: u32,
    last_active: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (u32, u32) {
    let gap_days = match last_active {
        None => return (1, longest.max(1)),
        Some(last) => (now.date_naive() - last.date_naive()).num_days(),
    };

    match gap_days {
        0 => (current, longest.max(current)),
        1 => {
            let current = current + 1;
            (current, longest.max(current))
        }
        _ => (1, longest.max(1)),
    }
}
