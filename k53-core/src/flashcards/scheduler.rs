//! Spaced-repetition interval calculation
//!
//! Intervals come from a fixed lookup table indexed by the review count
//! before the current rating, not from an exponential-backoff formula.
//! Dates advance by calendar days so the wall-clock time of day is
//! preserved across reviews.

use chrono::{DateTime, Days, Utc};

use super::types::CardProgress;

/// Interval staircase in days, indexed by pre-increment review count.
/// Counts past the end of the table stay at the 60-day cap.
const INTERVALS_DAYS: [u32; 6] = [1, 3, 7, 14, 30, 60];

/// Interval after an incorrect answer, regardless of review count
const LAPSE_INTERVAL_DAYS: u32 = 1;

/// Reviews and correct answers both required before a card counts as mastered
const MASTERY_THRESHOLD: u32 = 3;

/// Days until the next review, given the review count *before* this rating
pub fn review_interval_days(review_count: u32, was_correct: bool) -> u32 {
    if !was_correct {
        return LAPSE_INTERVAL_DAYS;
    }
    let index = (review_count as usize).min(INTERVALS_DAYS.len() - 1);
    INTERVALS_DAYS[index]
}

/// Next eligible review date for `card`, rated at `now`
pub fn next_review_date(card: &CardProgress, was_correct: bool, now: DateTime<Utc>) -> DateTime<Utc> {
    let days = review_interval_days(card.review_count, was_correct);
    // Calendar-day arithmetic only fails at the far end of the representable
    // range; saturate to `now` there.
    now.checked_add_days(Days::new(u64::from(days))).unwrap_or(now)
}

/// Mastery rule over *post-increment* counters.
///
/// Cumulative rule: at least 3 reviews and at least 3 of them correct over
/// the card's whole lifetime, not a windowed "3 of the last 5".
pub fn is_mastered(review_count: u32, correct_count: u32) -> bool {
    review_count >= MASTERY_THRESHOLD && correct_count >= MASTERY_THRESHOLD
}
