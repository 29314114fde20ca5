//! Flashcard progress types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default difficulty for a card that has never been rated (1-5 scale)
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// Per-card review record
///
/// Created lazily with zeroed counters the first time a card is rated and
/// never deleted afterwards. Invariant: `correct_count <= review_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProgress {
    /// Content-item id this record belongs to
    pub card_id: String,
    /// Total reviews performed
    pub review_count: u32,
    /// Reviews answered correctly
    pub correct_count: u32,
    /// When the card was last rated
    pub last_reviewed: Option<DateTime<Utc>>,
    /// When the card becomes eligible for review-mode selection
    pub next_review: Option<DateTime<Utc>>,
    /// Derived mastery flag, recomputed on every rating
    pub mastered: bool,
    /// Card difficulty on a 1-5 scale. Carried and persisted but not
    /// consulted by the scheduler (see DESIGN.md).
    pub difficulty: u8,
}

impl CardProgress {
    /// Fresh record for a card that has never been reviewed
    pub fn new(card_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            review_count: 0,
            correct_count: 0,
            last_reviewed: None,
            next_review: None,
            mastered: false,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Review accuracy in the 0.0-1.0 range, or `None` before the first review
    pub fn accuracy(&self) -> Option<f64> {
        if self.review_count == 0 {
            None
        } else {
            Some(f64::from(self.correct_count) / f64::from(self.review_count))
        }
    }
}
