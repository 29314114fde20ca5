//! Flashcard progress tracking and spaced-repetition scheduling

mod deck;
mod scheduler;
mod types;

pub use deck::ReviewDeck;
pub use scheduler::{is_mastered, next_review_date, review_interval_days};
pub use types::CardProgress;
