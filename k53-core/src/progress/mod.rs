//! User progress aggregate, streak tracking, and the completion pipeline

mod streak;
mod tracker;
mod types;

pub use streak::apply_streak;
pub use tracker::ProgressTracker;
pub use types::{Category, Difficulty, UserProgress};
