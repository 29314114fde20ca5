//! k53-core: learner progress engine for the k53 study tool
//!
//! This crate provides the domain logic behind the `k53` CLI:
//!
//! - **Spaced repetition** - [`flashcards::ReviewDeck`] and the interval
//!   staircase in [`flashcards`] choose when a card comes up again
//! - **Progress tracking** - [`ProgressTracker`] accumulates scenario
//!   completions into category/difficulty counters and day streaks
//! - **Achievements** - a fixed catalog evaluated against the aggregate,
//!   with capped notification and history logs
//! - **Storage** - the [`StateStore`] trait with file-backed and in-memory
//!   implementations; every persisted document is JSON under a fixed key
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use k53_core::progress::{Category, Difficulty, ProgressTracker};
//! use k53_core::storage::MemoryStore;
//!
//! # async fn example() -> Result<(), k53_core::K53Error> {
//! let store = Arc::new(MemoryStore::new());
//! let tracker = ProgressTracker::load(store).await?;
//!
//! let unlocked = tracker
//!     .record_completion(Category::Signs, Difficulty::Basic)
//!     .await;
//! for achievement in unlocked {
//!     println!("unlocked: {}", achievement.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod achievements;
pub mod error;
pub mod flashcards;
pub mod progress;
pub mod storage;

// Re-export key types for convenience
pub use achievements::{
    Achievement, AchievementNotification, CATALOG, Evaluation, HISTORY_CAP, HistoryEntry,
    HistoryEvent, HistoryLog, NOTIFICATION_CAP, NotificationLog, ShareTarget, evaluate,
    share_text,
};
pub use error::{K53Error, StorageError};
pub use flashcards::{CardProgress, ReviewDeck, is_mastered, next_review_date, review_interval_days};
pub use progress::{Category, Difficulty, ProgressTracker, UserProgress};
pub use storage::{
    FLASHCARDS_KEY, FileStore, HISTORY_KEY, MemoryStore, NOTIFICATIONS_KEY, PROGRESS_KEY,
    StateStore,
};
