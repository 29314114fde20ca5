//! End-to-end tests over the file-backed store

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use k53_core::progress::{Category, Difficulty, ProgressTracker};
use k53_core::storage::{FileStore, PROGRESS_KEY, StateStore};
use k53_core::{ReviewDeck, UserProgress};
use tempfile::tempdir;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 18, 0, 0).unwrap()
}

#[tokio::test]
async fn week_of_practice_accumulates_streak_and_unlocks() {
    let temp_dir = tempdir().unwrap();
    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(temp_dir.path()));
    let tracker = ProgressTracker::load(store.clone()).await.unwrap();

    // Seven consecutive days, one signs scenario per day
    for d in 1..=7 {
        tracker
            .record_completion_at(Category::Signs, Difficulty::Intermediate, day(d))
            .await;
    }

    let progress = tracker.progress().await;
    assert_eq!(progress.total_scenarios_completed, 7);
    assert_eq!(progress.current_streak, 7);
    assert_eq!(progress.longest_streak, 7);
    assert_eq!(progress.scenarios_by_category[&Category::Signs], 7);

    let unlocked: Vec<_> = progress
        .achievements
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id.as_str())
        .collect();
    assert!(unlocked.contains(&"first_scenario"));
    assert!(unlocked.contains(&"streak_3"));
    assert!(unlocked.contains(&"streak_7"));
    assert!(!unlocked.contains(&"streak_30"));

    // A fresh tracker over the same directory sees identical state
    let reloaded = ProgressTracker::load(store).await.unwrap();
    assert_eq!(reloaded.progress().await, progress);
}

#[tokio::test]
async fn missed_day_resets_streak_but_keeps_unlocks() {
    let temp_dir = tempdir().unwrap();
    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(temp_dir.path()));
    let tracker = ProgressTracker::load(store).await.unwrap();

    for d in 1..=3 {
        tracker
            .record_completion_at(Category::Rules, Difficulty::Basic, day(d))
            .await;
    }
    // Skip day 4
    tracker
        .record_completion_at(Category::Rules, Difficulty::Basic, day(5))
        .await;

    let progress = tracker.progress().await;
    assert_eq!(progress.current_streak, 1);
    assert_eq!(progress.longest_streak, 3);

    let streak_3 = progress
        .achievements
        .iter()
        .find(|a| a.id == "streak_3")
        .unwrap();
    assert!(streak_3.unlocked, "unlocks survive a broken streak");
}

#[tokio::test]
async fn corrupt_progress_file_recovers_to_default() {
    let temp_dir = tempdir().unwrap();
    let progress_file = temp_dir.path().join(format!("{PROGRESS_KEY}.json"));
    std::fs::write(&progress_file, "{ this is not json }").unwrap();

    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(temp_dir.path()));
    let tracker = ProgressTracker::load(store).await.unwrap();

    assert_eq!(tracker.progress().await, UserProgress::default());
    // The corrupt file is removed so the failure does not recur
    assert!(!progress_file.exists());
}

#[tokio::test]
async fn deck_and_tracker_share_one_store() {
    let temp_dir = tempdir().unwrap();
    let store: Arc<dyn StateStore> = Arc::new(FileStore::new(temp_dir.path()));

    let tracker = ProgressTracker::load(store.clone()).await.unwrap();
    let deck = ReviewDeck::load(store.clone()).await.unwrap();

    tracker
        .record_completion_at(Category::Controls, Difficulty::Basic, day(1))
        .await;
    deck.rate_at("controls-001", true, day(1)).await;
    deck.rate_at("controls-001", true, day(2)).await;

    // Both documents landed as separate keys in the same directory
    assert!(store.load("k53_user_progress").await.unwrap().is_some());
    assert!(store.load("k53_flashcard_progress").await.unwrap().is_some());

    let card = deck.get("controls-001").await.unwrap();
    assert_eq!(card.review_count, 2);
    // Second correct review: pre-increment count 1 -> 3 days out
    assert_eq!(card.next_review, Some(day(5)));
}
