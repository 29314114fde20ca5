//! Completion pipeline: counters, streak, evaluation, notification, persist

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::streak::apply_streak;
use super::types::{Category, Difficulty, UserProgress};
use crate::achievements::{
    Achievement, AchievementNotification, HistoryEntry, HistoryEvent, HistoryLog, NotificationLog,
    ShareTarget, evaluate, merge_catalog, share_text,
};
use crate::error::StorageError;
use crate::storage::{PROGRESS_KEY, StateStore, load_json_or_default, save_json};

/// Owns the progress aggregate and runs the scenario-completion pipeline.
///
/// Every completion performs, in order: bump counters, apply the streak
/// rule, stamp the activity date, evaluate achievements, emit one
/// notification and one history entry per new unlock, persist the
/// aggregate. Persistence is the last step and the only external write to
/// the aggregate key, so a crash mid-pipeline never stores a half-updated
/// aggregate.
pub struct ProgressTracker {
    store: Arc<dyn StateStore>,
    progress: RwLock<UserProgress>,
    notifications: NotificationLog,
    history: HistoryLog,
}

impl ProgressTracker {
    /// Load the aggregate and both logs, substituting documented defaults
    /// for absent or corrupt state
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        let mut progress: UserProgress =
            load_json_or_default(store.as_ref(), PROGRESS_KEY).await?;
        // Catalog entries added since the aggregate was persisted join in
        // locked, zero-progress state.
        merge_catalog(&mut progress.achievements);

        let notifications = NotificationLog::load(store.clone()).await?;
        let history = HistoryLog::load(store.clone()).await?;

        Ok(Self {
            store,
            progress: RwLock::new(progress),
            notifications,
            history,
        })
    }

    /// Record a scenario completion at the current wall-clock time
    pub async fn record_completion(
        &self,
        category: Category,
        difficulty: Difficulty,
    ) -> Vec<Achievement> {
        self.record_completion_at(category, difficulty, Utc::now())
            .await
    }

    /// Record a scenario completion at an explicit instant.
    ///
    /// Returns the achievements unlocked by this completion.
    pub async fn record_completion_at(
        &self,
        category: Category,
        difficulty: Difficulty,
        now: DateTime<Utc>,
    ) -> Vec<Achievement> {
        let newly_unlocked = {
            let mut progress = self.progress.write().await;

            progress.total_scenarios_completed += 1;
            *progress.scenarios_by_category.entry(category).or_insert(0) += 1;
            *progress
                .scenarios_by_difficulty
                .entry(difficulty)
                .or_insert(0) += 1;

            let (current, longest) = apply_streak(
                progress.current_streak,
                progress.longest_streak,
                progress.last_active_date,
                now,
            );
            progress.current_streak = current;
            progress.longest_streak = longest;
            progress.last_active_date = Some(now);

            let evaluation = evaluate(&progress, now);
            progress.achievements = evaluation.achievements;

            info!(
                category = category.as_str(),
                difficulty = difficulty.as_str(),
                total = progress.total_scenarios_completed,
                streak = progress.current_streak,
                "recorded scenario completion"
            );
            evaluation.newly_unlocked
        };

        for achievement in &newly_unlocked {
            info!(achievement = %achievement.id, "achievement unlocked");
            self.notifications
                .push(AchievementNotification::unlocked(achievement, now))
                .await;
            self.history
                .record(HistoryEntry::new(achievement, HistoryEvent::Unlocked, now))
                .await;
        }

        self.persist_best_effort().await;
        newly_unlocked
    }

    /// Snapshot of the aggregate
    pub async fn progress(&self) -> UserProgress {
        let progress = self.progress.read().await;
        progress.clone()
    }

    /// Share an achievement through `target`.
    ///
    /// Only unlocked achievements can be shared. Returns `true` on
    /// successful delivery, after stamping `shared_at` and recording a
    /// history entry; any failure is surfaced as `false`.
    pub async fn share_achievement(&self, id: &str, target: &dyn ShareTarget) -> bool {
        let (text, achievement) = {
            let progress = self.progress.read().await;
            match progress.achievements.iter().find(|a| a.id == id) {
                Some(a) if a.unlocked => (share_text(a), a.clone()),
                Some(_) => {
                    warn!(achievement = id, "refusing to share locked achievement");
                    return false;
                }
                None => {
                    warn!(achievement = id, "unknown achievement");
                    return false;
                }
            }
        };

        if !target.deliver(&text) {
            return false;
        }

        let now = Utc::now();
        {
            let mut progress = self.progress.write().await;
            if let Some(a) = progress.achievements.iter_mut().find(|a| a.id == id) {
                a.shared_at = Some(now);
            }
        }
        self.history
            .record(HistoryEntry::new(&achievement, HistoryEvent::Shared, now))
            .await;
        self.persist_best_effort().await;
        true
    }

    /// Record that the user viewed an achievement's details
    pub async fn mark_viewed(&self, id: &str) -> Option<Achievement> {
        let achievement = {
            let progress = self.progress.read().await;
            progress.achievements.iter().find(|a| a.id == id).cloned()?
        };
        self.history
            .record(HistoryEntry::new(
                &achievement,
                HistoryEvent::Viewed,
                Utc::now(),
            ))
            .await;
        Some(achievement)
    }

    /// Access the notification log
    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Access the history log
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Explicit data-clear: restore the default aggregate and empty logs
    pub async fn reset(&self) {
        {
            let mut progress = self.progress.write().await;
            *progress = UserProgress::default();
        }
        self.notifications.clear().await;
        self.history.clear().await;
        self.persist_best_effort().await;
        info!("progress reset to defaults");
    }

    /// Persist the aggregate; failures leave in-memory state authoritative
    /// for this session
    async fn persist_best_effort(&self) {
        let progress = self.progress.read().await;
        if let Err(e) = save_json(self.store.as_ref(), PROGRESS_KEY, &*progress).await {
            warn!(error = %e, "failed to persist user progress");
        }
    }
}
