//! Capped notification and history logs
//!
//! Both logs are append-only in intent but capped in practice: new entries
//! go to the front and the tail past the cap is truncated, keeping
//! reverse-chronological order.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use super::types::{AchievementNotification, HistoryEntry};
use crate::error::StorageError;
use crate::storage::{HISTORY_KEY, NOTIFICATIONS_KEY, StateStore, load_json_or_default, save_json};

/// Maximum retained achievement notifications
pub const NOTIFICATION_CAP: usize = 50;

/// Maximum retained achievement history entries
pub const HISTORY_CAP: usize = 200;

/// Capped log of unlock notifications, newest first
pub struct NotificationLog {
    store: Arc<dyn StateStore>,
    entries: RwLock<Vec<AchievementNotification>>,
}

impl NotificationLog {
    /// Load the log, substituting an empty list for absent or corrupt state
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        let entries = load_json_or_default(store.as_ref(), NOTIFICATIONS_KEY).await?;
        Ok(Self {
            store,
            entries: RwLock::new(entries),
        })
    }

    /// Prepend a notification, evicting the oldest entry past the cap
    pub async fn push(&self, notification: AchievementNotification) {
        {
            let mut entries = self.entries.write().await;
            entries.insert(0, notification);
            entries.truncate(NOTIFICATION_CAP);
        }
        self.persist_best_effort().await;
    }

    /// All notifications, newest first
    pub async fn list(&self) -> Vec<AchievementNotification> {
        let entries = self.entries.read().await;
        entries.clone()
    }

    /// Number of unread notifications
    pub async fn unread_count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification as read; returns false if the id is unknown
    pub async fn mark_read(&self, id: &str) -> bool {
        let marked = {
            let mut entries = self.entries.write().await;
            match entries.iter_mut().find(|n| n.id == id) {
                Some(entry) => {
                    entry.read = true;
                    true
                }
                None => false,
            }
        };
        if marked {
            self.persist_best_effort().await;
        }
        marked
    }

    /// Mark every notification as read
    pub async fn mark_all_read(&self) {
        {
            let mut entries = self.entries.write().await;
            for entry in entries.iter_mut() {
                entry.read = true;
            }
        }
        self.persist_best_effort().await;
    }

    /// Drop all notifications
    pub async fn clear(&self) {
        {
            let mut entries = self.entries.write().await;
            entries.clear();
        }
        self.persist_best_effort().await;
    }

    async fn persist_best_effort(&self) {
        let entries = self.entries.read().await;
        if let Err(e) = save_json(self.store.as_ref(), NOTIFICATIONS_KEY, &*entries).await {
            warn!(error = %e, "failed to persist achievement notifications");
        }
    }
}

/// Capped audit log of achievement events, newest first
pub struct HistoryLog {
    store: Arc<dyn StateStore>,
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryLog {
    /// Load the log, substituting an empty list for absent or corrupt state
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        let entries = load_json_or_default(store.as_ref(), HISTORY_KEY).await?;
        Ok(Self {
            store,
            entries: RwLock::new(entries),
        })
    }

    /// Prepend an entry, evicting the oldest entry past the cap
    pub async fn record(&self, entry: HistoryEntry) {
        {
            let mut entries = self.entries.write().await;
            entries.insert(0, entry);
            entries.truncate(HISTORY_CAP);
        }
        self.persist_best_effort().await;
    }

    /// All entries, newest first
    pub async fn list(&self) -> Vec<HistoryEntry> {
        let entries = self.entries.read().await;
        entries.clone()
    }

    /// Drop all entries
    pub async fn clear(&self) {
        {
            let mut entries = self.entries.write().await;
            entries.clear();
        }
        self.persist_best_effort().await;
    }

    async fn persist_best_effort(&self) {
        let entries = self.entries.read().await;
        if let Err(e) = save_json(self.store.as_ref(), HISTORY_KEY, &*entries).await {
            warn!(error = %e, "failed to persist achievement history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::types::HistoryEvent;
    use crate::achievements::{Achievement, CATALOG};
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn notification(n: u32) -> AchievementNotification {
        let mut achievement = Achievement::from_def(&CATALOG[0]);
        achievement.id = format!("achievement-{n}");
        AchievementNotification::unlocked(&achievement, Utc::now())
    }

    async fn notification_log() -> NotificationLog {
        NotificationLog::load(Arc::new(MemoryStore::new()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn push_prepends_newest_first() {
        let log = notification_log().await;
        log.push(notification(1)).await;
        log.push(notification(2)).await;

        let entries = log.list().await;
        assert_eq!(entries[0].achievement_id, "achievement-2");
        assert_eq!(entries[1].achievement_id, "achievement-1");
    }

    #[tokio::test]
    async fn fifty_first_notification_evicts_oldest() {
        let log = notification_log().await;
        for n in 0..51 {
            log.push(notification(n)).await;
        }

        let entries = log.list().await;
        assert_eq!(entries.len(), NOTIFICATION_CAP);
        // Newest first, oldest (achievement-0) evicted
        assert_eq!(entries[0].achievement_id, "achievement-50");
        assert_eq!(entries.last().unwrap().achievement_id, "achievement-1");
    }

    #[tokio::test]
    async fn mark_read_flips_single_entry() {
        let log = notification_log().await;
        log.push(notification(1)).await;
        log.push(notification(2)).await;
        assert_eq!(log.unread_count().await, 2);

        let id = log.list().await[0].id.clone();
        assert!(log.mark_read(&id).await);
        assert_eq!(log.unread_count().await, 1);

        assert!(!log.mark_read("no-such-id").await);
    }

    #[tokio::test]
    async fn notifications_survive_reload() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        {
            let log = NotificationLog::load(store.clone()).await.unwrap();
            log.push(notification(1)).await;
        }

        let log = NotificationLog::load(store).await.unwrap();
        assert_eq!(log.list().await.len(), 1);
    }

    #[tokio::test]
    async fn history_caps_at_two_hundred() {
        let log = HistoryLog::load(Arc::new(MemoryStore::new())).await.unwrap();
        let achievement = Achievement::from_def(&CATALOG[0]);

        for _ in 0..(HISTORY_CAP + 5) {
            log.record(HistoryEntry::new(
                &achievement,
                HistoryEvent::Unlocked,
                Utc::now(),
            ))
            .await;
        }

        assert_eq!(log.list().await.len(), HISTORY_CAP);
    }

    #[tokio::test]
    async fn clear_empties_both_logs() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let notifications = NotificationLog::load(store.clone()).await.unwrap();
        let history = HistoryLog::load(store).await.unwrap();

        notifications.push(notification(1)).await;
        history
            .record(HistoryEntry::new(
                &Achievement::from_def(&CATALOG[0]),
                HistoryEvent::Viewed,
                Utc::now(),
            ))
            .await;

        notifications.clear().await;
        history.clear().await;

        assert!(notifications.list().await.is_empty());
        assert!(history.list().await.is_empty());
    }
}
