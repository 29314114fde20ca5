//! Achievement runtime state and log entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{AchievementDef, AchievementKind};

/// A catalog entry joined with its mutable per-user state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable catalog id, e.g. `streak_7`
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementKind,
    /// Progress value required to unlock
    pub requirement: u32,
    /// Monotonic: once true, never reverts
    pub unlocked: bool,
    /// Current measured value against `requirement`
    pub progress: u32,
    /// Set exactly once, at the transition to unlocked
    pub unlocked_at: Option<DateTime<Utc>>,
    /// Set when the user successfully shares the achievement
    pub shared_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Locked, zero-progress state for a catalog entry
    pub fn from_def(def: &AchievementDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            category: def.category,
            requirement: def.requirement,
            unlocked: false,
            progress: 0,
            unlocked_at: None,
            shared_at: None,
        }
    }
}

/// Entry in the capped notification log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementNotification {
    /// Unique notification id
    pub id: String,
    /// Achievement this notification is about
    pub achievement_id: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Whether the user has seen this notification
    pub read: bool,
}

impl AchievementNotification {
    /// Notification for a freshly unlocked achievement
    pub fn unlocked(achievement: &Achievement, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            achievement_id: achievement.id.clone(),
            title: "Achievement unlocked".to_string(),
            message: format!("{} - {}", achievement.title, achievement.description),
            created_at: now,
            read: false,
        }
    }
}

/// Kind of event recorded in the achievement history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEvent {
    Unlocked,
    Shared,
    Viewed,
}

/// Entry in the capped, append-only achievement history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub achievement_id: String,
    pub title: String,
    pub event: HistoryEvent,
    pub occurred_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        achievement: &Achievement,
        event: HistoryEvent,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            achievement_id: achievement.id.clone(),
            title: achievement.title.clone(),
            event,
            occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::CATALOG;

    #[test]
    fn from_def_starts_locked_with_zero_progress() {
        let achievement = Achievement::from_def(&CATALOG[0]);
        assert!(!achievement.unlocked);
        assert_eq!(achievement.progress, 0);
        assert!(achievement.unlocked_at.is_none());
        assert!(achievement.shared_at.is_none());
    }

    #[test]
    fn unlock_notification_references_achievement() {
        let achievement = Achievement::from_def(&CATALOG[0]);
        let notification = AchievementNotification::unlocked(&achievement, Utc::now());

        assert_eq!(notification.achievement_id, achievement.id);
        assert!(notification.message.contains(&achievement.title));
        assert!(!notification.read);
        assert!(!notification.id.is_empty());
    }

    #[test]
    fn history_event_serializes_snake_case() {
        let json = serde_json::to_string(&HistoryEvent::Unlocked).unwrap();
        assert_eq!(json, "\"unlocked\"");
    }
}
