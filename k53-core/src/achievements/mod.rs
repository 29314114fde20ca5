//! Achievement catalog, evaluation, and audit logs

mod catalog;
mod evaluator;
mod log;
mod share;
mod types;

pub use catalog::{
    AchievementDef, AchievementKind, CATALOG, Metric, ProgressSource, find_def,
    initial_achievements, merge_catalog,
};
pub use evaluator::{Evaluation, evaluate};
pub use log::{HISTORY_CAP, HistoryLog, NOTIFICATION_CAP, NotificationLog};
pub use share::{ShareTarget, share_text};
pub use types::{Achievement, AchievementNotification, HistoryEntry, HistoryEvent};
