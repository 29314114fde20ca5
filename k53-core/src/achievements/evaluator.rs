//! Achievement evaluation
//!
//! Pure function from the progress aggregate to an updated achievement
//! list. Emitting notifications for newly crossed thresholds is the
//! caller's job, which keeps evaluation independently testable.

use chrono::{DateTime, Utc};

use super::catalog::{ProgressSource, find_def};
use super::types::Achievement;
use crate::progress::UserProgress;

/// Result of one evaluation pass
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Full achievement list with refreshed progress and unlock state
    pub achievements: Vec<Achievement>,
    /// Achievements whose unlock transition happened in this pass
    pub newly_unlocked: Vec<Achievement>,
}

/// Recompute achievement progress and unlock state from the aggregate.
///
/// Derived entries take their progress value from the aggregate's
/// counters; externally managed entries (and entries whose id is no longer
/// in the catalog) keep their stored progress verbatim. Unlocks are
/// monotonic and idempotent: an already-unlocked entry is never touched,
/// so re-running with equal or higher progress cannot double-fire.
pub fn evaluate(progress: &UserProgress, now: DateTime<Utc>) -> Evaluation {
    let mut achievements = progress.achievements.clone();
    let mut newly_unlocked = Vec::new();

    for achievement in &mut achievements {
        let value = match find_def(&achievement.id).map(|def| def.source) {
            Some(ProgressSource::Derived(metric)) => metric.value(progress),
            Some(ProgressSource::ExternallyManaged) | None => achievement.progress,
        };
        achievement.progress = value;

        if !achievement.unlocked && value >= achievement.requirement {
            achievement.unlocked = true;
            achievement.unlocked_at = Some(now);
            newly_unlocked.push(achievement.clone());
        }
    }

    Evaluation {
        achievements,
        newly_unlocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{Category, Difficulty};

    fn aggregate() -> UserProgress {
        UserProgress::default()
    }

    fn find<'a>(achievements: &'a [Achievement], id: &str) -> &'a Achievement {
        achievements.iter().find(|a| a.id == id).unwrap()
    }

    #[test]
    fn fresh_aggregate_unlocks_nothing() {
        let result = evaluate(&aggregate(), Utc::now());
        assert!(result.newly_unlocked.is_empty());
        assert!(result.achievements.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn total_scenarios_drives_milestones() {
        let mut progress = aggregate();
        progress.total_scenarios_completed = 50;

        let result = evaluate(&progress, Utc::now());
        let master = find(&result.achievements, "scenario_master");
        assert!(master.unlocked);
        assert_eq!(master.progress, 50);
        assert!(master.unlocked_at.is_some());

        let legend = find(&result.achievements, "scenario_legend");
        assert!(!legend.unlocked);
        assert_eq!(legend.progress, 50);
    }

    #[test]
    fn category_counter_drives_expert_achievements() {
        let mut progress = aggregate();
        progress
            .scenarios_by_category
            .insert(Category::Controls, 20);

        let result = evaluate(&progress, Utc::now());
        assert!(find(&result.achievements, "controls_expert").unlocked);
        assert!(!find(&result.achievements, "signs_expert").unlocked);
    }

    #[test]
    fn difficulty_counter_drives_advanced_driver() {
        let mut progress = aggregate();
        progress
            .scenarios_by_difficulty
            .insert(Difficulty::Advanced, 15);

        let result = evaluate(&progress, Utc::now());
        assert!(find(&result.achievements, "advanced_driver").unlocked);
    }

    #[test]
    fn streak_drives_streak_achievements() {
        let mut progress = aggregate();
        progress.current_streak = 7;

        let result = evaluate(&progress, Utc::now());
        assert!(find(&result.achievements, "streak_3").unlocked);
        assert!(find(&result.achievements, "streak_7").unlocked);
        assert!(!find(&result.achievements, "streak_30").unlocked);
    }

    #[test]
    fn externally_managed_progress_passes_through() {
        let mut progress = aggregate();
        progress.total_scenarios_completed = 100;
        for achievement in &mut progress.achievements {
            if achievement.id == "location_explorer" {
                achievement.progress = 3;
            }
        }

        let result = evaluate(&progress, Utc::now());
        let explorer = find(&result.achievements, "location_explorer");
        assert_eq!(explorer.progress, 3);
        assert!(!explorer.unlocked);
    }

    #[test]
    fn externally_managed_entry_unlocks_on_stored_progress() {
        let mut progress = aggregate();
        for achievement in &mut progress.achievements {
            if achievement.id == "accuracy_90" {
                achievement.progress = 92;
            }
        }

        let result = evaluate(&progress, Utc::now());
        assert!(find(&result.achievements, "accuracy_90").unlocked);
    }

    #[test]
    fn unlock_is_monotonic_when_progress_drops() {
        let mut progress = aggregate();
        progress.current_streak = 7;
        let first = evaluate(&progress, Utc::now());

        // Streak broken: progress value drops below the requirement
        progress.achievements = first.achievements;
        progress.current_streak = 1;
        let second = evaluate(&progress, Utc::now());

        let streak_7 = find(&second.achievements, "streak_7");
        assert!(streak_7.unlocked, "unlock must never revert");
        assert_eq!(streak_7.progress, 1, "progress still tracks the counter");
    }

    #[test]
    fn reevaluation_is_idempotent() {
        let mut progress = aggregate();
        progress.total_scenarios_completed = 1;

        let first = evaluate(&progress, Utc::now());
        assert_eq!(first.newly_unlocked.len(), 1);

        progress.achievements = first.achievements.clone();
        let second = evaluate(&progress, Utc::now());

        assert!(second.newly_unlocked.is_empty());
        assert_eq!(second.achievements, first.achievements);
    }

    #[test]
    fn unlocked_at_is_stamped_exactly_once() {
        let mut progress = aggregate();
        progress.total_scenarios_completed = 1;

        let t1 = Utc::now();
        let first = evaluate(&progress, t1);
        progress.achievements = first.achievements;

        let t2 = t1 + chrono::Duration::hours(1);
        let second = evaluate(&progress, t2);

        let unlocked = find(&second.achievements, "first_scenario");
        assert_eq!(unlocked.unlocked_at, Some(t1));
    }
}
