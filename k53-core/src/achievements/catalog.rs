//! Static achievement catalog
//!
//! The catalog is fixed and versionless: adding entries is additive and
//! safe, and [`merge_catalog`] appends any entries missing from previously
//! persisted state. Changing a requirement retroactively changes unlock
//! status on the next evaluation; there is no migration layer.

use serde::{Deserialize, Serialize};

use super::types::Achievement;
use crate::progress::{Category, Difficulty, UserProgress};

/// Grouping shown in the achievements UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    Milestone,
    Mastery,
    Streak,
    Special,
}

/// Aggregate counter an achievement's progress is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalScenarios,
    Category(Category),
    Difficulty(Difficulty),
    CurrentStreak,
}

impl Metric {
    /// Read this metric's current value out of the aggregate
    pub fn value(&self, progress: &UserProgress) -> u32 {
        match self {
            Metric::TotalScenarios => progress.total_scenarios_completed,
            Metric::Category(c) => progress.scenarios_by_category.get(c).copied().unwrap_or(0),
            Metric::Difficulty(d) => {
                progress.scenarios_by_difficulty.get(d).copied().unwrap_or(0)
            }
            Metric::CurrentStreak => progress.current_streak,
        }
    }
}

/// Where an achievement's progress value comes from.
///
/// `ExternallyManaged` entries are updated by a separate code path when
/// richer tracking data is available; the evaluator must pass their stored
/// progress through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    Derived(Metric),
    ExternallyManaged,
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementKind,
    pub requirement: u32,
    pub source: ProgressSource,
}

/// The full achievement catalog, in display order
pub const CATALOG: &[AchievementDef] = &[
    AchievementDef {
        id: "first_scenario",
        title: "First Steps",
        description: "Complete your first scenario",
        icon: "🚦",
        category: AchievementKind::Milestone,
        requirement: 1,
        source: ProgressSource::Derived(Metric::TotalScenarios),
    },
    AchievementDef {
        id: "scenario_master",
        title: "Scenario Master",
        description: "Complete 50 scenarios",
        icon: "🎯",
        category: AchievementKind::Milestone,
        requirement: 50,
        source: ProgressSource::Derived(Metric::TotalScenarios),
    },
    AchievementDef {
        id: "scenario_legend",
        title: "Scenario Legend",
        description: "Complete 200 scenarios",
        icon: "🏆",
        category: AchievementKind::Milestone,
        requirement: 200,
        source: ProgressSource::Derived(Metric::TotalScenarios),
    },
    AchievementDef {
        id: "controls_expert",
        title: "Controls Expert",
        description: "Complete 20 vehicle controls scenarios",
        icon: "🕹️",
        category: AchievementKind::Mastery,
        requirement: 20,
        source: ProgressSource::Derived(Metric::Category(Category::Controls)),
    },
    AchievementDef {
        id: "signs_expert",
        title: "Signs Expert",
        description: "Complete 20 road signs scenarios",
        icon: "🛑",
        category: AchievementKind::Mastery,
        requirement: 20,
        source: ProgressSource::Derived(Metric::Category(Category::Signs)),
    },
    AchievementDef {
        id: "rules_expert",
        title: "Rules Expert",
        description: "Complete 20 rules of the road scenarios",
        icon: "📖",
        category: AchievementKind::Mastery,
        requirement: 20,
        source: ProgressSource::Derived(Metric::Category(Category::Rules)),
    },
    AchievementDef {
        id: "mixed_master",
        title: "Mixed Master",
        description: "Complete 20 mixed scenarios",
        icon: "🔀",
        category: AchievementKind::Mastery,
        requirement: 20,
        source: ProgressSource::Derived(Metric::Category(Category::Mixed)),
    },
    AchievementDef {
        id: "advanced_driver",
        title: "Advanced Driver",
        description: "Complete 15 advanced scenarios",
        icon: "🏁",
        category: AchievementKind::Mastery,
        requirement: 15,
        source: ProgressSource::Derived(Metric::Difficulty(Difficulty::Advanced)),
    },
    AchievementDef {
        id: "streak_3",
        title: "Warming Up",
        description: "Practice 3 days in a row",
        icon: "🔥",
        category: AchievementKind::Streak,
        requirement: 3,
        source: ProgressSource::Derived(Metric::CurrentStreak),
    },
    AchievementDef {
        id: "streak_7",
        title: "Week Streak",
        description: "Practice 7 days in a row",
        icon: "📅",
        category: AchievementKind::Streak,
        requirement: 7,
        source: ProgressSource::Derived(Metric::CurrentStreak),
    },
    AchievementDef {
        id: "streak_30",
        title: "Dedicated Learner",
        description: "Practice 30 days in a row",
        icon: "🌟",
        category: AchievementKind::Streak,
        requirement: 30,
        source: ProgressSource::Derived(Metric::CurrentStreak),
    },
    // The two entries below have no aggregate-derived source: their
    // progress is written by a richer tracking path and the evaluator
    // passes it through verbatim.
    AchievementDef {
        id: "location_explorer",
        title: "Location Explorer",
        description: "Practice in 5 different locations",
        icon: "📍",
        category: AchievementKind::Special,
        requirement: 5,
        source: ProgressSource::ExternallyManaged,
    },
    AchievementDef {
        id: "accuracy_90",
        title: "Sharp Shooter",
        description: "Reach 90% overall accuracy",
        icon: "🎓",
        category: AchievementKind::Special,
        requirement: 90,
        source: ProgressSource::ExternallyManaged,
    },
];

/// Look up a catalog entry by id
pub fn find_def(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|def| def.id == id)
}

/// Locked runtime state for the whole catalog, in catalog order
pub fn initial_achievements() -> Vec<Achievement> {
    CATALOG.iter().map(Achievement::from_def).collect()
}

/// Append runtime state for any catalog entries missing from a persisted
/// achievement list. Entries persisted under ids no longer in the catalog
/// are kept as-is.
pub fn merge_catalog(achievements: &mut Vec<Achievement>) {
    for def in CATALOG {
        if !achievements.iter().any(|a| a.id == def.id) {
            achievements.push(Achievement::from_def(def));
        }
    }
}
