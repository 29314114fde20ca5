//! Progress aggregate types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::{Achievement, initial_achievements};

/// Scenario category (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Controls,
    Signs,
    Rules,
    Mixed,
}

/// Scenario difficulty (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Controls,
        Category::Signs,
        Category::Rules,
        Category::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Controls => "controls",
            Category::Signs => "signs",
            Category::Rules => "rules",
            Category::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "controls" => Some(Category::Controls),
            "signs" => Some(Category::Signs),
            "rules" => Some(Category::Rules),
            "mixed" => Some(Category::Mixed),
            _ => None,
        }
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        match s {
            "basic" => Some(Difficulty::Basic),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

/// The per-user progress aggregate
///
/// Created with zeroed defaults on first access, mutated exactly once per
/// scenario-completion event, and reset only by explicit data-clear.
/// Invariant: `longest_streak >= current_streak` after every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_scenarios_completed: u32,
    pub scenarios_by_category: BTreeMap<Category, u32>,
    pub scenarios_by_difficulty: BTreeMap<Difficulty, u32>,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Date component drives streak continuity checks
    pub last_active_date: Option<DateTime<Utc>>,
    /// Catalog order, joined with mutable unlock state
    pub achievements: Vec<Achievement>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_scenarios_completed: 0,
            scenarios_by_category: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            scenarios_by_difficulty: Difficulty::ALL.iter().map(|d| (*d, 0)).collect(),
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            achievements: initial_achievements(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::CATALOG;

    #[test]
    fn default_aggregate_is_zeroed_with_full_catalog() {
        let progress = UserProgress::default();
        assert_eq!(progress.total_scenarios_completed, 0);
        assert_eq!(progress.current_streak, 0);
        assert_eq!(progress.longest_streak, 0);
        assert!(progress.last_active_date.is_none());
        assert_eq!(progress.achievements.len(), CATALOG.len());
        assert_eq!(progress.scenarios_by_category.len(), Category::ALL.len());
        assert_eq!(
            progress.scenarios_by_difficulty.len(),
            Difficulty::ALL.len()
        );
        assert!(progress.scenarios_by_category.values().all(|v| *v == 0));
    }

    #[test]
    fn category_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("parking"), None);
    }

    #[test]
    fn difficulty_parse_roundtrip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::parse(difficulty.as_str()), Some(difficulty));
        }
        assert_eq!(Difficulty::parse("expert"), None);
    }

    #[test]
    fn aggregate_serialization_roundtrip() {
        let mut progress = UserProgress::default();
        progress.total_scenarios_completed = 12;
        progress.scenarios_by_category.insert(Category::Signs, 5);
        progress.current_streak = 2;
        progress.longest_streak = 4;

        let json = serde_json::to_string(&progress).unwrap();
        let parsed: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(progress, parsed);
    }
}
