//! Sharing unlocked achievements
//!
//! The engine formats the share text; delivery goes through an injected
//! [`ShareTarget`] so the CLI, tests, and any future surface can decide
//! what "share" means. Delivery failure is reported as `false`, never as
//! an error.

use super::types::Achievement;

/// Destination for a formatted share blob
pub trait ShareTarget: Send + Sync {
    /// Deliver the text; `false` on any failure
    fn deliver(&self, text: &str) -> bool;
}

/// Human-readable share text for an achievement
pub fn share_text(achievement: &Achievement) -> String {
    format!(
        "{} Achievement unlocked: {}\n{}\nEarned studying for the K53 learner's test.",
        achievement.icon, achievement.title, achievement.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::CATALOG;

    #[test]
    fn share_text_names_the_achievement() {
        let achievement = Achievement::from_def(&CATALOG[0]);
        let text = share_text(&achievement);
        assert!(text.contains(&achievement.title));
        assert!(text.contains(&achievement.description));
    }
}
