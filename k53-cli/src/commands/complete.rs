//! Scenario completion command

use anyhow::Result;
use clap::Args;
use k53_core::progress::{Category, Difficulty, ProgressTracker};

use super::{StoreOpts, open_store, parse_category, parse_difficulty};

/// Completion arguments
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Scenario category (controls, signs, rules, mixed)
    #[arg(value_parser = parse_category)]
    pub category: Category,

    /// Scenario difficulty (basic, intermediate, advanced)
    #[arg(value_parser = parse_difficulty)]
    pub difficulty: Difficulty,
}

/// Run complete command
pub async fn run(args: CompleteArgs, opts: StoreOpts) -> Result<()> {
    let (store, config) = open_store(opts)?;
    let tracker = ProgressTracker::load(store).await?;

    let unlocked = tracker
        .record_completion(args.category, args.difficulty)
        .await;

    let progress = tracker.progress().await;
    println!(
        "Recorded {} / {} scenario ({} total, {} day streak)",
        args.category.as_str(),
        args.difficulty.as_str(),
        progress.total_scenarios_completed,
        progress.current_streak,
    );

    if config.notifications.enabled {
        for achievement in &unlocked {
            println!();
            println!(
                "{} Achievement unlocked: {} - {}",
                achievement.icon, achievement.title, achievement.description
            );
        }
    }

    Ok(())
}
