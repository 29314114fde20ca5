//! Progress statistics command

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use k53_core::progress::ProgressTracker;
use k53_core::{Category, Difficulty, ReviewDeck};

use super::{StoreOpts, open_store};

/// Stats arguments
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Run stats command
pub async fn run(_args: StatsArgs, opts: StoreOpts) -> Result<()> {
    let (store, _config) = open_store(opts)?;
    let tracker = ProgressTracker::load(store.clone()).await?;
    let deck = ReviewDeck::load(store).await?;

    let progress = tracker.progress().await;

    println!("Scenarios completed: {}", progress.total_scenarios_completed);
    println!(
        "Streak: {} days (longest {})",
        progress.current_streak, progress.longest_streak
    );
    if let Some(last) = progress.last_active_date {
        println!("Last active: {}", last.format("%Y-%m-%d"));
    }
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Breakdown").fg(Color::Cyan),
        Cell::new("Completed").fg(Color::Cyan),
    ]);
    for category in Category::ALL {
        let count = progress
            .scenarios_by_category
            .get(&category)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![Cell::new(category.as_str()), Cell::new(count)]);
    }
    for difficulty in Difficulty::ALL {
        let count = progress
            .scenarios_by_difficulty
            .get(&difficulty)
            .copied()
            .unwrap_or(0);
        table.add_row(vec![Cell::new(difficulty.as_str()), Cell::new(count)]);
    }
    println!("{table}");
    println!();

    let unlocked = progress.achievements.iter().filter(|a| a.unlocked).count();
    println!(
        "Achievements: {} / {} unlocked",
        unlocked,
        progress.achievements.len()
    );
    println!("Cards mastered: {}", deck.mastered_count().await);
    println!("Cards due: {}", deck.due().await.len());

    let unread = tracker.notifications().unread_count().await;
    if unread > 0 {
        println!();
        println!("{unread} unread notification(s) - see `k53 achievements notifications`");
    }

    Ok(())
}
