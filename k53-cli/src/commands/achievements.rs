//! Achievement commands

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use k53_core::progress::ProgressTracker;
use k53_core::{HistoryEvent, ShareTarget};

use super::{StoreOpts, open_store};

/// Achievements arguments
#[derive(Args, Debug)]
pub struct AchievementsArgs {
    #[command(subcommand)]
    pub command: AchievementsCommands,
}

/// Achievements subcommands
#[derive(Subcommand, Debug)]
pub enum AchievementsCommands {
    /// List all achievements and their progress
    List,
    /// Show one achievement's details
    View {
        /// Achievement id, e.g. streak_7
        id: String,
    },
    /// Share an unlocked achievement
    Share {
        /// Achievement id, e.g. streak_7
        id: String,
    },
    /// Show the achievement history log
    History,
    /// Show unlock notifications
    Notifications {
        /// Mark everything as read afterwards
        #[arg(long)]
        mark_read: bool,
    },
}

/// Shares by printing the formatted blob to stdout
struct ConsoleShare;

impl ShareTarget for ConsoleShare {
    fn deliver(&self, text: &str) -> bool {
        println!("{text}");
        true
    }
}

/// Run achievements command
pub async fn run(args: AchievementsArgs, opts: StoreOpts) -> Result<()> {
    let (store, _config) = open_store(opts)?;
    let tracker = ProgressTracker::load(store).await?;

    match args.command {
        AchievementsCommands::List => list(&tracker).await,
        AchievementsCommands::View { id } => view(&tracker, &id).await,
        AchievementsCommands::Share { id } => share(&tracker, &id).await,
        AchievementsCommands::History => history(&tracker).await,
        AchievementsCommands::Notifications { mark_read } => {
            notifications(&tracker, mark_read).await
        }
    }
}

async fn list(tracker: &ProgressTracker) -> Result<()> {
    let progress = tracker.progress().await;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Achievement").fg(Color::Cyan),
        Cell::new("Progress").fg(Color::Cyan),
        Cell::new("Unlocked").fg(Color::Cyan),
    ]);

    for achievement in &progress.achievements {
        let unlocked = match achievement.unlocked_at {
            Some(at) => at.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(format!("{} {}", achievement.icon, achievement.title)),
            Cell::new(format!(
                "{} / {}",
                achievement.progress, achievement.requirement
            )),
            Cell::new(unlocked),
        ]);
    }

    println!("{table}");
    Ok(())
}

async fn view(tracker: &ProgressTracker, id: &str) -> Result<()> {
    let Some(achievement) = tracker.mark_viewed(id).await else {
        anyhow::bail!("No achievement with id '{id}'");
    };

    println!("{} {}", achievement.icon, achievement.title);
    println!("{}", achievement.description);
    println!();
    println!(
        "Progress: {} / {}",
        achievement.progress, achievement.requirement
    );
    match achievement.unlocked_at {
        Some(at) => println!("Unlocked: {}", at.format("%Y-%m-%d %H:%M")),
        None => println!("Unlocked: not yet"),
    }
    if let Some(at) = achievement.shared_at {
        println!("Shared: {}", at.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}

async fn share(tracker: &ProgressTracker, id: &str) -> Result<()> {
    if tracker.share_achievement(id, &ConsoleShare).await {
        Ok(())
    } else {
        anyhow::bail!("Could not share '{id}' (unknown id, or not unlocked yet)");
    }
}

async fn history(tracker: &ProgressTracker) -> Result<()> {
    let entries = tracker.history().list().await;
    if entries.is_empty() {
        println!("No achievement history yet");
        return Ok(());
    }

    for entry in entries {
        let event = match entry.event {
            HistoryEvent::Unlocked => "unlocked",
            HistoryEvent::Shared => "shared",
            HistoryEvent::Viewed => "viewed",
        };
        println!(
            "{}  {:<8}  {}",
            entry.occurred_at.format("%Y-%m-%d %H:%M"),
            event,
            entry.title,
        );
    }
    Ok(())
}

async fn notifications(tracker: &ProgressTracker, mark_read: bool) -> Result<()> {
    let entries = tracker.notifications().list().await;
    if entries.is_empty() {
        println!("No notifications");
        return Ok(());
    }

    for notification in &entries {
        let marker = if notification.read { " " } else { "*" };
        println!(
            "{marker} {}  {}",
            notification.created_at.format("%Y-%m-%d %H:%M"),
            notification.message,
        );
    }

    if mark_read {
        tracker.notifications().mark_all_read().await;
        println!();
        println!("Marked {} notification(s) as read", entries.len());
    }
    Ok(())
}
