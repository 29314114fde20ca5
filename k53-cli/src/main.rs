use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "k53", about = "Study tracker for the K53 learner's test")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep all state in memory; nothing is written to disk
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate and inspect flashcards
    Cards(commands::cards::CardsArgs),
    /// Record a completed practice scenario
    Complete(commands::complete::CompleteArgs),
    /// Show progress statistics
    Stats(commands::stats::StatsArgs),
    /// List, view, and share achievements
    Achievements(commands::achievements::AchievementsArgs),
    /// Clear all stored progress
    Reset(commands::reset::ResetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let opts = commands::StoreOpts {
        data_dir: cli.data_dir,
        ephemeral: cli.ephemeral,
    };

    match cli.command {
        Commands::Cards(args) => commands::cards::run(args, opts).await,
        Commands::Complete(args) => commands::complete::run(args, opts).await,
        Commands::Stats(args) => commands::stats::run(args, opts).await,
        Commands::Achievements(args) => commands::achievements::run(args, opts).await,
        Commands::Reset(args) => commands::reset::run(args, opts).await,
    }
}
