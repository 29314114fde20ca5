//! Data-clear command

use anyhow::Result;
use clap::Args;
use k53_core::progress::ProgressTracker;
use k53_core::storage::FLASHCARDS_KEY;

use super::{StoreOpts, open_store};

/// Reset arguments
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm clearing all stored progress
    #[arg(long)]
    pub yes: bool,
}

/// Run reset command
pub async fn run(args: ResetArgs, opts: StoreOpts) -> Result<()> {
    if !args.yes {
        anyhow::bail!("This clears all progress, flashcards, and achievements. Re-run with --yes to confirm.");
    }

    let (store, _config) = open_store(opts)?;
    let tracker = ProgressTracker::load(store.clone()).await?;
    tracker.reset().await;
    store.remove(FLASHCARDS_KEY).await?;

    println!("All progress cleared");
    Ok(())
}
