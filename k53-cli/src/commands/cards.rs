//! Flashcard commands

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use k53_core::{CardProgress, ReviewDeck};

use super::{StoreOpts, open_store};

/// Flashcard arguments
#[derive(Args, Debug)]
pub struct CardsArgs {
    #[command(subcommand)]
    pub command: CardsCommands,
}

/// Flashcard subcommands
#[derive(Subcommand, Debug)]
pub enum CardsCommands {
    /// Rate a card after a review
    Rate {
        /// Content-item id of the card
        card_id: String,
        /// How the review went
        #[arg(value_enum)]
        rating: Rating,
    },
    /// List cards due for review
    Due,
    /// List every tracked card
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Rating {
    Correct,
    Wrong,
}

/// Run cards command
pub async fn run(args: CardsArgs, opts: StoreOpts) -> Result<()> {
    let (store, _config) = open_store(opts)?;
    let deck = ReviewDeck::load(store).await?;

    match args.command {
        CardsCommands::Rate { card_id, rating } => {
            let was_correct = matches!(rating, Rating::Correct);
            let card = deck.rate(&card_id, was_correct).await;

            println!(
                "{} {} ({} / {} correct)",
                if was_correct { "✓" } else { "✗" },
                card.card_id,
                card.correct_count,
                card.review_count,
            );
            if card.mastered {
                println!("  mastered");
            }
            if let Some(next) = card.next_review {
                println!("  next review: {}", next.format("%Y-%m-%d %H:%M"));
            }
            Ok(())
        }
        CardsCommands::Due => {
            let due = deck.due().await;
            if due.is_empty() {
                println!("No cards due for review");
            } else {
                print_cards(&due);
            }
            Ok(())
        }
        CardsCommands::List => {
            let mut cards = deck.all().await;
            if cards.is_empty() {
                println!("No cards tracked yet. Rate one with `k53 cards rate <id> correct`.");
            } else {
                cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));
                print_cards(&cards);
            }
            Ok(())
        }
    }
}

fn print_cards(cards: &[CardProgress]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Card").fg(Color::Cyan),
        Cell::new("Reviews").fg(Color::Cyan),
        Cell::new("Correct").fg(Color::Cyan),
        Cell::new("Mastered").fg(Color::Cyan),
        Cell::new("Next review").fg(Color::Cyan),
    ]);

    for card in cards {
        let next = card
            .next_review
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&card.card_id),
            Cell::new(card.review_count),
            Cell::new(card.correct_count),
            Cell::new(if card.mastered { "yes" } else { "no" }),
            Cell::new(next),
        ]);
    }

    println!("{table}");
}
