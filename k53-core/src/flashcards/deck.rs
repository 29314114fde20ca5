//! Deck service: applies ratings to per-card records and persists the map

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::scheduler::{is_mastered, next_review_date};
use super::types::CardProgress;
use crate::error::StorageError;
use crate::storage::{FLASHCARDS_KEY, StateStore, load_json_or_default, save_json};

/// Flashcard deck backed by a [`StateStore`]
///
/// Holds the full card-id to record map in memory; every mutation rewrites
/// the persisted document as its final step. Write failures are logged and
/// swallowed so a rating always takes effect for the current session.
pub struct ReviewDeck {
    store: Arc<dyn StateStore>,
    cards: RwLock<HashMap<String, CardProgress>>,
}

impl ReviewDeck {
    /// Load the deck from the store, substituting an empty map for absent
    /// or corrupt state
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self, StorageError> {
        let cards = load_json_or_default(store.as_ref(), FLASHCARDS_KEY).await?;
        Ok(Self {
            store,
            cards: RwLock::new(cards),
        })
    }

    /// Rate a card at the current wall-clock time
    pub async fn rate(&self, card_id: &str, was_correct: bool) -> CardProgress {
        self.rate_at(card_id, was_correct, Utc::now()).await
    }

    /// Rate a card at an explicit instant
    ///
    /// Creates the record lazily on first rating, then: schedules the next
    /// review from the pre-increment review count, increments the counters,
    /// recomputes mastery from the post-increment counts, and stamps
    /// `last_reviewed`.
    pub async fn rate_at(
        &self,
        card_id: &str,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> CardProgress {
        let updated = {
            let mut cards = self.cards.write().await;
            let card = cards
                .entry(card_id.to_string())
                .or_insert_with(|| CardProgress::new(card_id));

            card.next_review = Some(next_review_date(card, was_correct, now));
            card.review_count += 1;
            if was_correct {
                card.correct_count += 1;
            }
            card.mastered = is_mastered(card.review_count, card.correct_count);
            card.last_reviewed = Some(now);

            debug!(
                card_id,
                was_correct,
                review_count = card.review_count,
                mastered = card.mastered,
                "rated card"
            );
            card.clone()
        };

        self.persist_best_effort().await;
        updated
    }

    /// Record for a single card, if it has ever been rated
    pub async fn get(&self, card_id: &str) -> Option<CardProgress> {
        let cards = self.cards.read().await;
        cards.get(card_id).cloned()
    }

    /// All records, unordered
    pub async fn all(&self) -> Vec<CardProgress> {
        let cards = self.cards.read().await;
        cards.values().cloned().collect()
    }

    /// Cards whose next review is due at or before `now`
    pub async fn due_at(&self, now: DateTime<Utc>) -> Vec<CardProgress> {
        let cards = self.cards.read().await;
        let mut due: Vec<_> = cards
            .values()
            .filter(|c| c.next_review.is_some_and(|next| next <= now))
            .cloned()
            .collect();
        due.sort_by_key(|c| c.next_review);
        due
    }

    /// Cards due at the current wall-clock time
    pub async fn due(&self) -> Vec<CardProgress> {
        self.due_at(Utc::now()).await
    }

    /// Number of mastered cards
    pub async fn mastered_count(&self) -> usize {
        let cards = self.cards.read().await;
        cards.values().filter(|c| c.mastered).count()
    }

    async fn persist_best_effort(&self) {
        let cards = self.cards.read().await;
        if let Err(e) = save_json(self.store.as_ref(), FLASHCARDS_KEY, &*cards).await {
            warn!(error = %e, "failed to persist flashcard progress");
        }
    }
}
