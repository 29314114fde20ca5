//! Persistence abstraction for k53 state
//!
//! All durable state lives in a flat key namespace of JSON documents,
//! accessed through the [`StateStore`] trait. The file-backed store maps
//! each key to a `<key>.json` file in the k53 data directory; the memory
//! store backs tests and ephemeral runs.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StorageError;

/// Storage key for the per-user progress aggregate
pub const PROGRESS_KEY: &str = "k53_user_progress";

/// Storage key for the achievement notification log
pub const NOTIFICATIONS_KEY: &str = "k53_achievement_notifications";

/// Storage key for the achievement history log
pub const HISTORY_KEY: &str = "k53_achievement_history";

/// Storage key for per-card flashcard progress records
pub const FLASHCARDS_KEY: &str = "k53_flashcard_progress";

/// Key-value access to persisted JSON documents
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the raw value under `key`, or `None` if absent
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value under `key`
    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely; absent keys are not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode the JSON document under `key`, falling back to the
/// type's default.
///
/// An absent key yields the default. A present-but-corrupt value also
/// yields the default, and the bad key is removed so the failure does
/// not recur on the next load.
pub async fn load_json_or_default<T>(store: &dyn StateStore, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    match store.load(key).await? {
        None => Ok(T::default()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupt stored value");
                // Recovery must not fail; a stuck key just warns again next load
                if let Err(e) = store.remove(key).await {
                    warn!(key, error = %e, "could not remove corrupt stored value");
                }
                Ok(T::default())
            }
        },
    }
}

/// Encode `value` as JSON and write it under `key`
pub async fn save_json<T>(store: &dyn StateStore, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
{
    let raw = serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.save(key, &raw).await
}
