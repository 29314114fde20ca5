//! In-memory state store for tests and ephemeral runs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StateStore;
use crate::error::StorageError;

/// In-memory storage with the same contract as [`super::FileStore`]
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}
