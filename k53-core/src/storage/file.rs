//! File-backed state store

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::StateStore;
use crate::error::StorageError;

/// File-backed storage: one `<key>.json` document per key
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at the default k53 data directory
    pub fn default_location() -> Self {
        Self::new(k53_paths::data_dir())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Directory this store persists into
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(Some(raw))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("failed to create data dir: {e}"),
            })?;

        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).await.map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
