//! Error types for k53-core

use thiserror::Error;

/// Top-level error type for k53-core
#[derive(Error, Debug)]
pub enum K53Error {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors at the persistence boundary.
///
/// Domain logic never surfaces these to callers directly: corrupt values
/// are replaced with defaults and write failures are logged and swallowed,
/// so only store construction and explicit persistence return them.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to serialize value for key '{key}': {message}")]
    Serialize { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_read_displays_key() {
        let error = StorageError::Read {
            key: "k53_user_progress".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(error.to_string().contains("k53_user_progress"));
        assert!(error.to_string().contains("permission denied"));
    }

    #[test]
    fn storage_error_write_displays_key() {
        let error = StorageError::Write {
            key: "k53_achievement_history".to_string(),
            message: "disk full".to_string(),
        };
        assert!(error.to_string().contains("k53_achievement_history"));
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn k53_error_converts_from_storage_error() {
        let storage_error = StorageError::Serialize {
            key: "k53_user_progress".to_string(),
            message: "bad value".to_string(),
        };
        let error: K53Error = storage_error.into();
        assert!(matches!(error, K53Error::Storage(_)));
        assert!(error.to_string().contains("Storage error"));
    }
}
