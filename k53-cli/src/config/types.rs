use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration as stored in TOML (optional fields so absent keys fall
/// back to defaults)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawK53Config {
    /// Where progress state is persisted
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub notifications: RawNotificationsConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawNotificationsConfig {
    pub enabled: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct K53Config {
    /// Where progress state is persisted; `None` means the XDG data dir
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Show unlock banners after completions
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
