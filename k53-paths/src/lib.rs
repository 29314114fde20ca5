//! XDG Base Directory paths for k53.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths. This matches tools like gh, docker, kubectl.

use std::path::PathBuf;

/// Get the k53 config directory.
///
/// Returns `$XDG_CONFIG_HOME/k53` if set, otherwise `~/.config/k53`.
/// This is where the optional `config.toml` lives.
///
/// # Examples
///
/// ```
/// use k53_paths::config_dir;
///
/// let config = config_dir();
/// let config_file = config.join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("k53")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/k53")
    } else {
        PathBuf::from(".config/k53")
    }
}

/// Get the k53 data directory.
///
/// Returns `$XDG_DATA_HOME/k53` if set, otherwise `~/.local/share/k53`.
/// This is where progress, flashcard, notification, and history state
/// is persisted as JSON documents.
///
/// # Examples
///
/// ```
/// use k53_paths::data_dir;
///
/// let data = data_dir();
/// let progress_file = data.join("k53_user_progress.json");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("k53")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/k53")
    } else {
        PathBuf::from(".local/share/k53")
    }
}
