use std::path::PathBuf;

use anyhow::Result;

use super::types::{K53Config, NotificationsConfig, RawK53Config};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user config, falling back to defaults when the file is absent
    pub fn load() -> Result<K53Config> {
        let path = Self::config_path();
        let raw = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str::<RawK53Config>(&contents)?
        } else {
            RawK53Config::default()
        };
        Ok(Self::finalize(raw))
    }

    /// Path of the user config file
    pub fn config_path() -> PathBuf {
        k53_paths::config_dir().join("config.toml")
    }

    fn finalize(raw: RawK53Config) -> K53Config {
        K53Config {
            data_dir: raw.data_dir,
            notifications: NotificationsConfig {
                enabled: raw
                    .notifications
                    .enabled
                    .unwrap_or_else(|| NotificationsConfig::default().enabled),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_applies_defaults() {
        let config = ConfigLoader::finalize(RawK53Config::default());
        assert!(config.notifications.enabled);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn finalize_keeps_explicit_values() {
        let raw: RawK53Config = toml::from_str(
            "data_dir = \"/tmp/k53-data\"\n[notifications]\nenabled = false\n",
        )
        .unwrap();
        let config = ConfigLoader::finalize(raw);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/k53-data")));
        assert!(!config.notifications.enabled);
    }
}
