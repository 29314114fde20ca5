//! Command implementations

pub mod achievements;
pub mod cards;
pub mod complete;
pub mod reset;
pub mod stats;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use k53_core::progress::{Category, Difficulty};
use k53_core::storage::{FileStore, MemoryStore, StateStore};
use tracing::debug;

use crate::config::{ConfigLoader, K53Config};

/// Store selection shared by every subcommand, carried from the global
/// CLI flags.
#[derive(Debug, Clone)]
pub struct StoreOpts {
    /// `--data-dir` override
    pub data_dir: Option<PathBuf>,
    /// `--ephemeral`: in-memory state, nothing written to disk
    pub ephemeral: bool,
}

/// Open the state store the subcommand should run against.
///
/// `--ephemeral` opens an in-memory store. Otherwise the data directory
/// resolves by precedence: `--data-dir` flag, then `data_dir` from
/// config.toml, then the XDG data directory.
pub fn open_store(opts: StoreOpts) -> Result<(Arc<dyn StateStore>, K53Config)> {
    let config = ConfigLoader::load()?;
    if opts.ephemeral {
        debug!("opening in-memory state store");
        return Ok((Arc::new(MemoryStore::new()), config));
    }
    let dir = opts
        .data_dir
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(k53_paths::data_dir);
    debug!(dir = %dir.display(), "opening state store");
    Ok((Arc::new(FileStore::new(dir)), config))
}

pub fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s)
        .ok_or_else(|| format!("unknown category '{s}' (expected: controls, signs, rules, mixed)"))
}

pub fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| {
        format!("unknown difficulty '{s}' (expected: basic, intermediate, advanced)")
    })
}
