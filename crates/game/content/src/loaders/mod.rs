//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into the corresponding `arena-core`
//! data type. Every loader has a `parse` variant taking the file contents, so
//! content can also come from memory.

pub mod champions;
pub mod config;
pub mod factory;
pub mod roster;
pub mod rules;

pub use champions::ChampionLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, MatchContent};
pub use roster::RosterLoader;
pub use rules::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
