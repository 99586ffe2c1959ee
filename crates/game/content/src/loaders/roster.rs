//! Player roster loader.

use std::collections::BTreeSet;
use std::path::Path;

use arena_core::Roster;

use crate::loaders::{LoadResult, read_file};

/// Loader for the match roster from TOML files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a roster. Player ids must be unique.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;

        let mut seen = BTreeSet::new();
        for player in &roster.players {
            if !seen.insert(player.player_id) {
                anyhow::bail!("duplicate player id {}", player.player_id);
            }
        }
        Ok(roster)
    }
}
