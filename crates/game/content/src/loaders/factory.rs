//! Content factory for building match content from a data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use arena_core::{ChampionCatalog, GameConfig, MapRulesData, Roster};
use tracing::{debug, info};

use crate::loaders::{ChampionLoader, ConfigLoader, LoadResult, RosterLoader, RulesLoader};

/// Everything a match needs, loaded from disk.
#[derive(Clone, Debug)]
pub struct MatchContent {
    pub config: GameConfig,
    pub rules: MapRulesData,
    pub champions: ChampionCatalog,
    pub roster: Roster,
}

/// Content factory that loads all match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── rules.ron
/// ├── champions.ron
/// └── roster.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load map rules from `rules.ron`.
    pub fn load_rules(&self) -> LoadResult<MapRulesData> {
        RulesLoader::load(&self.data_dir.join("rules.ron"))
    }

    /// Load champion templates from `champions.ron`.
    pub fn load_champions(&self) -> LoadResult<ChampionCatalog> {
        ChampionLoader::load(&self.data_dir.join("champions.ron"))
    }

    /// Load the player roster from `roster.toml`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.toml"))
    }

    /// Load every content file.
    pub fn load_match(&self) -> LoadResult<MatchContent> {
        let content = MatchContent {
            config: self.load_config().context("loading game config")?,
            rules: self.load_rules().context("loading map rules")?,
            champions: self.load_champions().context("loading champions")?,
            roster: self.load_roster().context("loading roster")?,
        };
        info!(
            data_dir = %self.data_dir.display(),
            champions = content.champions.len(),
            players = content.roster.players.len(),
            "match content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::ChampionOracle;

    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_content_is_consistent() {
        let content = bundled().load_match().unwrap();
        for player in &content.roster.players {
            assert!(
                content.champions.template(&player.champion).is_some(),
                "no template for {}",
                player.champion
            );
        }
        assert!(!content.rules.experience_table.is_empty());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_rules().is_err());
    }

    #[test]
    fn load_match_names_the_failing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rules.ron"), "()").unwrap();
        let err = ContentFactory::new(dir.path()).load_match().unwrap_err();
        assert_eq!(err.to_string(), "loading champions");
    }
}
