//! Runtime wrappers around static match content.
//!
//! [`OracleManager`] bundles the immutable content behind `arena-core` oracle
//! traits so the runtime can build [`arena_core::Env`] views on demand.
//! Dynamic state lives in [`arena_core::ArenaState`].

use std::sync::Arc;

use arena_content::MatchContent;
use arena_core::{ChampionCatalog, ChampionOracle, ChampionTemplate, MapRulesData, Roster};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) rules: Arc<MapRulesData>,
    pub(crate) roster: Arc<Roster>,
    pub(crate) champions: Arc<ChampionCatalog>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        rules: Arc<MapRulesData>,
        roster: Arc<Roster>,
        champions: Arc<ChampionCatalog>,
    ) -> Self {
        Self {
            rules,
            roster,
            champions,
        }
    }

    /// Wraps loaded content. The content's [`arena_core::GameConfig`] is not
    /// an oracle; pass it through [`crate::RuntimeConfig`].
    pub fn from_content(content: MatchContent) -> Self {
        Self::new(
            Arc::new(content.rules),
            Arc::new(content.roster),
            Arc::new(content.champions),
        )
    }

    pub fn rules(&self) -> &MapRulesData {
        &self.rules
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn champions(&self) -> &ChampionCatalog {
        &self.champions
    }

    /// Template for a champion model, ignoring case.
    pub fn template(&self, model: &str) -> Option<&ChampionTemplate> {
        self.champions.template(model)
    }
}
