//! Champion template loader.

use std::path::Path;

use arena_core::{ChampionCatalog, ChampionOracle, ChampionTemplate};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for champion templates from RON files.
///
/// The file holds a list of templates; model names must be unique
/// (case-insensitively).
pub struct ChampionLoader;

impl ChampionLoader {
    pub fn load(path: &Path) -> LoadResult<ChampionCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ChampionCatalog> {
        let templates: Vec<ChampionTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse champion RON: {}", e))?;

        let mut catalog = ChampionCatalog::new();
        for template in templates {
            if catalog.template(&template.model).is_some() {
                anyhow::bail!("duplicate champion template '{}'", template.model);
            }
            catalog.insert(template);
        }
        debug!(count = catalog.len(), "champion templates loaded");
        Ok(catalog)
    }
}
