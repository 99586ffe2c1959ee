//! Map rules loader.

use std::path::Path;

use arena_core::MapRulesData;
use tracing::warn;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`MapRulesData`] from RON files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load map rules from a RON file. Omitted fields keep the default map.
    pub fn load(path: &Path) -> LoadResult<MapRulesData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapRulesData> {
        let rules: MapRulesData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map rules RON: {}", e))?;

        if rules.experience_table.is_empty() {
            warn!("map rules have an empty experience table; champions will never level");
        }
        if rules.experience_table.len() > usize::from(u8::MAX) {
            anyhow::bail!(
                "experience table has {} entries; at most {} levels are supported",
                rules.experience_table.len(),
                u8::MAX
            );
        }
        if rules
            .experience_table
            .windows(2)
            .any(|pair| pair[1] < pair[0])
        {
            anyhow::bail!("experience table must be non-decreasing");
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{MapRules, Position, TeamId};

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let rules = RulesLoader::parse(
            r#"(
                experience_table: [0.0, 100.0, 250.0],
                bounties: (champion_base: 250.0),
                respawn_points: { blue: (x: 10.0, y: 20.0) },
                kill_gold_reduction_until_ms: 120000.0,
            )"#,
        )
        .unwrap();

        assert_eq!(rules.experience_table(), &[0.0, 100.0, 250.0]);
        assert_eq!(rules.bounties.champion_base, 250.0);
        assert_eq!(rules.bounties.minion, 20.0);
        assert_eq!(rules.respawn_position(TeamId::Blue), Position::new(10.0, 20.0));
        assert!(rules.is_kill_gold_reduction_active(60_000.0));
        assert_eq!(rules.first_gold_time_ms(), 90_000.0);
    }

    #[test]
    fn decreasing_experience_table_is_rejected() {
        let err = RulesLoader::parse("(experience_table: [0.0, 300.0, 200.0])").unwrap_err();
        assert!(err.to_string().contains("non-decreasing"));
    }

    #[test]
    fn oversized_experience_table_is_rejected() {
        let table = (0..300)
            .map(|i| format!("{i}.0"))
            .collect::<Vec<_>>()
            .join(", ");
        let err = RulesLoader::parse(&format!("(experience_table: [{table}])")).unwrap_err();
        assert!(err.to_string().contains("at most 255 levels"));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(RulesLoader::parse("(experience_table: [").is_err());
    }
}
