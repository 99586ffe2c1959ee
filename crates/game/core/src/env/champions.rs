//! Champion templates and spell unlock tables.
//!
//! Templates are data-driven (RON) and turned into [`crate::Champion`]
//! instances at match start. The [`ChampionOracle`] trait lets the runtime
//! look them up by name.

use std::collections::BTreeMap;

use crate::spell::SpellSlot;
use crate::stats::BaseStats;

/// Per-slot level gating for spell upgrades.
pub trait LevelUnlockTable {
    /// Minimum champion level needed to raise the spell in `slot` from
    /// `current_level` to `current_level + 1`. `None` means the spell is at
    /// its maximum level.
    fn required_level(&self, slot: SpellSlot, current_level: u8) -> Option<u8>;
}

/// Unlock table keyed by raw slot index.
///
/// `rows[slot][spell_level]` is the champion level required to learn
/// `spell_level + 1`. Slots without a row cannot be leveled by skill points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellUnlockTable {
    pub rows: BTreeMap<u8, Vec<u8>>,
}

impl SpellUnlockTable {
    pub fn new(rows: BTreeMap<u8, Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Three regular abilities at 1/3/5/7/9 and an ultimate at 6/11/16.
    pub fn standard() -> Self {
        let regular = vec![1, 3, 5, 7, 9];
        Self::new(BTreeMap::from([
            (0, regular.clone()),
            (1, regular.clone()),
            (2, regular),
            (3, vec![6, 11, 16]),
        ]))
    }
}

impl LevelUnlockTable for SpellUnlockTable {
    fn required_level(&self, slot: SpellSlot, current_level: u8) -> Option<u8> {
        self.rows
            .get(&slot.index())?
            .get(usize::from(current_level))
            .copied()
    }
}

/// Static description of a champion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionTemplate {
    pub model: String,
    /// Basic abilities for slots 0..=3; empty names leave the slot unbound.
    pub spells: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub passives: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_spells: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "SpellUnlockTable::standard"))]
    pub unlocks: SpellUnlockTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_stats: BaseStats,
}

impl ChampionTemplate {
    pub fn new(model: impl Into<String>, spells: Vec<String>) -> Self {
        Self {
            model: model.into(),
            spells,
            passives: Vec::new(),
            extra_spells: Vec::new(),
            unlocks: SpellUnlockTable::standard(),
            base_stats: BaseStats::default(),
        }
    }

    pub fn with_passives(mut self, passives: Vec<String>) -> Self {
        self.passives = passives;
        self
    }

    pub fn with_extra_spells(mut self, extra_spells: Vec<String>) -> Self {
        self.extra_spells = extra_spells;
        self
    }

    pub fn with_base_stats(mut self, base_stats: BaseStats) -> Self {
        self.base_stats = base_stats;
        self
    }
}

/// Oracle providing champion templates by model name.
pub trait ChampionOracle: Send + Sync {
    fn template(&self, model: &str) -> Option<&ChampionTemplate>;
}

/// In-memory template catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChampionCatalog {
    templates: BTreeMap<String, ChampionTemplate>,
}

impl ChampionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: ChampionTemplate) {
        self.templates.insert(template.model.to_lowercase(), template);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<ChampionTemplate> for ChampionCatalog {
    fn from_iter<T: IntoIterator<Item = ChampionTemplate>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for template in iter {
            catalog.insert(template);
        }
        catalog
    }
}

impl ChampionOracle for ChampionCatalog {
    fn template(&self, model: &str) -> Option<&ChampionTemplate> {
        self.templates.get(&model.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_gates_ultimate() {
        let table = SpellUnlockTable::standard();
        assert_eq!(table.required_level(SpellSlot::Basic(0), 0), Some(1));
        assert_eq!(table.required_level(SpellSlot::Basic(0), 4), Some(9));
        assert_eq!(table.required_level(SpellSlot::Basic(0), 5), None);
        assert_eq!(table.required_level(SpellSlot::Basic(3), 1), Some(11));
        assert_eq!(table.required_level(SpellSlot::Summoner(0), 0), None);
    }

    #[test]
    fn catalog_lookup_ignores_case() {
        let catalog: ChampionCatalog =
            [ChampionTemplate::new("Annie", vec!["Disintegrate".into()])]
                .into_iter()
                .collect();
        assert!(catalog.template("annie").is_some());
        assert!(catalog.template("ANNIE").is_some());
        assert!(catalog.template("Ezreal").is_none());
    }
}
