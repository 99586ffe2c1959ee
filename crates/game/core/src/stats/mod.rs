//! Champion stat block.
//!
//! - [`ChampionStats`]: health, mana, experience, level, range, gold income
//! - [`ScoreCard`]: kill/death/minion tallies shown on the scoreboard
//!
//! Gold itself is owned by [`crate::economy::EconomyLedger`] so that every
//! gold mutation goes through the same place as streaks and kill credit.
mod resources;

pub use resources::{ResourceKind, ResourcePool};

/// Base numbers a champion template provides at level 1.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub health: f32,
    pub mana: f32,
    pub attack_range: f32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            health: 600.0,
            mana: 300.0,
            attack_range: 125.0,
        }
    }
}

/// Owned stat block of a champion.
///
/// # Invariants
///
/// - `level` never decreases; it is only advanced by
///   [`crate::progression::try_level_up`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionStats {
    pub health: ResourcePool,
    pub mana: ResourcePool,
    pub experience: f32,
    level: u8,
    pub attack_range: f32,
    pub is_generating_gold: bool,
    pub gold_per_second: f32,
}

impl ChampionStats {
    pub fn new(base: &BaseStats, gold_per_second: f32) -> Self {
        Self {
            health: ResourcePool::full(base.health),
            mana: ResourcePool::full(base.mana),
            experience: 0.0,
            level: 1,
            attack_range: base.attack_range,
            is_generating_gold: false,
            gold_per_second,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub(crate) fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    pub fn add_experience(&mut self, amount: f32) {
        if amount > 0.0 {
            self.experience += amount;
        }
    }

    /// Maximum of the given pool.
    pub fn maximum_of(&self, kind: ResourceKind) -> f32 {
        match kind {
            ResourceKind::Health => self.health.maximum,
            ResourceKind::Mana => self.mana.maximum,
        }
    }
}

impl Default for ChampionStats {
    fn default() -> Self {
        Self::new(&BaseStats::default(), 0.0)
    }
}

/// Scoreboard tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    pub kills: u32,
    pub deaths: u32,
    pub minions_killed: u32,
    pub neutral_minions_killed: u32,
}
