//! Map-specific rules: experience curve, bounties, spawn layout, gold income.

use std::collections::BTreeMap;

use crate::state::{ObjectKind, Position, TeamId};

/// Everything a bounty formula may look at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BountyTarget {
    pub kind: ObjectKind,
    pub team: TeamId,
    pub level: u8,
    /// Kill/death streak of the victim before this death is applied.
    pub streak: i32,
}

/// Oracle providing the rules of the current map.
///
/// Match-global mutable flags (first blood) are not part of this trait; they
/// live in [`crate::state::MatchState`] and change only through the engine.
pub trait MapRules: Send + Sync {
    /// `experience_table()[level]` is the total experience required to leave `level`.
    fn experience_table(&self) -> &[f32];

    /// Gold awarded for killing `target`. May be negative for odd formulas;
    /// callers treat negative values as "no reward".
    fn gold_for(&self, target: &BountyTarget) -> f32;

    fn respawn_position(&self, team: TeamId) -> Position;

    /// Spawn coordinate for the `team_slot`-th player of a team of `team_size`.
    fn spawn_position(&self, team: TeamId, team_size: usize, team_slot: usize) -> Option<Position>;

    /// Whether champion bounties are currently reduced.
    fn is_kill_gold_reduction_active(&self, game_time_ms: f32) -> bool;

    /// Game time at which passive gold income starts.
    fn first_gold_time_ms(&self) -> f32;

    fn gold_per_second(&self) -> f32;
}

/// Bounty values per unit category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BountyTable {
    pub champion_base: f32,
    /// Added per kill on the victim's kill streak (shutdown bounty).
    pub kill_streak_step: f32,
    /// Multiplied in per death on the victim's death streak.
    pub death_streak_factor: f32,
    /// Streak magnitude beyond which bounties stop changing.
    pub streak_cap: u8,
    pub champion_minimum: f32,
    pub minion: f32,
    pub minion_per_level: f32,
    pub monster: f32,
    pub turret: f32,
    pub structure: f32,
}

impl Default for BountyTable {
    fn default() -> Self {
        Self {
            champion_base: 300.0,
            kill_streak_step: 50.0,
            death_streak_factor: 0.8,
            streak_cap: 5,
            champion_minimum: 50.0,
            minion: 20.0,
            minion_per_level: 0.0,
            monster: 35.0,
            turret: 150.0,
            structure: 50.0,
        }
    }
}

impl BountyTable {
    pub fn gold_for(&self, target: &BountyTarget) -> f32 {
        match target.kind {
            ObjectKind::Champion => self.champion_bounty(target.streak),
            ObjectKind::Minion => self.minion + self.minion_per_level * f32::from(target.level),
            ObjectKind::Monster => self.monster,
            ObjectKind::Turret => self.turret,
            ObjectKind::Structure => self.structure,
            ObjectKind::Particle => 0.0,
        }
    }

    fn champion_bounty(&self, streak: i32) -> f32 {
        let depth = streak.unsigned_abs().min(u32::from(self.streak_cap));
        if streak > 0 {
            self.champion_base + self.kill_streak_step * depth as f32
        } else {
            let scaled = self.champion_base * self.death_streak_factor.powi(depth as i32);
            scaled.max(self.champion_minimum)
        }
    }
}

/// Static rules table, loaded from content files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapRulesData {
    pub experience_table: Vec<f32>,
    pub bounties: BountyTable,
    pub respawn_points: BTreeMap<TeamId, Position>,
    /// `spawn_layouts[team][team_size - 1][team_slot]`
    pub spawn_layouts: BTreeMap<TeamId, Vec<Vec<Position>>>,
    /// Champion bounties are reduced until this game time.
    pub kill_gold_reduction_until_ms: f32,
    pub first_gold_time_ms: f32,
    pub gold_per_second: f32,
}

impl MapRulesData {
    pub const DEFAULT_EXPERIENCE_TABLE: [f32; 18] = [
        0.0, 280.0, 660.0, 1140.0, 1720.0, 2400.0, 3180.0, 4060.0, 5040.0, 6120.0, 7300.0,
        8580.0, 9960.0, 11440.0, 13020.0, 14700.0, 16480.0, 18360.0,
    ];

    pub fn with_kill_gold_reduction_until(mut self, until_ms: f32) -> Self {
        self.kill_gold_reduction_until_ms = until_ms;
        self
    }

    pub fn with_first_gold_time(mut self, first_gold_time_ms: f32) -> Self {
        self.first_gold_time_ms = first_gold_time_ms;
        self
    }

    fn default_layouts(fountain: Position, step: f32) -> Vec<Vec<Position>> {
        (1..=6)
            .map(|size| {
                (0..size)
                    .map(|slot| Position::new(fountain.x + step * slot as f32, fountain.y))
                    .collect()
            })
            .collect()
    }
}

impl Default for MapRulesData {
    fn default() -> Self {
        let blue = Position::new(25.9, 280.0);
        let purple = Position::new(13948.0, 14202.0);
        Self {
            experience_table: Self::DEFAULT_EXPERIENCE_TABLE.to_vec(),
            bounties: BountyTable::default(),
            respawn_points: BTreeMap::from([(TeamId::Blue, blue), (TeamId::Purple, purple)]),
            spawn_layouts: BTreeMap::from([
                (TeamId::Blue, Self::default_layouts(blue, 100.0)),
                (TeamId::Purple, Self::default_layouts(purple, -100.0)),
            ]),
            kill_gold_reduction_until_ms: 0.0,
            first_gold_time_ms: 90_000.0,
            gold_per_second: 1.9,
        }
    }
}

impl MapRules for MapRulesData {
    fn experience_table(&self) -> &[f32] {
        &self.experience_table
    }

    fn gold_for(&self, target: &BountyTarget) -> f32 {
        self.bounties.gold_for(target)
    }

    fn respawn_position(&self, team: TeamId) -> Position {
        self.respawn_points
            .get(&team)
            .copied()
            .unwrap_or(Position::ORIGIN)
    }

    fn spawn_position(&self, team: TeamId, team_size: usize, team_slot: usize) -> Option<Position> {
        let layout = self
            .spawn_layouts
            .get(&team)?
            .get(team_size.checked_sub(1)?)?;
        layout.get(team_slot).copied()
    }

    fn is_kill_gold_reduction_active(&self, game_time_ms: f32) -> bool {
        game_time_ms < self.kill_gold_reduction_until_ms
    }

    fn first_gold_time_ms(&self) -> f32 {
        self.first_gold_time_ms
    }

    fn gold_per_second(&self) -> f32 {
        self.gold_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champion(streak: i32) -> BountyTarget {
        BountyTarget {
            kind: ObjectKind::Champion,
            team: TeamId::Purple,
            level: 1,
            streak,
        }
    }

    #[test]
    fn champion_bounty_follows_streak() {
        let table = BountyTable::default();
        assert_eq!(table.gold_for(&champion(0)), 300.0);
        assert_eq!(table.gold_for(&champion(2)), 400.0);
        assert_eq!(table.gold_for(&champion(9)), 550.0);
        assert_eq!(table.gold_for(&champion(-1)), 240.0);
        assert_eq!(table.gold_for(&champion(-20)), 300.0 * 0.8f32.powi(5));
    }

    #[test]
    fn spawn_position_needs_a_team_member() {
        let rules = MapRulesData::default();
        assert_eq!(rules.spawn_position(TeamId::Blue, 0, 0), None);
        assert_eq!(
            rules.spawn_position(TeamId::Blue, 2, 1),
            Some(Position::new(25.9 + 100.0, 280.0))
        );
        assert_eq!(rules.spawn_position(TeamId::Blue, 2, 2), None);
        assert_eq!(rules.spawn_position(TeamId::Neutral, 1, 0), None);
    }

    #[test]
    fn reduction_window_is_time_bound() {
        let rules = MapRulesData::default().with_kill_gold_reduction_until(60_000.0);
        assert!(rules.is_kill_gold_reduction_active(0.0));
        assert!(!rules.is_kill_gold_reduction_active(60_000.0));
    }
}
