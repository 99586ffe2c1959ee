//! The champion aggregate.
//!
//! A [`Champion`] owns its stats, spells, economy ledger and respawn timer.
//! Everything else it needs during a tick (world directory, map rules,
//! notification sink) arrives through [`crate::env::TickContext`].
mod capabilities;
mod error;
mod identity;
mod snapshot;
mod update;

pub use capabilities::{CrowdControl, CrowdControlGated, Damageable, Targetable};
pub use error::ChampionBuildError;
pub use identity::ChampionIdentity;
pub use snapshot::ChampionSnapshot;

use tracing::{debug, warn};

use crate::config::GameConfig;
use crate::economy::{EconomyCommand, EconomyLedger, VictimView};
use crate::env::{
    ChampionTemplate, MapRules, Notification, PlayerEntry, PlayerRoster, SpellUnlockTable,
    WorldObject,
};
use crate::progression::SkillPoints;
use crate::respawn::RespawnScheduler;
use crate::spell::{ITEM_USE_STUB, RECALL_SPELL, Spell, SpellLevelError, SpellSlot, SpellSlotTable};
use crate::state::{EntityId, MoveOrder, ObjectKind, Position, TeamId};
use crate::stats::{ChampionStats, ResourcePool, ScoreCard};
use crate::targeting::Seeker;

/// A player-controlled combat unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Champion {
    id: EntityId,
    identity: ChampionIdentity,
    position: Position,
    stats: ChampionStats,
    score: ScoreCard,
    skill_points: SkillPoints,
    spells: SpellSlotTable,
    unlocks: SpellUnlockTable,
    ledger: EconomyLedger,
    respawn: RespawnScheduler,
    move_order: MoveOrder,
    target: Option<EntityId>,
    crowd_control: CrowdControl,
    is_dead: bool,
}

impl Champion {
    /// Builds a champion from its template and the owning player's entry.
    ///
    /// Slot layout: basic spells at 0..=3, the player's summoner spells at
    /// 4..=5, item-use stubs at 6..=12, recall at 13, passives from 14 and
    /// extra spells from 45. Summoner and extra spells start at level 1.
    ///
    /// # Errors
    ///
    /// Returns [`ChampionBuildError`] when the template's spell names do not
    /// fit the slot layout.
    pub fn from_template(
        id: EntityId,
        template: &ChampionTemplate,
        player: &PlayerEntry,
        config: &GameConfig,
        gold_per_second: f32,
    ) -> Result<Self, ChampionBuildError> {
        let spells = Self::layout_spells(template, player)?;

        Ok(Self {
            id,
            identity: ChampionIdentity {
                player_id: player.player_id,
                team: player.team,
                team_slot: player.team_slot,
                model: template.model.clone(),
                skin: player.skin,
            },
            position: Position::ORIGIN,
            stats: ChampionStats::new(&template.base_stats, gold_per_second),
            score: ScoreCard::default(),
            skill_points: SkillPoints::new(config.starting_skill_points),
            spells,
            unlocks: template.unlocks.clone(),
            ledger: EconomyLedger::new(config.starting_gold),
            respawn: RespawnScheduler::new(),
            move_order: MoveOrder::default(),
            target: None,
            crowd_control: CrowdControl::empty(),
            is_dead: false,
        })
    }

    fn layout_spells(
        template: &ChampionTemplate,
        player: &PlayerEntry,
    ) -> Result<SpellSlotTable, ChampionBuildError> {
        let model = &template.model;
        if model.trim().is_empty() {
            return Err(ChampionBuildError::MissingModel);
        }
        if template.spells.len() > usize::from(SpellSlot::BASIC_COUNT) {
            return Err(ChampionBuildError::TooManyBasicSpells {
                model: model.clone(),
                count: template.spells.len(),
            });
        }
        if template.passives.len() > GameConfig::MAX_PASSIVES {
            return Err(ChampionBuildError::TooManyPassives {
                model: model.clone(),
                count: template.passives.len(),
            });
        }
        if template.extra_spells.len() > GameConfig::MAX_EXTRA_SPELLS {
            return Err(ChampionBuildError::TooManyExtraSpells {
                model: model.clone(),
                count: template.extra_spells.len(),
            });
        }

        let mut table = SpellSlotTable::new();
        let named = |names: &[String]| {
            names
                .iter()
                .enumerate()
                .filter(|(_, name)| !name.is_empty())
                .map(|(i, name)| (i as u8, name.clone()))
                .collect::<Vec<_>>()
        };

        for (i, name) in named(&template.spells) {
            table.insert(SpellSlot::Basic(i), name);
        }
        for (i, name) in named(&player.summoner_spells) {
            table.insert(SpellSlot::Summoner(i), name).level_up();
        }
        for i in 0..SpellSlot::ITEM_USE_COUNT {
            table.insert(SpellSlot::ItemUse(i), ITEM_USE_STUB);
        }
        table
            .insert(SpellSlot::Recall, RECALL_SPELL)
            .set_enabled(true);
        for (i, name) in named(&template.passives) {
            table.insert(SpellSlot::Passive(i), name);
        }
        for (i, name) in named(&template.extra_spells) {
            table.insert(SpellSlot::Extra(i), name).level_up();
        }
        Ok(table)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn identity(&self) -> &ChampionIdentity {
        &self.identity
    }

    pub fn team(&self) -> TeamId {
        self.identity.team
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn stats(&self) -> &ChampionStats {
        &self.stats
    }

    /// Mutable stats for the external stat/item layers.
    pub fn stats_mut(&mut self) -> &mut ChampionStats {
        &mut self.stats
    }

    pub fn score(&self) -> &ScoreCard {
        &self.score
    }

    pub fn skill_points(&self) -> SkillPoints {
        self.skill_points
    }

    pub fn spells(&self) -> &SpellSlotTable {
        &self.spells
    }

    pub fn spells_mut(&mut self) -> &mut SpellSlotTable {
        &mut self.spells
    }

    pub fn spell(&self, slot: SpellSlot) -> Option<&Spell> {
        self.spells.get(slot)
    }

    pub fn spell_by_name(&self, name: &str) -> Option<&Spell> {
        self.spells.find_by_name(name)
    }

    pub fn ledger(&self) -> &EconomyLedger {
        &self.ledger
    }

    pub fn respawn_scheduler(&self) -> &RespawnScheduler {
        &self.respawn
    }

    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    pub fn set_move_order(&mut self, order: MoveOrder) {
        self.move_order = order;
    }

    pub fn set_crowd_control(&mut self, crowd_control: CrowdControl) {
        self.crowd_control = crowd_control;
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Raises the spell in `slot`, spending one skill point.
    ///
    /// # Errors
    ///
    /// See [`SpellSlotTable::level_up`]; on error nothing changes.
    pub fn level_up_spell(&mut self, slot: SpellSlot) -> Result<&Spell, SpellLevelError> {
        self.spells.level_up(
            slot,
            &mut self.skill_points,
            self.stats.level(),
            &self.unlocks,
        )
    }

    pub fn update_skin(&mut self, skin: u8) {
        self.identity.skin = skin;
    }

    pub fn champion_hash(&self) -> i32 {
        self.identity.champion_hash()
    }

    /// Players configured on this champion's team, capped at the largest
    /// spawn layout. Zero when the owning player is not on the roster.
    pub fn team_size(&self, roster: &dyn PlayerRoster) -> usize {
        match roster.team_of(self.identity.player_id) {
            Some(_) => roster
                .team_size(self.identity.team)
                .min(GameConfig::MAX_TEAM_SPAWN_SIZE),
            None => {
                warn!(
                    champion = %self.id,
                    player = self.identity.player_id,
                    "player missing from roster"
                );
                0
            }
        }
    }

    /// Match-start coordinate for this champion, if the map has a layout for
    /// its team size and slot.
    pub fn spawn_position(
        &self,
        rules: &dyn MapRules,
        roster: &dyn PlayerRoster,
    ) -> Option<Position> {
        let team_size = self.team_size(roster);
        rules.spawn_position(
            self.identity.team,
            team_size,
            self.identity.team_slot as usize,
        )
    }

    /// Teleports to the team's respawn coordinate.
    pub fn recall(&mut self, rules: &dyn MapRules) {
        self.position = rules.respawn_position(self.identity.team);
    }

    /// Minion/monster kill by this champion. Returns the gold notification
    /// when gold was paid.
    pub fn record_minion_kill(
        &mut self,
        minion: EntityId,
        kind: ObjectKind,
        gold: f32,
    ) -> Option<Notification> {
        self.score.minions_killed += 1;
        if kind == ObjectKind::Monster {
            self.score.neutral_minions_killed += 1;
        }
        if gold <= 0.0 {
            return None;
        }
        if self.ledger.record_minion_gold(gold) {
            debug!(
                champion = %self.id,
                streak = self.ledger.streak(),
                "death streak eased by minion gold"
            );
        }
        Some(Notification::GoldAdded {
            champion: self.id,
            source: minion,
            amount: gold,
        })
    }

    /// Applies one death-resolution command addressed to this champion.
    ///
    /// Target clearing is arena-wide and handled by the engine.
    pub(crate) fn apply_economy(&mut self, command: &EconomyCommand) {
        match *command {
            EconomyCommand::ScheduleRespawn { level, .. } => self.respawn.schedule_death(level),
            EconomyCommand::RecordDeath { .. } => self.score.deaths += 1,
            EconomyCommand::ClearDeathStreakGold { .. } => self.ledger.clear_death_streak_gold(),
            EconomyCommand::RecordKill { .. } => self.score.kills += 1,
            EconomyCommand::SetStreak { streak, .. } => self.ledger.set_streak(streak),
            EconomyCommand::CreditGold { amount, .. } => self.ledger.credit(amount),
            EconomyCommand::StopTargeting { .. } | EconomyCommand::MarkFirstBlood => {}
        }
    }

    /// Applies a hit. Damage on a dead champion is ignored.
    ///
    /// Every hit, lethal or not, refreshes the execution-credit window for
    /// `attacker`, but only after the death view is taken: a lethal hit
    /// resolves against whoever damaged the champion before it.
    pub(crate) fn absorb_hit(
        &mut self,
        attacker: Option<EntityId>,
        amount: f32,
    ) -> Option<VictimView> {
        if self.is_dead {
            return None;
        }
        self.stats.health.drain(amount);
        let death = if self.stats.health.is_depleted() {
            self.is_dead = true;
            Some(self.victim_view())
        } else {
            None
        };
        if let Some(attacker) = attacker {
            self.ledger.record_damage(attacker);
        }
        death
    }

    fn victim_view(&self) -> VictimView {
        VictimView {
            id: self.id,
            team: self.identity.team,
            level: self.stats.level(),
            streak: self.ledger.streak(),
            execution_credit_ms: self.ledger.execution_credit_ms(),
            last_damager: self.ledger.last_damager(),
        }
    }

    pub(crate) fn seeker(&self, config: &GameConfig) -> Seeker {
        Seeker {
            id: self.id,
            team: self.identity.team,
            position: self.position,
            range: self.stats.attack_range.max(config.detection_range),
        }
    }

    pub fn as_world_object(&self) -> WorldObject {
        WorldObject {
            id: self.id,
            kind: ObjectKind::Champion,
            team: self.identity.team,
            position: self.position,
            is_dead: self.is_dead,
        }
    }

    pub fn snapshot(&self) -> ChampionSnapshot {
        ChampionSnapshot {
            id: self.id,
            player_id: self.identity.player_id,
            team: self.identity.team,
            model: self.identity.model.clone(),
            skin: self.identity.skin,
            champion_hash: self.champion_hash(),
            position: self.position,
            level: self.stats.level(),
            experience: self.stats.experience,
            health: self.stats.health,
            mana: self.stats.mana,
            gold: self.ledger.gold(),
            streak: self.ledger.streak(),
            skill_points: self.skill_points.get(),
            score: self.score,
            move_order: self.move_order,
            target: self.target,
            is_dead: self.is_dead,
            respawn_in_ms: self.respawn.remaining_ms(),
            spells: self.spells.iter().cloned().collect(),
        }
    }
}

impl Damageable for Champion {
    fn health(&self) -> &ResourcePool {
        &self.stats.health
    }

    fn is_dead(&self) -> bool {
        self.is_dead
    }
}

impl Targetable for Champion {
    fn target(&self) -> Option<EntityId> {
        self.target
    }

    fn set_target(&mut self, target: Option<EntityId>) -> bool {
        let changed = self.target != target;
        self.target = target;
        changed
    }
}

impl CrowdControlGated for Champion {
    fn crowd_control(&self) -> CrowdControl {
        self.crowd_control
    }
}
