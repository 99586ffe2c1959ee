//! Fixed-step arena engine.
//!
//! [`ArenaEngine`] is the only writer of [`ArenaState`]. It sequences
//! champion ticks, routes damage, and applies death resolutions so that
//! cross-champion mutations (a killer's ledger changing because a victim
//! died) happen in one place, after the resolver has finished reading.

mod death;
mod errors;

pub use errors::EngineError;

use tracing::{info, warn};

use crate::champion::{Champion, Damageable, Targetable};
use crate::config::GameConfig;
use crate::env::{ChampionTemplate, Env, Notification, PlayerEntry, TickContext};
use crate::spell::{Spell, SpellSlot};
use crate::state::{ArenaState, EntityId, MoveOrder, ObjectKind, Position, TeamId, UnitState};

/// Result of a damage request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageOutcome {
    /// Target already dead or not attackable.
    Ignored,
    /// Target survived with `remaining` health.
    Absorbed { remaining: f32 },
    /// A champion died; `killer` is the champion credited, if any.
    ChampionKilled { killer: Option<EntityId> },
    /// A non-champion unit died; `gold` is what the killer was paid.
    UnitKilled { gold: f32 },
}

/// Engine borrowing the arena state for the duration of a request.
pub struct ArenaEngine<'a> {
    state: &'a mut ArenaState,
    config: &'a GameConfig,
}

impl<'a> ArenaEngine<'a> {
    pub fn new(state: &'a mut ArenaState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &ArenaState {
        &*self.state
    }

    /// Builds a champion for `player` and places it at its spawn coordinate.
    ///
    /// Falls back to the team's respawn coordinate when the map has no
    /// spawn layout for the player's team size or slot.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Build`] when the template is corrupt.
    pub fn spawn_champion(
        &mut self,
        env: Env<'_>,
        template: &ChampionTemplate,
        player: &PlayerEntry,
    ) -> Result<EntityId, EngineError> {
        let rules = env.rules();
        let id = self.state.allocate_id();
        let mut champion =
            Champion::from_template(id, template, player, self.config, rules.gold_per_second())?;

        let position = champion
            .spawn_position(rules, env.roster())
            .unwrap_or_else(|| {
                warn!(
                    champion = %id,
                    team = %champion.team(),
                    team_slot = player.team_slot,
                    "no spawn layout; using respawn point"
                );
                rules.respawn_position(champion.team())
            });
        champion.set_position(position);

        info!(champion = %id, model = %template.model, player = player.player_id, "champion spawned");
        env.notify(Notification::ChampionSpawned {
            champion: id,
            team: champion.team(),
        });
        self.state.champions.push(champion);
        Ok(id)
    }

    /// Removes a champion at match teardown.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownChampion`] when `id` is not in the arena.
    pub fn remove_champion(&mut self, id: EntityId) -> Result<Champion, EngineError> {
        let index = self
            .state
            .champions
            .iter()
            .position(|c| c.id() == id)
            .ok_or(EngineError::UnknownChampion(id))?;
        Ok(self.state.champions.remove(index))
    }

    /// Adds a non-champion unit with full health.
    pub fn add_unit(
        &mut self,
        kind: ObjectKind,
        team: TeamId,
        position: Position,
        max_health: f32,
        level: u8,
    ) -> EntityId {
        let id = self.state.allocate_id();
        let unit = UnitState::new(id, kind, team, position)
            .with_health(max_health)
            .with_level(level);
        self.state.units.push(unit);
        id
    }

    /// Advances match time and ticks every champion once, in spawn order.
    ///
    /// All champions see the same frame-start world snapshot.
    pub fn tick(&mut self, env: Env<'_>, delta_ms: f32) {
        self.state.match_state.game_time_ms += delta_ms;
        let world = self.state.world_snapshot();
        let ctx = TickContext {
            world: &world,
            env,
            config: self.config,
            game_time_ms: self.state.match_state.game_time_ms,
        };
        for champion in &mut self.state.champions {
            champion.update(&ctx, delta_ms);
        }
    }

    /// Applies `amount` damage from `attacker` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownEntity`] when `target` does not exist.
    pub fn apply_damage(
        &mut self,
        env: Env<'_>,
        target: EntityId,
        attacker: Option<EntityId>,
        amount: f32,
    ) -> Result<DamageOutcome, EngineError> {
        if let Some(champion) = self.state.champion_mut(target) {
            if champion.is_dead() {
                return Ok(DamageOutcome::Ignored);
            }
            let Some(victim) = champion.absorb_hit(attacker, amount) else {
                return Ok(DamageOutcome::Absorbed {
                    remaining: champion.health().current,
                });
            };
            let killer = death::champion_died(self.state, &env, &victim, attacker);
            info!(victim = %target, finisher = ?attacker, killer = ?killer, "champion slain");
            return Ok(DamageOutcome::ChampionKilled { killer });
        }

        let unit = self
            .state
            .unit_mut(target)
            .ok_or(EngineError::UnknownEntity(target))?;
        if unit.is_dead || !unit.kind.is_attackable() {
            return Ok(DamageOutcome::Ignored);
        }
        unit.health.drain(amount);
        if !unit.health.is_depleted() {
            return Ok(DamageOutcome::Absorbed {
                remaining: unit.health.current,
            });
        }
        unit.is_dead = true;
        let unit = unit.clone();
        let gold = death::unit_died(self.state, &env, &unit, attacker);
        Ok(DamageOutcome::UnitKilled { gold })
    }

    /// Spends a skill point on the spell in `slot`.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownChampion`], or [`EngineError::SpellLevel`] when
    /// the level-up is refused (nothing changes in that case).
    pub fn level_up_spell(&mut self, id: EntityId, slot: SpellSlot) -> Result<&Spell, EngineError> {
        let champion = self
            .state
            .champion_mut(id)
            .ok_or(EngineError::UnknownChampion(id))?;
        Ok(champion.level_up_spell(slot)?)
    }

    /// Adds experience from an external source; levels are applied on the
    /// champion's next tick.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownChampion`] when `id` is not in the arena.
    pub fn grant_experience(&mut self, id: EntityId, amount: f32) -> Result<(), EngineError> {
        self.champion_mut(id)?.stats_mut().add_experience(amount);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`EngineError::UnknownChampion`] when `id` is not in the arena.
    pub fn set_move_order(&mut self, id: EntityId, order: MoveOrder) -> Result<(), EngineError> {
        self.champion_mut(id)?.set_move_order(order);
        Ok(())
    }

    /// Sets or clears a champion's target, notifying when a new target is set.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownChampion`] when `id` is not in the arena.
    pub fn set_target(
        &mut self,
        env: Env<'_>,
        id: EntityId,
        target: Option<EntityId>,
    ) -> Result<(), EngineError> {
        let champion = self.champion_mut(id)?;
        if champion.set_target(target)
            && let Some(target) = target
        {
            env.notify(Notification::TargetChanged {
                champion: id,
                target,
            });
        }
        Ok(())
    }

    fn champion_mut(&mut self, id: EntityId) -> Result<&mut Champion, EngineError> {
        self.state
            .champion_mut(id)
            .ok_or(EngineError::UnknownChampion(id))
    }
}
