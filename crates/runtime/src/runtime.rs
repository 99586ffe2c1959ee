//! High-level match orchestrator.
//!
//! [`MatchRuntime`] owns the arena state and the collaborators the engine
//! needs each tick (oracles, event bus, snapshot recorder), and exposes a
//! builder-based API for clients to drive the simulation.

use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info};

use arena_core::{
    ArenaEngine, ArenaState, Champion, ChampionOracle, ChampionSnapshot, DamageOutcome, EntityId,
    Env, GameConfig, MoveOrder, Notification, ObjectKind, Position, SpellSlot, TeamId,
};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, Topic};
use crate::oracle::OracleManager;
use crate::replication::SnapshotRecorder;

/// Runtime configuration shared across the orchestrator and the engine.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Simulated milliseconds per tick.
    pub tick_ms: f32,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    /// Shortest accepted tick; anything below rounds to a zero-length
    /// wall-clock interval.
    pub const MIN_TICK_MS: f32 = 0.001;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_ms: 1000.0 / 30.0,
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that drives one match.
pub struct MatchRuntime {
    state: ArenaState,
    config: RuntimeConfig,
    oracles: OracleManager,
    bus: EventBus,
    recorder: SnapshotRecorder,
}

impl MatchRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Splits the runtime into an engine over the state and the matching env.
    fn engine(&mut self) -> (ArenaEngine<'_>, Env<'_>) {
        let env = Env::new(
            self.oracles.rules.as_ref(),
            self.oracles.roster.as_ref(),
            &self.bus,
        )
        .with_hooks(&self.recorder);
        (ArenaEngine::new(&mut self.state, &self.config.game_config), env)
    }

    /// Advances the match by one tick of `tick_ms`.
    pub fn step(&mut self) {
        let tick_ms = self.config.tick_ms;
        let (mut engine, env) = self.engine();
        engine.tick(env, tick_ms);
    }

    /// Runs as many whole ticks as fit in `duration_ms`; returns the count.
    pub fn run_for(&mut self, duration_ms: f32) -> u32 {
        let ticks = (duration_ms / self.config.tick_ms).floor() as u32;
        for _ in 0..ticks {
            self.step();
        }
        debug!(ticks, game_time_ms = self.game_time_ms(), "ran fixed ticks");
        ticks
    }

    /// Runs `ticks` ticks paced at wall-clock `tick_ms` intervals.
    pub async fn run_paced(&mut self, ticks: u32) {
        let period =
            Duration::from_secs_f32(self.config.tick_ms / 1000.0).max(Duration::from_nanos(1));
        let mut interval = tokio::time::interval(period);
        for _ in 0..ticks {
            interval.tick().await;
            self.step();
        }
    }

    /// Routes damage through the engine.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Engine`] when `target` does not exist.
    pub fn apply_damage(
        &mut self,
        target: EntityId,
        attacker: Option<EntityId>,
        amount: f32,
    ) -> Result<DamageOutcome> {
        let (mut engine, env) = self.engine();
        Ok(engine.apply_damage(env, target, attacker, amount)?)
    }

    /// Spends a skill point; returns the spell's new level.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Engine`] when the champion is unknown or the
    /// level-up is refused.
    pub fn level_up_spell(&mut self, champion: EntityId, slot: SpellSlot) -> Result<u8> {
        let (mut engine, _) = self.engine();
        let level = engine.level_up_spell(champion, slot)?.level();
        Ok(level)
    }

    pub fn grant_experience(&mut self, champion: EntityId, amount: f32) -> Result<()> {
        let (mut engine, _) = self.engine();
        Ok(engine.grant_experience(champion, amount)?)
    }

    pub fn set_move_order(&mut self, champion: EntityId, order: MoveOrder) -> Result<()> {
        let (mut engine, _) = self.engine();
        Ok(engine.set_move_order(champion, order)?)
    }

    pub fn set_target(&mut self, champion: EntityId, target: Option<EntityId>) -> Result<()> {
        let (mut engine, env) = self.engine();
        Ok(engine.set_target(env, champion, target)?)
    }

    /// Adds a non-champion unit (minion, monster, structure) to the arena.
    pub fn add_unit(
        &mut self,
        kind: ObjectKind,
        team: TeamId,
        position: Position,
        max_health: f32,
        level: u8,
    ) -> EntityId {
        let (mut engine, _) = self.engine();
        engine.add_unit(kind, team, position, max_health, level)
    }

    /// Removes a champion and forgets its snapshot.
    pub fn remove_champion(&mut self, champion: EntityId) -> Result<Champion> {
        let (mut engine, _) = self.engine();
        let removed = engine.remove_champion(champion)?;
        self.recorder.forget(champion);
        Ok(removed)
    }

    /// Champion controlled by `player_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownPlayer`] when no champion belongs to
    /// that player.
    pub fn champion_of(&self, player_id: u32) -> Result<EntityId> {
        self.state
            .champions
            .iter()
            .find(|c| c.identity().player_id == player_id)
            .map(Champion::id)
            .ok_or(RuntimeError::UnknownPlayer(player_id))
    }

    /// Latest replicated snapshot of a champion.
    pub fn snapshot(&self, champion: EntityId) -> Result<ChampionSnapshot> {
        self.recorder
            .latest(champion)
            .ok_or(RuntimeError::MissingSnapshot(champion))
    }

    /// Subscribe to notifications on one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Notification> {
        self.bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn snapshots(&self) -> &SnapshotRecorder {
        &self.recorder
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn state(&self) -> &ArenaState {
        &self.state
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn game_time_ms(&self) -> f32 {
        self.state.match_state.game_time_ms
    }
}

/// Builder for [`MatchRuntime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    bus: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Share an existing event bus instead of creating one.
    ///
    /// Lets callers subscribe before the roster is spawned.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Build the runtime and spawn one champion per roster entry, in roster
    /// order.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::MissingOracles`], [`RuntimeError::InvalidTickLength`]
    /// (below [`RuntimeConfig::MIN_TICK_MS`] or not finite),
    /// [`RuntimeError::MissingTemplate`] when a player picked an unknown
    /// champion, or [`RuntimeError::Engine`] when a template is corrupt.
    pub fn build(self) -> Result<MatchRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let tick_ms = self.config.tick_ms;
        if !tick_ms.is_finite() || tick_ms < RuntimeConfig::MIN_TICK_MS {
            return Err(RuntimeError::InvalidTickLength(tick_ms));
        }

        let bus = self
            .bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        let mut runtime = MatchRuntime {
            state: ArenaState::new(),
            config: self.config,
            oracles,
            bus,
            recorder: SnapshotRecorder::new(),
        };

        let roster = runtime.oracles.roster.clone();
        let champions = runtime.oracles.champions.clone();
        for player in &roster.players {
            let template = champions.template(&player.champion).ok_or_else(|| {
                RuntimeError::MissingTemplate {
                    player_id: player.player_id,
                    model: player.champion.clone(),
                }
            })?;
            let (mut engine, env) = runtime.engine();
            let id = engine.spawn_champion(env, template, player)?;
            if let Some(champion) = runtime.state.champion(id) {
                runtime.recorder.record(champion);
            }
        }

        info!(
            champions = runtime.state.champions.len(),
            tick_ms, "match runtime ready"
        );
        Ok(runtime)
    }
}
