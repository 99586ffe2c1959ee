//! Deterministic champion simulation for a multiplayer arena.
//!
//! `arena-core` models the player-controlled champion: spell slots and
//! leveling, experience progression, attack-move targeting, respawn, and the
//! kill/death gold economy. It performs no I/O. External collaborators (map
//! rules, roster, world directory, notification sink) are traits in [`env`],
//! and every state mutation flows through [`engine::ArenaEngine`].
pub mod champion;
pub mod config;
pub mod economy;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod respawn;
pub mod spell;
pub mod state;
pub mod stats;
pub mod targeting;

pub use champion::{
    Champion, ChampionBuildError, ChampionIdentity, ChampionSnapshot, CrowdControl,
    CrowdControlGated, Damageable, Targetable,
};
pub use config::GameConfig;
pub use economy::{
    DeathContext, DeathResolution, EconomyCommand, EconomyLedger, resolve_champion_death,
};
pub use engine::{ArenaEngine, DamageOutcome, EngineError};
pub use env::{
    BountyTable, BountyTarget, ChampionCatalog, ChampionOracle, ChampionTemplate, Env,
    LevelUnlockTable, MapRules, MapRulesData, NoHooks, Notification, NotificationSink, NullSink,
    PlayerEntry, PlayerRoster, RecordingSink, Roster, SpellUnlockTable, TickContext, UnitHooks,
    WorldDirectory, WorldObject, WorldSnapshot,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::SkillPoints;
pub use respawn::RespawnScheduler;
pub use spell::{Spell, SpellLevelError, SpellSlot, SpellSlotTable};
pub use state::{
    ArenaState, EntityId, MatchState, MoveOrder, ObjectKind, Position, TeamId, UnitState,
};
pub use stats::{BaseStats, ChampionStats, ResourceKind, ResourcePool, ScoreCard};
