//! Collaborator traits the simulation reads from and writes to.
//!
//! Oracles expose map rules, the player roster, champion templates and the
//! live world directory. The [`Env`] aggregate bundles the ones a tick needs
//! so the engine never reaches for process-wide state.
mod champions;
mod hooks;
mod notify;
mod roster;
mod rules;
mod world;

pub use champions::{
    ChampionCatalog, ChampionOracle, ChampionTemplate, LevelUnlockTable, SpellUnlockTable,
};
pub use hooks::{NoHooks, UnitHooks};
pub use notify::{Notification, NotificationSink, NullSink, RecordingSink};
pub use roster::{PlayerEntry, PlayerRoster, Roster};
pub use rules::{BountyTable, BountyTarget, MapRules, MapRulesData};
pub use world::{WorldDirectory, WorldObject, WorldSnapshot};

use crate::config::GameConfig;

/// Read-only collaborators plus the notification sink.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    rules: &'a dyn MapRules,
    roster: &'a dyn PlayerRoster,
    sink: &'a dyn NotificationSink,
    hooks: &'a dyn UnitHooks,
}

impl<'a> Env<'a> {
    pub fn new(
        rules: &'a dyn MapRules,
        roster: &'a dyn PlayerRoster,
        sink: &'a dyn NotificationSink,
    ) -> Self {
        Self {
            rules,
            roster,
            sink,
            hooks: &NoHooks,
        }
    }

    pub fn with_hooks(mut self, hooks: &'a dyn UnitHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn rules(&self) -> &'a dyn MapRules {
        self.rules
    }

    pub fn roster(&self) -> &'a dyn PlayerRoster {
        self.roster
    }

    pub fn hooks(&self) -> &'a dyn UnitHooks {
        self.hooks
    }

    pub fn notify(&self, notification: Notification) {
        self.sink.notify(notification);
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}

/// Everything a single champion tick may look at.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    pub world: &'a dyn WorldDirectory,
    pub env: Env<'a>,
    pub config: &'a GameConfig,
    pub game_time_ms: f32,
}
