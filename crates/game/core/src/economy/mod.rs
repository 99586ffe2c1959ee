//! Gold economy: per-champion ledgers and death resolution.
mod ledger;
mod resolver;

pub use ledger::{EconomyLedger, killer_streak_after, victim_streak_after};
pub use resolver::{
    DeathContext, DeathResolution, EconomyCommand, KillerView, MAX_DEATH_COMMANDS, VictimView,
    resolve_champion_death,
};
