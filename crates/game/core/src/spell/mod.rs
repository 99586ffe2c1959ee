//! Spell slots, spell instances and per-slot leveling.
mod slot;
#[allow(clippy::module_inception)]
mod spell;
mod table;

pub use slot::SpellSlot;
pub use spell::{ITEM_USE_STUB, RECALL_SPELL, Spell};
pub use table::SpellSlotTable;

use crate::error::{ErrorSeverity, GameError};

/// Reasons a spell level-up request has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellLevelError {
    #[error("no skill points available")]
    NoSkillPoints,

    #[error("no spell bound to slot {0}")]
    SlotEmpty(SpellSlot),

    #[error("spell in slot {slot} cannot advance past level {level} yet")]
    LevelCapReached { slot: SpellSlot, level: u8 },
}

impl GameError for SpellLevelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoSkillPoints | Self::LevelCapReached { .. } => ErrorSeverity::Recoverable,
            Self::SlotEmpty(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSkillPoints => "SPELL_NO_SKILL_POINTS",
            Self::SlotEmpty(_) => "SPELL_SLOT_EMPTY",
            Self::LevelCapReached { .. } => "SPELL_LEVEL_CAP_REACHED",
        }
    }
}
