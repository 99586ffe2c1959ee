use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellSlot;

/// A champion template that cannot be laid out into spell slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChampionBuildError {
    #[error("champion template has no model name")]
    MissingModel,

    #[error("{model}: {count} basic spells, at most {max} fit", max = SpellSlot::BASIC_COUNT)]
    TooManyBasicSpells { model: String, count: usize },

    #[error("{model}: {count} passives, at most {max} fit", max = GameConfig::MAX_PASSIVES)]
    TooManyPassives { model: String, count: usize },

    #[error("{model}: {count} extra spells, at most {max} fit", max = GameConfig::MAX_EXTRA_SPELLS)]
    TooManyExtraSpells { model: String, count: usize },
}

impl GameError for ChampionBuildError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingModel => "CHAMPION_MISSING_MODEL",
            Self::TooManyBasicSpells { .. } => "CHAMPION_TOO_MANY_BASIC_SPELLS",
            Self::TooManyPassives { .. } => "CHAMPION_TOO_MANY_PASSIVES",
            Self::TooManyExtraSpells { .. } => "CHAMPION_TOO_MANY_EXTRA_SPELLS",
        }
    }
}
