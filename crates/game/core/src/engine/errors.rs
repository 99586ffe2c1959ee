//! Errors surfaced by [`super::ArenaEngine`] requests.

use crate::champion::ChampionBuildError;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::SpellLevelError;
use crate::state::EntityId;

/// Failures of externally issued engine requests.
///
/// In-tick edge cases (no killer, negative bounty, missing roster entry)
/// never surface here; they resolve to defined outcomes instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("no champion with id {0}")]
    UnknownChampion(EntityId),

    #[error("no champion or unit with id {0}")]
    UnknownEntity(EntityId),

    #[error(transparent)]
    Build(#[from] ChampionBuildError),

    #[error(transparent)]
    SpellLevel(#[from] SpellLevelError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownChampion(_) | Self::UnknownEntity(_) => ErrorSeverity::Validation,
            Self::Build(err) => err.severity(),
            Self::SpellLevel(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownChampion(_) => "ENGINE_UNKNOWN_CHAMPION",
            Self::UnknownEntity(_) => "ENGINE_UNKNOWN_ENTITY",
            Self::Build(err) => err.error_code(),
            Self::SpellLevel(err) => err.error_code(),
        }
    }
}
