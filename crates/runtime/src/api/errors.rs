//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, the arena engine, and snapshot export
//! so clients can bubble them up with consistent context.
use arena_core::{EngineError, EntityId, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error("tick length must be at least 0.001 ms, got {0} ms")]
    InvalidTickLength(f32),

    #[error("player {player_id} picked '{model}', which has no champion template")]
    MissingTemplate { player_id: u32, model: String },

    #[error("no champion for player {0}")]
    UnknownPlayer(u32),

    #[error("no snapshot recorded for champion {0}")]
    MissingSnapshot(EntityId),

    #[error("failed to serialize snapshots")]
    Snapshot(#[source] serde_json::Error),
}

impl RuntimeError {
    /// Severity of the underlying failure.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Engine(err) => err.severity(),
            Self::MissingSnapshot(_) | Self::UnknownPlayer(_) => ErrorSeverity::Validation,
            Self::Snapshot(_) => ErrorSeverity::Internal,
            Self::Content(_)
            | Self::MissingOracles
            | Self::InvalidTickLength(_)
            | Self::MissingTemplate { .. } => ErrorSeverity::Fatal,
        }
    }
}
