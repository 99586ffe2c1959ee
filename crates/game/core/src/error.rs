//! Common error infrastructure for arena-core.
//!
//! Domain errors (`SpellLevelError`, `ChampionBuildError`, `EngineError`) live
//! next to the code that produces them and share the classification below.
//!
//! Most in-tick edge cases (no killer, negative bounty, missing roster entry)
//! are not errors at all: they resolve to a defined no-op outcome. Errors are
//! reserved for rejected requests and corrupt construction input.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request had no effect but may succeed later (e.g. no skill points yet).
    Recoverable,

    /// Invalid input that should not be retried unchanged (e.g. unknown entity).
    Validation,

    /// Unexpected state inconsistency; indicates a bug.
    Internal,

    /// Construction input is corrupt; the entity cannot exist.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for metrics and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
