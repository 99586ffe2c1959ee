//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into `arena-core` types:
//! - Game configuration (TOML)
//! - Map rules: experience curve, bounties, spawn layouts (RON)
//! - Champion templates and spell unlock tables (RON)
//! - Match roster (TOML)
//!
//! Content is consumed by runtime oracles and never appears in arena state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ChampionLoader, ConfigLoader, ContentFactory, LoadResult, MatchContent, RosterLoader,
    RulesLoader,
};
