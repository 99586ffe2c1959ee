//! Snapshot bookkeeping run at the end of every champion tick.

use std::collections::BTreeMap;
use std::sync::Mutex;

use arena_core::{Champion, ChampionSnapshot, EntityId, UnitHooks};

use crate::api::{Result, RuntimeError};

/// Keeps the latest replicated view of every champion.
#[derive(Debug, Default)]
pub struct SnapshotRecorder {
    latest: Mutex<BTreeMap<EntityId, ChampionSnapshot>>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a champion outside of a tick, e.g. right after spawning.
    pub fn record(&self, champion: &Champion) {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(champion.id(), champion.snapshot());
    }

    pub fn latest(&self, id: EntityId) -> Option<ChampionSnapshot> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }

    /// All snapshots, ordered by entity id.
    pub fn all(&self) -> Vec<ChampionSnapshot> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect()
    }

    pub fn forget(&self, id: EntityId) {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
    }

    /// Serializes every snapshot as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.all()).map_err(RuntimeError::Snapshot)
    }
}

impl UnitHooks for SnapshotRecorder {
    fn replicate(&self, champion: &Champion) {
        self.record(champion);
    }
}
