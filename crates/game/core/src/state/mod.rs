//! Authoritative arena state.
//!
//! The state owns every champion and non-champion unit plus the few
//! match-global flags. Runtime layers read it freely but mutate it only
//! through [`crate::engine::ArenaEngine`].
mod types;

pub use types::{EntityId, MoveOrder, ObjectKind, Position, TeamId, UnitState};

use crate::champion::Champion;
use crate::env::WorldSnapshot;

/// Match-global progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    /// Simulated time since match start.
    pub game_time_ms: f32,
    /// Set once, by the first champion kill.
    first_blood: bool,
}

impl MatchState {
    pub fn first_blood(&self) -> bool {
        self.first_blood
    }

    pub(crate) fn mark_first_blood(&mut self) {
        self.first_blood = true;
    }
}

/// Everything the simulation mutates.
#[derive(Clone, Debug, PartialEq)]
pub struct ArenaState {
    pub champions: Vec<Champion>,
    pub units: Vec<UnitState>,
    pub match_state: MatchState,
    /// Sequential id allocator; ids are never reused.
    next_entity_id: u32,
}

impl ArenaState {
    pub fn new() -> Self {
        Self {
            champions: Vec::new(),
            units: Vec::new(),
            match_state: MatchState::default(),
            next_entity_id: 1,
        }
    }

    pub(crate) fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    pub fn champion(&self, id: EntityId) -> Option<&Champion> {
        self.champions.iter().find(|c| c.id() == id)
    }

    pub fn champion_mut(&mut self, id: EntityId) -> Option<&mut Champion> {
        self.champions.iter_mut().find(|c| c.id() == id)
    }

    pub fn unit(&self, id: EntityId) -> Option<&UnitState> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut UnitState> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Copy of every object's position, team and liveness.
    pub fn world_snapshot(&self) -> WorldSnapshot {
        self.champions
            .iter()
            .map(Champion::as_world_object)
            .chain(self.units.iter().map(UnitState::as_world_object))
            .collect()
    }
}

impl Default for ArenaState {
    fn default() -> Self {
        Self::new()
    }
}
