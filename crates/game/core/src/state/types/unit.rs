use super::{EntityId, ObjectKind, Position, TeamId};
use crate::env::WorldObject;
use crate::stats::ResourcePool;

/// A non-champion arena object (minion, monster, turret, structure).
///
/// Only the fields the champion simulation reads are tracked here; AI and
/// pathing for these units live elsewhere.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: EntityId,
    pub kind: ObjectKind,
    pub team: TeamId,
    pub position: Position,
    pub health: ResourcePool,
    pub level: u8,
    pub is_dead: bool,
}

impl UnitState {
    pub fn new(id: EntityId, kind: ObjectKind, team: TeamId, position: Position) -> Self {
        Self {
            id,
            kind,
            team,
            position,
            health: ResourcePool::full(1.0),
            level: 1,
            is_dead: false,
        }
    }

    pub fn with_health(mut self, maximum: f32) -> Self {
        self.health = ResourcePool::full(maximum);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn as_world_object(&self) -> WorldObject {
        WorldObject {
            id: self.id,
            kind: self.kind,
            team: self.team,
            position: self.position,
            is_dead: self.is_dead,
        }
    }
}
