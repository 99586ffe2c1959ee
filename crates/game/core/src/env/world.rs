//! World object directory.

use crate::state::{EntityId, ObjectKind, Position, TeamId};

/// Read-only view of one live simulation object.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldObject {
    pub id: EntityId,
    pub kind: ObjectKind,
    pub team: TeamId,
    pub position: Position,
    pub is_dead: bool,
}

/// Enumerates every object currently alive in the simulation.
pub trait WorldDirectory {
    fn objects(&self) -> Box<dyn Iterator<Item = &WorldObject> + '_>;

    fn object(&self, id: EntityId) -> Option<&WorldObject> {
        self.objects().find(|object| object.id == id)
    }

    /// Distance between two objects, if both are known.
    fn distance(&self, a: EntityId, b: EntityId) -> Option<f32> {
        let a = self.object(a)?;
        let b = self.object(b)?;
        Some(a.position.distance_to(b.position))
    }
}

/// Frame-start copy of the world, taken before champions are ticked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldSnapshot {
    objects: Vec<WorldObject>,
}

impl WorldSnapshot {
    pub fn new(objects: Vec<WorldObject>) -> Self {
        Self { objects }
    }

    pub fn push(&mut self, object: WorldObject) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<WorldObject> for WorldSnapshot {
    fn from_iter<T: IntoIterator<Item = WorldObject>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl WorldDirectory for WorldSnapshot {
    fn objects(&self) -> Box<dyn Iterator<Item = &WorldObject> + '_> {
        Box::new(self.objects.iter())
    }
}
