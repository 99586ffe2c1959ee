//! Attack-move target acquisition.

use crate::config::GameConfig;
use crate::env::WorldDirectory;
use crate::state::{EntityId, Position, TeamId};

/// The scanning unit, as seen by the target scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seeker {
    pub id: EntityId,
    pub team: TeamId,
    pub position: Position,
    /// `max(attack range, detection range)`.
    pub range: f32,
}

/// Nearest valid enemy of `seeker`, if any.
///
/// A candidate must be attackable, alive, on another team and within
/// `seeker.range`. The nearest wins; on an exact distance tie the lower
/// entity id wins so the result does not depend on directory order.
pub fn nearest_enemy(world: &dyn WorldDirectory, seeker: &Seeker) -> Option<EntityId> {
    let mut best: Option<(f32, EntityId)> = None;
    let mut threshold = GameConfig::TARGET_SCAN_THRESHOLD;

    for object in world.objects() {
        if object.id == seeker.id
            || object.is_dead
            || !object.kind.is_attackable()
            || object.team == seeker.team
        {
            continue;
        }
        let distance = seeker.position.distance_to(object.position);
        if distance > seeker.range {
            continue;
        }
        let closer = distance < threshold;
        let tie_with_lower_id =
            best.is_some_and(|(d, id)| distance == d && object.id < id);
        if closer || tie_with_lower_id {
            threshold = distance;
            best = Some((distance, object.id));
        }
    }

    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{WorldObject, WorldSnapshot};
    use crate::state::ObjectKind;

    fn seeker() -> Seeker {
        Seeker {
            id: EntityId(1),
            team: TeamId::Blue,
            position: Position::ORIGIN,
            range: 500.0,
        }
    }

    fn object(id: u32, kind: ObjectKind, team: TeamId, x: f32) -> WorldObject {
        WorldObject {
            id: EntityId(id),
            kind,
            team,
            position: Position::new(x, 0.0),
            is_dead: false,
        }
    }

    #[test]
    fn picks_nearest_enemy() {
        let world: WorldSnapshot = [
            object(2, ObjectKind::Minion, TeamId::Purple, 300.0),
            object(3, ObjectKind::Champion, TeamId::Purple, 200.0),
            object(4, ObjectKind::Monster, TeamId::Neutral, 250.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(nearest_enemy(&world, &seeker()), Some(EntityId(3)));
    }

    #[test]
    fn skips_dead_allied_out_of_range_and_particles() {
        let mut dead = object(2, ObjectKind::Champion, TeamId::Purple, 10.0);
        dead.is_dead = true;
        let world: WorldSnapshot = [
            dead,
            object(3, ObjectKind::Champion, TeamId::Blue, 20.0),
            object(4, ObjectKind::Particle, TeamId::Purple, 30.0),
            object(5, ObjectKind::Minion, TeamId::Purple, 501.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(nearest_enemy(&world, &seeker()), None);
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let world: WorldSnapshot = [object(9, ObjectKind::Turret, TeamId::Purple, 500.0)]
            .into_iter()
            .collect();
        assert_eq!(nearest_enemy(&world, &seeker()), Some(EntityId(9)));
    }

    #[test]
    fn equal_distance_prefers_lower_id() {
        let world: WorldSnapshot = [
            object(8, ObjectKind::Minion, TeamId::Purple, 100.0),
            object(6, ObjectKind::Minion, TeamId::Purple, -100.0),
            object(7, ObjectKind::Minion, TeamId::Purple, 100.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(nearest_enemy(&world, &seeker()), Some(EntityId(6)));
    }
}
