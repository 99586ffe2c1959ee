mod common;
mod unit;

pub use common::{EntityId, MoveOrder, ObjectKind, Position, TeamId};
pub use unit::UnitState;
