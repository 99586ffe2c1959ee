//! Capability interfaces implemented by the champion aggregate.

use bitflags::bitflags;

use crate::state::EntityId;
use crate::stats::ResourcePool;

bitflags! {
    /// Crowd-control and action states that gate movement and casting.
    ///
    /// Written by the external crowd-control system; read here only.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CrowdControl: u8 {
        const STUNNED  = 1 << 0;
        const ROOTED   = 1 << 1;
        const SILENCED = 1 << 2;
        const DASHING  = 1 << 3;
        const CASTING  = 1 << 4;
    }
}

/// Anything that has health and can be killed.
///
/// Read-only: damage is applied through [`crate::ArenaEngine::apply_damage`]
/// so that every lethal hit goes through death resolution.
pub trait Damageable {
    fn health(&self) -> &ResourcePool;

    fn is_dead(&self) -> bool;
}

/// Anything holding a (weak, id-based) target reference.
pub trait Targetable {
    fn target(&self) -> Option<EntityId>;

    /// Replaces the target. Returns true when it actually changed.
    fn set_target(&mut self, target: Option<EntityId>) -> bool;
}

/// Movement/casting eligibility derived from crowd control.
pub trait CrowdControlGated: Damageable {
    fn crowd_control(&self) -> CrowdControl;

    fn can_move(&self) -> bool {
        let blocking = CrowdControl::STUNNED
            | CrowdControl::ROOTED
            | CrowdControl::DASHING
            | CrowdControl::CASTING;
        !Damageable::is_dead(self) && !self.crowd_control().intersects(blocking)
    }

    fn can_cast(&self) -> bool {
        !self
            .crowd_control()
            .intersects(CrowdControl::STUNNED | CrowdControl::SILENCED)
    }
}
