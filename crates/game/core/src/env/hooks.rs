//! Per-tick extension points owned by the host.

use crate::champion::Champion;

/// Collaborator hooks that bracket a champion's tick.
///
/// `base_update` runs first (base-unit movement, buffs, auto-attacks) and
/// `replicate` runs last (snapshot/replication bookkeeping).
pub trait UnitHooks {
    fn base_update(&self, _champion: &mut Champion, _delta_ms: f32) {}

    fn replicate(&self, _champion: &Champion) {}
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl UnitHooks for NoHooks {}
