//! Resource pools (health, mana).
//!
//! A pool stores both its current value and its maximum. Maximums are written
//! by the external stat/item layers; this crate only drains and refills.

/// Enum representing individual resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Health,
    Mana,
}

/// Current/maximum pair for a single resource.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub current: f32,
    pub maximum: f32,
}

impl ResourcePool {
    pub const fn new(current: f32, maximum: f32) -> Self {
        Self { current, maximum }
    }

    /// Pool filled to `maximum`.
    pub const fn full(maximum: f32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Removes `amount`, clamping at zero. Returns the amount actually removed.
    pub fn drain(&mut self, amount: f32) -> f32 {
        let removed = amount.max(0.0).min(self.current.max(0.0));
        self.current -= removed;
        removed
    }
}
