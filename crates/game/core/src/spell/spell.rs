use super::SpellSlot;

/// Name of the placeholder spell bound to the item-use slots.
pub const ITEM_USE_STUB: &str = "BaseSpell";
/// Name of the spell bound to the recall slot.
pub const RECALL_SPELL: &str = "Recall";

/// A single ability instance bound to one slot.
///
/// Casting is owned by the spell scripting layer; this crate only tracks the
/// level and advances the cooldown clock every tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    slot: SpellSlot,
    name: String,
    level: u8,
    cooldown_remaining_ms: f32,
    enabled: bool,
}

impl Spell {
    pub fn new(slot: SpellSlot, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            level: 0,
            cooldown_remaining_ms: 0.0,
            enabled: true,
        }
    }

    pub fn slot(&self) -> SpellSlot {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn cooldown_remaining_ms(&self) -> f32 {
        self.cooldown_remaining_ms
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Learned, enabled and off cooldown.
    pub fn is_ready(&self) -> bool {
        self.enabled && self.level > 0 && self.cooldown_remaining_ms <= 0.0
    }

    pub fn start_cooldown(&mut self, duration_ms: f32) {
        self.cooldown_remaining_ms = duration_ms.max(0.0);
    }

    pub(crate) fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    /// Per-tick hook; runs for every populated slot, learned or not.
    pub fn update(&mut self, delta_ms: f32) {
        if self.cooldown_remaining_ms > 0.0 {
            self.cooldown_remaining_ms = (self.cooldown_remaining_ms - delta_ms).max(0.0);
        }
    }
}
