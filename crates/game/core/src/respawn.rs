//! Respawn countdown.

use crate::config::GameConfig;

/// Countdown until a dead champion returns.
///
/// Non-positive timer values mean "alive / nothing pending". Once scheduled
/// the timer only decreases until it fires, then resets to [`Self::IDLE`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RespawnScheduler {
    timer_ms: f32,
}

impl RespawnScheduler {
    pub const IDLE: f32 = -1.0;

    pub const fn new() -> Self {
        Self {
            timer_ms: Self::IDLE,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.timer_ms > 0.0
    }

    pub fn remaining_ms(&self) -> f32 {
        self.timer_ms.max(0.0)
    }

    /// Starts the countdown for a champion that died at `level`.
    pub fn schedule_death(&mut self, level: u8) {
        self.timer_ms = GameConfig::respawn_delay_ms(level);
    }

    /// Advances the countdown. Returns true exactly once, on the tick the
    /// timer crosses to zero or below.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.timer_ms -= delta_ms;
        if self.timer_ms <= 0.0 {
            self.timer_ms = Self::IDLE;
            return true;
        }
        false
    }
}

impl Default for RespawnScheduler {
    fn default() -> Self {
        Self::new()
    }
}
