use crate::config::GameConfig;
use crate::state::EntityId;

/// Gold, streak and kill-credit bookkeeping of one champion.
///
/// # Invariants
///
/// - `execution_credit_ms` is never negative. It only decreases, except when
///   damage refreshes it to [`GameConfig::EXECUTION_CREDIT_MS`].
/// - `streak` changes only through death resolution and the minion-gold
///   recovery path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EconomyLedger {
    gold: f32,
    /// Positive: consecutive kills. Negative: depth of the death streak.
    streak: i32,
    death_streak_minion_gold: f32,
    execution_credit_ms: f32,
    last_damager: Option<EntityId>,
}

impl EconomyLedger {
    pub fn new(starting_gold: f32) -> Self {
        Self {
            gold: starting_gold,
            streak: 0,
            death_streak_minion_gold: 0.0,
            execution_credit_ms: 0.0,
            last_damager: None,
        }
    }

    pub fn gold(&self) -> f32 {
        self.gold
    }

    pub fn streak(&self) -> i32 {
        self.streak
    }

    pub fn death_streak_minion_gold(&self) -> f32 {
        self.death_streak_minion_gold
    }

    pub fn execution_credit_ms(&self) -> f32 {
        self.execution_credit_ms
    }

    pub fn has_execution_credit(&self) -> bool {
        self.execution_credit_ms > 0.0
    }

    pub fn last_damager(&self) -> Option<EntityId> {
        self.last_damager
    }

    /// Refreshes the execution-credit window for `attacker`, lethal or not.
    pub fn record_damage(&mut self, attacker: EntityId) {
        self.execution_credit_ms = GameConfig::EXECUTION_CREDIT_MS;
        self.last_damager = Some(attacker);
    }

    pub fn tick_execution_credit(&mut self, delta_ms: f32) {
        self.execution_credit_ms = (self.execution_credit_ms - delta_ms).max(0.0);
    }

    pub(crate) fn credit(&mut self, amount: f32) {
        self.gold += amount;
    }

    pub(crate) fn set_streak(&mut self, streak: i32) {
        self.streak = streak;
    }

    pub(crate) fn clear_death_streak_gold(&mut self) {
        self.death_streak_minion_gold = 0.0;
    }

    /// Credits minion gold and, while on a death streak, feeds the recovery
    /// counter. Returns true when the streak climbed one step toward zero.
    pub(crate) fn record_minion_gold(&mut self, gold: f32) -> bool {
        self.credit(gold);
        if self.streak >= 0 {
            return false;
        }
        self.death_streak_minion_gold += gold;
        if self.death_streak_minion_gold >= GameConfig::DEATH_STREAK_RECOVERY_GOLD {
            self.death_streak_minion_gold = 0.0;
            self.streak += 1;
            return true;
        }
        false
    }
}

impl Default for EconomyLedger {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_STARTING_GOLD)
    }
}

/// Killer streak after a kill: a death streak is wiped, then one kill counts.
pub const fn killer_streak_after(streak: i32) -> i32 {
    if streak < 0 { 1 } else { streak.saturating_add(1) }
}

/// Victim streak after a death: a kill streak is shut down to zero, a death
/// streak deepens.
pub const fn victim_streak_after(streak: i32) -> i32 {
    if streak > 0 { 0 } else { streak.saturating_sub(1) }
}
