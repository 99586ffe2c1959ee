use crate::stats::ResourceKind;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Radius within which an attack-moving champion picks up enemies, even
    /// when its own attack range is shorter.
    pub detection_range: f32,
    /// Gold every champion holds when the match starts.
    pub starting_gold: f32,
    /// Skill points granted at construction (level 1).
    pub starting_skill_points: u8,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Passive slots run from 14 up to (not including) the first extra slot.
    pub const MAX_PASSIVES: usize = 31;
    pub const MAX_EXTRA_SPELLS: usize = 16;
    /// Spawn layouts exist for team sizes 1..=6; larger teams reuse the 6 layout.
    pub const MAX_TEAM_SPAWN_SIZE: usize = 6;

    // ===== game balance =====
    pub const RESPAWN_BASE_MS: f32 = 5000.0;
    pub const RESPAWN_PER_LEVEL_MS: f32 = 2500.0;
    /// Window after the last hit during which a champion keeps kill credit.
    pub const EXECUTION_CREDIT_MS: f32 = 15_000.0;
    pub const FIRST_BLOOD_BONUS: f32 = 100.0;
    /// Fraction removed from champion bounties while the reduction rule is on.
    pub const KILL_GOLD_REDUCTION: f32 = 0.25;
    /// Minion gold needed to climb one step out of a death streak.
    pub const DEATH_STREAK_RECOVERY_GOLD: f32 = 50.0;
    /// Initial nearest-distance threshold of the attack-move scan.
    pub const TARGET_SCAN_THRESHOLD: f32 = 25_000.0;
    /// Pool whose maximum refills mana on respawn.
    ///
    /// Observed behavior refills mana from the health maximum. Switch to
    /// `ResourceKind::Mana` to refill from the mana pool instead.
    pub const RESPAWN_MANA_SOURCE: ResourceKind = ResourceKind::Health;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DETECTION_RANGE: f32 = 475.0;
    pub const DEFAULT_STARTING_GOLD: f32 = 475.0;
    pub const DEFAULT_STARTING_SKILL_POINTS: u8 = 1;

    pub fn new() -> Self {
        Self {
            detection_range: Self::DEFAULT_DETECTION_RANGE,
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            starting_skill_points: Self::DEFAULT_STARTING_SKILL_POINTS,
        }
    }

    pub fn with_starting_gold(mut self, starting_gold: f32) -> Self {
        self.starting_gold = starting_gold;
        self
    }

    pub fn with_detection_range(mut self, detection_range: f32) -> Self {
        self.detection_range = detection_range;
        self
    }

    /// Respawn delay for a champion dying at `level`.
    pub fn respawn_delay_ms(level: u8) -> f32 {
        Self::RESPAWN_BASE_MS + f32::from(level) * Self::RESPAWN_PER_LEVEL_MS
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
