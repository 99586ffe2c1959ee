use std::fmt;

/// Unique identifier for any object tracked in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Continuous map coordinate in world units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Team allegiance of an arena object.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TeamId {
    Blue,
    Purple,
    /// Jungle camps and other unaligned units.
    Neutral,
}

/// Category of an arena object, as seen by targeting and the economy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectKind {
    Champion,
    /// Lane minion.
    Minion,
    /// Jungle monster; killed like a minion.
    Monster,
    Turret,
    /// Inhibitors, nexus and other destructible buildings.
    Structure,
    /// Visual-only objects (particles, markers); never attackable.
    Particle,
}

impl ObjectKind {
    /// Combat-capable units can be damaged and targeted.
    pub const fn is_attackable(self) -> bool {
        !matches!(self, Self::Particle)
    }

    /// Units whose death pays out through the minion-kill economy.
    pub const fn is_minion(self) -> bool {
        matches!(self, Self::Minion | Self::Monster)
    }
}

/// Standing movement order of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveOrder {
    #[default]
    Stop,
    MoveTo,
    AttackTo,
    /// Move toward a point, engaging the nearest valid enemy on the way.
    AttackMove,
}
