use crate::spell::Spell;
use crate::state::{EntityId, MoveOrder, Position, TeamId};
use crate::stats::{ResourcePool, ScoreCard};

/// Replication view of a champion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionSnapshot {
    pub id: EntityId,
    pub player_id: u32,
    pub team: TeamId,
    pub model: String,
    pub skin: u8,
    pub champion_hash: i32,
    pub position: Position,
    pub level: u8,
    pub experience: f32,
    pub health: ResourcePool,
    pub mana: ResourcePool,
    pub gold: f32,
    pub streak: i32,
    pub skill_points: u8,
    pub score: ScoreCard,
    pub move_order: MoveOrder,
    pub target: Option<EntityId>,
    pub is_dead: bool,
    pub respawn_in_ms: f32,
    pub spells: Vec<Spell>,
}
