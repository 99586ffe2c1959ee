//! Player/team configuration.

use crate::state::TeamId;

/// One configured player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerEntry {
    pub player_id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub team: TeamId,
    /// Position of the player within its team; selects the spawn coordinate.
    pub team_slot: u32,
    pub champion: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skin: u8,
    pub summoner_spells: [String; 2],
}

/// Oracle exposing player/team assignments.
pub trait PlayerRoster: Send + Sync {
    fn team_of(&self, player_id: u32) -> Option<TeamId>;

    /// Number of configured players on `team`.
    fn team_size(&self, team: TeamId) -> usize;
}

/// Roster loaded from the match configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<PlayerEntry>,
}

impl Roster {
    pub fn new(players: Vec<PlayerEntry>) -> Self {
        Self { players }
    }

    pub fn player(&self, player_id: u32) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}

impl PlayerRoster for Roster {
    fn team_of(&self, player_id: u32) -> Option<TeamId> {
        self.player(player_id).map(|p| p.team)
    }

    fn team_size(&self, team: TeamId) -> usize {
        self.players.iter().filter(|p| p.team == team).count()
    }
}
