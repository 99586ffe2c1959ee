use crate::state::TeamId;

/// Who a champion is: owning player, team and appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChampionIdentity {
    pub player_id: u32,
    pub team: TeamId,
    pub team_slot: u32,
    pub model: String,
    pub skin: u8,
}

impl ChampionIdentity {
    const HASH_MULTIPLIER: u32 = 0x1003F;

    /// Client-side character hash of the current model and skin.
    ///
    /// Case-insensitive rolling hash over `"[Character]" + model + skin`,
    /// with the skin index zero-padded to two digits.
    pub fn champion_hash(&self) -> i32 {
        let key = format!("[Character]{}{:02}", self.model, self.skin);
        let hash = key
            .to_lowercase()
            .bytes()
            .fold(0u32, |hash, byte| {
                hash.wrapping_mul(Self::HASH_MULTIPLIER)
                    .wrapping_add(u32::from(byte))
            });
        hash as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(model: &str, skin: u8) -> ChampionIdentity {
        ChampionIdentity {
            player_id: 1,
            team: TeamId::Blue,
            team_slot: 0,
            model: model.to_string(),
            skin,
        }
    }

    fn reference_hash(text: &str) -> i32 {
        let mut hash: u32 = 0;
        for byte in text.bytes() {
            hash = hash.wrapping_mul(0x1003F).wrapping_add(u32::from(byte));
        }
        hash as i32
    }

    #[test]
    fn hash_ignores_case_and_pads_skin() {
        assert_eq!(
            identity("Annie", 3).champion_hash(),
            reference_hash("[character]annie03")
        );
        assert_eq!(
            identity("ANNIE", 3).champion_hash(),
            identity("annie", 3).champion_hash()
        );
        assert_eq!(
            identity("Annie", 12).champion_hash(),
            reference_hash("[character]annie12")
        );
    }

    #[test]
    fn skin_changes_hash() {
        assert_ne!(
            identity("Annie", 0).champion_hash(),
            identity("Annie", 1).champion_hash()
        );
    }
}
