//! Semantic spell slots.
//!
//! The client addresses spells by a raw slot byte. Each byte range has one
//! fixed meaning, which [`SpellSlot`] makes explicit:
//!
//! | index   | slot                 |
//! |---------|----------------------|
//! | 0..=3   | basic abilities      |
//! | 4..=5   | summoner spells      |
//! | 6..=12  | item-use stubs       |
//! | 13      | recall               |
//! | 14..=44 | passives             |
//! | 45..    | extra abilities      |

use std::fmt;

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellSlot {
    Basic(u8),
    Summoner(u8),
    ItemUse(u8),
    Recall,
    Passive(u8),
    Extra(u8),
}

impl SpellSlot {
    pub const BASIC_COUNT: u8 = 4;
    pub const SUMMONER_COUNT: u8 = 2;
    pub const ITEM_USE_COUNT: u8 = 7;

    const SUMMONER_BASE: u8 = 4;
    const ITEM_USE_BASE: u8 = 6;
    const RECALL_INDEX: u8 = 13;
    const PASSIVE_BASE: u8 = 14;
    const EXTRA_BASE: u8 = 45;

    /// Number of addressable slot indices.
    pub const CAPACITY: usize = Self::EXTRA_BASE as usize + GameConfig::MAX_EXTRA_SPELLS;

    /// Raw slot index as used by the client.
    pub const fn index(self) -> u8 {
        match self {
            Self::Basic(i) => i,
            Self::Summoner(i) => Self::SUMMONER_BASE + i,
            Self::ItemUse(i) => Self::ITEM_USE_BASE + i,
            Self::Recall => Self::RECALL_INDEX,
            Self::Passive(i) => Self::PASSIVE_BASE + i,
            Self::Extra(i) => Self::EXTRA_BASE + i,
        }
    }

    /// Maps a raw slot index back to its semantic slot.
    pub const fn from_index(index: u8) -> Option<Self> {
        let slot = match index {
            0..=3 => Self::Basic(index),
            4..=5 => Self::Summoner(index - Self::SUMMONER_BASE),
            6..=12 => Self::ItemUse(index - Self::ITEM_USE_BASE),
            13 => Self::Recall,
            14..=44 => Self::Passive(index - Self::PASSIVE_BASE),
            _ => {
                if (index as usize) < Self::CAPACITY {
                    Self::Extra(index - Self::EXTRA_BASE)
                } else {
                    return None;
                }
            }
        };
        Some(slot)
    }

    /// Returns false for slot values whose sub-index exceeds its range.
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Basic(i) => i < Self::BASIC_COUNT,
            Self::Summoner(i) => i < Self::SUMMONER_COUNT,
            Self::ItemUse(i) => i < Self::ITEM_USE_COUNT,
            Self::Recall => true,
            Self::Passive(i) => (i as usize) < GameConfig::MAX_PASSIVES,
            Self::Extra(i) => (i as usize) < GameConfig::MAX_EXTRA_SPELLS,
        }
    }
}

impl fmt::Display for SpellSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(i) => write!(f, "basic[{i}]"),
            Self::Summoner(i) => write!(f, "summoner[{i}]"),
            Self::ItemUse(i) => write!(f, "item[{i}]"),
            Self::Recall => write!(f, "recall"),
            Self::Passive(i) => write!(f, "passive[{i}]"),
            Self::Extra(i) => write!(f, "extra[{i}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_maps_back_to_itself() {
        for index in 0..SpellSlot::CAPACITY as u8 {
            let slot = SpellSlot::from_index(index).unwrap();
            assert!(slot.is_valid(), "{slot} should be valid");
            assert_eq!(slot.index(), index);
        }
        assert_eq!(SpellSlot::from_index(SpellSlot::CAPACITY as u8), None);
    }

    #[test]
    fn ranges_match_client_layout() {
        assert_eq!(SpellSlot::from_index(3), Some(SpellSlot::Basic(3)));
        assert_eq!(SpellSlot::from_index(5), Some(SpellSlot::Summoner(1)));
        assert_eq!(SpellSlot::from_index(12), Some(SpellSlot::ItemUse(6)));
        assert_eq!(SpellSlot::from_index(13), Some(SpellSlot::Recall));
        assert_eq!(SpellSlot::from_index(14), Some(SpellSlot::Passive(0)));
        assert_eq!(SpellSlot::from_index(45), Some(SpellSlot::Extra(0)));
    }

    #[test]
    fn out_of_range_sub_indices_are_invalid() {
        assert!(!SpellSlot::Basic(4).is_valid());
        assert!(!SpellSlot::Summoner(2).is_valid());
        assert!(!SpellSlot::Extra(GameConfig::MAX_EXTRA_SPELLS as u8).is_valid());
    }
}
