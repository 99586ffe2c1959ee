use super::{Spell, SpellLevelError, SpellSlot};
use crate::env::LevelUnlockTable;
use crate::progression::SkillPoints;

/// Fixed-capacity spell collection addressed by [`SpellSlot`].
///
/// # Invariants
///
/// - A spell stored at index `i` always reports `slot().index() == i`.
/// - Iteration and per-tick updates run in ascending slot index.
#[derive(Clone, Debug, PartialEq)]
pub struct SpellSlotTable {
    slots: [Option<Spell>; SpellSlot::CAPACITY],
}

impl SpellSlotTable {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Binds `name` to `slot`, replacing any previous occupant.
    pub(crate) fn insert(&mut self, slot: SpellSlot, name: impl Into<String>) -> &mut Spell {
        let entry = &mut self.slots[slot.index() as usize];
        entry.insert(Spell::new(slot, name))
    }

    pub fn get(&self, slot: SpellSlot) -> Option<&Spell> {
        self.slots.get(slot.index() as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, slot: SpellSlot) -> Option<&mut Spell> {
        self.slots.get_mut(slot.index() as usize)?.as_mut()
    }

    /// Lookup by raw client index.
    pub fn get_by_index(&self, index: u8) -> Option<&Spell> {
        self.get(SpellSlot::from_index(index)?)
    }

    /// Populated slots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First populated slot whose spell is called `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Spell> {
        self.iter().find(|spell| spell.name() == name)
    }

    /// Raises the spell in `slot` by one level, spending one skill point.
    ///
    /// The unlock table must permit the spell's next level at
    /// `champion_level`. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`SpellLevelError::NoSkillPoints`] when no point is available
    /// - [`SpellLevelError::SlotEmpty`] when nothing is bound to `slot`
    /// - [`SpellLevelError::LevelCapReached`] when the next level is not
    ///   unlocked at `champion_level` (or does not exist)
    pub fn level_up(
        &mut self,
        slot: SpellSlot,
        skill_points: &mut SkillPoints,
        champion_level: u8,
        unlocks: &dyn LevelUnlockTable,
    ) -> Result<&Spell, SpellLevelError> {
        if skill_points.is_empty() {
            return Err(SpellLevelError::NoSkillPoints);
        }

        let spell = self
            .get_mut(slot)
            .ok_or(SpellLevelError::SlotEmpty(slot))?;

        let permitted = unlocks
            .required_level(slot, spell.level())
            .is_some_and(|required| required <= champion_level);
        if !permitted {
            return Err(SpellLevelError::LevelCapReached {
                slot,
                level: spell.level(),
            });
        }

        spell.level_up();
        skill_points.spend();
        Ok(&*spell)
    }

    /// Advances every populated slot, learned or not.
    pub fn update(&mut self, delta_ms: f32) {
        for spell in self.slots.iter_mut().flatten() {
            spell.update(delta_ms);
        }
    }
}

impl Default for SpellSlotTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SpellUnlockTable;

    fn table_with_q() -> SpellSlotTable {
        let mut table = SpellSlotTable::new();
        table.insert(SpellSlot::Basic(0), "Q");
        table.insert(SpellSlot::Basic(3), "R");
        table
    }

    #[test]
    fn level_up_spends_exactly_one_point() {
        let mut table = table_with_q();
        let mut points = SkillPoints::new(2);
        let unlocks = SpellUnlockTable::standard();

        let spell = table
            .level_up(SpellSlot::Basic(0), &mut points, 1, &unlocks)
            .unwrap();
        assert_eq!(spell.level(), 1);
        assert_eq!(points.get(), 1);
    }

    #[test]
    fn no_points_fails_without_side_effect() {
        let mut table = table_with_q();
        let mut points = SkillPoints::new(0);
        let unlocks = SpellUnlockTable::standard();

        let result = table.level_up(SpellSlot::Basic(0), &mut points, 18, &unlocks);
        assert_eq!(result.unwrap_err(), SpellLevelError::NoSkillPoints);
        assert_eq!(table.get(SpellSlot::Basic(0)).unwrap().level(), 0);
    }

    #[test]
    fn empty_slot_fails_and_keeps_points() {
        let mut table = table_with_q();
        let mut points = SkillPoints::new(1);
        let unlocks = SpellUnlockTable::standard();

        let result = table.level_up(SpellSlot::Basic(1), &mut points, 1, &unlocks);
        assert_eq!(
            result.unwrap_err(),
            SpellLevelError::SlotEmpty(SpellSlot::Basic(1))
        );
        assert_eq!(points.get(), 1);
    }

    #[test]
    fn ultimate_is_gated_by_champion_level() {
        let mut table = table_with_q();
        let mut points = SkillPoints::new(3);
        let unlocks = SpellUnlockTable::standard();

        let result = table.level_up(SpellSlot::Basic(3), &mut points, 5, &unlocks);
        assert!(matches!(
            result,
            Err(SpellLevelError::LevelCapReached { level: 0, .. })
        ));
        assert_eq!(points.get(), 3);

        table
            .level_up(SpellSlot::Basic(3), &mut points, 6, &unlocks)
            .unwrap();
        assert_eq!(points.get(), 2);
    }

    #[test]
    fn spell_cannot_exceed_table_length() {
        let mut table = table_with_q();
        let mut points = SkillPoints::new(10);
        let unlocks = SpellUnlockTable::standard();

        for _ in 0..5 {
            table
                .level_up(SpellSlot::Basic(0), &mut points, 18, &unlocks)
                .unwrap();
        }
        let result = table.level_up(SpellSlot::Basic(0), &mut points, 18, &unlocks);
        assert!(matches!(
            result,
            Err(SpellLevelError::LevelCapReached { level: 5, .. })
        ));
        assert_eq!(points.get(), 5);
    }

    #[test]
    fn update_advances_unlearned_slots_too() {
        let mut table = table_with_q();
        table
            .get_mut(SpellSlot::Basic(3))
            .unwrap()
            .start_cooldown(50.0);
        table.update(20.0);
        assert_eq!(
            table
                .get(SpellSlot::Basic(3))
                .unwrap()
                .cooldown_remaining_ms(),
            30.0
        );
    }

    #[test]
    fn iteration_is_in_slot_order() {
        let mut table = SpellSlotTable::new();
        table.insert(SpellSlot::Recall, "Recall");
        table.insert(SpellSlot::Basic(2), "E");
        table.insert(SpellSlot::Summoner(0), "Flash");
        let order: Vec<u8> = table.iter().map(|s| s.slot().index()).collect();
        assert_eq!(order, vec![2, 4, 13]);
        assert_eq!(table.find_by_name("Flash").unwrap().slot(), SpellSlot::Summoner(0));
    }
}
