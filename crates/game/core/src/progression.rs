//! Experience-driven level progression and skill points.

use crate::stats::ChampionStats;

/// Unspent skill points; never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillPoints(u8);

impl SkillPoints {
    pub const fn new(points: u8) -> Self {
        Self(points)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn grant(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Consumes one point; returns false (and changes nothing) when empty.
    pub(crate) fn spend(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(rest) => {
                self.0 = rest;
                true
            }
            None => false,
        }
    }
}

/// Advances `stats` through every level whose threshold the current
/// experience meets, granting one skill point per level gained.
///
/// `experience_table[level]` is the total experience required to leave
/// `level`; the table length is therefore the level cap, bounded by
/// `u8::MAX`.
///
/// Returns whether at least one level was gained.
pub fn try_level_up(
    stats: &mut ChampionStats,
    skill_points: &mut SkillPoints,
    experience_table: &[f32],
) -> bool {
    let mut leveled = false;
    while let Some(&threshold) = experience_table.get(usize::from(stats.level())) {
        if stats.level() == u8::MAX || stats.experience < threshold {
            break;
        }
        stats.advance_level();
        skill_points.grant();
        leveled = true;
    }
    leveled
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [f32; 5] = [0.0, 280.0, 660.0, 1140.0, 1720.0];

    #[test]
    fn below_threshold_does_nothing() {
        let mut stats = ChampionStats::default();
        let mut points = SkillPoints::new(1);
        stats.add_experience(279.0);

        assert!(!try_level_up(&mut stats, &mut points, &TABLE));
        assert_eq!(stats.level(), 1);
        assert_eq!(points.get(), 1);
    }

    #[test]
    fn crosses_several_levels_in_one_call() {
        let mut stats = ChampionStats::default();
        let mut points = SkillPoints::new(0);
        stats.add_experience(1200.0);

        assert!(try_level_up(&mut stats, &mut points, &TABLE));
        assert_eq!(stats.level(), 4);
        assert_eq!(points.get(), 3);

        // Already caught up
        assert!(!try_level_up(&mut stats, &mut points, &TABLE));
        assert_eq!(points.get(), 3);
    }

    #[test]
    fn stops_at_table_length() {
        let mut stats = ChampionStats::default();
        let mut points = SkillPoints::new(0);
        stats.add_experience(1_000_000.0);

        assert!(try_level_up(&mut stats, &mut points, &TABLE));
        assert_eq!(stats.level(), TABLE.len() as u8);
        assert_eq!(points.get(), TABLE.len() as u8 - 1);
        assert!(!try_level_up(&mut stats, &mut points, &TABLE));
    }

    #[test]
    fn oversized_table_stops_at_level_cap() {
        let table: Vec<f32> = (0..300).map(|i| i as f32).collect();
        let mut stats = ChampionStats::default();
        let mut points = SkillPoints::new(0);
        stats.add_experience(1e9);

        assert!(try_level_up(&mut stats, &mut points, &table));
        assert_eq!(stats.level(), u8::MAX);
        assert_eq!(points.get(), u8::MAX - 1);
        assert!(!try_level_up(&mut stats, &mut points, &table));
    }

    #[test]
    fn level_never_decreases_on_empty_table() {
        let mut stats = ChampionStats::default();
        let mut points = SkillPoints::default();
        stats.add_experience(500.0);
        assert!(!try_level_up(&mut stats, &mut points, &[]));
        assert_eq!(stats.level(), 1);
    }

    #[test]
    fn spend_on_empty_is_a_no_op() {
        let mut points = SkillPoints::new(0);
        assert!(!points.spend());
        assert_eq!(points.get(), 0);
    }
}
