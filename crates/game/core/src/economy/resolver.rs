//! Champion death resolution.
//!
//! The resolver never touches a champion directly. It reads frozen views of
//! the victim and the candidate killers and returns the mutations to apply,
//! so each champion keeps a single writer even when a death changes two
//! ledgers at once.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use super::ledger::{killer_streak_after, victim_streak_after};
use crate::config::GameConfig;
use crate::env::{BountyTarget, MapRules, Notification};
use crate::state::{EntityId, ObjectKind, TeamId};

/// Frozen view of the dying champion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VictimView {
    pub id: EntityId,
    pub team: TeamId,
    pub level: u8,
    pub streak: i32,
    pub execution_credit_ms: f32,
    pub last_damager: Option<EntityId>,
}

/// Frozen view of a champion that may receive kill credit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KillerView {
    pub id: EntityId,
    pub streak: i32,
}

/// Match-global inputs of a resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeathContext {
    pub first_blood: bool,
    pub kill_gold_reduction_active: bool,
}

/// One mutation produced by death resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EconomyCommand {
    /// Clear the victim's target and every target pointing at the victim.
    StopTargeting { target: EntityId },
    ScheduleRespawn { champion: EntityId, level: u8 },
    RecordDeath { champion: EntityId },
    ClearDeathStreakGold { champion: EntityId },
    RecordKill { champion: EntityId },
    SetStreak { champion: EntityId, streak: i32 },
    MarkFirstBlood,
    CreditGold { champion: EntityId, amount: f32 },
}

/// Upper bound on commands a single death can emit.
pub const MAX_DEATH_COMMANDS: usize = 10;

/// Outcome of a champion death.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeathResolution {
    /// Champion credited with the kill, after execution-credit substitution.
    pub killer: Option<EntityId>,
    /// Gold paid to the killer (0 when nothing was paid).
    pub gold: f32,
    pub commands: ArrayVec<EconomyCommand, MAX_DEATH_COMMANDS>,
    pub notifications: ArrayVec<Notification, 3>,
}

/// Resolves the death of `victim`.
///
/// `nominal_killer` is whoever landed the lethal blow. `champion` maps an id
/// to a [`KillerView`] when, and only when, that id is a champion.
pub fn resolve_champion_death<F>(
    victim: &VictimView,
    nominal_killer: Option<EntityId>,
    champion: F,
    rules: &dyn MapRules,
    ctx: DeathContext,
) -> DeathResolution
where
    F: Fn(EntityId) -> Option<KillerView>,
{
    let mut out = DeathResolution::default();

    out.commands.push(EconomyCommand::StopTargeting { target: victim.id });
    out.commands.push(EconomyCommand::ScheduleRespawn {
        champion: victim.id,
        level: victim.level,
    });
    out.commands
        .push(EconomyCommand::RecordDeath { champion: victim.id });
    out.notifications.push(Notification::DeathAnnounced {
        victim: victim.id,
        killer: nominal_killer,
    });

    let mut killer = nominal_killer.and_then(&champion);
    if killer.is_none() && victim.execution_credit_ms > 0.0 {
        killer = victim.last_damager.and_then(&champion);
        if let Some(credited) = killer {
            info!(
                victim = %victim.id,
                finisher = ?nominal_killer,
                credited = %credited.id,
                "execution credit awarded to last champion damager"
            );
        }
    }

    let Some(killer) = killer else {
        out.notifications.push(Notification::ChampionDied {
            victim: victim.id,
            killer: None,
            gold: 0,
        });
        return out;
    };
    out.killer = Some(killer.id);

    out.commands
        .push(EconomyCommand::ClearDeathStreakGold { champion: killer.id });
    out.commands
        .push(EconomyCommand::RecordKill { champion: killer.id });

    let mut gold = rules.gold_for(&BountyTarget {
        kind: ObjectKind::Champion,
        team: victim.team,
        level: victim.level,
        streak: victim.streak,
    });

    let killer_streak = killer_streak_after(killer.streak);
    let victim_streak = victim_streak_after(victim.streak);
    debug!(
        killer = %killer.id,
        victim = %victim.id,
        killer_streak,
        victim_streak,
        "streaks updated"
    );
    out.commands.push(EconomyCommand::SetStreak {
        champion: killer.id,
        streak: killer_streak,
    });
    out.commands.push(EconomyCommand::SetStreak {
        champion: victim.id,
        streak: victim_streak,
    });

    if gold < 0.0 {
        out.notifications.push(Notification::ChampionDied {
            victim: victim.id,
            killer: Some(killer.id),
            gold: 0,
        });
        return out;
    }

    if ctx.first_blood {
        if ctx.kill_gold_reduction_active {
            gold *= 1.0 - GameConfig::KILL_GOLD_REDUCTION;
        }
    } else {
        gold += GameConfig::FIRST_BLOOD_BONUS;
        out.commands.push(EconomyCommand::MarkFirstBlood);
        info!(killer = %killer.id, victim = %victim.id, "first blood");
    }

    out.gold = gold;
    out.notifications.push(Notification::ChampionDied {
        victim: victim.id,
        killer: Some(killer.id),
        gold: gold as i32,
    });
    out.commands.push(EconomyCommand::CreditGold {
        champion: killer.id,
        amount: gold,
    });
    out.notifications.push(Notification::GoldAdded {
        champion: killer.id,
        source: victim.id,
        amount: gold,
    });
    out
}
