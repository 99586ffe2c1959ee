//! Applies death resolutions and minion kills to the arena.

use tracing::debug;

use crate::champion::Targetable;
use crate::economy::{
    DeathContext, EconomyCommand, KillerView, VictimView, resolve_champion_death,
};
use crate::env::{BountyTarget, Env};
use crate::state::{ArenaState, EntityId, UnitState};

/// Resolves and applies the death described by `victim`.
///
/// Returns the champion credited with the kill.
pub(super) fn champion_died(
    state: &mut ArenaState,
    env: &Env<'_>,
    victim: &VictimView,
    nominal_killer: Option<EntityId>,
) -> Option<EntityId> {
    let ctx = DeathContext {
        first_blood: state.match_state.first_blood(),
        kill_gold_reduction_active: env
            .rules()
            .is_kill_gold_reduction_active(state.match_state.game_time_ms),
    };

    let champions = &state.champions;
    let resolution = resolve_champion_death(
        victim,
        nominal_killer,
        |id| {
            champions
                .iter()
                .find(|c| c.id() == id)
                .map(|c| KillerView {
                    id,
                    streak: c.ledger().streak(),
                })
        },
        env.rules(),
        ctx,
    );

    for command in &resolution.commands {
        apply(state, command);
    }
    for notification in resolution.notifications {
        env.notify(notification);
    }
    resolution.killer
}

fn apply(state: &mut ArenaState, command: &EconomyCommand) {
    match *command {
        EconomyCommand::StopTargeting { target } => {
            for champion in &mut state.champions {
                if champion.id() == target || champion.target() == Some(target) {
                    champion.set_target(None);
                }
            }
        }
        EconomyCommand::MarkFirstBlood => state.match_state.mark_first_blood(),
        EconomyCommand::ScheduleRespawn { champion, .. }
        | EconomyCommand::RecordDeath { champion }
        | EconomyCommand::ClearDeathStreakGold { champion }
        | EconomyCommand::RecordKill { champion }
        | EconomyCommand::SetStreak { champion, .. }
        | EconomyCommand::CreditGold { champion, .. } => {
            if let Some(champion) = state.champion_mut(champion) {
                champion.apply_economy(command);
            }
        }
    }
}

/// Pays out a minion or monster killed by `killer`, if `killer` is a
/// champion. Returns the gold paid.
pub(super) fn unit_died(
    state: &mut ArenaState,
    env: &Env<'_>,
    unit: &UnitState,
    killer: Option<EntityId>,
) -> f32 {
    if !unit.kind.is_minion() {
        return 0.0;
    }
    let Some(killer) = killer else {
        return 0.0;
    };
    let Some(killer) = state.champion_mut(killer) else {
        return 0.0;
    };

    let gold = env.rules().gold_for(&BountyTarget {
        kind: unit.kind,
        team: unit.team,
        level: unit.level,
        streak: 0,
    });
    let Some(notification) = killer.record_minion_kill(unit.id, unit.kind, gold) else {
        return 0.0;
    };
    debug!(champion = %killer.id(), unit = %unit.id, gold, "minion gold credited");
    env.notify(notification);
    gold
}
