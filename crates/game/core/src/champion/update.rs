//! Per-tick sequencing of a champion's subsystems.

use tracing::{debug, info};

use super::{Champion, Targetable};
use crate::config::GameConfig;
use crate::env::{MapRules, Notification, TickContext};
use crate::progression::try_level_up;
use crate::state::MoveOrder;
use crate::targeting::nearest_enemy;

impl Champion {
    /// Advances this champion by `delta_ms`.
    ///
    /// Order: base-unit hook, attack-move targeting, gold generation,
    /// respawn countdown, level progression, spell clocks, execution-credit
    /// decay, replication hook.
    pub fn update(&mut self, ctx: &TickContext<'_>, delta_ms: f32) {
        let env = ctx.env;
        let rules = env.rules();

        env.hooks().base_update(self, delta_ms);

        if !self.is_dead && self.move_order == MoveOrder::AttackMove && self.target.is_some() {
            self.acquire_target(ctx);
        }

        self.update_gold_generation(rules, ctx.game_time_ms, delta_ms);

        if self.respawn.tick(delta_ms) {
            self.respawn(rules);
            env.notify(Notification::ChampionRespawned {
                champion: self.id,
                position: self.position,
            });
        }

        if try_level_up(
            &mut self.stats,
            &mut self.skill_points,
            rules.experience_table(),
        ) {
            info!(
                champion = %self.id,
                level = self.stats.level(),
                skill_points = self.skill_points.get(),
                "champion leveled up"
            );
            env.notify(Notification::LevelUp {
                champion: self.id,
                level: self.stats.level(),
                skill_points: self.skill_points.get(),
            });
            env.notify(Notification::StatsUpdated { champion: self.id });
        }

        self.spells.update(delta_ms);
        self.ledger.tick_execution_credit(delta_ms);

        env.hooks().replicate(self);
    }

    fn acquire_target(&mut self, ctx: &TickContext<'_>) {
        let seeker = self.seeker(ctx.config);
        let Some(found) = nearest_enemy(ctx.world, &seeker) else {
            return;
        };
        if self.set_target(Some(found)) {
            debug!(champion = %self.id, target = %found, "attack-move target changed");
            ctx.env.notify(Notification::TargetChanged {
                champion: self.id,
                target: found,
            });
        }
    }

    fn update_gold_generation(&mut self, rules: &dyn MapRules, game_time_ms: f32, delta_ms: f32) {
        if !self.stats.is_generating_gold && game_time_ms >= rules.first_gold_time_ms() {
            self.stats.is_generating_gold = true;
            info!(champion = %self.id, game_time_ms, "gold generation started");
        }
        if self.stats.is_generating_gold {
            self.ledger
                .credit(self.stats.gold_per_second * delta_ms / 1000.0);
        }
    }

    /// Returns to the team fountain with full health; mana refills from the
    /// pool named by [`GameConfig::RESPAWN_MANA_SOURCE`].
    fn respawn(&mut self, rules: &dyn MapRules) {
        self.position = rules.respawn_position(self.identity.team);
        self.stats.health.current = self.stats.health.maximum;
        self.stats.mana.current = self.stats.maximum_of(GameConfig::RESPAWN_MANA_SOURCE);
        self.is_dead = false;
        info!(champion = %self.id, position = %self.position, "champion respawned");
    }
}
