//! End-to-end kill economy scenarios driven through the engine.

use arena_core::{
    ArenaEngine, ArenaState, Champion, ChampionTemplate, DamageOutcome, EntityId, Env, GameConfig,
    MapRulesData, Notification, ObjectKind, PlayerEntry, Position, RecordingSink, Roster,
    SpellSlot, TeamId, Targetable,
};

struct Arena {
    state: ArenaState,
    config: GameConfig,
    rules: MapRulesData,
    roster: Roster,
    sink: RecordingSink,
}

fn player(player_id: u32, team: TeamId, team_slot: u32) -> PlayerEntry {
    PlayerEntry {
        player_id,
        name: format!("p{player_id}"),
        team,
        team_slot,
        champion: "Annie".into(),
        skin: 0,
        summoner_spells: ["SummonerFlash".into(), "SummonerHeal".into()],
    }
}

impl Arena {
    fn new(rules: MapRulesData) -> Self {
        Self {
            state: ArenaState::new(),
            config: GameConfig::default(),
            rules,
            roster: Roster::new(vec![
                player(1, TeamId::Blue, 0),
                player(2, TeamId::Purple, 0),
                player(3, TeamId::Blue, 1),
                player(4, TeamId::Purple, 1),
            ]),
            sink: RecordingSink::new(),
        }
    }

    fn spawn_all(&mut self) -> Vec<EntityId> {
        let template = ChampionTemplate::new(
            "Annie",
            vec!["Q".into(), "W".into(), "E".into(), "R".into()],
        );
        let env = Env::new(&self.rules, &self.roster, &self.sink);
        let mut engine = ArenaEngine::new(&mut self.state, &self.config);
        self.roster
            .players
            .iter()
            .map(|p| engine.spawn_champion(env, &template, p).unwrap())
            .collect()
    }

    fn hit(&mut self, target: EntityId, attacker: Option<EntityId>, amount: f32) -> DamageOutcome {
        let env = Env::new(&self.rules, &self.roster, &self.sink);
        ArenaEngine::new(&mut self.state, &self.config)
            .apply_damage(env, target, attacker, amount)
            .unwrap()
    }

    fn kill(&mut self, victim: EntityId, attacker: EntityId) -> DamageOutcome {
        self.hit(victim, Some(attacker), 10_000.0)
    }

    fn tick(&mut self, delta_ms: f32) {
        let env = Env::new(&self.rules, &self.roster, &self.sink);
        ArenaEngine::new(&mut self.state, &self.config).tick(env, delta_ms);
    }

    fn minion(&mut self, team: TeamId) -> EntityId {
        self.unit(ObjectKind::Minion, team)
    }

    fn unit(&mut self, kind: ObjectKind, team: TeamId) -> EntityId {
        ArenaEngine::new(&mut self.state, &self.config).add_unit(
            kind,
            team,
            Position::new(5000.0, 5000.0),
            300.0,
            1,
        )
    }

    fn champion(&self, id: EntityId) -> &Champion {
        self.state.champion(id).unwrap()
    }
}

#[test]
fn spawning_places_champions_on_the_team_layout() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    assert_eq!(ids.len(), 4);

    let blue_second = arena.champion(ids[2]);
    assert_eq!(
        Some(blue_second.position()),
        arena.rules.spawn_layouts[&TeamId::Blue][1].get(1).copied()
    );
    let spawned = arena
        .sink
        .take()
        .into_iter()
        .filter(|n| matches!(n, Notification::ChampionSpawned { .. }))
        .count();
    assert_eq!(spawned, 4);
}

#[test]
fn first_kill_awards_first_blood() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let (a, b) = (ids[0], ids[1]);
    arena.sink.take();

    let outcome = arena.kill(b, a);
    assert_eq!(outcome, DamageOutcome::ChampionKilled { killer: Some(a) });

    assert_eq!(arena.champion(a).ledger().streak(), 1);
    assert_eq!(arena.champion(b).ledger().streak(), -1);
    assert_eq!(arena.champion(a).ledger().gold(), 475.0 + 300.0 + 100.0);
    assert_eq!(arena.champion(a).score().kills, 1);
    assert_eq!(arena.champion(b).score().deaths, 1);
    assert!(arena.state.match_state.first_blood());
    assert_eq!(
        arena.champion(b).respawn_scheduler().remaining_ms(),
        GameConfig::respawn_delay_ms(1)
    );

    assert_eq!(
        arena.sink.take(),
        vec![
            Notification::DeathAnnounced {
                victim: b,
                killer: Some(a)
            },
            Notification::ChampionDied {
                victim: b,
                killer: Some(a),
                gold: 400
            },
            Notification::GoldAdded {
                champion: a,
                source: b,
                amount: 400.0
            },
        ]
    );
}

#[test]
fn later_kills_are_reduced_and_never_get_the_bonus() {
    let rules = MapRulesData::default().with_kill_gold_reduction_until(1.0e9);
    let mut arena = Arena::new(rules);
    let ids = arena.spawn_all();
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

    // First blood happens before any reduction can apply.
    arena.kill(c, d);
    assert_eq!(arena.champion(d).ledger().gold(), 475.0 + 400.0);

    arena.kill(b, a);
    assert_eq!(arena.champion(a).ledger().gold(), 475.0 + 225.0);

    arena.tick(GameConfig::respawn_delay_ms(1));
    assert!(!arena.champion(b).is_dead());
    assert!(!arena.champion(c).is_dead());

    // C (on a -1 streak) kills B (on a -1 streak).
    let before = arena.champion(c).ledger().gold();
    arena.kill(b, c);
    assert_eq!(arena.champion(b).ledger().streak(), -2);
    assert_eq!(arena.champion(c).ledger().streak(), 1);
    assert_eq!(arena.champion(c).ledger().gold() - before, 240.0 * 0.75);
}

#[test]
fn execution_credit_goes_to_last_champion_damager() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let (a, b) = (ids[0], ids[1]);
    let minion = arena.minion(TeamId::Blue);

    assert!(matches!(
        arena.hit(b, Some(a), 100.0),
        DamageOutcome::Absorbed { remaining } if remaining == 500.0
    ));
    arena.tick(10_000.0);

    let outcome = arena.hit(b, Some(minion), 10_000.0);
    assert_eq!(outcome, DamageOutcome::ChampionKilled { killer: Some(a) });
    assert_eq!(arena.champion(a).score().kills, 1);
}

#[test]
fn expired_credit_leaves_kill_unrewarded() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let (a, b) = (ids[0], ids[1]);
    let minion = arena.minion(TeamId::Blue);

    arena.hit(b, Some(a), 100.0);
    arena.tick(15_000.0);
    arena.sink.take();

    let outcome = arena.hit(b, Some(minion), 10_000.0);
    assert_eq!(outcome, DamageOutcome::ChampionKilled { killer: None });
    assert_eq!(arena.champion(b).ledger().streak(), 0);
    assert_eq!(arena.champion(b).score().deaths, 1);
    assert!(!arena.state.match_state.first_blood());
    assert_eq!(
        arena.sink.take().last(),
        Some(&Notification::ChampionDied {
            victim: b,
            killer: None,
            gold: 0
        })
    );
}

#[test]
fn death_clears_every_target_on_the_corpse() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    arena.state.champion_mut(a).unwrap().set_target(Some(b));
    arena.state.champion_mut(c).unwrap().set_target(Some(b));
    arena.state.champion_mut(b).unwrap().set_target(Some(a));

    arena.kill(b, a);
    assert_eq!(arena.champion(a).target(), None);
    assert_eq!(arena.champion(b).target(), None);
    assert_eq!(arena.champion(c).target(), None);
}

#[test]
fn minion_gold_lifts_death_streak_one_step() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let (c, d) = (ids[2], ids[3]);

    for _ in 0..3 {
        arena.kill(c, d);
        arena.tick(GameConfig::respawn_delay_ms(1));
    }
    assert_eq!(arena.champion(c).ledger().streak(), -3);

    let gold = arena.champion(c).ledger().gold();
    for expected_pool in [20.0, 40.0] {
        let minion = arena.minion(TeamId::Purple);
        assert_eq!(
            arena.hit(minion, Some(c), 1_000.0),
            DamageOutcome::UnitKilled { gold: 20.0 }
        );
        assert_eq!(
            arena.champion(c).ledger().death_streak_minion_gold(),
            expected_pool
        );
        assert_eq!(arena.champion(c).ledger().streak(), -3);
    }

    let minion = arena.minion(TeamId::Purple);
    arena.hit(minion, Some(c), 1_000.0);
    assert_eq!(arena.champion(c).ledger().streak(), -2);
    assert_eq!(arena.champion(c).ledger().death_streak_minion_gold(), 0.0);
    assert_eq!(arena.champion(c).ledger().gold(), gold + 60.0);
    assert_eq!(arena.champion(c).score().minions_killed, 3);
}

#[test]
fn dead_champions_ignore_damage() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    arena.kill(ids[1], ids[0]);
    assert_eq!(arena.kill(ids[1], ids[0]), DamageOutcome::Ignored);
    assert_eq!(arena.champion(ids[0]).score().kills, 1);
}

#[test]
fn spell_level_up_through_engine_respects_unlocks() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let mut engine = ArenaEngine::new(&mut arena.state, &arena.config);

    assert!(engine.level_up_spell(ids[0], SpellSlot::Basic(3)).is_err());
    let spell = engine.level_up_spell(ids[0], SpellSlot::Basic(0)).unwrap();
    assert_eq!(spell.level(), 1);
    assert!(engine.level_up_spell(ids[0], SpellSlot::Basic(1)).is_err());
}

#[test]
fn unattributed_death_still_respawns() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let b = ids[1];
    arena.sink.take();

    let outcome = arena.hit(b, None, 1e6);
    assert_eq!(outcome, DamageOutcome::ChampionKilled { killer: None });
    assert_eq!(arena.champion(b).score().deaths, 1);
    assert!(arena.champion(b).respawn_scheduler().is_pending());
    assert_eq!(
        arena.sink.take(),
        vec![
            Notification::DeathAnnounced {
                victim: b,
                killer: None,
            },
            Notification::ChampionDied {
                victim: b,
                killer: None,
                gold: 0,
            },
        ]
    );

    arena.tick(7_500.0);
    assert!(!arena.champion(b).is_dead());
    assert!(!arena.champion(b).respawn_scheduler().is_pending());
}

#[test]
fn monsters_pay_neutral_gold_and_turrets_pay_nothing() {
    let mut arena = Arena::new(MapRulesData::default());
    let ids = arena.spawn_all();
    let a = ids[0];
    let gold = arena.champion(a).ledger().gold();

    let monster = arena.unit(ObjectKind::Monster, TeamId::Neutral);
    let outcome = arena.hit(monster, Some(a), 1_000.0);
    assert_eq!(outcome, DamageOutcome::UnitKilled { gold: 35.0 });
    assert_eq!(arena.champion(a).score().minions_killed, 1);
    assert_eq!(arena.champion(a).score().neutral_minions_killed, 1);
    assert_eq!(arena.champion(a).ledger().gold(), gold + 35.0);

    let turret = arena.unit(ObjectKind::Turret, TeamId::Purple);
    let outcome = arena.hit(turret, Some(a), 1_000.0);
    assert_eq!(outcome, DamageOutcome::UnitKilled { gold: 0.0 });
    assert_eq!(arena.champion(a).score().minions_killed, 1);
    assert_eq!(arena.champion(a).ledger().gold(), gold + 35.0);
}
