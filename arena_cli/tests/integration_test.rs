//! Integration test: Load roster -> Spawn teams -> Battle to an outcome
//!
//! This test validates the full flow from roster configuration through
//! scripted battle resolution, the way the CLI drives it.

use arena_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

/// Helper to print the current team state
fn print_teams(battle: &TeamBattle) {
    for side in [TeamSide::A, TeamSide::B] {
        for fighter in battle.team(side) {
            println!(
                "  [{:?}] {}: HP {}/{} | DEF {} | SPD {}",
                side, fighter.name, fighter.hp, fighter.max_hp, fighter.defense, fighter.speed
            );
        }
    }
}

fn assert_hp_invariants(fighters: &[Fighter]) {
    for fighter in fighters {
        assert!(
            fighter.hp >= 0 && fighter.hp <= fighter.max_hp,
            "{} hp {} outside [0, {}]",
            fighter.name,
            fighter.hp,
            fighter.max_hp
        );
        assert!(fighter.speed >= 1, "{} speed dropped below 1", fighter.name);
    }
}

fn spawn_team(roster: &Roster, ids: &[&str]) -> Vec<Fighter> {
    ids.iter()
        .map(|id| roster.spawn(id).expect("roster fighter"))
        .collect()
}

#[test]
fn test_full_team_battle_runs_to_an_outcome() {
    separator("2v2 Team Battle (random selections, seeded)");

    let roster = default_roster();
    let mut battle = TeamBattle::new(
        spawn_team(&roster, &["pyra", "strix"]),
        spawn_team(&roster, &["brakk", "lyra"]),
    );
    let mut rng = StdRng::seed_from_u64(2024);

    while !battle.status().is_finished() && battle.round() < 500 {
        let plans = battle
            .random_round_plans(&mut rng)
            .expect("living fighters have living targets");
        let events = battle.run_round(plans, &mut rng);
        assert!(!events.is_empty(), "a round always produces events");

        println!("--- Round {} ---", battle.round());
        for event in &events {
            println!("  {event}");
        }
        assert_hp_invariants(battle.fighters());
    }

    print_teams(&battle);
    let status = battle.status();
    assert!(status.is_finished(), "battle did not finish in 500 rounds");

    // The losing side is fully downed; a winner keeps at least one fighter up
    match status {
        BattleStatus::Finished(Outcome::Winner(side)) => {
            assert!(battle.team(side).iter().any(Fighter::is_alive));
            assert!(battle
                .team(side.opponent())
                .iter()
                .all(|f| !f.is_alive()));
        }
        BattleStatus::Finished(Outcome::Draw) => {
            assert!(battle.fighters().iter().all(|f| !f.is_alive()));
        }
        BattleStatus::InProgress => unreachable!(),
    }
}

#[test]
fn test_team_battle_is_deterministic_for_a_fixed_seed() {
    let roster = default_roster();

    let run = |seed: u64| {
        let mut battle = TeamBattle::new(
            spawn_team(&roster, &["verdra", "nox"]),
            spawn_team(&roster, &["tor", "sable"]),
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let mut log = Vec::new();
        while !battle.status().is_finished() && battle.round() < 500 {
            let plans = battle.random_round_plans(&mut rng).unwrap();
            log.extend(battle.run_round(plans, &mut rng));
        }
        let hps: Vec<i32> = battle.fighters().iter().map(|f| f.hp).collect();
        (log, hps, battle.status())
    };

    assert_eq!(run(77), run(77));
}

#[test]
fn test_duel_runs_to_an_outcome_with_alternating_turns() {
    separator("1v1 Duel (random selections, seeded)");

    let roster = default_roster();
    // Neither of these two carries a heal, so hp only goes down
    let mut duel = Duel::new(
        roster.spawn("strix").expect("strix"),
        roster.spawn("tor").expect("tor"),
        &mut StdRng::seed_from_u64(11),
    );
    let mut rng = StdRng::seed_from_u64(12);

    let mut previous_attacker = None;
    while !duel.status().is_finished() && duel.turn() < 500 {
        let attacker = duel.attacker();
        if let Some(prev) = previous_attacker {
            assert_ne!(attacker, prev, "duel turns must strictly alternate");
        }
        previous_attacker = Some(attacker);

        let action = duel.random_plan(&mut rng).expect("attacker can act");
        for event in duel.run_turn(&action, &mut rng) {
            println!("  {event}");
        }
        assert_hp_invariants(duel.fighters());
    }

    assert!(duel.status().is_finished(), "duel did not finish in 500 turns");
    if let BattleStatus::Finished(DuelOutcome::Winner(id)) = duel.status() {
        println!("Winner: {}", duel.fighters()[id.0].name);
        assert!(duel.fighters()[id.0].is_alive());
    }
}

#[test]
fn test_speed_scenario_damage_band() {
    // Fighter A (hp 100, SPD 14) hits Fighter B (hp 110, DEF 13) with a
    // 24-power full-scale ability: damage = max(1, 24 + jitter - 13), so
    // every hit lands in 7..=15.
    let attacker_proto = FighterPrototype::new(
        "a".to_string(),
        "A".to_string(),
        "reptile".to_string(),
        100,
        8,
        14,
        vec![Ability::attack("Flame Dart", 24)],
    );
    let defender_proto = FighterPrototype::new(
        "b".to_string(),
        "B".to_string(),
        "mammal".to_string(),
        110,
        13,
        9,
        vec![Ability::attack("Cleaver Chop", 22)],
    );

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let mut battle = TeamBattle::new(
            vec![attacker_proto.spawn()],
            vec![defender_proto.spawn()],
        );
        let plan = battle
            .plan_action(FighterId(0), 0, FighterId(1))
            .unwrap();
        let events = battle.run_round(vec![plan], &mut rng);

        match &events[0] {
            EffectEvent::Damage { amount, .. } => {
                assert!((7..=15).contains(amount), "damage {amount} out of band");
            }
            other => panic!("expected a hit, got {other:?}"),
        }
    }

    // Identical seeds replay the identical battle
    let replay = |seed: u64| {
        let mut battle = TeamBattle::new(
            vec![attacker_proto.spawn()],
            vec![defender_proto.spawn()],
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = battle
            .plan_action(FighterId(0), 0, FighterId(1))
            .unwrap();
        battle.run_round(vec![plan], &mut rng)
    };
    assert_eq!(replay(4), replay(4));
}
