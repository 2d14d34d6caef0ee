//! Arena CLI - console menus and narration over the arena_core engine
//!
//! The engine never prompts or prints; everything interactive lives here.
//! Team battles let one player pick moves for both sides each round
//! (two players sharing one keyboard); duels pit the player against a
//! randomly-acting opponent.

use arena_core::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};

const TEAM_SIZE: usize = 2;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("arena_core=info")
        .init();

    tracing::info!("arena starting");

    let roster = default_roster();
    let mut rng = ChaCha8Rng::from_entropy();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        show_main_menu();
        match prompt_choice(&mut input, "Choose option: ", 1, 4)? {
            1 => {
                let team_a = choose_team(&mut input, &roster, "reptile")?;
                let team_b = choose_team(&mut input, &roster, "mammal")?;
                run_team_battle(&mut input, &mut rng, team_a, team_b)?;
            }
            2 => {
                let player = choose_fighter(&mut input, &roster, "your fighter")?;
                let opponent = choose_fighter(&mut input, &roster, "the opponent")?;
                run_duel(&mut input, &mut rng, player, opponent)?;
            }
            3 => {
                print_compendium(&roster);
                continue;
            }
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }

        if !prompt_yes_no(&mut input, "\nPlay another match? (y/n): ")? {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

fn show_main_menu() {
    println!("\n=== Arena ===");
    println!("1) Start 2v2 Team Battle");
    println!("2) Start 1v1 Duel (vs random opponent)");
    println!("3) View Character Compendium");
    println!("4) Quit");
}

/// Read a number in `low..=high`, re-prompting until valid
fn prompt_choice(
    input: &mut impl BufRead,
    prompt: &str,
    low: usize,
    high: usize,
) -> io::Result<usize> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (low..=high).contains(&n) => return Ok(n),
            _ => println!("Please enter a number from {low} to {high}."),
        }
    }
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

fn faction_label(faction: &str) -> String {
    let mut chars = faction.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn print_compendium(roster: &Roster) {
    println!("\n=== Character Compendium ===");
    for faction in roster.factions() {
        println!("\n{} Team", faction_label(faction));
        println!("{}", "-".repeat(60));
        for proto in roster.faction(faction) {
            println!(
                "{}: HP {} | DEF {} | SPD {}",
                proto.name, proto.max_hp, proto.defense, proto.speed
            );
            for ability in proto.abilities() {
                let effect = match ability.effect {
                    AbilityEffect::Damage(DamageModel::Scaled { power, .. }) => {
                        format!("power {power}")
                    }
                    AbilityEffect::Damage(DamageModel::Flat { min, max }) => {
                        format!("damage {min}-{max}")
                    }
                    AbilityEffect::Heal { amount } => format!("heal {amount}"),
                };
                let drawbacks = ability.drawback_summary();
                let drawback_text = if drawbacks.is_empty() {
                    String::new()
                } else {
                    format!(" | Drawback: {drawbacks}")
                };
                println!(
                    "  - {}: {}. {}{}",
                    ability.name, effect, ability.description, drawback_text
                );
            }
        }
    }
}

/// Pick TEAM_SIZE distinct fighters from one faction
fn choose_team(
    input: &mut impl BufRead,
    roster: &Roster,
    faction: &str,
) -> io::Result<Vec<Fighter>> {
    let mut available = roster.faction(faction);
    let mut selected = Vec::new();
    println!(
        "\nChoose {} {} fighters:",
        TEAM_SIZE,
        faction_label(faction)
    );

    while selected.len() < TEAM_SIZE {
        println!("\nAvailable fighters:");
        for (i, proto) in available.iter().enumerate() {
            println!(
                "{}) {} (HP {}, DEF {}, SPD {})",
                i + 1,
                proto.name,
                proto.max_hp,
                proto.defense,
                proto.speed
            );
        }

        let prompt = format!("Select fighter {}: ", selected.len() + 1);
        let idx = prompt_choice(input, &prompt, 1, available.len())? - 1;
        let proto = available.remove(idx);
        selected.push(proto.spawn());
    }
    Ok(selected)
}

/// Pick any single fighter from the full roster
fn choose_fighter(
    input: &mut impl BufRead,
    roster: &Roster,
    label: &str,
) -> io::Result<Fighter> {
    println!("\nChoose {label}:");
    for (i, proto) in roster.entries().iter().enumerate() {
        println!(
            "{}) {} ({}, HP {}, DEF {}, SPD {})",
            i + 1,
            proto.name,
            proto.faction,
            proto.max_hp,
            proto.defense,
            proto.speed
        );
    }
    let idx = prompt_choice(input, "Select fighter: ", 1, roster.entries().len())? - 1;
    Ok(roster.entries()[idx].spawn())
}

fn display_teams(battle: &TeamBattle) {
    for side in [TeamSide::A, TeamSide::B] {
        let faction = &battle.team(side)[0].faction;
        println!("Team {}:", faction_label(faction));
        for fighter in battle.team(side) {
            println!(
                "- {}: HP {}/{} | DEF {} | SPD {}",
                fighter.name, fighter.hp, fighter.max_hp, fighter.defense, fighter.speed
            );
        }
    }
}

/// Prompt one fighter's ability and target selection into a plan
fn choose_plan(
    input: &mut impl BufRead,
    battle: &TeamBattle,
    actor: FighterId,
    label: &str,
) -> io::Result<PlannedAction> {
    loop {
        let fighter = &battle.fighters()[actor.0];
        println!(
            "\n[{}] {} (HP {}/{}, SPD {}) choose ability:",
            label, fighter.name, fighter.hp, fighter.max_hp, fighter.speed
        );
        for (i, ability) in fighter.abilities().iter().enumerate() {
            let drawbacks = ability.drawback_summary();
            let extra = if drawbacks.is_empty() {
                String::new()
            } else {
                format!(" ({drawbacks})")
            };
            println!("{}) {} - {}{}", i + 1, ability.name, ability.description, extra);
        }
        let ability_index =
            prompt_choice(input, "Choose ability: ", 1, fighter.abilities().len())? - 1;

        let target = if fighter.abilities()[ability_index].is_offensive() {
            let targets = battle.valid_targets(actor);
            println!("Choose target:");
            for (i, id) in targets.iter().enumerate() {
                let t = &battle.fighters()[id.0];
                println!(
                    "{}) {} (HP {}/{}, DEF {}, SPD {})",
                    i + 1,
                    t.name,
                    t.hp,
                    t.max_hp,
                    t.defense,
                    t.speed
                );
            }
            targets[prompt_choice(input, "Choose target: ", 1, targets.len())? - 1]
        } else {
            actor
        };

        match battle.plan_action(actor, ability_index, target) {
            Ok(plan) => return Ok(plan),
            // Selection went stale between prompts; ask again
            Err(err) => println!("{err}"),
        }
    }
}

fn run_team_battle(
    input: &mut impl BufRead,
    rng: &mut impl Rng,
    team_a: Vec<Fighter>,
    team_b: Vec<Fighter>,
) -> io::Result<()> {
    let label_a = format!("{} Player", faction_label(&team_a[0].faction));
    let label_b = format!("{} Player", faction_label(&team_b[0].faction));
    let mut battle = TeamBattle::new(team_a, team_b);

    println!("\n=== {}v{} BATTLE START ===", TEAM_SIZE, TEAM_SIZE);

    while !battle.status().is_finished() {
        println!("\n===== ROUND {} =====", battle.round() + 1);
        display_teams(&battle);

        // Both players choose for their side before anything resolves
        let mut plans = Vec::new();
        for id in battle.living(TeamSide::A) {
            plans.push(choose_plan(input, &battle, id, &label_a)?);
        }
        for id in battle.living(TeamSide::B) {
            plans.push(choose_plan(input, &battle, id, &label_b)?);
        }

        println!("\n--- Action Resolution (by speed) ---");
        for event in battle.run_round(plans, rng) {
            println!("{event}");
        }
    }

    println!("\n=== BATTLE OVER ===");
    match battle.status() {
        BattleStatus::Finished(Outcome::Draw) => {
            println!("It's a draw! Both teams were wiped out.");
        }
        BattleStatus::Finished(Outcome::Winner(side)) => {
            let faction = &battle.team(side)[0].faction;
            println!("{} win!", faction_label(faction));
        }
        BattleStatus::InProgress => unreachable!("loop exits only when finished"),
    }
    Ok(())
}

fn run_duel(
    input: &mut impl BufRead,
    rng: &mut impl Rng,
    player: Fighter,
    opponent: Fighter,
) -> io::Result<()> {
    let player_id = FighterId(0);
    let mut duel = Duel::new(player, opponent, rng);

    println!("\n=== DUEL START ===");
    println!(
        "{} moves first!",
        duel.fighters()[duel.attacker().0].name
    );

    while !duel.status().is_finished() {
        for fighter in duel.fighters() {
            println!(
                "- {}: HP {}/{} | SPD {}",
                fighter.name, fighter.hp, fighter.max_hp, fighter.speed
            );
        }

        let plan = if duel.attacker() == player_id {
            let fighter = &duel.fighters()[player_id.0];
            println!("\nYour turn. Choose ability:");
            for (i, ability) in fighter.abilities().iter().enumerate() {
                let drawbacks = ability.drawback_summary();
                let extra = if drawbacks.is_empty() {
                    String::new()
                } else {
                    format!(" ({drawbacks})")
                };
                println!("{}) {} - {}{}", i + 1, ability.name, ability.description, extra);
            }
            let index =
                prompt_choice(input, "Choose ability: ", 1, fighter.abilities().len())? - 1;
            duel.plan_action(index)
        } else {
            duel.random_plan(rng)
        };

        match plan {
            Ok(action) => {
                for event in duel.run_turn(&action, rng) {
                    println!("{event}");
                }
            }
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }

    println!("\n=== DUEL OVER ===");
    match duel.status() {
        BattleStatus::Finished(DuelOutcome::Draw) => {
            println!("Both fighters are down. It's a draw!");
        }
        BattleStatus::Finished(DuelOutcome::Winner(id)) => {
            println!("{} wins the duel!", duel.fighters()[id.0].name);
        }
        BattleStatus::InProgress => {}
    }
    Ok(())
}
