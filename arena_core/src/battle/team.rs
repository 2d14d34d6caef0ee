//! Team battle - batch rounds resolved in speed order

use super::BattleStatus;
use crate::action::{PlannedAction, SelectionError};
use crate::combat::{resolve_action_with_rng, EffectEvent};
use crate::fighter::Fighter;
use crate::schedule::order_by_speed;
use crate::types::{FighterId, TeamSide};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Final outcome of a team battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner(TeamSide),
    /// Both teams were wiped in the same round
    Draw,
}

/// A team battle in batch mode: every living fighter on both sides submits
/// one action, the full batch is ordered by speed, then resolved one action
/// at a time. Effects of earlier actions are visible to later ones within
/// the same round.
///
/// The battle exclusively owns its fighters; they are spawned fresh from
/// roster prototypes and discarded when the battle is dropped.
#[derive(Debug)]
pub struct TeamBattle {
    fighters: Vec<Fighter>,
    team_a_len: usize,
    round: u32,
}

impl TeamBattle {
    /// Start a battle between two non-empty teams.
    ///
    /// # Panics
    /// Panics if either team is empty.
    pub fn new(team_a: Vec<Fighter>, team_b: Vec<Fighter>) -> Self {
        assert!(
            !team_a.is_empty() && !team_b.is_empty(),
            "each team needs at least one fighter"
        );
        let team_a_len = team_a.len();
        let mut fighters = team_a;
        fighters.extend(team_b);
        TeamBattle {
            fighters,
            team_a_len,
            round: 0,
        }
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters.get(id.0)
    }

    pub fn side_of(&self, id: FighterId) -> TeamSide {
        if id.0 < self.team_a_len {
            TeamSide::A
        } else {
            TeamSide::B
        }
    }

    pub fn team(&self, side: TeamSide) -> &[Fighter] {
        match side {
            TeamSide::A => &self.fighters[..self.team_a_len],
            TeamSide::B => &self.fighters[self.team_a_len..],
        }
    }

    /// Fighter ids on one side, in team order
    pub fn members(&self, side: TeamSide) -> Vec<FighterId> {
        let range = match side {
            TeamSide::A => 0..self.team_a_len,
            TeamSide::B => self.team_a_len..self.fighters.len(),
        };
        range.map(FighterId).collect()
    }

    /// Living fighter ids on one side
    pub fn living(&self, side: TeamSide) -> Vec<FighterId> {
        self.members(side)
            .into_iter()
            .filter(|id| self.fighters[id.0].is_alive())
            .collect()
    }

    /// Living enemies an actor may attack this round
    pub fn valid_targets(&self, actor: FighterId) -> Vec<FighterId> {
        self.living(self.side_of(actor).opponent())
    }

    /// Completed round count
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Validate one selection into a [`PlannedAction`].
    ///
    /// Self-heal abilities always target the actor; the `target` argument is
    /// only consulted for offensive abilities, where it must be a living
    /// opposing fighter. Invalid selections are rejected here so resolution
    /// never sees them; re-prompting is the caller's job.
    pub fn plan_action(
        &self,
        actor: FighterId,
        ability_index: usize,
        target: FighterId,
    ) -> Result<PlannedAction, SelectionError> {
        let actor_state = self
            .fighter(actor)
            .ok_or(SelectionError::UnknownFighter(actor))?;
        if !actor_state.is_alive() {
            return Err(SelectionError::ActorDowned(actor_state.name.clone()));
        }
        let ability = actor_state
            .ability(ability_index)
            .ok_or_else(|| SelectionError::AbilityOutOfRange {
                actor: actor_state.name.clone(),
                index: ability_index,
            })?;

        if !ability.is_offensive() {
            return Ok(PlannedAction::new(actor, ability_index, actor));
        }

        let target_state = self
            .fighter(target)
            .ok_or(SelectionError::UnknownFighter(target))?;
        let is_enemy = self.side_of(target) == self.side_of(actor).opponent();
        if !is_enemy || !target_state.is_alive() {
            return Err(SelectionError::InvalidTarget {
                actor: actor_state.name.clone(),
                target: target_state.name.clone(),
            });
        }

        Ok(PlannedAction::new(actor, ability_index, target))
    }

    /// Plan a uniformly random ability and target for one actor, for
    /// scripted/AI-controlled sides.
    pub fn random_plan(
        &self,
        actor: FighterId,
        rng: &mut impl Rng,
    ) -> Result<PlannedAction, SelectionError> {
        let actor_state = self
            .fighter(actor)
            .ok_or(SelectionError::UnknownFighter(actor))?;
        if !actor_state.is_alive() {
            return Err(SelectionError::ActorDowned(actor_state.name.clone()));
        }

        let ability_index = rng.gen_range(0..actor_state.abilities().len());
        if !actor_state.abilities()[ability_index].is_offensive() {
            return self.plan_action(actor, ability_index, actor);
        }

        let targets = self.valid_targets(actor);
        let target = targets
            .choose(rng)
            .copied()
            .ok_or_else(|| SelectionError::NoLivingTarget(actor_state.name.clone()))?;
        self.plan_action(actor, ability_index, target)
    }

    /// One random plan per living fighter on both sides, in team order
    pub fn random_round_plans(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Vec<PlannedAction>, SelectionError> {
        let mut plans = Vec::new();
        for side in [TeamSide::A, TeamSide::B] {
            for id in self.living(side) {
                plans.push(self.random_plan(id, rng)?);
            }
        }
        Ok(plans)
    }

    /// Resolve one full round: order the submitted batch by speed (random
    /// tiebreak) and resolve each action in turn. Returns the ordered event
    /// log for narration.
    pub fn run_round(
        &mut self,
        actions: Vec<PlannedAction>,
        rng: &mut impl Rng,
    ) -> Vec<EffectEvent> {
        self.round += 1;
        tracing::debug!(round = self.round, actions = actions.len(), "resolving round");

        let ordered = order_by_speed(&self.fighters, actions, rng);
        let mut events = Vec::new();
        for action in &ordered {
            events.extend(resolve_action_with_rng(&mut self.fighters, action, rng));
        }
        events
    }

    /// Evaluate termination. A team battle ends when every member of either
    /// team is downed; a simultaneous wipe is a draw.
    pub fn status(&self) -> BattleStatus<Outcome> {
        let a_wiped = self.team(TeamSide::A).iter().all(|f| !f.is_alive());
        let b_wiped = self.team(TeamSide::B).iter().all(|f| !f.is_alive());
        match (a_wiped, b_wiped) {
            (true, true) => BattleStatus::Finished(Outcome::Draw),
            (true, false) => BattleStatus::Finished(Outcome::Winner(TeamSide::B)),
            (false, true) => BattleStatus::Finished(Outcome::Winner(TeamSide::A)),
            (false, false) => BattleStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{Ability, AbilityEffect, DamageModel};
    use crate::types::AbilityKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn flat_attack(name: &str, amount: i32) -> Ability {
        Ability {
            name: name.to_string(),
            kind: AbilityKind::Attack,
            effect: AbilityEffect::Damage(DamageModel::Flat {
                min: amount,
                max: amount,
            }),
            accuracy: 1.0,
            self_damage: 0,
            self_slow: 0,
            description: String::new(),
        }
    }

    fn fighter(name: &str, hp: i32, speed: i32, abilities: Vec<Ability>) -> Fighter {
        Fighter::new(
            name.to_string(),
            "test".to_string(),
            hp,
            0,
            speed,
            Arc::new(abilities),
        )
    }

    #[test]
    fn test_selection_boundary_rejects_bad_indices() {
        let battle = TeamBattle::new(
            vec![fighter("A1", 30, 10, vec![flat_attack("Jab", 5)])],
            vec![fighter("B1", 30, 10, vec![flat_attack("Jab", 5)])],
        );

        assert!(matches!(
            battle.plan_action(FighterId(9), 0, FighterId(1)),
            Err(SelectionError::UnknownFighter(_))
        ));
        assert!(matches!(
            battle.plan_action(FighterId(0), 3, FighterId(1)),
            Err(SelectionError::AbilityOutOfRange { index: 3, .. })
        ));
        assert!(matches!(
            battle.plan_action(FighterId(0), 0, FighterId(0)),
            Err(SelectionError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_downed_fighters_cannot_be_chosen() {
        let mut battle = TeamBattle::new(
            vec![fighter("A1", 1, 10, vec![flat_attack("Jab", 5)])],
            vec![fighter("B1", 30, 20, vec![flat_attack("Smash", 999)])],
        );

        let plans = vec![
            battle.plan_action(FighterId(0), 0, FighterId(1)).unwrap(),
            battle.plan_action(FighterId(1), 0, FighterId(0)).unwrap(),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        battle.run_round(plans, &mut rng);

        assert!(matches!(
            battle.plan_action(FighterId(0), 0, FighterId(1)),
            Err(SelectionError::ActorDowned(_))
        ));
        assert!(battle.living(TeamSide::A).is_empty());
    }

    #[test]
    fn test_heal_targets_the_actor() {
        let battle = TeamBattle::new(
            vec![fighter("A1", 30, 10, vec![Ability::self_heal("Mend", 10)])],
            vec![fighter("B1", 30, 10, vec![flat_attack("Jab", 5)])],
        );

        // Target argument is ignored for self-heals
        let plan = battle
            .plan_action(FighterId(0), 0, FighterId(1))
            .unwrap();
        assert_eq!(plan.target(), FighterId(0));
    }

    #[test]
    fn test_earlier_effects_visible_to_later_actions() {
        // The fast fighter one-shots the slow one, whose queued action then
        // resolves as CannotAct.
        let mut battle = TeamBattle::new(
            vec![fighter("Fast", 30, 20, vec![flat_attack("Smash", 999)])],
            vec![fighter("Slow", 30, 5, vec![flat_attack("Jab", 5)])],
        );

        let plans = vec![
            battle.plan_action(FighterId(0), 0, FighterId(1)).unwrap(),
            battle.plan_action(FighterId(1), 0, FighterId(0)).unwrap(),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let events = battle.run_round(plans, &mut rng);

        assert!(matches!(events[0], EffectEvent::Damage { lethal: true, .. }));
        assert!(matches!(events[1], EffectEvent::CannotAct { .. }));
        assert_eq!(battle.fighter(FighterId(0)).unwrap().hp, 30);
    }

    #[test]
    fn test_team_a_wiped_means_b_wins() {
        let mut battle = TeamBattle::new(
            vec![
                fighter("A1", 10, 5, vec![flat_attack("Jab", 1)]),
                fighter("A2", 10, 4, vec![flat_attack("Jab", 1)]),
            ],
            vec![fighter("B1", 500, 20, vec![flat_attack("Smash", 999)])],
        );

        let mut rng = StdRng::seed_from_u64(1);
        while !battle.status().is_finished() {
            let plans = battle.random_round_plans(&mut rng).unwrap();
            battle.run_round(plans, &mut rng);
        }

        assert_eq!(
            battle.status(),
            BattleStatus::Finished(Outcome::Winner(TeamSide::B))
        );
        assert!(battle.round() <= 2);
    }

    #[test]
    fn test_simultaneous_wipe_is_a_draw() {
        // The lone A fighter kills the lone B fighter, then dies to recoil
        // in the same round.
        let mut suicide = flat_attack("Final Burst", 999);
        suicide.self_damage = 50;

        let mut battle = TeamBattle::new(
            vec![fighter("A1", 10, 20, vec![suicide])],
            vec![fighter("B1", 10, 5, vec![flat_attack("Jab", 1)])],
        );

        let plans = vec![
            battle.plan_action(FighterId(0), 0, FighterId(1)).unwrap(),
            battle.plan_action(FighterId(1), 0, FighterId(0)).unwrap(),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        battle.run_round(plans, &mut rng);

        assert_eq!(battle.status(), BattleStatus::Finished(Outcome::Draw));
    }

    #[test]
    fn test_random_round_plans_cover_all_living_fighters() {
        let battle = TeamBattle::new(
            vec![
                fighter("A1", 30, 10, vec![flat_attack("Jab", 5)]),
                fighter("A2", 30, 10, vec![flat_attack("Jab", 5)]),
            ],
            vec![
                fighter("B1", 30, 10, vec![flat_attack("Jab", 5)]),
                fighter("B2", 30, 10, vec![flat_attack("Jab", 5)]),
            ],
        );

        let mut rng = StdRng::seed_from_u64(1);
        let plans = battle.random_round_plans(&mut rng).unwrap();
        assert_eq!(plans.len(), 4);

        let mut actors: Vec<usize> = plans.iter().map(|p| p.actor().0).collect();
        actors.sort_unstable();
        assert_eq!(actors, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fixed_seed_rounds_are_reproducible() {
        let run = |seed: u64| {
            let mut battle = TeamBattle::new(
                vec![
                    fighter("A1", 100, 14, vec![Ability::attack("Flame Dart", 24)]),
                    fighter("A2", 92, 18, vec![Ability::attack("Arc Lash", 20)]),
                ],
                vec![
                    fighter("B1", 120, 9, vec![Ability::attack("Cleaver Chop", 22)]),
                    fighter("B2", 96, 19, vec![Ability::attack("Twin Daggers", 21)]),
                ],
            );
            let mut rng = StdRng::seed_from_u64(seed);
            let mut log = Vec::new();
            while !battle.status().is_finished() && battle.round() < 50 {
                let plans = battle.random_round_plans(&mut rng).unwrap();
                log.extend(battle.run_round(plans, &mut rng));
            }
            log
        };

        assert_eq!(run(1234), run(1234));
    }
}
