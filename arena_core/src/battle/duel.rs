//! Duel - 1v1 battles with strictly alternating turns

use super::BattleStatus;
use crate::action::{PlannedAction, SelectionError};
use crate::combat::{resolve_action_with_rng, EffectEvent};
use crate::fighter::Fighter;
use crate::schedule::opening_attacker;
use crate::types::FighterId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Final outcome of a duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelOutcome {
    Winner(FighterId),
    /// Both fighters hit 0 hp in the same turn (recoil double-down)
    Draw,
}

/// A 1v1 battle. The opening attacker is decided by a single coin flip,
/// never by speed, and turns alternate strictly from there. Termination is
/// checked after every single turn, not deferred to a round boundary.
#[derive(Debug)]
pub struct Duel {
    fighters: [Fighter; 2],
    attacker: FighterId,
    turn: u32,
}

impl Duel {
    /// Start a duel; the coin flip for the opening attacker comes from `rng`.
    pub fn new(challenger: Fighter, opponent: Fighter, rng: &mut impl Rng) -> Self {
        Duel {
            fighters: [challenger, opponent],
            attacker: opening_attacker(rng),
            turn: 0,
        }
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters.get(id.0)
    }

    /// Whose turn it is to act
    pub fn attacker(&self) -> FighterId {
        self.attacker
    }

    pub fn defender(&self) -> FighterId {
        FighterId(1 - self.attacker.0)
    }

    /// Completed turn count
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Validate the current attacker's ability selection into an action.
    /// Offensive abilities target the defender; self-heals target the actor.
    pub fn plan_action(&self, ability_index: usize) -> Result<PlannedAction, SelectionError> {
        let actor = self.attacker;
        let actor_state = &self.fighters[actor.0];
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

        let defender = self.defender();
        if !self.fighters[defender.0].is_alive() {
            return Err(SelectionError::NoLivingTarget(actor_state.name.clone()));
        }
        Ok(PlannedAction::new(actor, ability_index, defender))
    }

    /// Plan a uniformly random ability for the current attacker
    pub fn random_plan(&self, rng: &mut impl Rng) -> Result<PlannedAction, SelectionError> {
        let count = self.fighters[self.attacker.0].abilities().len();
        self.plan_action(rng.gen_range(0..count))
    }

    /// Resolve one turn and pass the initiative to the other fighter.
    /// Returns the event log for the turn; check [`Duel::status`] afterwards.
    pub fn run_turn(
        &mut self,
        action: &PlannedAction,
        rng: &mut impl Rng,
    ) -> Vec<EffectEvent> {
        self.turn += 1;
        tracing::debug!(turn = self.turn, attacker = %self.fighters[self.attacker.0].name, "resolving turn");

        let events = resolve_action_with_rng(&mut self.fighters, action, rng);
        self.attacker = self.defender();
        events
    }

    /// Evaluate termination: the duel ends the instant either fighter's hp
    /// reaches 0. A recoil that downs the actor in the turn that downs the
    /// target makes it a draw.
    pub fn status(&self) -> BattleStatus<DuelOutcome> {
        let down = [!self.fighters[0].is_alive(), !self.fighters[1].is_alive()];
        match down {
            [true, true] => BattleStatus::Finished(DuelOutcome::Draw),
            [true, false] => BattleStatus::Finished(DuelOutcome::Winner(FighterId(1))),
            [false, true] => BattleStatus::Finished(DuelOutcome::Winner(FighterId(0))),
            [false, false] => BattleStatus::InProgress,
        }
    }
}
