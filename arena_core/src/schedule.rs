//! Scheduling - ordering submitted actions for resolution
//!
//! Two independent policies: batch rounds sort every submitted action by
//! actor speed with a fresh random tiebreak, while duels alternate strictly
//! from a single opening coin flip. The two never share tiebreak logic.

use crate::action::PlannedAction;
use crate::fighter::Fighter;
use crate::types::FighterId;
use rand::Rng;

/// Order a full round of submitted actions by actor speed, descending.
///
/// Speed is read at ordering time, so slows from previous rounds are in
/// effect. The tiebreak is rolled fresh for every action, so equal-speed
/// actors resolve in a different random order each round.
pub fn order_by_speed(
    fighters: &[Fighter],
    actions: Vec<PlannedAction>,
    rng: &mut impl Rng,
) -> Vec<PlannedAction> {
    let mut keyed: Vec<(i32, u32, PlannedAction)> = actions
        .into_iter()
        .map(|action| {
            let speed = fighters[action.actor().0].speed;
            (speed, rng.gen::<u32>(), action)
        })
        .collect();

    keyed.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    keyed.into_iter().map(|(_, _, action)| action).collect()
}

/// Pick the duel's opening attacker with a single coin flip.
///
/// Speed plays no part in duel ordering; turns alternate from here on.
pub fn opening_attacker(rng: &mut impl Rng) -> FighterId {
    if rng.gen_bool(0.5) {
        FighterId(0)
    } else {
        FighterId(1)
    }
}
