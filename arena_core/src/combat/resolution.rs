//! Action resolution - applying one planned action to the fighters

use super::EffectEvent;
use crate::ability::{AbilityEffect, DamageModel};
use crate::action::PlannedAction;
use crate::fighter::Fighter;
use rand::Rng;

/// Resolve one action against the battle's fighter list.
///
/// Convenience wrapper over [`resolve_action_with_rng`] using the thread rng.
pub fn resolve_action(fighters: &mut [Fighter], action: &PlannedAction) -> Vec<EffectEvent> {
    let mut rng = rand::thread_rng();
    resolve_action_with_rng(fighters, action, &mut rng)
}

/// Resolve one action with a provided RNG (for deterministic testing).
///
/// The action's indices are trusted (they were validated when the action was
/// planned), but the state they refer to is re-checked here: a downed actor
/// yields a single `CannotAct` event, a downed target a `WastedAction`.
/// Drawbacks (recoil, self-slow) apply whenever the actor acted at all,
/// including after a miss or wasted action.
pub fn resolve_action_with_rng(
    fighters: &mut [Fighter],
    action: &PlannedAction,
    rng: &mut impl Rng,
) -> Vec<EffectEvent> {
    let actor_idx = action.actor().0;
    let target_idx = action.target().0;

    let mut events = Vec::new();

    if !fighters[actor_idx].is_alive() {
        events.push(EffectEvent::CannotAct {
            actor: fighters[actor_idx].name.clone(),
        });
        return events;
    }

    // Cheap handle clone keeps the ability borrow independent of the
    // fighter mutations below.
    let table = fighters[actor_idx].ability_table();
    let ability = &table[action.ability()];
    let actor_name = fighters[actor_idx].name.clone();

    tracing::debug!(actor = %actor_name, ability = %ability.name, "resolving action");

    match ability.effect {
        AbilityEffect::Heal { amount } => {
            // No accuracy roll on self-heals
            let healed = fighters[actor_idx].heal(amount);
            events.push(EffectEvent::Heal {
                actor: actor_name.clone(),
                ability: ability.name.clone(),
                amount: healed,
            });
        }
        AbilityEffect::Damage(model) => {
            if !fighters[target_idx].is_alive() {
                events.push(EffectEvent::WastedAction {
                    actor: actor_name.clone(),
                    ability: ability.name.clone(),
                });
            } else if rng.gen::<f64>() < ability.accuracy {
                let damage = roll_damage(&model, fighters[target_idx].defense, rng);
                let dealt = fighters[target_idx].take_damage(damage);
                events.push(EffectEvent::Damage {
                    actor: actor_name.clone(),
                    ability: ability.name.clone(),
                    target: fighters[target_idx].name.clone(),
                    amount: dealt,
                    lethal: !fighters[target_idx].is_alive(),
                });
            } else {
                events.push(EffectEvent::Miss {
                    actor: actor_name.clone(),
                    ability: ability.name.clone(),
                });
            }
        }
    }

    if ability.self_damage > 0 {
        let recoil = fighters[actor_idx].take_damage(ability.self_damage);
        events.push(EffectEvent::Recoil {
            actor: actor_name.clone(),
            amount: recoil,
            lethal: !fighters[actor_idx].is_alive(),
        });
    }

    if ability.self_slow > 0 {
        let (from, to) = fighters[actor_idx].slow(ability.self_slow);
        events.push(EffectEvent::Slowed {
            actor: actor_name,
            from,
            to,
        });
    }

    events
}

/// Roll damage for one hit. Scaled abilities add a -4..=4 jitter to their
/// power and subtract the scaled target defense; flat abilities roll
/// uniformly in `min..=max` with no defense term. Either way the result is
/// at least 1 against a living target.
pub fn roll_damage(model: &DamageModel, target_defense: i32, rng: &mut impl Rng) -> i32 {
    let rolled = match *model {
        DamageModel::Scaled {
            power,
            defense_scale,
        } => {
            let jitter = rng.gen_range(-4..=4);
            let effective_def = (target_defense as f64 * defense_scale).floor() as i32;
            power + jitter - effective_def
        }
        DamageModel::Flat { min, max } => {
            if min >= max {
                max
            } else {
                rng.gen_range(min..=max)
            }
        }
    };
    rolled.max(1)
}
