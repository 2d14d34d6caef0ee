//! EffectEvent - narration record emitted by action resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// One observable effect of resolving a planned action.
///
/// Events carry display names rather than battle ids so the collaborator can
/// narrate them without holding a reference to the battle. The `Display`
/// impl renders the standard narration line for each variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EffectEvent {
    /// The actor was downed before its queued action came up
    CannotAct { actor: String },
    /// The chosen target was already down when the action resolved
    WastedAction { actor: String, ability: String },
    /// The accuracy roll failed
    Miss { actor: String, ability: String },
    /// Damage landed on the target
    Damage {
        actor: String,
        ability: String,
        target: String,
        amount: i32,
        lethal: bool,
    },
    /// The actor healed itself
    Heal {
        actor: String,
        ability: String,
        amount: i32,
    },
    /// Recoil drawback damage to the actor
    Recoil {
        actor: String,
        amount: i32,
        lethal: bool,
    },
    /// Self-slow drawback, speed change `from -> to`
    Slowed { actor: String, from: i32, to: i32 },
}

impl fmt::Display for EffectEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectEvent::CannotAct { actor } => {
                write!(f, "{actor} is down and cannot act.")
            }
            EffectEvent::WastedAction { actor, ability } => {
                write!(f, "{actor} tries {ability}, but the target is already down.")
            }
            EffectEvent::Miss { actor, ability } => {
                write!(f, "{actor} uses {ability} but misses!")
            }
            EffectEvent::Damage {
                actor,
                ability,
                target,
                amount,
                lethal,
            } => {
                write!(f, "{actor} uses {ability} on {target} for {amount} damage.")?;
                if *lethal {
                    write!(f, " {target} goes down!")?;
                }
                Ok(())
            }
            EffectEvent::Heal {
                actor,
                ability,
                amount,
            } => {
                write!(f, "{actor} uses {ability} and heals {amount} HP.")
            }
            EffectEvent::Recoil {
                actor,
                amount,
                lethal,
            } => {
                write!(f, " -> Drawback: {actor} takes {amount} recoil damage.")?;
                if *lethal {
                    write!(f, " {actor} goes down!")?;
                }
                Ok(())
            }
            EffectEvent::Slowed { actor, from, to } => {
                write!(f, " -> Drawback: {actor}'s speed drops {from} -> {to}.")
            }
        }
    }
}
