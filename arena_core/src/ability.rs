//! Ability - immutable move data shared between fighter instances

use crate::types::AbilityKind;
use serde::{Deserialize, Serialize};

/// How an offensive ability computes its damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageModel {
    /// Base power plus a -4..=4 jitter, minus the scaled target defense.
    /// `defense_scale` is the fraction of the target's defense that applies;
    /// guard-break abilities use low fractions.
    Scaled { power: i32, defense_scale: f64 },
    /// Uniform roll in `min..=max`, ignoring target defense entirely
    Flat { min: i32, max: i32 },
}

/// The single meaningful effect of an ability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityEffect {
    Damage(DamageModel),
    Heal { amount: i32 },
}

/// An ability prototype. Never mutated once built; fighters hold a shared
/// reference to the list they were spawned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub kind: AbilityKind,
    pub effect: AbilityEffect,
    /// Chance to land, in (0, 1]. Healing never rolls accuracy.
    pub accuracy: f64,
    /// Recoil damage the actor takes after using this ability
    pub self_damage: i32,
    /// Speed the actor loses after using this ability (floored at 1)
    pub self_slow: i32,
    pub description: String,
}

impl Ability {
    /// Build a plain attack with the scaled damage model and no drawbacks
    pub fn attack(name: &str, power: i32) -> Self {
        Ability {
            name: name.to_string(),
            kind: AbilityKind::Attack,
            effect: AbilityEffect::Damage(DamageModel::Scaled {
                power,
                defense_scale: 1.0,
            }),
            accuracy: 1.0,
            self_damage: 0,
            self_slow: 0,
            description: String::new(),
        }
    }

    /// Build a self-heal with no drawbacks
    pub fn self_heal(name: &str, amount: i32) -> Self {
        Ability {
            name: name.to_string(),
            kind: AbilityKind::SelfHeal,
            effect: AbilityEffect::Heal { amount },
            accuracy: 1.0,
            self_damage: 0,
            self_slow: 0,
            description: String::new(),
        }
    }

    /// Whether using this ability requires an enemy target
    pub fn is_offensive(&self) -> bool {
        matches!(self.effect, AbilityEffect::Damage(_))
    }

    /// Short drawback summary for roster display, e.g.
    /// `"self-dmg 6, 75% hit"`. Empty when the ability has no drawbacks.
    pub fn drawback_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.self_damage > 0 {
            parts.push(format!("self-dmg {}", self.self_damage));
        }
        if self.self_slow > 0 {
            parts.push(format!("self-slow {}", self.self_slow));
        }
        if self.accuracy < 1.0 {
            parts.push(format!("{}% hit", (self.accuracy * 100.0).round() as i32));
        }
        parts.join(", ")
    }
}
