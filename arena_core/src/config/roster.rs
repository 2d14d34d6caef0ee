//! Roster configuration - fighters and their shared ability table

use super::ConfigError;
use crate::ability::{Ability, AbilityEffect, DamageModel};
use crate::roster::{FighterPrototype, Roster};
use crate::types::AbilityKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

fn default_accuracy() -> f64 {
    1.0
}

fn default_defense_scale() -> f64 {
    1.0
}

/// One `[[abilities]]` entry. Exactly one damage/heal specification must be
/// present: `power` (scaled model), `min_damage`+`max_damage` (flat model),
/// or `heal_amount` for self-heals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityConfig {
    pub id: String,
    pub name: String,
    pub kind: AbilityKind,
    #[serde(default)]
    pub power: Option<i32>,
    #[serde(default)]
    pub min_damage: Option<i32>,
    #[serde(default)]
    pub max_damage: Option<i32>,
    #[serde(default)]
    pub heal_amount: Option<i32>,
    #[serde(default = "default_accuracy")]
    pub accuracy: f64,
    #[serde(default)]
    pub self_damage: i32,
    #[serde(default)]
    pub self_slow: i32,
    #[serde(default = "default_defense_scale")]
    pub target_defense_scale: f64,
    #[serde(default)]
    pub description: String,
}

impl AbilityConfig {
    fn build(&self) -> Result<Ability, ConfigError> {
        if !(self.accuracy > 0.0 && self.accuracy <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "ability '{}': accuracy {} outside (0, 1]",
                self.id, self.accuracy
            )));
        }
        if self.self_damage < 0 || self.self_slow < 0 {
            return Err(ConfigError::ValidationError(format!(
                "ability '{}': negative drawback",
                self.id
            )));
        }

        let effect = match self.kind {
            AbilityKind::SelfHeal => {
                if self.power.is_some() || self.min_damage.is_some() || self.max_damage.is_some() {
                    return Err(ConfigError::ValidationError(format!(
                        "ability '{}': self_heal cannot carry damage fields",
                        self.id
                    )));
                }
                let amount = self.heal_amount.ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "ability '{}': self_heal requires heal_amount",
                        self.id
                    ))
                })?;
                if amount <= 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "ability '{}': heal_amount must be positive",
                        self.id
                    )));
                }
                AbilityEffect::Heal { amount }
            }
            _ => {
                if self.heal_amount.is_some() {
                    return Err(ConfigError::ValidationError(format!(
                        "ability '{}': heal_amount only applies to self_heal",
                        self.id
                    )));
                }
                match (self.power, self.min_damage, self.max_damage) {
                    (Some(power), None, None) => {
                        // Scale 0.0 is legal: the ability ignores defense
                        if !(0.0..=1.0).contains(&self.target_defense_scale) {
                            return Err(ConfigError::ValidationError(format!(
                                "ability '{}': target_defense_scale {} outside [0, 1]",
                                self.id, self.target_defense_scale
                            )));
                        }
                        AbilityEffect::Damage(DamageModel::Scaled {
                            power,
                            defense_scale: self.target_defense_scale,
                        })
                    }
                    (None, Some(min), Some(max)) => {
                        if min < 1 || max < min {
                            return Err(ConfigError::ValidationError(format!(
                                "ability '{}': flat damage range {}..{} invalid",
                                self.id, min, max
                            )));
                        }
                        AbilityEffect::Damage(DamageModel::Flat { min, max })
                    }
                    _ => {
                        return Err(ConfigError::ValidationError(format!(
                            "ability '{}': needs exactly one of power or min_damage+max_damage",
                            self.id
                        )))
                    }
                }
            }
        };

        Ok(Ability {
            name: self.name.clone(),
            kind: self.kind,
            effect,
            accuracy: self.accuracy,
            self_damage: self.self_damage,
            self_slow: self.self_slow,
            description: self.description.clone(),
        })
    }
}

/// One `[[fighters]]` entry, referencing abilities by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterConfig {
    pub id: String,
    pub name: String,
    pub faction: String,
    pub max_hp: i32,
    pub defense: i32,
    pub speed: i32,
    pub abilities: Vec<String>,
}

/// Container for the full roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub abilities: Vec<AbilityConfig>,
    pub fighters: Vec<FighterConfig>,
}

impl RosterConfig {
    /// Validate and resolve the config into a usable roster
    pub fn into_roster(self) -> Result<Roster, ConfigError> {
        let mut table: HashMap<String, Ability> = HashMap::new();
        for config in &self.abilities {
            let ability = config.build()?;
            if table.insert(config.id.clone(), ability).is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate ability id '{}'",
                    config.id
                )));
            }
        }

        let mut entries = Vec::with_capacity(self.fighters.len());
        for fighter in self.fighters {
            if fighter.max_hp < 1 || fighter.speed < 1 || fighter.defense < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "fighter '{}': stats out of range",
                    fighter.id
                )));
            }
            if fighter.abilities.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "fighter '{}': needs at least one ability",
                    fighter.id
                )));
            }

            let mut abilities = Vec::with_capacity(fighter.abilities.len());
            for ability_id in &fighter.abilities {
                let ability = table.get(ability_id).cloned().ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "fighter '{}': unknown ability id '{}'",
                        fighter.id, ability_id
                    ))
                })?;
                abilities.push(ability);
            }

            entries.push(FighterPrototype::new(
                fighter.id,
                fighter.name,
                fighter.faction,
                fighter.max_hp,
                fighter.defense,
                fighter.speed,
                abilities,
            ));
        }

        Ok(Roster::new(entries))
    }
}

/// Load a roster from a TOML file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let config: RosterConfig = super::load_toml(path)?;
    config.into_roster()
}

/// Parse a roster from a TOML string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let config: RosterConfig = super::parse_toml(content)?;
    config.into_roster()
}

/// The embedded default roster
pub fn default_roster() -> Roster {
    let toml = include_str!("../../config/roster.toml");
    parse_roster(toml).unwrap_or_else(|_| {
        // Minimal fallback pair so callers always get a fightable roster
        Roster::new(vec![
            FighterPrototype::new(
                "pyra".to_string(),
                "Pyra".to_string(),
                "reptile".to_string(),
                100,
                8,
                14,
                vec![Ability::attack("Flame Dart", 24)],
            ),
            FighterPrototype::new(
                "brakk".to_string(),
                "Brakk".to_string(),
                "mammal".to_string(),
                120,
                13,
                9,
                vec![Ability::attack("Cleaver Chop", 22)],
            ),
        ])
    })
}
