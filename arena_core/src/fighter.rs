//! Fighter - mutable per-battle combatant state

use crate::ability::Ability;
use std::sync::Arc;

/// A combatant participating in one battle.
///
/// Spawned fresh from a [`FighterPrototype`](crate::roster::FighterPrototype)
/// at battle start and discarded when the battle ends. The ability list is a
/// shared reference to the prototype's table, never a deep copy.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub name: String,
    /// Faction tag, e.g. "reptile" or "mammal"
    pub faction: String,
    pub hp: i32,
    pub max_hp: i32,
    pub defense: i32,
    /// Current speed. Mutable within a battle via slow effects, never below 1.
    pub speed: i32,
    abilities: Arc<Vec<Ability>>,
}

impl Fighter {
    pub fn new(
        name: String,
        faction: String,
        max_hp: i32,
        defense: i32,
        speed: i32,
        abilities: Arc<Vec<Ability>>,
    ) -> Self {
        Fighter {
            name,
            faction,
            hp: max_hp,
            max_hp,
            defense,
            speed,
            abilities,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, flooring hp at 0. Returns the damage dealt (the
    /// non-negative requested amount, which may exceed remaining hp).
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let dealt = amount.max(0);
        self.hp = (self.hp - dealt).max(0);
        dealt
    }

    /// Heal up to max_hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Reduce speed, flooring at 1. Returns (speed before, speed after).
    pub fn slow(&mut self, amount: i32) -> (i32, i32) {
        let before = self.speed;
        self.speed = (self.speed - amount.max(0)).max(1);
        (before, self.speed)
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    /// Shared handle to the ability table, for cheap clones during resolution
    pub(crate) fn ability_table(&self) -> Arc<Vec<Ability>> {
        Arc::clone(&self.abilities)
    }
}
