//! Roster - the static table of fighter prototypes a battle spawns from

use crate::ability::Ability;
use crate::fighter::Fighter;
use std::sync::Arc;

/// An entry in the injected roster table.
///
/// Prototypes are read-only; battles spawn fresh [`Fighter`] state from them
/// and the ability list is shared by reference with every spawn.
#[derive(Debug, Clone)]
pub struct FighterPrototype {
    pub id: String,
    pub name: String,
    pub faction: String,
    pub max_hp: i32,
    pub defense: i32,
    pub speed: i32,
    abilities: Arc<Vec<Ability>>,
}

impl FighterPrototype {
    pub fn new(
        id: String,
        name: String,
        faction: String,
        max_hp: i32,
        defense: i32,
        speed: i32,
        abilities: Vec<Ability>,
    ) -> Self {
        FighterPrototype {
            id,
            name,
            faction,
            max_hp,
            defense,
            speed,
            abilities: Arc::new(abilities),
        }
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    /// Instantiate battle state: full hp, base speed, shared ability table
    pub fn spawn(&self) -> Fighter {
        Fighter::new(
            self.name.clone(),
            self.faction.clone(),
            self.max_hp,
            self.defense,
            self.speed,
            Arc::clone(&self.abilities),
        )
    }
}

/// The full prototype table, in file order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<FighterPrototype>,
}

impl Roster {
    pub fn new(entries: Vec<FighterPrototype>) -> Self {
        Roster { entries }
    }

    pub fn entries(&self) -> &[FighterPrototype] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&FighterPrototype> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// Prototypes belonging to one faction, in file order
    pub fn faction(&self, faction: &str) -> Vec<&FighterPrototype> {
        self.entries.iter().filter(|p| p.faction == faction).collect()
    }

    /// Distinct faction tags, in first-appearance order
    pub fn factions(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.faction.as_str()) {
                seen.push(&entry.faction);
            }
        }
        seen
    }

    /// Spawn a fresh fighter from the prototype with the given id
    pub fn spawn(&self, id: &str) -> Option<Fighter> {
        self.get(id).map(FighterPrototype::spawn)
    }
}
