//! arena_core - Battle resolution engine for turn-based arena fights
//!
//! This library provides:
//! - Fighter/Ability entity model spawned from a shared prototype roster
//! - Action resolution: accuracy rolls, damage models, recoil, self-slow
//! - Scheduling: speed-ordered batch rounds and strictly alternating duels
//! - Battle loops producing an outcome plus an ordered event log
//!
//! The engine never prompts or prints; a collaborator (CLI, script, test)
//! supplies validated action selections and narrates the returned events.

pub mod ability;
pub mod action;
pub mod battle;
pub mod combat;
pub mod config;
pub mod fighter;
pub mod prelude;
pub mod roster;
pub mod schedule;
pub mod types;

// Re-export core types for convenience
pub use ability::{Ability, AbilityEffect, DamageModel};
pub use action::{PlannedAction, SelectionError};
pub use battle::{BattleStatus, Duel, DuelOutcome, Outcome, TeamBattle};
pub use combat::{resolve_action, resolve_action_with_rng, EffectEvent};
pub use config::{default_roster, load_roster, parse_roster, ConfigError};
pub use fighter::Fighter;
pub use roster::{FighterPrototype, Roster};
pub use types::{AbilityKind, FighterId, TeamSide};
