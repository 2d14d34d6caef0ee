//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Entities
pub use crate::ability::{Ability, AbilityEffect, DamageModel};
pub use crate::fighter::Fighter;
pub use crate::roster::{FighterPrototype, Roster};
pub use crate::types::{AbilityKind, FighterId, TeamSide};

// Selection boundary
pub use crate::action::{PlannedAction, SelectionError};

// Resolution and battles
pub use crate::battle::{BattleStatus, Duel, DuelOutcome, Outcome, TeamBattle};
pub use crate::combat::EffectEvent;

// Config
pub use crate::config::{default_roster, ConfigError};
