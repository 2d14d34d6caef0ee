//! Core identifier and classification types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a fighter within a battle's roster of participants.
///
/// Ids are only meaningful for the battle that issued them. In a duel the
/// challenger is always id 0 and the opponent id 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(pub usize);

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of a team battle a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    /// The opposing side
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

/// Ability classification
///
/// `GuardBreak` abilities use a reduced fraction of the target's defense in
/// the scaled damage model; `SelfHeal` abilities never roll accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Attack,
    HeavyAttack,
    SelfHeal,
    GuardBreak,
}

impl AbilityKind {
    /// Whether this kind resolves against an enemy target
    pub fn is_offensive(self) -> bool {
        !matches!(self, AbilityKind::SelfHeal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(TeamSide::A.opponent(), TeamSide::B);
        assert_eq!(TeamSide::B.opponent(), TeamSide::A);
    }

    #[test]
    fn test_kind_offensive() {
        assert!(AbilityKind::Attack.is_offensive());
        assert!(AbilityKind::HeavyAttack.is_offensive());
        assert!(AbilityKind::GuardBreak.is_offensive());
        assert!(!AbilityKind::SelfHeal.is_offensive());
    }
}
