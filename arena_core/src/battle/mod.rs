//! Battle loops - driving rounds/turns to a final outcome

mod duel;
mod team;

pub use duel::{Duel, DuelOutcome};
pub use team::{Outcome, TeamBattle};

use serde::{Deserialize, Serialize};

/// Battle progress as seen by the collaborator.
///
/// `T` is the mode's outcome type: [`Outcome`] for team battles,
/// [`DuelOutcome`] for duels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus<T> {
    InProgress,
    Finished(T),
}

impl<T> BattleStatus<T> {
    pub fn is_finished(&self) -> bool {
        matches!(self, BattleStatus::Finished(_))
    }
}
