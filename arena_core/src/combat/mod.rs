//! Combat - resolving one planned action into effect events

mod event;
mod resolution;

pub use event::EffectEvent;
pub use resolution::{resolve_action, resolve_action_with_rng, roll_damage};
