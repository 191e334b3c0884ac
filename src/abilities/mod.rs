//! Ability system for card hooks.
//!
//! Abilities are data, not code:
//! - `AbilityCommand`: up to three hooks (`onPlayed`, `onMoved`, `onAttack`)
//! - `PlayedEffect` / `MovedEffect` / `AttackEffect`: closed effect enums
//! - `AbilityRegistry`: card key to command lookup
//! - `AbilityContext`: the mutation surface hooks resolve against
//!
//! The engine looks a command up when an action fires a hook and hands the
//! effect to the resolver together with a context over the live state.

pub mod builders;
mod command;
mod context;
mod effect;
mod registry;
pub mod resolver;
pub mod tables;
pub mod targeting;

pub use command::AbilityCommand;
pub use context::AbilityContext;
pub use effect::{
    Allegiance, AttackEffect, AttackResolution, CardFilter, MovedEffect, PlayedEffect, Power,
    ZoneRef,
};
pub use registry::AbilityRegistry;
