//! The match engine.
//!
//! - `GameEngine`: lifecycle, turn advance, persistence (`game.rs`)
//! - Turn-consuming actions behind one gate (`actions.rs`)
//! - The explicit advance phase (`phase.rs`)
//! - Damage math (`combat.rs`)
//! - The serialized request channel (`request.rs`)

mod actions;
pub mod combat;
mod game;
mod outcome;
mod phase;
mod request;

pub use game::GameEngine;
pub use outcome::{ActionOutcome, PhaseReport, TurnReport};
pub use request::{ActionRequest, ActionResponse};
