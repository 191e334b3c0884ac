//! Core engine types: slot ids, players, match state, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use entity::SlotId;
pub use error::{EngineError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{MatchState, StatusEffect};
