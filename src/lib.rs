//! # castle-ccg
//!
//! A deterministic, turn-based card battle engine played on a linear track
//! of zones with a castle at each end.
//!
//! ## Design Principles
//!
//! 1. **One action per turn**: every player acts once per round through a
//!    single gate (`activePlayerId` + `playedThisRound`).
//!
//! 2. **All-or-nothing actions**: an action runs against a checkpoint of
//!    the state and a failure restores it.
//!
//! 3. **Abilities as data**: card abilities are closed effect enums looked
//!    up by a stable card key, resolved against a scoped mutation handle.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs` for
//!   action checkpoints.
//!
//! - **Player count is a parameter**: castle mirroring and turn order are
//!   pure functions of the seat and the board length.
//!
//! ## Modules
//!
//! - `core`: Slot ids, players, match state, RNG, configuration, errors
//! - `zones`: Board layout and the arena of cards in play
//! - `cards`: Card definitions, instances and the standard catalog
//! - `abilities`: Ability commands, effects, registry and resolver
//! - `engine`: The match engine, actions, advance phase, request channel
//! - `view`: Information-hiding state projection
//! - `persist`: Snapshots and snapshot stores

pub mod abilities;
pub mod cards;
pub mod core;
pub mod engine;
pub mod persist;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, GameRng, GameRngState, MatchState, Player, PlayerId, PlayerMap,
    Result, SlotId, StatusEffect,
};

pub use crate::zones::{BoardArena, BoardLayout, BoardSlotCard};

pub use crate::cards::{CardDefinition, CardInstance, CardKey, Catalog, Category, Element, Stat, SubCategory};

pub use crate::abilities::{AbilityCommand, AbilityContext, AbilityRegistry, AttackResolution};

pub use crate::engine::{ActionOutcome, ActionRequest, ActionResponse, GameEngine, PhaseReport, TurnReport};

pub use crate::view::{sort_for_viewer, HandView, StateView};

pub use crate::persist::{
    FileStore, MemoryStore, NullStore, PersistError, Snapshot, SnapshotError, SnapshotFormat, SnapshotStore,
};
