//! Board model: zone geometry and the arena of cards in play.
//!
//! ## Key Types
//!
//! - `BoardLayout`: Zone elements, castle mapping, movement direction
//! - `BoardSlotCard`: A card on the board with owner and position
//! - `BoardArena`: Cards in play addressed by stable `SlotId`

pub mod arena;
pub mod layout;
pub mod slot;

pub use arena::BoardArena;
pub use layout::{BoardLayout, Side, DEFAULT_ZONES};
pub use slot::BoardSlotCard;
