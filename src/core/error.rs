//! Error types for the engine.
//!
//! Every rejected action comes back as an `EngineError` value; nothing in
//! the action path panics. The `Display` text is the stable wire reason
//! carried by `ActionResponse`.

use thiserror::Error;

use super::{PlayerId, SlotId};
use crate::cards::Element;
use crate::persist::SnapshotError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("not your turn")]
    NotYourTurn,

    #[error("already played this round")]
    AlreadyActed,

    #[error("game over")]
    GameOver,

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("card not found: {0}")]
    CardNotFound(SlotId),

    #[error("not your card: {0}")]
    NotYourCard(SlotId),

    #[error("target out of range (distance {distance}, range {range})")]
    OutOfRange { distance: usize, range: i64 },

    #[error("invalid water path at zone {zone}")]
    InvalidWaterPath { zone: usize },

    #[error("exceeds velocity ({steps} > {velocity})")]
    ExceedsVelocity { steps: i64, velocity: i64 },

    #[error("no target")]
    NoTarget,

    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("ability not implemented: {0}")]
    AbilityNotImplemented(String),

    #[error("no zone to place a {0:?} card")]
    NoSpawnZone(Element),

    #[error("no players")]
    NoPlayers,

    #[error("need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

impl EngineError {
    /// Human-readable reason, as sent in `{ok: false, reason}`.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotYourTurn => "NotYourTurn",
            Self::AlreadyActed => "AlreadyActed",
            Self::GameOver => "GameOver",
            Self::InvalidIndex(_) => "InvalidIndex",
            Self::CardNotFound(_) => "CardNotFound",
            Self::NotYourCard(_) => "NotYourCard",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::InvalidWaterPath { .. } => "InvalidWaterPath",
            Self::ExceedsVelocity { .. } => "ExceedsVelocity",
            Self::NoTarget => "NoTarget",
            Self::InvalidTarget(_) => "InvalidTarget",
            Self::AbilityNotImplemented(_) => "AbilityNotImplemented",
            Self::NoSpawnZone(_) => "NoSpawnZone",
            Self::NoPlayers => "NoPlayers",
            Self::NotEnoughPlayers(_) => "NotEnoughPlayers",
            Self::UnknownPlayer(_) => "UnknownPlayer",
            Self::InvalidConfig(_) => "InvalidConfig",
            Self::InvalidSnapshot(_) => "InvalidSnapshot",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(EngineError::NotYourTurn.reason(), "not your turn");
        assert_eq!(EngineError::AlreadyActed.reason(), "already played this round");
        assert_eq!(
            EngineError::ExceedsVelocity { steps: 4, velocity: 3 }.reason(),
            "exceeds velocity (4 > 3)"
        );
        assert_eq!(EngineError::CardNotFound(SlotId(9)).reason(), "card not found: 9");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(EngineError::NoTarget.kind(), "NoTarget");
        assert_eq!(EngineError::InvalidWaterPath { zone: 1 }.kind(), "InvalidWaterPath");
        assert_eq!(
            EngineError::from(SnapshotError::DuplicateSlot(SlotId(1))).kind(),
            "InvalidSnapshot"
        );
    }
}
