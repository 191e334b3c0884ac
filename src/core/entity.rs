//! Board slot identification.
//!
//! Every card placed on the board gets a `SlotId` that stays stable for as
//! long as the card remains in play, including across conversion and
//! movement. IDs are handed out by a monotonically increasing counter kept on
//! the match state, so an ID is never reused within a match.
//!
//! ## Usage
//!
//! ```
//! use castle_ccg::core::SlotId;
//!
//! let id: SlotId = "12".parse().unwrap();
//! assert_eq!(id, SlotId(12));
//! assert_eq!(id.to_string(), "12");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stable identifier of a card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(SlotId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_parse() {
        assert_eq!("7".parse::<SlotId>(), Ok(SlotId(7)));
        assert_eq!(" 8 ".parse::<SlotId>(), Ok(SlotId(8)));
        assert!("abc".parse::<SlotId>().is_err());
        assert!("-1".parse::<SlotId>().is_err());
    }

    #[test]
    fn test_slot_id_next() {
        assert_eq!(SlotId(1).next(), SlotId(2));
        assert_eq!(SlotId(u32::MAX).next(), SlotId(0));
    }

    #[test]
    fn test_slot_id_serializes_transparently() {
        assert_eq!(serde_json::to_string(&SlotId(3)).unwrap(), "3");
        let id: SlotId = serde_json::from_str("41").unwrap();
        assert_eq!(id.raw(), 41);
    }
}
