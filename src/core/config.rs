//! Engine configuration.
//!
//! `EngineConfig` collects the tunables of a match: castle health, hand
//! size, the defend bonus, the shuffle seed and the board layout. Defaults
//! reproduce the standard 8-zone game.
//!
//! ```
//! use castle_ccg::core::EngineConfig;
//!
//! let config = EngineConfig::default().with_castle_hp(30).with_seed(7);
//! assert_eq!(config.castle_max_hp, 30);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::zones::BoardLayout;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Starting and maximum castle health per player.
    pub castle_max_hp: i64,

    /// Cards dealt to each player at match start.
    pub hand_size: usize,

    /// Permanent defense gained by `defend_card`.
    pub defend_bonus: i64,

    /// Seed for deck shuffling. Same seed, same deal.
    pub seed: u64,

    /// Zone track.
    pub board: BoardLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            castle_max_hp: 20,
            hand_size: 5,
            defend_bonus: 1,
            seed: 42,
            board: BoardLayout::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_castle_hp(mut self, hp: i64) -> Self {
        self.castle_max_hp = hp;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_defend_bonus(mut self, bonus: i64) -> Self {
        self.defend_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardLayout) -> Self {
        self.board = board;
        self
    }

    /// Reject configurations no match can be played on.
    pub fn validate(&self) -> Result<()> {
        if self.castle_max_hp <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "castle_max_hp must be positive, got {}",
                self.castle_max_hp
            )));
        }
        if self.defend_bonus < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "defend_bonus must not be negative, got {}",
                self.defend_bonus
            )));
        }
        self.board.validate().map_err(EngineError::InvalidConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Element;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.castle_max_hp, 20);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.defend_bonus, 1);
        assert_eq!(config.board.zone_count(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json_str(r#"{"castle_max_hp": 12, "seed": 9}"#).unwrap();
        assert_eq!(config.castle_max_hp, 12);
        assert_eq!(config.seed, 9);
        assert_eq!(config.hand_size, 5);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = EngineConfig::from_json_str(r#"{"castle_max_hp": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let err = EngineConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_board_too_small() {
        let config = EngineConfig::default().with_board(BoardLayout::new(vec![Element::Earth]));
        assert!(config.validate().is_err());
    }
}
