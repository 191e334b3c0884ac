//! Reports returned by engine calls.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, PlayerId, SlotId};

/// Turn-gate status after `end_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReport {
    pub active_player_id: PlayerId,
    pub round: u32,
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loser_id: Option<PlayerId>,
}

impl TurnReport {
    #[must_use]
    pub fn of(state: &MatchState) -> Self {
        Self {
            active_player_id: state.active_player,
            round: state.round,
            game_over: state.game_over,
            winner_id: state.winner,
            loser_id: state.loser,
        }
    }
}

/// Result of a turn-consuming action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    /// Card the action created or acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<SlotId>,

    /// Turn report, absent when an extra action kept the turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_turn: Option<TurnReport>,
}

/// What the advance phase did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseReport {
    /// Cards that changed zone.
    pub moved: Vec<SlotId>,
    /// Hits landed on the active player's cards.
    pub strikes: usize,
    /// Cards that died and left play.
    pub removed: Vec<SlotId>,
    /// The attack step was cancelled by a status effect.
    pub attacks_skipped: bool,
}
