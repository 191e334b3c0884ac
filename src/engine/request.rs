//! Serialized action channel.
//!
//! A relay forwards `ActionRequest`s as JSON and broadcasts the
//! `ActionResponse`. Every request maps to one engine call; failures come
//! back as `{ok: false, reason, code}` instead of an error.
//!
//! ```
//! use castle_ccg::core::EngineConfig;
//! use castle_ccg::engine::{ActionRequest, GameEngine};
//!
//! let mut engine = GameEngine::new(EngineConfig::default()).unwrap();
//! let start: ActionRequest =
//!     serde_json::from_str(r#"{"action": "startGame", "names": ["Ana", "Rui"]}"#).unwrap();
//! assert!(engine.dispatch(start).ok);
//!
//! let early: ActionRequest =
//!     serde_json::from_str(r#"{"action": "playCard", "playerId": 1, "handIndex": 0}"#).unwrap();
//! let response = engine.dispatch(early);
//! assert!(!response.ok);
//! assert_eq!(response.reason.as_deref(), Some("not your turn"));
//! ```

use serde::{Deserialize, Serialize};

use super::game::GameEngine;
use super::outcome::{ActionOutcome, PhaseReport, TurnReport};
use crate::core::{EngineError, PlayerId, SlotId};
use crate::persist::Snapshot;
use crate::view::StateView;

/// One engine call in wire form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionRequest {
    StartGame {
        names: Vec<String>,
    },
    ShuffleDeck,
    PlayCard {
        player_id: PlayerId,
        hand_index: usize,
    },
    PlayCardTo {
        player_id: PlayerId,
        hand_index: usize,
        zone: usize,
    },
    MoveCard {
        card_id: SlotId,
        player_id: PlayerId,
        steps: i64,
    },
    AttackCard {
        attacker_id: SlotId,
        target_id: SlotId,
        player_id: PlayerId,
    },
    DefendCard {
        card_id: SlotId,
        player_id: PlayerId,
    },
    ConvertCard {
        attacker_id: SlotId,
        #[serde(default)]
        target_id: Option<String>,
        player_id: PlayerId,
    },
    NextPhase,
    EndTurn,
    GetState,
    ExportState,
    ImportState {
        snapshot: Box<Snapshot>,
    },
}

/// Wire reply: `{ok: true, ...}` or `{ok: false, reason, code}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<SlotId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_turn: Option<TurnReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Box<StateView>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Box<Snapshot>>,
}

impl ActionResponse {
    #[must_use]
    pub fn success() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failure(error: &EngineError) -> Self {
        Self {
            ok: false,
            reason: Some(error.reason()),
            code: Some(error.kind().to_string()),
            ..Self::default()
        }
    }

    fn from_outcome(outcome: ActionOutcome) -> Self {
        Self {
            slot_id: outcome.slot_id,
            end_turn: outcome.end_turn,
            ..Self::success()
        }
    }

    fn from_turn(report: TurnReport) -> Self {
        Self {
            end_turn: Some(report),
            ..Self::success()
        }
    }
}

impl GameEngine {
    /// Run one request and fold the result into a response.
    pub fn dispatch(&mut self, request: ActionRequest) -> ActionResponse {
        let result = match request {
            ActionRequest::StartGame { names } => self.start_game(&names).map(ActionResponse::from_turn),
            ActionRequest::ShuffleDeck => {
                self.shuffle_deck();
                Ok(ActionResponse::success())
            }
            ActionRequest::PlayCard { player_id, hand_index } => self
                .play_card(player_id, hand_index)
                .map(ActionResponse::from_outcome),
            ActionRequest::PlayCardTo {
                player_id,
                hand_index,
                zone,
            } => self
                .play_card_to(player_id, hand_index, zone)
                .map(ActionResponse::from_outcome),
            ActionRequest::MoveCard {
                card_id,
                player_id,
                steps,
            } => self
                .move_card(card_id, player_id, steps)
                .map(ActionResponse::from_outcome),
            ActionRequest::AttackCard {
                attacker_id,
                target_id,
                player_id,
            } => self
                .attack_card(attacker_id, target_id, player_id)
                .map(ActionResponse::from_outcome),
            ActionRequest::DefendCard { card_id, player_id } => self
                .defend_card(card_id, player_id)
                .map(ActionResponse::from_outcome),
            ActionRequest::ConvertCard {
                attacker_id,
                target_id,
                player_id,
            } => self
                .convert_card(attacker_id, target_id.as_deref(), player_id)
                .map(ActionResponse::from_outcome),
            ActionRequest::NextPhase => self.next_phase().map(|phase| ActionResponse {
                phase: Some(phase),
                ..ActionResponse::success()
            }),
            ActionRequest::EndTurn => self.end_turn().map(ActionResponse::from_turn),
            ActionRequest::GetState => Ok(ActionResponse {
                state: Some(Box::new(self.get_state())),
                ..ActionResponse::success()
            }),
            ActionRequest::ExportState => Ok(ActionResponse {
                snapshot: Some(Box::new(self.export_state())),
                ..ActionResponse::success()
            }),
            ActionRequest::ImportState { snapshot } => {
                self.import_state(*snapshot).map(|()| ActionResponse::success())
            }
        };

        result.unwrap_or_else(|e| ActionResponse::failure(&e))
    }
}
