//! Snapshot: the full serializable form of a match.
//!
//! The JSON shape is the wire format shared with peers and the persistence
//! backend:
//!
//! ```json
//! {"deck": [], "players": [], "cardsInPlay": [], "hands": {},
//!  "activePlayerId": 0, "round": 1, "playedThisRound": {},
//!  "castleMaxHp": 20, "castleHpByPlayer": {}, "gameOver": false,
//!  "loserPlayerId": null, "winnerPlayerId": null}
//! ```
//!
//! `statusEffects`, `nextSlotId` and `rng` are optional on input.
//! [`Snapshot::into_state`] validates everything before building a
//! `MatchState`, so a rejected snapshot never leaves a half-applied state.

use std::collections::BTreeMap;

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardInstance, Stat};
use crate::core::{GameRng, GameRngState, MatchState, Player, PlayerId, PlayerMap, SlotId, StatusEffect};
use crate::zones::{BoardArena, BoardLayout, BoardSlotCard};

/// Structural problems found while validating a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("players must be listed in seat order, found {found} at seat {seat}")]
    PlayerOrder { seat: usize, found: PlayerId },

    #[error("at most 255 players, got {0}")]
    TooManyPlayers(usize),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("duplicate card id {0}")]
    DuplicateSlot(SlotId),

    #[error("card {id} at position {position} is off the board")]
    PositionOutOfBoard { id: SlotId, position: usize },

    #[error("{title} has a negative {stat:?}")]
    NegativeStat { title: String, stat: Stat },

    #[error("round must start at 1")]
    InvalidRound,

    #[error("castle max hp must be positive, got {0}")]
    InvalidCastleMax(i64),

    #[error("winner or loser set on a running game")]
    ResultWithoutGameOver,
}

/// Serializable match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub deck: Vec<CardInstance>,
    pub players: Vec<Player>,
    pub cards_in_play: Vec<BoardSlotCard>,
    pub hands: BTreeMap<PlayerId, Vec<CardInstance>>,
    pub active_player_id: PlayerId,
    pub round: u32,
    pub played_this_round: BTreeMap<PlayerId, bool>,
    pub castle_max_hp: i64,
    pub castle_hp_by_player: BTreeMap<PlayerId, i64>,
    pub game_over: bool,
    pub loser_player_id: Option<PlayerId>,
    pub winner_player_id: Option<PlayerId>,

    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,

    #[serde(default)]
    pub next_slot_id: Option<SlotId>,

    #[serde(default)]
    pub rng: Option<GameRngState>,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Check every structural invariant without building anything.
    pub fn validate(&self, layout: &BoardLayout) -> Result<(), SnapshotError> {
        if self.players.len() > usize::from(u8::MAX) {
            return Err(SnapshotError::TooManyPlayers(self.players.len()));
        }
        for (seat, player) in self.players.iter().enumerate() {
            if player.id.index() != seat {
                return Err(SnapshotError::PlayerOrder { seat, found: player.id });
            }
        }

        let count = self.players.len();
        let seated = |player: PlayerId| {
            if player.is_seated(count) {
                Ok(())
            } else {
                Err(SnapshotError::UnknownPlayer(player))
            }
        };

        if count > 0 {
            seated(self.active_player_id)?;
        }
        for &player in self
            .hands
            .keys()
            .chain(self.played_this_round.keys())
            .chain(self.castle_hp_by_player.keys())
        {
            seated(player)?;
        }
        for player in self.winner_player_id.into_iter().chain(self.loser_player_id) {
            seated(player)?;
        }
        if !self.game_over && (self.winner_player_id.is_some() || self.loser_player_id.is_some()) {
            return Err(SnapshotError::ResultWithoutGameOver);
        }

        if self.round == 0 {
            return Err(SnapshotError::InvalidRound);
        }
        if self.castle_max_hp <= 0 {
            return Err(SnapshotError::InvalidCastleMax(self.castle_max_hp));
        }

        let mut ids = OrdSet::new();
        for slot in &self.cards_in_play {
            if ids.insert(slot.id).is_some() {
                return Err(SnapshotError::DuplicateSlot(slot.id));
            }
            seated(slot.owner)?;
            if !layout.contains(slot.position) {
                return Err(SnapshotError::PositionOutOfBoard {
                    id: slot.id,
                    position: slot.position,
                });
            }
        }

        let cards = self
            .deck
            .iter()
            .chain(self.hands.values().flatten())
            .chain(self.cards_in_play.iter().map(|s| &s.card));
        for card in cards {
            if let Some(stat) = card.negative_stat() {
                return Err(SnapshotError::NegativeStat {
                    title: card.title.clone(),
                    stat,
                });
            }
        }

        Ok(())
    }

    /// Validate, then build the match state.
    ///
    /// Missing hands start empty and missing castles start at full health.
    /// Without a saved RNG state the stream restarts from `seed`.
    pub fn into_state(self, layout: &BoardLayout, seed: u64) -> Result<MatchState, SnapshotError> {
        self.validate(layout)?;

        let count = self.players.len();
        let hands = self.hands;
        let castle_max_hp = self.castle_max_hp;
        let castle_hp_by_player = self.castle_hp_by_player;

        let board: BoardArena = self.cards_in_play.into_iter().collect();
        let after_board = board.max_id().map_or(SlotId(1), SlotId::next);
        let next_slot_id = self.next_slot_id.map_or(after_board, |id| id.max(after_board));

        Ok(MatchState {
            players: self.players,
            deck: self.deck.into_iter().collect(),
            hands: PlayerMap::new(count, |p| {
                hands.get(&p).cloned().map(Vector::from).unwrap_or_default()
            }),
            board,
            active_player: self.active_player_id,
            round: self.round,
            played_this_round: self
                .played_this_round
                .into_iter()
                .filter_map(|(player, acted)| acted.then_some(player))
                .collect(),
            castle_max_hp,
            castle_hp: PlayerMap::new(count, |p| {
                castle_hp_by_player.get(&p).copied().unwrap_or(castle_max_hp)
            }),
            game_over: self.game_over,
            winner: self.winner_player_id,
            loser: self.loser_player_id,
            status_effects: self.status_effects,
            rng: self
                .rng
                .map_or_else(|| GameRng::new(seed), |state| GameRng::from_state(&state)),
            next_slot_id,
        })
    }
}

impl MatchState {
    /// Full snapshot of this state.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.deck.iter().cloned().collect(),
            players: self.players.clone(),
            cards_in_play: self.board.iter().cloned().collect(),
            hands: self
                .hands
                .iter()
                .map(|(player, hand)| (player, hand.iter().cloned().collect()))
                .collect(),
            active_player_id: self.active_player,
            round: self.round,
            played_this_round: self
                .players
                .iter()
                .map(|p| (p.id, self.has_acted(p.id)))
                .collect(),
            castle_max_hp: self.castle_max_hp,
            castle_hp_by_player: self.castle_hp.iter().map(|(p, hp)| (p, *hp)).collect(),
            game_over: self.game_over,
            loser_player_id: self.loser,
            winner_player_id: self.winner,
            status_effects: self.status_effects.clone(),
            next_slot_id: Some(self.next_slot_id),
            rng: Some(self.rng.state()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    fn two_player_state() -> MatchState {
        let catalog = Catalog::standard();
        let mut state = MatchState::new(20, 9);
        state.players = vec![Player::new(PlayerId(0), "Ana"), Player::new(PlayerId(1), "Rui")];
        state.hands = PlayerMap::with_default(2);
        state.castle_hp = PlayerMap::with_value(2, 20);
        state.deck = catalog.build_deck().into_iter().take(4).collect();
        state.draw(PlayerId(0));
        state.draw(PlayerId(1));
        let id = state.allocate_slot_id();
        let card = catalog.instance("Line Soldier").unwrap();
        state.board.insert(BoardSlotCard::new(id, PlayerId(1), 6, card));
        state.played_this_round.insert(PlayerId(0));
        state
    }

    #[test]
    fn test_state_round_trip() {
        let state = two_player_state();
        let snapshot = state.to_snapshot();
        let json = snapshot.to_json().unwrap();
        let back = Snapshot::from_json(&json).unwrap();

        assert_eq!(back, snapshot);
        assert_eq!(back.into_state(&BoardLayout::default(), 0).unwrap(), state);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(two_player_state().to_snapshot()).unwrap();

        assert_eq!(value["activePlayerId"], 0);
        assert_eq!(value["castleHpByPlayer"]["1"], 20);
        assert_eq!(value["playedThisRound"]["0"], true);
        assert_eq!(value["playedThisRound"]["1"], false);
        assert_eq!(value["cardsInPlay"][0]["ownerId"], 1);
        assert_eq!(value["cardsInPlay"][0]["card"]["attackPoints"], 2);
        assert!(value["winnerPlayerId"].is_null());
    }

    #[test]
    fn test_optional_fields_default() {
        let mut value = serde_json::to_value(two_player_state().to_snapshot()).unwrap();
        let map = value.as_object_mut().unwrap();
        map.remove("statusEffects");
        map.remove("nextSlotId");
        map.remove("rng");
        map.remove("castleHpByPlayer");
        map.insert("castleHpByPlayer".into(), serde_json::json!({}));

        let snapshot: Snapshot = serde_json::from_value(value).unwrap();
        let state = snapshot.into_state(&BoardLayout::default(), 5).unwrap();

        assert_eq!(state.next_slot_id, SlotId(2));
        assert_eq!(state.castle_hp(PlayerId(1)), Some(20));
        assert_eq!(state.rng.seed(), 5);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut snapshot = two_player_state().to_snapshot();
        let copy = snapshot.cards_in_play[0].clone();
        snapshot.cards_in_play.push(copy);

        assert_eq!(
            snapshot.validate(&BoardLayout::default()),
            Err(SnapshotError::DuplicateSlot(SlotId(1)))
        );
    }

    #[test]
    fn test_rejects_unknown_owner_and_position() {
        let layout = BoardLayout::default();

        let mut snapshot = two_player_state().to_snapshot();
        snapshot.cards_in_play[0].owner = PlayerId(4);
        assert_eq!(snapshot.validate(&layout), Err(SnapshotError::UnknownPlayer(PlayerId(4))));

        let mut snapshot = two_player_state().to_snapshot();
        snapshot.cards_in_play[0].position = 8;
        assert!(matches!(
            snapshot.validate(&layout),
            Err(SnapshotError::PositionOutOfBoard { position: 8, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_stats() {
        let mut snapshot = two_player_state().to_snapshot();
        snapshot.deck[0].defense = -1;
        assert!(matches!(
            snapshot.validate(&BoardLayout::default()),
            Err(SnapshotError::NegativeStat { stat: Stat::Defense, .. })
        ));
    }

    #[test]
    fn test_empty_state_round_trips() {
        let state = MatchState::new(20, 3);
        let back = state.to_snapshot().into_state(&BoardLayout::default(), 3).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_rejects_full_seat_range() {
        let mut snapshot = MatchState::new(20, 3).to_snapshot();
        snapshot.players = (0..=u8::MAX)
            .map(|seat| Player::new(PlayerId(seat), format!("P{}", seat)))
            .collect();
        assert_eq!(
            snapshot.validate(&BoardLayout::default()),
            Err(SnapshotError::TooManyPlayers(256))
        );
    }
}
