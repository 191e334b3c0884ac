//! Information-hiding projection of a match.
//!
//! `StateView` has the snapshot's shape with two differences: the deck is
//! reduced to `deckCount`, and every hand except the active player's is
//! reduced to `{count}`.
//!
//! ```
//! use castle_ccg::engine::GameEngine;
//! use castle_ccg::core::EngineConfig;
//! use castle_ccg::view::HandView;
//! use castle_ccg::PlayerId;
//!
//! let mut engine = GameEngine::new(EngineConfig::default()).unwrap();
//! engine.start_game(&["Ana", "Rui"]).unwrap();
//!
//! let view = engine.get_state();
//! assert_eq!(view.hands[&PlayerId(0)].len(), 5);
//! assert!(matches!(view.hands[&PlayerId(1)], HandView::Count { count: 5 }));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{MatchState, Player, PlayerId, StatusEffect};
use crate::zones::BoardSlotCard;

/// A hand as one viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HandView {
    Cards(Vec<CardInstance>),
    Count { count: usize },
}

impl HandView {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            HandView::Cards(cards) => cards.len(),
            HandView::Count { count } => *count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, HandView::Count { .. })
    }
}

/// Public view of a match, from the active player's seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub active_player_id: PlayerId,
    pub round: u32,
    pub deck_count: usize,
    pub players: Vec<Player>,
    pub cards_in_play: Vec<BoardSlotCard>,
    pub hands: BTreeMap<PlayerId, HandView>,
    pub played_this_round: BTreeMap<PlayerId, bool>,
    pub castle_max_hp: i64,
    pub castle_hp_by_player: BTreeMap<PlayerId, i64>,
    pub game_over: bool,
    pub loser_player_id: Option<PlayerId>,
    pub winner_player_id: Option<PlayerId>,
    pub status_effects: Vec<StatusEffect>,
}

impl StateView {
    /// Project a state for its active player.
    #[must_use]
    pub fn of(state: &MatchState) -> Self {
        let viewer = state.active_player;
        let hands = state
            .hands
            .iter()
            .map(|(player, hand)| {
                let view = if player == viewer {
                    HandView::Cards(hand.iter().cloned().collect())
                } else {
                    HandView::Count { count: hand.len() }
                };
                (player, view)
            })
            .collect();

        Self {
            active_player_id: viewer,
            round: state.round,
            deck_count: state.deck.len(),
            players: state.players.clone(),
            cards_in_play: state.board.iter().cloned().collect(),
            hands,
            played_this_round: state
                .players
                .iter()
                .map(|p| (p.id, state.has_acted(p.id)))
                .collect(),
            castle_max_hp: state.castle_max_hp,
            castle_hp_by_player: state.castle_hp.iter().map(|(p, hp)| (p, *hp)).collect(),
            game_over: state.game_over,
            loser_player_id: state.loser,
            winner_player_id: state.winner,
            status_effects: state.status_effects.clone(),
        }
    }
}

/// Order cards for display from `viewer`'s seat: own cards first by
/// ascending zone, then everyone else's by descending zone. Ties keep id
/// order.
pub fn sort_for_viewer(cards: &mut [BoardSlotCard], viewer: PlayerId) {
    cards.sort_by(|a, b| {
        let a_own = a.owner == viewer;
        let b_own = b.owner == viewer;
        match (a_own, b_own) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => a.position.cmp(&b.position),
            (false, false) => b.position.cmp(&a.position),
        }
        .then(a.id.cmp(&b.id))
    });
}
