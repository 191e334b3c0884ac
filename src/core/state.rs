//! Match state: everything a single match owns.
//!
//! ## MatchState
//!
//! - Players, deck (drawn from the front), per-player hands
//! - The board arena of cards in play
//! - Turn gate: active player, round counter, who acted this round
//! - Castle health per player and game-over info
//! - Status effects (extra actions, skipped enemy attacks)
//! - The shuffle RNG and the next free slot id
//!
//! Collections use `im` persistent structures, so cloning the whole state
//! for an action checkpoint is cheap.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::entity::SlotId;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::CardInstance;
use crate::zones::BoardArena;

/// Match-level modifier with an explicit lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusEffect {
    /// The next advance phase does not attack this player's cards.
    SkipEnemyAttacks { protected: PlayerId },
    /// This player's next action does not pass the turn.
    ExtraAction { player: PlayerId },
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    pub players: Vec<Player>,

    /// Draw pile. Index 0 is the top.
    pub deck: Vector<CardInstance>,

    pub hands: PlayerMap<Vector<CardInstance>>,

    pub board: BoardArena,

    pub active_player: PlayerId,

    /// Starts at 1, increments when the turn wraps to player 0.
    pub round: u32,

    pub played_this_round: OrdSet<PlayerId>,

    pub castle_max_hp: i64,

    pub castle_hp: PlayerMap<i64>,

    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub loser: Option<PlayerId>,

    pub status_effects: Vec<StatusEffect>,

    pub rng: GameRng,

    pub next_slot_id: SlotId,
}

impl MatchState {
    /// Empty state with no players seated.
    #[must_use]
    pub fn new(castle_max_hp: i64, seed: u64) -> Self {
        Self {
            players: Vec::new(),
            deck: Vector::new(),
            hands: PlayerMap::with_default(0),
            board: BoardArena::new(),
            active_player: PlayerId::new(0),
            round: 1,
            played_this_round: OrdSet::new(),
            castle_max_hp,
            castle_hp: PlayerMap::with_default(0),
            game_over: false,
            winner: None,
            loser: None,
            status_effects: Vec::new(),
            rng: GameRng::new(seed),
            next_slot_id: SlotId(1),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        player.is_seated(self.player_count())
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Vector<CardInstance>> {
        self.hands.get(player)
    }

    #[must_use]
    pub fn has_acted(&self, player: PlayerId) -> bool {
        self.played_this_round.contains(&player)
    }

    #[must_use]
    pub fn castle_hp(&self, player: PlayerId) -> Option<i64> {
        self.castle_hp.get(player).copied()
    }

    /// Hand out a fresh slot id.
    pub fn allocate_slot_id(&mut self) -> SlotId {
        let id = self.next_slot_id;
        self.next_slot_id = id.next();
        id
    }

    /// Move the top deck card into a player's hand.
    ///
    /// Returns `false` when the deck is empty or the seat is unknown.
    pub fn draw(&mut self, player: PlayerId) -> bool {
        let Some(hand) = self.hands.get_mut(player) else {
            return false;
        };
        match self.deck.pop_front() {
            Some(card) => {
                hand.push_back(card);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn has_status(&self, status: StatusEffect) -> bool {
        self.status_effects.contains(&status)
    }

    /// Add a status unless an identical one is active.
    pub fn add_status(&mut self, status: StatusEffect) {
        if !self.has_status(status) {
            self.status_effects.push(status);
        }
    }

    /// Remove a status, reporting whether it was active.
    pub fn take_status(&mut self, status: StatusEffect) -> bool {
        let before = self.status_effects.len();
        self.status_effects.retain(|s| *s != status);
        self.status_effects.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    fn seated(count: usize) -> MatchState {
        let mut state = MatchState::new(20, 1);
        state.players = PlayerId::all(count).map(|p| Player::new(p, format!("P{}", p.0))).collect();
        state.hands = PlayerMap::with_default(count);
        state.castle_hp = PlayerMap::with_value(count, 20);
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = MatchState::new(20, 42);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.round, 1);
        assert!(!state.game_over);
        assert_eq!(state.next_slot_id, SlotId(1));
    }

    #[test]
    fn test_allocate_slot_ids_are_unique() {
        let mut state = MatchState::new(20, 42);
        let a = state.allocate_slot_id();
        let b = state.allocate_slot_id();
        assert_ne!(a, b);
        assert_eq!(state.next_slot_id, SlotId(3));
    }

    #[test]
    fn test_draw_from_front() {
        let mut state = seated(2);
        let catalog = Catalog::standard();
        state.deck = catalog.build_deck().into_iter().take(2).collect();
        let top = state.deck[0].title.clone();

        assert!(state.draw(PlayerId::new(1)));
        assert_eq!(state.hand(PlayerId::new(1)).unwrap()[0].title, top);
        assert_eq!(state.deck.len(), 1);

        assert!(!state.draw(PlayerId::new(5)));
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut state = seated(2);
        assert!(!state.draw(PlayerId::new(0)));
    }

    #[test]
    fn test_status_effects() {
        let mut state = seated(2);
        let skip = StatusEffect::SkipEnemyAttacks { protected: PlayerId::new(0) };

        state.add_status(skip);
        state.add_status(skip);
        assert_eq!(state.status_effects.len(), 1);

        assert!(state.take_status(skip));
        assert!(!state.take_status(skip));
    }

    #[test]
    fn test_status_effect_json() {
        let json = serde_json::to_string(&StatusEffect::ExtraAction { player: PlayerId::new(1) }).unwrap();
        assert_eq!(json, r#"{"extraAction":{"player":1}}"#);
    }
}
