//! The match engine: lifecycle, turn advance and persistence.
//!
//! `GameEngine` owns the only mutable copy of a match. Every mutating call
//! validates, mutates, and ends by saving a snapshot through its
//! `SnapshotStore`. The per-card actions live in `actions.rs`, the advance
//! phase in `phase.rs`.
//!
//! ```
//! use castle_ccg::core::EngineConfig;
//! use castle_ccg::engine::GameEngine;
//! use castle_ccg::PlayerId;
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! engine.start_game(&["Ana", "Rui"]).unwrap();
//!
//! let outcome = engine.play_card(PlayerId(0), 0).unwrap();
//! let report = outcome.end_turn.unwrap();
//! assert_eq!(report.active_player_id, PlayerId(1));
//! assert_eq!(report.round, 1);
//! ```

use tracing::{debug, info, warn};

use super::outcome::TurnReport;
use crate::abilities::AbilityRegistry;
use crate::cards::Catalog;
use crate::core::{
    EngineConfig, EngineError, MatchState, Player, PlayerId, PlayerMap, Result,
};
use crate::persist::{NullStore, Snapshot, SnapshotStore};
use crate::view::StateView;
use crate::zones::BoardLayout;

/// Authoritative engine for one match.
pub struct GameEngine {
    pub(super) config: EngineConfig,
    catalog: Catalog,
    pub(super) abilities: AbilityRegistry,
    pub(super) state: MatchState,
    store: Box<dyn SnapshotStore>,
}

impl GameEngine {
    /// Engine with the standard roster and no persistence.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let state = MatchState::new(config.castle_max_hp, config.seed);
        Ok(Self {
            config,
            catalog: Catalog::standard(),
            abilities: AbilityRegistry::standard(),
            state,
            store: Box::new(NullStore),
        })
    }

    /// Attach a store. A saved match is restored from it; an empty store
    /// receives the current state.
    #[must_use]
    pub fn with_store(mut self, store: impl SnapshotStore + 'static) -> Self {
        self.store = Box::new(store);
        match self.store.load() {
            Ok(Some(snapshot)) => {
                if let Err(e) = self.restore(snapshot) {
                    warn!(error = %e, "stored snapshot rejected");
                }
            }
            Ok(None) => {
                self.save_state();
            }
            Err(e) => warn!(error = %e, "failed to read snapshot store"),
        }
        self
    }

    /// Replace the deck list used by `start_game`.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: AbilityRegistry) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn abilities(&self) -> &AbilityRegistry {
        &self.abilities
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.config.board
    }

    // === Lifecycle ===

    /// Reset every field, build and shuffle a fresh deck, deal each player
    /// a hand, and open round 1 with player 0 to act.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> Result<TurnReport> {
        if names.len() < 2 {
            return Err(EngineError::NotEnoughPlayers(names.len()));
        }
        if names.len() > usize::from(u8::MAX) {
            return Err(EngineError::InvalidConfig(format!("too many players: {}", names.len())));
        }

        let count = names.len();
        let mut state = MatchState::new(self.config.castle_max_hp, self.config.seed);
        state.rng = self.state.rng.clone();
        state.players = PlayerId::all(count)
            .zip(names)
            .map(|(id, name)| Player::new(id, name.as_ref()))
            .collect();
        state.hands = PlayerMap::with_default(count);
        state.castle_hp = PlayerMap::with_value(count, self.config.castle_max_hp);

        let mut deck = self.catalog.build_deck();
        state.rng.shuffle(&mut deck);
        state.deck = deck.into_iter().collect();

        for player in PlayerId::all(count) {
            for _ in 0..self.config.hand_size {
                state.draw(player);
            }
        }

        self.state = state;
        info!(players = count, deck = self.state.deck.len(), "match started");
        self.save_state();
        Ok(TurnReport::of(&self.state))
    }

    /// Reshuffle the remaining draw pile.
    pub fn shuffle_deck(&mut self) {
        self.state.deck = self.state.rng.shuffle_pile(&self.state.deck);
        self.save_state();
    }

    /// Resolve castle damage from the active player, then pass the turn.
    ///
    /// After game over this is a no-op that re-reports the final state.
    pub fn end_turn(&mut self) -> Result<TurnReport> {
        if self.state.game_over {
            self.save_state();
            return Ok(TurnReport::of(&self.state));
        }
        let count = self.state.player_count();
        if count == 0 {
            return Err(EngineError::NoPlayers);
        }

        let acting = self.state.active_player;
        if let Some(enemy) = BoardLayout::enemy_of(acting, count) {
            let castle = self.layout().enemy_castle(acting);
            let siege: i64 = self
                .state
                .board
                .owned_by(acting)
                .filter(|s| s.position == castle)
                .map(|s| s.card.attack.max(0))
                .fold(0, i64::saturating_add);

            if siege > 0 {
                if let Some(hp) = self.state.castle_hp.get_mut(enemy) {
                    *hp = hp.saturating_sub(siege);
                    debug!(attacker = %acting, defender = %enemy, damage = siege, remaining = *hp, "castle hit");
                    if *hp <= 0 {
                        self.state.game_over = true;
                        self.state.winner = Some(acting);
                        self.state.loser = Some(enemy);
                        info!(winner = %acting, loser = %enemy, round = self.state.round, "game over");
                        self.save_state();
                        return Ok(TurnReport::of(&self.state));
                    }
                }
            }
        }

        let next = acting.next(count);
        self.state.active_player = next;
        if next.index() == 0 {
            self.state.round = self.state.round.saturating_add(1);
            self.state.played_this_round.clear();
        }
        debug!(active = %next, round = self.state.round, "turn advanced");
        self.save_state();
        Ok(TurnReport::of(&self.state))
    }

    // === Projection and persistence ===

    /// View for the active player: other hands reduced to a count.
    #[must_use]
    pub fn get_state(&self) -> StateView {
        StateView::of(&self.state)
    }

    #[must_use]
    pub fn export_state(&self) -> Snapshot {
        self.state.to_snapshot()
    }

    /// Replace the match with a snapshot. Nothing changes unless the whole
    /// snapshot validates.
    pub fn import_state(&mut self, snapshot: Snapshot) -> Result<()> {
        self.restore(snapshot)?;
        info!(
            players = self.state.player_count(),
            cards_in_play = self.state.board.len(),
            round = self.state.round,
            "state imported"
        );
        self.save_state();
        Ok(())
    }

    fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let state = snapshot.into_state(&self.config.board, self.config.seed)?;
        self.state = state;
        Ok(())
    }

    /// Write the current state to the store. Failures are logged.
    pub fn save_state(&mut self) -> bool {
        match self.store.save(&self.state.to_snapshot()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to save state");
                false
            }
        }
    }

    /// Replace the current state with the stored one, if any.
    pub fn load_state(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(snapshot)) => match self.restore(snapshot) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "stored snapshot rejected");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to load state");
                false
            }
        }
    }
}
