//! Turn-consuming actions.
//!
//! Every action goes through the same gate: the caller must be the active
//! player, must not have acted this round, and the match must be running.
//! The checks run in that order. The body then runs against a checkpoint of the state; an
//! error restores the checkpoint, so a failed action leaves no trace.
//! After the body the board is normalized (stats clamped, dead cards
//! purged) and the turn passes, unless an extra action was pending.

use tracing::{debug, trace};

use super::combat;
use super::game::GameEngine;
use super::outcome::ActionOutcome;
use crate::abilities::{resolver, AbilityContext, AttackResolution};
use crate::cards::{Element, Stat};
use crate::core::{EngineError, PlayerId, Result, SlotId, StatusEffect};
use crate::zones::{BoardLayout, BoardSlotCard};

impl GameEngine {
    fn check_gate(&self, player: PlayerId) -> Result<()> {
        if self.state.player_count() == 0 {
            return Err(EngineError::NoPlayers);
        }
        if !self.state.is_seated(player) {
            return Err(EngineError::UnknownPlayer(player));
        }
        if player != self.state.active_player {
            return Err(EngineError::NotYourTurn);
        }
        if self.state.has_acted(player) {
            return Err(EngineError::AlreadyActed);
        }
        if self.state.game_over {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    /// Gate, run `body` against a checkpoint, clean up, pass the turn.
    fn act(
        &mut self,
        player: PlayerId,
        body: impl FnOnce(&mut Self) -> Result<Option<SlotId>>,
    ) -> Result<ActionOutcome> {
        self.check_gate(player)?;

        let checkpoint = self.state.clone();
        let slot_id = match body(self) {
            Ok(slot_id) => slot_id,
            Err(e) => {
                self.state = checkpoint;
                debug!(player = %player, error = %e, "action rejected");
                return Err(e);
            }
        };

        self.state.board.normalize();
        let removed = self.state.board.purge_dead();
        if !removed.is_empty() {
            debug!(?removed, "cards left play");
        }

        if self.state.take_status(StatusEffect::ExtraAction { player }) {
            debug!(player = %player, "extra action, turn kept");
            self.save_state();
            return Ok(ActionOutcome { slot_id, end_turn: None });
        }

        self.state.played_this_round.insert(player);
        let report = self.end_turn()?;
        Ok(ActionOutcome {
            slot_id,
            end_turn: Some(report),
        })
    }

    fn owned_slot(&self, id: SlotId, player: PlayerId) -> Result<&BoardSlotCard> {
        let slot = self.state.board.get(id).ok_or(EngineError::CardNotFound(id))?;
        if slot.owner != player {
            return Err(EngineError::NotYourCard(id));
        }
        Ok(slot)
    }

    // === Play ===

    /// Play a card from hand into its spawn zone: earth cards into the own
    /// castle, water cards into the harbour.
    pub fn play_card(&mut self, player: PlayerId, hand_index: usize) -> Result<ActionOutcome> {
        self.act(player, |engine| engine.place_from_hand(player, hand_index).map(Some))
    }

    /// `play_card` with an explicit zone, which must be the own castle.
    pub fn play_card_to(
        &mut self,
        player: PlayerId,
        hand_index: usize,
        zone: usize,
    ) -> Result<ActionOutcome> {
        self.act(player, |engine| {
            let castle = engine.layout().own_castle(player);
            if zone != castle {
                return Err(EngineError::InvalidIndex(format!(
                    "cards enter play at the castle (zone {}), not zone {}",
                    castle, zone
                )));
            }
            engine.place_from_hand(player, hand_index).map(Some)
        })
    }

    fn place_from_hand(&mut self, player: PlayerId, hand_index: usize) -> Result<SlotId> {
        let hand = self
            .state
            .hands
            .get_mut(player)
            .ok_or(EngineError::UnknownPlayer(player))?;
        if hand_index >= hand.len() {
            return Err(EngineError::InvalidIndex(format!(
                "hand index {} (hand has {} cards)",
                hand_index,
                hand.len()
            )));
        }
        let card = hand.remove(hand_index);

        let zone = self
            .config
            .board
            .spawn_zone(player, card.element)
            .ok_or(EngineError::NoSpawnZone(card.element))?;
        let id = self.state.allocate_slot_id();
        debug!(player = %player, card = %card.title, slot = %id, zone, "card played");
        self.state.board.insert(BoardSlotCard::new(id, player, zone, card));
        Ok(id)
    }

    // === Move ===

    /// Walk an own card `steps` zones toward the enemy castle.
    ///
    /// Water cards may only enter water zones. The walk stops at the board
    /// edge. A successful move fires the card's `onMoved` hook.
    pub fn move_card(&mut self, card_id: SlotId, player: PlayerId, steps: i64) -> Result<ActionOutcome> {
        self.act(player, |engine| {
            let slot = engine.owned_slot(card_id, player)?;
            if steps < 0 {
                return Err(EngineError::InvalidIndex(format!("negative steps: {}", steps)));
            }
            let velocity = slot.card.velocity.max(0);
            if steps > velocity {
                return Err(EngineError::ExceedsVelocity { steps, velocity });
            }

            let layout = engine.layout();
            let water = slot.card.element == Element::Water;
            let mut zone = slot.position;
            for _ in 0..steps {
                let Some(next) = layout.step(zone, player) else {
                    break;
                };
                if water && !layout.is_water(next) {
                    return Err(EngineError::InvalidWaterPath { zone: next });
                }
                zone = next;
            }

            let title = slot.card.title.clone();
            let key = slot.card.key();
            if let Some(slot) = engine.state.board.get_mut(card_id) {
                slot.position = zone;
            }
            debug!(player = %player, card = %title, slot = %card_id, zone, "card moved");

            if let Some(effect) = engine.abilities.get(&key).on_moved {
                trace!(card = %key, hook = "onMoved", "dispatch");
                let mut ctx = AbilityContext::new(&mut engine.state, &engine.config.board);
                resolver::run_moved(effect, &mut ctx, card_id, player, steps)?;
            }
            Ok(Some(card_id))
        })
    }

    // === Combat ===

    /// Attack a card within range. The attacker's `onAttack` hook may
    /// override or fully handle the hit; otherwise the damage law applies.
    pub fn attack_card(
        &mut self,
        attacker: SlotId,
        target: SlotId,
        player: PlayerId,
    ) -> Result<ActionOutcome> {
        self.act(player, |engine| {
            let striker = engine.owned_slot(attacker, player)?.clone();
            let victim = engine
                .state
                .board
                .get(target)
                .ok_or(EngineError::CardNotFound(target))?;

            let distance = BoardLayout::distance(striker.position, victim.position);
            let range = striker.card.range;
            if i64::try_from(distance).map_or(true, |d| d > range) {
                return Err(EngineError::OutOfRange { distance, range });
            }

            let key = striker.card.key();
            let resolution = match engine.abilities.get(&key).on_attack {
                Some(effect) => {
                    trace!(card = %key, hook = "onAttack", "dispatch");
                    let mut ctx = AbilityContext::new(&mut engine.state, &engine.config.board);
                    resolver::run_attack(effect, &mut ctx, attacker, target, player)?
                }
                None => AttackResolution::Default,
            };

            let hp_lost = match resolution {
                AttackResolution::Handled => None,
                AttackResolution::Default => Some((striker.card.attack, false)),
                AttackResolution::Override { damage, ignore_defense } => Some((damage, ignore_defense)),
            }
            .and_then(|(damage, ignore_defense)| {
                let card = &mut engine.state.board.get_mut(target)?.card;
                Some(if ignore_defense {
                    combat::apply_effect_damage(damage, true, card)
                } else {
                    combat::apply_attack(damage, card)
                })
            });

            debug!(player = %player, attacker = %attacker, target = %target, ?hp_lost, "attack resolved");
            Ok(Some(attacker))
        })
    }

    /// Permanently raise an own card's defense.
    pub fn defend_card(&mut self, card_id: SlotId, player: PlayerId) -> Result<ActionOutcome> {
        self.act(player, |engine| {
            engine.owned_slot(card_id, player)?;
            let bonus = engine.config.defend_bonus;
            if let Some(slot) = engine.state.board.get_mut(card_id) {
                slot.card.adjust(Stat::Defense, bonus);
            }
            debug!(player = %player, slot = %card_id, bonus, "card defends");
            Ok(Some(card_id))
        })
    }

    // === Abilities ===

    /// Activate an own card's `onPlayed` ability.
    ///
    /// One-shot cards are spent once their ability resolves.
    pub fn convert_card(
        &mut self,
        caster: SlotId,
        target: Option<&str>,
        player: PlayerId,
    ) -> Result<ActionOutcome> {
        self.act(player, |engine| {
            let slot = engine.owned_slot(caster, player)?;
            let key = slot.card.key();
            let title = slot.card.title.clone();
            let command = engine.abilities.get(&key).clone();
            let effect = command
                .on_played
                .ok_or_else(|| EngineError::AbilityNotImplemented(title.clone()))?;

            trace!(card = %key, hook = "onPlayed", "dispatch");
            let mut ctx = AbilityContext::new(&mut engine.state, &engine.config.board);
            resolver::run_played(&effect, &mut ctx, caster, player, target)?;

            if command.consumed {
                if let Some(slot) = engine.state.board.get_mut(caster) {
                    slot.card.set_stat(Stat::Hp, 0);
                }
            }
            debug!(player = %player, card = %title, slot = %caster, ?target, "ability resolved");
            Ok(Some(caster))
        })
    }
}
