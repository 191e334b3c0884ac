//! The advance phase: automatic movement and attacks by the cards of
//! every player who is not on turn.
//!
//! Invoked explicitly; it neither consumes nor passes the turn.

use tracing::debug;

use super::combat;
use super::game::GameEngine;
use super::outcome::PhaseReport;
use crate::cards::Element;
use crate::core::{EngineError, Result, StatusEffect};
use crate::zones::BoardLayout;

impl GameEngine {
    /// Advance non-active cards by their velocity, then let each of them hit
    /// every active-player card in range.
    ///
    /// A pending `SkipEnemyAttacks` for the active player cancels the
    /// attack step and is consumed.
    pub fn next_phase(&mut self) -> Result<PhaseReport> {
        if self.state.game_over {
            return Err(EngineError::GameOver);
        }
        if self.state.player_count() == 0 {
            return Err(EngineError::NoPlayers);
        }

        let active = self.state.active_player;
        let mut report = PhaseReport::default();

        for id in self.state.board.select(|s| s.owner != active) {
            let Some(slot) = self.state.board.get_mut(id) else {
                continue;
            };
            let water = slot.card.element == Element::Water;
            let mut zone = slot.position;
            for _ in 0..slot.card.velocity.max(0) {
                match self.config.board.step(zone, slot.owner) {
                    Some(next) if !water || self.config.board.is_water(next) => zone = next,
                    _ => break,
                }
            }
            if zone != slot.position {
                slot.position = zone;
                report.moved.push(id);
            }
        }

        report.attacks_skipped = self
            .state
            .take_status(StatusEffect::SkipEnemyAttacks { protected: active });

        if !report.attacks_skipped {
            for attacker in self.state.board.select(|s| s.owner != active) {
                let Some(striker) = self.state.board.get(attacker).cloned() else {
                    continue;
                };
                if striker.card.is_dead() {
                    continue;
                }
                let reach = usize::try_from(striker.card.range.max(0)).unwrap_or(usize::MAX);
                let targets = self.state.board.select(|s| {
                    s.owner == active
                        && !s.card.is_dead()
                        && BoardLayout::distance(s.position, striker.position) <= reach
                });
                for target in targets {
                    if let Some(slot) = self.state.board.get_mut(target) {
                        combat::apply_attack(striker.card.attack, &mut slot.card);
                        report.strikes += 1;
                    }
                }
            }
        }

        self.state.board.normalize();
        report.removed = self.state.board.purge_dead();
        debug!(
            active = %active,
            moved = report.moved.len(),
            strikes = report.strikes,
            removed = report.removed.len(),
            skipped = report.attacks_skipped,
            "advance phase"
        );
        self.save_state();
        Ok(report)
    }
}
