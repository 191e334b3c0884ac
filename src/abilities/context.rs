//! Mutation handle given to ability hooks.
//!
//! Hooks never touch the arena directly. `AbilityContext` exposes the
//! operations an ability may perform (damage, heal, move, convert, summon,
//! draw, discard) and the engine re-establishes board invariants (stats
//! clamped, dead cards purged) once the hook returns.

use crate::cards::{generated_soldier, CardInstance, Stat};
use crate::core::{EngineError, MatchState, PlayerId, Result, SlotId, StatusEffect};
use crate::engine::combat;
use crate::zones::{BoardLayout, BoardSlotCard};

/// Scoped mutable access to a match for the duration of one hook.
pub struct AbilityContext<'a> {
    state: &'a mut MatchState,
    layout: &'a BoardLayout,
}

impl<'a> AbilityContext<'a> {
    pub fn new(state: &'a mut MatchState, layout: &'a BoardLayout) -> Self {
        Self { state, layout }
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &*self.state
    }

    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        self.layout
    }

    // === Lookup ===

    pub fn slot(&self, id: SlotId) -> Result<&BoardSlotCard> {
        self.state.board.get(id).ok_or(EngineError::CardNotFound(id))
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut BoardSlotCard> {
        self.state
            .board
            .get_mut(id)
            .ok_or(EngineError::CardNotFound(id))
    }

    /// A card owned by `player`.
    pub fn ally(&self, id: SlotId, player: PlayerId) -> Result<&BoardSlotCard> {
        let slot = self.slot(id)?;
        if slot.owner != player {
            return Err(EngineError::InvalidTarget(format!("card {} is not an ally", id)));
        }
        Ok(slot)
    }

    /// A card not owned by `player`.
    pub fn enemy(&self, id: SlotId, player: PlayerId) -> Result<&BoardSlotCard> {
        let slot = self.slot(id)?;
        if slot.owner == player {
            return Err(EngineError::InvalidTarget(format!("card {} is not an enemy", id)));
        }
        Ok(slot)
    }

    /// Ids of cards matching a predicate, ascending.
    pub fn select(&self, predicate: impl Fn(&BoardSlotCard) -> bool) -> Vec<SlotId> {
        self.state.board.select(predicate)
    }

    /// Opponent whose castle `player` attacks.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> Option<PlayerId> {
        BoardLayout::enemy_of(player, self.state.player_count())
    }

    // === Stats ===

    /// Add to (or subtract from) one stat, clamped at zero.
    pub fn adjust(&mut self, id: SlotId, stat: Stat, amount: i64) -> Result<()> {
        self.slot_mut(id)?.card.adjust(stat, amount);
        Ok(())
    }

    /// Overwrite one stat, clamped at zero.
    pub fn set_stat(&mut self, id: SlotId, stat: Stat, value: i64) -> Result<()> {
        self.slot_mut(id)?.card.set_stat(stat, value);
        Ok(())
    }

    /// Adjust a stat on every listed card. Missing ids are skipped.
    pub fn adjust_all(&mut self, ids: &[SlotId], stat: Stat, amount: i64) {
        for &id in ids {
            if let Some(slot) = self.state.board.get_mut(id) {
                slot.card.adjust(stat, amount);
            }
        }
    }

    // === Damage ===

    /// Effect damage, reduced by defense unless ignored. Returns hp lost.
    pub fn damage(&mut self, id: SlotId, amount: i64, ignore_defense: bool) -> Result<i64> {
        let slot = self.slot_mut(id)?;
        Ok(combat::apply_effect_damage(amount, ignore_defense, &mut slot.card))
    }

    /// Raw hp loss that bypasses defense. Returns hp lost.
    pub fn wound(&mut self, id: SlotId, amount: i64) -> Result<i64> {
        self.damage(id, amount, true)
    }

    /// Damage-law hit with the given attack value. Returns hp lost.
    pub fn attack(&mut self, id: SlotId, attack: i64) -> Result<i64> {
        let slot = self.slot_mut(id)?;
        Ok(combat::apply_attack(attack, &mut slot.card))
    }

    // === Board ===

    /// Take a card out of play.
    pub fn remove(&mut self, id: SlotId) -> Result<BoardSlotCard> {
        self.state
            .board
            .remove(id)
            .ok_or(EngineError::CardNotFound(id))
    }

    /// Put a card into play face up.
    pub fn place(&mut self, player: PlayerId, zone: usize, card: CardInstance) -> SlotId {
        let id = self.state.allocate_slot_id();
        self.state
            .board
            .insert(BoardSlotCard::new(id, player, zone, card));
        id
    }

    /// Relocate a card to any zone on the board.
    pub fn move_to(&mut self, id: SlotId, zone: usize) -> Result<()> {
        if !self.layout.contains(zone) {
            return Err(EngineError::InvalidTarget(format!("zone {} is off the board", zone)));
        }
        self.slot_mut(id)?.position = zone;
        Ok(())
    }

    /// Hand a card to another player where it stands.
    pub fn set_owner(&mut self, id: SlotId, player: PlayerId) -> Result<()> {
        self.slot_mut(id)?.owner = player;
        Ok(())
    }

    /// Take control of an enemy within one zone of `converter` and pull it
    /// into the converting player's castle, face up.
    pub fn convert(&mut self, converter: SlotId, target: SlotId, player: PlayerId) -> Result<()> {
        let from = self.slot(converter)?.position;
        let to = self.enemy(target, player)?.position;
        let distance = BoardLayout::distance(from, to);
        if distance > 1 {
            return Err(EngineError::OutOfRange { distance, range: 1 });
        }

        let castle = self.layout.own_castle(player);
        let slot = self.slot_mut(target)?;
        slot.owner = player;
        slot.position = castle;
        slot.hidden = false;
        Ok(())
    }

    /// Top deck card enters play in the player's castle.
    pub fn revive_top_to_castle(&mut self, player: PlayerId) -> Option<SlotId> {
        let card = self.state.deck.pop_front()?;
        let castle = self.layout.own_castle(player);
        Some(self.place(player, castle, card))
    }

    /// A generated soldier enters play in the player's castle.
    pub fn spawn_token(&mut self, player: PlayerId) -> SlotId {
        let castle = self.layout.own_castle(player);
        self.place(player, castle, generated_soldier().instantiate())
    }

    /// Two cards both end with the floor of their average hp.
    pub fn share_life(&mut self, a: SlotId, b: SlotId) -> Result<i64> {
        let total = self.slot(a)?.card.hp.max(0).saturating_add(self.slot(b)?.card.hp.max(0));
        let average = total.div_euclid(2);
        self.set_stat(a, Stat::Hp, average)?;
        self.set_stat(b, Stat::Hp, average)?;
        Ok(average)
    }

    // === Cards in hand ===

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw(&mut self, player: PlayerId, count: usize) -> usize {
        (0..count).take_while(|_| self.state.draw(player)).count()
    }

    /// Remove the first card of a player's hand.
    pub fn discard_first(&mut self, player: PlayerId) -> Option<CardInstance> {
        self.state.hands.get_mut(player)?.pop_front()
    }

    // === Match status ===

    pub fn grant(&mut self, status: StatusEffect) {
        self.state.add_status(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;
    use crate::core::{Player, PlayerMap};

    fn match_state() -> MatchState {
        let catalog = Catalog::standard();
        let mut state = MatchState::new(20, 1);
        state.players = vec![
            Player::new(PlayerId(0), "A"),
            Player::new(PlayerId(1), "B"),
        ];
        state.hands = PlayerMap::with_default(2);
        state.castle_hp = PlayerMap::with_value(2, 20);
        state.deck = catalog.build_deck().into_iter().take(3).collect();
        state
    }

    #[test]
    fn test_place_and_remove() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let id = ctx.spawn_token(PlayerId(1));
        assert_eq!(ctx.slot(id).unwrap().position, 7);
        assert_eq!(ctx.slot(id).unwrap().card.title, "Generated Soldier");

        ctx.remove(id).unwrap();
        assert_eq!(ctx.remove(id), Err(EngineError::CardNotFound(id)));
    }

    #[test]
    fn test_convert_requires_adjacent_enemy() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let catalog = Catalog::standard();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let saint = ctx.place(PlayerId(0), 3, catalog.instance("São Francisco Xavier").unwrap());
        let near = ctx.place(PlayerId(1), 4, catalog.instance("Line Soldier").unwrap());
        let far = ctx.place(PlayerId(1), 6, catalog.instance("Line Soldier").unwrap());

        assert!(matches!(
            ctx.convert(saint, far, PlayerId(0)),
            Err(EngineError::OutOfRange { distance: 3, range: 1 })
        ));

        ctx.convert(saint, near, PlayerId(0)).unwrap();
        let converted = ctx.slot(near).unwrap();
        assert_eq!(converted.owner, PlayerId(0));
        assert_eq!(converted.position, 0);
        assert!(!converted.hidden);

        assert!(matches!(ctx.convert(saint, near, PlayerId(0)), Err(EngineError::InvalidTarget(_))));
    }

    #[test]
    fn test_share_life_floors_average() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let catalog = Catalog::standard();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let a = ctx.place(PlayerId(0), 0, catalog.instance("D. Dinis").unwrap());
        let b = ctx.place(PlayerId(0), 0, catalog.instance("Line Soldier").unwrap());

        assert_eq!(ctx.share_life(a, b), Ok(4));
        assert_eq!(ctx.slot(a).unwrap().card.hp, 4);
        assert_eq!(ctx.slot(b).unwrap().card.hp, 4);
    }

    #[test]
    fn test_share_life_saturates() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let mut giant = Catalog::standard().instance("Line Soldier").unwrap();
        giant.hp = i64::MAX;
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let a = ctx.place(PlayerId(0), 0, giant.clone());
        let b = ctx.place(PlayerId(0), 0, giant);
        assert_eq!(ctx.share_life(a, b), Ok(i64::MAX / 2));
    }

    #[test]
    fn test_draw_stops_at_empty_deck() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        assert_eq!(ctx.draw(PlayerId(0), 5), 3);
        assert_eq!(ctx.state().hand(PlayerId(0)).unwrap().len(), 3);
        assert!(ctx.discard_first(PlayerId(0)).is_some());
        assert_eq!(ctx.state().hand(PlayerId(0)).unwrap().len(), 2);
    }

    #[test]
    fn test_revive_top_to_castle() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let top = state.deck[0].title.clone();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let id = ctx.revive_top_to_castle(PlayerId(0)).unwrap();
        assert_eq!(ctx.slot(id).unwrap().card.title, top);
        assert_eq!(ctx.slot(id).unwrap().position, 0);
        assert_eq!(ctx.state().deck.len(), 2);
    }

    #[test]
    fn test_move_to_rejects_off_board() {
        let mut state = match_state();
        let layout = BoardLayout::default();
        let catalog = Catalog::standard();
        let mut ctx = AbilityContext::new(&mut state, &layout);

        let id = ctx.place(PlayerId(0), 0, catalog.instance("Line Soldier").unwrap());
        assert!(ctx.move_to(id, 8).is_err());
        ctx.move_to(id, 5).unwrap();
        assert_eq!(ctx.slot(id).unwrap().position, 5);
    }
}
