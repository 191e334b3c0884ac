//! Arena of cards in play, addressed by stable `SlotId`.
//!
//! Backed by `im::OrdMap` so cloning the board for an action checkpoint is
//! O(1) and iteration order is deterministic (ascending id, which is also
//! placement order).

use im::OrdMap;

use super::slot::BoardSlotCard;
use crate::core::{PlayerId, SlotId};

/// All cards currently on the board.
///
/// ```
/// use castle_ccg::cards::Catalog;
/// use castle_ccg::core::{PlayerId, SlotId};
/// use castle_ccg::zones::{BoardArena, BoardSlotCard};
///
/// let card = Catalog::standard().instance("Line Soldier").unwrap();
/// let mut arena = BoardArena::new();
/// arena.insert(BoardSlotCard::new(SlotId(1), PlayerId::new(0), 0, card));
///
/// assert_eq!(arena.len(), 1);
/// assert_eq!(arena.owned_by(PlayerId::new(0)).count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardArena {
    slots: OrdMap<SlotId, BoardSlotCard>,
}

impl BoardArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card, replacing any card with the same id.
    pub fn insert(&mut self, slot: BoardSlotCard) -> Option<BoardSlotCard> {
        self.slots.insert(slot.id, slot)
    }

    pub fn remove(&mut self, id: SlotId) -> Option<BoardSlotCard> {
        self.slots.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&BoardSlotCard> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut BoardSlotCard> {
        self.slots.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoardSlotCard> {
        self.slots.values()
    }

    /// Ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<SlotId> {
        self.slots.keys().copied().collect()
    }

    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = &BoardSlotCard> {
        self.slots.values().filter(move |s| s.owner == player)
    }

    pub fn not_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &BoardSlotCard> {
        self.slots.values().filter(move |s| s.owner != player)
    }

    /// Ids of cards matching a predicate, ascending.
    pub fn select(&self, predicate: impl Fn(&BoardSlotCard) -> bool) -> Vec<SlotId> {
        self.slots
            .values()
            .filter(|s| predicate(s))
            .map(|s| s.id)
            .collect()
    }

    /// Remove every card with `hp <= 0` and return their ids.
    pub fn purge_dead(&mut self) -> Vec<SlotId> {
        let dead = self.select(|s| s.card.is_dead());
        for id in &dead {
            self.slots.remove(id);
        }
        dead
    }

    /// Clamp every stat on the board at zero.
    pub fn normalize(&mut self) {
        for id in self.ids() {
            if let Some(slot) = self.slots.get_mut(&id) {
                slot.card.normalize();
            }
        }
    }

    /// Largest id in play.
    #[must_use]
    pub fn max_id(&self) -> Option<SlotId> {
        self.slots.get_max().map(|(id, _)| *id)
    }
}

impl FromIterator<BoardSlotCard> for BoardArena {
    fn from_iter<I: IntoIterator<Item = BoardSlotCard>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(|s| (s.id, s)).collect(),
        }
    }
}
