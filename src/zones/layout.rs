//! Board geometry: zone elements, castles, movement direction.
//!
//! The board is a linear track of zones. Zone 0 is the castle of every
//! even seat and the last zone is the castle of every odd seat, so "own"
//! and "enemy" castle are mirror images of each other. All geometry here is
//! a pure function of the seat and the zone count.
//!
//! ```text
//!  0       1       2      3      4      5       6       7
//! [castle][village][farm ][field][field][farm ][village][castle]
//!  earth   earth   water  water  water  water   earth   earth
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Element;
use crate::core::PlayerId;

/// Default element of each zone on the 8-zone board.
pub const DEFAULT_ZONES: [Element; 8] = [
    Element::Earth,
    Element::Earth,
    Element::Water,
    Element::Water,
    Element::Water,
    Element::Water,
    Element::Earth,
    Element::Earth,
];

/// Which end of the track a seat defends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Castle at zone 0, advances toward higher indices.
    Low,
    /// Castle at the last zone, advances toward lower indices.
    High,
}

impl Side {
    #[must_use]
    pub const fn of(player: PlayerId) -> Self {
        if player.0 % 2 == 0 {
            Side::Low
        } else {
            Side::High
        }
    }
}

/// Zone track configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    zones: Vec<Element>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.to_vec(),
        }
    }
}

impl BoardLayout {
    /// Create a layout from zone elements, castle first.
    #[must_use]
    pub fn new(zones: Vec<Element>) -> Self {
        Self { zones }
    }

    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Highest valid zone index.
    #[must_use]
    pub fn last_zone(&self) -> usize {
        self.zones.len().saturating_sub(1)
    }

    #[must_use]
    pub fn contains(&self, zone: usize) -> bool {
        zone < self.zones.len()
    }

    #[must_use]
    pub fn element(&self, zone: usize) -> Option<Element> {
        self.zones.get(zone).copied()
    }

    #[must_use]
    pub fn is_water(&self, zone: usize) -> bool {
        self.element(zone) == Some(Element::Water)
    }

    /// Castle zone the seat defends.
    #[must_use]
    pub fn own_castle(&self, player: PlayerId) -> usize {
        match Side::of(player) {
            Side::Low => 0,
            Side::High => self.last_zone(),
        }
    }

    /// Castle zone the seat attacks.
    #[must_use]
    pub fn enemy_castle(&self, player: PlayerId) -> usize {
        match Side::of(player) {
            Side::Low => self.last_zone(),
            Side::High => 0,
        }
    }

    /// The zone one step forward for this seat, or `None` at the board edge.
    #[must_use]
    pub fn step(&self, zone: usize, player: PlayerId) -> Option<usize> {
        let next = match Side::of(player) {
            Side::Low => zone.checked_add(1)?,
            Side::High => zone.checked_sub(1)?,
        };
        self.contains(next).then_some(next)
    }

    /// First water zone walking forward from the seat's own castle.
    #[must_use]
    pub fn harbour(&self, player: PlayerId) -> Option<usize> {
        let mut zone = self.own_castle(player);
        loop {
            if self.is_water(zone) {
                return Some(zone);
            }
            zone = self.step(zone, player)?;
        }
    }

    /// Where a freshly played card of this element lands.
    #[must_use]
    pub fn spawn_zone(&self, player: PlayerId, element: Element) -> Option<usize> {
        match element {
            Element::Earth => self.contains(0).then(|| self.own_castle(player)),
            Element::Water => self.harbour(player),
        }
    }

    /// Number of zones between two positions.
    #[must_use]
    pub fn distance(a: usize, b: usize) -> usize {
        a.abs_diff(b)
    }

    /// Opponent whose castle this seat attacks.
    ///
    /// The first seat after `player` in turn order that sits on the other
    /// side of the board. With two players this is simply the other player.
    #[must_use]
    pub fn enemy_of(player: PlayerId, player_count: usize) -> Option<PlayerId> {
        let side = Side::of(player);
        let mut seat = player;
        for _ in 1..player_count {
            seat = seat.next(player_count);
            if Side::of(seat) != side {
                return Some(seat);
            }
        }
        None
    }

    /// Reject unplayable tracks.
    pub fn validate(&self) -> Result<(), String> {
        if self.zones.len() < 2 {
            return Err(format!("board needs at least 2 zones, got {}", self.zones.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    #[test]
    fn test_castles_mirror() {
        let board = BoardLayout::default();
        assert_eq!(board.own_castle(P0), 0);
        assert_eq!(board.enemy_castle(P0), 7);
        assert_eq!(board.own_castle(P1), 7);
        assert_eq!(board.enemy_castle(P1), 0);
    }

    #[test]
    fn test_step_direction_and_edges() {
        let board = BoardLayout::default();
        assert_eq!(board.step(3, P0), Some(4));
        assert_eq!(board.step(3, P1), Some(2));
        assert_eq!(board.step(7, P0), None);
        assert_eq!(board.step(0, P1), None);
    }

    #[test]
    fn test_harbours() {
        let board = BoardLayout::default();
        assert_eq!(board.harbour(P0), Some(2));
        assert_eq!(board.harbour(P1), Some(5));

        let dry = BoardLayout::new(vec![Element::Earth; 4]);
        assert_eq!(dry.harbour(P0), None);
        assert_eq!(dry.spawn_zone(P0, Element::Water), None);
    }

    #[test]
    fn test_spawn_zone_by_element() {
        let board = BoardLayout::default();
        assert_eq!(board.spawn_zone(P0, Element::Earth), Some(0));
        assert_eq!(board.spawn_zone(P1, Element::Earth), Some(7));
        assert_eq!(board.spawn_zone(P1, Element::Water), Some(5));
    }

    #[test]
    fn test_enemy_of() {
        assert_eq!(BoardLayout::enemy_of(P0, 2), Some(P1));
        assert_eq!(BoardLayout::enemy_of(P1, 2), Some(P0));
        assert_eq!(BoardLayout::enemy_of(PlayerId(2), 4), Some(PlayerId(3)));
        assert_eq!(BoardLayout::enemy_of(PlayerId(3), 4), Some(PlayerId(0)));
        assert_eq!(BoardLayout::enemy_of(P0, 1), None);
    }

    #[test]
    fn test_validate() {
        assert!(BoardLayout::default().validate().is_ok());
        assert!(BoardLayout::new(vec![Element::Earth]).validate().is_err());
    }

    #[test]
    fn test_distance() {
        assert_eq!(BoardLayout::distance(2, 5), 3);
        assert_eq!(BoardLayout::distance(5, 2), 3);
    }
}
