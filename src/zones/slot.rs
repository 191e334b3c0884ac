//! A card placed on the board.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{PlayerId, SlotId};

/// Card in play: `{id, ownerId, position, hidden, card}`.
///
/// `owner` changes only through conversion or betrayal; `position` only
/// through explicit moves or the advance phase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSlotCard {
    pub id: SlotId,

    #[serde(rename = "ownerId")]
    pub owner: PlayerId,

    pub position: usize,

    #[serde(default)]
    pub hidden: bool,

    pub card: CardInstance,
}

impl BoardSlotCard {
    #[must_use]
    pub fn new(id: SlotId, owner: PlayerId, position: usize, card: CardInstance) -> Self {
        Self {
            id,
            owner,
            position,
            hidden: false,
            card,
        }
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }
}
