//! Card instances - runtime card state.
//!
//! `CardInstance` is the mutable copy of a `CardDefinition` that moves
//! between deck, hand and board. Abilities and combat rewrite its stats in
//! place; every write goes through [`CardInstance::set_stat`] so values
//! never drop below zero.
//!
//! The serialized form is the card wire shape shared by snapshots and the
//! state view: `{imageUrl, title, description, effectDescription,
//! attackPoints, defensePoints, hp, velocity, range, category, subCategory,
//! element}`.

use serde::{Deserialize, Serialize};

use super::definition::{CardKey, Category, Element, SubCategory};

/// A mutable numeric stat on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Attack,
    Defense,
    Hp,
    Velocity,
    Range,
}

/// A card in a specific match at a specific moment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstance {
    #[serde(default)]
    pub image_url: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub effect_description: String,

    #[serde(rename = "attackPoints")]
    pub attack: i64,

    #[serde(rename = "defensePoints")]
    pub defense: i64,

    pub hp: i64,

    #[serde(default)]
    pub velocity: i64,

    #[serde(default)]
    pub range: i64,

    pub category: Category,

    pub sub_category: SubCategory,

    #[serde(default)]
    pub element: Element,
}

impl CardInstance {
    /// Ability lookup key derived from the title.
    #[must_use]
    pub fn key(&self) -> CardKey {
        CardKey::from_title(&self.title)
    }

    /// Dead cards are purged on the next cleanup pass.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    #[must_use]
    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Hp => self.hp,
            Stat::Velocity => self.velocity,
            Stat::Range => self.range,
        }
    }

    /// Overwrite a stat, clamped at zero.
    pub fn set_stat(&mut self, stat: Stat, value: i64) {
        let value = value.max(0);
        match stat {
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::Hp => self.hp = value,
            Stat::Velocity => self.velocity = value,
            Stat::Range => self.range = value,
        }
    }

    /// Add (or with a negative amount, subtract) from a stat.
    pub fn adjust(&mut self, stat: Stat, amount: i64) {
        let current = self.stat(stat);
        self.set_stat(stat, current.saturating_add(amount));
    }

    /// Clamp every stat at zero.
    pub fn normalize(&mut self) {
        for stat in [Stat::Attack, Stat::Defense, Stat::Hp, Stat::Velocity, Stat::Range] {
            let value = self.stat(stat);
            self.set_stat(stat, value);
        }
    }

    /// First negative stat, if any.
    #[must_use]
    pub fn negative_stat(&self) -> Option<Stat> {
        [Stat::Attack, Stat::Defense, Stat::Hp, Stat::Velocity, Stat::Range]
            .into_iter()
            .find(|&stat| self.stat(stat) < 0)
    }
}
