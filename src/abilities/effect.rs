//! Effect descriptors.
//!
//! Card abilities are declared as data: each hook of an `AbilityCommand`
//! holds one of the closed enums below, and the resolver gives each variant
//! its meaning. Registering a card is a one-line table entry; the type
//! system keeps every hook shape honest.

use crate::cards::{CardInstance, Category, Stat, SubCategory};
use crate::core::PlayerId;
use crate::zones::BoardLayout;

/// A zone named relative to the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneRef {
    OwnCastle,
    EnemyCastle,
    /// `n` steps forward from the own castle (1 = village, 2 = farm).
    FromOwnCastle(usize),
}

impl ZoneRef {
    /// Absolute zone index for this player, if it exists on the board.
    #[must_use]
    pub fn resolve(self, layout: &BoardLayout, player: PlayerId) -> Option<usize> {
        match self {
            ZoneRef::OwnCastle => Some(layout.own_castle(player)),
            ZoneRef::EnemyCastle => Some(layout.enemy_castle(player)),
            ZoneRef::FromOwnCastle(steps) => {
                let mut zone = layout.own_castle(player);
                for _ in 0..steps {
                    zone = layout.step(zone, player)?;
                }
                Some(zone)
            }
        }
    }
}

/// Predicate over a card's taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFilter {
    Any,
    Category(Category),
    SubCategory(SubCategory),
    Cavalry,
    Soldier,
}

impl CardFilter {
    #[must_use]
    pub fn matches(self, card: &CardInstance) -> bool {
        match self {
            CardFilter::Any => true,
            CardFilter::Category(category) => card.category == category,
            CardFilter::SubCategory(sub) => card.sub_category == sub,
            CardFilter::Cavalry => card.sub_category.is_cavalry(),
            CardFilter::Soldier => card.sub_category.is_soldier(),
        }
    }
}

/// How much damage an effect deals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Power {
    Fixed(i64),
    /// The caster's current attack.
    OwnAttack,
}

/// Side of the board an effect touches, seen from the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allegiance {
    Allies,
    Enemies,
    Anyone,
}

/// Effect run by `onPlayed`, the activation entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayedEffect {
    // === Healing and buffs ===

    /// Every allied card gains hp.
    HealAll(i64),

    /// Allied cards standing in a zone gain hp.
    HealAt { zone: ZoneRef, amount: i64 },

    /// Allies matching a filter (optionally in one zone) gain a stat.
    Buff {
        filter: CardFilter,
        stat: Stat,
        amount: i64,
        zone: Option<ZoneRef>,
    },

    /// Target ally gains a stat.
    BuffTarget { stat: Stat, amount: i64 },

    /// The caster gains a stat.
    BuffSelf { stat: Stat, amount: i64 },

    /// Allies within one zone of the caster gain defense.
    WardAdjacent(i64),

    /// Every ally's hp is set to a value.
    SetHpAll(i64),

    /// Two allies (`"idA:idB"`) both end with the floor of their average hp.
    ShareLife,

    /// The caster dies; target ally gains hp.
    Sacrifice { heal: i64 },

    // === Damage ===

    /// Damage one target through its defense (unless ignored).
    /// Targets in the caster's enemy castle take `castle_bonus` more.
    DamageTarget {
        power: Power,
        castle_bonus: i64,
        ignore_defense: bool,
    },

    /// The caster loses hp.
    SelfDamage(i64),

    /// Damage a target through defense and heal the caster.
    Drain { amount: i64 },

    /// Optional target loses hp equal to the caster's attack.
    Strike,

    /// Allied target heals by `heal`; enemy target loses the caster's attack.
    HealOrHarm { heal: i64 },

    /// Enemies within one zone of the caster lose the caster's attack.
    SplashAdjacent,

    /// Every ally hits every enemy within its own range.
    Volley,

    /// Each allied catapult hits every enemy in the enemy castle for
    /// `multiplier` times its attack.
    Bombard { multiplier: i64 },

    // === Debuffs ===

    /// Enemies matching a filter lose attack and defense.
    Weaken { filter: CardFilter, amount: i64 },

    /// Target enemy loses attack and defense.
    WeakenTarget { amount: i64 },

    /// Enemies within the caster's range lose defense.
    Sunder(i64),

    // === Board control ===

    /// Move a card (`"id:position"`) to any zone.
    MoveTarget { allegiance: Allegiance },

    /// Remove a card from play outright.
    RemoveTarget { allegiance: Allegiance },

    /// Take control of an adjacent enemy and pull it into the own castle.
    Convert,

    /// Take control of an enemy where it stands.
    Betray,

    /// Top deck card enters play in the caster's castle.
    ReviveTopToCastle,

    /// A fresh soldier token enters play in the caster's castle.
    SpawnToken,

    // === Cards and turn flow ===

    /// Draw cards from the deck.
    Draw(usize),

    /// The opponent discards the first card in hand.
    DiscardOpponent,

    /// The caster acts again before the turn passes.
    ExtraAction,

    /// The next advance phase does not attack the caster's cards.
    SkipEnemyAttacks,

    /// Several effects in order.
    Sequence(Vec<PlayedEffect>),
}

/// Effect run by `onMoved` after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovedEffect {
    /// Hit the closest enemy within range using the damage law.
    StrikeNearest,
    /// Heal self when an allied saint is within one zone.
    HealNearSaint(i64),
}

/// Effect consulted by `onAttack` before default combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackEffect {
    /// Extra attack against targets in the enemy castle.
    CastleBonus(i64),
    /// Attack ignores the target's defense.
    IgnoreDefense,
    /// Default hit on the target plus raw damage to enemies next to it.
    Splash(i64),
}

/// What an `onAttack` hook decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackResolution {
    /// Apply the default damage law.
    Default,
    /// Replace the attacker's attack value.
    Override { damage: i64, ignore_defense: bool },
    /// The hook resolved the attack itself.
    Handled,
}
