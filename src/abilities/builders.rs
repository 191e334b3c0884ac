//! Builders for the common hook shapes.
//!
//! Most cards are one of a handful of patterns (heal everyone, buff an
//! archetype, damage a target...). These constructors keep the card tables
//! to one line per card.

use super::command::AbilityCommand;
use super::effect::{Allegiance, CardFilter, PlayedEffect, Power, ZoneRef};
use crate::cards::Stat;

/// Heal every ally.
#[must_use]
pub fn heal_all(amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::HealAll(amount))
}

/// Heal allies standing in one zone.
#[must_use]
pub fn heal_at(zone: ZoneRef, amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::HealAt { zone, amount })
}

/// Buff a stat on every ally matching `filter`.
#[must_use]
pub fn buff(filter: CardFilter, stat: Stat, amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::Buff {
        filter,
        stat,
        amount,
        zone: None,
    })
}

/// Buff a stat on allies matching `filter` in one zone.
#[must_use]
pub fn buff_at(filter: CardFilter, zone: ZoneRef, stat: Stat, amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::Buff {
        filter,
        stat,
        amount,
        zone: Some(zone),
    })
}

/// Buff a stat on one targeted ally.
#[must_use]
pub fn buff_target(stat: Stat, amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::BuffTarget { stat, amount })
}

/// Buff a stat on the caster.
#[must_use]
pub fn buff_self(stat: Stat, amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::BuffSelf { stat, amount })
}

/// Fixed damage to a target.
#[must_use]
pub fn damage_target(amount: i64, ignore_defense: bool) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::DamageTarget {
        power: Power::Fixed(amount),
        castle_bonus: 0,
        ignore_defense,
    })
}

/// Damage a target with the caster's attack, plus a bonus in the enemy castle.
#[must_use]
pub fn siege_strike(castle_bonus: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::DamageTarget {
        power: Power::OwnAttack,
        castle_bonus,
        ignore_defense: false,
    })
}

#[must_use]
pub fn self_damage(amount: i64) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::SelfDamage(amount))
}

#[must_use]
pub fn revive_top_to_castle() -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::ReviveTopToCastle)
}

/// Move a card given as `"id:position"`.
#[must_use]
pub fn move_target(allegiance: Allegiance) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::MoveTarget { allegiance })
}

#[must_use]
pub fn remove_target(allegiance: Allegiance) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::RemoveTarget { allegiance })
}

#[must_use]
pub fn draw(count: usize) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::Draw(count))
}

#[must_use]
pub fn convert() -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::Convert)
}

#[must_use]
pub fn discard_opponent() -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::DiscardOpponent)
}

/// Several effects in order.
#[must_use]
pub fn sequence(effects: Vec<PlayedEffect>) -> AbilityCommand {
    AbilityCommand::played(PlayedEffect::Sequence(effects))
}

/// One-shot spell.
#[must_use]
pub fn spell(effect: PlayedEffect) -> AbilityCommand {
    AbilityCommand::played(effect).consumed()
}
