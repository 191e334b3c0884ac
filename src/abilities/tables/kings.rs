//! Kings.

use crate::abilities::builders::*;
use crate::abilities::command::AbilityCommand;
use crate::abilities::effect::{Allegiance, AttackEffect, CardFilter, PlayedEffect, ZoneRef};
use crate::cards::{Category, Stat};

pub fn commands() -> Vec<(&'static str, AbilityCommand)> {
    vec![
        ("D. Afonso Henriques", siege_strike(2).with_attack(AttackEffect::CastleBonus(2))),
        // farm is two steps out from the castle
        ("D. Dinis", heal_at(ZoneRef::FromOwnCastle(2), 2)),
        ("D. João I", buff_at(CardFilter::Soldier, ZoneRef::FromOwnCastle(1), Stat::Defense, 1)),
        ("D. João II", remove_target(Allegiance::Enemies)),
        ("D. Manuel I", AbilityCommand::played(PlayedEffect::ExtraAction)),
        ("D. Sebastião", sequence(vec![
            PlayedEffect::Buff {
                filter: CardFilter::Cavalry,
                stat: Stat::Attack,
                amount: 2,
                zone: None,
            },
            PlayedEffect::SelfDamage(1),
        ])),
        ("D. João IV", revive_top_to_castle()),
        ("D. Pedro I", AbilityCommand::played(PlayedEffect::Drain { amount: 1 })),
        ("D. Afonso V", buff(CardFilter::Cavalry, Stat::Velocity, 1)),
        ("D. João III", AbilityCommand::played(PlayedEffect::Weaken {
            filter: CardFilter::Category(Category::Priest),
            amount: 1,
        })),
        ("D. José I", heal_all(1)),
        ("D. João VI", move_target(Allegiance::Allies)),
        ("D. Pedro IV", AbilityCommand::played(PlayedEffect::Volley)),
        ("D. Miguel I", discard_opponent()),
        ("D. Manuel II", buff_target(Stat::Defense, 2)),
    ]
}
