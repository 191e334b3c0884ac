//! Foot soldiers, cavalry and catapults.

use crate::abilities::builders::*;
use crate::abilities::command::AbilityCommand;
use crate::abilities::effect::{AttackEffect, MovedEffect, PlayedEffect};
use crate::cards::Stat;

pub fn commands() -> Vec<(&'static str, AbilityCommand)> {
    vec![
        ("Line Soldier", AbilityCommand::NOOP),
        ("Siege Soldier", AbilityCommand::attack(AttackEffect::CastleBonus(1))),
        ("Devoted Soldier", AbilityCommand::moved(MovedEffect::HealNearSaint(1))),
        ("Shock Cavalry", AbilityCommand::played(PlayedEffect::Strike)
            .with_moved(MovedEffect::StrikeNearest)),
        ("Guard Cavalry", buff_self(Stat::Defense, 2)),
        ("Wandering Cavalry", AbilityCommand::played(PlayedEffect::HealOrHarm { heal: 1 })),
        ("Siege Catapult", siege_strike(4).with_attack(AttackEffect::CastleBonus(4))),
        ("Fire Catapult", AbilityCommand::played(PlayedEffect::SplashAdjacent)
            .with_attack(AttackEffect::Splash(1))),
        ("Destruction Catapult", AbilityCommand::played(PlayedEffect::Sunder(2))),
    ]
}
