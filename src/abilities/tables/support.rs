//! Ships, priests, archangels and one-shot spells.

use crate::abilities::builders::*;
use crate::abilities::command::AbilityCommand;
use crate::abilities::effect::{Allegiance, AttackEffect, CardFilter, PlayedEffect, Power};
use crate::cards::Stat;

pub fn commands() -> Vec<(&'static str, AbilityCommand)> {
    vec![
        // === Ships ===
        ("Transport Ship", move_target(Allegiance::Allies)),
        ("Assault Ship", damage_target(2, false)),
        ("Strategic Caravel", move_target(Allegiance::Anyone)),

        // === Priests ===
        ("Healing Priest", buff_target(Stat::Hp, 2)),
        ("Inquisitor Priest", AbilityCommand::played(PlayedEffect::WeakenTarget { amount: 1 })),

        // === Archangels ===
        ("Guardian Archangel", AbilityCommand::played(PlayedEffect::WardAdjacent(2))),
        ("Wrath Archangel", AbilityCommand::played(PlayedEffect::DamageTarget {
            power: Power::OwnAttack,
            castle_bonus: 0,
            ignore_defense: true,
        })
        .with_attack(AttackEffect::IgnoreDefense)),

        // === Spells ===
        ("Miracle", spell(PlayedEffect::SetHpAll(10))),
        ("Total Siege", spell(PlayedEffect::Bombard { multiplier: 2 })),
        ("Forced March", spell(PlayedEffect::Buff {
            filter: CardFilter::Any,
            stat: Stat::Velocity,
            amount: 1,
            zone: None,
        })),
        ("Betrayal", spell(PlayedEffect::Betray)),
    ]
}
