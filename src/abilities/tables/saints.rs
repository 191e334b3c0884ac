//! Saints.

use crate::abilities::builders::*;
use crate::abilities::command::AbilityCommand;
use crate::abilities::effect::{Allegiance, CardFilter, PlayedEffect, ZoneRef};
use crate::cards::Stat;

pub fn commands() -> Vec<(&'static str, AbilityCommand)> {
    let cavalry = |stat, amount| PlayedEffect::Buff {
        filter: CardFilter::Cavalry,
        stat,
        amount,
        zone: None,
    };

    vec![
        ("Santo António de Lisboa", draw(1)),
        ("Santa Isabel de Portugal", heal_all(3)),
        ("São João de Deus", revive_top_to_castle()),
        ("São Nuno de Santa Maria", sequence(vec![
            cavalry(Stat::Attack, 2),
            cavalry(Stat::Defense, 1),
        ])),
        ("São Vicente", heal_at(ZoneRef::OwnCastle, 3)),
        ("São Francisco Xavier", convert()),
        ("Santa Rita de Cássia", revive_top_to_castle()),
        ("São Gonçalo de Amarante", AbilityCommand::played(PlayedEffect::ShareLife)),
        ("Santa Joana Princesa", AbilityCommand::played(PlayedEffect::Sacrifice { heal: 3 })),
        ("São Roque", buff(CardFilter::Any, Stat::Defense, 99)),
        ("São Teotónio", AbilityCommand::played(PlayedEffect::SpawnToken)),
        ("São José", buff_target(Stat::Defense, 2)),
        ("Santa Luzia", discard_opponent()),
        ("São Bento", remove_target(Allegiance::Enemies)),
        ("Nossa Senhora de Fátima", sequence(vec![
            PlayedEffect::HealAll(3),
            PlayedEffect::SkipEnemyAttacks,
        ])),
    ]
}
