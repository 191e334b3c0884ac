//! Effect resolution.
//!
//! Gives each effect descriptor its meaning against an `AbilityContext`.
//! Resolution is all-or-nothing from the caller's point of view: the engine
//! restores its checkpoint when any step returns an error.

use super::context::AbilityContext;
use super::effect::{
    Allegiance, AttackEffect, AttackResolution, MovedEffect, PlayedEffect, Power,
};
use super::targeting;
use crate::cards::{Category, Stat, SubCategory};
use crate::core::{EngineError, PlayerId, Result, SlotId, StatusEffect};
use crate::zones::BoardLayout;

fn check_allegiance(
    ctx: &AbilityContext<'_>,
    id: SlotId,
    player: PlayerId,
    allegiance: Allegiance,
) -> Result<()> {
    match allegiance {
        Allegiance::Allies => ctx.ally(id, player).map(|_| ()),
        Allegiance::Enemies => ctx.enemy(id, player).map(|_| ()),
        Allegiance::Anyone => ctx.slot(id).map(|_| ()),
    }
}

fn allies_within(ctx: &AbilityContext<'_>, player: PlayerId, zone: usize, reach: usize) -> Vec<SlotId> {
    ctx.select(|s| s.owner == player && BoardLayout::distance(s.position, zone) <= reach)
}

fn enemies_within(ctx: &AbilityContext<'_>, player: PlayerId, zone: usize, reach: usize) -> Vec<SlotId> {
    ctx.select(|s| s.owner != player && BoardLayout::distance(s.position, zone) <= reach)
}

fn reach(range: i64) -> usize {
    usize::try_from(range.max(0)).unwrap_or(usize::MAX)
}

/// Run an activation effect for `caster`, owned by `player`.
pub fn run_played(
    effect: &PlayedEffect,
    ctx: &mut AbilityContext<'_>,
    caster: SlotId,
    player: PlayerId,
    target: Option<&str>,
) -> Result<()> {
    let me = ctx.slot(caster)?.clone();
    let layout = ctx.layout().clone();

    match effect {
        // === Healing and buffs ===
        PlayedEffect::HealAll(amount) => {
            let ids = ctx.select(|s| s.owner == player);
            ctx.adjust_all(&ids, Stat::Hp, *amount);
        }
        PlayedEffect::HealAt { zone, amount } => {
            if let Some(zone) = zone.resolve(&layout, player) {
                let ids = ctx.select(|s| s.owner == player && s.position == zone);
                ctx.adjust_all(&ids, Stat::Hp, *amount);
            }
        }
        PlayedEffect::Buff {
            filter,
            stat,
            amount,
            zone,
        } => {
            let zone = match zone {
                Some(zone) => match zone.resolve(&layout, player) {
                    Some(z) => Some(z),
                    None => return Ok(()),
                },
                None => None,
            };
            let ids = ctx.select(|s| {
                s.owner == player
                    && filter.matches(&s.card)
                    && zone.map_or(true, |z| s.position == z)
            });
            ctx.adjust_all(&ids, *stat, *amount);
        }
        PlayedEffect::BuffTarget { stat, amount } => {
            let id = targeting::parse_single(target)?;
            ctx.ally(id, player)?;
            ctx.adjust(id, *stat, *amount)?;
        }
        PlayedEffect::BuffSelf { stat, amount } => {
            ctx.adjust(caster, *stat, *amount)?;
        }
        PlayedEffect::WardAdjacent(amount) => {
            let ids = allies_within(ctx, player, me.position, 1);
            ctx.adjust_all(&ids, Stat::Defense, *amount);
        }
        PlayedEffect::SetHpAll(value) => {
            for id in ctx.select(|s| s.owner == player) {
                ctx.set_stat(id, Stat::Hp, *value)?;
            }
        }
        PlayedEffect::ShareLife => {
            let (a, b) = targeting::parse_pair(target)?;
            ctx.ally(a, player)?;
            ctx.ally(b, player)?;
            ctx.share_life(a, b)?;
        }
        PlayedEffect::Sacrifice { heal } => {
            let id = targeting::parse_single(target)?;
            if id == caster {
                return Err(EngineError::InvalidTarget(
                    "cannot sacrifice to save itself".to_string(),
                ));
            }
            ctx.ally(id, player)?;
            ctx.set_stat(caster, Stat::Hp, 0)?;
            ctx.adjust(id, Stat::Hp, *heal)?;
        }

        // === Damage ===
        PlayedEffect::DamageTarget {
            power,
            castle_bonus,
            ignore_defense,
        } => {
            let id = targeting::parse_single(target)?;
            let victim = ctx.slot(id)?;
            let in_enemy_castle =
                victim.owner != player && victim.position == layout.enemy_castle(player);
            let base = match power {
                Power::Fixed(amount) => *amount,
                Power::OwnAttack => me.card.attack,
            };
            let amount = if in_enemy_castle { base + castle_bonus } else { base };
            ctx.damage(id, amount, *ignore_defense)?;
        }
        PlayedEffect::SelfDamage(amount) => {
            ctx.adjust(caster, Stat::Hp, -amount)?;
        }
        PlayedEffect::Drain { amount } => {
            let id = targeting::parse_single(target)?;
            ctx.damage(id, *amount, false)?;
            ctx.adjust(caster, Stat::Hp, *amount)?;
        }
        PlayedEffect::Strike => {
            if let Some(id) = targeting::parse_optional(target)? {
                ctx.wound(id, me.card.attack)?;
            }
        }
        PlayedEffect::HealOrHarm { heal } => {
            let id = targeting::parse_single(target)?;
            if ctx.slot(id)?.owner == player {
                ctx.adjust(id, Stat::Hp, *heal)?;
            } else {
                ctx.wound(id, me.card.attack)?;
            }
        }
        PlayedEffect::SplashAdjacent => {
            for id in enemies_within(ctx, player, me.position, 1) {
                ctx.wound(id, me.card.attack)?;
            }
        }
        PlayedEffect::Volley => {
            for ally in ctx.select(|s| s.owner == player) {
                let shooter = ctx.slot(ally)?.clone();
                for enemy in enemies_within(ctx, player, shooter.position, reach(shooter.card.range)) {
                    ctx.wound(enemy, shooter.card.attack)?;
                }
            }
        }
        PlayedEffect::Bombard { multiplier } => {
            let castle = layout.enemy_castle(player);
            let catapults = ctx.select(|s| {
                s.owner == player && s.card.sub_category == SubCategory::Catapult
            });
            let defenders = ctx.select(|s| s.owner != player && s.position == castle);
            for catapult in catapults {
                let attack = ctx.slot(catapult)?.card.attack;
                for &defender in &defenders {
                    ctx.wound(defender, attack.saturating_mul(*multiplier))?;
                }
            }
        }

        // === Debuffs ===
        PlayedEffect::Weaken { filter, amount } => {
            let ids = ctx.select(|s| s.owner != player && filter.matches(&s.card));
            ctx.adjust_all(&ids, Stat::Attack, -amount);
            ctx.adjust_all(&ids, Stat::Defense, -amount);
        }
        PlayedEffect::WeakenTarget { amount } => {
            let id = targeting::parse_single(target)?;
            ctx.enemy(id, player)?;
            ctx.adjust(id, Stat::Attack, -amount)?;
            ctx.adjust(id, Stat::Defense, -amount)?;
        }
        PlayedEffect::Sunder(amount) => {
            let ids = enemies_within(ctx, player, me.position, reach(me.card.range));
            ctx.adjust_all(&ids, Stat::Defense, -amount);
        }

        // === Board control ===
        PlayedEffect::MoveTarget { allegiance } => {
            let (id, zone) = targeting::parse_move(target)?;
            check_allegiance(ctx, id, player, *allegiance)?;
            ctx.move_to(id, zone)?;
        }
        PlayedEffect::RemoveTarget { allegiance } => {
            let id = targeting::parse_single(target)?;
            check_allegiance(ctx, id, player, *allegiance)?;
            ctx.remove(id)?;
        }
        PlayedEffect::Convert => {
            let id = targeting::parse_single(target)?;
            ctx.convert(caster, id, player)?;
        }
        PlayedEffect::Betray => {
            let id = targeting::parse_single(target)?;
            ctx.enemy(id, player)?;
            ctx.set_owner(id, player)?;
        }
        PlayedEffect::ReviveTopToCastle => {
            ctx.revive_top_to_castle(player);
        }
        PlayedEffect::SpawnToken => {
            ctx.spawn_token(player);
        }

        // === Cards and turn flow ===
        PlayedEffect::Draw(count) => {
            ctx.draw(player, *count);
        }
        PlayedEffect::DiscardOpponent => {
            if let Some(opponent) = ctx.opponent(player) {
                ctx.discard_first(opponent);
            }
        }
        PlayedEffect::ExtraAction => {
            ctx.grant(StatusEffect::ExtraAction { player });
        }
        PlayedEffect::SkipEnemyAttacks => {
            ctx.grant(StatusEffect::SkipEnemyAttacks { protected: player });
        }
        PlayedEffect::Sequence(effects) => {
            for effect in effects {
                run_played(effect, ctx, caster, player, target)?;
            }
        }
    }

    Ok(())
}

/// Run a movement hook after `mover` walked `steps` zones.
pub fn run_moved(
    effect: MovedEffect,
    ctx: &mut AbilityContext<'_>,
    mover: SlotId,
    player: PlayerId,
    _steps: i64,
) -> Result<()> {
    let me = ctx.slot(mover)?.clone();

    match effect {
        MovedEffect::StrikeNearest => {
            let nearest = enemies_within(ctx, player, me.position, reach(me.card.range))
                .into_iter()
                .filter_map(|id| ctx.slot(id).ok().map(|s| (BoardLayout::distance(s.position, me.position), id)))
                .min();
            if let Some((_, id)) = nearest {
                ctx.attack(id, me.card.attack)?;
            }
        }
        MovedEffect::HealNearSaint(amount) => {
            let saint_nearby = allies_within(ctx, player, me.position, 1)
                .into_iter()
                .filter(|&id| id != mover)
                .any(|id| {
                    ctx.slot(id)
                        .map(|s| s.card.category == Category::Saint)
                        .unwrap_or(false)
                });
            if saint_nearby {
                ctx.adjust(mover, Stat::Hp, amount)?;
            }
        }
    }

    Ok(())
}

/// Let an attack hook decide how `attacker` hits `target`.
pub fn run_attack(
    effect: AttackEffect,
    ctx: &mut AbilityContext<'_>,
    attacker: SlotId,
    target: SlotId,
    player: PlayerId,
) -> Result<AttackResolution> {
    let me = ctx.slot(attacker)?.clone();
    let victim = ctx.slot(target)?.clone();

    let resolution = match effect {
        AttackEffect::CastleBonus(bonus) => {
            if victim.position == ctx.layout().enemy_castle(player) {
                AttackResolution::Override {
                    damage: me.card.attack.saturating_add(bonus),
                    ignore_defense: false,
                }
            } else {
                AttackResolution::Default
            }
        }
        AttackEffect::IgnoreDefense => AttackResolution::Override {
            damage: me.card.attack,
            ignore_defense: true,
        },
        AttackEffect::Splash(amount) => {
            ctx.attack(target, me.card.attack)?;
            let splashed = ctx.select(|s| {
                s.owner != player
                    && s.id != target
                    && BoardLayout::distance(s.position, victim.position) <= 1
            });
            for id in splashed {
                ctx.wound(id, amount)?;
            }
            AttackResolution::Handled
        }
    };

    Ok(resolution)
}
