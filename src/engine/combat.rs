//! Damage math.
//!
//! Two rules coexist:
//!
//! - The **damage law** used by attacks: an attack that exceeds the
//!   target's hp plus defense kills it outright, otherwise the target loses
//!   `attack - defense` (never less than zero).
//! - **Effect damage** used by abilities: the amount is reduced by defense
//!   unless the effect ignores it, then subtracted from hp.
//!
//! ```
//! use castle_ccg::engine::combat::resolved_hp;
//!
//! assert_eq!(resolved_hp(5, 3, 1), 0);
//! assert_eq!(resolved_hp(5, 10, 2), 7);
//! ```

use crate::cards::{CardInstance, Stat};

/// Target hp after an attack of `attack` under the damage law.
#[must_use]
pub fn resolved_hp(attack: i64, hp: i64, defense: i64) -> i64 {
    let atk = attack.max(0);
    let hp = hp.max(0);
    let def = defense.max(0);
    if hp.saturating_add(def) < atk {
        0
    } else {
        (hp - (atk - def).max(0)).max(0)
    }
}

/// Apply the damage law to a card. Returns the hp lost.
pub fn apply_attack(attack: i64, target: &mut CardInstance) -> i64 {
    let before = target.hp.max(0);
    let after = resolved_hp(attack, target.hp, target.defense);
    target.set_stat(Stat::Hp, after);
    before - after
}

/// Effect damage after defense.
#[must_use]
pub fn effect_damage(amount: i64, defense: i64, ignore_defense: bool) -> i64 {
    let amount = amount.max(0);
    if ignore_defense {
        amount
    } else {
        (amount - defense.max(0)).max(0)
    }
}

/// Apply effect damage to a card. Returns the hp lost.
pub fn apply_effect_damage(amount: i64, ignore_defense: bool, target: &mut CardInstance) -> i64 {
    let before = target.hp.max(0);
    let dealt = effect_damage(amount, target.defense, ignore_defense);
    target.adjust(Stat::Hp, -dealt);
    before - target.hp
}
