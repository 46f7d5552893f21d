//! Damage formulas - deterministic and additive
//!
//! Each formula derives a raw value from one dominant stat plus the attacker's
//! weapon bonus and clamps it into a fixed band. Negative stats are treated as
//! zero before clamping. Specials scale the stat harder than the normal attack
//! and share the same weapon bonus, so an armed character's special never
//! falls behind their armed normal attack.

use crate::combat::constants::{
    ABILITY_DAMAGE_MAX, ABILITY_DAMAGE_MIN, NORMAL_DAMAGE_MAX, NORMAL_DAMAGE_MIN, SNEAK_DAMAGE_MIN,
};

fn clamp_band(raw: i32, min: u32, max: u32) -> u32 {
    (raw.max(0) as u32).clamp(min, max)
}

fn bonus_as_i32(weapon_bonus: u32) -> i32 {
    weapon_bonus.min(i32::MAX as u32) as i32
}

/// Normal attack: dominant stat plus equipped weapon bonus
pub fn normal_attack(stat: i32, weapon_bonus: u32) -> u32 {
    let raw = stat.saturating_add(bonus_as_i32(weapon_bonus));
    clamp_band(raw, NORMAL_DAMAGE_MIN, NORMAL_DAMAGE_MAX)
}

/// Warrior power strike: double strength plus weapon bonus
pub fn power_strike(strength: i32, weapon_bonus: u32) -> u32 {
    let raw = strength.saturating_mul(2).saturating_add(bonus_as_i32(weapon_bonus));
    clamp_band(raw, ABILITY_DAMAGE_MIN, ABILITY_DAMAGE_MAX)
}

/// Mage fireball: magic scaled by 3/2 plus weapon bonus
pub fn fireball(magic: i32, weapon_bonus: u32) -> u32 {
    let raw = (magic.saturating_mul(3) / 2).saturating_add(bonus_as_i32(weapon_bonus));
    clamp_band(raw, ABILITY_DAMAGE_MIN, ABILITY_DAMAGE_MAX)
}

/// Rogue sneak attack: double strength plus weapon bonus, with a critical-hit floor
pub fn sneak_attack(strength: i32, weapon_bonus: u32) -> u32 {
    let raw = strength.saturating_mul(2).saturating_add(bonus_as_i32(weapon_bonus));
    clamp_band(raw, SNEAK_DAMAGE_MIN, ABILITY_DAMAGE_MAX)
}
