//! Combat tuning constants - all damage bounds and class baselines in one place
//!
//! Damage formulas are ADDITIVE over these baselines and always clamp into the
//! bands below, so retuning a baseline can never push an attack out of range.

// Damage bands (applied after every formula)
pub const NORMAL_DAMAGE_MIN: u32 = 5;
pub const NORMAL_DAMAGE_MAX: u32 = 50;
pub const ABILITY_DAMAGE_MIN: u32 = 10;
pub const ABILITY_DAMAGE_MAX: u32 = 50;
pub const SNEAK_DAMAGE_MIN: u32 = 15;

// Class stat baselines: Warrior tough and strong, Mage frail and magical,
// Rogue in between
pub const WARRIOR_HEALTH: u32 = 120;
pub const WARRIOR_STRENGTH: i32 = 15;
pub const WARRIOR_MAGIC: i32 = 2;

pub const MAGE_HEALTH: u32 = 80;
pub const MAGE_STRENGTH: i32 = 6;
pub const MAGE_MAGIC: i32 = 20;

pub const ROGUE_HEALTH: u32 = 90;
pub const ROGUE_STRENGTH: i32 = 12;
pub const ROGUE_MAGIC: i32 = 8;

// Player progression
pub const STARTING_LEVEL: u32 = 1;
