//! Weapon value object - composition target, never part of the character hierarchy
//!
//! A `Weapon` is a name plus a flat damage bonus. Characters may hold one, but
//! weapons never fight on their own (they do not implement `Combatant`).

use serde::{Deserialize, Serialize};

use crate::core::{EmberError, Result};

/// A named weapon granting a flat damage bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage_bonus: u32,
}

impl Weapon {
    /// Create a weapon; the bonus must be positive
    pub fn new(name: impl Into<String>, damage_bonus: u32) -> Result<Self> {
        if damage_bonus == 0 {
            return Err(EmberError::InvalidDamageBonus(damage_bonus));
        }
        Ok(Self {
            name: name.into(),
            damage_bonus,
        })
    }

    /// Print a human-readable description
    pub fn display_info(&self) {
        println!("Weapon: {} (+{} damage)", self.name, self.damage_bonus);
    }

    /// Common weapon: Iron Sword
    pub fn iron_sword() -> Self {
        Self {
            name: "Iron Sword".to_string(),
            damage_bonus: 10,
        }
    }

    /// Common weapon: Magic Staff
    pub fn magic_staff() -> Self {
        Self {
            name: "Magic Staff".to_string(),
            damage_bonus: 15,
        }
    }

    /// Common weapon: Steel Dagger
    pub fn steel_dagger() -> Self {
        Self {
            name: "Steel Dagger".to_string(),
            damage_bonus: 8,
        }
    }

    /// Common weapon: War Hammer
    pub fn war_hammer() -> Self {
        Self {
            name: "War Hammer".to_string(),
            damage_bonus: 20,
        }
    }
}
