//! Player layer: a Character carrying a class label and a level

use serde::{Deserialize, Serialize};

use crate::character::class::CharacterClass;
use crate::character::{Character, Combatant};
use crate::combat::constants::STARTING_LEVEL;
use crate::combat::weapon::Weapon;

/// A Combatant with a class label and a level
pub trait PlayerCharacter: Combatant {
    fn character_class(&self) -> CharacterClass;
    fn level(&self) -> u32;
}

/// Mid-level player abstraction between `Character` and the concrete classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub base: Character,
    pub class: CharacterClass,
    pub level: u32,
}

impl Player {
    /// Chains to `Character::new`; every player starts at level 1
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        health: u32,
        strength: i32,
        magic: i32,
    ) -> Self {
        Self {
            base: Character::new(name, health, strength, magic),
            class,
            level: STARTING_LEVEL,
        }
    }

    pub fn level_up(&mut self) {
        self.level += 1;
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.base.equip(weapon);
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn health(&self) -> u32 {
        self.base.health()
    }

    fn strength(&self) -> i32 {
        self.base.strength()
    }

    fn magic(&self) -> i32 {
        self.base.magic()
    }

    fn attack_damage(&self) -> u32 {
        self.base.attack_damage()
    }

    fn take_damage(&mut self, amount: u32) {
        self.base.take_damage(amount);
    }

    /// Extends the base stat line with class label and level
    fn display_stats(&self) {
        println!(
            "[{} Lv.{}] {} - HP: {}, STR: {}, MAG: {}",
            self.class, self.level, self.base.name, self.base.health, self.base.strength, self.base.magic
        );
    }
}

impl PlayerCharacter for Player {
    fn character_class(&self) -> CharacterClass {
        self.class
    }

    fn level(&self) -> u32 {
        self.level
    }
}
