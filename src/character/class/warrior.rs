//! Warrior - tough front-line fighter, strength-driven

use serde::{Deserialize, Serialize};

use crate::character::class::CharacterClass;
use crate::character::player::{Player, PlayerCharacter};
use crate::character::Combatant;
use crate::combat::constants::{WARRIOR_HEALTH, WARRIOR_MAGIC, WARRIOR_STRENGTH};
use crate::combat::damage;
use crate::combat::weapon::Weapon;

/// High health, high strength, barely any magic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warrior {
    player: Player,
}

impl Warrior {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player::new(
                name,
                CharacterClass::Warrior,
                WARRIOR_HEALTH,
                WARRIOR_STRENGTH,
                WARRIOR_MAGIC,
            ),
        }
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.player.equip(weapon);
    }

    pub fn level_up(&mut self) {
        self.player.level_up();
    }

    /// Special ability: a heavy blow dealing strictly more than a normal attack
    pub fn power_strike(&self, target: &mut dyn Combatant) {
        target.take_damage(damage::power_strike(
            self.strength(),
            self.player.base.weapon_bonus(),
        ));
    }
}

impl Combatant for Warrior {
    fn name(&self) -> &str {
        self.player.name()
    }

    fn health(&self) -> u32 {
        self.player.health()
    }

    fn strength(&self) -> i32 {
        self.player.strength()
    }

    fn magic(&self) -> i32 {
        self.player.magic()
    }

    /// Melee: strength is the dominant stat
    fn attack_damage(&self) -> u32 {
        damage::normal_attack(self.player.strength(), self.player.base.weapon_bonus())
    }

    fn take_damage(&mut self, amount: u32) {
        self.player.take_damage(amount);
    }

    fn display_stats(&self) {
        self.player.display_stats();
    }
}

impl PlayerCharacter for Warrior {
    fn character_class(&self) -> CharacterClass {
        self.player.character_class()
    }

    fn level(&self) -> u32 {
        self.player.level()
    }
}
