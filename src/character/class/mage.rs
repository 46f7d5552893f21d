//! Mage - frail spellcaster, magic-driven

use serde::{Deserialize, Serialize};

use crate::character::class::CharacterClass;
use crate::character::player::{Player, PlayerCharacter};
use crate::character::Combatant;
use crate::combat::constants::{MAGE_HEALTH, MAGE_MAGIC, MAGE_STRENGTH};
use crate::combat::damage;
use crate::combat::weapon::Weapon;

/// High magic, low health; attacks with spells instead of muscle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mage {
    player: Player,
}

impl Mage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player::new(
                name,
                CharacterClass::Mage,
                MAGE_HEALTH,
                MAGE_STRENGTH,
                MAGE_MAGIC,
            ),
        }
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.player.equip(weapon);
    }

    pub fn level_up(&mut self) {
        self.player.level_up();
    }

    /// Special ability: a burst of flame in the 10-50 damage band
    pub fn fireball(&self, target: &mut dyn Combatant) {
        target.take_damage(damage::fireball(
            self.magic(),
            self.player.base.weapon_bonus(),
        ));
    }
}

impl Combatant for Mage {
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

    /// Spellcasting: magic is the dominant stat
    fn attack_damage(&self) -> u32 {
        damage::normal_attack(self.player.magic(), self.player.base.weapon_bonus())
    }

    fn take_damage(&mut self, amount: u32) {
        self.player.take_damage(amount);
    }

    fn display_stats(&self) {
        self.player.display_stats();
    }
}

impl PlayerCharacter for Mage {
    fn character_class(&self) -> CharacterClass {
        self.player.character_class()
    }

    fn level(&self) -> u32 {
        self.player.level()
    }
}
