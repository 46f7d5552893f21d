//! Rogue - moderate stats, strikes from the shadows

use serde::{Deserialize, Serialize};

use crate::character::class::CharacterClass;
use crate::character::player::{Player, PlayerCharacter};
use crate::character::Combatant;
use crate::combat::constants::{ROGUE_HEALTH, ROGUE_MAGIC, ROGUE_STRENGTH};
use crate::combat::damage;
use crate::combat::weapon::Weapon;

/// Balanced melee fighter whose sneak attack always crits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rogue {
    player: Player,
}

impl Rogue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player: Player::new(
                name,
                CharacterClass::Rogue,
                ROGUE_HEALTH,
                ROGUE_STRENGTH,
                ROGUE_MAGIC,
            ),
        }
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.player.equip(weapon);
    }

    pub fn level_up(&mut self) {
        self.player.level_up();
    }

    /// Special ability: a critical hit with a guaranteed damage floor
    pub fn sneak_attack(&self, target: &mut dyn Combatant) {
        target.take_damage(damage::sneak_attack(
            self.strength(),
            self.player.base.weapon_bonus(),
        ));
    }
}

impl Combatant for Rogue {
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

impl PlayerCharacter for Rogue {
    fn character_class(&self) -> CharacterClass {
        self.player.character_class()
    }

    fn level(&self) -> u32 {
        self.player.level()
    }
}
