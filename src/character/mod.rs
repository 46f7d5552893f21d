//! Character hierarchy: base entity, player layer, concrete classes
//!
//! The hierarchy is three levels deep, expressed through struct embedding and
//! explicit delegation: `Warrior`/`Mage`/`Rogue` wrap a `Player`, which wraps a
//! `Character`. Polymorphism flows through the `Combatant` trait; the player
//! layer adds `PlayerCharacter` on top. `Weapon` implements neither, which is
//! the composition contract: characters HAVE weapons, weapons are not
//! characters.

pub mod class;
pub mod player;

pub use class::{CharacterClass, Mage, Rogue, Warrior};
pub use player::{Player, PlayerCharacter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combat::damage;
use crate::combat::weapon::Weapon;

/// Anything that can fight: attack, soak damage, report stats
pub trait Combatant {
    fn name(&self) -> &str;
    fn health(&self) -> u32;
    fn strength(&self) -> i32;
    fn magic(&self) -> i32;

    /// Damage one normal attack deals (each class derives this from its
    /// dominant stat)
    fn attack_damage(&self) -> u32;

    /// Reduce health; clamps at zero, never underflows
    fn take_damage(&mut self, amount: u32);

    /// Print a human-readable stat line
    fn display_stats(&self);

    /// Strike a target; the damage lands through the target's `take_damage`
    fn attack(&self, target: &mut dyn Combatant) {
        target.take_damage(self.attack_damage());
    }

    /// Defeated once health reaches zero
    fn is_defeated(&self) -> bool {
        self.health() == 0
    }
}

/// Base entity: a name, the three combat stats, and an optional weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub health: u32,
    pub strength: i32,
    pub magic: i32,
    /// Held by composition; its bonus feeds into normal attacks
    pub weapon: Option<Weapon>,
}

impl Character {
    /// Direct construction; negative strength/magic are accepted as-is
    pub fn new(name: impl Into<String>, health: u32, strength: i32, magic: i32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            magic,
            weapon: None,
        }
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn weapon_bonus(&self) -> u32 {
        self.weapon().map(|w| w.damage_bonus).unwrap_or(0)
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn strength(&self) -> i32 {
        self.strength
    }

    fn magic(&self) -> i32 {
        self.magic
    }

    fn attack_damage(&self) -> u32 {
        damage::normal_attack(self.strength, self.weapon_bonus())
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        debug!(name = %self.name, amount, health = self.health, "took damage");
    }

    fn display_stats(&self) {
        println!(
            "{} - HP: {}, STR: {}, MAG: {}",
            self.name, self.health, self.strength, self.magic
        );
    }
}
