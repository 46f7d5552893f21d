//! Headless skirmish runner - pits a full party against a seeded raider band
//!
//! Runs a fixed number of rounds, mixing normal attacks and special abilities,
//! then reports the state of both sides.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use emberhold::character::{Character, Combatant, Mage, PlayerCharacter, Rogue, Warrior};
use emberhold::combat::Weapon;

const ROUNDS: u32 = 12;
const RAIDER_COUNT: usize = 5;
const SEED: u64 = 42;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Emberhold Skirmish ===\n");

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);

    let mut warrior = Warrior::new("Brakka");
    warrior.equip(Weapon::iron_sword());
    let mut mage = Mage::new("Selvene");
    let mut rogue = Rogue::new("Whisper");
    rogue.equip(Weapon::steel_dagger());

    let mut raiders: Vec<Character> = (0..RAIDER_COUNT)
        .map(|i| {
            let health = rng.gen_range(60..=120);
            let strength = rng.gen_range(5..12);
            Character::new(format!("Raider_{}", i), health, strength, 0)
        })
        .collect();

    tracing::info!(raiders = raiders.len(), "skirmish start");

    for round in 1..=ROUNDS {
        let standing = raiders.iter().filter(|r| !r.is_defeated()).count();
        if standing == 0 {
            println!("All raiders down after {} rounds\n", round - 1);
            break;
        }
        println!("-- Round {} ({} raiders standing)", round, standing);

        // Party member acts, occasionally leading with their special
        let target = raiders
            .iter_mut()
            .filter(|r| !r.is_defeated())
            .nth(rng.gen_range(0..standing))
            .unwrap();
        let use_special = rng.gen_bool(0.3);
        match rng.gen_range(0..3) {
            0 => {
                if use_special {
                    println!("{} uses Power Strike on {}", warrior.name(), target.name);
                    warrior.power_strike(target);
                } else {
                    warrior.attack(target);
                }
            }
            1 => {
                if use_special {
                    println!("{} hurls a Fireball at {}", mage.name(), target.name);
                    mage.fireball(target);
                } else {
                    mage.attack(target);
                }
            }
            _ => {
                if use_special {
                    println!("{} lands a Sneak Attack on {}", rogue.name(), target.name);
                    rogue.sneak_attack(target);
                } else {
                    rogue.attack(target);
                }
            }
        }

        // A surviving raider hits back at a random party member
        if let Some(raider) = raiders.iter().find(|r| !r.is_defeated()) {
            match rng.gen_range(0..3) {
                0 => raider.attack(&mut warrior),
                1 => raider.attack(&mut mage),
                _ => raider.attack(&mut rogue),
            }
        }
    }

    println!("\n=== Party report ===");
    let party: Vec<&dyn PlayerCharacter> = vec![&warrior, &mage, &rogue];
    for member in &party {
        println!("  {} ({})", member.name(), member.character_class());
        member.display_stats();
    }

    println!("\n=== Raider report ===");
    for raider in &raiders {
        raider.display_stats();
        if raider.is_defeated() {
            println!("  {} is defeated", raider.name);
        }
    }

    tracing::info!("skirmish complete");
}
