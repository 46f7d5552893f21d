//! Character hierarchy integration tests
//!
//! Verifies the three-level chain (Character -> Player -> concrete class) and
//! that polymorphic dispatch through `Combatant` / `PlayerCharacter` behaves
//! the same across every type. `Weapon` implements neither trait, so the
//! composition boundary is enforced at compile time; these tests exercise the
//! runtime contracts.

use emberhold::character::{
    Character, CharacterClass, Combatant, Mage, Player, PlayerCharacter, Rogue, Warrior,
};
use emberhold::combat::Weapon;

#[test]
fn test_character_construction() {
    let victim = Character::new("BaseChar", 100, 10, 5);
    assert_eq!(victim.name, "BaseChar");
    assert_eq!(victim.health, 100);
    assert_eq!(victim.strength, 10);
    assert_eq!(victim.magic, 5);
}

#[test]
fn test_class_baselines() {
    let warrior = Warrior::new("TestWarrior");
    assert!(warrior.health() >= 100, "warriors are tough");
    assert!(warrior.strength() >= 12, "warriors are strong");

    let mage = Mage::new("TestMage");
    assert!(mage.magic() >= 15, "mages are magical");
    assert!(mage.health() >= 50, "mages still get reasonable health");

    let rogue = Rogue::new("TestRogue");
    assert!(rogue.health() >= 70, "rogues get decent health");
}

#[test]
fn test_baselines_within_global_ranges() {
    let party: Vec<Box<dyn PlayerCharacter>> = vec![
        Box::new(Warrior::new("RangeWarrior")),
        Box::new(Mage::new("RangeMage")),
        Box::new(Rogue::new("RangeRogue")),
    ];

    for member in &party {
        assert!((50..=200).contains(&member.health()), "{} health", member.name());
        assert!((5..=30).contains(&member.strength()), "{} strength", member.name());
        assert!((0..=30).contains(&member.magic()), "{} magic", member.name());
    }
}

#[test]
fn test_class_stat_contrasts() {
    let warrior = Warrior::new("ToughWarrior");
    let mage = Mage::new("FrailMage");
    let rogue = Rogue::new("MidRogue");

    assert!(warrior.health() > mage.health());
    assert!(mage.magic() > warrior.magic());

    // No two classes share a full stat line
    let lines = [
        (warrior.health(), warrior.strength(), warrior.magic()),
        (mage.health(), mage.strength(), mage.magic()),
        (rogue.health(), rogue.strength(), rogue.magic()),
    ];
    assert_ne!(lines[0], lines[1]);
    assert_ne!(lines[0], lines[2]);
    assert_ne!(lines[1], lines[2]);
}

/// Every concrete class passes where a Combatant is expected, and every
/// player type passes where a PlayerCharacter is expected
#[test]
fn test_three_level_chain() {
    fn combatant_name(c: &dyn Combatant) -> String {
        c.name().to_string()
    }
    fn player_class(p: &dyn PlayerCharacter) -> CharacterClass {
        p.character_class()
    }

    let warrior = Warrior::new("ChainWarrior");
    let mage = Mage::new("ChainMage");
    let rogue = Rogue::new("ChainRogue");
    let player = Player::new("ChainPlayer", CharacterClass::Rogue, 90, 12, 8);
    let base = Character::new("ChainBase", 100, 10, 5);

    assert_eq!(combatant_name(&warrior), "ChainWarrior");
    assert_eq!(combatant_name(&mage), "ChainMage");
    assert_eq!(combatant_name(&rogue), "ChainRogue");
    assert_eq!(combatant_name(&player), "ChainPlayer");
    assert_eq!(combatant_name(&base), "ChainBase");

    assert_eq!(player_class(&warrior), CharacterClass::Warrior);
    assert_eq!(player_class(&mage), CharacterClass::Mage);
    assert_eq!(player_class(&rogue), CharacterClass::Rogue);
    assert_eq!(player_class(&player), CharacterClass::Rogue);
}

#[test]
fn test_construction_chains_through_player() {
    // Warrior::new -> Player::new -> Character::new must land every field
    let warrior = Warrior::new("SuperTest");
    assert_eq!(warrior.name(), "SuperTest");
    assert!(warrior.health() > 0);
    assert_eq!(warrior.character_class(), CharacterClass::Warrior);
    assert_eq!(warrior.level(), 1);
}

#[test]
fn test_polymorphic_attacks() {
    let party: Vec<Box<dyn Combatant>> = vec![
        Box::new(Warrior::new("PolyWarrior")),
        Box::new(Mage::new("PolyMage")),
        Box::new(Rogue::new("PolyRogue")),
    ];

    for member in &party {
        let mut target = Character::new("PolyTarget", 100, 0, 0);
        member.attack(&mut target);
        let damage = 100 - target.health;
        assert!(
            (5..=50).contains(&damage),
            "{} dealt {} damage",
            member.name(),
            damage
        );
    }
}

#[test]
fn test_polymorphic_take_damage() {
    let mut combatants: Vec<Box<dyn Combatant>> = vec![
        Box::new(Character::new("DamageChar", 100, 10, 5)),
        Box::new(Warrior::new("DamageWarrior")),
        Box::new(Mage::new("DamageMage")),
        Box::new(Rogue::new("DamageRogue")),
    ];

    for combatant in &mut combatants {
        let before = combatant.health();
        combatant.take_damage(15);
        assert_eq!(combatant.health(), before - 15, "{}", combatant.name());
    }
}

#[test]
fn test_zero_damage_is_noop_everywhere() {
    let mut combatants: Vec<Box<dyn Combatant>> = vec![
        Box::new(Character::new("ZeroChar", 100, 10, 5)),
        Box::new(Warrior::new("ZeroWarrior")),
        Box::new(Mage::new("ZeroMage")),
        Box::new(Rogue::new("ZeroRogue")),
    ];

    for combatant in &mut combatants {
        let before = combatant.health();
        combatant.take_damage(0);
        assert_eq!(combatant.health(), before);
    }
}

#[test]
fn test_overkill_clamps_to_zero() {
    let mut victim = Character::new("OverChar", 50, 10, 5);
    victim.take_damage(100);
    assert_eq!(victim.health, 0);
    assert!(victim.is_defeated());
}

#[test]
fn test_display_stats_runs_for_all() {
    let combatants: Vec<Box<dyn Combatant>> = vec![
        Box::new(Character::new("BaseChar", 50, 8, 3)),
        Box::new(Warrior::new("DisplayWarrior")),
        Box::new(Mage::new("DisplayMage")),
        Box::new(Rogue::new("DisplayRogue")),
    ];

    for combatant in &combatants {
        combatant.display_stats();
    }
}

#[test]
fn test_class_labels() {
    assert_eq!(Warrior::new("W").character_class().as_str(), "Warrior");
    assert_eq!(Mage::new("M").character_class().as_str(), "Mage");
    assert_eq!(Rogue::new("R").character_class().as_str(), "Rogue");
}

#[test]
fn test_weapon_is_composition_not_inheritance() {
    // A weapon exists independently of any character and is never a Combatant
    // (it implements neither trait; boxing one as dyn Combatant does not
    // compile). It only influences combat once a character holds it.
    let sword = Weapon::new("Warrior Sword", 15).unwrap();
    let mut warrior = Warrior::new("ArmedWarrior");

    let bare_damage = warrior.attack_damage();
    warrior.equip(sword.clone());
    assert_eq!(warrior.attack_damage(), (bare_damage + 15).min(50));

    // Independent lifetime: the original weapon is untouched
    assert_eq!(sword.damage_bonus, 15);
}

#[test]
fn test_level_progression() {
    let mut rogue = Rogue::new("Climber");
    assert_eq!(rogue.level(), 1);
    rogue.level_up();
    assert_eq!(rogue.level(), 2);
}
