pub mod constants;
pub mod damage;
pub mod weapon;

pub use weapon::Weapon;
