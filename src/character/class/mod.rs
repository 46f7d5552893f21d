//! Concrete character classes and the class label they carry

pub mod mage;
pub mod rogue;
pub mod warrior;

pub use mage::Mage;
pub use rogue::Rogue;
pub use warrior::Warrior;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EmberError;

/// Class label carried by every player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

impl CharacterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = EmberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warrior" => Ok(Self::Warrior),
            "Mage" => Ok(Self::Mage),
            "Rogue" => Ok(Self::Rogue),
            other => Err(EmberError::UnknownClass(other.to_string())),
        }
    }
}
