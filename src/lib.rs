//! Emberhold - RPG character hierarchy and combat model

pub mod character;
pub mod combat;
pub mod core;
