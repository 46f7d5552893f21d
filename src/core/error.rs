use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmberError {
    #[error("Invalid damage bonus: {0} (must be positive)")]
    InvalidDamageBonus(u32),

    #[error("Unknown character class: {0}")]
    UnknownClass(String),
}

pub type Result<T> = std::result::Result<T, EmberError>;
