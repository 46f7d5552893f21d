pub mod error;

pub use error::{EmberError, Result};
