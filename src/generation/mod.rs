//! Password construction.
//!
//! This module turns generation settings into a password: it assembles
//! the character pool, blends in optional seed material, and fills the
//! remaining positions with secure random draws.

mod builder;
mod pool;
mod settings;

pub use builder::{seed_char_budget, BuildError, PasswordBuilder};
pub use pool::CharacterPool;
pub use settings::{
    CharacterClass, GenerationSettings, ValidationError, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH,
};
