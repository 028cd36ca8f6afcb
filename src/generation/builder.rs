//! Seeded password construction.
//!
//! # Seed Blending
//!
//! Seed material (word followed by number) is copied verbatim into the
//! password, but never more than 60% of the target length. The rest is
//! drawn from the character pool, and the combined characters are
//! shuffled so the seed run does not sit at a predictable position.

use super::pool::CharacterPool;
use super::settings::GenerationSettings;
use crate::random::{RandomError, SecureRandom};
use thiserror::Error;

/// Share of the target length that seed material may occupy.
const SEED_SHARE_NUMERATOR: usize = 3;
const SEED_SHARE_DENOMINATOR: usize = 5;

/// Errors that can occur while building a password.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("character pool is empty")]
    EmptyPool,
    #[error("random selection failed: {0}")]
    Random(#[from] RandomError),
}

/// Builds passwords from generation settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordBuilder;

impl PasswordBuilder {
    /// Creates a builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds a password using a fresh OS-seeded random source.
    pub fn build(&self, settings: &GenerationSettings) -> Result<String, BuildError> {
        let mut rng = SecureRandom::from_os_entropy();
        self.build_with(settings, &mut rng)
    }

    /// Builds a password drawing randomness from `rng`.
    ///
    /// The result has exactly `settings.length` characters. Settings are
    /// expected to have passed [`GenerationSettings::validate`]; only an
    /// empty pool is reported here.
    pub fn build_with(
        &self,
        settings: &GenerationSettings,
        rng: &mut SecureRandom,
    ) -> Result<String, BuildError> {
        let pool = CharacterPool::from_settings(settings);
        if pool.is_empty() {
            return Err(BuildError::EmptyPool);
        }

        let length = settings.length;
        let seed = settings.seed_material();

        let mut chars: Vec<char> = Vec::with_capacity(length);

        if seed.is_empty() {
            fill_random(&mut chars, &pool, length, rng)?;
        } else {
            let seed_chars = seed_char_budget(seed.chars().count(), length);
            chars.extend(seed.chars().take(seed_chars));
            fill_random(&mut chars, &pool, length - seed_chars, rng)?;
            rng.shuffle(&mut chars)?;

            tracing::debug!(
                seed_chars,
                random_chars = length - seed_chars,
                "Blended seed material"
            );
        }

        chars.truncate(length);
        Ok(chars.into_iter().collect())
    }
}

/// Number of seed characters allowed for a password of `length`.
pub fn seed_char_budget(seed_len: usize, length: usize) -> usize {
    seed_len.min(length * SEED_SHARE_NUMERATOR / SEED_SHARE_DENOMINATOR)
}

fn fill_random(
    out: &mut Vec<char>,
    pool: &CharacterPool,
    count: usize,
    rng: &mut SecureRandom,
) -> Result<(), RandomError> {
    let alphabet = pool.as_slice();
    for _ in 0..count {
        out.push(alphabet[rng.random_index(alphabet.len())?]);
    }
    Ok(())
}
