//! ChaCha-backed random source with rejection sampling.
//!
//! # Sampling Model
//!
//! `random_int` draws the smallest number of bytes that can represent
//! the requested range and rejects any draw at or above the largest
//! multiple of the range that fits in those bytes. The accepted value is
//! then reduced modulo the range, which leaves every outcome equally
//! likely.

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use thiserror::Error;

/// Widest draw in bytes: a full 64-bit range.
const MAX_DRAW_BYTES: usize = 8;

/// Errors that can occur during random selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("empty range: max {max} must be greater than min {min}")]
    EmptyRange { min: i64, max: i64 },
}

/// A cryptographically secure random source.
///
/// Wraps a ChaCha20 CSPRNG seeded from the OS entropy source. Each
/// caller owns its own instance, so no state is shared between
/// concurrent generations.
pub struct SecureRandom {
    /// The underlying ChaCha20 CSPRNG.
    inner: ChaCha20Rng,
    /// Bytes consumed from the CSPRNG.
    bytes_drawn: u64,
    /// Draws discarded by rejection sampling.
    rejections: u64,
}

impl SecureRandom {
    /// Creates a new random source seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::from_seed(seed)
    }

    /// Creates a random source from a known seed.
    ///
    /// Output is fully determined by the seed. Use this only for
    /// reproducible tests and benchmarks, never for real passwords.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            bytes_drawn: 0,
            rejections: 0,
        }
    }

    /// Returns a uniformly distributed integer in `[min, max)`.
    ///
    /// A range of one returns `min` without consuming any randomness.
    pub fn random_int(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if max <= min {
            return Err(RandomError::EmptyRange { min, max });
        }

        let range = max.abs_diff(min);
        if range == 1 {
            return Ok(min);
        }

        let byte_count = bytes_for_range(range);
        let space: u128 = 1u128 << (8 * byte_count);
        let limit = space - space % u128::from(range);

        let mut buf = [0u8; MAX_DRAW_BYTES];
        loop {
            let draw = &mut buf[..byte_count];
            self.inner.fill_bytes(draw);
            self.bytes_drawn += byte_count as u64;

            let value = draw
                .iter()
                .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));

            if value < limit {
                let offset = (value % u128::from(range)) as u64;
                return Ok(min.wrapping_add(offset as i64));
            }

            self.rejections += 1;
            tracing::trace!(range, byte_count, "Rejected biased draw");
        }
    }

    /// Returns a uniformly distributed index in `[0, len)`.
    pub fn random_index(&mut self, len: usize) -> Result<usize, RandomError> {
        let max = i64::try_from(len).unwrap_or(i64::MAX);
        self.random_int(0, max).map(|i| i as usize)
    }

    /// Shuffles the slice in place with a Fisher–Yates pass.
    pub fn shuffle<T>(&mut self, items: &mut [T]) -> Result<(), RandomError> {
        for i in (1..items.len()).rev() {
            let j = self.random_index(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_drawn(&self) -> u64 {
        self.bytes_drawn
    }

    /// Returns the number of draws rejected so far.
    pub fn rejections(&self) -> u64 {
        self.rejections
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}

impl std::fmt::Debug for SecureRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRandom")
            .field("bytes_drawn", &self.bytes_drawn)
            .field("rejections", &self.rejections)
            .finish_non_exhaustive()
    }
}

/// Smallest byte count `n` such that `256^n >= range`.
fn bytes_for_range(range: u64) -> usize {
    let bits = u64::BITS - (range - 1).leading_zeros();
    (bits as usize).div_ceil(8).max(1)
}
