//! Secure random selection primitives.
//!
//! This module provides unbiased integer sampling and shuffling on top
//! of a ChaCha20 CSPRNG seeded from the operating system.

mod secure;

pub use secure::{RandomError, SecureRandom};
