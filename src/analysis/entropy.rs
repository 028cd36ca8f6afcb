//! Brute-force pool inference and base entropy.
//!
//! The pool is inferred from the password itself: each character class
//! that appears contributes its full alphabet size to the search space.

use std::collections::HashSet;

/// Smallest symbol alphabet an attacker is assumed to search.
const MIN_SYMBOL_POOL: usize = 10;

/// Character classes observed in a password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    /// Contains an ASCII lowercase letter.
    pub has_lowercase: bool,
    /// Contains an ASCII uppercase letter.
    pub has_uppercase: bool,
    /// Contains an ASCII digit.
    pub has_digit: bool,
    /// Distinct characters outside the three classes above.
    pub distinct_symbols: usize,
}

impl Composition {
    /// Inspects the password's characters.
    pub fn of(password: &str) -> Self {
        let mut composition = Self::default();
        let mut symbols = HashSet::new();

        for c in password.chars() {
            if c.is_ascii_lowercase() {
                composition.has_lowercase = true;
            } else if c.is_ascii_uppercase() {
                composition.has_uppercase = true;
            } else if c.is_ascii_digit() {
                composition.has_digit = true;
            } else {
                symbols.insert(c);
            }
        }

        composition.distinct_symbols = symbols.len();
        composition
    }

    /// Estimated size of the alphabet an attacker must search.
    pub fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.has_lowercase {
            size += 26;
        }
        if self.has_uppercase {
            size += 26;
        }
        if self.has_digit {
            size += 10;
        }
        if self.distinct_symbols > 0 {
            size += self.distinct_symbols.max(MIN_SYMBOL_POOL);
        }
        size
    }
}

/// Entropy in bits of `length` characters drawn from `pool_size`.
pub fn base_entropy(length: usize, pool_size: usize) -> f64 {
    length as f64 * (pool_size.max(1) as f64).log2()
}
