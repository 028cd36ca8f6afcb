//! Character pool assembly.

use super::settings::GenerationSettings;

/// Ordered set of unique characters a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Builds the pool for the given settings.
    ///
    /// Enabled class alphabets come first in class order, followed by
    /// any custom symbols not already present.
    pub fn from_settings(settings: &GenerationSettings) -> Self {
        let mut chars: Vec<char> = settings
            .classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect();

        if let Some(custom) = settings.custom_symbols.as_deref() {
            for c in custom.chars() {
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        tracing::debug!(pool_size = chars.len(), "Built character pool");
        Self { chars }
    }

    /// Returns the pool characters in order.
    #[inline]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns true if `c` is in the pool.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
