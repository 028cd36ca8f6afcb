//! Generation settings and precondition checks.
//!
//! Settings arrive from the presentation layer as plain values and are
//! validated before the builder runs.

use super::pool::CharacterPool;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shortest password the builder will be asked for.
pub const MIN_LENGTH: usize = 4;
/// Longest password the builder will be asked for.
pub const MAX_LENGTH: usize = 64;
/// Length used when none is configured.
pub const DEFAULT_LENGTH: usize = 16;

/// A selectable character class.
///
/// Variant order is the order alphabets are concatenated into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Returns the alphabet for this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        }
    }
}

/// Settings for a single password generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Memorable word embedded into the password.
    pub word: Option<String>,
    /// Memorable number embedded after the word.
    pub number_seed: Option<String>,
    /// Extra symbols appended to the pool.
    pub custom_symbols: Option<String>,
    /// Exact password length in characters.
    pub length: usize,
    /// Enabled character classes.
    pub classes: BTreeSet<CharacterClass>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            word: None,
            number_seed: None,
            custom_symbols: None,
            length: DEFAULT_LENGTH,
            classes: CharacterClass::ALL.into_iter().collect(),
        }
    }
}

impl GenerationSettings {
    /// Creates settings with every class enabled and the given length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Returns the seed material: word followed by number.
    pub fn seed_material(&self) -> String {
        let word = self.word.as_deref().unwrap_or_default();
        let number = self.number_seed.as_deref().unwrap_or_default();
        format!("{word}{number}")
    }

    /// Checks the settings before handing them to the builder.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.classes.is_empty() {
            return Err(ValidationError::NoClassSelected);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ValidationError::LengthOutOfRange(self.length));
        }
        if let Some(number) = self.number_seed.as_deref() {
            if !number.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::InvalidNumberSeed);
            }
        }
        // Guard only: every current class alphabet is non-empty, so this
        // fires only if a class with an empty alphabet is ever added.
        if CharacterPool::from_settings(self).is_empty() {
            return Err(ValidationError::EmptyPool);
        }
        Ok(())
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("at least one character class must be selected")]
    NoClassSelected,
    #[error("length {0} out of range (must be 4-64)")]
    LengthOutOfRange(usize),
    #[error("number seed must contain only digits")]
    InvalidNumberSeed,
    /// The pool came out empty. Unreachable with the current classes
    /// once `NoClassSelected` has passed; kept as a guard.
    #[error("selected classes and custom symbols produce an empty pool")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        assert!(GenerationSettings::default().validate().is_ok());
    }

    #[test]
    fn test_no_class_invalid() {
        let settings = GenerationSettings {
            classes: BTreeSet::new(),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::NoClassSelected));
    }

    #[test]
    fn test_empty_pool_guard_is_preempted() {
        for class in CharacterClass::ALL {
            assert!(!class.alphabet().is_empty(), "{class:?}");
        }
        let settings = GenerationSettings {
            classes: BTreeSet::new(),
            custom_symbols: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::NoClassSelected));
    }

    #[test]
    fn test_length_bounds() {
        assert!(GenerationSettings::with_length(4).validate().is_ok());
        assert!(GenerationSettings::with_length(64).validate().is_ok());
        assert_eq!(
            GenerationSettings::with_length(3).validate(),
            Err(ValidationError::LengthOutOfRange(3))
        );
        assert_eq!(
            GenerationSettings::with_length(65).validate(),
            Err(ValidationError::LengthOutOfRange(65))
        );
    }

    #[test]
    fn test_number_seed_must_be_digits() {
        let settings = GenerationSettings {
            number_seed: Some("12a".into()),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(ValidationError::InvalidNumberSeed));
    }

    #[test]
    fn test_seed_material_order() {
        let settings = GenerationSettings {
            word: Some("tiger".into()),
            number_seed: Some("42".into()),
            ..Default::default()
        };
        assert_eq!(settings.seed_material(), "tiger42");
        assert_eq!(GenerationSettings::default().seed_material(), "");
    }

    #[test]
    fn test_class_order() {
        let mut classes = BTreeSet::new();
        classes.insert(CharacterClass::Symbols);
        classes.insert(CharacterClass::Lowercase);
        classes.insert(CharacterClass::Digits);

        let ordered: Vec<_> = classes.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                CharacterClass::Lowercase,
                CharacterClass::Digits,
                CharacterClass::Symbols
            ]
        );
    }
}
