//! Analyzer tables: common words, keyboard runs and guess rates.

use serde::{Deserialize, Serialize};

/// Guesses per second for a rate-limited online attack.
pub const ONLINE_GUESSES_PER_SECOND: f64 = 1e4;
/// Guesses per second for an offline attack on a fast hash.
pub const OFFLINE_GUESSES_PER_SECOND: f64 = 1e10;

const COMMON_WORDS: &[&str] = &[
    "password", "admin", "welcome", "login", "letmein", "qwerty", "monkey", "dragon", "master",
    "shadow", "sunshine", "princess", "football", "baseball", "iloveyou", "trustno1", "superman",
    "hello", "freedom", "whatever", "secret", "access", "summer", "winter",
];

const KEYBOARD_SEQUENCES: &[&str] = &[
    "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def", "qwe",
    "wer", "ert", "rty", "asd", "sdf", "dfg", "zxc", "xcv", "cvb",
];

/// Tables and rates used by the strength analyzer.
///
/// Built once at startup and shared by reference; the analyzer never
/// writes to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Lowercase words penalized when found as substrings.
    pub common_words: Vec<String>,
    /// Lowercase adjacent-key or alphabetic runs.
    pub keyboard_sequences: Vec<String>,
    /// Online attacker guess rate.
    pub online_guesses_per_second: f64,
    /// Offline attacker guess rate.
    pub offline_guesses_per_second: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            common_words: COMMON_WORDS.iter().map(|w| (*w).to_owned()).collect(),
            keyboard_sequences: KEYBOARD_SEQUENCES.iter().map(|s| (*s).to_owned()).collect(),
            online_guesses_per_second: ONLINE_GUESSES_PER_SECOND,
            offline_guesses_per_second: OFFLINE_GUESSES_PER_SECOND,
        }
    }
}

impl AnalysisConfig {
    /// Adds words and sequences on top of the current tables.
    ///
    /// Entries are lowercased; blanks and duplicates are skipped.
    pub fn extend(&mut self, words: &[String], sequences: &[String]) {
        merge_lowercase(&mut self.common_words, words);
        merge_lowercase(&mut self.keyboard_sequences, sequences);
    }

    /// Returns true if both guess rates are finite and positive.
    pub fn rates_valid(&self) -> bool {
        [self.online_guesses_per_second, self.offline_guesses_per_second]
            .iter()
            .all(|r| r.is_finite() && *r > 0.0)
    }
}

fn merge_lowercase(table: &mut Vec<String>, extra: &[String]) {
    for entry in extra {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !table.contains(&entry) {
            table.push(entry);
        }
    }
}
