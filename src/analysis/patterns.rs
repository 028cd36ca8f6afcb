//! Pattern penalties.
//!
//! Each detector inspects the password independently and reports zero
//! or more hits. Word and keyboard checks are case-insensitive; year and
//! repetition checks see the password as typed. Hits are summed and
//! capped by the analyzer.

use super::config::AnalysisConfig;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// A 19xx or 20xx year anywhere in the password.
static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compilation cannot fail.
    Regex::new("(?:19|20)[0-9]{2}").expect("year pattern is a valid regex")
});

/// Ceiling on the total penalty applied to one password.
pub const MAX_PENALTY_BITS: u32 = 25;

/// Ceiling on the penalty for a single dictionary word.
const MAX_WORD_PENALTY: u32 = 15;
const YEAR_PENALTY: u32 = 8;
const KEYBOARD_PENALTY: u32 = 10;
const REPETITION_PENALTY: u32 = 12;

/// Shortest run of one character counted as repetition.
const REPEAT_RUN: usize = 3;

/// A weakness found in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectedPattern {
    /// Contains a common word.
    DictionaryWord(String),
    /// Contains a 19xx or 20xx year.
    Year,
    /// Contains an adjacent-key or alphabetic run.
    Keyboard,
    /// Repeats a character three or more times in a row.
    Repetition,
}

impl fmt::Display for DetectedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedPattern::DictionaryWord(word) => f.write_str(word),
            DetectedPattern::Year => f.write_str("year pattern"),
            DetectedPattern::Keyboard => f.write_str("keyboard pattern"),
            DetectedPattern::Repetition => f.write_str("repetitive characters"),
        }
    }
}

impl Serialize for DetectedPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A detected pattern and the bits it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    pub pattern: DetectedPattern,
    pub penalty: u32,
}

/// A password as typed, plus its lowercased form.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    raw: &'a str,
    lowered: String,
}

impl<'a> Candidate<'a> {
    /// Prepares a password for detection.
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
        }
    }
}

type Detector = fn(&Candidate<'_>, &AnalysisConfig) -> Vec<PatternHit>;

/// Detectors in reporting order.
const DETECTORS: &[Detector] = &[dictionary_words, year, keyboard, repetition];

/// Runs every detector over the password.
pub fn detect(candidate: &Candidate<'_>, config: &AnalysisConfig) -> Vec<PatternHit> {
    DETECTORS
        .iter()
        .flat_map(|detector| detector(candidate, config))
        .collect()
}

/// Sums hit penalties and applies the cap.
pub fn total_penalty(hits: &[PatternHit]) -> u32 {
    hits.iter()
        .fold(0u32, |acc, hit| acc.saturating_add(hit.penalty))
        .min(MAX_PENALTY_BITS)
}

fn dictionary_words(candidate: &Candidate<'_>, config: &AnalysisConfig) -> Vec<PatternHit> {
    let password = candidate.lowered.as_str();
    config
        .common_words
        .iter()
        .filter(|word| !word.is_empty() && password.contains(word.as_str()))
        .map(|word| {
            let len = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
            PatternHit {
                pattern: DetectedPattern::DictionaryWord(word.clone()),
                penalty: len.saturating_add(3).min(MAX_WORD_PENALTY),
            }
        })
        .collect()
}

fn year(candidate: &Candidate<'_>, _config: &AnalysisConfig) -> Vec<PatternHit> {
    let found = YEAR_PATTERN.is_match(candidate.raw);
    hit_if(found, DetectedPattern::Year, YEAR_PENALTY)
}

fn keyboard(candidate: &Candidate<'_>, config: &AnalysisConfig) -> Vec<PatternHit> {
    let password = candidate.lowered.as_str();
    let found = config
        .keyboard_sequences
        .iter()
        .any(|seq| !seq.is_empty() && password.contains(seq.as_str()));

    hit_if(found, DetectedPattern::Keyboard, KEYBOARD_PENALTY)
}

// Backreferences are unavailable in `regex`, so runs are scanned directly.
fn repetition(candidate: &Candidate<'_>, _config: &AnalysisConfig) -> Vec<PatternHit> {
    let chars: Vec<char> = candidate.raw.chars().collect();
    let found = chars
        .windows(REPEAT_RUN)
        .any(|w| w.iter().all(|&c| c == w[0]));

    hit_if(found, DetectedPattern::Repetition, REPETITION_PENALTY)
}

fn hit_if(found: bool, pattern: DetectedPattern, penalty: u32) -> Vec<PatternHit> {
    if found {
        tracing::trace!(%pattern, penalty, "Pattern detected");
        vec![PatternHit { pattern, penalty }]
    } else {
        Vec::new()
    }
}
