//! Password strength analysis.

use super::config::AnalysisConfig;
use super::crack_time::crack_time;
use super::entropy::{base_entropy, Composition};
use super::patterns::{self, Candidate, DetectedPattern};
use super::strength::StrengthLevel;
use serde::Serialize;
use std::sync::LazyLock;

static DEFAULT_ANALYZER: LazyLock<StrengthAnalyzer> = LazyLock::new(StrengthAnalyzer::default);

/// Result of analyzing one password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAnalysis {
    /// Entropy after penalties, rounded to one decimal place.
    pub entropy_bits: f64,
    /// Alphabet size inferred from the password's own characters.
    pub pool_size: usize,
    /// Average crack time against an online attacker.
    pub online_crack_time: String,
    /// Average crack time against an offline attacker.
    pub offline_crack_time: String,
    /// Strength level; `None` when cleared.
    pub strength: Option<StrengthLevel>,
    /// Meter fill percentage; 0 when cleared.
    pub strength_percent: u8,
    /// Penalty applied, at most 25 bits.
    pub penalty_bits: u32,
    /// Patterns found, in detection order.
    pub detected_patterns: Vec<DetectedPattern>,
}

impl StrengthAnalysis {
    /// The blank result shown for an empty password.
    pub fn cleared() -> Self {
        Self {
            entropy_bits: 0.0,
            pool_size: 0,
            online_crack_time: String::new(),
            offline_crack_time: String::new(),
            strength: None,
            strength_percent: 0,
            penalty_bits: 0,
            detected_patterns: Vec::new(),
        }
    }

    /// Returns true for the empty-password result.
    pub fn is_cleared(&self) -> bool {
        self.strength.is_none()
    }
}

/// Estimates password strength against brute-force attackers.
///
/// Holds read-only tables, so one analyzer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StrengthAnalyzer {
    config: AnalysisConfig,
}

impl StrengthAnalyzer {
    /// Creates an analyzer with the given tables.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the analyzer tables.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyzes a password. An empty password yields the cleared result.
    pub fn analyze(&self, password: &str) -> StrengthAnalysis {
        if password.is_empty() {
            return StrengthAnalysis::cleared();
        }

        let length = password.chars().count();
        let pool_size = Composition::of(password).pool_size();
        let base = base_entropy(length, pool_size);

        let hits = patterns::detect(&Candidate::new(password), &self.config);
        let penalty_bits = patterns::total_penalty(&hits);

        let entropy_bits = round_tenth((base - f64::from(penalty_bits)).max(0.0));
        let strength = StrengthLevel::from_entropy(entropy_bits);

        tracing::debug!(
            length,
            pool_size,
            penalty_bits,
            patterns = hits.len(),
            entropy_bits,
            "Analyzed password"
        );

        StrengthAnalysis {
            entropy_bits,
            pool_size,
            online_crack_time: crack_time(entropy_bits, self.config.online_guesses_per_second),
            offline_crack_time: crack_time(entropy_bits, self.config.offline_guesses_per_second),
            strength: Some(strength),
            strength_percent: strength.percent(),
            penalty_bits,
            detected_patterns: hits.into_iter().map(|hit| hit.pattern).collect(),
        }
    }
}

/// Analyzes a password with the built-in tables.
pub fn analyze(password: &str) -> StrengthAnalysis {
    DEFAULT_ANALYZER.analyze(password)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_cleared() {
        let analysis = analyze("");
        assert_eq!(analysis, StrengthAnalysis::cleared());
        assert!(analysis.is_cleared());
        assert_eq!(analysis.entropy_bits, 0.0);
        assert!(analysis.online_crack_time.is_empty());
        assert!(analysis.offline_crack_time.is_empty());
    }

    #[test]
    fn test_password123() {
        let analysis = analyze("password123");

        assert_eq!(analysis.pool_size, 36);
        assert_eq!(
            analysis.detected_patterns,
            vec![
                DetectedPattern::DictionaryWord("password".into()),
                DetectedPattern::Keyboard,
            ]
        );
        assert_eq!(analysis.penalty_bits, 21);
        // 11 * log2(36) = 56.87, minus 21
        assert_eq!(analysis.entropy_bits, 35.9);
        assert!(analysis.strength <= Some(StrengthLevel::Fair));
    }

    #[test]
    fn test_full_pool_sixteen_chars_very_strong() {
        // All 32 symbols plus one of each other class: 26+26+10+32
        let password = "aZ9!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        let analysis = analyze(password);
        assert_eq!(analysis.pool_size, 94);

        // Sixteen chars, 13 of them symbols: 26+26+10+13 = 75
        let sixteen = "aZ9!\"#$%&'()*+,-";
        let analysis = analyze(sixteen);
        assert_eq!(analysis.pool_size, 26 + 26 + 10 + 13);
        assert!(analysis.detected_patterns.is_empty());
        assert_eq!(analysis.strength, Some(StrengthLevel::VeryStrong));
        assert_eq!(analysis.strength_percent, 100);
    }

    #[test]
    fn test_penalty_never_below_zero() {
        let analysis = analyze("aaa");
        assert_eq!(analysis.penalty_bits, 12);
        assert_eq!(analysis.entropy_bits, 2.1);

        let analysis = analyze("111");
        assert_eq!(analysis.entropy_bits, 0.0);
        assert_eq!(analysis.online_crack_time, "Instant");
        assert_eq!(analysis.strength, Some(StrengthLevel::Weak));
    }

    #[test]
    fn test_mixed_case_run_is_not_repetition() {
        for password in ["Gx7#aAa", "Gx7#BBb"] {
            let analysis = analyze(password);
            assert!(analysis.detected_patterns.is_empty(), "{password}");
            assert_eq!(analysis.penalty_bits, 0);
        }
    }

    #[test]
    fn test_penalty_capped() {
        let analysis = analyze("Password1999aaa123");
        assert_eq!(analysis.penalty_bits, 25);
        assert_eq!(analysis.detected_patterns.len(), 4);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let analysis = analyze("Gx7#kP2v");
        let scaled = analysis.entropy_bits * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_crack_times_differ_by_attacker() {
        let analysis = analyze("Gx7#kP2v");
        assert_ne!(analysis.online_crack_time, analysis.offline_crack_time);
    }

    #[test]
    fn test_custom_tables() {
        let mut config = AnalysisConfig::default();
        config.extend(&["gizmo".into()], &[]);
        let analyzer = StrengthAnalyzer::new(config);

        let analysis = analyzer.analyze("GIZMO!x");
        assert_eq!(
            analysis.detected_patterns,
            vec![DetectedPattern::DictionaryWord("gizmo".into())]
        );
        assert_eq!(analysis.penalty_bits, 8);
    }

    #[test]
    fn test_analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StrengthAnalyzer>();
    }
}
