//! Password strength estimation.
//!
//! Estimates brute-force entropy from a password's own character
//! composition, subtracts penalties for common weaknesses, and projects
//! average crack times for an online and an offline attacker.

mod analyzer;
mod config;
mod crack_time;
mod entropy;
mod patterns;
mod strength;

pub use analyzer::{analyze, StrengthAnalysis, StrengthAnalyzer};
pub use config::{AnalysisConfig, OFFLINE_GUESSES_PER_SECOND, ONLINE_GUESSES_PER_SECOND};
pub use crack_time::{crack_seconds, crack_time, format_time};
pub use entropy::{base_entropy, Composition};
pub use patterns::{DetectedPattern, PatternHit, MAX_PENALTY_BITS};
pub use strength::StrengthLevel;
