//! Seeded Password Generation Library
//!
//! Generates passwords that blend user-chosen memorable text with
//! cryptographically secure randomness, and estimates how long any
//! password would resist a brute-force attacker.
//!
//! # Architecture
//!
//! ```text
//! settings → generation ──→ password ──→ analysis → strength report
//!                ↑
//!              random (rejection sampling, Fisher–Yates)
//! ```
//!
//! # Design Principles
//!
//! - **Exact length**: generated passwords always have the requested length
//! - **Random floor**: seed text fills at most 60% of a password
//! - **Unbiased selection**: rejection sampling over a ChaCha20 CSPRNG
//! - **Brute-force model only**: entropy is estimated from character classes,
//!   minus penalties for common words and patterns
//!
//! # Example
//!
//! ```no_run
//! use seedpass::{analyze, GenerationSettings, PasswordBuilder};
//!
//! let settings = GenerationSettings {
//!     word: Some("falcon".into()),
//!     number_seed: Some("1987".into()),
//!     ..GenerationSettings::with_length(20)
//! };
//! settings.validate().unwrap();
//!
//! let password = PasswordBuilder::new().build(&settings).unwrap();
//! let report = analyze(&password);
//!
//! println!("{password}: {} bits, {:?}", report.entropy_bits, report.strength);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod generation;
pub mod random;

// Re-export commonly used types at crate root
pub use analysis::{analyze, DetectedPattern, StrengthAnalysis, StrengthAnalyzer, StrengthLevel};
pub use config::FileConfig;
pub use generation::{
    BuildError, CharacterClass, CharacterPool, GenerationSettings, PasswordBuilder,
    ValidationError,
};
pub use random::{RandomError, SecureRandom};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
