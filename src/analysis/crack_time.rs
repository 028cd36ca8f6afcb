//! Crack-time projection and duration formatting.
//!
//! Uses an average-case brute-force model: the attacker is expected to
//! find the password after searching half of the keyspace.

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;
/// Upper bound for the centuries unit (100 centuries).
const EONS: f64 = 315_360_000_000.0;

/// Display text for a time under one second.
pub const INSTANT: &str = "Instant";

/// Expected seconds to brute-force `entropy_bits` at `guesses_per_second`.
///
/// Returns `None` when there is no keyspace to search.
pub fn crack_seconds(entropy_bits: f64, guesses_per_second: f64) -> Option<f64> {
    if entropy_bits <= 0.0 {
        return None;
    }
    let average_guesses = (entropy_bits - 1.0).exp2();
    Some(average_guesses / guesses_per_second)
}

/// Formats a projected crack time for display.
pub fn crack_time(entropy_bits: f64, guesses_per_second: f64) -> String {
    match crack_seconds(entropy_bits, guesses_per_second) {
        Some(seconds) => format_time(seconds),
        None => INSTANT.to_owned(),
    }
}

/// Formats seconds as a coarse, ceiling-rounded duration.
///
/// Units are always plural, so one hour reads "1 hours".
pub fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        return INSTANT.to_owned();
    }

    let (unit_seconds, unit) = if seconds < MINUTE {
        (1.0, "seconds")
    } else if seconds < HOUR {
        (MINUTE, "minutes")
    } else if seconds < DAY {
        (HOUR, "hours")
    } else if seconds < YEAR {
        (DAY, "days")
    } else if seconds < CENTURY {
        (YEAR, "years")
    } else if seconds < EONS {
        (CENTURY, "centuries")
    } else {
        return "Eons".to_owned();
    };

    format!("{} {}", (seconds / unit_seconds).ceil(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_time(0.0), "Instant");
        assert_eq!(format_time(0.5), "Instant");
        assert_eq!(format_time(1.0), "1 seconds");
        assert_eq!(format_time(59.9), "60 seconds");
        assert_eq!(format_time(60.0), "1 minutes");
        assert_eq!(format_time(61.0), "2 minutes");
        assert_eq!(format_time(3_600.0), "1 hours");
        assert_eq!(format_time(86_399.0), "24 hours");
        assert_eq!(format_time(86_400.0), "1 days");
        assert_eq!(format_time(31_536_000.0), "1 years");
        assert_eq!(format_time(3_153_600_000.0), "1 centuries");
        assert_eq!(format_time(315_359_999_999.0), "100 centuries");
        assert_eq!(format_time(315_360_000_000.0), "Eons");
    }

    #[test]
    fn test_non_finite_is_eons() {
        assert_eq!(format_time(f64::INFINITY), "Eons");
        assert_eq!(format_time(f64::NAN), "Eons");
    }

    #[test]
    fn test_zero_entropy_is_instant() {
        assert_eq!(crack_seconds(0.0, 1e4), None);
        assert_eq!(crack_time(0.0, 1.0), "Instant");
        assert_eq!(crack_time(-3.0, 1e-9), "Instant");
    }

    #[test]
    fn test_average_case_halves_keyspace() {
        // 2^20 / 2 guesses at 2^10 per second
        let seconds = crack_seconds(20.0, 1024.0).unwrap();
        assert!((seconds - 512.0).abs() < 1e-9);
        assert_eq!(crack_time(20.0, 1024.0), "9 minutes");
    }

    #[test]
    fn test_huge_entropy_is_eons() {
        assert_eq!(crack_time(2_000.0, 1e10), "Eons");
    }
}
