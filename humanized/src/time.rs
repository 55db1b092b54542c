//! Time units and compact duration strings
//!
//! Months and years are fixed-length approximations: a month is 30 days and a
//! year is 12 months (360 days). Nothing here is calendar-aware.
//!
//! Duration strings use the form `<number><unit>` (e.g. "90s", "2m", "18mo")
//! and are used by table files and the command line.

use std::fmt;
use std::time::Duration;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds per day
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Seconds per week
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;

/// Seconds per month (30 days)
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;

/// Seconds per year (12 months)
pub const SECONDS_PER_YEAR: u64 = 12 * SECONDS_PER_MONTH;

pub const NANOSECOND: Duration = Duration::from_nanos(1);
pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(SECONDS_PER_MINUTE);
pub const HOUR: Duration = Duration::from_secs(SECONDS_PER_HOUR);
pub const DAY: Duration = Duration::from_secs(SECONDS_PER_DAY);
pub const WEEK: Duration = Duration::from_secs(SECONDS_PER_WEEK);
pub const MONTH: Duration = Duration::from_secs(SECONDS_PER_MONTH);
pub const YEAR: Duration = Duration::from_secs(SECONDS_PER_YEAR);

/// Ten years; the start of the "long time" bucket in the built-in tables.
pub const LONG_TIME: Duration = Duration::from_secs(10 * SECONDS_PER_YEAR);

/// Spelling of `Duration::MAX` in duration strings
pub const MAX_KEYWORD: &str = "max";

/// Maximum length of a duration string in bytes.
///
/// The longest string `format_duration` produces is one nanosecond short of
/// `Duration::MAX` written in nanoseconds: 29 digits plus "ns".
pub const MAX_DURATION_LENGTH: usize = 32;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Whole-second units, largest first. `format_duration` picks the first one
/// that divides the value exactly.
const SECOND_UNITS: &[(&str, u64)] = &[
    ("y", SECONDS_PER_YEAR),
    ("mo", SECONDS_PER_MONTH),
    ("w", SECONDS_PER_WEEK),
    ("d", SECONDS_PER_DAY),
    ("h", SECONDS_PER_HOUR),
    ("m", SECONDS_PER_MINUTE),
    ("s", 1),
];

/// Error for duration strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// Input is empty or whitespace
    Empty,
    /// Input exceeds `MAX_DURATION_LENGTH`
    TooLong,
    /// The numeric part is missing or not a number
    InvalidNumber,
    /// The unit suffix is missing or unknown
    InvalidUnit(String),
    /// The value does not fit in a `Duration`
    Overflow,
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "duration is empty"),
            Self::TooLong => write!(
                f,
                "duration is longer than {} characters",
                MAX_DURATION_LENGTH
            ),
            Self::InvalidNumber => write!(f, "duration has no valid number"),
            Self::InvalidUnit(unit) if unit.is_empty() => write!(f, "duration has no unit"),
            Self::InvalidUnit(unit) => write!(f, "unknown duration unit '{}'", unit),
            Self::Overflow => write!(f, "duration is too large"),
        }
    }
}

impl std::error::Error for DurationError {}

/// Parse a compact duration string
///
/// Format: `<number><unit>` where unit is one of `ns`, `us`, `ms`, `s`, `m`
/// (minutes), `h`, `d`, `w`, `mo` (30 days) or `y` (360 days). The keyword
/// `max` (alias `inf`) yields `Duration::MAX`, the catch-all threshold.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use humanized::time::parse_duration;
///
/// assert_eq!(parse_duration("90s"), Ok(Duration::from_secs(90)));
/// assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
/// assert_eq!(parse_duration("max"), Ok(Duration::MAX));
/// assert!(parse_duration("10x").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    if input.len() > MAX_DURATION_LENGTH {
        return Err(DurationError::TooLong);
    }
    if input == MAX_KEYWORD || input == "inf" {
        return Ok(Duration::MAX);
    }

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (number_str, unit) = input.split_at(split);
    if number_str.is_empty() {
        return Err(DurationError::InvalidNumber);
    }
    // All digits at this point, so a parse failure can only mean overflow
    let number: u128 = number_str.parse().map_err(|_| DurationError::Overflow)?;

    let nanos_per_unit: u128 = match unit {
        "ns" => 1,
        "us" => 1_000,
        "ms" => 1_000_000,
        _ => 0,
    };
    if nanos_per_unit != 0 {
        let nanos = number
            .checked_mul(nanos_per_unit)
            .ok_or(DurationError::Overflow)?;
        return duration_from_nanos(nanos);
    }

    let seconds_per_unit = match unit {
        "s" => 1,
        "m" => SECONDS_PER_MINUTE,
        "h" => SECONDS_PER_HOUR,
        "d" => SECONDS_PER_DAY,
        "w" => SECONDS_PER_WEEK,
        "mo" => SECONDS_PER_MONTH,
        "y" => SECONDS_PER_YEAR,
        other => return Err(DurationError::InvalidUnit(other.to_string())),
    };

    u64::try_from(number)
        .ok()
        .and_then(|n| n.checked_mul(seconds_per_unit))
        .map(Duration::from_secs)
        .ok_or(DurationError::Overflow)
}

/// Build a `Duration` from a nanosecond count wider than `u64`
fn duration_from_nanos(nanos: u128) -> Result<Duration, DurationError> {
    let secs = u64::try_from(nanos / NANOS_PER_SECOND).map_err(|_| DurationError::Overflow)?;
    // The remainder is below one billion
    Ok(Duration::new(secs, (nanos % NANOS_PER_SECOND) as u32))
}

/// Format a duration in the largest unit that represents it exactly
///
/// Output is accepted by [`parse_duration`]: `Duration::MAX` becomes "max",
/// 540 days becomes "18mo", 90 seconds stays "90s".
pub fn format_duration(duration: Duration) -> String {
    if duration == Duration::MAX {
        return MAX_KEYWORD.to_string();
    }

    if duration.subsec_nanos() != 0 {
        let nanos = duration.as_nanos();
        return if nanos % 1_000_000 == 0 {
            format!("{}ms", nanos / 1_000_000)
        } else if nanos % 1_000 == 0 {
            format!("{}us", nanos / 1_000)
        } else {
            format!("{}ns", nanos)
        };
    }

    let secs = duration.as_secs();
    if secs == 0 {
        return "0s".to_string();
    }
    for (suffix, unit) in SECOND_UNITS {
        if secs % unit == 0 {
            return format!("{}{}", secs / unit, suffix);
        }
    }
    format!("{}s", secs)
}

/// Serde adapter storing a `Duration` as a duration string
///
/// Use with `#[serde(with = "humanized::time::duration_string")]`.
pub mod duration_string {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_duration, parse_duration};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_duration(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let input = String::deserialize(deserializer)?;
        parse_duration(&input).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_relationships() {
        assert_eq!(MINUTE, 60 * SECOND);
        assert_eq!(HOUR, 60 * MINUTE);
        assert_eq!(DAY, 24 * HOUR);
        assert_eq!(WEEK, 7 * DAY);
        assert_eq!(MONTH, 30 * DAY);
        assert_eq!(YEAR, 12 * MONTH);
        assert_eq!(LONG_TIME, 10 * YEAR);
        assert_eq!(SECOND, 1_000_000_000 * NANOSECOND);
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("5ns"), Ok(Duration::from_nanos(5)));
        assert_eq!(parse_duration("5us"), Ok(Duration::from_micros(5)));
        assert_eq!(parse_duration("5ms"), Ok(Duration::from_millis(5)));
        assert_eq!(parse_duration("5s"), Ok(5 * SECOND));
        assert_eq!(parse_duration("5m"), Ok(5 * MINUTE));
        assert_eq!(parse_duration("5h"), Ok(5 * HOUR));
        assert_eq!(parse_duration("5d"), Ok(5 * DAY));
        assert_eq!(parse_duration("5w"), Ok(5 * WEEK));
        assert_eq!(parse_duration("18mo"), Ok(18 * MONTH));
        assert_eq!(parse_duration("10y"), Ok(LONG_TIME));
    }

    #[test]
    fn test_parse_duration_max() {
        assert_eq!(parse_duration("max"), Ok(Duration::MAX));
        assert_eq!(parse_duration("inf"), Ok(Duration::MAX));
        assert_eq!(parse_duration("  max  "), Ok(Duration::MAX));
    }

    #[test]
    fn test_parse_duration_zero() {
        assert_eq!(parse_duration("0s"), Ok(Duration::ZERO));
        assert_eq!(parse_duration("0y"), Ok(Duration::ZERO));
    }

    #[test]
    fn test_parse_duration_empty() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationError::Empty));
    }

    #[test]
    fn test_parse_duration_too_long() {
        let input = format!("{}s", "1".repeat(MAX_DURATION_LENGTH));
        assert_eq!(parse_duration(&input), Err(DurationError::TooLong));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert_eq!(parse_duration("m"), Err(DurationError::InvalidNumber));
        assert_eq!(parse_duration("-5s"), Err(DurationError::InvalidNumber));
        assert_eq!(
            parse_duration("10x"),
            Err(DurationError::InvalidUnit("x".to_string()))
        );
        assert_eq!(
            parse_duration("10"),
            Err(DurationError::InvalidUnit(String::new()))
        );
        assert_eq!(
            parse_duration("1.5h"),
            Err(DurationError::InvalidUnit(".5h".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert_eq!(
            parse_duration("99999999999999999999s"),
            Err(DurationError::Overflow)
        );
        assert_eq!(
            parse_duration("18446744073709551615y"),
            Err(DurationError::Overflow)
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(NANOSECOND), "1ns");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1500us");
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(90 * SECOND), "90s");
        assert_eq!(format_duration(2 * MINUTE), "2m");
        assert_eq!(format_duration(2 * WEEK), "2w");
        assert_eq!(format_duration(18 * MONTH), "18mo");
        assert_eq!(format_duration(2 * YEAR), "2y");
        assert_eq!(format_duration(Duration::MAX), "max");
    }

    #[test]
    fn test_format_then_parse() {
        for duration in [SECOND, 90 * SECOND, DAY, 18 * MONTH, LONG_TIME, Duration::MAX] {
            assert_eq!(parse_duration(&format_duration(duration)), Ok(duration));
        }
    }

    #[test]
    fn test_format_then_parse_beyond_u64_nanos() {
        for duration in [
            Duration::new(20_000_000_000, 1),
            Duration::new(20_000_000_000, 1_000),
            Duration::new(20_000_000_000, 1_000_000),
            Duration::MAX - NANOSECOND,
        ] {
            let formatted = format_duration(duration);
            assert!(formatted.len() <= MAX_DURATION_LENGTH, "{}", formatted);
            assert_eq!(parse_duration(&formatted), Ok(duration), "{}", formatted);
        }
    }

    #[test]
    fn test_parse_sub_second_overflow() {
        // One nanosecond past Duration::MAX
        assert_eq!(
            parse_duration("18446744073709551616000000000ns"),
            Err(DurationError::Overflow)
        );
        assert_eq!(
            parse_duration("18446744073709551616000000ms"),
            Err(DurationError::Overflow)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DurationError::Empty.to_string(), "duration is empty");
        assert_eq!(
            DurationError::InvalidUnit("x".to_string()).to_string(),
            "unknown duration unit 'x'"
        );
        assert_eq!(
            DurationError::InvalidUnit(String::new()).to_string(),
            "duration has no unit"
        );
    }
}
