//! Parsing instants given on the command line

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::constants::{ERR_INSTANT_EMPTY, ERR_INSTANT_INVALID, ERR_INSTANT_OUT_OF_RANGE};

/// Error for instants that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantError {
    /// Input is empty
    Empty,
    /// Neither an RFC 3339 timestamp nor an integer
    Invalid(String),
    /// Unix seconds outside chrono's representable range
    OutOfRange(i64),
}

impl fmt::Display for InstantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "{}", ERR_INSTANT_EMPTY),
            Self::Invalid(input) => write!(f, "'{}': {}", input, ERR_INSTANT_INVALID),
            Self::OutOfRange(secs) => write!(f, "{}: {}", ERR_INSTANT_OUT_OF_RANGE, secs),
        }
    }
}

impl std::error::Error for InstantError {}

/// Parse an RFC 3339 timestamp or integer Unix seconds into a UTC instant
///
/// Offsets in RFC 3339 input only locate the instant; the result is
/// normalized to UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, InstantError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InstantError::Empty);
    }

    if let Ok(secs) = input.parse::<i64>() {
        return Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or(InstantError::OutOfRange(secs));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| InstantError::Invalid(input.to_string()))
}
