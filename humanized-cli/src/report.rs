//! Turning parsed input into printable output

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use humanized::time::format_duration;
use humanized::{MagnitudeTable, resolve};

use crate::args::Args;
use crate::config::{ConfigError, Profile};
use crate::constants::ERR_MISSING_INSTANT;
use crate::instant::{InstantError, parse_instant};

/// Errors surfaced to the user by the binary
#[derive(Debug)]
pub enum CliError {
    Instant(InstantError),
    Config(ConfigError),
    MissingInstant,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(e) => write!(f, "{}", e),
            Self::Config(e) => write!(f, "{}", e),
            Self::MissingInstant => write!(f, "{}", ERR_MISSING_INSTANT),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Instant(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::MissingInstant => None,
        }
    }
}

impl From<InstantError> for CliError {
    fn from(e: InstantError) -> Self {
        Self::Instant(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Result of describing one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The formatted phrase
    pub phrase: String,
    /// Absolute difference between the instants
    pub diff: Duration,
    /// Index of the selected rule
    pub index: usize,
    /// Quantity substituted for `%d`
    pub quantity: u128,
}

/// Parse the described and reference instants
///
/// `clock` supplies the reference when `--now` is absent.
pub fn instants(
    args: &Args,
    clock: impl FnOnce() -> DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), CliError> {
    let then = args.then.as_deref().ok_or(CliError::MissingInstant)?;
    let then = parse_instant(then)?;
    let now = match args.now.as_deref() {
        Some(now) => parse_instant(now)?,
        None => clock(),
    };
    Ok((then, now))
}

/// Describe `then` relative to `now` with the profile's table and labels
pub fn describe(profile: &Profile, then: DateTime<Utc>, now: DateTime<Utc>) -> Report {
    let resolution = resolve(
        &then,
        &now,
        &profile.past_label,
        &profile.future_label,
        &profile.table,
    );
    Report {
        phrase: resolution.render(),
        diff: resolution.diff,
        index: resolution.index,
        quantity: resolution.quantity(),
    }
}

/// One line per rule: index, range, divisor and template
pub fn list_table(table: &MagnitudeTable) -> Vec<String> {
    let mut lower = Duration::ZERO;
    table
        .iter()
        .enumerate()
        .map(|(index, magnitude)| {
            let range = format!(
                "[{}, {})",
                format_duration(lower),
                format_duration(magnitude.threshold)
            );
            lower = magnitude.threshold;
            format!(
                "{:>2}  {:<14} / {:<5} {}",
                index,
                range,
                format_duration(magnitude.divisor),
                magnitude.template
            )
        })
        .collect()
}
