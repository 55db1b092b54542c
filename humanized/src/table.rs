//! Validated magnitude tables
//!
//! A [`MagnitudeTable`] is an immutable, ascending list of
//! [`RelTimeMagnitude`] rules. Construction checks the invariants the
//! formatter relies on, so a table that exists is always usable:
//!
//! - at least one rule
//! - thresholds strictly ascending
//! - every divisor non-zero
//! - the last threshold is `Duration::MAX`, so every difference has a rule

use std::fmt;
use std::ops::Index;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::magnitude::RelTimeMagnitude;

/// Invariant violations detected while building a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no rules
    Empty,
    /// The rule at `index` does not have a larger threshold than its predecessor
    NotAscending { index: usize },
    /// The rule at `index` divides by zero
    ZeroDivisor { index: usize },
    /// The last threshold is not `Duration::MAX`
    Unbounded,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "magnitude table is empty"),
            Self::NotAscending { index } => write!(
                f,
                "magnitude {} threshold is not greater than the previous threshold",
                index
            ),
            Self::ZeroDivisor { index } => write!(f, "magnitude {} has a zero divisor", index),
            Self::Unbounded => write!(f, "last magnitude threshold must be \"max\""),
        }
    }
}

impl std::error::Error for TableError {}

/// An ordered, validated set of magnitude rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<RelTimeMagnitude>",
    into = "Vec<RelTimeMagnitude>"
)]
pub struct MagnitudeTable {
    magnitudes: Box<[RelTimeMagnitude]>,
}

impl MagnitudeTable {
    /// Build a table, checking every invariant
    ///
    /// # Errors
    ///
    /// Returns the first `TableError` found, scanning rules in order.
    pub fn new(magnitudes: Vec<RelTimeMagnitude>) -> Result<Self, TableError> {
        validate(&magnitudes)?;
        Ok(Self {
            magnitudes: magnitudes.into_boxed_slice(),
        })
    }

    /// Rules in ascending threshold order
    pub fn magnitudes(&self) -> &[RelTimeMagnitude] {
        &self.magnitudes
    }

    /// Number of rules (never zero)
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RelTimeMagnitude> {
        self.magnitudes.iter()
    }

    /// Index of the rule that formats `diff`
    ///
    /// Binary search for the first rule whose threshold is strictly greater
    /// than `diff`. A difference at or beyond every threshold falls back to
    /// the last rule.
    pub fn select(&self, diff: Duration) -> usize {
        let index = self
            .magnitudes
            .partition_point(|magnitude| magnitude.threshold <= diff);
        index.min(self.magnitudes.len() - 1)
    }

    /// The rule that formats `diff`
    pub fn magnitude_for(&self, diff: Duration) -> &RelTimeMagnitude {
        &self.magnitudes[self.select(diff)]
    }
}

impl Index<usize> for MagnitudeTable {
    type Output = RelTimeMagnitude;

    fn index(&self, index: usize) -> &Self::Output {
        &self.magnitudes[index]
    }
}

impl<'a> IntoIterator for &'a MagnitudeTable {
    type Item = &'a RelTimeMagnitude;
    type IntoIter = std::slice::Iter<'a, RelTimeMagnitude>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<RelTimeMagnitude>> for MagnitudeTable {
    type Error = TableError;

    fn try_from(magnitudes: Vec<RelTimeMagnitude>) -> Result<Self, Self::Error> {
        Self::new(magnitudes)
    }
}

impl TryFrom<&[RelTimeMagnitude]> for MagnitudeTable {
    type Error = TableError;

    fn try_from(magnitudes: &[RelTimeMagnitude]) -> Result<Self, Self::Error> {
        Self::new(magnitudes.to_vec())
    }
}

impl From<MagnitudeTable> for Vec<RelTimeMagnitude> {
    fn from(table: MagnitudeTable) -> Self {
        table.magnitudes.into_vec()
    }
}

/// Check table invariants without building a table
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn validate(magnitudes: &[RelTimeMagnitude]) -> Result<(), TableError> {
    let Some(last) = magnitudes.last() else {
        return Err(TableError::Empty);
    };

    for (index, magnitude) in magnitudes.iter().enumerate() {
        if magnitude.divisor.is_zero() {
            return Err(TableError::ZeroDivisor { index });
        }
        if index > 0 && magnitude.threshold <= magnitudes[index - 1].threshold {
            return Err(TableError::NotAscending { index });
        }
    }

    if last.threshold != Duration::MAX {
        return Err(TableError::Unbounded);
    }
    Ok(())
}
