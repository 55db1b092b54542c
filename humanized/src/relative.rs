//! Relative-time formatting
//!
//! Turns the gap between two instants into a phrase like "3 minutes ago" by
//! looking the gap up in a [`MagnitudeTable`] and filling in the selected
//! rule's template.

use std::time::Duration;

use crate::magnitude::RelTimeMagnitude;
use crate::table::MagnitudeTable;
use crate::timestamp::Timestamp;

/// Everything the formatter decided for one pair of instants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'t, 'l> {
    /// Absolute difference between the instants
    pub diff: Duration,
    /// Label chosen by direction
    pub label: &'l str,
    /// Index of the selected rule
    pub index: usize,
    /// The selected rule
    pub magnitude: &'t RelTimeMagnitude,
}

impl Resolution<'_, '_> {
    /// Quantity substituted for `%d`
    pub fn quantity(&self) -> u128 {
        self.magnitude.quantity(self.diff)
    }

    /// Render the selected template
    pub fn render(&self) -> String {
        self.magnitude.render(self.diff, self.label)
    }
}

/// Pick the difference, label and rule for `a` relative to `b`
///
/// If `a` is after `b` the difference is `a - b` and `blbl` applies (`b`
/// came first). Otherwise, including when the instants are equal, the
/// difference is `b - a` and `albl` applies.
pub fn resolve<'t, 'l, T: Timestamp>(
    a: &T,
    b: &T,
    albl: &'l str,
    blbl: &'l str,
    magnitudes: &'t MagnitudeTable,
) -> Resolution<'t, 'l> {
    let (diff, label) = if a > b {
        (a.span_since(b), blbl)
    } else {
        (b.span_since(a), albl)
    };
    let index = magnitudes.select(diff);
    Resolution {
        diff,
        label,
        index,
        magnitude: &magnitudes[index],
    }
}

/// Format the time between two instants with a custom table
///
/// `albl` is applied when `a` precedes `b`, `blbl` when `b` precedes `a`.
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use humanized::{custom_rel_time, default_table};
///
/// let then = SystemTime::UNIX_EPOCH;
/// let now = then + Duration::from_secs(180);
/// assert_eq!(
///     custom_rel_time(then, now, "ago", "from now", default_table()),
///     "3 minutes ago"
/// );
/// ```
pub fn custom_rel_time<T: Timestamp>(
    a: T,
    b: T,
    albl: &str,
    blbl: &str,
    magnitudes: &MagnitudeTable,
) -> String {
    resolve(&a, &b, albl, blbl, magnitudes).render()
}

/// Format the time between two instants with the default table
///
/// ```
/// use std::time::{Duration, SystemTime};
/// use humanized::rel_time;
///
/// let earlier = SystemTime::UNIX_EPOCH;
/// let later = earlier + Duration::from_secs(3 * 7 * 24 * 60 * 60);
/// assert_eq!(rel_time(earlier, later, "earlier", "later"), "3 weeks earlier");
/// assert_eq!(rel_time(later, earlier, "earlier", "later"), "3 weeks later");
/// ```
pub fn rel_time<T: Timestamp>(a: T, b: T, albl: &str, blbl: &str) -> String {
    custom_rel_time(a, b, albl, blbl, crate::default_table())
}

/// Index of the rule `magnitudes` uses for a difference of `diff`
pub fn select_magnitude(magnitudes: &MagnitudeTable, diff: Duration) -> usize {
    magnitudes.select(diff)
}
