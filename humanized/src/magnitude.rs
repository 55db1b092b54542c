//! Magnitude rules: one row of a relative-time lookup table

use std::borrow::Cow;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::template::{self, Placeholder};
use crate::time::duration_string;

/// A point at which relative formatting switches to a new template
///
/// A rule covers every difference from the previous rule's threshold
/// (inclusive) up to its own `threshold` (exclusive).
///
/// `template` may contain a `%d`, replaced by the difference divided by
/// `divisor`, and a `%s`, replaced by the directional label. For example, a
/// rule rendering "%d minutes %s" uses a divisor of one minute. Rules with no
/// `%d` conventionally use a divisor of one nanosecond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelTimeMagnitude {
    /// Exclusive upper bound of the differences this rule formats
    #[serde(with = "duration_string")]
    pub threshold: Duration,

    /// Format string with optional `%d` and `%s` placeholders
    pub template: Cow<'static, str>,

    /// Unit the difference is divided by to produce the quantity
    #[serde(with = "duration_string")]
    pub divisor: Duration,
}

impl RelTimeMagnitude {
    /// Create a rule with a static template (usable in `const` tables)
    pub const fn new(threshold: Duration, template: &'static str, divisor: Duration) -> Self {
        Self {
            threshold,
            template: Cow::Borrowed(template),
            divisor,
        }
    }

    /// Create a rule with a template built at runtime
    pub fn with_template(
        threshold: Duration,
        template: impl Into<String>,
        divisor: Duration,
    ) -> Self {
        Self {
            threshold,
            template: Cow::Owned(template.into()),
            divisor,
        }
    }

    /// Quantity shown for `diff`, truncated toward zero
    ///
    /// A zero divisor is rejected when a table is built; if one slips
    /// through a hand-built rule the quantity saturates instead of panicking.
    #[must_use]
    pub fn quantity(&self, diff: Duration) -> u128 {
        diff.as_nanos()
            .checked_div(self.divisor.as_nanos())
            .unwrap_or(u128::MAX)
    }

    /// Placeholders of the template in order of appearance
    #[must_use]
    pub fn placeholders(&self) -> Vec<Placeholder> {
        template::scan(&self.template)
    }

    /// Render the template for `diff` with the given label
    #[must_use]
    pub fn render(&self, diff: Duration, label: &str) -> String {
        template::substitute(&self.template, self.quantity(diff), label)
    }
}
