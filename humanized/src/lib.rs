//! Humanized Relative Time
//!
//! Formats the gap between two instants as a phrase such as "3 minutes ago"
//! or "1 year from now".
//!
//! Formatting is table driven. A [`MagnitudeTable`] lists ascending
//! thresholds; the first rule whose threshold exceeds the difference is
//! selected, the difference is divided by the rule's divisor and the result
//! and a directional label are substituted into the rule's template. The
//! formatter never reads a clock: callers supply both instants.

pub mod locale;
pub mod magnitude;
pub mod relative;
pub mod table;
pub mod template;
pub mod time;
pub mod timestamp;

pub use locale::{CHINESE_MAGNITUDES, DEFAULT_MAGNITUDES, Locale};
pub use magnitude::RelTimeMagnitude;
pub use relative::{Resolution, custom_rel_time, rel_time, resolve, select_magnitude};
pub use table::{MagnitudeTable, TableError};
pub use time::DurationError;
pub use timestamp::Timestamp;

/// Default label when the described instant comes first
pub const DEFAULT_PAST_LABEL: &str = "ago";

/// Default label when the described instant comes second
pub const DEFAULT_FUTURE_LABEL: &str = "from now";

/// The validated default (English) table
pub fn default_table() -> &'static MagnitudeTable {
    Locale::default().table()
}
