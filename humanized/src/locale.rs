//! Built-in magnitude tables
//!
//! Every built-in table shares the same boundaries and divisors; only the
//! phrase text differs. The boundaries alternate between a singular rule
//! ("1 minute ago", from one to two minutes) and a plural rule that takes
//! over at the next step ("%d minutes ago", from two minutes up to an hour).
//!
//! There is no locale negotiation: callers name the table they want.

use std::sync::LazyLock;
use std::time::Duration;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::magnitude::RelTimeMagnitude;
use crate::table::MagnitudeTable;
use crate::time::{
    DAY, HOUR, LONG_TIME, MINUTE, MONTH, NANOSECOND, SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_WEEK, SECONDS_PER_YEAR, WEEK, YEAR,
};

const TWO_SECONDS: Duration = Duration::from_secs(2);
const TWO_MINUTES: Duration = Duration::from_secs(2 * SECONDS_PER_MINUTE);
const TWO_HOURS: Duration = Duration::from_secs(2 * SECONDS_PER_HOUR);
const TWO_DAYS: Duration = Duration::from_secs(2 * SECONDS_PER_DAY);
const TWO_WEEKS: Duration = Duration::from_secs(2 * SECONDS_PER_WEEK);
const TWO_MONTHS: Duration = Duration::from_secs(2 * SECONDS_PER_MONTH);
const EIGHTEEN_MONTHS: Duration = Duration::from_secs(18 * SECONDS_PER_MONTH);
const TWO_YEARS: Duration = Duration::from_secs(2 * SECONDS_PER_YEAR);

/// English rules, the default table
pub const DEFAULT_MAGNITUDES: &[RelTimeMagnitude] = &[
    RelTimeMagnitude::new(SECOND, "now", SECOND),
    RelTimeMagnitude::new(TWO_SECONDS, "1 second %s", NANOSECOND),
    RelTimeMagnitude::new(MINUTE, "%d seconds %s", SECOND),
    RelTimeMagnitude::new(TWO_MINUTES, "1 minute %s", NANOSECOND),
    RelTimeMagnitude::new(HOUR, "%d minutes %s", MINUTE),
    RelTimeMagnitude::new(TWO_HOURS, "1 hour %s", NANOSECOND),
    RelTimeMagnitude::new(DAY, "%d hours %s", HOUR),
    RelTimeMagnitude::new(TWO_DAYS, "1 day %s", NANOSECOND),
    RelTimeMagnitude::new(WEEK, "%d days %s", DAY),
    RelTimeMagnitude::new(TWO_WEEKS, "1 week %s", NANOSECOND),
    RelTimeMagnitude::new(MONTH, "%d weeks %s", WEEK),
    RelTimeMagnitude::new(TWO_MONTHS, "1 month %s", NANOSECOND),
    RelTimeMagnitude::new(YEAR, "%d months %s", MONTH),
    RelTimeMagnitude::new(EIGHTEEN_MONTHS, "1 year %s", NANOSECOND),
    RelTimeMagnitude::new(TWO_YEARS, "2 years %s", NANOSECOND),
    RelTimeMagnitude::new(LONG_TIME, "%d years %s", YEAR),
    RelTimeMagnitude::new(Duration::MAX, "a long while %s", NANOSECOND),
];

/// Simplified Chinese rules
pub const CHINESE_MAGNITUDES: &[RelTimeMagnitude] = &[
    RelTimeMagnitude::new(SECOND, "刚刚", SECOND),
    RelTimeMagnitude::new(TWO_SECONDS, "1秒%s", NANOSECOND),
    RelTimeMagnitude::new(MINUTE, "%d秒%s", SECOND),
    RelTimeMagnitude::new(TWO_MINUTES, "1分钟%s", NANOSECOND),
    RelTimeMagnitude::new(HOUR, "%d分钟%s", MINUTE),
    RelTimeMagnitude::new(TWO_HOURS, "1小时%s", NANOSECOND),
    RelTimeMagnitude::new(DAY, "%d小时%s", HOUR),
    RelTimeMagnitude::new(TWO_DAYS, "1天%s", NANOSECOND),
    RelTimeMagnitude::new(WEEK, "%d天%s", DAY),
    RelTimeMagnitude::new(TWO_WEEKS, "1周%s", NANOSECOND),
    RelTimeMagnitude::new(MONTH, "%d周%s", WEEK),
    RelTimeMagnitude::new(TWO_MONTHS, "1月%s", NANOSECOND),
    RelTimeMagnitude::new(YEAR, "%d月%s", MONTH),
    RelTimeMagnitude::new(EIGHTEEN_MONTHS, "1年%s", NANOSECOND),
    RelTimeMagnitude::new(TWO_YEARS, "2年%s", NANOSECOND),
    RelTimeMagnitude::new(LONG_TIME, "%d年%s", YEAR),
    RelTimeMagnitude::new(Duration::MAX, "很久%s", NANOSECOND),
];

static ENGLISH_TABLE: LazyLock<MagnitudeTable> = LazyLock::new(|| {
    MagnitudeTable::new(DEFAULT_MAGNITUDES.to_vec()).expect("built-in English table is valid")
});

static CHINESE_TABLE: LazyLock<MagnitudeTable> = LazyLock::new(|| {
    MagnitudeTable::new(CHINESE_MAGNITUDES.to_vec()).expect("built-in Chinese table is valid")
});

/// Built-in phrase tables
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Raw rules of this locale
    pub fn magnitudes(self) -> &'static [RelTimeMagnitude] {
        match self {
            Self::En => DEFAULT_MAGNITUDES,
            Self::Zh => CHINESE_MAGNITUDES,
        }
    }

    /// Validated table, built on first use
    pub fn table(self) -> &'static MagnitudeTable {
        match self {
            Self::En => LazyLock::force(&ENGLISH_TABLE),
            Self::Zh => LazyLock::force(&CHINESE_TABLE),
        }
    }

    /// Label used when the described instant precedes the reference
    pub fn past_label(self) -> &'static str {
        match self {
            Self::En => "ago",
            Self::Zh => "以前",
        }
    }

    /// Label used when the described instant follows the reference
    pub fn future_label(self) -> &'static str {
        match self {
            Self::En => "from now",
            Self::Zh => "以后",
        }
    }
}
