//! User-facing strings and file names

/// Directory under the platform config dir holding our files
pub const APP_DIR_NAME: &str = "humanized";

/// Table file picked up automatically from the config directory
pub const TABLE_FILE_NAME: &str = "table.json";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_USING_TABLE_FILE: &str = "Using table file: ";
pub const MSG_USING_LOCALE: &str = "Using built-in table: ";
pub const MSG_DIFFERENCE: &str = "Difference: ";
pub const MSG_SELECTED_RULE: &str = "Selected rule: ";

// =============================================================================
// Errors
// =============================================================================

pub const ERR_PREFIX: &str = "Error: ";
pub const ERR_INSTANT_EMPTY: &str = "instant is empty";
pub const ERR_INSTANT_INVALID: &str = "expected an RFC 3339 timestamp or Unix seconds";
pub const ERR_INSTANT_OUT_OF_RANGE: &str = "Unix timestamp is out of range";
pub const ERR_TABLE_READ: &str = "failed to read table file";
pub const ERR_TABLE_PARSE: &str = "invalid table file";
pub const ERR_MISSING_INSTANT: &str = "no instant given";
