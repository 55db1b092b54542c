//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;
use humanized::Locale;

/// Get default table file help text for current platform
fn default_table_help() -> String {
    #[cfg(target_os = "linux")]
    return "JSON table file (default: ~/.config/humanized/table.json if present)".to_string();

    #[cfg(target_os = "macos")]
    return "JSON table file (default: ~/Library/Application Support/humanized/table.json if present)"
        .to_string();

    #[cfg(target_os = "windows")]
    return "JSON table file (default: %APPDATA%\\humanized\\table.json if present)".to_string();

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    return "JSON table file (overrides the built-in tables)".to_string();
}

/// Describe an instant relative to now (or another instant)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Instant to describe (RFC 3339 timestamp or Unix seconds)
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    pub then: Option<String>,

    /// Reference instant (default: the system clock)
    #[arg(short, long, allow_negative_numbers = true)]
    pub now: Option<String>,

    /// Built-in phrase table (en, zh)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// JSON table file (overrides --locale)
    #[arg(short, long, help = default_table_help())]
    pub table: Option<PathBuf>,

    /// Label for instants before the reference (e.g. "ago")
    #[arg(long)]
    pub past_label: Option<String>,

    /// Label for instants after the reference (e.g. "from now")
    #[arg(long)]
    pub future_label: Option<String>,

    /// Print the active table and exit
    #[arg(long, default_value = "false")]
    pub list: bool,

    /// Enable debug logging (shows the table source and selected rule)
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["humanized", "1700000000"]).unwrap();
        assert_eq!(args.then.as_deref(), Some("1700000000"));
        assert!(args.now.is_none());
        assert!(args.locale.is_none());
        assert!(!args.list);
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "humanized",
            "2024-01-01T00:00:00Z",
            "--now",
            "2024-01-02T00:00:00Z",
            "--locale",
            "zh",
            "--past-label",
            "before",
            "--future-label",
            "after",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.now.as_deref(), Some("2024-01-02T00:00:00Z"));
        assert_eq!(args.locale, Some(Locale::Zh));
        assert_eq!(args.past_label.as_deref(), Some("before"));
        assert_eq!(args.future_label.as_deref(), Some("after"));
        assert!(args.debug);
    }

    #[test]
    fn test_negative_unix_seconds() {
        let args = Args::try_parse_from(["humanized", "-86400"]).unwrap();
        assert_eq!(args.then.as_deref(), Some("-86400"));
    }

    #[test]
    fn test_then_required_unless_list() {
        assert!(Args::try_parse_from(["humanized"]).is_err());
        let args = Args::try_parse_from(["humanized", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.then.is_none());
    }

    #[test]
    fn test_unknown_locale() {
        assert!(Args::try_parse_from(["humanized", "0", "--locale", "fr"]).is_err());
    }
}
