//! Table files and the active formatting profile
//!
//! A table file is JSON holding optional labels and the magnitude rules.
//! Durations use the compact `<number><unit>` syntax and the last threshold
//! must be "max":
//!
//! ```json
//! {
//!   "past_label": "ago",
//!   "future_label": "from now",
//!   "magnitudes": [
//!     { "threshold": "1s", "template": "now", "divisor": "1s" },
//!     { "threshold": "max", "template": "%d seconds %s", "divisor": "1s" }
//!   ]
//! }
//! ```

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use humanized::{Locale, MagnitudeTable};

use crate::args::Args;
use crate::constants::{APP_DIR_NAME, ERR_TABLE_PARSE, ERR_TABLE_READ, TABLE_FILE_NAME};

/// Contents of a table file
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TableFile {
    /// Label for instants before the reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_label: Option<String>,

    /// Label for instants after the reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_label: Option<String>,

    /// Rules, validated while parsing
    pub magnitudes: MagnitudeTable,
}

/// Errors loading a table file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(PathBuf, io::Error),
    /// The file is not valid JSON or the table breaks an invariant
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "{} {}: {}", ERR_TABLE_READ, path.display(), e),
            Self::Parse(path, e) => write!(f, "{} {}: {}", ERR_TABLE_PARSE, path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            Self::Parse(_, e) => Some(e),
        }
    }
}

impl TableFile {
    /// Get the platform-specific default table file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(TABLE_FILE_NAME))
    }

    /// Read and validate a table file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Parse and validate table file contents
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

/// Where the active table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Builtin(Locale),
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin(locale) => write!(f, "{}", locale),
        }
    }
}

/// Table and labels used for one invocation
#[derive(Debug, Clone)]
pub struct Profile {
    pub source: TableSource,
    pub table: Cow<'static, MagnitudeTable>,
    pub past_label: String,
    pub future_label: String,
}

impl Profile {
    /// Resolve the profile from arguments
    ///
    /// Table precedence: `--table`, then `--locale`, then the file at
    /// `default_path` if it exists, then the default locale. Labels given on
    /// the command line win over labels in a table file, which win over the
    /// locale's labels.
    pub fn resolve(args: &Args, default_path: Option<&Path>) -> Result<Self, ConfigError> {
        let locale = args.locale.unwrap_or_default();

        let file_path = match (&args.table, args.locale) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(_)) => None,
            (None, None) => default_path.filter(|p| p.exists()).map(Path::to_path_buf),
        };

        let (source, table, file_past, file_future) = match file_path {
            Some(path) => {
                let file = TableFile::load(&path)?;
                (
                    TableSource::File(path),
                    Cow::Owned(file.magnitudes),
                    file.past_label,
                    file.future_label,
                )
            }
            None => (
                TableSource::Builtin(locale),
                Cow::Borrowed(locale.table()),
                None,
                None,
            ),
        };

        let past_label = args
            .past_label
            .clone()
            .or(file_past)
            .unwrap_or_else(|| locale.past_label().to_string());
        let future_label = args
            .future_label
            .clone()
            .or(file_future)
            .unwrap_or_else(|| locale.future_label().to_string());

        Ok(Self {
            source,
            table,
            past_label,
            future_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    const SECONDS_TABLE: &str = r#"{
        "past_label": "before",
        "magnitudes": [
            { "threshold": "1s", "template": "now", "divisor": "1s" },
            { "threshold": "max", "template": "%d seconds %s", "divisor": "1s" }
        ]
    }"#;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["humanized", "0"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn write_table(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("table.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_table_file() {
        let file = TableFile::parse(SECONDS_TABLE).unwrap();
        assert_eq!(file.past_label.as_deref(), Some("before"));
        assert!(file.future_label.is_none());
        assert_eq!(file.magnitudes.len(), 2);
        assert_eq!(file.magnitudes[1].threshold, Duration::MAX);
    }

    #[test]
    fn test_parse_rejects_invalid_table() {
        let unbounded = r#"{"magnitudes":[{"threshold":"1s","template":"now","divisor":"1s"}]}"#;
        assert!(TableFile::parse(unbounded).is_err());

        let empty = r#"{"magnitudes":[]}"#;
        let err = TableFile::parse(empty).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = TableFile::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_, _)));
        assert!(err.to_string().starts_with(ERR_TABLE_READ));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, "{ not json");
        let err = TableFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
    }

    #[test]
    fn test_default_path_name() {
        if let Some(path) = TableFile::default_path() {
            assert!(path.ends_with(Path::new(APP_DIR_NAME).join(TABLE_FILE_NAME)));
        }
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        let profile = Profile::resolve(&args(&[]), None).unwrap();
        assert_eq!(profile.source, TableSource::Builtin(Locale::En));
        assert_eq!(profile.past_label, "ago");
        assert_eq!(profile.future_label, "from now");
        assert_eq!(profile.table.len(), humanized::DEFAULT_MAGNITUDES.len());
    }

    #[test]
    fn test_resolve_locale() {
        let profile = Profile::resolve(&args(&["--locale", "zh"]), None).unwrap();
        assert_eq!(profile.source, TableSource::Builtin(Locale::Zh));
        assert_eq!(profile.past_label, "以前");
        assert_eq!(profile.future_label, "以后");
    }

    #[test]
    fn test_resolve_table_file() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, SECONDS_TABLE);
        let path_str = path.to_str().unwrap();
        let profile = Profile::resolve(&args(&["--table", path_str]), None).unwrap();
        assert_eq!(profile.source, TableSource::File(path.clone()));
        assert_eq!(profile.table.len(), 2);
        // File label, then locale fallback
        assert_eq!(profile.past_label, "before");
        assert_eq!(profile.future_label, "from now");
    }

    #[test]
    fn test_resolve_label_flags_win() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, SECONDS_TABLE);
        let path_str = path.to_str().unwrap();
        let profile = Profile::resolve(
            &args(&["--table", path_str, "--past-label", "earlier"]),
            None,
        )
        .unwrap();
        assert_eq!(profile.past_label, "earlier");
    }

    #[test]
    fn test_resolve_default_path_used_when_present() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, SECONDS_TABLE);
        let profile = Profile::resolve(&args(&[]), Some(&path)).unwrap();
        assert_eq!(profile.source, TableSource::File(path));
    }

    #[test]
    fn test_resolve_default_path_ignored_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let profile = Profile::resolve(&args(&[]), Some(&path)).unwrap();
        assert_eq!(profile.source, TableSource::Builtin(Locale::En));
    }

    #[test]
    fn test_resolve_locale_skips_default_path() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, SECONDS_TABLE);
        let profile = Profile::resolve(&args(&["--locale", "en"]), Some(&path)).unwrap();
        assert_eq!(profile.source, TableSource::Builtin(Locale::En));
    }

    #[test]
    fn test_resolve_bad_table_file() {
        let dir = TempDir::new().unwrap();
        let path = write_table(&dir, r#"{"magnitudes":[]}"#);
        let path_str = path.to_str().unwrap();
        assert!(Profile::resolve(&args(&["--table", path_str]), None).is_err());
    }
}
