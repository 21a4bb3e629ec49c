//! Configuration file support
//!
//! Loads settings from ~/.minipad.toml (or %USERPROFILE%\.minipad.toml on
//! Windows). The file is read once at startup and never written.
//!
//! Example:
//! ```text
//! # minipad configuration
//! line-numbers = true
//! tab-width = 4
//! scroll-margin = 2
//! highlight = true
//! log-file = "/tmp/minipad.log"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{EditorError, Result};

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Tab width for display and vertical movement
    pub tab_width: usize,
    /// Lines kept visible above/below the caret when scrolling
    pub scroll_margin: usize,
    /// Whether syntax coloring starts enabled
    pub highlight: bool,
    /// Where to write the log (no logging if unset)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            tab_width: 4,
            scroll_margin: 2,
            highlight: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".minipad.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".minipad.toml"))
        }
    }

    /// Load configuration from the config file
    ///
    /// A missing file gives the defaults. An unreadable or malformed file
    /// also gives the defaults, along with the error so the caller can
    /// report it.
    pub fn load() -> (Self, Option<EditorError>) {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => (Self::default(), None),
        }
    }

    fn load_from(path: &Path) -> (Self, Option<EditorError>) {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => (Self::default(), None),
            Err(source) => (
                Self::default(),
                Some(EditorError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }),
            ),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table = contents
            .parse::<Table>()
            .map_err(|e| EditorError::Config(e.message().to_string()))?;
        let mut config = Self::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match key.as_str() {
                "line-numbers" => self.show_line_numbers = expect_bool(key, value)?,
                "highlight" => self.highlight = expect_bool(key, value)?,
                "tab-width" => {
                    self.tab_width = expect_int(key, value)?.clamp(1, 16) as usize;
                }
                "scroll-margin" => {
                    self.scroll_margin = expect_int(key, value)?.clamp(0, 10) as usize;
                }
                "log-file" => match value {
                    Value::String(s) if !s.is_empty() => self.log_file = Some(PathBuf::from(s)),
                    Value::String(_) => self.log_file = None,
                    _ => return Err(type_error(key, "a string")),
                },
                _ => tracing::warn!(key = key.as_str(), "unknown config key ignored"),
            }
        }
        Ok(())
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| type_error(key, "true or false"))
}

fn expect_int(key: &str, value: &Value) -> Result<i64> {
    value.as_integer().ok_or_else(|| type_error(key, "an integer"))
}

fn type_error(key: &str, expected: &str) -> EditorError {
    EditorError::Config(format!("{} must be {}", key, expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
line-numbers = true
tab-width = 8
scroll-margin = 3
highlight = false
log-file = "/tmp/minipad.log"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(config.show_line_numbers);
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.scroll_margin, 3);
        assert!(!config.highlight);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/minipad.log")));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_values_are_clamped() {
        let config = Config::parse("tab-width = 0\nscroll-margin = 99").unwrap();
        assert_eq!(config.tab_width, 1);
        assert_eq!(config.scroll_margin, 10);

        let config = Config::parse("tab-width = 40").unwrap();
        assert_eq!(config.tab_width, 16);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = Config::parse("auto-save = true\ntab-width = 2").unwrap();
        assert_eq!(config.tab_width, 2);
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(matches!(
            Config::parse("line-numbers = \"yes\""),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            Config::parse("tab-width = 2.5"),
            Err(EditorError::Config(_))
        ));
        assert!(matches!(
            Config::parse("log-file = 3"),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(matches!(
            Config::parse("tab-width = = 4"),
            Err(EditorError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let (config, error) = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.tab_width, Config::default().tab_width);
        assert!(error.is_none());
    }

    #[test]
    fn test_load_unreadable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let (config, error) = Config::load_from(dir.path());
        assert_eq!(config.tab_width, Config::default().tab_width);
        assert!(matches!(error, Some(EditorError::FileRead { .. })));
    }

    #[test]
    fn test_load_reads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minipad.toml");
        fs::write(&path, "tab-width = 2\n").unwrap();
        let (config, error) = Config::load_from(&path);
        assert_eq!(config.tab_width, 2);
        assert!(error.is_none());
    }
}
