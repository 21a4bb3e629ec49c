//! Log file setup
//!
//! The terminal belongs to the editor, so logs only go to a file. Nothing is
//! logged unless a file is named by `MINIPAD_LOG_FILE` or the config's
//! `log-file` key. `MINIPAD_LOG` sets the filter (default `info`).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "MINIPAD_LOG_FILE";

/// Environment variable holding the filter directives
pub const LOG_FILTER_ENV: &str = "MINIPAD_LOG";

/// Pick the log file: the environment wins over the config
pub fn log_path(configured: Option<&Path>) -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Install the global subscriber if a log file is configured
///
/// Returns the path being logged to.
pub fn init(configured: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = log_path(configured) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}
