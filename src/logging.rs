//! Tracing setup.
//!
//! The TUI owns stdout, so logs go to `pawswipe.log` under the user's local
//! data directory. The filter comes from `PAWSWIPE_LOG` (default `warn`).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{classify_io_error, PawResult, SystemError};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PAWSWIPE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// `<data_local_dir>/pawswipe/pawswipe.log`
pub fn log_file_path() -> PawResult<PathBuf> {
    let dir = dirs::data_local_dir().ok_or(SystemError::NoDataDirectory)?;
    Ok(dir.join("pawswipe").join("pawswipe.log"))
}

/// Build the filter from `PAWSWIPE_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> PawResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            classify_io_error(e, Some(parent.to_path_buf()), "create log directory")
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "open log file").into())
}

/// Install the global subscriber. Returns the log path on success.
///
/// Fails if the log file cannot be opened; the app then runs without logs.
pub fn init() -> PawResult<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(path)
}
