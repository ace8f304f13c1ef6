//! Logging initialization
//!
//! Installs a `tracing` subscriber that writes timestamped, uncolored lines to
//! a fresh log file under the configured log directory. The level defaults to
//! `info` and can be overridden with `SCRIPTS2MD_LOG`.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "SCRIPTS2MD_LOG";

/// Default filter directive
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Timestamp format used in log file names
pub const LOG_FILE_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Log file path for a run started now
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format(LOG_FILE_TIME_FORMAT);
    log_dir.join(format!("{}.log", stamp))
}

/// Create the log file under `log_dir` and install the global subscriber.
///
/// Returns the log file path. Uses `try_init()` so a second call keeps the
/// first subscriber.
pub fn init_logging(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let path = log_file_path(log_dir);
    let file =
        File::create(&path).with_context(|| format!("Failed to create log file: {:?}", path))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();

    // A subscriber is already set; it keeps writing to its own log file.
    if installed.is_err() {
        tracing::debug!("Logger already initialized, {:?} stays empty", path);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_shape() {
        let path = log_file_path(Path::new("/logs"));
        assert_eq!(path.parent(), Some(Path::new("/logs")));

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(".log"));
        // YYYY-mm-dd_HH-MM-SS.log
        assert_eq!(name.len(), "2024-01-02_03-04-05.log".len());
        assert_eq!(&name[10..11], "_");
    }

    #[test]
    fn test_init_logging_creates_file() {
        let temp = tempfile::tempdir().unwrap();
        let log_dir = temp.path().join("nested/logs");

        let path = init_logging(&log_dir).unwrap();
        assert!(path.exists());
        assert!(path.starts_with(&log_dir));
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let temp = tempfile::tempdir().unwrap();
        let first = init_logging(&temp.path().join("a")).unwrap();
        let second = init_logging(&temp.path().join("b")).unwrap();
        assert!(first.exists());
        assert!(second.exists());
    }
}
