//! Application directory helpers anchored to a single `.jobpilot` folder.
//!
//! Log files live under the OS config directory (e.g., `%APPDATA%` on
//! Windows). `JOBPILOT_CONFIG_HOME` overrides the base for portable
//! setups.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".jobpilot";

/// Environment variable overriding the base config directory.
pub const CONFIG_HOME_ENV: &str = "JOBPILOT_CONFIG_HOME";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Return the logs directory, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    logs_dir_under(&base)
}

/// Resolve and create the logs directory under an explicit base.
pub fn logs_dir_under(base: &Path) -> Result<PathBuf, AppDirError> {
    let path = base.join(APP_DIR_NAME).join("logs");
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_HOME_ENV) {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn logs_dir_nests_under_app_root() {
        let base = tempdir().unwrap();
        let logs = logs_dir_under(base.path()).unwrap();
        assert_eq!(logs, base.path().join(APP_DIR_NAME).join("logs"));
        assert!(logs.is_dir());
    }

    #[test]
    fn create_failure_reports_path() {
        let base = tempdir().unwrap();
        let blocker = base.path().join(APP_DIR_NAME);
        std::fs::write(&blocker, b"not a directory").unwrap();
        let err = logs_dir_under(base.path()).unwrap_err();
        assert!(matches!(err, AppDirError::CreateDir { .. }));
    }
}
