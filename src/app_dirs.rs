//! On-disk locations for fwicast.
//!
//! Settings and logs share one `.fwicast` folder. It sits in the OS config
//! directory unless `FWICAST_CONFIG_HOME` names another parent.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Folder created under the config root.
pub const APP_DIR_NAME: &str = ".fwicast";
/// Environment variable that replaces the OS config directory as the parent.
pub const CONFIG_HOME_ENV: &str = "FWICAST_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No config directory available; set {CONFIG_HOME_ENV} to choose one")]
    NoConfigRoot,
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The resolved `.fwicast` folder. Nothing is created until asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Resolve the folder from `FWICAST_CONFIG_HOME` or the OS config directory.
    pub fn from_env() -> Result<Self, AppDirError> {
        let parent = std::env::var_os(CONFIG_HOME_ENV)
            .filter(|value| !value.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
            .ok_or(AppDirError::NoConfigRoot)?;
        Ok(Self::under(parent))
    }

    /// Place the folder inside `parent`.
    pub fn under(parent: impl Into<PathBuf>) -> Self {
        Self {
            root: parent.into().join(APP_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the `.fwicast` folder if missing and return it.
    pub fn ensure_root(&self) -> Result<&Path, AppDirError> {
        create_dir(&self.root)?;
        Ok(&self.root)
    }

    /// Create `.fwicast/logs` if missing and return it.
    pub fn ensure_logs_dir(&self) -> Result<PathBuf, AppDirError> {
        let logs = self.root.join(LOGS_DIR_NAME);
        create_dir(&logs)?;
        Ok(logs)
    }
}

fn create_dir(path: &Path) -> Result<(), AppDirError> {
    std::fs::create_dir_all(path).map_err(|source| AppDirError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
