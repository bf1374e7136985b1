use std::path::{Path, PathBuf};

use serde::de::Error as SerdeDeError;
use tracing::{info, warn};

use crate::app_dirs::AppPaths;

use super::settings::{API_URL_ENV, AppSettings};
use super::{CONFIG_FILE_NAME, ConfigError};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let paths = AppPaths::from_env()?;
    Ok(paths.ensure_root()?.join(CONFIG_FILE_NAME))
}

/// Load settings from disk, returning defaults if the file is missing.
///
/// `FWICAST_API_URL` takes precedence over the file's `api_base_url`.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    let env_override = std::env::var(API_URL_ENV).ok();
    let settings = resolve_settings(&path, env_override)?;
    info!(
        "Loaded settings from {}; API base URL {}",
        path.display(),
        settings.api_base_url
    );
    Ok(settings)
}

pub(super) fn resolve_settings(
    path: &Path,
    env_override: Option<String>,
) -> Result<AppSettings, ConfigError> {
    let settings = load_settings_from(path)?;
    if env_override.is_some() {
        info!("{API_URL_ENV} is set; overriding configured API base URL");
    }
    settings.with_api_url_override(env_override).validated()
}

pub(super) fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source: SerdeDeError::custom(source),
    })?;
    toml::from_str(&text).map_err(|source| {
        warn!("Rejecting config at {}: {source}", path.display());
        ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        }
    })
}
