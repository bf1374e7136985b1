use serde::{Deserialize, Serialize};
use url::Url;

use super::ConfigError;

/// Base URL used when neither the environment nor the config file sets one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "FWICAST_API_URL";

/// Settings stored in the TOML config file.
///
/// Config keys: `api_base_url`, `check_health_on_startup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Root URL of the prediction service, without the `/api/...` path.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Whether to probe `/api/health` when the window opens.
    #[serde(default = "default_true")]
    pub check_health_on_startup: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            check_health_on_startup: true,
        }
    }
}

impl AppSettings {
    /// Replace the base URL with a non-blank override, if one is given.
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.api_base_url = value;
        }
        self
    }

    /// Validate and normalize the base URL.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_base_url = normalize_base_url(&self.api_base_url)?;
        Ok(self)
    }
}

/// Check that `raw` is an absolute http(s) URL and strip trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        value: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }
    Ok(trimmed.to_string())
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}
