//! Persistent settings for the predictor client.
//!
//! Settings live in `config.toml` inside the `.fwicast` directory. The API
//! base URL can be overridden at launch with `FWICAST_API_URL`.

mod errors;
mod load;
mod save;
mod settings;

#[cfg(test)]
mod tests;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use load::{config_path, load_or_default};
pub use save::{save, save_to_path};
pub use settings::{API_URL_ENV, AppSettings, DEFAULT_API_BASE_URL, normalize_base_url};
