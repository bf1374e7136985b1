//! Predictor form controller: owns the UI state and the network jobs.

mod background_jobs;
mod health;
mod jobs;
mod prediction;
mod service_url;

use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use jobs::ControllerJobs;
use tracing::info;

/// Maintains app state and bridges the prediction service to the egui UI.
pub struct PredictorController {
    pub ui: UiState,
    settings: AppSettings,
    jobs: ControllerJobs,
}

impl PredictorController {
    pub fn new(settings: AppSettings) -> Self {
        let mut ui = UiState::default();
        ui.form.focus_first_requested = true;
        ui.service_url.text = settings.api_base_url.clone();
        Self {
            ui,
            settings,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted settings and apply them.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    /// Swap in new settings; takes effect for the next request.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        info!("Using prediction service at {}", settings.api_base_url);
        self.ui.service_url.text = settings.api_base_url.clone();
        self.ui.service_url.error = None;
        self.settings = settings;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn api_base_url(&self) -> &str {
        &self.settings.api_base_url
    }

    /// True while any background request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.jobs.prediction_in_progress() || self.jobs.health_check_in_progress()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}

#[cfg(test)]
mod tests;
