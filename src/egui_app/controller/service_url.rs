use super::PredictorController;
use crate::config::{self, AppSettings, ConfigError};
use crate::egui_app::ui::style::StatusTone;
use tracing::warn;

impl PredictorController {
    /// Validate the drafted base URL, write it to the config file, and re-probe.
    ///
    /// On failure the current settings stay in effect and the reason is kept
    /// on the draft.
    pub fn save_service_url(&mut self) -> Result<(), ConfigError> {
        match self.persist_service_url() {
            Ok(()) => {
                self.set_status(
                    format!("Saved service URL {}", self.settings.api_base_url),
                    StatusTone::Info,
                );
                self.check_service_health();
                Ok(())
            }
            Err(err) => {
                warn!("Rejected service URL {:?}: {err}", self.ui.service_url.text);
                self.ui.service_url.error = Some(err.to_string());
                self.set_status(format!("Service URL not saved: {err}"), StatusTone::Error);
                Err(err)
            }
        }
    }

    fn persist_service_url(&mut self) -> Result<(), ConfigError> {
        let settings = AppSettings {
            api_base_url: config::normalize_base_url(&self.ui.service_url.text)?,
            ..self.settings.clone()
        };
        config::save(&settings)?;
        self.apply_settings(settings);
        Ok(())
    }
}
