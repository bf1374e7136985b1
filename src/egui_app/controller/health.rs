use super::PredictorController;
use crate::egui_app::state::ServiceHealth;
use crate::egui_app::ui::style::StatusTone;
use crate::predict_api::HealthError;
use tracing::{info, warn};

impl PredictorController {
    /// Probe `/api/health` in the background; no-op while a probe is running.
    pub fn check_service_health(&mut self) {
        if self.jobs.health_check_in_progress() {
            return;
        }
        self.ui.health = ServiceHealth::Checking;
        self.jobs
            .begin_health_check(self.settings.api_base_url.clone());
    }

    pub(super) fn complete_health_check(&mut self, result: Result<(), HealthError>) {
        match result {
            Ok(()) => {
                info!("Prediction service at {} is online", self.settings.api_base_url);
                self.ui.health = ServiceHealth::Online;
            }
            Err(err) => {
                warn!(
                    "Prediction service at {} is unreachable: {err}",
                    self.settings.api_base_url
                );
                self.ui.health = ServiceHealth::Offline(err.to_string());
                if !self.ui.form.loading {
                    self.set_status(
                        format!("Prediction service unavailable: {err}"),
                        StatusTone::Warning,
                    );
                }
            }
        }
    }
}
