use super::PredictorController;
use super::jobs::PredictionJob;
use crate::egui_app::state::SubmissionPhase;
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model;
use crate::form::{FieldId, FormState};
use crate::predict_api::{PredictError, PredictRequest};
use tracing::{debug, info, warn};

impl PredictorController {
    /// Replace the raw text of one input. Validation waits until submit.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        let form = &mut self.ui.form;
        form.fields.set(field, value);
        if matches!(
            form.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed
        ) {
            form.phase = SubmissionPhase::Idle;
        }
    }

    /// Parse the form and send one prediction request in the background.
    ///
    /// Ignored while a previous request is still in flight.
    pub fn submit(&mut self) {
        if self.ui.form.loading || self.jobs.prediction_in_progress() {
            debug!("Prediction already in flight; ignoring submit");
            return;
        }
        let features = self.ui.form.fields.to_features();
        let unparsed = features.non_finite_fields();
        if !unparsed.is_empty() {
            let keys: Vec<_> = unparsed.iter().map(|field| field.wire_key()).collect();
            warn!("Submitting non-numeric values for {}", keys.join(", "));
        }

        let request_id = self.jobs.next_request_id();
        let form = &mut self.ui.form;
        form.loading = true;
        form.error = None;
        form.result = None;
        form.phase = SubmissionPhase::Submitting;
        info!(
            request_id,
            base_url = %self.settings.api_base_url,
            "Requesting FWI prediction"
        );
        self.set_status("Requesting prediction…", StatusTone::Busy);
        self.jobs.begin_prediction(PredictionJob {
            request_id,
            base_url: self.settings.api_base_url.clone(),
            request: PredictRequest { features },
        });
    }

    /// Clear every input and any shown result or error.
    ///
    /// An in-flight request keeps running and its result is still applied.
    pub fn reset(&mut self) {
        let form = &mut self.ui.form;
        form.fields = FormState::new();
        form.result = None;
        form.error = None;
        form.phase = if form.loading {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        };
        form.focus_first_requested = true;
        self.set_status("Form cleared", StatusTone::Idle);
    }

    pub(super) fn apply_prediction(&mut self, request_id: u64, prediction: f64) {
        let form = &mut self.ui.form;
        form.loading = false;
        form.result = Some(prediction);
        form.error = None;
        form.phase = SubmissionPhase::Succeeded;
        info!(request_id, prediction, "Prediction received");
        self.set_status(
            format!("Predicted FWI {}", view_model::format_prediction(prediction)),
            StatusTone::Info,
        );
    }

    pub(super) fn apply_prediction_error(&mut self, request_id: u64, err: PredictError) {
        warn!(request_id, "Prediction failed: {err}");
        let message = err.to_string();
        let form = &mut self.ui.form;
        form.loading = false;
        form.result = None;
        form.error = Some(message);
        form.phase = SubmissionPhase::Failed;
        self.set_status(format!("Prediction failed: {err}"), StatusTone::Error);
    }
}
