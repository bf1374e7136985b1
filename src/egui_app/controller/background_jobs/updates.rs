use super::super::PredictorController;
use super::super::jobs::{HealthCheckResult, PredictionJobResult};

pub(super) fn handle_prediction_finished(
    controller: &mut PredictorController,
    message: PredictionJobResult,
) {
    if !controller.jobs.finish_prediction(message.request_id) {
        return;
    }
    match message.result {
        Ok(response) => controller.apply_prediction(message.request_id, response.prediction),
        Err(err) => controller.apply_prediction_error(message.request_id, err),
    }
}

pub(super) fn handle_health_checked(controller: &mut PredictorController, message: HealthCheckResult) {
    controller.jobs.clear_health_check();
    controller.complete_health_check(message.result);
}
