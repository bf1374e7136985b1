use super::jobs::{JobMessage, PredictionJobResult};
use super::*;
use crate::egui_app::state::{ServiceHealth, SubmissionPhase};
use crate::form::{FieldId, FormState};
use crate::predict_api::{PredictError, PredictResponse};
use std::net::TcpListener;
use std::time::{Duration, Instant};

fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn controller_for(base_url: String) -> PredictorController {
    PredictorController::new(AppSettings {
        api_base_url: base_url,
        check_health_on_startup: false,
    })
}

fn wait_until_idle(controller: &mut PredictorController) {
    let deadline = Instant::now() + Duration::from_secs(20);
    while controller.is_busy() {
        assert!(Instant::now() < deadline, "background job did not finish");
        controller.poll_background_jobs();
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn fill_form(controller: &mut PredictorController) {
    for (field, value) in FieldId::ALL
        .into_iter()
        .zip(["25", "60", "15", "0", "85.1", "26.2", "94.3", "5.1", "27.5"])
    {
        controller.update_field(field, value);
    }
}

#[test]
fn update_field_changes_only_that_key() {
    let mut controller = controller_for(unreachable_base_url());
    fill_form(&mut controller);
    for target in FieldId::ALL {
        let before = controller.ui.form.fields.clone();
        controller.update_field(target, "42.5");
        for field in FieldId::ALL {
            let expected = if field == target { "42.5" } else { before.get(field) };
            assert_eq!(controller.ui.form.fields.get(field), expected);
        }
        assert!(!controller.ui.form.loading);
        assert!(controller.ui.form.result.is_none());
    }
}

#[test]
fn reset_restores_empty_form_and_clears_outcome() {
    let mut controller = controller_for(unreachable_base_url());
    fill_form(&mut controller);
    controller.ui.form.result = Some(3.5);
    controller.ui.form.error = Some("boom".into());
    controller.ui.form.phase = SubmissionPhase::Failed;

    controller.reset();

    assert_eq!(controller.ui.form.fields, FormState::new());
    assert_eq!(controller.ui.form.result, None);
    assert_eq!(controller.ui.form.error, None);
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Idle);
    assert!(!controller.ui.form.can_submit());
}

#[test]
fn editing_after_failure_returns_to_idle_but_keeps_message() {
    let mut controller = controller_for(unreachable_base_url());
    controller.ui.form.error = Some("Invalid input".into());
    controller.ui.form.phase = SubmissionPhase::Failed;

    controller.update_field(FieldId::Dc, "90");

    assert_eq!(controller.ui.form.phase, SubmissionPhase::Idle);
    assert_eq!(controller.ui.form.error.as_deref(), Some("Invalid input"));
}

#[test]
fn unreachable_service_sets_generic_error() {
    let mut controller = controller_for(unreachable_base_url());
    fill_form(&mut controller);

    controller.submit();
    assert!(controller.ui.form.loading);
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Submitting);
    wait_until_idle(&mut controller);

    assert!(!controller.ui.form.loading);
    assert_eq!(controller.ui.form.result, None);
    let message = controller.ui.form.error.clone().unwrap_or_default();
    assert!(message.starts_with("Network error"), "unexpected: {message}");
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Failed);
    assert_eq!(controller.ui.status.badge_label, "Error");
}

#[test]
fn reset_while_loading_keeps_request_tracked() {
    let mut controller = controller_for(unreachable_base_url());
    fill_form(&mut controller);
    controller.submit();

    controller.reset();

    assert!(controller.ui.form.loading);
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Submitting);
    wait_until_idle(&mut controller);
    assert!(!controller.ui.form.loading);
    assert!(controller.ui.form.error.is_some());
}

#[test]
fn results_for_untracked_requests_are_dropped() {
    let mut controller = controller_for(unreachable_base_url());
    let sender = controller.jobs.message_sender();
    sender
        .send(JobMessage::Predicted(PredictionJobResult {
            request_id: 99,
            result: Ok(PredictResponse { prediction: 12.0 }),
        }))
        .unwrap();

    controller.poll_background_jobs();

    assert_eq!(controller.ui.form.result, None);
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Idle);
}

#[test]
fn server_error_is_shown_verbatim() {
    // Accepts connections but never answers, so the worker stays in flight.
    let silent = TcpListener::bind("127.0.0.1:0").unwrap();
    let mut controller = controller_for(format!("http://{}", silent.local_addr().unwrap()));
    let request_id = controller.jobs.next_request_id();
    controller.ui.form.loading = true;
    controller.jobs.begin_prediction(super::jobs::PredictionJob {
        request_id,
        base_url: controller.api_base_url().to_string(),
        request: crate::predict_api::PredictRequest {
            features: FormState::new().to_features(),
        },
    });
    controller
        .jobs
        .message_sender()
        .send(JobMessage::Predicted(PredictionJobResult {
            request_id,
            result: Err(PredictError::Server("Invalid input".into())),
        }))
        .unwrap();

    controller.poll_background_jobs();

    assert_eq!(controller.ui.form.error.as_deref(), Some("Invalid input"));
    assert_eq!(controller.ui.form.phase, SubmissionPhase::Failed);
    assert!(!controller.ui.form.loading);
    assert!(!controller.is_busy());
}

#[test]
fn health_check_reports_offline_for_unreachable_service() {
    let mut controller = controller_for(unreachable_base_url());
    controller.check_service_health();
    assert_eq!(controller.ui.health, ServiceHealth::Checking);
    wait_until_idle(&mut controller);
    assert!(matches!(controller.ui.health, ServiceHealth::Offline(_)));
    assert_eq!(controller.ui.status.badge_label, "Warning");
}
