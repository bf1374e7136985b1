//! Helpers to convert controller state into display strings.

use crate::egui_app::state::ServiceHealth;
use crate::egui_app::ui::style::StatusTone;

/// Caption shown under a prediction.
pub const FWI_CAPTION: &str =
    "FIRE WEATHER INDEX (FWI): a numeric value indicating fire danger (higher means higher risk)";

/// Render a prediction rounded to two decimals, ties away from zero.
///
/// `{:.2}` alone rounds exact ties to even, so 2.125 would read as 2.12.
pub fn format_prediction(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

pub fn submit_button_label(loading: bool) -> &'static str {
    if loading { "Predicting..." } else { "Predict" }
}

/// Text and tone for the service health indicator.
pub fn health_badge(health: &ServiceHealth) -> (String, StatusTone) {
    match health {
        ServiceHealth::Unknown => ("Service: not checked".to_string(), StatusTone::Idle),
        ServiceHealth::Checking => ("Service: checking…".to_string(), StatusTone::Busy),
        ServiceHealth::Online => ("Service: online".to_string(), StatusTone::Info),
        ServiceHealth::Offline(reason) => (format!("Service: offline ({reason})"), StatusTone::Error),
    }
}
