//! Shared state types for the egui UI.
//!
//! The controller owns one [`UiState`] and is the only writer; the renderer
//! reads it every frame.

mod form;
mod health;
mod service;
mod status;

pub use form::*;
pub use health::*;
pub use service::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    /// Predictor form inputs and the outcome of the last submission.
    pub form: PredictorFormState,
    /// Result of the last `/api/health` probe.
    pub health: ServiceHealth,
    pub service_url: ServiceUrlDraft,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            form: PredictorFormState::default(),
            health: ServiceHealth::default(),
            service_url: ServiceUrlDraft::default(),
        }
    }
}
