use crate::form::FormState;

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Editing; nothing in flight.
    #[default]
    Idle,
    /// A prediction request is in flight.
    Submitting,
    /// The last request returned a prediction.
    Succeeded,
    /// The last request failed.
    Failed,
}

/// UI state for the predictor form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictorFormState {
    /// Raw text of the nine inputs.
    pub fields: FormState,
    /// True while a prediction request is in flight.
    pub loading: bool,
    /// Last prediction returned by the service.
    pub result: Option<f64>,
    /// Last submission error, if any.
    pub error: Option<String>,
    /// Submit-cycle position, reset to `Idle` by edits after a finished request.
    pub phase: SubmissionPhase,
    /// Whether to focus the first input on the next frame.
    pub focus_first_requested: bool,
}

impl PredictorFormState {
    /// True when the Predict button should accept a click.
    pub fn can_submit(&self) -> bool {
        !self.loading && self.fields.is_complete()
    }
}
