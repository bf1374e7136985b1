mod updates;

use super::PredictorController;
use super::jobs::JobMessage;
use std::sync::mpsc::TryRecvError;

impl PredictorController {
    /// Apply every finished background job without blocking.
    ///
    /// The renderer calls this once per frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            match message {
                JobMessage::Predicted(message) => updates::handle_prediction_finished(self, message),
                JobMessage::HealthChecked(message) => updates::handle_health_checked(self, message),
            }
        }
    }
}
