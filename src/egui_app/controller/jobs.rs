use crate::predict_api::{self, HealthError, PredictError, PredictRequest, PredictResponse};
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};
use tracing::debug;

pub(crate) enum JobMessage {
    Predicted(PredictionJobResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request_id: u64,
    pub(crate) base_url: String,
    pub(crate) request: PredictRequest,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictResponse, PredictError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<(), HealthError>,
}

/// Background request bookkeeping; results come back over one channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    pending_prediction: Option<u64>,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_prediction: None,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        id
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(super) fn begin_prediction(&mut self, job: PredictionJob) {
        self.pending_prediction = Some(job.request_id);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = predict_api::predict(&job.base_url, &job.request);
            let _ = tx.send(JobMessage::Predicted(PredictionJobResult {
                request_id: job.request_id,
                result,
            }));
        });
    }

    /// Clear the pending prediction if `request_id` is the one being tracked.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        if self.pending_prediction != Some(request_id) {
            debug!(
                request_id,
                pending = ?self.pending_prediction,
                "Ignoring result for untracked prediction request"
            );
            return false;
        }
        self.pending_prediction = None;
        true
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    pub(super) fn begin_health_check(&mut self, base_url: String) {
        if self.health_check_in_progress {
            return;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = predict_api::check_health(&base_url);
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
        });
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
