//! Wire types and blocking calls for `/api/predict` and `/api/health`.

use serde::{Deserialize, Serialize};

use crate::form::FeatureVector;
use crate::http_client;

pub const PREDICT_PATH: &str = "/api/predict";
pub const HEALTH_PATH: &str = "/api/health";

const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_HEALTH_RESPONSE_BYTES: usize = 16 * 1024;

/// Request body: `{ "features": { ... } }`.
#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest {
    pub features: FeatureVector,
}

/// Successful prediction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredictResponse {
    /// Fire Weather Index estimate.
    pub prediction: f64,
}

/// Why a prediction request produced no value.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Message reported by the service, shown to the user verbatim.
    #[error("{0}")]
    Server(String),
    /// The service answered but the body carried no usable prediction.
    #[error("Malformed prediction response: {0}")]
    MalformedPrediction(String),
    /// The request never got an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),
}

/// Why the liveness probe did not report the service as up.
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("Service unhealthy: {0}")]
    Unhealthy(String),
    #[error("Invalid health response: {0}")]
    InvalidResponse(String),
    #[error("Network error: {0}")]
    Transport(String),
}

/// Send one prediction request and wait for the answer.
pub fn predict(base_url: &str, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
    let url = http_client::endpoint_url(base_url, PREDICT_PATH);
    let req = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(request) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_body(response, MAX_PREDICT_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            return Err(map_status_error(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_body(response, MAX_PREDICT_RESPONSE_BYTES)
        .map_err(|err| PredictError::MalformedPrediction(err.to_string()))?;
    parse_predict_response(&body)
}

/// Probe the service liveness endpoint.
pub fn check_health(base_url: &str) -> Result<(), HealthError> {
    let url = http_client::endpoint_url(base_url, HEALTH_PATH);
    let response = match http_client::agent()
        .get(&url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_body(response, MAX_HEALTH_RESPONSE_BYTES)
                .unwrap_or_else(|err| err.to_string());
            return Err(HealthError::Unhealthy(status_message(code, &body)));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(HealthError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_body(response, MAX_HEALTH_RESPONSE_BYTES)
        .map_err(|err| HealthError::InvalidResponse(err.to_string()))?;
    parse_health_response(&body)
}

#[derive(Debug, Deserialize)]
struct PredictResponseWire {
    prediction: Option<f64>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWire {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthWire {
    status: Option<String>,
}

fn parse_predict_response(body: &str) -> Result<PredictResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::MalformedPrediction(
            "Empty response body".to_string(),
        ));
    }
    let parsed: PredictResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::MalformedPrediction(format!("{err}: {trimmed}")))?;
    match (parsed.prediction, parsed.error) {
        (Some(prediction), _) if prediction.is_finite() => Ok(PredictResponse { prediction }),
        (_, Some(error)) if !error.trim().is_empty() => Err(PredictError::Server(error)),
        (Some(prediction), _) => Err(PredictError::MalformedPrediction(format!(
            "Prediction is not a finite number ({prediction})"
        ))),
        (None, _) => Err(PredictError::MalformedPrediction(
            "Missing prediction in response".to_string(),
        )),
    }
}

fn map_status_error(code: u16, body: &str) -> PredictError {
    let server_error = serde_json::from_str::<ErrorWire>(body.trim())
        .ok()
        .and_then(|wire| wire.error)
        .filter(|error| !error.trim().is_empty());
    match server_error {
        Some(error) => PredictError::Server(error),
        None => PredictError::Server(status_message(code, body)),
    }
}

fn status_message(code: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {code}")
    } else {
        format!("HTTP {code}: {trimmed}")
    }
}

fn parse_health_response(body: &str) -> Result<(), HealthError> {
    let trimmed = body.trim();
    let parsed: HealthWire = serde_json::from_str(trimmed)
        .map_err(|err| HealthError::InvalidResponse(format!("{err}: {trimmed}")))?;
    match parsed.status.as_deref() {
        Some(status) if status.eq_ignore_ascii_case("ok") => Ok(()),
        Some(status) => Err(HealthError::Unhealthy(format!("status {status}"))),
        None => Err(HealthError::InvalidResponse(
            "Missing status in response".to_string(),
        )),
    }
}
