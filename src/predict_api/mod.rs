//! Client for the remote Fire Weather Index prediction service.

pub mod api;

pub use api::{
    HealthError, PredictError, PredictRequest, PredictResponse, check_health, predict,
};
