//! Library exports for the desktop client and its tests.
/// Application directory resolution.
pub mod app_dirs;
/// Settings file and API URL override.
pub mod config;
/// egui state, controller, and renderer.
pub mod egui_app;
/// Form fields and the numeric feature payload.
pub mod form;
mod http_client;
/// Tracing subscriber setup.
pub mod logging;
/// Prediction service client.
pub mod predict_api;
