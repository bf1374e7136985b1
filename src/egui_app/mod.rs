//! egui front end: plain state structs, the controller that mutates them,
//! and the renderer that draws them each frame.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
