//! egui renderer for the predictor form.

mod form_panel;
mod result_panel;
mod service_panel;
pub mod style;

use std::time::Duration;

use crate::config::AppSettings;
use crate::egui_app::controller::PredictorController;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText, Vec2};

/// Smallest window size that keeps the form readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(560.0, 520.0);
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: PredictorController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration.
    pub fn new() -> Result<Self, String> {
        let mut controller = PredictorController::new(AppSettings::default());
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        if controller.settings().check_health_on_startup {
            controller.check_service_health();
        }
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::same(12)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new("Algerian Forest Fire Predictor")
                            .size(28.0)
                            .strong()
                            .color(palette.accent_ember),
                    );
                    ui.label(
                        RichText::new("Enter meteorological values to estimate the Fire Weather Index")
                            .color(palette.text_muted),
                    );
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::symmetric(8, 4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                let (health_text, health_tone) = view_model::health_badge(&self.controller.ui.health);
                let mut recheck_clicked = false;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(22.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary))
                        .on_hover_text(status.log_text());
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add_enabled(
                                !matches!(
                                    self.controller.ui.health,
                                    crate::egui_app::state::ServiceHealth::Checking
                                ),
                                egui::Button::new("Check"),
                            )
                            .on_hover_text(self.controller.api_base_url())
                            .clicked()
                        {
                            recheck_clicked = true;
                        }
                        ui.label(
                            RichText::new(health_text).color(style::status_badge_color(health_tone)),
                        );
                    });
                });
                if recheck_clicked {
                    self.controller.check_service_health();
                }
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_header(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("predictor_scroll")
                .show(ui, |ui| {
                    self.render_service_settings(ui);
                    ui.add_space(8.0);
                    self.render_form(ui);
                    ui.add_space(16.0);
                    self.render_outcome(ui);
                });
        });
        if self.controller.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
