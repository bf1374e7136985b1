use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, Frame, Margin, RichText, Stroke};

impl EguiApp {
    /// Render the last prediction or the last error, whichever is set.
    pub(super) fn render_outcome(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let form = &self.controller.ui.form;
        if let Some(result) = form.result {
            Frame::new()
                .fill(palette.bg_tertiary)
                .stroke(Stroke::new(2.0, palette.success))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new("Prediction Result")
                            .size(20.0)
                            .strong()
                            .color(palette.success),
                    );
                    ui.label(
                        RichText::new(view_model::format_prediction(result))
                            .size(36.0)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.label(RichText::new(view_model::FWI_CAPTION).color(palette.text_muted));
                });
        }
        if let Some(error) = form.error.as_deref() {
            ui.add_space(8.0);
            Frame::new()
                .fill(palette.bg_tertiary)
                .stroke(style::outer_border())
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new("Error")
                            .size(18.0)
                            .strong()
                            .color(style::status_badge_color(style::StatusTone::Error)),
                    );
                    ui.label(RichText::new(error).color(palette.warning));
                });
        }
    }
}
